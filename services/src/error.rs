use sea_orm::DbErr;
use thiserror::Error;

pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Failures surfaced to the boundary layer.
///
/// `AccessDenied` is never turned into an empty result; callers map it to a
/// rejection distinct from a legitimate zero-record aggregation.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("requester identity could not be resolved")]
    InvalidIdentity,

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("access denied")]
    AccessDenied,

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl AnalyticsError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}
