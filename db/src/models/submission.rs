use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

/// Outcome of one student on one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// Handed in on or before the due date.
    #[sea_orm(string_value = "SUBMITTED")]
    Submitted,
    /// Handed in after the due date.
    #[sea_orm(string_value = "LATE")]
    Late,
    /// Never handed in.
    #[sea_orm(string_value = "MISSING")]
    Missing,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str = match self {
            SubmissionStatus::Submitted => "SUBMITTED",
            SubmissionStatus::Late => "LATE",
            SubmissionStatus::Missing => "MISSING",
        };
        write!(f, "{}", status_str)
    }
}

/// A submission record. At most one per `(assignment_id, user_id)`.
///
/// `grade` and `submitted_at` are only ever present when work was handed in;
/// an absent grade is distinct from a grade of zero.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub status: SubmissionStatus,
    pub grade: Option<f64>,
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment::Entity",
        from = "Column::AssignmentId",
        to = "super::assignment::Column::Id"
    )]
    Assignment,

    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Rejects outcomes that contradict their status: a `MISSING` record carries
/// neither a grade nor a submission time.
pub fn validate_outcome(
    status: SubmissionStatus,
    grade: Option<f64>,
    submitted_at: Option<DateTime<Utc>>,
) -> Result<(), DbErr> {
    if status == SubmissionStatus::Missing && (grade.is_some() || submitted_at.is_some()) {
        return Err(DbErr::Custom(
            "a MISSING submission cannot have a grade or submission time".into(),
        ));
    }
    if grade.is_some_and(|g| !g.is_finite()) {
        return Err(DbErr::Custom("grade must be a finite number".into()));
    }
    Ok(())
}

impl Model {
    /// Records the outcome of `user_id` on `assignment_id`.
    ///
    /// A second record for the same pair is rejected by the unique index.
    pub async fn record<C>(
        db: &C,
        assignment_id: i64,
        user_id: i64,
        status: SubmissionStatus,
        grade: Option<f64>,
        submitted_at: Option<DateTime<Utc>>,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        validate_outcome(status, grade, submitted_at)?;

        ActiveModel {
            assignment_id: Set(assignment_id),
            user_id: Set(user_id),
            status: Set(status),
            grade: Set(grade),
            submitted_at: Set(submitted_at),
            ..Default::default()
        }
        .insert(db)
        .await
    }
}
