pub mod memory;
pub mod models;
pub mod store;
pub mod test_utils;


pub use memory::MemoryStore;
pub use store::{
    AnalyticsStore, EnrolledCourse, EnrollmentFilter, GradeAggregate, SubmissionFilter,
    SubmissionScope,
};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;
use util::config;

/// Opens the configured database. `DATABASE_PATH` may be a full DSN or a
/// plain SQLite file path, which is created on first use.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let path_or_url = config::database_path();
    let url = if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        path_or_url
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(&path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);
    Database::connect(options).await
}
