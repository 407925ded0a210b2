//! Demo data generator for the analytics database.

pub mod seed;
pub mod seeds;

use db::models::user;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use thiserror::Error;

pub use seed::{SeedContext, SeedOptions, SeedSummary, Seeder, run_seeder};
use seeds::{
    assignment::AssignmentSeeder, course::CourseSeeder, enrollment::EnrollmentSeeder,
    submission::SubmissionSeeder, user::UserSeeder,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database already contains data")]
    AlreadySeeded,

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Seeds an empty database in one transaction. Nothing is written when any
/// step fails or when users already exist.
pub async fn seed_database(
    db: &DatabaseConnection,
    options: SeedOptions,
) -> Result<SeedSummary, SeedError> {
    if user::Entity::find().count(db).await? > 0 {
        return Err(SeedError::AlreadySeeded);
    }

    let txn = db.begin().await?;
    let mut ctx = SeedContext::new(&options);

    let steps: [(&dyn Seeder, &str); 5] = [
        (&UserSeeder, "User"),
        (&CourseSeeder, "Course"),
        (&EnrollmentSeeder, "Enrollment"),
        (&AssignmentSeeder, "Assignment"),
        (&SubmissionSeeder, "Submission"),
    ];

    for (seeder, name) in steps {
        run_seeder(seeder, name, &txn, &mut ctx, options.report).await?;
    }

    txn.commit().await?;

    let summary = ctx.summary();
    tracing::info!(?summary, "database seeded");
    Ok(summary)
}
