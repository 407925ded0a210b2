use crate::seed::{SeedContext, Seeder};
use async_trait::async_trait;
use chrono::Duration;
use db::models::assignment::Model;
use sea_orm::{DatabaseTransaction, DbErr};

const PER_COURSE: i64 = 5;

/// Five weekly assignments per course, the first due a week from now.
pub struct AssignmentSeeder;

#[async_trait]
impl Seeder for AssignmentSeeder {
    async fn seed(&self, db: &DatabaseTransaction, ctx: &mut SeedContext) -> Result<(), DbErr> {
        let course_ids: Vec<i64> = ctx.courses.iter().map(|c| c.id).collect();

        for course_id in course_ids {
            for j in 1..=PER_COURSE {
                let due_date = ctx.now + Duration::days(7 * j);
                let assignment = Model::create(db, course_id, &format!("Devoir {}", j), due_date).await?;
                ctx.assignments.push(assignment);
            }
        }
        Ok(())
    }
}
