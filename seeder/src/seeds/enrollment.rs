use crate::seed::{SeedContext, Seeder};
use async_trait::async_trait;
use db::models::enrollment::Model;
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{DatabaseTransaction, DbErr};

/// Enrolls every student in two or three distinct random courses.
pub struct EnrollmentSeeder;

#[async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseTransaction, ctx: &mut SeedContext) -> Result<(), DbErr> {
        let course_ids: Vec<i64> = ctx.courses.iter().map(|c| c.id).collect();
        let student_ids = ctx.student_ids.clone();

        for student_id in student_ids {
            let k = ctx.rng.gen_range(2..=3).min(course_ids.len());
            let picked: Vec<i64> = course_ids
                .choose_multiple(&mut ctx.rng, k)
                .copied()
                .collect();

            for course_id in picked {
                let enrollment = Model::enroll(db, student_id, course_id).await?;
                ctx.enrollments.push(enrollment);
            }
        }
        Ok(())
    }
}
