use crate::seed::{SeedContext, Seeder};
use async_trait::async_trait;
use db::models::course::Model;
use sea_orm::{DatabaseTransaction, DbErr};

/// `(code, name, index into the seeded professors)`.
const COURSES: [(&str, &str, usize); 3] = [
    ("INF101", "Intro au génie logiciel", 0),
    ("DATA201", "Data & BI Foundations", 0),
    ("FIN305", "Fintech Analytics", 1),
];

pub struct CourseSeeder;

#[async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseTransaction, ctx: &mut SeedContext) -> Result<(), DbErr> {
        for (code, name, prof) in COURSES {
            let instructor_id = ctx.prof_ids.get(prof).copied();
            let course = Model::create(db, code, name, instructor_id).await?;
            ctx.courses.push(course);
        }
        Ok(())
    }
}
