use crate::seed::{SeedContext, Seeder};
use async_trait::async_trait;
use db::models::user::{Model, Role};
use sea_orm::{DatabaseTransaction, DbErr};

pub struct UserSeeder;

#[async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseTransaction, ctx: &mut SeedContext) -> Result<(), DbErr> {
        // Fixed staff
        ctx.admin_id = Some(Model::create(db, "Admin", Role::Admin).await?.id);
        for name in ["Prof A", "Prof B"] {
            ctx.prof_ids.push(Model::create(db, name, Role::Prof).await?.id);
        }

        for i in 1..=ctx.students {
            let student = Model::create(db, &format!("Student {:02}", i), Role::Student).await?;
            ctx.student_ids.push(student.id);
        }

        Ok(())
    }
}
