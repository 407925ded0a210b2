use crate::seed::{SeedContext, Seeder};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use db::models::submission::{Model, SubmissionStatus};
use rand::Rng;
use sea_orm::{DatabaseTransaction, DbErr};
use std::f64::consts::PI;

const MISSING_BELOW: f64 = 0.12;
const LATE_BELOW: f64 = 0.22;
const GRADE_MEAN: f64 = 75.0;
const GRADE_STD_DEV: f64 = 12.0;

/// One outcome per (enrollment, assignment of that course).
pub struct SubmissionSeeder;

/// Standard normal sample (Box-Muller).
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen_range(f64::EPSILON..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Grade ~ Normal(75, 12), clamped to [0, 100], one decimal.
pub fn sample_grade<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let grade = (GRADE_MEAN + GRADE_STD_DEV * standard_normal(rng)).clamp(0.0, 100.0);
    (grade * 10.0).round() / 10.0
}

pub fn sample_outcome<R: Rng + ?Sized>(
    rng: &mut R,
    due_date: DateTime<Utc>,
) -> (SubmissionStatus, Option<f64>, Option<DateTime<Utc>>) {
    let r: f64 = rng.gen_range(0.0..1.0);
    if r < MISSING_BELOW {
        return (SubmissionStatus::Missing, None, None);
    }

    let grade = sample_grade(rng);
    if r < LATE_BELOW {
        let at = due_date + Duration::days(rng.gen_range(1..=4));
        (SubmissionStatus::Late, Some(grade), Some(at))
    } else {
        let at = due_date - Duration::days(rng.gen_range(0..=3));
        (SubmissionStatus::Submitted, Some(grade), Some(at))
    }
}

#[async_trait]
impl Seeder for SubmissionSeeder {
    async fn seed(&self, db: &DatabaseTransaction, ctx: &mut SeedContext) -> Result<(), DbErr> {
        let pairs: Vec<(i64, i64, DateTime<Utc>)> = ctx
            .enrollments
            .iter()
            .flat_map(|e| {
                ctx.assignments
                    .iter()
                    .filter(move |a| a.course_id == e.course_id)
                    .map(move |a| (e.user_id, a.id, a.due_date))
            })
            .collect();

        for (user_id, assignment_id, due_date) in pairs {
            let (status, grade, submitted_at) = sample_outcome(&mut ctx.rng, due_date);
            Model::record(db, assignment_id, user_id, status, grade, submitted_at).await?;
            ctx.submissions += 1;
        }
        Ok(())
    }
}
