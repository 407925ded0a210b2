use async_trait::async_trait;
use chrono::{DateTime, Utc};
use colored::*;
use db::models::{assignment, course, enrollment};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sea_orm::{DatabaseTransaction, DbErr};
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// One step of the demo data set.
#[async_trait]
pub trait Seeder: Send + Sync {
    async fn seed(&self, db: &DatabaseTransaction, ctx: &mut SeedContext) -> Result<(), DbErr>;
}

#[derive(Debug, Clone)]
pub struct SeedOptions {
    pub students: usize,
    /// Fixed seed for a reproducible data set; entropy when `None`.
    pub rng_seed: Option<u64>,
    /// Print colored per-step progress to stdout.
    pub report: bool,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            students: 30,
            rng_seed: None,
            report: false,
        }
    }
}

/// State threaded through the steps: the RNG and the rows created so far.
pub struct SeedContext {
    pub rng: StdRng,
    pub now: DateTime<Utc>,
    pub students: usize,
    pub admin_id: Option<i64>,
    pub prof_ids: Vec<i64>,
    pub student_ids: Vec<i64>,
    pub courses: Vec<course::Model>,
    pub enrollments: Vec<enrollment::Model>,
    pub assignments: Vec<assignment::Model>,
    pub submissions: u64,
}

impl SeedContext {
    pub fn new(options: &SeedOptions) -> Self {
        let rng = match options.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            now: Utc::now(),
            students: options.students,
            admin_id: None,
            prof_ids: Vec::new(),
            student_ids: Vec::new(),
            courses: Vec::new(),
            enrollments: Vec::new(),
            assignments: Vec::new(),
            submissions: 0,
        }
    }

    pub fn summary(&self) -> SeedSummary {
        SeedSummary {
            users: (self.admin_id.iter().count() + self.prof_ids.len() + self.student_ids.len())
                as u64,
            courses: self.courses.len() as u64,
            enrollments: self.enrollments.len() as u64,
            assignments: self.assignments.len() as u64,
            submissions: self.submissions,
        }
    }
}

/// Rows written by a seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub users: u64,
    pub courses: u64,
    pub enrollments: u64,
    pub assignments: u64,
    pub submissions: u64,
}

pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseTransaction,
    ctx: &mut SeedContext,
    report: bool,
) -> Result<(), DbErr> {
    if report {
        let base_msg = format!("Seeding {}", name.bold());
        let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
        print!("{}{} ", base_msg, dots);
        io::stdout().flush().ok();
    }

    let start = Instant::now();
    let result = seeder.seed(db, ctx).await;
    let elapsed = start.elapsed();

    match &result {
        Ok(()) => {
            tracing::info!(step = name, elapsed_ms = elapsed.as_millis() as u64, "seed step done");
            if report {
                let time_str = format!("({:.2?})", elapsed).dimmed();
                println!("{} {}", "done".green(), time_str);
            }
        }
        Err(e) => {
            tracing::error!(step = name, error = %e, "seed step failed");
            if report {
                println!("{}", "failed".red());
            }
        }
    }

    result
}
