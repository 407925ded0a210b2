use colored::*;
use seeder::{SeedError, SeedOptions, seed_database};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let options = parse_args();
    let db = db::connect().await.expect("Failed to connect to database");

    match seed_database(&db, options).await {
        Ok(summary) => println!(
            "{} {} users, {} courses, {} enrollments, {} assignments, {} submissions",
            "Seeded".green().bold(),
            summary.users,
            summary.courses,
            summary.enrollments,
            summary.assignments,
            summary.submissions
        ),
        Err(SeedError::AlreadySeeded) => {
            println!("{}", "Database already seeded; run `migration fresh` first.".yellow());
        }
        Err(e) => {
            eprintln!("{} {}", "Seeding failed:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// `seeder [--students N] [--seed S]`
fn parse_args() -> SeedOptions {
    let mut options = SeedOptions {
        report: true,
        ..Default::default()
    };
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--students" => {
                options.students = iter
                    .next()
                    .and_then(|v| v.parse().ok())
                    .expect("--students expects a positive integer");
            }
            "--seed" => {
                options.rng_seed = Some(
                    iter.next()
                        .and_then(|v| v.parse().ok())
                        .expect("--seed expects an integer"),
                );
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(2);
            }
        }
    }

    options
}
