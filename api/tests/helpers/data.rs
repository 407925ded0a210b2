use chrono::{Duration, Utc};
use db::models::submission::SubmissionStatus;
use db::models::user::Role;
use db::models::{assignment, course, enrollment, submission, user};
use sea_orm::DatabaseConnection;

/// A small school:
/// - Prof A teaches INF101, Prof B teaches FIN305
/// - Alice is enrolled in INF101, Bob in FIN305
/// - INF101 has one assignment: Alice submitted (80.0), nobody else
/// - FIN305 has one assignment: Bob submitted late (60.0)
pub struct School {
    pub admin: user::Model,
    pub prof_a: user::Model,
    pub prof_b: user::Model,
    pub alice: user::Model,
    pub bob: user::Model,
    pub inf101: course::Model,
    pub fin305: course::Model,
    pub inf101_a1: assignment::Model,
    pub fin305_a1: assignment::Model,
}

pub async fn seed_school(db: &DatabaseConnection) -> School {
    let admin = user::Model::create(db, "Admin", Role::Admin).await.unwrap();
    let prof_a = user::Model::create(db, "Prof A", Role::Prof).await.unwrap();
    let prof_b = user::Model::create(db, "Prof B", Role::Prof).await.unwrap();
    let alice = user::Model::create(db, "Alice", Role::Student).await.unwrap();
    let bob = user::Model::create(db, "Bob", Role::Student).await.unwrap();

    let inf101 = course::Model::create(db, "INF101", "Intro au génie logiciel", Some(prof_a.id))
        .await
        .unwrap();
    let fin305 = course::Model::create(db, "FIN305", "Fintech Analytics", Some(prof_b.id))
        .await
        .unwrap();

    enrollment::Model::enroll(db, alice.id, inf101.id).await.unwrap();
    enrollment::Model::enroll(db, bob.id, fin305.id).await.unwrap();

    let due = Utc::now() + Duration::days(7);
    let inf101_a1 = assignment::Model::create(db, inf101.id, "Devoir 1", due)
        .await
        .unwrap();
    let fin305_a1 = assignment::Model::create(db, fin305.id, "Devoir 1", due)
        .await
        .unwrap();

    submission::Model::record(
        db,
        inf101_a1.id,
        alice.id,
        SubmissionStatus::Submitted,
        Some(80.0),
        Some(due - Duration::days(1)),
    )
    .await
    .unwrap();
    submission::Model::record(
        db,
        fin305_a1.id,
        bob.id,
        SubmissionStatus::Late,
        Some(60.0),
        Some(due + Duration::days(2)),
    )
    .await
    .unwrap();

    School {
        admin,
        prof_a,
        prof_b,
        alice,
        bob,
        inf101,
        fin305,
        inf101_a1,
        fin305_a1,
    }
}
