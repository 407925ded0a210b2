//! In-memory [`AnalyticsStore`] for exercising the core logic without SQLite.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::models::submission::{self, SubmissionStatus};
use crate::models::user::{self, Role};
use crate::models::{assignment, course, enrollment};
use crate::store::{
    AnalyticsStore, EnrolledCourse, EnrollmentFilter, GradeAggregate, SubmissionFilter,
    SubmissionScope,
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, user::Model>,
    courses: BTreeMap<i64, course::Model>,
    enrollments: BTreeMap<i64, enrollment::Model>,
    assignments: BTreeMap<i64, assignment::Model>,
    submissions: BTreeMap<i64, submission::Model>,
}

fn next_id<V>(table: &BTreeMap<i64, V>) -> i64 {
    table.keys().next_back().map_or(1, |id| id + 1)
}

/// Holds the five tables in maps and enforces the same uniqueness rules as
/// the migrated schema.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, DbErr> {
        self.tables
            .read()
            .map_err(|_| DbErr::Custom("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>, DbErr> {
        self.tables
            .write()
            .map_err(|_| DbErr::Custom("memory store lock poisoned".into()))
    }

    pub fn add_user(&self, name: &str, role: Role) -> Result<user::Model, DbErr> {
        self.add_user_with_role_text(name, &role.to_string())
    }

    /// Inserts a user with an arbitrary stored role, including unrecognised ones.
    pub fn add_user_with_role_text(&self, name: &str, role: &str) -> Result<user::Model, DbErr> {
        let mut tables = self.write()?;
        let model = user::Model {
            id: next_id(&tables.users),
            name: name.to_owned(),
            role: role.to_owned(),
        };
        tables.users.insert(model.id, model.clone());
        Ok(model)
    }

    pub fn add_course(
        &self,
        code: &str,
        name: &str,
        instructor_id: Option<i64>,
    ) -> Result<course::Model, DbErr> {
        let mut tables = self.write()?;
        if tables.courses.values().any(|c| c.code == code) {
            return Err(DbErr::Custom(format!("course code '{}' already exists", code)));
        }
        let model = course::Model {
            id: next_id(&tables.courses),
            code: code.to_owned(),
            name: name.to_owned(),
            instructor_id,
        };
        tables.courses.insert(model.id, model.clone());
        Ok(model)
    }

    pub fn enroll(&self, user_id: i64, course_id: i64) -> Result<enrollment::Model, DbErr> {
        let mut tables = self.write()?;
        if tables
            .enrollments
            .values()
            .any(|e| e.user_id == user_id && e.course_id == course_id)
        {
            return Err(DbErr::Custom(format!(
                "user {} is already enrolled in course {}",
                user_id, course_id
            )));
        }
        let model = enrollment::Model {
            id: next_id(&tables.enrollments),
            user_id,
            course_id,
        };
        tables.enrollments.insert(model.id, model.clone());
        Ok(model)
    }

    pub fn add_assignment(
        &self,
        course_id: i64,
        title: &str,
        due_date: DateTime<Utc>,
    ) -> Result<assignment::Model, DbErr> {
        let mut tables = self.write()?;
        let model = assignment::Model {
            id: next_id(&tables.assignments),
            course_id,
            title: title.to_owned(),
            due_date,
        };
        tables.assignments.insert(model.id, model.clone());
        Ok(model)
    }

    pub fn record_submission(
        &self,
        assignment_id: i64,
        user_id: i64,
        status: SubmissionStatus,
        grade: Option<f64>,
        submitted_at: Option<DateTime<Utc>>,
    ) -> Result<submission::Model, DbErr> {
        submission::validate_outcome(status, grade, submitted_at)?;

        let mut tables = self.write()?;
        if tables
            .submissions
            .values()
            .any(|s| s.assignment_id == assignment_id && s.user_id == user_id)
        {
            return Err(DbErr::Custom(format!(
                "user {} already has a submission for assignment {}",
                user_id, assignment_id
            )));
        }
        let model = submission::Model {
            id: next_id(&tables.submissions),
            assignment_id,
            user_id,
            status,
            grade,
            submitted_at,
        };
        tables.submissions.insert(model.id, model.clone());
        Ok(model)
    }
}

impl Tables {
    fn matches_enrollment(&self, e: &enrollment::Model, filter: &EnrollmentFilter) -> bool {
        if filter.user_id.is_some_and(|id| e.user_id != id) {
            return false;
        }
        if filter.course_id.is_some_and(|id| e.course_id != id) {
            return false;
        }
        match filter.instructor_id {
            Some(id) => self
                .courses
                .get(&e.course_id)
                .is_some_and(|c| c.instructor_id == Some(id)),
            None => true,
        }
    }

    fn matches_submission(&self, s: &submission::Model, filter: &SubmissionFilter) -> bool {
        if filter.status.is_some_and(|status| s.status != status) {
            return false;
        }
        match filter.scope {
            SubmissionScope::Assignment(id) => s.assignment_id == id,
            SubmissionScope::Course(id) => self
                .assignments
                .get(&s.assignment_id)
                .is_some_and(|a| a.course_id == id),
            SubmissionScope::Student(id) => s.user_id == id,
        }
    }
}

#[async_trait]
impl AnalyticsStore for MemoryStore {
    async fn get_user(&self, id: i64) -> Result<Option<user::Model>, DbErr> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn get_course(&self, id: i64) -> Result<Option<course::Model>, DbErr> {
        Ok(self.read()?.courses.get(&id).cloned())
    }

    async fn get_assignment(&self, id: i64) -> Result<Option<assignment::Model>, DbErr> {
        Ok(self.read()?.assignments.get(&id).cloned())
    }

    async fn find_enrollment(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<enrollment::Model>, DbErr> {
        Ok(self
            .read()?
            .enrollments
            .values()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .cloned())
    }

    async fn count_enrollments(&self, filter: EnrollmentFilter) -> Result<u64, DbErr> {
        let tables = self.read()?;
        let mut students: Vec<i64> = tables
            .enrollments
            .values()
            .filter(|e| tables.matches_enrollment(e, &filter))
            .map(|e| e.user_id)
            .collect();
        students.sort_unstable();
        students.dedup();
        Ok(students.len() as u64)
    }

    async fn list_enrollments_joined_to_course(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<Vec<EnrolledCourse>, DbErr> {
        let tables = self.read()?;
        Ok(tables
            .enrollments
            .values()
            .filter(|e| tables.matches_enrollment(e, &filter))
            .map(|e| EnrolledCourse {
                enrollment_id: e.id,
                user_id: e.user_id,
                course_id: e.course_id,
                instructor_id: tables.courses.get(&e.course_id).and_then(|c| c.instructor_id),
            })
            .collect())
    }

    async fn count_assignments(&self, course_id: i64) -> Result<u64, DbErr> {
        Ok(self
            .read()?
            .assignments
            .values()
            .filter(|a| a.course_id == course_id)
            .count() as u64)
    }

    async fn count_submissions(&self, filter: SubmissionFilter) -> Result<u64, DbErr> {
        let tables = self.read()?;
        Ok(tables
            .submissions
            .values()
            .filter(|s| tables.matches_submission(s, &filter))
            .count() as u64)
    }

    async fn aggregate_grade(&self, filter: SubmissionFilter) -> Result<GradeAggregate, DbErr> {
        let tables = self.read()?;
        let grades: Vec<f64> = tables
            .submissions
            .values()
            .filter(|s| tables.matches_submission(s, &filter))
            .filter_map(|s| s.grade)
            .collect();

        if grades.is_empty() {
            return Ok(GradeAggregate::default());
        }

        let sum: f64 = grades.iter().sum();
        Ok(GradeAggregate {
            avg: Some(sum / grades.len() as f64),
            min: grades.iter().copied().reduce(f64::min),
            max: grades.iter().copied().reduce(f64::max),
            graded: grades.len() as u64,
        })
    }
}
