//! The storage collaborator consumed by the access and aggregation logic.
//!
//! Every core operation takes an explicit `&impl AnalyticsStore` rather than
//! reaching for a global connection, so the same logic runs against SQLite in
//! production and against [`crate::memory::MemoryStore`] in unit tests.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait, Select,
};

use crate::models::{assignment, course, enrollment, submission, user};
use crate::models::submission::SubmissionStatus;

/// Which submission rows a count or grade aggregate ranges over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionScope {
    /// Rows of one assignment.
    Assignment(i64),
    /// Rows of every assignment belonging to one course.
    Course(i64),
    /// Rows of one student across all courses.
    Student(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionFilter {
    pub scope: SubmissionScope,
    pub status: Option<SubmissionStatus>,
}

impl SubmissionFilter {
    pub fn new(scope: SubmissionScope) -> Self {
        Self {
            scope,
            status: None,
        }
    }

    pub fn with_status(mut self, status: SubmissionStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Restricts enrollments by student, course and/or the course's instructor.
/// Unset fields do not filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollmentFilter {
    pub user_id: Option<i64>,
    pub course_id: Option<i64>,
    pub instructor_id: Option<i64>,
}

impl EnrollmentFilter {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }

    pub fn for_course(course_id: i64) -> Self {
        Self {
            course_id: Some(course_id),
            ..Default::default()
        }
    }

    pub fn taught_by(mut self, instructor_id: i64) -> Self {
        self.instructor_id = Some(instructor_id);
        self
    }
}

/// An enrollment together with the instructor of its course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrolledCourse {
    pub enrollment_id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub instructor_id: Option<i64>,
}

/// Statistics over the non-null grades in a scope. `avg`, `min` and `max`
/// are `None` when `graded == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradeAggregate {
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub graded: u64,
}

#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    async fn get_user(&self, id: i64) -> Result<Option<user::Model>, DbErr>;

    async fn get_course(&self, id: i64) -> Result<Option<course::Model>, DbErr>;

    async fn get_assignment(&self, id: i64) -> Result<Option<assignment::Model>, DbErr>;

    async fn find_enrollment(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<enrollment::Model>, DbErr>;

    /// Number of distinct students among the matching enrollments.
    async fn count_enrollments(&self, filter: EnrollmentFilter) -> Result<u64, DbErr>;

    async fn list_enrollments_joined_to_course(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<Vec<EnrolledCourse>, DbErr>;

    async fn count_assignments(&self, course_id: i64) -> Result<u64, DbErr>;

    async fn count_submissions(&self, filter: SubmissionFilter) -> Result<u64, DbErr>;

    async fn aggregate_grade(&self, filter: SubmissionFilter) -> Result<GradeAggregate, DbErr>;
}

#[derive(Debug, FromQueryResult)]
struct GradeRow {
    avg: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    graded: i64,
}

fn grade_col() -> Expr {
    Expr::col((submission::Entity, submission::Column::Grade))
}

fn scoped_submissions(filter: SubmissionFilter) -> Select<submission::Entity> {
    let query = match filter.scope {
        SubmissionScope::Assignment(id) => {
            submission::Entity::find().filter(submission::Column::AssignmentId.eq(id))
        }
        SubmissionScope::Course(id) => submission::Entity::find()
            .join(JoinType::InnerJoin, submission::Relation::Assignment.def())
            .filter(assignment::Column::CourseId.eq(id)),
        SubmissionScope::Student(id) => {
            submission::Entity::find().filter(submission::Column::UserId.eq(id))
        }
    };

    match filter.status {
        Some(status) => query.filter(submission::Column::Status.eq(status)),
        None => query,
    }
}

fn filtered_enrollments(filter: EnrollmentFilter) -> Select<enrollment::Entity> {
    let mut query = enrollment::Entity::find();
    if let Some(user_id) = filter.user_id {
        query = query.filter(enrollment::Column::UserId.eq(user_id));
    }
    if let Some(course_id) = filter.course_id {
        query = query.filter(enrollment::Column::CourseId.eq(course_id));
    }
    query
}

#[async_trait]
impl AnalyticsStore for DatabaseConnection {
    async fn get_user(&self, id: i64) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find_by_id(id).one(self).await
    }

    async fn get_course(&self, id: i64) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(id).one(self).await
    }

    async fn get_assignment(&self, id: i64) -> Result<Option<assignment::Model>, DbErr> {
        assignment::Entity::find_by_id(id).one(self).await
    }

    async fn find_enrollment(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<enrollment::Model>, DbErr> {
        enrollment::Entity::find()
            .filter(enrollment::Column::UserId.eq(user_id))
            .filter(enrollment::Column::CourseId.eq(course_id))
            .one(self)
            .await
    }

    async fn count_enrollments(&self, filter: EnrollmentFilter) -> Result<u64, DbErr> {
        let mut query = filtered_enrollments(filter)
            .select_only()
            .column(enrollment::Column::UserId)
            .distinct();

        if let Some(instructor_id) = filter.instructor_id {
            query = query
                .join(JoinType::InnerJoin, enrollment::Relation::Course.def())
                .filter(course::Column::InstructorId.eq(instructor_id));
        }

        query.count(self).await
    }

    async fn list_enrollments_joined_to_course(
        &self,
        filter: EnrollmentFilter,
    ) -> Result<Vec<EnrolledCourse>, DbErr> {
        let mut query = filtered_enrollments(filter).find_also_related(course::Entity);
        if let Some(instructor_id) = filter.instructor_id {
            query = query.filter(course::Column::InstructorId.eq(instructor_id));
        }

        let rows = query.all(self).await?;
        Ok(rows
            .into_iter()
            .map(|(enrollment, course)| EnrolledCourse {
                enrollment_id: enrollment.id,
                user_id: enrollment.user_id,
                course_id: enrollment.course_id,
                instructor_id: course.and_then(|c| c.instructor_id),
            })
            .collect())
    }

    async fn count_assignments(&self, course_id: i64) -> Result<u64, DbErr> {
        assignment::Entity::find()
            .filter(assignment::Column::CourseId.eq(course_id))
            .count(self)
            .await
    }

    async fn count_submissions(&self, filter: SubmissionFilter) -> Result<u64, DbErr> {
        scoped_submissions(filter).count(self).await
    }

    async fn aggregate_grade(&self, filter: SubmissionFilter) -> Result<GradeAggregate, DbErr> {
        let row = scoped_submissions(filter)
            .filter(submission::Column::Grade.is_not_null())
            .select_only()
            .column_as(Expr::expr(Func::avg(grade_col())), "avg")
            .column_as(Expr::expr(Func::min(grade_col())), "min")
            .column_as(Expr::expr(Func::max(grade_col())), "max")
            .column_as(Expr::expr(Func::count(grade_col())), "graded")
            .into_model::<GradeRow>()
            .one(self)
            .await?;

        Ok(match row {
            Some(row) if row.graded > 0 => GradeAggregate {
                avg: row.avg,
                min: row.min,
                max: row.max,
                graded: row.graded as u64,
            },
            _ => GradeAggregate::default(),
        })
    }
}
