use db::AnalyticsStore;
use db::models::user;

use crate::access::{self, Requester};
use crate::analytics::{self, AssignmentStats, CourseRef, CourseSummary, StudentProgress};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Entry point for the boundary layer.
///
/// The `*_for` pipelines run identity, existence, access and aggregation in
/// that order, so a missing course is reported as not found before anyone is
/// denied, and no aggregation runs for a denied requester.
pub struct AnalyticsService<S> {
    store: S,
}

impl<S> AnalyticsService<S>
where
    S: AnalyticsStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Looks up the user behind a request credential.
    pub async fn resolve_user(&self, user_id: i64) -> AnalyticsResult<user::Model> {
        self.store
            .get_user(user_id)
            .await?
            .ok_or(AnalyticsError::InvalidIdentity)
    }

    pub async fn resolve_requester(&self, user_id: i64) -> AnalyticsResult<Requester> {
        let user = self.resolve_user(user_id).await?;
        Ok(Requester::from(&user))
    }

    /// Course access by raw requester id. Unknown requesters are denied.
    pub async fn evaluate_course_access(&self, course_id: i64, requester_id: i64) -> bool {
        match self.resolve_requester(requester_id).await {
            Ok(requester) => access::can_access_course(&self.store, course_id, &requester).await,
            Err(e) => {
                tracing::debug!(error = %e, requester_id, "unresolved requester; denying");
                false
            }
        }
    }

    /// Student access by raw requester id. Unknown requesters are denied.
    pub async fn evaluate_student_access(&self, student_id: i64, requester_id: i64) -> bool {
        match self.resolve_requester(requester_id).await {
            Ok(requester) => access::can_access_student(&self.store, student_id, &requester).await,
            Err(e) => {
                tracing::debug!(error = %e, requester_id, "unresolved requester; denying");
                false
            }
        }
    }

    pub async fn compute_assignment_stats(&self, assignment_id: i64) -> AnalyticsResult<AssignmentStats> {
        self.store
            .get_assignment(assignment_id)
            .await?
            .ok_or_else(|| AnalyticsError::not_found("Assignment", assignment_id))?;
        Ok(analytics::assignment_stats(&self.store, assignment_id).await?)
    }

    pub async fn compute_course_summary(&self, course_id: i64) -> AnalyticsResult<CourseSummary> {
        let course = self
            .store
            .get_course(course_id)
            .await?
            .ok_or_else(|| AnalyticsError::not_found("Course", course_id))?;
        Ok(analytics::course_summary(&self.store, CourseRef::from(&course)).await?)
    }

    /// Never not-found: an unknown student has no records.
    pub async fn compute_student_progress(&self, student_id: i64) -> AnalyticsResult<StudentProgress> {
        Ok(analytics::student_progress(&self.store, student_id).await?)
    }

    pub async fn course_summary_for(
        &self,
        requester: &Requester,
        course_id: i64,
    ) -> AnalyticsResult<CourseSummary> {
        let course = self
            .store
            .get_course(course_id)
            .await?
            .ok_or_else(|| AnalyticsError::not_found("Course", course_id))?;

        if !access::can_access_course(&self.store, course.id, requester).await {
            tracing::warn!(requester_id = requester.id, course_id, "course summary denied");
            return Err(AnalyticsError::AccessDenied);
        }

        Ok(analytics::course_summary(&self.store, CourseRef::from(&course)).await?)
    }

    /// Assignment stats are visible to whoever may see the assignment's course.
    pub async fn assignment_stats_for(
        &self,
        requester: &Requester,
        assignment_id: i64,
    ) -> AnalyticsResult<AssignmentStats> {
        let assignment = self
            .store
            .get_assignment(assignment_id)
            .await?
            .ok_or_else(|| AnalyticsError::not_found("Assignment", assignment_id))?;

        if !access::can_access_course(&self.store, assignment.course_id, requester).await {
            tracing::warn!(
                requester_id = requester.id,
                assignment_id,
                course_id = assignment.course_id,
                "assignment stats denied"
            );
            return Err(AnalyticsError::AccessDenied);
        }

        Ok(analytics::assignment_stats(&self.store, assignment.id).await?)
    }

    pub async fn student_progress_for(
        &self,
        requester: &Requester,
        student_id: i64,
    ) -> AnalyticsResult<StudentProgress> {
        if !access::can_access_student(&self.store, student_id, requester).await {
            tracing::warn!(requester_id = requester.id, student_id, "student progress denied");
            return Err(AnalyticsError::AccessDenied);
        }

        Ok(analytics::student_progress(&self.store, student_id).await?)
    }
}
