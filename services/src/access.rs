//! Who may view analytics for a course or a student.
//!
//! Both predicates fail closed: an unrecognised role, a missing course and a
//! storage failure all deny.

use db::models::user::{self, Role};
use db::{AnalyticsStore, EnrollmentFilter};
use sea_orm::DbErr;

/// The resolved identity behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub id: i64,
    /// `None` when the stored role is not one this system knows.
    pub role: Option<Role>,
}

impl From<&user::Model> for Requester {
    fn from(user: &user::Model) -> Self {
        Self {
            id: user.id,
            role: user.role(),
        }
    }
}

fn deny_on_error(result: Result<bool, DbErr>, check: &'static str, requester: &Requester, target: i64) -> bool {
    match result {
        Ok(allowed) => allowed,
        Err(e) => {
            tracing::warn!(
                error = %e,
                requester_id = requester.id,
                target,
                check,
                "DB error while evaluating access; denying"
            );
            false
        }
    }
}

async fn course_visible<S>(store: &S, course_id: i64, requester_id: i64, role: Role) -> Result<bool, DbErr>
where
    S: AnalyticsStore + ?Sized,
{
    let Some(course) = store.get_course(course_id).await? else {
        return Ok(false);
    };

    Ok(match role {
        Role::Admin => true,
        Role::Prof => course.instructor_id == Some(requester_id),
        Role::Student => store.find_enrollment(requester_id, course_id).await?.is_some(),
    })
}

/// Whether `requester` may view analytics of course `course_id`.
///
/// Admins always may. Professors may for courses they teach, students for
/// courses they are enrolled in.
pub async fn can_access_course<S>(store: &S, course_id: i64, requester: &Requester) -> bool
where
    S: AnalyticsStore + ?Sized,
{
    let role = match requester.role {
        Some(Role::Admin) => return true,
        Some(role) => role,
        None => return false,
    };

    let result = course_visible(store, course_id, requester.id, role).await;
    deny_on_error(result, "course", requester, course_id)
}

/// Whether `requester` may view the progress of student `student_id`.
///
/// Students only see themselves. Professors see students enrolled in at
/// least one course they teach.
pub async fn can_access_student<S>(store: &S, student_id: i64, requester: &Requester) -> bool
where
    S: AnalyticsStore + ?Sized,
{
    match requester.role {
        Some(Role::Admin) => true,
        Some(Role::Student) => requester.id == student_id,
        Some(Role::Prof) => {
            let filter = EnrollmentFilter::for_user(student_id).taught_by(requester.id);
            let result = store.count_enrollments(filter).await.map(|n| n > 0);
            deny_on_error(result, "student", requester, student_id)
        }
        None => false,
    }
}
