//! Counts, rates and grade statistics over submission records.
//!
//! Nothing here checks that the scope entity exists: an unknown assignment,
//! course or student simply has no rows and yields zero counts with no
//! grade statistics. Callers that need a not-found answer look the entity up
//! first (see [`crate::AnalyticsService`]).

use db::models::course;
use db::models::submission::SubmissionStatus;
use db::{AnalyticsStore, EnrollmentFilter, GradeAggregate, SubmissionFilter, SubmissionScope};
use sea_orm::DbErr;
use serde::Serialize;

/// Rounds `value` to `places` decimal places, ties to even.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

/// `numerator / denominator` to 4 places, or exactly `0.0` for an empty
/// denominator.
pub fn rate(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round_to(numerator as f64 / denominator as f64, 4)
}

/// Mean of the graded records to 2 places. `None` when nothing is graded,
/// which is not the same as an average of zero.
pub fn grade_average(grades: &GradeAggregate) -> Option<f64> {
    if grades.graded == 0 {
        return None;
    }
    grades.avg.map(|avg| round_to(avg, 2))
}

/// Rows in a scope split by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: u64,
    pub submitted: u64,
    pub late: u64,
    pub missing: u64,
}

impl StatusCounts {
    pub async fn load<S>(store: &S, scope: SubmissionScope) -> Result<Self, DbErr>
    where
        S: AnalyticsStore + ?Sized,
    {
        let all = SubmissionFilter::new(scope);
        Ok(Self {
            total: store.count_submissions(all).await?,
            submitted: store
                .count_submissions(all.with_status(SubmissionStatus::Submitted))
                .await?,
            late: store
                .count_submissions(all.with_status(SubmissionStatus::Late))
                .await?,
            missing: store
                .count_submissions(all.with_status(SubmissionStatus::Missing))
                .await?,
        })
    }

    /// Share of records handed in at all, on time or late.
    pub fn submission_rate(&self) -> f64 {
        rate(self.submitted + self.late, self.total)
    }

    pub fn late_rate(&self) -> f64 {
        rate(self.late, self.total)
    }

    pub fn missing_rate(&self) -> f64 {
        rate(self.missing, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentStats {
    pub assignment_id: i64,
    pub total_records: u64,
    pub submitted: u64,
    pub late: u64,
    pub missing: u64,
    pub average: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Identifying fields of the summarised course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRef {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl From<&course::Model> for CourseRef {
    fn from(course: &course::Model) -> Self {
        Self {
            id: course.id,
            code: course.code.clone(),
            name: course.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub course: CourseRef,
    pub students: u64,
    pub assignments: u64,
    pub total_submission_records: u64,
    pub submitted: u64,
    pub late: u64,
    pub missing: u64,
    pub submission_rate: f64,
    pub late_rate: f64,
    pub missing_rate: f64,
    pub course_average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProgress {
    pub student_id: i64,
    pub total_submission_records: u64,
    pub submitted: u64,
    pub late: u64,
    pub missing: u64,
    pub submission_rate: f64,
    pub late_rate: f64,
    pub missing_rate: f64,
    pub student_average: Option<f64>,
}

pub async fn assignment_stats<S>(store: &S, assignment_id: i64) -> Result<AssignmentStats, DbErr>
where
    S: AnalyticsStore + ?Sized,
{
    let scope = SubmissionScope::Assignment(assignment_id);
    let counts = StatusCounts::load(store, scope).await?;
    let grades = store.aggregate_grade(SubmissionFilter::new(scope)).await?;

    Ok(AssignmentStats {
        assignment_id,
        total_records: counts.total,
        submitted: counts.submitted,
        late: counts.late,
        missing: counts.missing,
        average: grade_average(&grades),
        min: grades.min,
        max: grades.max,
    })
}

/// Summary of `course`. Only `course.id` drives the aggregation.
pub async fn course_summary<S>(store: &S, course: CourseRef) -> Result<CourseSummary, DbErr>
where
    S: AnalyticsStore + ?Sized,
{
    let scope = SubmissionScope::Course(course.id);
    let students = store
        .count_enrollments(EnrollmentFilter::for_course(course.id))
        .await?;
    let assignments = store.count_assignments(course.id).await?;
    let counts = StatusCounts::load(store, scope).await?;
    let grades = store.aggregate_grade(SubmissionFilter::new(scope)).await?;

    Ok(CourseSummary {
        course,
        students,
        assignments,
        total_submission_records: counts.total,
        submitted: counts.submitted,
        late: counts.late,
        missing: counts.missing,
        submission_rate: counts.submission_rate(),
        late_rate: counts.late_rate(),
        missing_rate: counts.missing_rate(),
        course_average: grade_average(&grades),
    })
}

pub async fn student_progress<S>(store: &S, student_id: i64) -> Result<StudentProgress, DbErr>
where
    S: AnalyticsStore + ?Sized,
{
    let scope = SubmissionScope::Student(student_id);
    let counts = StatusCounts::load(store, scope).await?;
    let grades = store.aggregate_grade(SubmissionFilter::new(scope)).await?;

    Ok(StudentProgress {
        student_id,
        total_submission_records: counts.total,
        submitted: counts.submitted,
        late: counts.late,
        missing: counts.missing,
        submission_rate: counts.submission_rate(),
        late_rate: counts.late_rate(),
        missing_rate: counts.missing_rate(),
        student_average: grade_average(&grades),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use db::MemoryStore;
    use db::models::user::Role;

    #[test]
    fn rate_of_empty_total_is_zero() {
        assert_eq!(rate(0, 0), 0.0);
        assert_eq!(rate(7, 0), 0.0);
    }

    #[test]
    fn rate_stays_in_unit_interval() {
        for total in 1..=25u64 {
            for x in 0..=total {
                let r = rate(x, total);
                assert!((0.0..=1.0).contains(&r), "rate({x}, {total}) = {r}");
            }
        }
        assert_eq!(rate(1, 3), 0.3333);
        assert_eq!(rate(2, 3), 0.6667);
        assert_eq!(rate(5, 5), 1.0);
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(72.456, 2), 72.46);
        assert_eq!(round_to(0.12346, 4), 0.1235);
        assert_eq!(round_to(75.0, 1), 75.0);
    }

    #[test]
    fn exact_ties_round_to_even() {
        // 5 / 160 is exactly 0.03125 and 74.125 is exact in binary.
        assert_eq!(rate(5, 160), 0.0312);
        assert_eq!(round_to(74.125, 2), 74.12);
        assert_eq!(round_to(74.375, 2), 74.38);

        let grades = GradeAggregate {
            avg: Some(74.125),
            min: Some(60.0),
            max: Some(90.0),
            graded: 8,
        };
        assert_eq!(grade_average(&grades), Some(74.12));
    }

    #[test]
    fn average_of_nothing_is_none_not_zero() {
        assert_eq!(grade_average(&GradeAggregate::default()), None);

        let zeros = GradeAggregate {
            avg: Some(0.0),
            min: Some(0.0),
            max: Some(0.0),
            graded: 2,
        };
        assert_eq!(grade_average(&zeros), Some(0.0));
    }

    #[tokio::test]
    async fn average_of_eighty_and_ninety() {
        let store = MemoryStore::new();
        let course = store.add_course("INF101", "Intro", None).unwrap();
        let a = store.add_assignment(course.id, "Devoir 1", Utc::now()).unwrap();
        for (name, grade) in [("S1", 80.0), ("S2", 90.0)] {
            let s = store.add_user(name, Role::Student).unwrap();
            store
                .record_submission(a.id, s.id, SubmissionStatus::Submitted, Some(grade), Some(Utc::now()))
                .unwrap();
        }

        let stats = assignment_stats(&store, a.id).await.unwrap();
        assert_eq!(stats.average, Some(85.0));
        assert_eq!(stats.min, Some(80.0));
        assert_eq!(stats.max, Some(90.0));
    }

    #[tokio::test]
    async fn assignment_stats_split_by_status() {
        let store = MemoryStore::new();
        let course = store.add_course("INF101", "Intro", None).unwrap();
        let due = Utc::now();
        let a = store.add_assignment(course.id, "Devoir 1", due).unwrap();

        let on_time = [70.0, 80.0, 90.0, 60.0, 100.0, 75.0];
        let late = [55.0, 65.0];
        let mut n = 0;
        let mut student = || {
            n += 1;
            store.add_user(&format!("Student {n:02}"), Role::Student).unwrap().id
        };
        let mut rows = Vec::new();
        for g in on_time {
            rows.push((student(), SubmissionStatus::Submitted, Some(g), Some(due)));
        }
        for g in late {
            rows.push((student(), SubmissionStatus::Late, Some(g), Some(due + Duration::days(2))));
        }
        for _ in 0..2 {
            rows.push((student(), SubmissionStatus::Missing, None, None));
        }
        for (user_id, status, grade, at) in rows {
            store.record_submission(a.id, user_id, status, grade, at).unwrap();
        }

        let stats = assignment_stats(&store, a.id).await.unwrap();
        assert_eq!(stats.total_records, 10);
        assert_eq!(stats.submitted, 6);
        assert_eq!(stats.late, 2);
        assert_eq!(stats.missing, 2);
        // (70+80+90+60+100+75+55+65) / 8
        assert_eq!(stats.average, Some(74.38));
        assert_eq!(stats.min, Some(55.0));
        assert_eq!(stats.max, Some(100.0));
    }

    #[tokio::test]
    async fn everyone_on_time_gives_full_submission_rate() {
        let store = MemoryStore::new();
        let prof = store.add_user("Prof", Role::Prof).unwrap();
        let course = store.add_course("DATA201", "Data", Some(prof.id)).unwrap();
        let assignments: Vec<_> = (1..=3)
            .map(|j| {
                store
                    .add_assignment(course.id, &format!("Devoir {j}"), Utc::now())
                    .unwrap()
            })
            .collect();
        for i in 1..=5 {
            let s = store.add_user(&format!("Student {i:02}"), Role::Student).unwrap();
            store.enroll(s.id, course.id).unwrap();
            for a in &assignments {
                store
                    .record_submission(a.id, s.id, SubmissionStatus::Submitted, Some(80.0), Some(Utc::now()))
                    .unwrap();
            }
        }

        let summary = course_summary(&store, CourseRef::from(&course)).await.unwrap();
        assert_eq!(summary.students, 5);
        assert_eq!(summary.assignments, 3);
        assert_eq!(summary.total_submission_records, 15);
        assert_eq!(summary.submission_rate, 1.0);
        assert_eq!(summary.late_rate, 0.0);
        assert_eq!(summary.missing_rate, 0.0);
        assert_eq!(summary.course_average, Some(80.0));
        assert_eq!(summary.course.code, "DATA201");
    }

    #[tokio::test]
    async fn unknown_course_summarises_to_zero() {
        let store = MemoryStore::new();
        let ghost = CourseRef {
            id: 404,
            code: String::new(),
            name: String::new(),
        };
        let summary = course_summary(&store, ghost).await.unwrap();
        assert_eq!(summary.students, 0);
        assert_eq!(summary.assignments, 0);
        assert_eq!(summary.total_submission_records, 0);
        assert_eq!(summary.submission_rate, 0.0);
        assert_eq!(summary.course_average, None);
    }

    #[tokio::test]
    async fn student_progress_spans_courses() {
        let store = MemoryStore::new();
        let s = store.add_user("Alice", Role::Student).unwrap();
        let c1 = store.add_course("INF101", "Intro", None).unwrap();
        let c2 = store.add_course("FIN305", "Fintech", None).unwrap();
        let a1 = store.add_assignment(c1.id, "Devoir 1", Utc::now()).unwrap();
        let a2 = store.add_assignment(c2.id, "Devoir 1", Utc::now()).unwrap();
        let a3 = store.add_assignment(c2.id, "Devoir 2", Utc::now()).unwrap();
        store
            .record_submission(a1.id, s.id, SubmissionStatus::Late, Some(50.0), Some(Utc::now()))
            .unwrap();
        store
            .record_submission(a2.id, s.id, SubmissionStatus::Submitted, Some(91.5), Some(Utc::now()))
            .unwrap();
        store
            .record_submission(a3.id, s.id, SubmissionStatus::Missing, None, None)
            .unwrap();

        let progress = student_progress(&store, s.id).await.unwrap();
        assert_eq!(progress.total_submission_records, 3);
        assert_eq!(progress.late, 1);
        assert_eq!(progress.submission_rate, 0.6667);
        assert_eq!(progress.late_rate, 0.3333);
        assert_eq!(progress.missing_rate, 0.3333);
        assert_eq!(progress.student_average, Some(70.75));

        let nobody = student_progress(&store, 9999).await.unwrap();
        assert_eq!(nobody.total_submission_records, 0);
        assert_eq!(nobody.student_average, None);
    }

    #[test]
    fn records_serialise_with_snake_case_keys() {
        let stats = AssignmentStats {
            assignment_id: 3,
            total_records: 0,
            submitted: 0,
            late: 0,
            missing: 0,
            average: None,
            min: None,
            max: None,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["assignment_id"], 3);
        assert_eq!(json["total_records"], 0);
        assert!(json["average"].is_null());
    }
}
