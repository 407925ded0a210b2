//! Access control and aggregation over the academic analytics store.
//!
//! [`access`] decides who may see what, [`analytics`] turns submission rows
//! into statistics, and [`AnalyticsService`] chains the two in the order the
//! HTTP layer relies on.

pub mod access;
pub mod analytics;
pub mod error;
pub mod service;

pub use access::Requester;
pub use analytics::{AssignmentStats, CourseRef, CourseSummary, StudentProgress};
pub use error::AnalyticsError;
pub use service::AnalyticsService;
