//! Request identity.
//!
//! There is no real authentication: the caller names itself with the
//! `X-User-Id` header, and [`guards::allow_authenticated`] resolves that id to
//! a stored user before any protected handler runs.

pub mod extractors;
pub mod guards;
pub mod middleware;

pub use extractors::{CurrentUser, USER_ID_HEADER};
