pub mod app;
pub mod data;

pub use app::{get_json_body, get_request, make_test_app};
pub use data::{School, seed_school};
