mod analytics_test;
mod courses_test;
mod health_test;
mod me_test;
mod seed_test;
