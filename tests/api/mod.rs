//! API endpoint tests, one module per resource.

mod auth_tests;
mod label_tests;
mod task_status_tests;
mod user_tests;
