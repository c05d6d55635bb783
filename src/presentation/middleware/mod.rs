//! Middleware
//!
//! Tower middleware for request processing.

pub mod auth;
pub mod cors;
pub mod error_reporting;
pub mod logging;
pub mod metrics;

pub use auth::{auth_middleware, AuthUser};
pub use error_reporting::report_errors;
pub use metrics::track_metrics;
