//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool, migrations and repositories (PostgreSQL)
//! - Prometheus metrics
//! - Error reporting

pub mod database;
pub mod error_reporting;
pub mod metrics;
pub mod repositories;
