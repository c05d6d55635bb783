//! Error Reporting
//!
//! Unexpected failures are forwarded to an [`ErrorReporter`]. The default
//! implementation turns them into structured `tracing` events; an external
//! tracker can be plugged in by implementing the trait.

use crate::config::ErrorReportingSettings;

/// Context captured alongside a reported failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    pub method: String,
    pub path: String,
    pub status: u16,
}

/// Sink for unexpected (5xx) failures.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, message: &str, context: &ErrorContext);
}

/// Emits every report as an `error_report` tracing event.
#[derive(Debug, Clone)]
pub struct TracingErrorReporter {
    environment: String,
    dsn_configured: bool,
}

impl TracingErrorReporter {
    pub fn new(settings: &ErrorReportingSettings, environment: &str) -> Self {
        let dsn_configured = settings
            .dsn
            .as_deref()
            .is_some_and(|dsn| !dsn.trim().is_empty());

        if dsn_configured {
            tracing::info!(environment, "Error reporting DSN configured");
        }

        Self {
            environment: environment.to_string(),
            dsn_configured,
        }
    }

    pub fn dsn_configured(&self) -> bool {
        self.dsn_configured
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, message: &str, context: &ErrorContext) {
        tracing::error!(
            target: "error_report",
            environment = %self.environment,
            dsn_configured = self.dsn_configured,
            method = %context.method,
            path = %context.path,
            status = context.status,
            "{}",
            message
        );
    }
}
