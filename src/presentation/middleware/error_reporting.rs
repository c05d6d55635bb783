//! Forwards internal failures to the configured [`ErrorReporter`].
//!
//! [`ErrorReporter`]: crate::infrastructure::error_reporting::ErrorReporter

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::infrastructure::error_reporting::ErrorContext;
use crate::shared::error::InternalErrorReport;
use crate::startup::AppState;

pub async fn report_errors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if let Some(report) = response.extensions().get::<InternalErrorReport>() {
        state.error_reporter.report(
            &report.message,
            &ErrorContext {
                method,
                path,
                status: response.status().as_u16(),
            },
        );
    }

    response
}
