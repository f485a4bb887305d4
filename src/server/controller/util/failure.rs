//! Records handler failures in the application log.

use uuid::Uuid;

use crate::{
    model::log::{LogLevel, StackTrace},
    server::{
        error::Error, model::app::AppState, model::request::RequestContext,
        service::log::LogService,
    },
};

/// Log level a failed request is recorded at, `None` for client mistakes
fn failure_level(error: &Error) -> Option<LogLevel> {
    match error {
        Error::ValidationError(_) | Error::AuthError(_) => None,
        Error::DirectoryError(_) => Some(LogLevel::Warning),
        _ => Some(LogLevel::Error),
    }
}

/// Queues a log entry for a failed `action` on behalf of `user_id`.
///
/// Device directory outages are warnings; server-side failures are errors carrying the
/// error's trace. Validation and authentication failures are not recorded.
pub fn record_failure(state: &AppState, user_id: Option<Uuid>, action: &str, error: &Error) {
    let context = RequestContext::new(user_id, None);
    let service = LogService::new(&state.db, &state.telemetry);

    match failure_level(error) {
        Some(LogLevel::Warning) => {
            service.log_warning(&context, &format!("Failed to {}: {}", action, error), None);
        }
        Some(_) => {
            service.log_error(
                &context,
                &format!("Failed to {}", action),
                Some(StackTrace::from_error(error)),
                None,
            );
        }
        None => {}
    }
}
