//! Fire-and-forget analytics and log reporting from the browser.
//!
//! Nothing here reports back to the caller: the server answers 202 and stores the record in
//! the background, transport failures only reach the browser console.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        router::Route,
        util::api::{post_and_forget, ApiError},
    },
    model::{analytics::TrackEventDto, log::LogRequestDto},
};

pub fn track(event: TrackEventDto) {
    spawn(async move {
        if let Err(e) = post_and_forget("/api/analytics/events", &event).await {
            tracing::debug!("Failed to send {} event: {}", event.event_type, e);
        }
    });
}

pub fn log(request: LogRequestDto) {
    spawn(async move {
        if let Err(e) = post_and_forget("/api/logs", &request).await {
            tracing::debug!("Failed to send log entry: {}", e);
        }
    });
}

/// Records a page view for the current route once per mount
pub fn use_page_view() {
    let route = use_route::<Route>();

    use_hook(move || track(TrackEventDto::page_view(Some(route.to_string()))));
}

/// Console and server log line for a failed user action, returns the text to show
pub fn report_failure(action: &str, error: &ApiError) -> String {
    let message = format!("Failed to {}: {}", action, error);

    tracing::error!("{}", message);
    log(LogRequestDto::error(message.clone(), None));

    message
}
