//! Request context for telemetry writes.

use axum::http::{header::REFERER, HeaderMap};
use dioxus_logger::tracing;
use reqwest::Url;
use tower_sessions::Session;

use crate::server::model::{request::RequestContext, session::user::SessionUser};

/// Path of the page the request was sent from, taken from the `Referer` header
pub fn referer_path(headers: &HeaderMap) -> Option<String> {
    let referer = headers.get(REFERER)?.to_str().ok()?;
    let url = Url::parse(referer).ok()?;

    Some(url.path().to_string())
}

/// Resolves the session user and current page of a telemetry request.
///
/// Telemetry never fails the caller, so a session read error only drops the user.
pub async fn request_context(session: &Session, headers: &HeaderMap) -> RequestContext {
    let user_id = match SessionUser::get_id(session).await {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!("Failed to read session user for telemetry: {}", e);
            None
        }
    };

    RequestContext::new(user_id, referer_path(headers))
}
