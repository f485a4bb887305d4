//! Thin JSON client for the fixdesk API.
//!
//! Requests carry the session cookie. Error responses are turned into display text with
//! [`format_error`]: the server's `ErrorDto` message, else the HTTP status.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::model::api::{format_error, ErrorDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 404, the session has no user
    NotFound,
    Failed(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("User not found"),
            Self::Failed(message) => f.write_str(message),
        }
    }
}

/// Builds `path?key=value&...` with form encoding, skipping the `?` when there are no pairs
pub fn with_query(path: &str, pairs: &[(&str, &str)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    format!("{}?{}", path, query)
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let (status, body) = fetch(Method::Get, url, None).await?;
    parse(status, &body)
}

pub async fn send_json<B: Serialize, T: DeserializeOwned>(
    method: Method,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(body)
        .map_err(|e| ApiError::Failed(format!("Failed to encode request: {}", e)))?;

    let (status, body) = fetch(method, url, Some(body)).await?;
    parse(status, &body)
}

pub async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let (status, body) = fetch(Method::Delete, url, None).await?;
    parse(status, &body)
}

/// Sends the request and ignores the answer apart from transport failures
pub async fn post_and_forget<B: Serialize>(url: &str, body: &B) -> Result<(), ApiError> {
    let body = serde_json::to_string(body)
        .map_err(|e| ApiError::Failed(format!("Failed to encode request: {}", e)))?;

    fetch(Method::Post, url, Some(body)).await.map(|_| ())
}

fn parse<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match status {
        200..=299 => serde_json::from_str(body)
            .map_err(|e| ApiError::Failed(format!("Failed to parse response: {}", e))),
        404 => Err(ApiError::NotFound),
        _ => {
            let status = status.to_string();
            let message = match serde_json::from_str::<ErrorDto>(body) {
                Ok(error) => format_error(Some(&error.error), Some(&status)),
                Err(_) => format_error(Some(body), Some(&status)),
            };

            Err(ApiError::Failed(message))
        }
    }
}

#[cfg(feature = "web")]
async fn fetch(method: Method, url: &str, body: Option<String>) -> Result<(u16, String), ApiError> {
    use reqwasm::http::{Request, RequestCredentials};

    let request = match method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
        Method::Delete => Request::delete(url),
    }
    .credentials(RequestCredentials::Include);

    let request = match body {
        Some(body) => request.header("Content-Type", "application/json").body(body),
        None => request,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Failed(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Ok((status, text))
}

#[cfg(not(feature = "web"))]
async fn fetch(
    _method: Method,
    _url: &str,
    _body: Option<String>,
) -> Result<(u16, String), ApiError> {
    Err(ApiError::Failed(
        "Requests can only be sent from the browser".to_string(),
    ))
}
