use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Extracts the text shown to users from a failed request.
///
/// Prefers the error message, falls back to the error code (the HTTP status when nothing
/// better is available) and finally to a generic text.
pub fn format_error(message: Option<&str>, code: Option<&str>) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .or(code.filter(|c| !c.trim().is_empty()))
        .unwrap_or("An unknown error occurred")
        .to_string()
}
