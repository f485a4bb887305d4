//! Request-derived defaults for telemetry writes.

use uuid::Uuid;

/// Who made the request and which page they were on.
///
/// Telemetry writes fall back to these values when the caller does not provide an explicit
/// user or path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Authenticated session user, if any
    pub user_id: Option<Uuid>,
    /// Path of the page the request originated from, taken from the `Referer` header
    pub current_path: Option<String>,
}

impl RequestContext {
    /// Creates a new instance of [`RequestContext`]
    pub fn new(user_id: Option<Uuid>, current_path: Option<String>) -> Self {
        Self {
            user_id,
            current_path,
        }
    }

    /// Explicit user, else the session user
    pub fn resolve_user(&self, explicit: Option<Uuid>) -> Option<Uuid> {
        explicit.or(self.user_id)
    }

    /// Explicit non-empty path, else the current page
    pub fn resolve_path(&self, explicit: Option<String>) -> Option<String> {
        explicit
            .filter(|path| !path.is_empty())
            .or_else(|| self.current_path.clone())
    }
}
