//! Session user guards for handlers.

use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
};

/// Retrieves the authenticated user from session
///
/// # Returns
/// - `Ok(SessionUser)`: User present in session
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user in session
/// - `Err(Error)`: Session store errors
pub async fn require_user(session: &Session) -> Result<SessionUser, Error> {
    let Some(user) = SessionUser::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    Ok(user)
}

/// Retrieves the authenticated user from session, requiring the admin role
///
/// # Returns
/// - `Ok(SessionUser)`: Admin user present in session
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user in session
/// - `Err(Error::AuthError(AuthError::NotAdmin))`: User lacks the admin role
pub async fn require_admin(session: &Session) -> Result<SessionUser, Error> {
    let user = require_user(session).await?;

    if !user.is_admin {
        tracing::debug!(user_id = %user.id, "Rejected admin request");

        return Err(Error::AuthError(AuthError::NotAdmin(user.id)));
    }

    Ok(user)
}
