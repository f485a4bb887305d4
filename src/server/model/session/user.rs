//! Signed-in user session entry.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::error::Error;

/// Session key of the signed-in user
pub const SESSION_USER_KEY: &str = "fixdesk:user";

/// Authenticated user stored in session after access token verification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Auth provider user id
    pub id: Uuid,
    /// Whether the token carried the admin role
    pub is_admin: bool,
}

impl SessionUser {
    /// Insert user into session
    pub async fn insert(session: &Session, user: SessionUser) -> Result<(), Error> {
        session.insert(SESSION_USER_KEY, user).await?;

        Ok(())
    }

    /// Get user from session
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
    }

    /// Get only the user ID from session
    pub async fn get_id(session: &Session) -> Result<Option<Uuid>, Error> {
        Ok(Self::get(session).await?.map(|user| user.id))
    }

    /// Remove user from session, leaving other session data in place
    pub async fn remove(session: &Session) -> Result<Option<SessionUser>, Error> {
        Ok(session.remove::<SessionUser>(SESSION_USER_KEY).await?)
    }
}
