use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated user stored in session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: Uuid,
    pub is_admin: bool,
}

/// Request body exchanging an access token from the auth provider for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SessionLoginDto {
    pub access_token: String,
}
