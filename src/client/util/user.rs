use crate::{
    client::util::api::{get_json, send_json, ApiError, Method},
    model::user::{SessionLoginDto, UserDto},
};

/// Retrieve the session user, `None` when signed out
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    match get_json::<UserDto>("/api/auth/user").await {
        Ok(user) => Ok(Some(user)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Exchange an access token from the auth provider for a session
pub async fn create_session(access_token: String) -> Result<UserDto, ApiError> {
    send_json(
        Method::Post,
        "/api/auth/session",
        &SessionLoginDto { access_token },
    )
    .await
}
