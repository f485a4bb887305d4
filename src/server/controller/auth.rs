//! Session sign-in, current user and logout endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{SessionLoginDto, UserDto},
    },
    server::{
        controller::util::get_user::require_user,
        error::Error,
        model::{app::AppState, session::user::SessionUser},
        service::auth::create_session,
    },
};

/// OpenAPI tag for the session endpoints
pub static AUTH_TAG: &str = "auth";

impl From<SessionUser> for UserDto {
    fn from(user: SessionUser) -> Self {
        Self {
            id: user.id,
            is_admin: user.is_admin,
        }
    }
}

/// Exchanges an access token from the auth provider for a session
#[utoipa::path(
    post,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    request_body = SessionLoginDto,
    responses(
        (status = 200, description = "Session created for the token's user", body = UserDto),
        (status = 401, description = "Invalid or expired access token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user_session(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<SessionLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user = create_session(&state.token_verifier, &session, &login.access_token).await?;

    tracing::debug!(user_id = %user.id, "User session created");

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Get the user of the current session
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving user from session", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(session: Session) -> Result<impl IntoResponse, Error> {
    let user = require_user(&session).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Logs the user out, keeping the rest of the session (device identity) intact
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the home page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    if let Some(user) = SessionUser::remove(&session).await? {
        tracing::debug!(user_id = %user.id, "User logged out");
    }

    Ok(Redirect::temporary("/"))
}
