//! Admin fix-step endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        fix_step::{CreateFixStepDto, FixStepDto},
    },
    server::{
        controller::util::{failure::record_failure, get_user::require_admin},
        error::Error,
        model::app::AppState,
        service::fix_step::FixStepService,
    },
};

/// OpenAPI tag for the fix-step endpoints
pub static FIX_STEP_TAG: &str = "fix_step";

/// List every fix step, newest first
#[utoipa::path(
    get,
    path = "/api/admin/fix-steps",
    tag = FIX_STEP_TAG,
    responses(
        (status = 200, description = "All fix steps", body = Vec<FixStepDto>),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fix_steps(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&session).await?;

    let fix_steps = FixStepService::new(&state.db)
        .get_fix_steps()
        .await
        .inspect_err(|e| record_failure(&state, Some(admin.id), "load fix steps", e))?;

    Ok((StatusCode::OK, Json(fix_steps)))
}

/// Create a fix step authored by the session admin
#[utoipa::path(
    post,
    path = "/api/admin/fix-steps",
    tag = FIX_STEP_TAG,
    request_body = CreateFixStepDto,
    responses(
        (status = 200, description = "All fix steps after the insert", body = Vec<FixStepDto>),
        (status = 400, description = "Title and content are required", body = ErrorDto),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fix_step(
    State(state): State<AppState>,
    session: Session,
    Json(fix_step): Json<CreateFixStepDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&session).await?;

    let fix_steps = FixStepService::new(&state.db)
        .create_fix_step(fix_step, Some(admin.id))
        .await
        .inspect_err(|e| record_failure(&state, Some(admin.id), "create fix step", e))?;

    Ok((StatusCode::OK, Json(fix_steps)))
}

/// Delete a fix step
#[utoipa::path(
    delete,
    path = "/api/admin/fix-steps/{id}",
    tag = FIX_STEP_TAG,
    params(
        ("id" = Uuid, Path, description = "ID of the fix step to delete")
    ),
    responses(
        (status = 200, description = "All fix steps after the delete", body = Vec<FixStepDto>),
        (status = 403, description = "Administrator access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fix_step(
    State(state): State<AppState>,
    session: Session,
    Path(fix_step_id): Path<Uuid>,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&session).await?;

    let fix_steps = FixStepService::new(&state.db)
        .delete_fix_step(fix_step_id)
        .await
        .inspect_err(|e| record_failure(&state, Some(admin.id), "delete fix step", e))?;

    Ok((StatusCode::OK, Json(fix_steps)))
}
