//! Device directory proxy endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        directory::{BrandDto, DeviceDto},
    },
    server::{controller::util::failure::record_failure, error::Error, model::app::AppState},
};

/// OpenAPI tag for the device directory endpoints
pub static DIRECTORY_TAG: &str = "directory";

/// List every brand in the device directory
#[utoipa::path(
    get,
    path = "/api/directory/brands",
    tag = DIRECTORY_TAG,
    responses(
        (status = 200, description = "All brands", body = Vec<BrandDto>),
        (status = 502, description = "Device directory unavailable", body = ErrorDto)
    ),
)]
pub async fn get_all_brands(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let brands = state
        .directory
        .get_all_brands()
        .await
        .inspect_err(|e| record_failure(&state, None, "load device brands", e))?;

    Ok((StatusCode::OK, Json(brands)))
}

/// List the models of a brand
#[utoipa::path(
    get,
    path = "/api/directory/brands/{brand_id}/models",
    tag = DIRECTORY_TAG,
    params(
        ("brand_id" = String, Path, description = "Device directory ID of the brand")
    ),
    responses(
        (status = 200, description = "Models of the brand", body = Vec<DeviceDto>),
        (status = 502, description = "Device directory unavailable", body = ErrorDto)
    ),
)]
pub async fn get_brand_models(
    State(state): State<AppState>,
    Path(brand_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let models = state
        .directory
        .get_brand_models(&brand_id)
        .await
        .inspect_err(|e| record_failure(&state, None, "load device models", e))?;

    Ok((StatusCode::OK, Json(models)))
}
