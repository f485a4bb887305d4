//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification, and Swagger
//! UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/session` - Exchange an access token for a session
/// - `GET /api/auth/user` - Current session user
/// - `GET /api/auth/logout` - Remove the user from the session
/// - `GET|POST /api/notes`, `DELETE /api/notes/{id}` - Error code notes of the session user
/// - `POST /api/analytics/events` - Record an analytics event
/// - `POST /api/logs` - Record a log entry
/// - `GET /api/directory/brands`, `GET /api/directory/brands/{brand_id}/models` - Device directory
/// - `/api/admin/...` - Analytics reports, log viewer and fix step management (admin only)
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Fixdesk", description = "Fixdesk API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Session login and logout"),
        (name = controller::note::NOTE_TAG, description = "Per-user error code notes"),
        (name = controller::analytics::ANALYTICS_TAG, description = "Usage tracking and reports"),
        (name = controller::log::LOG_TAG, description = "Application log ingestion and viewer"),
        (name = controller::fix_step::FIX_STEP_TAG, description = "Fix step knowledge base"),
        (name = controller::directory::DIRECTORY_TAG, description = "Device brands and models"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::create_user_session))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::note::get_notes, controller::note::add_note))
        .routes(routes!(controller::note::delete_note))
        .routes(routes!(controller::analytics::track_event))
        .routes(routes!(controller::analytics::get_analytics))
        .routes(routes!(controller::analytics::get_analytics_summary))
        .routes(routes!(controller::analytics::get_most_searched_error_codes))
        .routes(routes!(controller::analytics::get_most_viewed_pages))
        .routes(routes!(controller::log::create_log))
        .routes(routes!(controller::log::get_logs, controller::log::delete_old_logs))
        .routes(routes!(controller::log::get_logs_by_date_range))
        .routes(routes!(
            controller::fix_step::get_fix_steps,
            controller::fix_step::create_fix_step
        ))
        .routes(routes!(controller::fix_step::delete_fix_step))
        .routes(routes!(controller::directory::get_all_brands))
        .routes(routes!(controller::directory::get_brand_models))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
