use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use fixdesk::{
    model::{
        api::ErrorDto,
        fix_step::{CreateFixStepDto, FixStepDto},
    },
    server::controller::fix_step::{create_fix_step, delete_fix_step, get_fix_steps},
};

use super::*;

fn new_fix_step(title: &str, content: &str) -> CreateFixStepDto {
    CreateFixStepDto {
        brand: Some("Daikin".to_string()),
        model: Some(" ".to_string()),
        title: title.to_string(),
        content: content.to_string(),
        tags: vec!["reset".to_string()],
        ..CreateFixStepDto::default()
    }
}

/// Expect 403 for a signed-in user without the admin role
#[tokio::test]
async fn list_requires_admin() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    test.sign_in(false).await?;

    let response = get_fix_steps(State(state), test.session.clone())
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 with the validation message for a blank title
#[tokio::test]
async fn create_rejects_blank_title() -> Result<(), TestError> {
    // No tables: a database call would fail with 500 instead
    let test = test_setup_with_tables!()?;
    let (state, _receiver) = test.app_state();
    test.sign_in(true).await?;

    let response = create_fix_step(
        State(state),
        test.session.clone(),
        Json(new_fix_step("   ", "Hold the reset button")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(response).await?;
    assert_eq!(error.error, "Title and content are required");

    Ok(())
}

/// Expect the new fix step authored by the admin with blank fields stored as null
#[tokio::test]
async fn create_records_author() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    let admin_id = test.sign_in(true).await?;

    let response = create_fix_step(
        State(state),
        test.session.clone(),
        Json(new_fix_step("Reset the controller", "Hold the reset button")),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let fix_steps: Vec<FixStepDto> = json_body(response).await?;
    assert_eq!(fix_steps.len(), 1);
    assert_eq!(fix_steps[0].created_by, Some(admin_id));
    assert_eq!(fix_steps[0].brand.as_deref(), Some("Daikin"));
    assert_eq!(fix_steps[0].model, None);
    assert_eq!(fix_steps[0].tags, vec!["reset"]);

    Ok(())
}

/// Expect the deleted fix step to be gone from the returned list
#[tokio::test]
async fn delete_returns_remaining() -> Result<(), TestError> {
    let test = test_setup_with_fixdesk_tables!()?;
    let (state, _receiver) = test.app_state();
    test.sign_in(true).await?;
    let kept = test
        .fix_step()
        .insert_fix_step("Check the filter", factory::minutes_ago(2))
        .await?;
    let removed = test
        .fix_step()
        .insert_fix_step("Bleed the radiator", factory::minutes_ago(1))
        .await?;

    let response = delete_fix_step(State(state), test.session.clone(), Path(removed.id))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let fix_steps: Vec<FixStepDto> = json_body(response).await?;
    let ids: Vec<_> = fix_steps.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![kept.id]);

    Ok(())
}
