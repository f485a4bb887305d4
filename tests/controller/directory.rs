use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use fixdesk::{
    model::{
        directory::{BrandDto, DeviceDto},
        log::LogLevel,
    },
    server::{
        controller::directory::{get_all_brands, get_brand_models},
        model::worker::TelemetryJob,
    },
};

use super::*;

/// Expect the directory's brands
#[tokio::test]
async fn lists_brands() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_brands_endpoint(&[("daikin", "Daikin"), ("bosch", "Bosch")], 1)
        .build()
        .await?;
    let (state, _receiver) = test.app_state();

    let response = get_all_brands(State(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let brands: Vec<BrandDto> = json_body(response).await?;
    let names: Vec<&str> = brands.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["Daikin", "Bosch"]);
    test.assert_mocks();

    Ok(())
}

/// Expect the models of the requested brand
#[tokio::test]
async fn lists_brand_models() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_models_endpoint("daikin", &[("ftxm", "FTXM Perfera")], 1)
        .build()
        .await?;
    let (state, _receiver) = test.app_state();

    let response = get_brand_models(State(state), Path("daikin".to_string()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let models: Vec<DeviceDto> = json_body(response).await?;
    assert_eq!(
        models,
        vec![DeviceDto {
            id: "ftxm".to_string(),
            name: "FTXM Perfera".to_string()
        }]
    );
    test.assert_mocks();

    Ok(())
}

/// Expect 502 and a queued warning when the directory answers with an error
#[tokio::test]
async fn upstream_failure_is_bad_gateway() -> Result<(), TestError> {
    let mut test = test_setup_with_tables!()?;
    let endpoint = test.directory().create_failing_brands_endpoint(503, 1);
    let (state, mut receiver) = test.app_state();

    let response = get_all_brands(State(state)).await.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    endpoint.assert();
    let Some(TelemetryJob::WriteLog(record)) = receiver.try_recv() else {
        panic!("expected a queued log record");
    };
    assert_eq!(record.level, LogLevel::Warning);
    assert!(record.message.starts_with("Failed to load device brands"));
    assert!(record.user_id.is_none());

    Ok(())
}
