//! Helpers for building application state on top of [`TestSetup`].

use axum::{body::to_bytes, response::Response};
use fixdesk::server::{
    model::{app::AppState, session::user::SessionUser},
    service::{auth::TokenVerifier, directory::DeviceDirectory},
    worker::queue::{TelemetryQueue, TelemetryReceiver},
};
use fixdesk_test_utils::{constant::TEST_JWT_SECRET, TestError, TestSetup};
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub trait TestSetupExt {
    /// Application state over the test database and the mock device directory.
    ///
    /// Telemetry jobs dispatched through the state end up in the returned receiver.
    fn app_state(&self) -> (AppState, TelemetryReceiver);

    /// Store a new user in the test session as if they had signed in
    async fn sign_in(&self, is_admin: bool) -> Result<Uuid, TestError>;
}

impl TestSetupExt for TestSetup {
    fn app_state(&self) -> (AppState, TelemetryReceiver) {
        let (telemetry, receiver) = TelemetryQueue::new(16);
        let directory = DeviceDirectory::new(reqwest::Client::new(), &self.server_url())
            .expect("mock server URL is absolute");

        let state = AppState {
            db: self.db.clone(),
            telemetry,
            directory,
            token_verifier: TokenVerifier::new(TEST_JWT_SECRET),
        };

        (state, receiver)
    }

    async fn sign_in(&self, is_admin: bool) -> Result<Uuid, TestError> {
        let id = Uuid::new_v4();

        SessionUser::insert(&self.session, SessionUser { id, is_admin })
            .await
            .expect("session insert");

        Ok(id)
    }
}

/// Deserialize a JSON response body
pub async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, TestError> {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable response body");

    Ok(serde_json::from_slice(&bytes)?)
}
