use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use fixdesk::{
    model::user::{SessionLoginDto, UserDto},
    server::{
        controller::auth::{create_user_session, get_user, logout},
        model::session::{device::SessionDeviceId, user::SessionUser},
    },
};
use uuid::Uuid;

use super::*;

mod create_user_session {
    use super::*;

    /// Expect 200 and the admin flag from the token's role claim
    #[tokio::test]
    async fn stores_admin_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let (state, _receiver) = test.app_state();
        let user_id = Uuid::new_v4();
        let access_token = factory::mock_access_token(user_id, Some("admin"))?;

        let response = create_user_session(
            State(state),
            test.session.clone(),
            Json(SessionLoginDto { access_token }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let user: UserDto = json_body(response).await?;
        assert_eq!(user.id, user_id);
        assert!(user.is_admin);

        let stored = SessionUser::get(&test.session).await.unwrap();
        assert_eq!(stored.map(|u| u.id), Some(user_id));

        Ok(())
    }

    /// Expect 401 for a token signed with another secret
    #[tokio::test]
    async fn rejects_foreign_token() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let (state, _receiver) = test.app_state();
        let access_token = factory::mock_foreign_access_token(Uuid::new_v4())?;

        let response = create_user_session(
            State(state),
            test.session.clone(),
            Json(SessionLoginDto { access_token }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(SessionUser::get(&test.session).await.unwrap().is_none());

        Ok(())
    }

    /// Expect 401 for an expired token
    #[tokio::test]
    async fn rejects_expired_token() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let (state, _receiver) = test.app_state();
        let access_token = factory::mock_expired_access_token(Uuid::new_v4())?;

        let response = create_user_session(
            State(state),
            test.session.clone(),
            Json(SessionLoginDto { access_token }),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }
}

mod get_user {
    use super::*;

    /// Expect 404 when nobody is signed in
    #[tokio::test]
    async fn not_found_without_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let response = get_user(test.session.clone()).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    /// Expect the signed-in user
    #[tokio::test]
    async fn returns_session_user() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let user_id = test.sign_in(false).await?;

        let response = get_user(test.session.clone()).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let user: UserDto = json_body(response).await?;
        assert_eq!(
            user,
            UserDto {
                id: user_id,
                is_admin: false
            }
        );

        Ok(())
    }
}

mod logout {
    use super::*;

    /// Expect the user to be removed while the device identity stays
    #[tokio::test]
    async fn keeps_device_identity() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        test.sign_in(false).await?;
        let device_id = SessionDeviceId::get_or_create(&test.session).await.unwrap();

        let response = logout(test.session.clone()).await.into_response();

        assert!(response.status().is_redirection());
        assert!(SessionUser::get(&test.session).await.unwrap().is_none());
        assert_eq!(
            SessionDeviceId::get(&test.session).await.unwrap(),
            Some(device_id)
        );

        Ok(())
    }
}
