//! Access token verification.
//!
//! The hosted auth provider signs HS256 access tokens with a shared secret. A verified token
//! is exchanged once for a session user; later requests only read the session.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::user::SessionUser,
};

/// Audience the auth provider issues user access tokens for
pub const ACCESS_TOKEN_AUDIENCE: &str = "authenticated";

/// Role granting access to the admin pages
pub const ADMIN_ROLE: &str = "admin";

/// Provider-managed metadata carried in the token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application role, `admin` for administrators
    #[serde(default)]
    pub role: Option<String>,
}

/// Claims of an access token issued by the auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// User id
    pub sub: Uuid,
    /// Expiry as a unix timestamp
    pub exp: i64,
    /// Provider-managed metadata
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

impl AccessTokenClaims {
    /// Whether the token carries the admin role
    pub fn is_admin(&self) -> bool {
        self.app_metadata.role.as_deref() == Some(ADMIN_ROLE)
    }
}

/// Validates access tokens against the shared secret
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Verifier for HS256 tokens signed with `secret`
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[ACCESS_TOKEN_AUDIENCE]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies signature, expiry and audience of `token`.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Token subject and whether it carries the admin role
    /// - `Err(Error::AuthError(AuthError::InvalidToken))` - Token rejected
    pub fn verify(&self, token: &str) -> Result<SessionUser, Error> {
        let data = jsonwebtoken::decode::<AccessTokenClaims>(token, &self.key, &self.validation)
            .map_err(AuthError::InvalidToken)?;

        Ok(SessionUser {
            id: data.claims.sub,
            is_admin: data.claims.is_admin(),
        })
    }
}

/// Verifies `access_token` and stores the resulting user in the session.
///
/// The session id is cycled so a pre-login session id can't be reused after login.
pub async fn create_session(
    verifier: &TokenVerifier,
    session: &Session,
    access_token: &str,
) -> Result<SessionUser, Error> {
    let user = verifier.verify(access_token)?;

    session.cycle_id().await?;
    SessionUser::insert(session, user).await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use fixdesk_test_utils::{constant::TEST_JWT_SECRET, prelude::*};
    use uuid::Uuid;

    use super::TokenVerifier;
    use crate::server::error::{auth::AuthError, Error};

    mod verify {
        use super::*;

        /// Expect a token with the admin role to produce an admin session user
        #[test]
        fn accepts_admin_token() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let token = factory::mock_access_token(user_id, Some("admin"))?;

            let user = TokenVerifier::new(TEST_JWT_SECRET).verify(&token).unwrap();

            assert_eq!(user.id, user_id);
            assert!(user.is_admin);

            Ok(())
        }

        /// Expect a token without a role to produce a regular session user
        #[test]
        fn accepts_regular_token() -> Result<(), TestError> {
            let user_id = Uuid::new_v4();
            let token = factory::mock_access_token(user_id, None)?;

            let user = TokenVerifier::new(TEST_JWT_SECRET).verify(&token).unwrap();

            assert_eq!(user.id, user_id);
            assert!(!user.is_admin);

            Ok(())
        }

        /// Expect an unrelated role to not grant admin access
        #[test]
        fn other_role_is_not_admin() -> Result<(), TestError> {
            let token = factory::mock_access_token(Uuid::new_v4(), Some("technician"))?;

            let user = TokenVerifier::new(TEST_JWT_SECRET).verify(&token).unwrap();

            assert!(!user.is_admin);

            Ok(())
        }

        /// Expect an expired token to be rejected
        #[test]
        fn rejects_expired_token() -> Result<(), TestError> {
            let token = factory::mock_expired_access_token(Uuid::new_v4())?;

            let result = TokenVerifier::new(TEST_JWT_SECRET).verify(&token);

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidToken(_)))
            ));

            Ok(())
        }

        /// Expect a token signed with another secret to be rejected
        #[test]
        fn rejects_foreign_signature() -> Result<(), TestError> {
            let token = factory::mock_foreign_access_token(Uuid::new_v4())?;

            let result = TokenVerifier::new(TEST_JWT_SECRET).verify(&token);

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidToken(_)))
            ));

            Ok(())
        }

        /// Expect garbage input to be rejected
        #[test]
        fn rejects_malformed_token() {
            let result = TokenVerifier::new(TEST_JWT_SECRET).verify("not-a-token");

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidToken(_)))
            ));
        }
    }

    mod create_session {
        use super::*;
        use crate::server::{model::session::user::SessionUser, service::auth::create_session};

        /// Expect the verified user to be stored in session
        #[tokio::test]
        async fn stores_user_in_session() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let user_id = Uuid::new_v4();
            let token = factory::mock_access_token(user_id, None)?;
            let verifier = TokenVerifier::new(TEST_JWT_SECRET);

            let result = create_session(&verifier, &test.session, &token).await;

            assert!(result.is_ok());
            let stored = SessionUser::get(&test.session).await.unwrap();
            assert_eq!(stored.map(|user| user.id), Some(user_id));

            Ok(())
        }

        /// Expect an invalid token to leave the session without a user
        #[tokio::test]
        async fn rejected_token_stores_nothing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let token = factory::mock_expired_access_token(Uuid::new_v4())?;
            let verifier = TokenVerifier::new(TEST_JWT_SECRET);

            let result = create_session(&verifier, &test.session, &token).await;

            assert!(result.is_err());
            assert!(SessionUser::get(&test.session).await.unwrap().is_none());

            Ok(())
        }
    }
}
