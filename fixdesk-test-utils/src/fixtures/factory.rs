//! Factory functions for values tests need but that don't touch the database.

use chrono::{Duration, NaiveDateTime, Utc};
use jsonwebtoken::{EncodingKey, Header};
use serde_json::json;
use uuid::Uuid;

use crate::{
    constant::{TEST_JWT_AUDIENCE, TEST_JWT_SECRET},
    error::TestError,
};

/// Timestamp `minutes` minutes before now, in naive UTC as stored in the database
pub fn minutes_ago(minutes: i64) -> NaiveDateTime {
    (Utc::now() - Duration::minutes(minutes)).naive_utc()
}

/// Timestamp `days` days before now, in naive UTC as stored in the database
pub fn days_ago(days: i64) -> NaiveDateTime {
    (Utc::now() - Duration::days(days)).naive_utc()
}

/// Create an access token signed the way the auth provider signs them.
///
/// # Arguments
/// - `user_id` - Subject of the token
/// - `role` - Optional `app_metadata.role` claim, `"admin"` grants admin access
pub fn mock_access_token(user_id: Uuid, role: Option<&str>) -> Result<String, TestError> {
    signed_token(user_id, role, Utc::now() + Duration::hours(1), TEST_JWT_SECRET)
}

/// Create an access token that expired an hour ago
pub fn mock_expired_access_token(user_id: Uuid) -> Result<String, TestError> {
    signed_token(user_id, None, Utc::now() - Duration::hours(1), TEST_JWT_SECRET)
}

/// Create an access token signed with a secret the server doesn't know
pub fn mock_foreign_access_token(user_id: Uuid) -> Result<String, TestError> {
    signed_token(
        user_id,
        Some("admin"),
        Utc::now() + Duration::hours(1),
        "some-other-secret",
    )
}

fn signed_token(
    user_id: Uuid,
    role: Option<&str>,
    expires_at: chrono::DateTime<Utc>,
    secret: &str,
) -> Result<String, TestError> {
    let mut claims = json!({
        "sub": user_id,
        "aud": TEST_JWT_AUDIENCE,
        "exp": expires_at.timestamp(),
        "iat": Utc::now().timestamp(),
    });
    if let Some(role) = role {
        claims["app_metadata"] = json!({ "role": role });
    }

    Ok(jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}
