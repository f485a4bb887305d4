//! Shared values used across fixdesk tests.
//!
//! None of these are real credentials.

/// Secret used to sign and verify access tokens in tests.
pub static TEST_JWT_SECRET: &str = "fixdesk-test-jwt-secret";

/// Audience the auth provider puts on access tokens.
pub static TEST_JWT_AUDIENCE: &str = "authenticated";

pub static TEST_SYSTEM_NAME: &str = "Victorum";

pub static TEST_ERROR_CODE: &str = "E001";
