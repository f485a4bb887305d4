//! Helpers shared by the controllers: session user checks, request context and failure logging.

pub mod failure;
pub mod get_user;
pub mod request;
