//! Session data wrappers.
//!
//! Each submodule owns one session key with methods for inserting, reading and removing
//! its value from the session store (Valkey-backed in production).

pub mod device;
pub mod user;
