//! # CMS Security
//!
//! HTTP Basic credential parsing and verification for the admin surface.

pub mod basic_auth;

pub use basic_auth::{BasicAuthError, BasicAuthenticator, BasicCredentials};
