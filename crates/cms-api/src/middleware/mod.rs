//! HTTP middleware

pub mod basic_auth;
pub mod upload_headers;

pub use basic_auth::require_admin;
pub use upload_headers::harden_uploads;
