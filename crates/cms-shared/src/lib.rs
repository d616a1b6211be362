//! # CMS Shared
//!
//! Configuration, telemetry, and constants shared by every crate of the
//! content platform.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
