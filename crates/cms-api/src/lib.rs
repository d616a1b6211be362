//! # CMS API
//!
//! HTTP surface of the content platform: router, handlers, the admin
//! basic-auth gate, the JSON envelope and error mapping.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::{AppState, ContentStores};
