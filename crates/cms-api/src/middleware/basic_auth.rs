// ============================================================================
// CMS API - Admin gate
// File: crates/cms-api/src/middleware/basic_auth.rs
// ============================================================================
//! Basic authentication for every admin route and admin asset

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

use cms_security::BasicAuthenticator;

use crate::error::ApiError;

pub async fn require_admin(
    State(auth): State<Arc<BasicAuthenticator>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let credentials = auth.authenticate(header).map_err(|e| {
        ApiError::Unauthorized(format!("{} for {}", e, request.uri().path()))
    })?;

    debug!(user = %credentials.username, path = %request.uri().path(), "Admin request");
    Ok(next.run(request).await)
}
