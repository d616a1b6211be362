use axum::extract::State;
use std::sync::Arc;

use cms_core::services::{RatesService, RatesSnapshot};

use crate::response::{ok, ApiResult};

/// GET /api/rates
pub async fn ticker(State(rates): State<Arc<RatesService>>) -> ApiResult<RatesSnapshot> {
    Ok(ok(rates.snapshot()))
}
