//! Public loan calculator

use axum::extract::State;

use cms_core::domain::CalculatorConfig;
use cms_core::services::{estimate, ContentService, EstimateRequest, LoanEstimate};

use crate::extract::ApiJson;
use crate::response::{ok, ApiResult};

/// GET /api/calculator - active loan products
pub async fn products(
    State(service): State<ContentService<CalculatorConfig>>,
) -> ApiResult<Vec<CalculatorConfig>> {
    let products = service
        .list()
        .await?
        .into_iter()
        .filter(|config| config.is_active)
        .collect();
    Ok(ok(products))
}

/// POST /api/calculator/estimate
pub async fn estimate_loan(
    State(service): State<ContentService<CalculatorConfig>>,
    ApiJson(request): ApiJson<EstimateRequest>,
) -> ApiResult<LoanEstimate> {
    let config = service.get(&request.config_id).await?;
    Ok(ok(estimate(&config, request.amount, request.term_months)?))
}
