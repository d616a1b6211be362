//! Annuity loan estimate for the public calculator

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::CalculatorConfig;
use crate::error::DomainError;

#[derive(Debug, Clone, Deserialize)]
pub struct EstimateRequest {
    pub config_id: Uuid,
    pub amount: f64,
    pub term_months: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanEstimate {
    pub product_key: String,
    pub amount: f64,
    pub term_months: u32,
    pub annual_interest_rate: f64,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Equal monthly installments: `P·r / (1 − (1 + r)^−n)` with `r` the
/// monthly rate, or `P / n` when the product is interest free.
pub fn estimate(
    config: &CalculatorConfig,
    amount: f64,
    term_months: u32,
) -> Result<LoanEstimate, DomainError> {
    if !config.is_active {
        return Err(DomainError::not_found("calculator", config.id));
    }
    if !amount.is_finite() || amount < config.min_amount || amount > config.max_amount {
        return Err(DomainError::ValidationError(format!(
            "Amount must be between {} and {}",
            config.min_amount, config.max_amount
        )));
    }
    if term_months < config.min_term_months || term_months > config.max_term_months {
        return Err(DomainError::ValidationError(format!(
            "Term must be between {} and {} months",
            config.min_term_months, config.max_term_months
        )));
    }

    let n = term_months as f64;
    let r = config.annual_interest_rate / 12.0 / 100.0;
    let monthly = if r == 0.0 {
        amount / n
    } else {
        amount * r / (1.0 - (1.0 + r).powf(-n))
    };
    let total = monthly * n;

    Ok(LoanEstimate {
        product_key: config.product_key.clone(),
        amount,
        term_months,
        annual_interest_rate: config.annual_interest_rate,
        monthly_payment: round2(monthly),
        total_payment: round2(total),
        total_interest: round2(total - amount),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
