// ============================================================================
// CMS Core - Calculator Config Entity
// File: crates/cms-core/src/domain/calculator.rs
// Description: Loan product parameters driving the public loan calculator
// ============================================================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::record::Record;
use super::validation::{validate_not_blank, validate_slug};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub id: Uuid,
    pub product_key: String,
    pub name_mn: String,
    pub name_en: String,
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_term_months: u32,
    pub max_term_months: u32,
    /// Yearly rate in percent, e.g. `18.0`.
    pub annual_interest_rate: f64,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_bounds"))]
pub struct CalculatorConfigDraft {
    #[validate(custom(function = "validate_slug"))]
    pub product_key: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub name_mn: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub name_en: String,

    #[validate(range(exclusive_min = 0.0, message = "Minimum amount must be positive"))]
    pub min_amount: f64,

    pub max_amount: f64,

    #[validate(range(min = 1, message = "Minimum term is at least one month"))]
    pub min_term_months: u32,

    pub max_term_months: u32,

    #[validate(range(min = 0.0, max = 100.0, message = "Interest rate must be between 0 and 100"))]
    pub annual_interest_rate: f64,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

fn validate_bounds(draft: &CalculatorConfigDraft) -> Result<(), ValidationError> {
    if draft.min_amount > draft.max_amount {
        return Err(ValidationError::new("amount_bounds")
            .with_message("min_amount must not exceed max_amount".into()));
    }
    if draft.min_term_months > draft.max_term_months {
        return Err(ValidationError::new("term_bounds")
            .with_message("min_term_months must not exceed max_term_months".into()));
    }
    Ok(())
}

impl Record for CalculatorConfig {
    type Id = Uuid;
    type Draft = CalculatorConfigDraft;

    const RESOURCE: &'static str = "calculator";

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn from_draft(id: Uuid, draft: CalculatorConfigDraft) -> Self {
        Self {
            id,
            product_key: draft.product_key,
            name_mn: draft.name_mn,
            name_en: draft.name_en,
            min_amount: draft.min_amount,
            max_amount: draft.max_amount,
            min_term_months: draft.min_term_months,
            max_term_months: draft.max_term_months,
            annual_interest_rate: draft.annual_interest_rate,
            is_active: draft.is_active,
        }
    }

    fn apply_draft(&mut self, draft: CalculatorConfigDraft) {
        let id = self.id;
        *self = Self::from_draft(id, draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CalculatorConfigDraft {
        CalculatorConfigDraft {
            product_key: "salary-loan".to_string(),
            name_mn: "Цалингийн зээл".to_string(),
            name_en: "Salary loan".to_string(),
            min_amount: 500_000.0,
            max_amount: 50_000_000.0,
            min_term_months: 3,
            max_term_months: 36,
            annual_interest_rate: 18.0,
            is_active: true,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let mut d = draft();
        d.min_term_months = 48;
        assert!(d.validate().is_err());

        let mut d = draft();
        d.max_amount = 1.0;
        assert!(d.validate().is_err());
    }
}
