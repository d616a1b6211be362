//! Exchange-rate ticker quote

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateCategory {
    Currency,
    Commodity,
    Crypto,
}

/// Quote as shown on the ticker. `value` is in MNT for currencies and in
/// USD for commodities and crypto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub code: String,
    pub name: String,
    pub category: RateCategory,
    pub value: f64,
    pub change_percent: f64,
}
