//! Exchange-rate ticker with simulated movement

use rand::Rng;
use serde::Serialize;

use crate::domain::{RateCategory, RateQuote};

/// How often clients are expected to poll, in seconds.
pub const REFRESH_INTERVAL_SECS: u64 = 30;

/// Largest relative move applied to a base value per snapshot.
pub const MAX_JITTER: f64 = 0.005;

#[derive(Debug, Clone, Serialize)]
pub struct RatesSnapshot {
    pub quotes: Vec<RateQuote>,
    pub refresh_interval_secs: u64,
}

#[derive(Debug, Clone)]
struct BaseQuote {
    code: &'static str,
    name: &'static str,
    category: RateCategory,
    value: f64,
}

/// Fixed base quotes with random jitter on every snapshot.
#[derive(Debug, Clone)]
pub struct RatesService {
    base: Vec<BaseQuote>,
}

impl Default for RatesService {
    fn default() -> Self {
        Self::new()
    }
}

impl RatesService {
    pub fn new() -> Self {
        use RateCategory::*;
        let base = vec![
            BaseQuote { code: "USD", name: "US Dollar", category: Currency, value: 3_450.0 },
            BaseQuote { code: "EUR", name: "Euro", category: Currency, value: 3_740.0 },
            BaseQuote { code: "CNY", name: "Chinese Yuan", category: Currency, value: 478.5 },
            BaseQuote { code: "RUB", name: "Russian Ruble", category: Currency, value: 37.8 },
            BaseQuote { code: "JPY", name: "Japanese Yen", category: Currency, value: 23.1 },
            BaseQuote { code: "KRW", name: "South Korean Won", category: Currency, value: 2.52 },
            BaseQuote { code: "XAU", name: "Gold (oz)", category: Commodity, value: 2_340.0 },
            BaseQuote { code: "XAG", name: "Silver (oz)", category: Commodity, value: 29.4 },
            BaseQuote { code: "BTC", name: "Bitcoin", category: Crypto, value: 67_000.0 },
            BaseQuote { code: "ETH", name: "Ethereum", category: Crypto, value: 3_500.0 },
        ];
        Self { base }
    }

    pub fn snapshot(&self) -> RatesSnapshot {
        let mut rng = rand::rng();
        let quotes = self
            .base
            .iter()
            .map(|base| {
                let jitter = rng.random_range(-MAX_JITTER..=MAX_JITTER);
                RateQuote {
                    code: base.code.to_string(),
                    name: base.name.to_string(),
                    category: base.category,
                    value: round_to(base.value * (1.0 + jitter), 4),
                    change_percent: round_to(jitter * 100.0, 2),
                }
            })
            .collect();

        RatesSnapshot {
            quotes,
            refresh_interval_secs: REFRESH_INTERVAL_SECS,
        }
    }

    pub fn base_value(&self, code: &str) -> Option<f64> {
        self.base.iter().find(|q| q.code == code).map(|q| q.value)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_within_jitter() {
        let service = RatesService::new();
        for _ in 0..50 {
            let snapshot = service.snapshot();
            assert_eq!(snapshot.quotes.len(), 10);
            assert_eq!(snapshot.refresh_interval_secs, 30);
            for quote in &snapshot.quotes {
                let base = service.base_value(&quote.code).unwrap();
                let bound = base * MAX_JITTER + 1e-3;
                assert!((quote.value - base).abs() <= bound, "{} moved too far", quote.code);
                assert!(quote.change_percent.abs() <= MAX_JITTER * 100.0 + 1e-9);
            }
        }
    }

    #[test]
    fn test_every_category_present() {
        let quotes = RatesService::new().snapshot().quotes;
        for category in [RateCategory::Currency, RateCategory::Commodity, RateCategory::Crypto] {
            assert!(quotes.iter().any(|q| q.category == category));
        }
    }
}
