//! Lumpsum FV page record

use serde::{Deserialize, Serialize};

use crate::calc::{LumpsumResult, lumpsum};
use crate::consts::{DEFAULT_INFLATION_PCT, DEFAULT_RETURN_PCT};
use crate::store;

/// Inputs the lumpsum page persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumPage {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
    #[serde(default = "default_inflation")]
    pub inflation_pct: f64,
}

fn default_inflation() -> f64 {
    DEFAULT_INFLATION_PCT
}

impl Default for LumpsumPage {
    fn default() -> Self {
        Self {
            principal: 100_000.0,
            annual_rate_pct: DEFAULT_RETURN_PCT,
            years: 10,
            inflation_pct: DEFAULT_INFLATION_PCT,
        }
    }
}

impl LumpsumPage {
    pub const STORAGE_KEY: &'static str = "nivesh_lumpsum";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    pub fn compute(&self) -> LumpsumResult {
        lumpsum(
            self.principal,
            self.annual_rate_pct,
            self.years,
            self.inflation_pct,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_computes() {
        let r = LumpsumPage::default().compute();
        assert!((r.future_value - 310_584.82).abs() < 0.01);
    }

    #[test]
    fn test_persistence_round_trip() {
        let page = LumpsumPage {
            principal: 42_000.0,
            annual_rate_pct: 9.5,
            years: 7,
            inflation_pct: 5.0,
        };
        page.save();
        assert_eq!(LumpsumPage::load(), page);
    }

    #[test]
    fn test_old_blob_without_inflation_field_loads() {
        // Records written before the inflation field existed
        store::raw_set(
            LumpsumPage::STORAGE_KEY,
            r#"{"principal":5000.0,"annual_rate_pct":8.0,"years":3}"#,
        );
        let page = LumpsumPage::load();
        assert_eq!(page.principal, 5_000.0);
        assert_eq!(page.inflation_pct, DEFAULT_INFLATION_PCT);
    }
}
