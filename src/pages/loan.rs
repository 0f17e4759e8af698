//! Loan/EMI page record

use serde::{Deserialize, Serialize};

use crate::calc::{LoanResult, amortize};
use crate::store;

/// Inputs the loan page persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanPage {
    pub principal: f64,
    pub annual_rate_pct: f64,
    pub months: u32,
    /// Fixed extra principal paid every month, 0 = none
    #[serde(default)]
    pub extra_monthly: f64,
}

impl Default for LoanPage {
    fn default() -> Self {
        Self {
            principal: 3_000_000.0,
            annual_rate_pct: 8.5,
            months: 240,
            extra_monthly: 0.0,
        }
    }
}

impl LoanPage {
    pub const STORAGE_KEY: &'static str = "nivesh_loan";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    pub fn compute(&self) -> LoanResult {
        amortize(
            self.principal,
            self.annual_rate_pct,
            self.months,
            self.extra_monthly,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_computes() {
        let r = LoanPage::default().compute();
        assert_eq!(r.months, 240);
        assert!(r.total_interest > 0.0);
    }

    #[test]
    fn test_persistence_round_trip() {
        let page = LoanPage {
            principal: 750_000.0,
            annual_rate_pct: 10.25,
            months: 60,
            extra_monthly: 2_000.0,
        };
        page.save();
        assert_eq!(LoanPage::load(), page);
    }
}
