//! Retirement corpus page record

use serde::{Deserialize, Serialize};

use crate::calc::{AllocationAssumptions, RetirementResult, retirement};
use crate::consts::DEFAULT_INFLATION_PCT;
use crate::store;

/// Inputs the retirement page persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementPage {
    /// Corpus expected at the retirement date
    pub corpus: f64,
    /// Annual household expense in today's money
    pub annual_expense_today: f64,
    pub years_to_retirement: u32,
    pub inflation_pct: f64,
    /// Post-retirement asset mix and return assumptions
    #[serde(default)]
    pub allocation: AllocationAssumptions,
    pub horizon_years: u32,
}

impl Default for RetirementPage {
    fn default() -> Self {
        Self {
            corpus: 30_000_000.0,
            annual_expense_today: 1_200_000.0,
            years_to_retirement: 15,
            inflation_pct: DEFAULT_INFLATION_PCT,
            allocation: AllocationAssumptions::default(),
            horizon_years: 30,
        }
    }
}

impl RetirementPage {
    pub const STORAGE_KEY: &'static str = "nivesh_retirement";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    pub fn compute(&self) -> RetirementResult {
        retirement(
            self.corpus,
            self.annual_expense_today,
            self.years_to_retirement,
            self.inflation_pct,
            &self.allocation,
            self.horizon_years,
        )
    }
}
