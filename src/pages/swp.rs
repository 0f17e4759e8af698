//! SWP page record

use serde::{Deserialize, Serialize};

use crate::calc::{SwpResult, swp};
use crate::consts::DEFAULT_INFLATION_PCT;
use crate::store;

/// Inputs the SWP page persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpPage {
    pub corpus: f64,
    pub annual_rate_pct: f64,
    pub monthly_withdrawal: f64,
    /// Annual inflation applied to the withdrawal (%), 0 = fixed withdrawal
    #[serde(default)]
    pub inflation_pct: f64,
    pub horizon_years: u32,
}

impl Default for SwpPage {
    fn default() -> Self {
        Self {
            corpus: 5_000_000.0,
            annual_rate_pct: 8.0,
            monthly_withdrawal: 30_000.0,
            inflation_pct: DEFAULT_INFLATION_PCT,
            horizon_years: 30,
        }
    }
}

impl SwpPage {
    pub const STORAGE_KEY: &'static str = "nivesh_swp";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    pub fn compute(&self) -> SwpResult {
        swp(
            self.corpus,
            self.annual_rate_pct,
            self.monthly_withdrawal,
            self.inflation_pct,
            self.horizon_years,
        )
    }
}
