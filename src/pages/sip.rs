//! SIP page record

use serde::{Deserialize, Serialize};

use crate::calc::{SipResult, sip};
use crate::consts::DEFAULT_RETURN_PCT;
use crate::store;

/// Inputs the SIP page persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipPage {
    pub monthly_deposit: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
    /// Annual step-up of the deposit (%), 0 = flat SIP
    #[serde(default)]
    pub stepup_pct: f64,
}

impl Default for SipPage {
    fn default() -> Self {
        Self {
            monthly_deposit: 10_000.0,
            annual_rate_pct: DEFAULT_RETURN_PCT,
            years: 10,
            stepup_pct: 0.0,
        }
    }
}

impl SipPage {
    pub const STORAGE_KEY: &'static str = "nivesh_sip";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    pub fn compute(&self) -> SipResult {
        sip(
            self.monthly_deposit,
            self.annual_rate_pct,
            self.years,
            self.stepup_pct,
        )
    }
}
