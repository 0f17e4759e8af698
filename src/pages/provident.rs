//! PPF and EPF page records

use serde::{Deserialize, Serialize};

use crate::calc::{EpfResult, PpfResult, epf, ppf};
use crate::consts::{
    EPF_EMPLOYEE_PCT, EPF_EMPLOYER_PCT, EPF_RATE_PCT, PPF_ANNUAL_CAP, PPF_RATE_PCT,
    PPF_TENURE_YEARS,
};
use crate::store;

/// Inputs the PPF page persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfPage {
    pub annual_deposit: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
}

impl Default for PpfPage {
    fn default() -> Self {
        Self {
            annual_deposit: PPF_ANNUAL_CAP,
            annual_rate_pct: PPF_RATE_PCT,
            years: PPF_TENURE_YEARS,
        }
    }
}

impl PpfPage {
    pub const STORAGE_KEY: &'static str = "nivesh_ppf";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    pub fn compute(&self) -> PpfResult {
        ppf(self.annual_deposit, self.annual_rate_pct, self.years)
    }
}

/// Inputs the EPF page persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpfPage {
    pub monthly_basic: f64,
    pub employee_pct: f64,
    pub employer_pct: f64,
    pub annual_rate_pct: f64,
    pub years: u32,
    /// Annual basic-salary increment (%), 0 = flat salary
    #[serde(default)]
    pub salary_stepup_pct: f64,
}

impl Default for EpfPage {
    fn default() -> Self {
        Self {
            monthly_basic: 50_000.0,
            employee_pct: EPF_EMPLOYEE_PCT,
            employer_pct: EPF_EMPLOYER_PCT,
            annual_rate_pct: EPF_RATE_PCT,
            years: 20,
            salary_stepup_pct: 5.0,
        }
    }
}

impl EpfPage {
    pub const STORAGE_KEY: &'static str = "nivesh_epf";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    pub fn compute(&self) -> EpfResult {
        epf(
            self.monthly_basic,
            self.employee_pct,
            self.employer_pct,
            self.annual_rate_pct,
            self.years,
            self.salary_stepup_pct,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pages_compute() {
        let p = PpfPage::default().compute();
        assert_eq!(p.yearly.len(), PPF_TENURE_YEARS as usize);
        let e = EpfPage::default().compute();
        assert!(e.maturity > e.total_employee + e.total_employer);
    }

    #[test]
    fn test_persistence_round_trip() {
        let ppf_page = PpfPage {
            annual_deposit: 100_000.0,
            annual_rate_pct: 7.1,
            years: 20,
        };
        ppf_page.save();
        assert_eq!(PpfPage::load(), ppf_page);

        let epf_page = EpfPage {
            monthly_basic: 80_000.0,
            salary_stepup_pct: 8.0,
            ..EpfPage::default()
        };
        epf_page.save();
        assert_eq!(EpfPage::load(), epf_page);
    }
}
