//! PPF and EPF projections
//!
//! Both follow the provident-fund interest convention: interest accrues
//! monthly on the contribution balance but is credited to the account only
//! once, at the end of the financial year. PPF takes one lump deposit at the
//! start of each year; EPF takes monthly employee + employer contributions
//! off a basic salary that can step up annually.

use serde::{Deserialize, Serialize};

use crate::consts::MONTHS_PER_YEAR;
use crate::monthly_rate;

/// One financial year of a PPF ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfYearRow {
    pub year: u32,
    pub deposit: f64,
    /// Interest credited at year end
    pub interest: f64,
    pub closing: f64,
}

/// Computed outputs for the PPF page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfResult {
    pub total_deposited: f64,
    pub total_interest: f64,
    pub maturity: f64,
    pub yearly: Vec<PpfYearRow>,
}

/// PPF ledger: lump deposit at year start, monthly accrual, annual credit
pub fn ppf(annual_deposit: f64, annual_rate_pct: f64, years: u32) -> PpfResult {
    let mi = monthly_rate(annual_rate_pct);
    let mut balance = 0.0_f64;
    let mut total_deposited = 0.0;
    let mut total_interest = 0.0;
    let mut yearly = Vec::with_capacity(years as usize);

    for year in 1..=years {
        balance += annual_deposit;
        total_deposited += annual_deposit;
        // Accrue on the credited balance only; this year's interest does not
        // itself earn until next year
        let mut accrued = 0.0;
        for _ in 0..MONTHS_PER_YEAR {
            accrued += balance * mi;
        }
        balance += accrued;
        total_interest += accrued;
        yearly.push(PpfYearRow {
            year,
            deposit: annual_deposit,
            interest: accrued,
            closing: balance,
        });
    }

    PpfResult {
        total_deposited,
        total_interest,
        maturity: balance,
        yearly,
    }
}

/// One financial year of an EPF ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpfYearRow {
    pub year: u32,
    pub employee: f64,
    pub employer: f64,
    pub interest: f64,
    pub closing: f64,
}

/// Computed outputs for the EPF page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpfResult {
    pub total_employee: f64,
    pub total_employer: f64,
    pub total_interest: f64,
    pub maturity: f64,
    pub yearly: Vec<EpfYearRow>,
}

/// EPF ledger: monthly dual contributions, monthly accrual, annual credit,
/// basic salary stepping up once a year
pub fn epf(
    monthly_basic: f64,
    employee_pct: f64,
    employer_pct: f64,
    annual_rate_pct: f64,
    years: u32,
    salary_stepup_pct: f64,
) -> EpfResult {
    let mi = monthly_rate(annual_rate_pct);
    let mut balance = 0.0_f64;
    let mut basic = monthly_basic;
    let mut total_employee = 0.0;
    let mut total_employer = 0.0;
    let mut total_interest = 0.0;
    let mut yearly = Vec::with_capacity(years as usize);

    for year in 1..=years {
        let mut accrued = 0.0;
        let mut employee = 0.0;
        let mut employer = 0.0;
        for _ in 0..MONTHS_PER_YEAR {
            let e = basic * employee_pct / 100.0;
            let r = basic * employer_pct / 100.0;
            balance += e + r;
            employee += e;
            employer += r;
            accrued += balance * mi;
        }
        balance += accrued;
        total_employee += employee;
        total_employer += employer;
        total_interest += accrued;
        yearly.push(EpfYearRow {
            year,
            employee,
            employer,
            interest: accrued,
            closing: balance,
        });
        basic *= 1.0 + salary_stepup_pct / 100.0;
    }

    EpfResult {
        total_employee,
        total_employer,
        total_interest,
        maturity: balance,
        yearly,
    }
}
