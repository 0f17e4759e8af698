//! Retirement corpus sustainability
//!
//! Year-by-year loop: the corpus earns a blended return weighted across the
//! asset allocation, then pays out an annual withdrawal that inflates every
//! year. Runs until the corpus is exhausted or the horizon ends.

use serde::{Deserialize, Serialize};

use crate::consts::{FIRE_MULTIPLE, SAFE_WITHDRAWAL_RATE_PCT};
use crate::inflate;

/// Asset allocation weights and per-class expected returns (all %)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationAssumptions {
    pub equity_pct: f64,
    pub debt_pct: f64,
    pub cash_pct: f64,
    pub equity_return_pct: f64,
    pub debt_return_pct: f64,
    pub cash_return_pct: f64,
}

impl Default for AllocationAssumptions {
    fn default() -> Self {
        Self {
            equity_pct: 60.0,
            debt_pct: 30.0,
            cash_pct: 10.0,
            equity_return_pct: 12.0,
            debt_return_pct: 7.0,
            cash_return_pct: 4.0,
        }
    }
}

impl AllocationAssumptions {
    /// Weighted blended return (%). Weights that don't sum to 100 are
    /// normalized first so a half-edited form still blends sensibly; an
    /// all-zero allocation blends to 0.
    pub fn blended_return_pct(&self) -> f64 {
        let total = self.equity_pct + self.debt_pct + self.cash_pct;
        if total <= 0.0 {
            return 0.0;
        }
        (self.equity_pct * self.equity_return_pct
            + self.debt_pct * self.debt_return_pct
            + self.cash_pct * self.cash_return_pct)
            / total
    }
}

/// One year of the drawdown ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementYearRow {
    /// Years since retirement (1-based)
    pub year: u32,
    pub opening: f64,
    pub growth: f64,
    pub withdrawal: f64,
    pub closing: f64,
}

/// Computed outputs for the retirement page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    /// Today's annual expense inflated to the retirement date
    pub expense_at_retirement: f64,
    pub blended_return_pct: f64,
    /// 25× (or SWR-based) corpus needed at retirement
    pub fire_number: f64,
    /// Years the corpus survived (horizon years if it never ran out)
    pub years_lasted: u32,
    pub sustains_horizon: bool,
    pub yearly: Vec<RetirementYearRow>,
}

/// FIRE corpus for an annual expense at a given safe withdrawal rate;
/// a non-positive SWR falls back to the classic 25× rule
pub fn fire_number(annual_expense: f64, swr_pct: f64) -> f64 {
    if swr_pct <= 0.0 {
        annual_expense * FIRE_MULTIPLE
    } else {
        annual_expense * 100.0 / swr_pct
    }
}

/// Run the sustainability loop over `horizon_years` of retirement
pub fn retirement(
    corpus: f64,
    annual_expense_today: f64,
    years_to_retirement: u32,
    inflation_pct: f64,
    alloc: &AllocationAssumptions,
    horizon_years: u32,
) -> RetirementResult {
    let blended = alloc.blended_return_pct();
    let expense_at_retirement = inflate(annual_expense_today, inflation_pct, years_to_retirement);
    let fire = fire_number(expense_at_retirement, SAFE_WITHDRAWAL_RATE_PCT);

    let mut balance = corpus.max(0.0);
    let mut withdrawal = expense_at_retirement;
    let mut yearly = Vec::new();
    let mut years_lasted = horizon_years;
    let mut sustains = true;

    for year in 1..=horizon_years {
        if balance <= 0.0 {
            years_lasted = year - 1;
            sustains = false;
            break;
        }
        let opening = balance;
        let growth = balance * blended / 100.0;
        balance += growth;
        let paid = withdrawal.min(balance);
        balance -= paid;
        yearly.push(RetirementYearRow {
            year,
            opening,
            growth,
            withdrawal: paid,
            closing: balance,
        });
        if balance < 0.005 {
            balance = 0.0;
            years_lasted = year;
            sustains = false;
            break;
        }
        withdrawal *= 1.0 + inflation_pct / 100.0;
    }

    RetirementResult {
        expense_at_retirement,
        blended_return_pct: blended,
        fire_number: fire,
        years_lasted,
        sustains_horizon: sustains,
        yearly,
    }
}
