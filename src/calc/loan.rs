//! Loan EMI and amortization
//!
//! EMI = P × i × (1+i)^n / ((1+i)^n − 1). The schedule splits each payment
//! into interest on the running balance and principal, decrementing the
//! balance until it clears. An optional fixed monthly prepayment goes
//! straight to principal and shortens the tenure.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_SCHEDULE_ROWS;
use crate::monthly_rate;

/// One month of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortRow {
    pub month: u32,
    pub interest: f64,
    pub principal: f64,
    pub closing: f64,
}

/// Computed outputs for the loan page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub emi: f64,
    /// Months actually taken to clear (less than tenure when prepaying)
    pub months: u32,
    pub total_interest: f64,
    pub total_payment: f64,
    /// Schedule rows, capped for display; totals cover the full run
    pub schedule: Vec<AmortRow>,
}

/// Closed-form EMI; i = 0 degenerates to P/n
pub fn emi(principal: f64, annual_rate_pct: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let i = monthly_rate(annual_rate_pct);
    if i == 0.0 {
        return principal / months as f64;
    }
    let growth = (1.0 + i).powi(months as i32);
    principal * i * growth / (growth - 1.0)
}

/// Build the full amortization schedule
pub fn amortize(
    principal: f64,
    annual_rate_pct: f64,
    months: u32,
    extra_monthly: f64,
) -> LoanResult {
    let payment = emi(principal, annual_rate_pct, months);
    let i = monthly_rate(annual_rate_pct);

    let mut balance = principal;
    let mut total_interest = 0.0;
    let mut schedule = Vec::new();
    let mut months_taken = 0;

    for month in 1..=months {
        if balance <= 0.0 {
            break;
        }
        let interest = balance * i;
        let mut principal_part = payment - interest + extra_monthly;
        // Final payment clears the residual instead of overshooting
        if principal_part >= balance {
            principal_part = balance;
        }
        balance -= principal_part;
        total_interest += interest;
        months_taken = month;

        if schedule.len() < MAX_SCHEDULE_ROWS {
            schedule.push(AmortRow {
                month,
                interest,
                principal: principal_part,
                closing: balance,
            });
        }
        if balance <= 0.0 {
            break;
        }
    }

    LoanResult {
        emi: payment,
        months: months_taken,
        total_interest,
        total_payment: principal + total_interest,
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emi_known_value() {
        // 10L home loan at 9% over 20 years
        let e = emi(1_000_000.0, 9.0, 240);
        assert!((e - 8997.26).abs() < 0.01, "emi = {e}");
    }

    #[test]
    fn test_zero_rate_emi_is_straight_line() {
        assert_eq!(emi(120_000.0, 0.0, 12), 10_000.0);
    }

    #[test]
    fn test_zero_tenure() {
        assert_eq!(emi(100_000.0, 9.0, 0), 0.0);
        let r = amortize(100_000.0, 9.0, 0, 0.0);
        assert_eq!(r.months, 0);
        assert!(r.schedule.is_empty());
    }

    #[test]
    fn test_schedule_closes_and_sums() {
        let p = 500_000.0;
        let r = amortize(p, 10.5, 120, 0.0);
        assert_eq!(r.months, 120);
        let last = r.schedule.last().unwrap();
        assert!(last.closing.abs() < 0.01, "residual = {}", last.closing);
        let principal_sum: f64 = r.schedule.iter().map(|row| row.principal).sum();
        assert!((principal_sum - p).abs() < 0.01);
        assert!((r.total_payment - (p + r.total_interest)).abs() < 1e-6);
    }

    #[test]
    fn test_interest_declines_over_time() {
        let r = amortize(1_000_000.0, 9.0, 240, 0.0);
        for pair in r.schedule.windows(2) {
            assert!(pair[1].interest < pair[0].interest);
        }
    }

    #[test]
    fn test_prepayment_shortens_tenure_and_saves_interest() {
        let base = amortize(1_000_000.0, 9.0, 240, 0.0);
        let prepaid = amortize(1_000_000.0, 9.0, 240, 5_000.0);
        assert!(prepaid.months < base.months);
        assert!(prepaid.total_interest < base.total_interest);
        // Loan still clears fully
        let last = prepaid.schedule.last().unwrap();
        assert!(last.closing.abs() < 0.01);
    }
}
