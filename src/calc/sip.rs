//! SIP (Systematic Investment Plan) projection
//!
//! Deposits land at the start of each month (annuity due):
//! FV = P × [((1+i)^n − 1)/i] × (1+i), i = monthly rate, n = months.
//! Step-up SIPs (deposit grows annually) have no tidy closed form, so the
//! projection runs the monthly loop and the closed form is kept for the
//! plain case and for cross-checking.

use serde::{Deserialize, Serialize};

use crate::consts::MONTHS_PER_YEAR;
use crate::monthly_rate;

/// End-of-year snapshot for charting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipYearRow {
    pub year: u32,
    /// Cumulative amount deposited by year end
    pub invested: f64,
    /// Corpus value at year end
    pub value: f64,
}

/// Computed outputs for the SIP page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub invested: f64,
    pub future_value: f64,
    pub wealth_gained: f64,
    pub yearly: Vec<SipYearRow>,
}

/// Closed-form annuity-due FV; i = 0 degenerates to P × n
pub fn sip_fv(monthly_deposit: f64, annual_rate_pct: f64, months: u32) -> f64 {
    let i = monthly_rate(annual_rate_pct);
    if i == 0.0 {
        return monthly_deposit * months as f64;
    }
    let growth = (1.0 + i).powi(months as i32);
    monthly_deposit * ((growth - 1.0) / i) * (1.0 + i)
}

/// Monthly-loop projection with an optional annual step-up of the deposit
pub fn sip(
    monthly_deposit: f64,
    annual_rate_pct: f64,
    years: u32,
    stepup_pct: f64,
) -> SipResult {
    let i = monthly_rate(annual_rate_pct);
    let mut balance = 0.0_f64;
    let mut invested = 0.0_f64;
    let mut deposit = monthly_deposit;
    let mut yearly = Vec::with_capacity(years as usize);

    for year in 1..=years {
        for _ in 0..MONTHS_PER_YEAR {
            invested += deposit;
            balance = (balance + deposit) * (1.0 + i);
        }
        yearly.push(SipYearRow {
            year,
            invested,
            value: balance,
        });
        deposit *= 1.0 + stepup_pct / 100.0;
    }

    SipResult {
        invested,
        future_value: balance,
        wealth_gained: balance - invested,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_value() {
        // 10k/month at 12% for 10 years
        let fv = sip_fv(10_000.0, 12.0, 120);
        assert!((fv - 2_323_391.0).abs() < 5.0, "fv = {fv}");
    }

    #[test]
    fn test_zero_rate_sums_deposits() {
        assert_eq!(sip_fv(5_000.0, 0.0, 24), 120_000.0);
        let r = sip(5_000.0, 0.0, 2, 0.0);
        assert!((r.future_value - 120_000.0).abs() < 1e-9);
        assert!((r.wealth_gained).abs() < 1e-9);
    }

    #[test]
    fn test_loop_matches_closed_form() {
        let r = sip(10_000.0, 12.0, 10, 0.0);
        let fv = sip_fv(10_000.0, 12.0, 120);
        assert!((r.future_value - fv).abs() / fv < 1e-10);
        assert_eq!(r.yearly.len(), 10);
        assert!((r.invested - 1_200_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_stepup_invests_and_earns_more() {
        let flat = sip(10_000.0, 12.0, 10, 0.0);
        let stepped = sip(10_000.0, 12.0, 10, 10.0);
        assert!(stepped.invested > flat.invested);
        assert!(stepped.future_value > flat.future_value);
        // First year is identical, step-up applies from year two
        assert!((stepped.yearly[0].value - flat.yearly[0].value).abs() < 1e-9);
    }

    #[test]
    fn test_yearly_rows_are_cumulative() {
        let r = sip(2_000.0, 8.0, 5, 0.0);
        for pair in r.yearly.windows(2) {
            assert!(pair[1].invested > pair[0].invested);
            assert!(pair[1].value > pair[0].value);
        }
        let last = r.yearly.last().unwrap();
        assert!((last.value - r.future_value).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_fv_monotonic_in_months(
            p in 100.0f64..1e6,
            rate in 0.0f64..24.0,
            months in 1u32..480,
        ) {
            prop_assert!(sip_fv(p, rate, months + 1) >= sip_fv(p, rate, months));
        }

        #[test]
        fn prop_fv_at_least_invested(
            p in 100.0f64..1e6,
            rate in 0.0f64..24.0,
            months in 1u32..480,
        ) {
            prop_assert!(sip_fv(p, rate, months) >= p * months as f64 - 1e-6);
        }
    }
}
