//! SWP (Systematic Withdrawal Plan) depletion
//!
//! Monthly loop: apply growth first, then withdraw. The withdrawal amount
//! optionally inflates once per year. Runs until the corpus hits zero or the
//! horizon ends.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCHEDULE_ROWS, MONTHS_PER_YEAR};
use crate::monthly_rate;

/// One month of the withdrawal schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpRow {
    pub month: u32,
    pub opening: f64,
    pub growth: f64,
    pub withdrawal: f64,
    pub closing: f64,
}

/// Computed outputs for the SWP page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpResult {
    /// Months the corpus survived (horizon months if it never ran out)
    pub months_lasted: u32,
    /// True if the corpus hit zero before the horizon
    pub depleted: bool,
    pub total_withdrawn: f64,
    pub final_balance: f64,
    /// Schedule rows, capped for display; totals cover the full run
    pub schedule: Vec<SwpRow>,
}

/// Run the depletion loop over `horizon_years`
pub fn swp(
    corpus: f64,
    annual_rate_pct: f64,
    monthly_withdrawal: f64,
    annual_inflation_pct: f64,
    horizon_years: u32,
) -> SwpResult {
    let i = monthly_rate(annual_rate_pct);
    let horizon_months = horizon_years * MONTHS_PER_YEAR;

    if corpus <= 0.0 {
        return SwpResult {
            months_lasted: 0,
            depleted: true,
            total_withdrawn: 0.0,
            final_balance: 0.0,
            schedule: Vec::new(),
        };
    }

    let mut balance = corpus;
    let mut withdrawal = monthly_withdrawal;
    let mut total_withdrawn = 0.0;
    let mut schedule = Vec::new();
    let mut months_lasted = horizon_months;
    let mut depleted = false;

    for month in 1..=horizon_months {
        let opening = balance;
        let growth = balance * i;
        balance += growth;
        let paid = withdrawal.min(balance);
        balance -= paid;
        total_withdrawn += paid;

        if schedule.len() < MAX_SCHEDULE_ROWS {
            schedule.push(SwpRow {
                month,
                opening,
                growth,
                withdrawal: paid,
                closing: balance,
            });
        }

        // Sub-paisa residue counts as gone
        if balance < 0.005 {
            balance = 0.0;
            months_lasted = month;
            depleted = true;
            break;
        }

        if month % MONTHS_PER_YEAR == 0 {
            withdrawal *= 1.0 + annual_inflation_pct / 100.0;
        }
    }

    SwpResult {
        months_lasted,
        depleted,
        total_withdrawn,
        final_balance: balance,
        schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_corpus_lasts_zero_months() {
        let r = swp(0.0, 8.0, 10_000.0, 0.0, 20);
        assert_eq!(r.months_lasted, 0);
        assert!(r.depleted);
        assert_eq!(r.total_withdrawn, 0.0);
    }

    #[test]
    fn test_zero_withdrawal_never_depletes() {
        let r = swp(1_000_000.0, 12.0, 0.0, 0.0, 10);
        assert!(!r.depleted);
        assert_eq!(r.months_lasted, 120);
        // Corpus just compounds monthly
        let expected = 1_000_000.0 * 1.01_f64.powi(120);
        assert!((r.final_balance - expected).abs() < 1e-3);
    }

    #[test]
    fn test_zero_growth_linear_depletion() {
        // 120k at zero return, 10k/month → exactly 12 months
        let r = swp(120_000.0, 0.0, 10_000.0, 0.0, 5);
        assert!(r.depleted);
        assert_eq!(r.months_lasted, 12);
        assert!((r.total_withdrawn - 120_000.0).abs() < 1e-6);
        assert_eq!(r.final_balance, 0.0);
    }

    #[test]
    fn test_withdrawal_capped_at_balance() {
        let r = swp(15_000.0, 0.0, 10_000.0, 0.0, 5);
        assert_eq!(r.months_lasted, 2);
        assert!((r.schedule[1].withdrawal - 5_000.0).abs() < 1e-9);
        assert!((r.total_withdrawn - 15_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_inflation_raises_later_withdrawals() {
        let r = swp(10_000_000.0, 8.0, 20_000.0, 10.0, 3);
        // Month 13 withdrawal is 10% above month 12
        let m12 = r.schedule[11].withdrawal;
        let m13 = r.schedule[12].withdrawal;
        assert!((m13 / m12 - 1.10).abs() < 1e-9);
    }

    #[test]
    fn test_schedule_rows_chain() {
        let r = swp(500_000.0, 9.0, 8_000.0, 6.0, 10);
        for pair in r.schedule.windows(2) {
            assert!((pair[0].closing - pair[1].opening).abs() < 1e-9);
        }
        for row in &r.schedule {
            assert!((row.opening + row.growth - row.withdrawal - row.closing).abs() < 1e-9);
        }
    }

    proptest! {
        #[test]
        fn prop_higher_rate_never_shortens(
            corpus in 10_000.0f64..1e8,
            w in 100.0f64..50_000.0,
            rate in 0.0f64..15.0,
            bump in 0.1f64..10.0,
        ) {
            let lo = swp(corpus, rate, w, 0.0, 30);
            let hi = swp(corpus, rate + bump, w, 0.0, 30);
            prop_assert!(hi.months_lasted >= lo.months_lasted);
        }
    }
}
