//! Nivesh Dash - a personal finance dashboard
//!
//! Core modules:
//! - `calc`: Pure financial math (FV, SIP, SWP, EMI, PPF/EPF, retirement)
//! - `pages`: Per-page input records persisted to LocalStorage
//! - `store`: LocalStorage persistence and export/import envelope
//! - `settings`: App preferences
//! - `ui`: Browser DOM helpers (toasts, input/output binding)

pub mod calc;
pub mod pages;
pub mod settings;
pub mod store;
pub mod ui;

pub use settings::{CurrencyStyle, Settings};

/// Financial defaults and display limits
pub mod consts {
    /// Months in a year (monthly-rate conversions)
    pub const MONTHS_PER_YEAR: u32 = 12;

    /// Default annual inflation assumption (%)
    pub const DEFAULT_INFLATION_PCT: f64 = 6.0;
    /// Default expected annual return (%)
    pub const DEFAULT_RETURN_PCT: f64 = 12.0;

    /// PPF statutory rate (%) and tenure
    pub const PPF_RATE_PCT: f64 = 7.1;
    pub const PPF_TENURE_YEARS: u32 = 15;
    /// PPF annual deposit cap (₹)
    pub const PPF_ANNUAL_CAP: f64 = 150_000.0;

    /// EPF interest rate (%) and contribution splits (% of basic salary)
    pub const EPF_RATE_PCT: f64 = 8.25;
    pub const EPF_EMPLOYEE_PCT: f64 = 12.0;
    /// Employer share routed to EPF (rest goes to EPS)
    pub const EPF_EMPLOYER_PCT: f64 = 3.67;

    /// FIRE corpus as a multiple of annual expenses
    pub const FIRE_MULTIPLE: f64 = 25.0;
    /// Default safe withdrawal rate (%)
    pub const SAFE_WITHDRAWAL_RATE_PCT: f64 = 4.0;

    /// Maximum schedule rows retained for display (totals cover the full run)
    pub const MAX_SCHEDULE_ROWS: usize = 360;
}

/// Annual percentage to monthly fractional rate
#[inline]
pub fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / consts::MONTHS_PER_YEAR as f64
}

/// Annual percentage to fractional rate
#[inline]
pub fn annual_rate(annual_pct: f64) -> f64 {
    annual_pct / 100.0
}

/// Compound an amount over `periods` at a per-period fractional rate
#[inline]
pub fn compound(amount: f64, rate_per_period: f64, periods: u32) -> f64 {
    amount * (1.0 + rate_per_period).powi(periods as i32)
}

/// Inflate today's amount to its nominal value after `years`
#[inline]
pub fn inflate(amount: f64, annual_inflation_pct: f64, years: u32) -> f64 {
    compound(amount, annual_rate(annual_inflation_pct), years)
}

/// Format an amount with Indian digit grouping: 12345678 → "₹1,23,45,678"
///
/// Rounds to whole rupees. Non-finite input renders as "—" so a half-typed
/// form never shows NaN.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let negative = amount < -0.5;
    let rounded = amount.abs().round() as u64;
    let grouped = group_indian(&rounded.to_string());
    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Format with paise (two decimals), same grouping
pub fn format_inr_paise(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let negative = amount < 0.0;
    let abs = amount.abs();
    let mut whole = abs.trunc() as u64;
    let mut paise = ((abs - abs.trunc()) * 100.0).round() as u64;
    // .999 rounds up into the rupee column
    if paise >= 100 {
        whole += 1;
        paise = 0;
    }
    let grouped = group_indian(&whole.to_string());
    if negative {
        format!("-₹{}.{:02}", grouped, paise)
    } else {
        format!("₹{}.{:02}", grouped, paise)
    }
}

/// Plain western grouping for the `CurrencyStyle::Plain` preference
pub fn format_plain(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let negative = amount < -0.5;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();
    let mut parts: Vec<&str> = Vec::new();
    let mut i = digits.len();
    while i > 0 {
        let start = i.saturating_sub(3);
        parts.push(&digits[start..i]);
        i = start;
    }
    parts.reverse();
    let grouped = parts.join(",");
    if negative {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

/// Indian grouping: last 3 digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 0 {
        let start = i.saturating_sub(2);
        parts.push(&head[start..i]);
        i = start;
    }
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}
