//! App settings and preferences
//!
//! Persisted under its own LocalStorage key like every page record.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INFLATION_PCT, DEFAULT_RETURN_PCT};
use crate::{format_inr, format_plain, store};

/// Currency digit-grouping style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CurrencyStyle {
    /// Lakh/crore grouping: ₹1,23,45,678
    #[default]
    Indian,
    /// Western grouping: ₹12,345,678
    Plain,
}

impl CurrencyStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyStyle::Indian => "Indian",
            CurrencyStyle::Plain => "Plain",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "indian" | "inr" | "lakh" => Some(CurrencyStyle::Indian),
            "plain" | "western" => Some(CurrencyStyle::Plain),
            _ => None,
        }
    }
}

/// App preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency grouping used everywhere amounts are rendered
    pub currency_style: CurrencyStyle,
    /// Inflation (%) pre-filled on pages that take one
    pub default_inflation_pct: f64,
    /// Expected return (%) pre-filled on pages that take one
    pub default_return_pct: f64,
    /// Render month-by-month schedule tables (off for a compact dashboard)
    #[serde(default = "default_true")]
    pub show_schedules: bool,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_style: CurrencyStyle::Indian,
            default_inflation_pct: DEFAULT_INFLATION_PCT,
            default_return_pct: DEFAULT_RETURN_PCT,
            show_schedules: true,
        }
    }
}

impl Settings {
    pub const STORAGE_KEY: &'static str = "nivesh_settings";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    /// Format an amount per the configured grouping style
    pub fn format(&self, amount: f64) -> String {
        match self.currency_style {
            CurrencyStyle::Indian => format_inr(amount),
            CurrencyStyle::Plain => format_plain(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_round_trip() {
        assert_eq!(CurrencyStyle::from_str("Indian"), Some(CurrencyStyle::Indian));
        assert_eq!(CurrencyStyle::from_str("plain"), Some(CurrencyStyle::Plain));
        assert_eq!(CurrencyStyle::from_str("???"), None);
    }

    #[test]
    fn test_format_follows_style() {
        let mut s = Settings::default();
        assert_eq!(s.format(12345678.0), "₹1,23,45,678");
        s.currency_style = CurrencyStyle::Plain;
        assert_eq!(s.format(12345678.0), "₹12,345,678");
    }

    #[test]
    fn test_persistence_round_trip() {
        let s = Settings {
            currency_style: CurrencyStyle::Plain,
            default_inflation_pct: 5.5,
            default_return_pct: 11.0,
            show_schedules: false,
        };
        s.save();
        assert_eq!(Settings::load(), s);
    }

    #[test]
    fn test_old_blob_defaults_show_schedules_on() {
        store::raw_set(
            Settings::STORAGE_KEY,
            r#"{"currency_style":"Indian","default_inflation_pct":6.0,"default_return_pct":12.0}"#,
        );
        assert!(Settings::load().show_schedules);
    }
}
