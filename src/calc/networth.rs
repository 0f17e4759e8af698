//! Net worth aggregation and asset allocation
//!
//! Pure reduction over the two line-item lists the page record owns.
//! Allocation is the per-category share of total assets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One asset or liability row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Timestamp-based row key, assigned when the row is created
    pub id: String,
    pub name: String,
    pub category: String,
    pub value: f64,
}

/// Per-category share of total assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub category: String,
    pub value: f64,
    pub pct: f64,
}

/// Computed outputs for the net worth page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetWorthSummary {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    /// Largest category first; ties break alphabetically
    pub allocation: Vec<AllocationSlice>,
}

/// Aggregate assets and liabilities into the page summary
pub fn summarize(assets: &[LineItem], liabilities: &[LineItem]) -> NetWorthSummary {
    let total_assets: f64 = assets.iter().map(|a| a.value).sum();
    let total_liabilities: f64 = liabilities.iter().map(|l| l.value).sum();

    let mut by_category: BTreeMap<&str, f64> = BTreeMap::new();
    for item in assets {
        *by_category.entry(item.category.as_str()).or_insert(0.0) += item.value;
    }

    let mut allocation: Vec<AllocationSlice> = by_category
        .into_iter()
        .map(|(category, value)| AllocationSlice {
            category: category.to_string(),
            value,
            pct: if total_assets > 0.0 {
                value / total_assets * 100.0
            } else {
                0.0
            },
        })
        .collect();
    allocation.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    NetWorthSummary {
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        allocation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str, value: f64) -> LineItem {
        LineItem {
            id: id.to_string(),
            name: id.to_string(),
            category: category.to_string(),
            value,
        }
    }

    #[test]
    fn test_empty_lists() {
        let s = summarize(&[], &[]);
        assert_eq!(s.net_worth, 0.0);
        assert!(s.allocation.is_empty());
    }

    #[test]
    fn test_net_worth_is_assets_minus_liabilities() {
        let assets = [item("a", "Equity", 500_000.0), item("b", "Gold", 200_000.0)];
        let liabilities = [item("c", "Home Loan", 300_000.0)];
        let s = summarize(&assets, &liabilities);
        assert_eq!(s.total_assets, 700_000.0);
        assert_eq!(s.total_liabilities, 300_000.0);
        assert_eq!(s.net_worth, 400_000.0);
    }

    #[test]
    fn test_allocation_groups_and_sorts() {
        let assets = [
            item("a", "Equity", 300_000.0),
            item("b", "Debt", 500_000.0),
            item("c", "Equity", 200_000.0),
        ];
        let s = summarize(&assets, &[]);
        assert_eq!(s.allocation.len(), 2);
        assert_eq!(s.allocation[0].category, "Debt");
        assert_eq!(s.allocation[1].category, "Equity");
        assert!((s.allocation[0].pct - 50.0).abs() < 1e-12);
        assert!((s.allocation[1].pct - 50.0).abs() < 1e-12);
        let pct_sum: f64 = s.allocation.iter().map(|a| a.pct).sum();
        assert!((pct_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_net_worth() {
        let s = summarize(&[item("a", "Cash", 10_000.0)], &[item("b", "Loan", 50_000.0)]);
        assert_eq!(s.net_worth, -40_000.0);
    }
}
