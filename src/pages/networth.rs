//! Net worth page record
//!
//! The record owns the full asset and liability lists; row-level CRUD just
//! mutates the lists and the whole record is rewritten on save (last write
//! wins).

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::calc::{LineItem, NetWorthSummary, summarize};
use crate::store;

/// Inputs the net worth page persists
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetWorthPage {
    pub assets: Vec<LineItem>,
    pub liabilities: Vec<LineItem>,
}

impl NetWorthPage {
    pub const STORAGE_KEY: &'static str = "nivesh_networth";

    pub fn load() -> Self {
        store::load_or_default(Self::STORAGE_KEY)
    }

    pub fn save(&self) {
        store::save(Self::STORAGE_KEY, self);
    }

    pub fn compute(&self) -> NetWorthSummary {
        summarize(&self.assets, &self.liabilities)
    }

    pub fn add_asset(&mut self, name: &str, category: &str, value: f64) -> String {
        let id = new_item_id();
        self.assets.push(LineItem {
            id: id.clone(),
            name: name.to_string(),
            category: category.to_string(),
            value,
        });
        id
    }

    pub fn add_liability(&mut self, name: &str, category: &str, value: f64) -> String {
        let id = new_item_id();
        self.liabilities.push(LineItem {
            id: id.clone(),
            name: name.to_string(),
            category: category.to_string(),
            value,
        });
        id
    }

    /// Update an item's value in either list; false if the id is unknown
    pub fn update_value(&mut self, id: &str, value: f64) -> bool {
        for item in self.assets.iter_mut().chain(self.liabilities.iter_mut()) {
            if item.id == id {
                item.value = value;
                return true;
            }
        }
        false
    }

    /// Remove an item from either list; false if the id is unknown
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.assets.len() + self.liabilities.len();
        self.assets.retain(|a| a.id != id);
        self.liabilities.retain(|l| l.id != id);
        before != self.assets.len() + self.liabilities.len()
    }
}

/// Timestamp-based row key, bumped when two rows land on the same
/// millisecond so keys stay strictly increasing
fn new_item_id() -> String {
    thread_local! {
        static LAST: Cell<u64> = const { Cell::new(0) };
    }
    LAST.with(|last| {
        let now = store::now_ms() as u64;
        let id = now.max(last.get() + 1);
        last.set(id);
        format!("nw-{id}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_unique_and_increasing() {
        let mut page = NetWorthPage::default();
        let a = page.add_asset("NIFTY index fund", "Equity", 500_000.0);
        let b = page.add_asset("Gold ETF", "Gold", 100_000.0);
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn test_crud_and_summary() {
        let mut page = NetWorthPage::default();
        let fund = page.add_asset("Index fund", "Equity", 800_000.0);
        page.add_asset("Savings", "Cash", 200_000.0);
        let loan = page.add_liability("Car loan", "Loan", 300_000.0);

        let s = page.compute();
        assert_eq!(s.net_worth, 700_000.0);
        assert_eq!(s.allocation[0].category, "Equity");

        assert!(page.update_value(&fund, 900_000.0));
        assert!(!page.update_value("nw-0", 1.0));
        assert_eq!(page.compute().net_worth, 800_000.0);

        assert!(page.remove(&loan));
        assert!(!page.remove(&loan));
        assert_eq!(page.compute().total_liabilities, 0.0);
    }

    #[test]
    fn test_persistence_round_trip() {
        let mut page = NetWorthPage::default();
        page.add_asset("PPF", "Debt", 1_200_000.0);
        page.add_liability("Home loan", "Loan", 2_500_000.0);
        page.save();
        assert_eq!(NetWorthPage::load(), page);
    }
}
