//! Per-page input records
//!
//! Each dashboard page owns one flat serde record persisted under its own
//! LocalStorage key. Records are independent value objects: no referential
//! integrity, no shared state, `Default` is the empty/fresh page. Every
//! record knows how to `load()`, `save()`, and `compute()` its result.

pub mod loan;
pub mod lumpsum;
pub mod networth;
pub mod provident;
pub mod retirement;
pub mod sip;
pub mod swp;

pub use loan::LoanPage;
pub use lumpsum::LumpsumPage;
pub use networth::NetWorthPage;
pub use provident::{EpfPage, PpfPage};
pub use retirement::RetirementPage;
pub use sip::SipPage;
pub use swp::SwpPage;

use crate::settings::Settings;

/// Every storage key the app owns (drives export/import)
pub const ALL_KEYS: &[&str] = &[
    LumpsumPage::STORAGE_KEY,
    SipPage::STORAGE_KEY,
    SwpPage::STORAGE_KEY,
    LoanPage::STORAGE_KEY,
    PpfPage::STORAGE_KEY,
    EpfPage::STORAGE_KEY,
    RetirementPage::STORAGE_KEY,
    NetWorthPage::STORAGE_KEY,
    Settings::STORAGE_KEY,
];
