//! Pure financial math
//!
//! Every calculator here is deterministic and platform-free:
//! - f64 arithmetic throughout, no rounding of intermediates
//! - Closed forms where they exist, simple iterative loops where they don't
//! - No storage, DOM, or logging dependencies

pub mod loan;
pub mod lumpsum;
pub mod networth;
pub mod provident;
pub mod retirement;
pub mod sip;
pub mod swp;

pub use loan::{AmortRow, LoanResult, amortize, emi};
pub use lumpsum::{LumpsumResult, lumpsum, lumpsum_fv};
pub use networth::{AllocationSlice, LineItem, NetWorthSummary, summarize};
pub use provident::{EpfResult, EpfYearRow, PpfResult, PpfYearRow, epf, ppf};
pub use retirement::{
    AllocationAssumptions, RetirementResult, RetirementYearRow, fire_number, retirement,
};
pub use sip::{SipResult, SipYearRow, sip, sip_fv};
pub use swp::{SwpResult, SwpRow, swp};
