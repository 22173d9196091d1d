pub mod assignment;
pub mod bay;
pub mod claim;
pub mod store;

pub use assignment::{DayOfWeek, PermanentAssignment};
pub use bay::{Bay, BayStatus};
pub use claim::{ClaimStatus, DailyClaim};
pub use store::{BayStore, BayStoreError};
