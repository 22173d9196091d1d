use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use uuid::Uuid;

use crate::model::{Bay, DailyClaim, PermanentAssignment};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BayStoreError {
    #[error("fetching {collection} failed: {message}")]
    FetchFailed {
        collection: &'static str,
        message: String,
    },
    #[error("store operation failed: {message}")]
    OperationFailed { message: String },
}

/// Read-only snapshot source the resolver is driven from. Implementations
/// wrap whatever persistence the surrounding system uses; the resolver never
/// writes through this trait.
pub trait BayStore {
    /// Bays ordered by `bay_number` ascending.
    fn list_bays(&self) -> Result<Vec<Bay>, BayStoreError>;

    /// Claims for `date`, both Active and Cancelled rows.
    fn list_daily_claims(&self, date: &str) -> Result<Vec<DailyClaim>, BayStoreError>;

    fn list_permanent_assignments(&self) -> Result<Vec<PermanentAssignment>, BayStoreError>;

    fn resolve_user_names(
        &self,
        user_ids: &BTreeSet<Uuid>,
    ) -> Result<BTreeMap<Uuid, String>, BayStoreError>;
}
