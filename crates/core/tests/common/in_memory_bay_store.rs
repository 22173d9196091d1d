use std::collections::{BTreeMap, BTreeSet};

use bayboard_core::model::{Bay, DailyClaim, PermanentAssignment};
use bayboard_core::{BayStore, BayStoreError};
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryBayStore {
    bays: Vec<Bay>,
    claims: Vec<DailyClaim>,
    assignments: Vec<PermanentAssignment>,
    names: BTreeMap<Uuid, String>,
    failure: Option<String>,
}

impl InMemoryBayStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bay(mut self, bay: Bay) -> Self {
        self.bays.push(bay);
        self
    }

    #[allow(dead_code)]
    pub fn with_claim(mut self, claim: DailyClaim) -> Self {
        self.claims.push(claim);
        self
    }

    #[allow(dead_code)]
    pub fn with_assignment(mut self, assignment: PermanentAssignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    #[allow(dead_code)]
    pub fn with_name(mut self, user_id: Uuid, name: impl Into<String>) -> Self {
        self.names.insert(user_id, name.into());
        self
    }

    #[allow(dead_code)]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    fn fail(&self, collection: &'static str) -> Option<BayStoreError> {
        self.failure
            .as_ref()
            .map(|message| BayStoreError::FetchFailed {
                collection,
                message: message.clone(),
            })
    }
}

impl BayStore for InMemoryBayStore {
    fn list_bays(&self) -> Result<Vec<Bay>, BayStoreError> {
        if let Some(error) = self.fail("bays") {
            return Err(error);
        }
        Ok(self.bays.clone())
    }

    fn list_daily_claims(&self, date: &str) -> Result<Vec<DailyClaim>, BayStoreError> {
        if let Some(error) = self.fail("daily_claims") {
            return Err(error);
        }
        Ok(self
            .claims
            .iter()
            .filter(|claim| claim.claim_date == date)
            .cloned()
            .collect())
    }

    fn list_permanent_assignments(&self) -> Result<Vec<PermanentAssignment>, BayStoreError> {
        if let Some(error) = self.fail("permanent_assignments") {
            return Err(error);
        }
        Ok(self.assignments.clone())
    }

    fn resolve_user_names(
        &self,
        user_ids: &BTreeSet<Uuid>,
    ) -> Result<BTreeMap<Uuid, String>, BayStoreError> {
        if let Some(error) = self.fail("user_names") {
            return Err(error);
        }
        Ok(self
            .names
            .iter()
            .filter(|(user_id, _)| user_ids.contains(user_id))
            .map(|(user_id, name)| (*user_id, name.clone()))
            .collect())
    }
}
