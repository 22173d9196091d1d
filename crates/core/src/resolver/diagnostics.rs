// Diagnostic types for resolution auditing
// Skips and tie-break decisions are recorded here instead of failing the
// resolution; they never influence the resolved rows.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMode {
    Board,
    Schedule,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Claim,
    Assignment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Record carries no bay reference.
    MissingBayId,
    /// Record references a bay with no metadata in the snapshot.
    UnknownBay,
    /// Claim dated outside the requested date.
    WrongDate,
}

/// A record the resolver dropped rather than aborting on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkippedRecord {
    pub kind: RecordKind,
    pub record_id: Uuid,
    pub reason: SkipReason,
}

/// Second and later Active claims seen for the same bay and date. The first
/// claim in input order stays in effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DuplicateClaim {
    pub bay_id: Uuid,
    pub kept_claim_id: Uuid,
    pub ignored_claim_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolutionDiagnostic {
    pub mode: ResolutionMode,
    pub skipped: Vec<SkippedRecord>,
    pub duplicate_active_claims: Vec<DuplicateClaim>,
}

impl ResolutionDiagnostic {
    pub fn new(mode: ResolutionMode) -> Self {
        Self {
            mode,
            skipped: Vec::new(),
            duplicate_active_claims: Vec::new(),
        }
    }

    pub fn record_skip(&mut self, kind: RecordKind, record_id: Uuid, reason: SkipReason) {
        self.skipped.push(SkippedRecord {
            kind,
            record_id,
            reason,
        });
    }

    pub fn record_duplicate(&mut self, duplicate: DuplicateClaim) {
        self.duplicate_active_claims.push(duplicate);
    }

    /// True when the snapshot resolved without any skip or duplicate.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.duplicate_active_claims.is_empty()
    }
}
