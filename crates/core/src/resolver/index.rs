// Snapshot indexes - single-pass map construction over the claim and
// assignment snapshots, replacing per-bay linear scans. Duplicate entries for
// a bay are resolved deterministically: first in input order wins.

use std::collections::{HashMap, HashSet};

use tracing::debug;
use uuid::Uuid;

use crate::model::{ClaimStatus, DailyClaim, DayOfWeek, PermanentAssignment};
use crate::resolver::diagnostics::{
    DuplicateClaim, RecordKind, ResolutionDiagnostic, SkipReason,
};

/// The Active claim kept for a bay after tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveClaim {
    pub claim_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct ClaimIndex {
    active_by_bay: HashMap<Uuid, ActiveClaim>,
    cancelled_by_bay: HashMap<Uuid, HashSet<Uuid>>,
}

impl ClaimIndex {
    pub fn build(
        claims: &[DailyClaim],
        today: &str,
        diagnostic: &mut ResolutionDiagnostic,
    ) -> Self {
        let mut index = Self::default();
        for claim in claims {
            let Some(bay_id) = claim.bay_id else {
                debug!(claim_id = %claim.id, "claim without bay reference skipped");
                diagnostic.record_skip(RecordKind::Claim, claim.id, SkipReason::MissingBayId);
                continue;
            };
            if claim.claim_date != today {
                debug!(
                    claim_id = %claim.id,
                    claim_date = %claim.claim_date,
                    "claim outside requested date skipped"
                );
                diagnostic.record_skip(RecordKind::Claim, claim.id, SkipReason::WrongDate);
                continue;
            }
            match claim.status {
                ClaimStatus::Active => {
                    if let Some(existing) = index.active_by_bay.get(&bay_id) {
                        debug!(
                            bay_id = %bay_id,
                            kept = %existing.claim_id,
                            ignored = %claim.id,
                            "duplicate active claim ignored"
                        );
                        diagnostic.record_duplicate(DuplicateClaim {
                            bay_id,
                            kept_claim_id: existing.claim_id,
                            ignored_claim_id: claim.id,
                        });
                    } else {
                        index.active_by_bay.insert(
                            bay_id,
                            ActiveClaim {
                                claim_id: claim.id,
                                user_id: claim.user_id,
                            },
                        );
                    }
                }
                ClaimStatus::Cancelled => {
                    index
                        .cancelled_by_bay
                        .entry(bay_id)
                        .or_default()
                        .insert(claim.user_id);
                }
            }
        }
        index
    }

    pub fn active_for(&self, bay_id: &Uuid) -> Option<&ActiveClaim> {
        self.active_by_bay.get(bay_id)
    }

    /// Whether `user_id` has a Cancelled claim on the bay for the requested
    /// date.
    pub fn has_cancelled(&self, bay_id: &Uuid, user_id: &Uuid) -> bool {
        self.cancelled_by_bay
            .get(bay_id)
            .is_some_and(|users| users.contains(user_id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentIndex {
    temporarily_available: HashMap<Uuid, Uuid>,
    permanent_by_bay: HashMap<Uuid, Uuid>,
}

impl AssignmentIndex {
    /// Each assignment is partitioned on its own fields: a valid window
    /// covering `today` puts it in the temporarily-available bucket,
    /// otherwise a matching day-of-week puts it in the permanent bucket.
    pub fn build(
        assignments: &[PermanentAssignment],
        today: &str,
        day_of_week: &DayOfWeek,
        diagnostic: &mut ResolutionDiagnostic,
    ) -> Self {
        let mut index = Self::default();
        for assignment in assignments {
            let Some(bay_id) = assignment.bay_id else {
                debug!(assignment_id = %assignment.id, "assignment without bay reference skipped");
                diagnostic.record_skip(
                    RecordKind::Assignment,
                    assignment.id,
                    SkipReason::MissingBayId,
                );
                continue;
            };
            if assignment.is_temporarily_available(today) {
                index
                    .temporarily_available
                    .entry(bay_id)
                    .or_insert(assignment.user_id);
            } else if assignment.day_of_week.matches(day_of_week) {
                index
                    .permanent_by_bay
                    .entry(bay_id)
                    .or_insert(assignment.user_id);
            }
        }
        index
    }

    pub fn temporarily_available_for(&self, bay_id: &Uuid) -> Option<&Uuid> {
        self.temporarily_available.get(bay_id)
    }

    pub fn permanent_assignee(&self, bay_id: &Uuid) -> Option<&Uuid> {
        self.permanent_by_bay.get(bay_id)
    }
}
