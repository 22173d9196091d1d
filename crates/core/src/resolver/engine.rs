// Resolver engine - main resolution entry points
// One pure precedence chain derives every screen's view of a bay. Board mode
// projects live statuses for the requested date; schedule mode projects the
// whole-week assignment table plus the day's claims as display rows.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::model::{Bay, BayStatus, BayStore, DailyClaim, DayOfWeek, PermanentAssignment};
use crate::resolver::context::{ResolutionRequest, UserDirectory};
use crate::resolver::diagnostics::{
    RecordKind, ResolutionDiagnostic, ResolutionMode, SkipReason,
};
use crate::resolver::index::{AssignmentIndex, ClaimIndex};
use crate::Result;

/// Derived state a bay shows on the board for the requested date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedStatus {
    Available,
    Reserved,
    Maintenance,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedBay {
    pub bay_id: Uuid,
    pub bay_number: i32,
    pub status: ResolvedStatus,
    #[serde(default)]
    pub holder_user_id: Option<Uuid>,
    #[serde(default)]
    pub holder_name: Option<String>,
    pub is_permanent: bool,
    pub reserved_by_you: bool,
}

impl ResolvedBay {
    fn unheld(bay: &Bay, status: ResolvedStatus) -> Self {
        Self {
            bay_id: bay.id,
            bay_number: bay.bay_number,
            status,
            holder_user_id: None,
            holder_name: None,
            is_permanent: false,
            reserved_by_you: false,
        }
    }

    fn held(
        bay: &Bay,
        holder: Uuid,
        is_permanent: bool,
        request: &ResolutionRequest,
        names: &UserDirectory,
    ) -> Self {
        Self {
            bay_id: bay.id,
            bay_number: bay.bay_number,
            status: ResolvedStatus::Reserved,
            holder_user_id: Some(holder),
            holder_name: Some(names.name_for(&holder)),
            is_permanent,
            reserved_by_you: request.is_current_user(&holder),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardResolution {
    pub rows: Vec<ResolvedBay>,
    pub diagnostic: ResolutionDiagnostic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationType {
    Permanent,
    Daily,
}

/// One display row of the schedule table. Permanent assignments and daily
/// claims each get their own row; a bay may appear in both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleRow {
    pub bay_id: Uuid,
    pub bay_number: i32,
    pub reservation_type: ReservationType,
    pub user_id: Uuid,
    pub user_name: String,
    #[serde(default)]
    pub day_of_week: Option<DayOfWeek>,
    pub label: String,
    pub reserved_by_you: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleResolution {
    pub rows: Vec<ScheduleRow>,
    pub diagnostic: ResolutionDiagnostic,
}

/// Resolve the live status of every bay for the requested date.
///
/// Total over arbitrary snapshots: malformed records degrade to diagnostic
/// entries, never to an error. Output preserves the input bay order.
pub fn resolve_board(
    bays: &[Bay],
    claims: &[DailyClaim],
    assignments: &[PermanentAssignment],
    request: &ResolutionRequest,
    names: &UserDirectory,
) -> BoardResolution {
    let mut diagnostic = ResolutionDiagnostic::new(ResolutionMode::Board);
    let claim_index = ClaimIndex::build(claims, &request.today, &mut diagnostic);
    let assignment_index = AssignmentIndex::build(
        assignments,
        &request.today,
        &request.day_of_week,
        &mut diagnostic,
    );

    let rows = bays
        .iter()
        .map(|bay| resolve_bay(bay, &claim_index, &assignment_index, request, names))
        .collect();

    BoardResolution { rows, diagnostic }
}

/// Strict precedence, first match wins: maintenance, then active claim, then
/// released window, then permanent assignment minus same-day cancellation,
/// then free.
fn resolve_bay(
    bay: &Bay,
    claims: &ClaimIndex,
    assignments: &AssignmentIndex,
    request: &ResolutionRequest,
    names: &UserDirectory,
) -> ResolvedBay {
    if bay.status == BayStatus::Maintenance {
        return ResolvedBay::unheld(bay, ResolvedStatus::Maintenance);
    }
    if let Some(active) = claims.active_for(&bay.id) {
        return ResolvedBay::held(bay, active.user_id, false, request, names);
    }
    if assignments.temporarily_available_for(&bay.id).is_some() {
        return ResolvedBay::unheld(bay, ResolvedStatus::Available);
    }
    if let Some(assignee) = assignments.permanent_assignee(&bay.id) {
        if claims.has_cancelled(&bay.id, assignee) {
            return ResolvedBay::unheld(bay, ResolvedStatus::Available);
        }
        return ResolvedBay::held(bay, *assignee, true, request, names);
    }
    ResolvedBay::unheld(bay, ResolvedStatus::Available)
}

/// Resolve the schedule table: every permanent assignment regardless of
/// day-of-week, plus one row per daily claim for the requested date, ordered
/// by bay number across the combined set.
pub fn resolve_schedule(
    bays: &[Bay],
    claims: &[DailyClaim],
    assignments: &[PermanentAssignment],
    request: &ResolutionRequest,
    names: &UserDirectory,
) -> ScheduleResolution {
    let mut diagnostic = ResolutionDiagnostic::new(ResolutionMode::Schedule);
    let claim_index = ClaimIndex::build(claims, &request.today, &mut diagnostic);
    let bays_by_id: HashMap<Uuid, &Bay> = bays.iter().map(|bay| (bay.id, bay)).collect();

    let mut rows = Vec::with_capacity(assignments.len() + claims.len());

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
        let Some(bay) = bays_by_id.get(&bay_id) else {
            debug!(assignment_id = %assignment.id, bay_id = %bay_id, "assignment for unknown bay skipped");
            diagnostic.record_skip(RecordKind::Assignment, assignment.id, SkipReason::UnknownBay);
            continue;
        };
        rows.push(ScheduleRow {
            bay_id,
            bay_number: bay.bay_number,
            reservation_type: ReservationType::Permanent,
            user_id: assignment.user_id,
            user_name: names.name_for(&assignment.user_id),
            day_of_week: Some(assignment.day_of_week.clone()),
            label: schedule_label(assignment, &claim_index, request, &bay_id),
            reserved_by_you: request.is_current_user(&assignment.user_id),
        });
    }

    for claim in claims {
        // Missing-bay and wrong-date claims were already recorded by the
        // claim index pass.
        let Some(bay_id) = claim.bay_id else { continue };
        if claim.claim_date != request.today {
            continue;
        }
        let Some(bay) = bays_by_id.get(&bay_id) else {
            debug!(claim_id = %claim.id, bay_id = %bay_id, "claim for unknown bay skipped");
            diagnostic.record_skip(RecordKind::Claim, claim.id, SkipReason::UnknownBay);
            continue;
        };
        rows.push(ScheduleRow {
            bay_id,
            bay_number: bay.bay_number,
            reservation_type: ReservationType::Daily,
            user_id: claim.user_id,
            user_name: names.name_for(&claim.user_id),
            day_of_week: None,
            label: claim.status.to_string(),
            reserved_by_you: request.is_current_user(&claim.user_id),
        });
    }

    rows.sort_by_key(|row| row.bay_number);

    ScheduleResolution { rows, diagnostic }
}

/// Display label for an assignment row, first matching rule wins.
fn schedule_label(
    assignment: &PermanentAssignment,
    claims: &ClaimIndex,
    request: &ResolutionRequest,
    bay_id: &Uuid,
) -> String {
    if !assignment.day_of_week.matches(&request.day_of_week) {
        return "Scheduled".to_string();
    }
    if assignment.is_temporarily_available(&request.today) {
        // The window is known to be two-sided here.
        if let Some((from, to)) = assignment.availability_window() {
            return format!("Temporarily available ({from} to {to})");
        }
    }
    if claims.has_cancelled(bay_id, &assignment.user_id) {
        return "Cancelled for today".to_string();
    }
    "Active".to_string()
}

/// Fetch the board snapshots from a store and resolve. Fetch failures
/// propagate; the engine itself is never the error source.
pub fn resolve_board_from_store(
    store: &impl BayStore,
    request: &ResolutionRequest,
) -> Result<BoardResolution> {
    let (bays, claims, assignments, names) = load_snapshot(store, request)?;
    Ok(resolve_board(&bays, &claims, &assignments, request, &names))
}

/// Fetch the schedule snapshots from a store and resolve.
pub fn resolve_schedule_from_store(
    store: &impl BayStore,
    request: &ResolutionRequest,
) -> Result<ScheduleResolution> {
    let (bays, claims, assignments, names) = load_snapshot(store, request)?;
    Ok(resolve_schedule(
        &bays,
        &claims,
        &assignments,
        request,
        &names,
    ))
}

fn load_snapshot(
    store: &impl BayStore,
    request: &ResolutionRequest,
) -> Result<(
    Vec<Bay>,
    Vec<DailyClaim>,
    Vec<PermanentAssignment>,
    UserDirectory,
)> {
    let mut bays = store.list_bays()?;
    // The store contract already orders by bay number; re-sort as the
    // caller-side safety net.
    bays.sort_by_key(|bay| bay.bay_number);

    let claims = store.list_daily_claims(&request.today)?;
    let assignments = store.list_permanent_assignments()?;

    let mut user_ids = BTreeSet::new();
    user_ids.extend(claims.iter().map(|claim| claim.user_id));
    user_ids.extend(assignments.iter().map(|assignment| assignment.user_id));
    let names = UserDirectory::new(store.resolve_user_names(&user_ids)?);

    Ok((bays, claims, assignments, names))
}
