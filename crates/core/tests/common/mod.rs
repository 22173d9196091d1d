use std::fs;
use std::path::PathBuf;

use bayboard_core::model::{
    Bay, BayStatus, ClaimStatus, DailyClaim, DayOfWeek, PermanentAssignment,
};
use bayboard_core::resolver::context::{ResolutionRequest, UserDirectory};
use std::collections::BTreeMap;
use uuid::Uuid;

pub mod in_memory_bay_store;

/// A Monday, used as the target date across the suite.
#[allow(dead_code)]
pub const MONDAY: &str = "2025-06-02";

#[allow(dead_code)]
pub fn fixture_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file_name)
}

#[allow(dead_code)]
pub fn read_fixture(file_name: &str) -> String {
    let path = fixture_path(file_name);
    fs::read_to_string(path).expect("fixture should be readable")
}

#[allow(dead_code)]
pub fn monday_request(current_user_id: Option<Uuid>) -> ResolutionRequest {
    ResolutionRequest {
        today: MONDAY.to_string(),
        day_of_week: DayOfWeek::Monday,
        current_user_id,
    }
}

#[allow(dead_code)]
pub fn user(n: u128) -> Uuid {
    Uuid::from_u128(0xA000 + n)
}

#[allow(dead_code)]
pub fn directory(entries: &[(Uuid, &str)]) -> UserDirectory {
    UserDirectory::new(
        entries
            .iter()
            .map(|(user_id, name)| (*user_id, name.to_string()))
            .collect::<BTreeMap<_, _>>(),
    )
}

#[allow(dead_code)]
pub fn bay(number: i32, status: BayStatus) -> Bay {
    Bay {
        id: Uuid::from_u128(number as u128),
        bay_number: number,
        status,
        created_at: None,
        updated_at: None,
    }
}

#[allow(dead_code)]
pub fn assignment(
    id: u128,
    bay: &Bay,
    user_id: Uuid,
    day_of_week: DayOfWeek,
) -> PermanentAssignment {
    PermanentAssignment {
        id: Uuid::from_u128(id),
        bay_id: Some(bay.id),
        user_id,
        day_of_week,
        available_from: None,
        available_to: None,
        created_at: None,
        updated_at: None,
    }
}

#[allow(dead_code)]
pub fn assignment_with_window(
    id: u128,
    bay: &Bay,
    user_id: Uuid,
    day_of_week: DayOfWeek,
    from: &str,
    to: &str,
) -> PermanentAssignment {
    let mut assignment = assignment(id, bay, user_id, day_of_week);
    assignment.available_from = Some(from.to_string());
    assignment.available_to = Some(to.to_string());
    assignment
}

#[allow(dead_code)]
pub fn active_claim(id: u128, bay: &Bay, user_id: Uuid, claim_date: &str) -> DailyClaim {
    DailyClaim {
        id: Uuid::from_u128(id),
        bay_id: Some(bay.id),
        user_id,
        claim_date: claim_date.to_string(),
        status: ClaimStatus::Active,
        created_at: None,
        updated_at: None,
    }
}

#[allow(dead_code)]
pub fn cancelled_claim(id: u128, bay: &Bay, user_id: Uuid, claim_date: &str) -> DailyClaim {
    DailyClaim {
        status: ClaimStatus::Cancelled,
        ..active_claim(id, bay, user_id, claim_date)
    }
}
