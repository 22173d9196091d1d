use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Active,
    Cancelled,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ClaimStatus::Active => "Active",
            ClaimStatus::Cancelled => "Cancelled",
        })
    }
}

/// One-day override record for a bay.
///
/// An Active claim reserves the bay for `claim_date`; a Cancelled claim by
/// the permanent assignee on their own assigned day signals "I am not using
/// my bay today".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyClaim {
    pub id: Uuid,
    #[serde(default)]
    pub bay_id: Option<Uuid>,
    pub user_id: Uuid,
    pub claim_date: String,
    pub status: ClaimStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
