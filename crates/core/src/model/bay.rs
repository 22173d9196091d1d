use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored base status of a bay. `Maintenance` is authoritative: it overrides
/// every claim and assignment during resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BayStatus {
    Available,
    Reserved,
    Maintenance,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bay {
    pub id: Uuid,
    pub bay_number: i32,
    pub status: BayStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
