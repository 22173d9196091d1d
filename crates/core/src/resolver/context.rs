// Resolution request context
// The target date and day-of-week are injected by the caller, never read
// from the wall clock, so resolution is deterministic and testable.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::DayOfWeek;

/// Placeholder returned when a user id has no resolved name.
pub const UNKNOWN_USER: &str = "Unknown";

/// Input to both resolution modes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolutionRequest {
    /// Target date, fixed-width `yyyy-MM-dd`.
    pub today: String,
    pub day_of_week: DayOfWeek,
    /// Viewing user, if any. `None` makes every `reserved_by_you` false.
    #[serde(default)]
    pub current_user_id: Option<Uuid>,
}

impl ResolutionRequest {
    pub fn for_date(date: NaiveDate, current_user_id: Option<Uuid>) -> Self {
        Self {
            today: date.format("%Y-%m-%d").to_string(),
            day_of_week: DayOfWeek::from_weekday(date.weekday()),
            current_user_id,
        }
    }

    pub fn is_current_user(&self, user_id: &Uuid) -> bool {
        self.current_user_id.as_ref() == Some(user_id)
    }
}

/// Resolved user names, keyed by user id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserDirectory(BTreeMap<Uuid, String>);

impl UserDirectory {
    pub fn new(names: BTreeMap<Uuid, String>) -> Self {
        Self(names)
    }

    /// Missing entries resolve to the literal [`UNKNOWN_USER`] placeholder.
    pub fn name_for(&self, user_id: &Uuid) -> String {
        self.0
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_USER.to_string())
    }
}
