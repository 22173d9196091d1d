use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Weekday an assignment recurs on. `AllDays` matches every day-of-week
/// comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    AllDays,
}

impl DayOfWeek {
    /// Whether an assignment scheduled for `self` is in effect on `day`.
    pub fn matches(&self, day: &DayOfWeek) -> bool {
        matches!(self, DayOfWeek::AllDays) || self == day
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::AllDays => "All Days",
        };
        f.write_str(name)
    }
}

/// Recurring claim on a bay for a given weekday (or all days).
///
/// `available_from`/`available_to` form an inclusive date window during which
/// the assignee has voluntarily released the bay. `bay_id` is optional so a
/// record with a missing bay reference can be carried and skipped instead of
/// aborting resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PermanentAssignment {
    pub id: Uuid,
    #[serde(default)]
    pub bay_id: Option<Uuid>,
    pub user_id: Uuid,
    pub day_of_week: DayOfWeek,
    #[serde(default)]
    pub available_from: Option<String>,
    #[serde(default)]
    pub available_to: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl PermanentAssignment {
    /// Both bounds must be set for the window to count; a half-open window is
    /// not a valid override.
    pub fn availability_window(&self) -> Option<(&str, &str)> {
        match (self.available_from.as_deref(), self.available_to.as_deref()) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    /// Inclusive window check. Dates are fixed-width `yyyy-MM-dd` strings, so
    /// lexicographic comparison is safe.
    pub fn is_temporarily_available(&self, today: &str) -> bool {
        self.availability_window()
            .is_some_and(|(from, to)| from <= today && today <= to)
    }
}
