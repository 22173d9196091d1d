use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::model::{DailyClaim, PermanentAssignment};

pub fn module_name() -> &'static str {
    "validation"
}

/// Record-shape checks for admin tooling. The resolver tolerates all of these
/// defects at runtime; validation exists so they can be surfaced and fixed.
pub fn validate_assignment(assignment: &PermanentAssignment) -> Result<()> {
    if assignment.bay_id.is_none() {
        bail!("assignment {} has no bay reference", assignment.id);
    }

    match (
        assignment.available_from.as_deref(),
        assignment.available_to.as_deref(),
    ) {
        (None, None) => {}
        (Some(from), Some(to)) => {
            let from = parse_date(from, "available_from")?;
            let to = parse_date(to, "available_to")?;
            if from > to {
                bail!(
                    "assignment {} has an inverted availability window",
                    assignment.id
                );
            }
        }
        _ => bail!(
            "assignment {} sets only one availability bound",
            assignment.id
        ),
    }

    Ok(())
}

pub fn validate_claim(claim: &DailyClaim) -> Result<()> {
    if claim.bay_id.is_none() {
        bail!("claim {} has no bay reference", claim.id);
    }
    parse_date(&claim.claim_date, "claim_date")?;
    Ok(())
}

/// Collect every per-record issue in a snapshot without failing fast.
pub fn snapshot_issues(
    assignments: &[PermanentAssignment],
    claims: &[DailyClaim],
) -> Vec<String> {
    let mut issues = Vec::new();
    for assignment in assignments {
        if let Err(error) = validate_assignment(assignment) {
            issues.push(error.to_string());
        }
    }
    for claim in claims {
        if let Err(error) = validate_claim(claim) {
            issues.push(error.to_string());
        }
    }
    issues
}

fn parse_date(value: &str, field: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Ok(date),
        Err(error) => bail!("{field} '{value}' is not a yyyy-MM-dd date: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClaimStatus, DayOfWeek};
    use uuid::Uuid;

    fn assignment() -> PermanentAssignment {
        PermanentAssignment {
            id: Uuid::from_u128(200),
            bay_id: Some(Uuid::from_u128(1)),
            user_id: Uuid::from_u128(10),
            day_of_week: DayOfWeek::Monday,
            available_from: None,
            available_to: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_half_open_window_is_rejected() {
        let mut half_open = assignment();
        half_open.available_from = Some("2025-06-01".to_string());

        let error = validate_assignment(&half_open).unwrap_err();
        assert!(error.to_string().contains("only one availability bound"));
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let mut inverted = assignment();
        inverted.available_from = Some("2025-06-07".to_string());
        inverted.available_to = Some("2025-06-01".to_string());

        let error = validate_assignment(&inverted).unwrap_err();
        assert!(error.to_string().contains("inverted availability window"));
    }

    #[test]
    fn test_snapshot_issues_collects_all_defects() {
        let mut no_bay = assignment();
        no_bay.bay_id = None;

        let bad_claim = DailyClaim {
            id: Uuid::from_u128(100),
            bay_id: Some(Uuid::from_u128(1)),
            user_id: Uuid::from_u128(10),
            claim_date: "02/06/2025".to_string(),
            status: ClaimStatus::Active,
            created_at: None,
            updated_at: None,
        };

        let issues = snapshot_issues(&[no_bay, assignment()], &[bad_claim]);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("no bay reference"));
        assert!(issues[1].contains("not a yyyy-MM-dd date"));
    }
}
