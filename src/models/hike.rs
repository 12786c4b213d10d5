// ============================================================================
// HIKE MODELS - Hike records and the check-in/check-out action state
// ============================================================================

use serde::{Deserialize, Serialize};

/// Status line label shown while a hike is open.
pub const CHECKED_IN_LABEL: &str = "Checked In:";

/// One row of `hikerMostRecentHikeOnTrail` (most recent first, zero or
/// one rows expected). Immutable once fetched for a given render; a
/// check-in/check-out invalidates it and forces a refetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikeRecord {
    /// Check-in date, present once the hike has started.
    pub date: Option<String>,

    /// Check-out date, non-null only after checkout.
    #[serde(rename = "checkOutDate")]
    pub check_out_date: Option<String>,
}

impl HikeRecord {
    /// An open hike has been checked in but not yet checked out.
    pub fn is_open(&self) -> bool {
        self.check_out_date.is_none()
    }
}

/// Result of the `checkIn` mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInResult {
    pub hike: HikeRef,
    pub date: String,
}

/// Result of the `checkOut` mutation.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckOutResult {
    pub hike: HikeRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HikeRef {
    pub id: String,
}

// ============================================================================
// SESSION ACTION STATE - which of check-in / check-out is permitted
// ============================================================================
// One immutable struct recomputed per fetch instead of scattered mutable
// flags. At most one action is allowed once an authenticated identity is
// known; both start allowed only for anonymous viewers (the server still
// rejects their mutations).
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct SessionActionState {
    pub check_in_allowed: bool,
    pub check_out_allowed: bool,
    pub status_label: Option<String>,
    pub status_value: Option<String>,
}

impl SessionActionState {
    /// Anonymous default: both actions enabled, no status text.
    pub fn anonymous() -> Self {
        Self {
            check_in_allowed: true,
            check_out_allowed: true,
            status_label: None,
            status_value: None,
        }
    }

    /// Derive the action state from the hiker's most recent hike records
    /// on the current trail (most recent first).
    pub fn resolve(authenticated: bool, records: &[HikeRecord]) -> Self {
        if !authenticated {
            return Self::anonymous();
        }

        match records.first() {
            // No hike yet: nothing to close, check-in stays available
            None => Self {
                check_in_allowed: true,
                check_out_allowed: false,
                status_label: None,
                status_value: None,
            },
            // Open hike: only checkout makes sense, show when it started
            Some(record) if record.is_open() => Self {
                check_in_allowed: false,
                check_out_allowed: true,
                status_label: Some(CHECKED_IN_LABEL.to_string()),
                status_value: record.date.clone(),
            },
            // Last hike is closed: back to check-in
            Some(_) => Self {
                check_in_allowed: true,
                check_out_allowed: false,
                status_label: None,
                status_value: None,
            },
        }
    }

    /// Transition after a successful `checkIn` mutation. The caller must
    /// refetch the hike records before resolving again.
    pub fn after_check_in(date: &str) -> Self {
        Self {
            check_in_allowed: false,
            check_out_allowed: true,
            status_label: Some(CHECKED_IN_LABEL.to_string()),
            status_value: Some(date.to_string()),
        }
    }

    /// Transition after a successful `checkOut` mutation.
    pub fn after_check_out() -> Self {
        Self {
            check_in_allowed: true,
            check_out_allowed: false,
            status_label: None,
            status_value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_record(date: &str) -> HikeRecord {
        HikeRecord {
            date: Some(date.to_string()),
            check_out_date: None,
        }
    }

    fn closed_record(date: &str, out: &str) -> HikeRecord {
        HikeRecord {
            date: Some(date.to_string()),
            check_out_date: Some(out.to_string()),
        }
    }

    #[test]
    fn anonymous_viewer_gets_both_actions_and_no_status() {
        let state = SessionActionState::resolve(false, &[open_record("2024-05-01")]);
        assert!(state.check_in_allowed);
        assert!(state.check_out_allowed);
        assert_eq!(state.status_label, None);
        assert_eq!(state.status_value, None);
    }

    #[test]
    fn authenticated_without_records_can_only_check_in() {
        let state = SessionActionState::resolve(true, &[]);
        assert!(state.check_in_allowed);
        assert!(!state.check_out_allowed);
        assert_eq!(state.status_label, None);
    }

    #[test]
    fn open_hike_only_allows_checkout_and_shows_status() {
        let state = SessionActionState::resolve(true, &[open_record("2024-05-01")]);
        assert!(!state.check_in_allowed);
        assert!(state.check_out_allowed);
        assert_eq!(state.status_label.as_deref(), Some(CHECKED_IN_LABEL));
        assert_eq!(state.status_value.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn closed_hike_allows_check_in_again() {
        let state = SessionActionState::resolve(true, &[closed_record("2024-05-01", "2024-05-02")]);
        assert!(state.check_in_allowed);
        assert!(!state.check_out_allowed);
        assert_eq!(state.status_label, None);
        assert_eq!(state.status_value, None);
    }

    #[test]
    fn only_the_most_recent_record_matters() {
        let records = vec![
            open_record("2024-06-10"),
            closed_record("2024-05-01", "2024-05-02"),
        ];
        let state = SessionActionState::resolve(true, &records);
        assert!(!state.check_in_allowed);
        assert!(state.check_out_allowed);
        assert_eq!(state.status_value.as_deref(), Some("2024-06-10"));
    }

    #[test]
    fn authenticated_actions_are_mutually_exclusive() {
        for records in [
            vec![],
            vec![open_record("2024-05-01")],
            vec![closed_record("2024-05-01", "2024-05-02")],
        ] {
            let state = SessionActionState::resolve(true, &records);
            assert!(
                !(state.check_in_allowed && state.check_out_allowed),
                "both actions allowed for {:?}",
                records
            );
        }
    }

    #[test]
    fn check_in_transition_sets_status_from_mutation_date() {
        let state = SessionActionState::after_check_in("2024-05-02");
        assert!(!state.check_in_allowed);
        assert!(state.check_out_allowed);
        assert_eq!(state.status_label.as_deref(), Some(CHECKED_IN_LABEL));
        assert_eq!(state.status_value.as_deref(), Some("2024-05-02"));
    }

    #[test]
    fn check_out_transition_clears_status() {
        let state = SessionActionState::after_check_out();
        assert!(state.check_in_allowed);
        assert!(!state.check_out_allowed);
        assert_eq!(state.status_label, None);
        assert_eq!(state.status_value, None);
    }

    #[test]
    fn record_without_checkout_date_parses_as_open() {
        let json = r#"{"date": "2024-05-01", "checkOutDate": null}"#;
        let record: HikeRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_open());
        assert_eq!(record.date.as_deref(), Some("2024-05-01"));
    }
}
