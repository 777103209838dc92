//! Row Reconciliation
//!
//! Patch a chore row in place from a swipe action's server response,
//! instead of reloading the page.

use chrono::NaiveDate;
use leptos_swipe::SwipeDirection;

use crate::models::{Chore, ChorePatch, ChoreStatus};

/// Action committed by a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Complete,
    TogglePriority,
}

impl RowAction {
    /// Right = complete, left = toggle priority
    pub fn from_direction(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Right => RowAction::Complete,
            SwipeDirection::Left => RowAction::TogglePriority,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            RowAction::Complete => "Chore marked as complete.",
            RowAction::TogglePriority => "Priority toggled.",
        }
    }
}

/// Apply the response of `action` to `chore`.
///
/// Fields the server returned win. Missing fields are filled in the way the
/// server would have changed them, except `is_priority` on completion,
/// which only changes when the server says so.
pub fn apply_action(chore: &mut Chore, action: RowAction, patch: &ChorePatch, today: NaiveDate) {
    match action {
        RowAction::Complete => {
            let completed = patch.last_completed.unwrap_or(today);
            chore.last_completed = Some(completed);
            chore.next_due = patch.next_due.or_else(|| chore.due_after(completed));
            chore.status = patch
                .status
                .unwrap_or_else(|| ChoreStatus::compute(chore.next_due, chore.frequency, today));
            if let Some(priority) = patch.is_priority {
                chore.is_priority = priority;
            }
        }
        RowAction::TogglePriority => {
            chore.is_priority = patch.is_priority.unwrap_or(!chore.is_priority);
            if let Some(status) = patch.status {
                chore.status = status;
            }
            if patch.next_due.is_some() {
                chore.next_due = patch.next_due;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn chore(is_priority: bool) -> Chore {
        Chore {
            id: 42,
            title: "Water plants".to_string(),
            assignee: "Katie".to_string(),
            category: Some("Garden".to_string()),
            status: ChoreStatus::Overdue,
            next_due: Some(date(2026, 10, 10)),
            frequency: 3,
            last_completed: Some(date(2026, 10, 7)),
            notes: None,
            is_priority,
        }
    }

    #[test]
    fn test_directions_map_to_actions() {
        assert_eq!(RowAction::from_direction(SwipeDirection::Right), RowAction::Complete);
        assert_eq!(RowAction::from_direction(SwipeDirection::Left), RowAction::TogglePriority);
    }

    #[test]
    fn test_complete_without_fields_recomputes_status_and_keeps_star() {
        let today = date(2026, 10, 16);
        let mut row = chore(true);
        let patch: ChorePatch = serde_json::from_str(r#"{"message":"Chore marked as complete"}"#).unwrap();
        apply_action(&mut row, RowAction::Complete, &patch, today);

        // Due again in 3 days, inside the 14 day window
        assert_eq!(row.status, ChoreStatus::DueSoon);
        assert_eq!(row.last_completed, Some(today));
        assert_eq!(row.next_due, Some(date(2026, 10, 19)));
        assert!(row.is_priority);
    }

    #[test]
    fn test_complete_long_interval_is_completed_recently() {
        let today = date(2026, 10, 16);
        let mut row = chore(false);
        row.frequency = 90;
        apply_action(&mut row, RowAction::Complete, &ChorePatch::default(), today);

        assert_eq!(row.next_due, Some(date(2027, 1, 14)));
        assert_eq!(row.status, ChoreStatus::CompletedRecently);
    }

    #[test]
    fn test_complete_prefers_server_fields() {
        let mut row = chore(true);
        let patch = ChorePatch {
            status: Some(ChoreStatus::DueSoon),
            next_due: Some(date(2026, 10, 20)),
            is_priority: Some(false),
            ..Default::default()
        };
        apply_action(&mut row, RowAction::Complete, &patch, date(2026, 10, 16));

        assert_eq!(row.status, ChoreStatus::DueSoon);
        assert_eq!(row.next_due, Some(date(2026, 10, 20)));
        assert!(!row.is_priority);
    }

    #[test]
    fn test_toggle_twice_restores_priority() {
        let today = date(2026, 10, 16);
        for original in [false, true] {
            let mut row = chore(original);
            apply_action(&mut row, RowAction::TogglePriority, &ChorePatch::default(), today);
            assert_eq!(row.is_priority, !original);
            apply_action(&mut row, RowAction::TogglePriority, &ChorePatch::default(), today);
            assert_eq!(row, chore(original));
        }
    }

    #[test]
    fn test_toggle_twice_with_server_responses() {
        let today = date(2026, 10, 16);
        let mut row = chore(false);
        let on = ChorePatch { is_priority: Some(true), ..Default::default() };
        let off = ChorePatch { is_priority: Some(false), ..Default::default() };
        apply_action(&mut row, RowAction::TogglePriority, &on, today);
        apply_action(&mut row, RowAction::TogglePriority, &off, today);
        assert_eq!(row, chore(false));
    }
}
