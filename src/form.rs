//! Chore Form State
//!
//! Raw input values of the add / edit form and their validation.

use chrono::NaiveDate;

use crate::error::FormError;
use crate::models::{Chore, ChorePayload, User};

/// Input values as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoreForm {
    pub title: String,
    /// Value of the assignee `<select>` (a user id, or empty)
    pub user_id: String,
    pub category: String,
    pub frequency: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub last_completed: String,
    pub notes: String,
    pub is_priority: bool,
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ChoreForm {
    /// Empty add form; last completed defaults to today
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            last_completed: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    /// Edit form populated from a fetched chore.
    /// The assignee name is mapped back to its user id.
    pub fn from_chore(chore: &Chore, users: &[User]) -> Self {
        Self {
            title: chore.title.clone(),
            user_id: users
                .iter()
                .find(|u| u.name == chore.assignee)
                .map(|u| u.id.to_string())
                .unwrap_or_default(),
            category: chore.category.clone().unwrap_or_default(),
            frequency: chore.frequency.to_string(),
            last_completed: chore
                .last_completed
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            notes: chore.notes.clone().unwrap_or_default(),
            is_priority: chore.is_priority,
        }
    }

    /// Validate into a request body. `editing` adds the priority flag and
    /// lets a blank last-completed date through as absent.
    pub fn to_payload(&self, editing: bool) -> Result<ChorePayload, FormError> {
        let title = non_blank(&self.title).ok_or(FormError::MissingTitle)?;
        let user_id = self.user_id.trim().parse::<u32>().map_err(|_| FormError::MissingAssignee)?;
        let frequency = self
            .frequency
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|f| *f >= 1)
            .ok_or(FormError::InvalidFrequency)?;
        let last_completed = match self.last_completed.trim() {
            "" if editing => None,
            raw => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FormError::InvalidDate)?),
        };

        Ok(ChorePayload {
            title,
            user_id,
            category: non_blank(&self.category),
            frequency,
            last_completed,
            notes: non_blank(&self.notes),
            is_priority: editing.then_some(self.is_priority),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::summary_rows;
    use crate::models::ChoreStatus;

    fn users() -> Vec<User> {
        vec![
            User { id: 1, name: "Dan".into() },
            User { id: 2, name: "Kim".into() },
            User { id: 3, name: "Katie".into() },
        ]
    }

    fn filled_form() -> ChoreForm {
        ChoreForm {
            title: "  Clean fridge ".into(),
            user_id: "3".into(),
            category: "Kitchen".into(),
            frequency: "30".into(),
            last_completed: "2026-09-30".into(),
            notes: "Toss expired food".into(),
            is_priority: false,
        }
    }

    /// What the server stores and later returns for a created payload
    fn as_server_record(id: u32, payload: &ChorePayload, users: &[User]) -> Chore {
        Chore {
            id,
            title: payload.title.clone(),
            assignee: users.iter().find(|u| u.id == payload.user_id).unwrap().name.clone(),
            category: payload.category.clone(),
            status: ChoreStatus::DueSoon,
            next_due: None,
            frequency: payload.frequency,
            last_completed: payload.last_completed,
            notes: payload.notes.clone(),
            is_priority: payload.is_priority.unwrap_or(false),
        }
    }

    #[test]
    fn test_blank_form_defaults_date() {
        let form = ChoreForm::blank(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(form.last_completed, "2026-10-16");
        assert_eq!(form.to_payload(false), Err(FormError::MissingTitle));
    }

    #[test]
    fn test_validation_errors() {
        let mut form = filled_form();
        form.user_id = String::new();
        assert_eq!(form.to_payload(false), Err(FormError::MissingAssignee));

        let mut form = filled_form();
        form.frequency = "0".into();
        assert_eq!(form.to_payload(false), Err(FormError::InvalidFrequency));
        form.frequency = "weekly".into();
        assert_eq!(form.to_payload(false), Err(FormError::InvalidFrequency));

        let mut form = filled_form();
        form.last_completed = "30/09/2026".into();
        assert_eq!(form.to_payload(false), Err(FormError::InvalidDate));
    }

    #[test]
    fn test_blank_optional_fields_are_absent() {
        let mut form = filled_form();
        form.category = "   ".into();
        form.notes = String::new();
        let payload = form.to_payload(false).unwrap();
        assert_eq!(payload.title, "Clean fridge");
        assert_eq!(payload.category, None);
        assert_eq!(payload.notes, None);
        assert_eq!(payload.is_priority, None);
    }

    #[test]
    fn test_edit_sends_cleared_fields_as_null() {
        let mut form = filled_form();
        form.category = String::new();
        form.notes = "  ".into();
        let body = serde_json::to_value(form.to_payload(true).unwrap()).unwrap();
        assert_eq!(body["category"], serde_json::Value::Null);
        assert_eq!(body["notes"], serde_json::Value::Null);
        assert_eq!(body["is_priority"], false);
    }

    #[test]
    fn test_edit_without_known_completion_date() {
        let users = users();
        let mut record = as_server_record(4, &filled_form().to_payload(false).unwrap(), &users);
        record.last_completed = None;

        let form = ChoreForm::from_chore(&record, &users);
        assert_eq!(form.last_completed, "");
        let payload = form.to_payload(true).unwrap();
        assert_eq!(payload.last_completed, None);
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("last_completed").is_none());

        // Adding still requires the date
        assert_eq!(form.to_payload(false), Err(FormError::InvalidDate));
    }

    #[test]
    fn test_add_then_detail_round_trip() {
        let users = users();
        let form = filled_form();
        let payload = form.to_payload(false).unwrap();
        let record = as_server_record(12, &payload, &users);

        let rows = summary_rows(&record);
        let value = |label: &str| rows.iter().find(|(l, _)| *l == label).map(|(_, v)| v.clone()).unwrap();
        assert_eq!(value("Assignee"), "Katie");
        assert_eq!(value("Category"), "Kitchen");
        assert_eq!(value("Frequency"), "Every 30 days");
        assert_eq!(record.notes.as_deref(), Some("Toss expired food"));

        // Re-populating the edit form gives back what was typed
        let edit = ChoreForm::from_chore(&record, &users);
        assert_eq!(edit.to_payload(false).unwrap(), payload);
    }
}
