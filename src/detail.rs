//! Detail Dialog View-Model
//!
//! State of the chore detail dialog, owned by the component that renders it.
//! Transitions are plain methods so they can be tested without a DOM.

use crate::form::ChoreForm;
use crate::models::{display_date, Chore, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailMode {
    #[default]
    Closed,
    /// Waiting for `GET /api/chores/{id}`
    Loading(u32),
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailDialog {
    pub mode: DetailMode,
    pub chore: Option<Chore>,
    pub form: ChoreForm,
    pub form_error: Option<String>,
    /// A save or delete request is in flight
    pub busy: bool,
}

impl DetailDialog {
    pub fn is_open(&self) -> bool {
        self.mode != DetailMode::Closed
    }

    pub fn chore_id(&self) -> Option<u32> {
        match self.mode {
            DetailMode::Loading(id) => Some(id),
            _ => self.chore.as_ref().map(|c| c.id),
        }
    }

    /// Start opening `id`; any previous record is discarded
    pub fn open(&mut self, id: u32) {
        *self = Self { mode: DetailMode::Loading(id), ..Default::default() };
    }

    /// Accept a fetched record. Returns false (and ignores it) when the
    /// dialog has since been closed or pointed at another chore.
    pub fn loaded(&mut self, chore: Chore) -> bool {
        if self.mode != DetailMode::Loading(chore.id) {
            return false;
        }
        self.chore = Some(chore);
        self.mode = DetailMode::Viewing;
        true
    }

    /// Refresh the record after a save without leaving the dialog
    pub fn refreshed(&mut self, chore: Chore) {
        if self.chore_id() == Some(chore.id) {
            self.chore = Some(chore);
            self.mode = DetailMode::Viewing;
            self.form_error = None;
        }
    }

    /// Switch to edit mode, populating the form from the record
    pub fn begin_edit(&mut self, users: &[User]) {
        if let (DetailMode::Viewing, Some(chore)) = (self.mode, &self.chore) {
            self.form = ChoreForm::from_chore(chore, users);
            self.form_error = None;
            self.mode = DetailMode::Editing;
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.mode == DetailMode::Editing {
            self.mode = DetailMode::Viewing;
            self.form_error = None;
        }
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }
}

/// Label / value pairs of the read-only summary
pub fn summary_rows(chore: &Chore) -> Vec<(&'static str, String)> {
    vec![
        ("Assignee", chore.assignee.clone()),
        ("Category", chore.category.clone().unwrap_or_else(|| "N/A".to_string())),
        ("Status", chore.status.label().to_string()),
        ("Next Due", display_date(chore.next_due)),
        ("Frequency", format!("Every {} days", chore.frequency)),
        ("Last Completed", display_date(chore.last_completed)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChoreStatus;
    use chrono::NaiveDate;

    fn chore(id: u32) -> Chore {
        Chore {
            id,
            title: "Vacuum".into(),
            assignee: "Dan".into(),
            category: None,
            status: ChoreStatus::Overdue,
            next_due: NaiveDate::from_ymd_opt(2026, 10, 1),
            frequency: 7,
            last_completed: None,
            notes: Some("Upstairs too".into()),
            is_priority: true,
        }
    }

    #[test]
    fn test_open_load_edit_cycle() {
        let users = vec![User { id: 1, name: "Dan".into() }];
        let mut dialog = DetailDialog::default();
        assert!(!dialog.is_open());

        dialog.open(4);
        assert_eq!(dialog.mode, DetailMode::Loading(4));
        assert_eq!(dialog.chore_id(), Some(4));
        assert!(dialog.loaded(chore(4)));
        assert_eq!(dialog.mode, DetailMode::Viewing);

        dialog.begin_edit(&users);
        assert_eq!(dialog.mode, DetailMode::Editing);
        assert_eq!(dialog.form.user_id, "1");
        assert_eq!(dialog.form.frequency, "7");
        assert!(dialog.form.is_priority);

        dialog.cancel_edit();
        assert_eq!(dialog.mode, DetailMode::Viewing);
        dialog.close();
        assert_eq!(dialog, DetailDialog::default());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut dialog = DetailDialog::default();
        dialog.open(1);
        dialog.open(2);
        assert!(!dialog.loaded(chore(1)));
        assert_eq!(dialog.mode, DetailMode::Loading(2));

        dialog.close();
        assert!(!dialog.loaded(chore(2)));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_edit_requires_loaded_record() {
        let mut dialog = DetailDialog::default();
        dialog.open(3);
        dialog.begin_edit(&[]);
        assert_eq!(dialog.mode, DetailMode::Loading(3));
    }

    #[test]
    fn test_summary_fills_missing_values() {
        let rows = summary_rows(&chore(1));
        assert_eq!(rows[1], ("Category", "N/A".to_string()));
        assert_eq!(rows[3], ("Next Due", "Oct 1, 2026".to_string()));
        assert_eq!(rows[5], ("Last Completed", "N/A".to_string()));
    }
}
