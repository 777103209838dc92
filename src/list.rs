//! List Utilities
//!
//! Ordering and filtering of chores for the list views.

use std::cmp::Reverse;

use chrono::NaiveDate;

use crate::models::Chore;

/// Which list is shown
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ChoreFilter {
    #[default]
    All,
    /// Chores assigned to one person
    Assignee(String),
    Priorities,
}

impl ChoreFilter {
    pub fn title(&self) -> String {
        match self {
            ChoreFilter::All => "All Chores".to_string(),
            ChoreFilter::Assignee(name) => format!("{name}'s Chores"),
            ChoreFilter::Priorities => "Priority Chores".to_string(),
        }
    }
}

/// Absent due dates sort last
fn due_key(chore: &Chore) -> NaiveDate {
    chore.next_due.unwrap_or(NaiveDate::MAX)
}

/// Chores for `filter`, in display order
pub fn visible_chores(chores: &[Chore], filter: &ChoreFilter) -> Vec<Chore> {
    let mut result: Vec<Chore> = match filter {
        ChoreFilter::All => chores.to_vec(),
        ChoreFilter::Assignee(name) => chores.iter().filter(|c| &c.assignee == name).cloned().collect(),
        ChoreFilter::Priorities => chores.iter().filter(|c| c.is_priority).cloned().collect(),
    };

    match filter {
        // Status first, then starred, soonest due, longest interval
        ChoreFilter::All => result.sort_by_key(|c| {
            (c.status.rank(), !c.is_priority, due_key(c), Reverse(c.frequency))
        }),
        ChoreFilter::Assignee(_) | ChoreFilter::Priorities => result.sort_by_key(due_key),
    }
    result
}
