//! Frontend Models
//!
//! Data structures matching the chore API's JSON.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Display format for dates (e.g. "Jan 5, 2026")
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Chore status as computed by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum ChoreStatus {
    Overdue,
    #[serde(rename = "Due Soon")]
    DueSoon,
    #[serde(rename = "Completed Recently")]
    CompletedRecently,
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ChoreStatus {
    /// Unknown labels map to `NotApplicable`
    pub fn from_label(label: &str) -> Self {
        match label {
            "Overdue" => ChoreStatus::Overdue,
            "Due Soon" => ChoreStatus::DueSoon,
            "Completed Recently" => ChoreStatus::CompletedRecently,
            _ => ChoreStatus::NotApplicable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChoreStatus::Overdue => "Overdue",
            ChoreStatus::DueSoon => "Due Soon",
            ChoreStatus::CompletedRecently => "Completed Recently",
            ChoreStatus::NotApplicable => "N/A",
        }
    }

    /// Sort rank used by the "All Chores" view
    pub fn rank(&self) -> u8 {
        match self {
            ChoreStatus::Overdue => 1,
            ChoreStatus::DueSoon => 2,
            ChoreStatus::CompletedRecently => 3,
            ChoreStatus::NotApplicable => 4,
        }
    }

    /// Status the server derives from a due date.
    /// "Due Soon" covers the next 14 days, or 30 for intervals over 30 days.
    pub fn compute(next_due: Option<NaiveDate>, frequency: u32, today: NaiveDate) -> Self {
        let Some(due) = next_due else { return ChoreStatus::NotApplicable };
        if due < today {
            return ChoreStatus::Overdue;
        }
        let window = if frequency > 30 { 30 } else { 14 };
        match today.checked_add_days(Days::new(window)) {
            Some(limit) if due <= limit => ChoreStatus::DueSoon,
            _ => ChoreStatus::CompletedRecently,
        }
    }

    /// Badge class: "status-" + lowercased label, first space as '-'
    pub fn css_class(&self) -> String {
        format!("status-{}", self.label().to_lowercase().replacen(' ', "-", 1))
    }
}

impl<'de> Deserialize<'de> for ChoreStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label: Option<String> = Option::deserialize(deserializer)?;
        Ok(label.as_deref().map(Self::from_label).unwrap_or_default())
    }
}

/// Chore data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    pub id: u32,
    pub title: String,
    pub assignee: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: ChoreStatus,
    #[serde(default, deserialize_with = "deserialize_opt_date")]
    pub next_due: Option<NaiveDate>,
    pub frequency: u32,
    #[serde(default, deserialize_with = "deserialize_opt_date")]
    pub last_completed: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_priority: bool,
}

impl Chore {
    /// Due date implied by a completion on `completed`
    pub fn due_after(&self, completed: NaiveDate) -> Option<NaiveDate> {
        completed.checked_add_days(Days::new(u64::from(self.frequency)))
    }
}

/// Household member a chore can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
}

/// Body of create and update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChorePayload {
    pub title: String,
    pub user_id: u32,
    /// Sent as `null` when blank so an edit can clear it
    pub category: Option<String>,
    pub frequency: u32,
    /// Omitted on edit when unknown; the server keeps its value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<NaiveDate>,
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_priority: Option<bool>,
}

/// Partial chore returned by complete / toggle-priority
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChorePatch {
    #[serde(default)]
    pub status: Option<ChoreStatus>,
    #[serde(default, deserialize_with = "deserialize_opt_date")]
    pub next_due: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_opt_date")]
    pub last_completed: Option<NaiveDate>,
    #[serde(default)]
    pub is_priority: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Generic `{message}` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /api/chores`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreatedResponse {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Format an optional date for display
pub fn display_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format(DISPLAY_DATE_FORMAT).to_string(),
        None => "N/A".to_string(),
    }
}

/// Parse the date shapes the server may emit
pub fn parse_api_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    // HTTP-date, e.g. "Mon, 05 Jan 2026 00:00:00 GMT"
    DateTime::parse_from_rfc2822(s).ok().map(|dt| dt.date_naive())
}

fn deserialize_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_api_date(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {s}"))),
    }
}
