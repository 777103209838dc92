//! Page Configuration
//!
//! The server-rendered page embeds two JSON blocks:
//! `<script id="app-config" type="application/json">` with settings and
//! `<script id="chore-data" type="application/json">` with the initial
//! chores and users. Missing or malformed blocks fall back to defaults.

use leptos_swipe::SwipeConfig;
use serde::Deserialize;

use crate::models::{Chore, User};

pub const CONFIG_ELEMENT_ID: &str = "app-config";
pub const DATA_ELEMENT_ID: &str = "chore-data";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API origin; the page origin when unset
    pub api_base: Option<String>,
    pub commit_threshold_px: f64,
    pub tap_tolerance_px: f64,
    pub snap_back_ms: u32,
    pub fade_out_ms: u32,
    pub notice_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let swipe = SwipeConfig::default();
        Self {
            api_base: None,
            commit_threshold_px: swipe.commit_threshold,
            tap_tolerance_px: swipe.tap_tolerance,
            snap_back_ms: 300,
            fade_out_ms: 300,
            notice_timeout_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read `#app-config`, or defaults
    pub fn from_document() -> Self {
        match script_text(CONFIG_ELEMENT_ID) {
            Some(text) => Self::from_json(&text).unwrap_or_else(|e| {
                log::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn swipe(&self) -> SwipeConfig {
        SwipeConfig {
            commit_threshold: self.commit_threshold_px,
            tap_tolerance: self.tap_tolerance_px,
        }
    }

    /// API origin to send requests to
    pub fn resolved_api_base(&self) -> String {
        if let Some(base) = self.api_base.as_deref().filter(|b| !b.trim().is_empty()) {
            return base.to_string();
        }
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
}

/// Initial page data
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageData {
    pub chores: Vec<Chore>,
    pub users: Vec<User>,
}

impl PageData {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read `#chore-data`, or an empty board
    pub fn from_document() -> Self {
        match script_text(DATA_ELEMENT_ID) {
            Some(text) => Self::from_json(&text).unwrap_or_else(|e| {
                log::error!("[CONFIG] Could not read #{}: {}", DATA_ELEMENT_ID, e);
                Self::default()
            }),
            None => {
                log::warn!("[CONFIG] #{} not found; starting with an empty list", DATA_ELEMENT_ID);
                Self::default()
            }
        }
    }
}

fn script_text(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"commit_threshold_px": 120, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.commit_threshold_px, 120.0);
        assert_eq!(config.tap_tolerance_px, 5.0);
        assert_eq!(config.fade_out_ms, 300);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.swipe().commit_threshold, 120.0);
    }

    #[test]
    fn test_explicit_api_base() {
        let config = AppConfig::from_json(r#"{"api_base": "https://chores.example"}"#).unwrap();
        assert_eq!(config.resolved_api_base(), "https://chores.example");
    }

    #[test]
    fn test_page_data() {
        let data = PageData::from_json(
            r#"{
                "users": [{"id": 1, "name": "Dan"}],
                "chores": [{"id": 5, "title": "Trash", "assignee": "Dan", "status": "Overdue",
                            "frequency": 7, "next_due": "2026-10-01", "is_priority": false}]
            }"#,
        )
        .unwrap();
        assert_eq!(data.users.len(), 1);
        assert_eq!(data.chores[0].title, "Trash");
        assert_eq!(PageData::from_json("{}").unwrap(), PageData::default());
    }
}
