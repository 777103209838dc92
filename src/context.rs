//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::ApiClient;
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Message shown in the notice bar
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    /// Chore whose completion can be undone from the notice
    pub undo_chore: Option<u32>,
    seq: u32,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<AppConfig>,
    api_base: StoredValue<String>,
    /// Current notice - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Current notice - write
    set_notice: WriteSignal<Option<Notice>>,
    next_seq: StoredValue<u32>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (notice, set_notice) = signal(None::<Notice>);
        Self {
            api_base: StoredValue::new(config.resolved_api_base()),
            config: StoredValue::new(config),
            notice,
            set_notice,
            next_seq: StoredValue::new(0),
        }
    }

    /// Client for the chore API
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.api_base.get_value())
    }

    fn show(&self, text: String, kind: NoticeKind, undo_chore: Option<u32>) {
        let seq = self.next_seq.get_value().wrapping_add(1);
        self.next_seq.set_value(seq);
        self.set_notice.set(Some(Notice { text, kind, undo_chore, seq }));

        // Auto-dismiss unless a newer notice replaced this one
        let timeout = self.config.with_value(|c| c.notice_timeout_ms);
        let notice = self.notice;
        let set_notice = self.set_notice;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout).await;
            if notice.get_untracked().is_some_and(|n| n.seq == seq) {
                set_notice.set(None);
            }
        });
    }

    pub fn notify(&self, text: impl Into<String>) {
        self.show(text.into(), NoticeKind::Info, None);
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.show(text.into(), NoticeKind::Error, None);
    }

    /// Success notice offering to undo a completion
    pub fn notify_with_undo(&self, text: impl Into<String>, chore_id: u32) {
        self.show(text.into(), NoticeKind::Info, Some(chore_id));
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    /// Full page reload, for when the server did not tell us enough to patch
    pub fn reload_page(&self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("[APP] Page reload failed: {:?}", e);
            }
        }
    }
}
