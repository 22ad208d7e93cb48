use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a notice stays on screen.
pub const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub nav_open: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
    next_notice_id: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            nav_open: RwSignal::new(true),
            notice: RwSignal::new(None),
            next_notice_id: StoredValue::new(0),
        }
    }

    pub fn toggle_nav(&self) {
        self.nav_open.update(|val| *val = !*val);
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text.into());
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("notice: {}", text);
        self.notify(NoticeKind::Error, text);
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }

    /// Shows `text` and clears it after [`NOTICE_TIMEOUT_MS`], unless a newer
    /// notice has replaced it in the meantime.
    fn notify(&self, kind: NoticeKind, text: String) {
        let id = self.next_notice_id.get_value() + 1;
        self.next_notice_id.set_value(id);
        self.notice.set(Some(Notice { id, kind, text }));

        let notice = self.notice;
        Timeout::new(NOTICE_TIMEOUT_MS, move || {
            let still_current = notice
                .try_with_untracked(|n| n.as_ref().map(|n| n.id) == Some(id))
                .unwrap_or(false);
            if still_current {
                notice.set(None);
            }
        })
        .forget();
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
