//! Transient user-facing notifications (toasts).
//!
//! DESIGN
//! ======
//! Every request failure ends here as a short message; nothing about it is
//! retained once the toast is dismissed. The toast component removes each
//! notice after [`NOTICE_TTL_MS`].

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

/// How long a notice stays on screen in the browser.
pub const NOTICE_TTL_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Ordered list of visible notices. Ids are never reused.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, kind, text: text.into() });
        id
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}

/// Reactive handle to the app-wide notice list.
#[derive(Clone, Copy, Debug)]
pub struct NoticeContext(RwSignal<NoticeState>);

impl NoticeContext {
    pub fn new() -> Self {
        Self(RwSignal::new(NoticeState::default()))
    }

    /// Show a success notice. `None` if the notice list has been disposed.
    pub fn success(&self, text: impl Into<String>) -> Option<u64> {
        self.push(NoticeKind::Success, text)
    }

    pub fn error(&self, text: impl Into<String>) -> Option<u64> {
        self.push(NoticeKind::Error, text)
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|state| {
            state.dismiss(id);
        });
    }

    /// Tracked snapshot for rendering.
    pub fn items(&self) -> Vec<Notice> {
        self.0.with(|state| state.items.clone())
    }

    pub fn items_untracked(&self) -> Vec<Notice> {
        self.0.with_untracked(|state| state.items.clone())
    }

    fn push(&self, kind: NoticeKind, text: impl Into<String>) -> Option<u64> {
        let text = text.into();
        let id = self.0.try_update(|state| state.push(kind, text));
        if id.is_none() {
            log::debug!("notice dropped: notice list already disposed");
        }
        id
    }
}

impl Default for NoticeContext {
    fn default() -> Self {
        Self::new()
    }
}
