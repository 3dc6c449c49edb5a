//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root creates one [`SessionContext`] and provides it through Leptos
//! context. The login flow is the only writer of a token; the route guard and
//! the home page are readers. Nothing is persisted, so a reload starts
//! `Anonymous` again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

/// Whether the tab holds a bearer token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated { token: String },
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { token } => Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Reactive handle to the tab's single [`Session`].
///
/// Tracked readers (`session`, `token`, `is_authenticated`) subscribe the
/// calling effect or view; the `_untracked` variants are for event handlers.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    session: RwSignal<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self { session: RwSignal::new(Session::Anonymous) }
    }

    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token().map(str::to_owned))
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Session::is_authenticated)
    }

    /// Replace the current token. Last write wins; there is no ordering
    /// beyond call order.
    pub fn set_token(&self, token: impl Into<String>) {
        self.session.set(Session::Authenticated { token: token.into() });
    }

    /// Drop the token and return to `Anonymous` (logout).
    pub fn clear_token(&self) {
        self.session.set(Session::Anonymous);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
