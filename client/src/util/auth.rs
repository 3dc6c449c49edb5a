//! Route access control.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes that need a token install the same guard so an `Anonymous` tab that
//! lands on them (direct URL, back button, logout) is sent to the login page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::{HOME_PATH, LOGIN_PATH};
use crate::state::session::{Session, SessionContext};

/// Result of checking a path against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    Redirect(&'static str),
}

/// Whether `path` requires an authenticated session.
pub fn requires_auth(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    trimmed == HOME_PATH
}

/// Decide whether `session` may render `path`.
pub fn route_access(path: &str, session: &Session) -> RouteAccess {
    if requires_auth(path) && !session.is_authenticated() {
        RouteAccess::Redirect(LOGIN_PATH)
    } else {
        RouteAccess::Allow
    }
}

/// Redirect away from `path` whenever the session stops satisfying it.
///
/// Re-evaluates on every session change, so clearing the token on a guarded
/// page doubles as the logout redirect.
pub fn install_route_guard<F>(path: &'static str, session: SessionContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let RouteAccess::Redirect(to) = route_access(path, &session.session()) {
            log::debug!("route guard: {path} -> {to}");
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
