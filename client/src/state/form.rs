//! Submission bookkeeping shared by the login and register forms.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;

/// How a submit attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another request from the same form was still outstanding.
    Busy,
    /// A required field was empty; nothing was sent.
    Invalid,
    /// The backend or network rejected the request.
    Failed,
    Succeeded,
}

/// Per-form in-flight flag. At most one request per form is outstanding.
#[derive(Clone, Copy, Debug)]
pub struct InFlight(RwSignal<bool>);

impl InFlight {
    pub fn new() -> Self {
        Self(RwSignal::new(false))
    }

    /// Tracked, for binding the submit button's `disabled` attribute.
    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    pub fn is_active_untracked(&self) -> bool {
        self.0.get_untracked()
    }

    /// Mark the form busy. Returns `None` if it already is.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        if self.0.get_untracked() {
            return None;
        }
        self.0.set(true);
        Some(InFlightGuard(*self))
    }
}

impl Default for InFlight {
    fn default() -> Self {
        Self::new()
    }
}

/// Clears the in-flight flag when dropped.
#[must_use = "the form is released as soon as the guard drops"]
#[derive(Debug)]
pub struct InFlightGuard(InFlight);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        // The page may already be unmounted after a navigation.
        let _ = self.0.0.try_set(false);
    }
}
