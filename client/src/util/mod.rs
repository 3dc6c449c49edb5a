//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing policy out of page rendering so it can be
//! tested without a browser.

pub mod auth;
