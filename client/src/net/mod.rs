//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the login/register/home requests, `error` classifies their
//! failures, and `types` defines the wire schema shared with the backend.

pub mod api;
pub mod error;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
