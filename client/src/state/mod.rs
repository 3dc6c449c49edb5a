//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notice`, `form`) and handed to
//! components as small `Copy` context handles rather than ambient globals.

pub mod form;
pub mod notice;
pub mod session;
