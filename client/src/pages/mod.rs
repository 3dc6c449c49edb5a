//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and exposes its async submit/load flow as a
//! plain function over [`AuthApi`](crate::net::api::AuthApi), so the
//! component only wires signals and spawns the flow.

pub mod home;
pub mod login;
pub mod register;
