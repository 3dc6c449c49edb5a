//! Wire types exchanged with the backend auth API.
//!
//! Request bodies serialize exactly as the backend expects them. Response
//! types only name the fields the client reads; anything else the backend
//! sends is ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Username/password pair submitted to `POST /login/`.
///
/// Lives only as long as a single submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Account details submitted to `POST /register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login body. `access` is the opaque bearer token.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access: String,
}

/// Successful registration body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Protected home resource body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HomeResponse {
    pub message: String,
}
