//! REST API helpers for communicating with the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status, transport failure, or undecodable body becomes an
//! `Err`. Nothing is retried or cached.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, HomeResponse, LoginResponse, RegisterResponse, RegistrationRequest};

/// Backend base address used when `AUTHDESK_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Operations the views need from the backend.
///
/// Pages take this as a generic parameter so their submit/load flows can run
/// against an in-memory double.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST {base}/login/` with the credentials as JSON.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `POST {base}/register/` with the account details as JSON.
    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, ApiError>;

    /// `GET {base}/home/` with `Authorization: Bearer <token>`.
    async fn fetch_home(&self, token: &str) -> Result<HomeResponse, ApiError>;
}

/// [`AuthApi`] backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    /// Build a client rooted at `base_url`. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Build a client from the `AUTHDESK_API_URL` value baked in at compile
    /// time, falling back to [`DEFAULT_API_URL`].
    pub fn from_build_env() -> Self {
        Self::new(option_env!("AUTHDESK_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a backend resource, e.g. `endpoint("login")` →
    /// `http://127.0.0.1:8000/api/login/`.
    pub fn endpoint(&self, resource: &str) -> String {
        format!("{}/{resource}/", self.base_url)
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn post_json<B, R>(url: &str, body: &B) -> Result<R, ApiError>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn read_json<R>(resp: gloo_net::http::Response) -> Result<R, ApiError>
where
    R: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<R>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.endpoint("login"), credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.endpoint("register"), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn fetch_home(&self, token: &str) -> Result<HomeResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint("home"))
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
