//! In-memory [`AuthApi`] double used by page flow tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::api::AuthApi;
use super::error::ApiError;
use super::types::{Credentials, HomeResponse, LoginResponse, RegisterResponse, RegistrationRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Login(Credentials),
    Register(RegistrationRequest),
    Home(String),
}

/// Returns canned responses and records every call in order.
///
/// Each call yields at least once before answering so concurrent submissions
/// overlap the way they would across a real network await. Clones share the
/// call log.
#[derive(Clone)]
pub(crate) struct MockApi {
    pub login: Result<LoginResponse, ApiError>,
    pub register: Result<RegisterResponse, ApiError>,
    pub home: Result<HomeResponse, ApiError>,
    /// Per-token home answers and how many times to yield before answering.
    home_by_token: HashMap<String, (Result<HomeResponse, ApiError>, usize)>,
    calls: Rc<RefCell<Vec<Call>>>,
}

impl MockApi {
    /// Every endpoint answers 401 until overridden.
    pub fn rejecting() -> Self {
        Self {
            login: Err(ApiError::Status(401)),
            register: Err(ApiError::Status(400)),
            home: Err(ApiError::Status(401)),
            home_by_token: HashMap::new(),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn accepting_login(token: &str) -> Self {
        Self { login: Ok(LoginResponse { access: token.to_owned() }), ..Self::rejecting() }
    }

    pub fn with_home(mut self, message: &str) -> Self {
        self.home = Ok(HomeResponse { message: message.to_owned() });
        self
    }

    /// Answer `token` with `result` after yielding `yields` times.
    pub fn with_home_for(mut self, token: &str, result: Result<HomeResponse, ApiError>, yields: usize) -> Self {
        self.home_by_token.insert(token.to_owned(), (result, yields));
        self
    }

    pub fn with_register(mut self, message: &str) -> Self {
        self.register = Ok(RegisterResponse { message: message.to_owned() });
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl AuthApi for MockApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Login(credentials.clone()));
        tokio::task::yield_now().await;
        self.login.clone()
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<RegisterResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Register(request.clone()));
        tokio::task::yield_now().await;
        self.register.clone()
    }

    async fn fetch_home(&self, token: &str) -> Result<HomeResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Home(token.to_owned()));
        let (result, yields) = self
            .home_by_token
            .get(token)
            .cloned()
            .unwrap_or_else(|| (self.home.clone(), 1));
        for _ in 0..yields.max(1) {
            tokio::task::yield_now().await;
        }
        result
    }
}
