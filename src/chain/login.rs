//! Step-by-step login validation.
//!
//! Validators accept a request when they have a reason to reject it, which
//! ends the dispatch with [`LoginDecision::Rejected`]. A request that passes
//! every validator reaches [`LoginSuccessHandler`], which accepts anything.

use super::errors::HandlerResult;
use super::handler::Handler;
use super::handler_chain::HandlerChain;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub two_factor_enabled: bool,
    pub two_factor_code: Option<String>,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            two_factor_enabled: false,
            two_factor_code: None,
        }
    }

    pub fn with_two_factor(mut self, code: Option<String>) -> Self {
        self.two_factor_enabled = true;
        self.two_factor_code = code;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum LoginDecision {
    Granted { username: String },
    Rejected { reason: String },
}

impl LoginDecision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted { .. })
    }

    fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }
}

/// Known users and their passwords, injected into the validators
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    passwords: HashMap<String, String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.passwords.insert(username.into(), password.into());
        self
    }

    pub fn contains(&self, username: &str) -> bool {
        self.passwords.contains_key(username)
    }

    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.passwords
            .get(username)
            .is_some_and(|expected| expected == password)
    }
}

pub struct CheckUsernameHandler {
    credentials: Arc<Credentials>,
}

impl CheckUsernameHandler {
    pub fn new(credentials: Arc<Credentials>) -> Self {
        Self { credentials }
    }
}

impl Handler<LoginRequest> for CheckUsernameHandler {
    type Output = LoginDecision;

    fn name(&self) -> &'static str {
        "check_username"
    }

    fn can_handle(&self, request: &LoginRequest) -> bool {
        request.username.is_empty() || !self.credentials.contains(&request.username)
    }

    fn handle(&self, request: &LoginRequest) -> HandlerResult<LoginDecision> {
        if request.username.is_empty() {
            return Ok(LoginDecision::rejected("username must not be empty"));
        }
        Ok(LoginDecision::rejected(format!(
            "unknown user '{}'",
            request.username
        )))
    }
}

pub struct CheckPasswordHandler {
    credentials: Arc<Credentials>,
}

impl CheckPasswordHandler {
    pub fn new(credentials: Arc<Credentials>) -> Self {
        Self { credentials }
    }
}

impl Handler<LoginRequest> for CheckPasswordHandler {
    type Output = LoginDecision;

    fn name(&self) -> &'static str {
        "check_password"
    }

    fn can_handle(&self, request: &LoginRequest) -> bool {
        request.password.is_empty()
            || !self.credentials.verify(&request.username, &request.password)
    }

    fn handle(&self, request: &LoginRequest) -> HandlerResult<LoginDecision> {
        if request.password.is_empty() {
            return Ok(LoginDecision::rejected("password must not be empty"));
        }
        Ok(LoginDecision::rejected("incorrect password"))
    }
}

/// Rejects requests that enable two-factor auth without supplying a code
pub struct TwoFactorAuthHandler;

impl Handler<LoginRequest> for TwoFactorAuthHandler {
    type Output = LoginDecision;

    fn name(&self) -> &'static str {
        "two_factor_auth"
    }

    fn can_handle(&self, request: &LoginRequest) -> bool {
        request.two_factor_enabled
            && request
                .two_factor_code
                .as_deref()
                .map_or(true, str::is_empty)
    }

    fn handle(&self, _request: &LoginRequest) -> HandlerResult<LoginDecision> {
        Ok(LoginDecision::rejected("two-factor code required"))
    }
}

pub struct LoginSuccessHandler;

impl Handler<LoginRequest> for LoginSuccessHandler {
    type Output = LoginDecision;

    fn name(&self) -> &'static str {
        "login_success"
    }

    fn can_handle(&self, _request: &LoginRequest) -> bool {
        true
    }

    fn handle(&self, request: &LoginRequest) -> HandlerResult<LoginDecision> {
        tracing::info!(username = %request.username, "Login granted");
        Ok(LoginDecision::Granted {
            username: request.username.clone(),
        })
    }
}

/// `[check_username, check_password, two_factor_auth, login_success]`
pub fn login_chain(credentials: Arc<Credentials>) -> HandlerChain<LoginRequest, LoginDecision> {
    HandlerChain::builder("login")
        .with_handler(CheckUsernameHandler::new(Arc::clone(&credentials)))
        .with_handler(CheckPasswordHandler::new(credentials))
        .with_handler(TwoFactorAuthHandler)
        .with_handler(LoginSuccessHandler)
        .build()
}
