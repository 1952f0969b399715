//! # Handler Chains
//!
//! First-match-wins dispatch over an ordered, owned list of handlers.
//!
//! ## Overview
//!
//! A [`HandlerChain`] is built once from a sequence of [`Handler`]s. On
//! [`HandlerChain::dispatch`] each handler is asked, in construction order,
//! whether it accepts the request. The first one that does handles it and
//! traversal stops. When nobody accepts, the chain returns
//! [`Outcome::Unhandled`] and the caller decides what that means.
//!
//! The chain is a `Vec`, never a set of linked nodes, so it cannot contain a
//! cycle and traversal always halts.
//!
//! ## Bundled Chains
//!
//! - [`log_routing`] - routes log messages to the handler for their level
//! - [`login`] - validates a login request step by step
//!
//! ## Usage
//!
//! ```rust
//! use behavior_kit::chain::{log_routing_chain, LogLevel, LogMessage};
//!
//! # fn main() -> Result<(), behavior_kit::chain::ChainError> {
//! let chain = log_routing_chain();
//! let outcome = chain.dispatch(&LogMessage::new(LogLevel::Error, "disk full"))?;
//! assert_eq!(outcome.handler(), Some("error"));
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod handler;
pub mod handler_chain;
pub mod log_routing;
pub mod login;

pub use errors::{ChainError, ChainResult, HandlerError, HandlerResult};
pub use handler::{Handler, Outcome};
pub use handler_chain::{DispatchReport, HandlerChain, HandlerChainBuilder};
pub use log_routing::{log_routing_chain, LevelHandler, LogLevel, LogMessage};
pub use login::{
    login_chain, CheckPasswordHandler, CheckUsernameHandler, Credentials, LoginDecision,
    LoginRequest, LoginSuccessHandler, TwoFactorAuthHandler,
};
