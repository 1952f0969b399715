//! Crate-level error type.
//!
//! Each module keeps its own `thiserror` enum; everything converts into
//! [`BehaviorKitError`] so applications can use a single `Result`.

use crate::chain::ChainError;
use crate::config::ConfigurationError;
use crate::memento::MementoError;
use crate::strategy::StrategyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorKitError {
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),
    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),
    #[error("Snapshot error: {0}")]
    Memento(#[from] MementoError),
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BehaviorKitError>;
