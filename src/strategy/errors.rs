use thiserror::Error;

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("No strategy configured")]
    NotConfigured,

    #[error("Unknown strategy '{name}', expected one of: {expected}")]
    UnknownStrategy { name: String, expected: String },

    #[error("Strategy '{strategy}' failed: {source}")]
    ExecutionFailed {
        strategy: &'static str,
        source: anyhow::Error,
    },
}

pub type StrategyResult<T> = Result<T, StrategyError>;
