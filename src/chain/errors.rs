use thiserror::Error;

/// Failure raised from inside a handler while it processes a request
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Errors surfaced by [`HandlerChain::dispatch`](super::HandlerChain::dispatch)
///
/// An unhandled request is not an error; see [`Outcome::Unhandled`](super::Outcome::Unhandled).
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Handler '{handler}' failed: {source}")]
    HandlerFailed {
        handler: &'static str,
        source: HandlerError,
    },
}

impl ChainError {
    /// Name of the handler whose failure aborted the dispatch
    pub fn handler(&self) -> &'static str {
        match self {
            Self::HandlerFailed { handler, .. } => handler,
        }
    }
}

pub type HandlerResult<T> = Result<T, HandlerError>;
pub type ChainResult<T> = Result<T, ChainError>;

/// Helper function to create invalid request errors
pub fn invalid_request(reason: impl Into<String>) -> HandlerError {
    HandlerError::InvalidRequest {
        reason: reason.into(),
    }
}
