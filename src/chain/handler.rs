use super::errors::HandlerResult;

/// A unit that may accept a request and process it
///
/// `can_handle` is a pure predicate. `handle` is only called after
/// `can_handle` returned `true` for the same request.
pub trait Handler<R: ?Sized>: Send + Sync {
    /// Value produced when this handler processes a request
    type Output;

    /// Stable name used in outcomes and logs
    fn name(&self) -> &'static str;

    /// Whether this handler accepts the request
    fn can_handle(&self, request: &R) -> bool;

    /// Process an accepted request
    fn handle(&self, request: &R) -> HandlerResult<Self::Output>;
}

/// Result of offering a request to a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<O> {
    /// The named handler accepted the request and produced `output`
    Handled { handler: &'static str, output: O },
    /// No handler accepted the request
    Unhandled,
}

impl<O> Outcome<O> {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled { .. })
    }

    /// Name of the handler that accepted the request
    pub fn handler(&self) -> Option<&'static str> {
        match self {
            Self::Handled { handler, .. } => Some(handler),
            Self::Unhandled => None,
        }
    }

    pub fn output(&self) -> Option<&O> {
        match self {
            Self::Handled { output, .. } => Some(output),
            Self::Unhandled => None,
        }
    }

    pub fn into_output(self) -> Option<O> {
        match self {
            Self::Handled { output, .. } => Some(output),
            Self::Unhandled => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(O) -> U) -> Outcome<U> {
        match self {
            Self::Handled { handler, output } => Outcome::Handled {
                handler,
                output: f(output),
            },
            Self::Unhandled => Outcome::Unhandled,
        }
    }
}
