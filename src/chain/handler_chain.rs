use super::errors::{ChainError, ChainResult};
use super::handler::{Handler, Outcome};
use std::fmt;
use tracing::debug;

type BoxedHandler<R, O> = Box<dyn Handler<R, Output = O>>;

/// Ordered, immutable sequence of handlers with first-match-wins dispatch
pub struct HandlerChain<R: ?Sized, O> {
    label: &'static str,
    handlers: Vec<BoxedHandler<R, O>>,
}

/// Dispatch outcome plus traversal bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport<O> {
    pub outcome: Outcome<O>,
    /// Number of handlers whose `can_handle` was consulted
    pub probed: usize,
}

impl<R: ?Sized, O> HandlerChain<R, O> {
    pub fn builder(label: &'static str) -> HandlerChainBuilder<R, O> {
        HandlerChainBuilder {
            label,
            handlers: Vec::new(),
        }
    }

    /// A chain with no handlers; every dispatch is unhandled
    pub fn empty(label: &'static str) -> Self {
        Self::builder(label).build()
    }

    /// Offer the request to each handler in order until one accepts it
    pub fn dispatch(&self, request: &R) -> ChainResult<Outcome<O>> {
        self.dispatch_with_report(request).map(|report| report.outcome)
    }

    /// Same as [`dispatch`](Self::dispatch), also reporting how far traversal went
    pub fn dispatch_with_report(&self, request: &R) -> ChainResult<DispatchReport<O>> {
        for (position, handler) in self.handlers.iter().enumerate() {
            if !handler.can_handle(request) {
                continue;
            }

            let name = handler.name();
            debug!(chain = self.label, handler = name, position, "Handler accepted request");

            let output = handler
                .handle(request)
                .map_err(|source| ChainError::HandlerFailed {
                    handler: name,
                    source,
                })?;

            return Ok(DispatchReport {
                outcome: Outcome::Handled {
                    handler: name,
                    output,
                },
                probed: position + 1,
            });
        }

        debug!(
            chain = self.label,
            probed = self.handlers.len(),
            "No handler accepted request"
        );

        Ok(DispatchReport {
            outcome: Outcome::Unhandled,
            probed: self.handlers.len(),
        })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in dispatch order
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }
}

impl<R: ?Sized, O> fmt::Debug for HandlerChain<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("label", &self.label)
            .field("handlers", &self.handler_names())
            .finish()
    }
}

/// Collects handlers in dispatch order; the chain is frozen by [`build`](Self::build)
pub struct HandlerChainBuilder<R: ?Sized, O> {
    label: &'static str,
    handlers: Vec<BoxedHandler<R, O>>,
}

impl<R: ?Sized, O> HandlerChainBuilder<R, O> {
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: Handler<R, Output = O> + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    pub fn with_boxed_handler(mut self, handler: BoxedHandler<R, O>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn build(self) -> HandlerChain<R, O> {
        debug!(
            chain = self.label,
            handlers = self.handlers.len(),
            "Handler chain built"
        );
        HandlerChain {
            label: self.label,
            handlers: self.handlers,
        }
    }
}
