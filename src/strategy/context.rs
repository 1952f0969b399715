use super::errors::{StrategyError, StrategyResult};
use std::fmt;
use std::sync::Arc;

/// An interchangeable algorithm
///
/// Strategies only see their input; they cannot reach the context that
/// holds them, which keeps swapping safe.
pub trait Strategy: Send + Sync {
    type Input;
    type Output;

    /// Stable name used in logs and errors
    fn name(&self) -> &'static str;

    fn execute(&self, input: Self::Input) -> StrategyResult<Self::Output>;
}

type SharedStrategy<I, O> = Arc<dyn Strategy<Input = I, Output = O>>;

/// Holder of the currently selected strategy
pub struct StrategyContext<I, O> {
    strategy: Option<SharedStrategy<I, O>>,
}

impl<I, O> StrategyContext<I, O> {
    /// A context with no strategy installed
    pub fn new() -> Self {
        Self { strategy: None }
    }

    pub fn with_strategy<S>(strategy: S) -> Self
    where
        S: Strategy<Input = I, Output = O> + 'static,
    {
        Self {
            strategy: Some(Arc::new(strategy)),
        }
    }

    /// Replace the held strategy; takes effect for the next `execute`
    pub fn set_strategy<S>(&mut self, strategy: S)
    where
        S: Strategy<Input = I, Output = O> + 'static,
    {
        self.set_shared_strategy(Arc::new(strategy));
    }

    /// Install a strategy that may also be held by other contexts
    pub fn set_shared_strategy(&mut self, strategy: SharedStrategy<I, O>) {
        tracing::debug!(
            previous = self.strategy_name(),
            next = strategy.name(),
            "Strategy selected"
        );
        self.strategy = Some(strategy);
    }

    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    pub fn strategy_name(&self) -> Option<&'static str> {
        self.strategy.as_ref().map(|s| s.name())
    }

    pub fn has_strategy(&self) -> bool {
        self.strategy.is_some()
    }

    /// Run the held strategy on `input`
    pub fn execute(&self, input: I) -> StrategyResult<O> {
        let strategy = self.strategy.as_ref().ok_or_else(|| {
            tracing::warn!("Execute called with no strategy configured");
            StrategyError::NotConfigured
        })?;
        strategy.execute(input)
    }
}

impl<I, O> Default for StrategyContext<I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I, O> fmt::Debug for StrategyContext<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyContext")
            .field("strategy", &self.strategy_name())
            .finish()
    }
}
