use super::persistence::TransitionRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Hook invoked after a transition has been applied
pub trait TransitionListener<S>: Send + Sync {
    fn on_transition(&self, machine: &'static str, record: &TransitionRecord<S>);

    /// Get a description of this listener for logging
    fn description(&self) -> &'static str;
}

/// Identifies a registered listener; compared by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(Uuid);

impl ListenerId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Listener that writes every transition to the tracing output
pub struct LogTransitionListener;

impl<S: fmt::Display> TransitionListener<S> for LogTransitionListener {
    fn on_transition(&self, machine: &'static str, record: &TransitionRecord<S>) {
        tracing::info!(
            machine,
            from = %record.from,
            to = %record.to,
            event = %record.event,
            sort_key = record.sort_key,
            "State transition applied"
        );
    }

    fn description(&self) -> &'static str {
        "Log applied transitions"
    }
}

/// Listener backed by a closure
pub struct FnListener<F> {
    description: &'static str,
    callback: F,
}

impl<F> FnListener<F> {
    pub fn new(description: &'static str, callback: F) -> Self {
        Self {
            description,
            callback,
        }
    }
}

impl<S, F> TransitionListener<S> for FnListener<F>
where
    F: Fn(&'static str, &TransitionRecord<S>) + Send + Sync,
{
    fn on_transition(&self, machine: &'static str, record: &TransitionRecord<S>) {
        (self.callback)(machine, record);
    }

    fn description(&self) -> &'static str {
        self.description
    }
}
