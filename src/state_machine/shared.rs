use super::definition::StateDefinition;
use super::machine::{SendOutcome, StateMachine};
use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe handle to a state machine
///
/// Every operation takes the entity's single lock, so a transition is one
/// critical section and callers never observe a half-applied event.
pub struct SharedStateMachine<D: StateDefinition> {
    inner: Arc<Mutex<StateMachine<D>>>,
}

impl<D: StateDefinition> SharedStateMachine<D> {
    pub fn new(machine: StateMachine<D>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn send(&self, event: D::Event) -> SendOutcome<D::State> {
        self.inner.lock().send(event)
    }

    pub fn current_state(&self) -> D::State {
        self.inner.lock().current_state()
    }

    /// Run a closure with exclusive access to the machine
    pub fn with<T>(&self, f: impl FnOnce(&mut StateMachine<D>) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }
}

impl<D: StateDefinition> Clone for SharedStateMachine<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: StateDefinition> From<StateMachine<D>> for SharedStateMachine<D> {
    fn from(machine: StateMachine<D>) -> Self {
        Self::new(machine)
    }
}
