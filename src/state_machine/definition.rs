use super::events::MachineEvent;
use super::states::MachineState;

/// What the current state does with an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<S> {
    /// Move to the target state
    To(S),
    /// Stay put; the diagnostic explains why the event was refused
    Reject(String),
}

impl<S> Transition<S> {
    pub fn reject(diagnostic: impl Into<String>) -> Self {
        Self::Reject(diagnostic.into())
    }
}

/// The fixed transition table of a machine
///
/// Implementations are stateless and usually a single `match` over
/// `(state, event)`. They may read and write the machine's context payload,
/// but never the current state directly; the machine applies the returned
/// [`Transition`].
pub trait StateDefinition: Send + Sync {
    type State: MachineState;
    type Event: MachineEvent;
    type Context;

    /// Name used in logs and diagnostics
    fn name(&self) -> &'static str;

    fn initial_state(&self) -> Self::State;

    /// Behavior of `state` for `event`
    ///
    /// Never called for terminal states.
    fn transition(
        &self,
        state: Self::State,
        event: &Self::Event,
        context: &mut Self::Context,
    ) -> Transition<Self::State>;
}
