use super::actions::{FnListener, ListenerId, TransitionListener};
use super::definition::{StateDefinition, Transition};
use super::events::MachineEvent;
use super::persistence::{TransitionHistory, TransitionRecord};
use super::states::MachineState;
use crate::config::StateMachineConfig;
use crate::logging::{log_ignored_event, log_transition};
use crate::memento::{Memento, MementoConvertible, MementoError, MementoResult};
use std::fmt;

/// Key under which [`StateMachine::snapshot`] stores the state tag
pub const STATE_KEY: &str = "state";

/// Event name of the history record written by [`StateMachine::restore`]
pub const RESTORE_EVENT: &str = "restore";

/// Result of [`StateMachine::send`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome<S> {
    /// The event moved the machine from one state to another
    Transitioned { from: S, to: S },
    /// The event had no effect in the current state
    Ignored { state: S, diagnostic: String },
}

impl<S: Copy> SendOutcome<S> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    /// State the machine is in after the event
    pub fn state(&self) -> S {
        match self {
            Self::Transitioned { to, .. } => *to,
            Self::Ignored { state, .. } => *state,
        }
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Transitioned { .. } => None,
            Self::Ignored { diagnostic, .. } => Some(diagnostic),
        }
    }
}

type Listeners<S> = Vec<(ListenerId, Box<dyn TransitionListener<S>>)>;

/// An entity whose behavior is selected by its current state tag
pub struct StateMachine<D: StateDefinition> {
    definition: D,
    current: D::State,
    context: D::Context,
    history: TransitionHistory<D::State>,
    listeners: Listeners<D::State>,
    warn_on_ignored: bool,
}

impl<D: StateDefinition> StateMachine<D> {
    /// Create a machine in the definition's initial state
    pub fn new(definition: D, context: D::Context) -> Self {
        Self::with_config(definition, context, &StateMachineConfig::default())
    }

    pub fn with_config(definition: D, context: D::Context, config: &StateMachineConfig) -> Self {
        let current = definition.initial_state();
        Self {
            definition,
            current,
            context,
            history: TransitionHistory::new(config.history_limit),
            listeners: Vec::new(),
            warn_on_ignored: config.warn_on_ignored,
        }
    }

    /// Route an event to the behavior of the current state
    pub fn send(&mut self, event: D::Event) -> SendOutcome<D::State> {
        let machine = self.definition.name();
        let from = self.current;

        let transition = if from.is_terminal() {
            Transition::Reject(format!(
                "{machine} is in terminal state {from}; {} has no effect",
                event.event_type()
            ))
        } else {
            self.definition.transition(from, &event, &mut self.context)
        };

        match transition {
            Transition::To(to) => {
                self.current = to;
                let record = self.history.record(from, to, event.event_type());
                log_transition(machine, &from, &to, event.event_type());
                for (_, listener) in &self.listeners {
                    listener.on_transition(machine, record);
                }
                SendOutcome::Transitioned { from, to }
            }
            Transition::Reject(diagnostic) => {
                if self.warn_on_ignored {
                    log_ignored_event(machine, &from, event.event_type(), &diagnostic);
                }
                SendOutcome::Ignored {
                    state: from,
                    diagnostic,
                }
            }
        }
    }

    pub fn current_state(&self) -> D::State {
        self.current
    }

    /// Check if the machine is in a terminal state
    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    pub fn name(&self) -> &'static str {
        self.definition.name()
    }

    pub fn definition(&self) -> &D {
        &self.definition
    }

    pub fn context(&self) -> &D::Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut D::Context {
        &mut self.context
    }

    pub fn history(&self) -> &TransitionHistory<D::State> {
        &self.history
    }

    /// Register a listener notified after every applied transition
    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: TransitionListener<D::State> + 'static,
    {
        let id = ListenerId::new();
        tracing::debug!(
            machine = self.definition.name(),
            listener = %id,
            description = listener.description(),
            "Transition listener registered"
        );
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn subscribe_fn<F>(&mut self, description: &'static str, callback: F) -> ListenerId
    where
        F: Fn(&'static str, &TransitionRecord<D::State>) + Send + Sync + 'static,
    {
        self.subscribe(FnListener::new(description, callback))
    }

    /// Remove a listener; returns `false` if the id was not registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<D> StateMachine<D>
where
    D: StateDefinition,
    D::Context: MementoConvertible,
{
    /// Capture the state tag and context fields as a flat string map
    pub fn snapshot(&self) -> Memento {
        let mut memento = self.context.to_memento();
        memento.insert(STATE_KEY, self.current.to_string());
        memento
    }

    /// Replace state and context with a previously captured snapshot
    ///
    /// Nothing changes if the snapshot is invalid. Earlier history is kept
    /// and a [`RESTORE_EVENT`] record is appended so the history still
    /// resolves to the current state. Listeners are not notified.
    pub fn restore(&mut self, memento: &Memento) -> MementoResult<()> {
        let tag = memento.require(STATE_KEY)?;
        let state = tag
            .parse::<D::State>()
            .map_err(|reason| MementoError::InvalidValue {
                field: STATE_KEY.to_string(),
                value: tag.to_string(),
                reason,
            })?;
        let context = D::Context::from_memento(memento)?;

        tracing::info!(
            machine = self.definition.name(),
            from = %self.current,
            to = %state,
            "State machine restored from snapshot"
        );

        let from = self.current;
        self.current = state;
        self.context = context;
        self.history.record(from, state, RESTORE_EVENT);
        Ok(())
    }
}

impl<D> fmt::Debug for StateMachine<D>
where
    D: StateDefinition,
    D::Context: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.definition.name())
            .field("current", &self.current)
            .field("context", &self.context)
            .field("history_len", &self.history.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
