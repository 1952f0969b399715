// State machine module
//
// Enum-driven state machines: a definition maps (state, event) to a
// transition, and the machine applies it, records it and notifies listeners.

pub mod actions;
pub mod coffee_machine;
pub mod definition;
pub mod events;
pub mod machine;
pub mod order;
pub mod persistence;
pub mod shared;
pub mod states;

// Re-export main types for convenient access
pub use coffee_machine::{coffee_machine, CoffeeMachine, CoffeeMachineContext, CoffeeMachineDefinition};
pub use definition::{StateDefinition, Transition};
pub use events::{CoffeeMachineEvent, MachineEvent, OrderEvent};
pub use machine::{SendOutcome, StateMachine, RESTORE_EVENT, STATE_KEY};
pub use order::{order, Order, OrderContext, OrderDefinition};
pub use shared::SharedStateMachine;
pub use states::{CoffeeMachineState, MachineState, OrderState};

// Common traits and utilities
pub use actions::{FnListener, ListenerId, LogTransitionListener, TransitionListener};
pub use persistence::{TransitionHistory, TransitionRecord};
