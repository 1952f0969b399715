#![allow(clippy::doc_markdown)] // Allow technical terms in docs without backticks
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Behavior Kit
//!
//! Sequential-dispatch and state-transition primitives.
//!
//! ## Overview
//!
//! Three small building blocks share one shape: behavior is selected
//! indirectly and invoked through a single fixed call signature.
//!
//! - **Handler chains** select by position: a request is offered to each
//!   handler in order and the first one that accepts it wins.
//! - **State machines** select by the current state tag: an event is routed
//!   to the behavior of the current state, which may move the entity on.
//! - **Strategy contexts** select by held reference: the installed algorithm
//!   can be swapped at runtime without touching the caller.
//!
//! ## Module Organization
//!
//! - [`chain`] - Handler chains, log routing and login validation
//! - [`state_machine`] - Enum-driven state machines with history and listeners
//! - [`strategy`] - Swappable strategies and the bundled sorting algorithms
//! - [`memento`] - Flat key/value snapshots and injected checkpoint stores
//! - [`config`] - Layered configuration loading
//! - [`logging`] - Structured logging setup
//! - [`error`] - Crate-level error type
//!
//! ## Quick Start
//!
//! ```rust
//! use behavior_kit::chain::{log_routing_chain, LogLevel, LogMessage, Outcome};
//! use behavior_kit::state_machine::{coffee_machine, CoffeeMachineEvent, CoffeeMachineState};
//! use behavior_kit::strategy::{QuickSort, StrategyContext};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let chain = log_routing_chain();
//! let outcome = chain.dispatch(&LogMessage::new(LogLevel::Info, "m"))?;
//! assert!(matches!(outcome, Outcome::Handled { handler: "info", .. }));
//!
//! let mut machine = coffee_machine();
//! machine.send(CoffeeMachineEvent::StartBrewing);
//! assert_eq!(machine.current_state(), CoffeeMachineState::Heating);
//!
//! let mut sorter = StrategyContext::new();
//! sorter.set_strategy(QuickSort);
//! assert_eq!(sorter.execute(vec![5, 3, 8, 4, 2])?, vec![2, 3, 4, 5, 8]);
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod logging;
pub mod memento;
pub mod state_machine;
pub mod strategy;

pub use config::{ConfigManager, KitConfig};
pub use error::{BehaviorKitError, Result};
