use serde::{Deserialize, Serialize};
use std::fmt;

/// An input that may move a machine to a new state
pub trait MachineEvent: Clone + fmt::Debug + Send + Sync + 'static {
    /// Get a string representation of the event type for logging
    fn event_type(&self) -> &'static str;
}

/// Events accepted by the coffee machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeMachineEvent {
    /// Advance the brewing cycle by one step
    StartBrewing,
}

impl MachineEvent for CoffeeMachineEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::StartBrewing => "start_brewing",
        }
    }
}

/// Events that can trigger order state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderEvent {
    /// Customer pays for the order
    Pay,
    /// Warehouse ships the order, or the carrier reports delivery
    Ship,
    /// Close the order
    Finish,
}

impl MachineEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            Self::Pay => "pay",
            Self::Ship => "ship",
            Self::Finish => "finish",
        }
    }
}

impl fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}

impl fmt::Display for CoffeeMachineEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}
