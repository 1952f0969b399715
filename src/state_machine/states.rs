use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A state tag drawn from a fixed, enumerable set
pub trait MachineState:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + FromStr<Err = String> + Send + Sync + 'static
{
    /// Every state the machine can be in
    fn all() -> &'static [Self];

    /// Check if this is a terminal state (no further transitions allowed)
    fn is_terminal(&self) -> bool;
}

/// Coffee machine states; the machine cycles through them and never stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoffeeMachineState {
    /// Waiting for someone to start a brew
    #[default]
    Idle,
    /// Heating water
    Heating,
    /// Brewing coffee
    Brewing,
}

impl MachineState for CoffeeMachineState {
    fn all() -> &'static [Self] {
        &[Self::Idle, Self::Heating, Self::Brewing]
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

impl fmt::Display for CoffeeMachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Heating => write!(f, "heating"),
            Self::Brewing => write!(f, "brewing"),
        }
    }
}

impl FromStr for CoffeeMachineState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "heating" => Ok(Self::Heating),
            "brewing" => Ok(Self::Brewing),
            _ => Err(format!("Invalid coffee machine state: {s}")),
        }
    }
}

/// Order lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Initial state when order is placed
    #[default]
    PendingPayment,
    /// Payment received, not yet shipped
    Paid,
    /// Order is on its way
    Shipping,
    /// Order delivered
    Completed,
}

impl OrderState {
    /// Check if payment has been received for the order
    pub fn is_paid(&self) -> bool {
        !matches!(self, Self::PendingPayment)
    }
}

impl MachineState for OrderState {
    fn all() -> &'static [Self] {
        &[
            Self::PendingPayment,
            Self::Paid,
            Self::Shipping,
            Self::Completed,
        ]
    }

    fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PendingPayment => write!(f, "pending_payment"),
            Self::Paid => write!(f, "paid"),
            Self::Shipping => write!(f, "shipping"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for OrderState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_payment" => Ok(Self::PendingPayment),
            "paid" => Ok(Self::Paid),
            "shipping" => Ok(Self::Shipping),
            "completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid order state: {s}")),
        }
    }
}
