use super::definition::{StateDefinition, Transition};
use super::events::CoffeeMachineEvent;
use super::machine::{SendOutcome, StateMachine};
use super::states::CoffeeMachineState;
use crate::memento::{Memento, MementoConvertible, MementoError, MementoResult};

/// Coffee machine: idle -> heating -> brewing -> idle
pub type CoffeeMachine = StateMachine<CoffeeMachineDefinition>;

#[derive(Debug, Clone, Copy, Default)]
pub struct CoffeeMachineDefinition;

/// Data the coffee machine states read and write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoffeeMachineContext {
    /// Completed brew cycles
    pub cups_brewed: u32,
}

impl StateDefinition for CoffeeMachineDefinition {
    type State = CoffeeMachineState;
    type Event = CoffeeMachineEvent;
    type Context = CoffeeMachineContext;

    fn name(&self) -> &'static str {
        "coffee_machine"
    }

    fn initial_state(&self) -> CoffeeMachineState {
        CoffeeMachineState::Idle
    }

    fn transition(
        &self,
        state: CoffeeMachineState,
        event: &CoffeeMachineEvent,
        context: &mut CoffeeMachineContext,
    ) -> Transition<CoffeeMachineState> {
        match (state, event) {
            (CoffeeMachineState::Idle, CoffeeMachineEvent::StartBrewing) => {
                Transition::To(CoffeeMachineState::Heating)
            }
            (CoffeeMachineState::Heating, CoffeeMachineEvent::StartBrewing) => {
                Transition::To(CoffeeMachineState::Brewing)
            }
            (CoffeeMachineState::Brewing, CoffeeMachineEvent::StartBrewing) => {
                context.cups_brewed = context.cups_brewed.saturating_add(1);
                Transition::To(CoffeeMachineState::Idle)
            }
        }
    }
}

impl MementoConvertible for CoffeeMachineContext {
    fn to_memento(&self) -> Memento {
        let mut memento = Memento::new();
        memento.insert("cups_brewed", self.cups_brewed.to_string());
        memento
    }

    fn from_memento(memento: &Memento) -> MementoResult<Self> {
        let raw = memento.require("cups_brewed")?;
        let cups_brewed = raw.parse().map_err(|e| MementoError::InvalidValue {
            field: "cups_brewed".to_string(),
            value: raw.to_string(),
            reason: format!("{e}"),
        })?;
        Ok(Self { cups_brewed })
    }
}

/// A coffee machine sitting idle with nothing brewed yet
pub fn coffee_machine() -> CoffeeMachine {
    StateMachine::new(CoffeeMachineDefinition, CoffeeMachineContext::default())
}

impl StateMachine<CoffeeMachineDefinition> {
    pub fn start_brewing(&mut self) -> SendOutcome<CoffeeMachineState> {
        self.send(CoffeeMachineEvent::StartBrewing)
    }

    pub fn cups_brewed(&self) -> u32 {
        self.context().cups_brewed
    }
}
