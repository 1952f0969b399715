use super::definition::{StateDefinition, Transition};
use super::events::OrderEvent;
use super::machine::{SendOutcome, StateMachine};
use super::states::OrderState;
use crate::memento::{Memento, MementoConvertible, MementoError, MementoResult};

/// Order lifecycle: pending_payment -> paid -> shipping -> completed
pub type Order = StateMachine<OrderDefinition>;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderDefinition;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderContext {
    pub order_id: u64,
}

impl StateDefinition for OrderDefinition {
    type State = OrderState;
    type Event = OrderEvent;
    type Context = OrderContext;

    fn name(&self) -> &'static str {
        "order"
    }

    fn initial_state(&self) -> OrderState {
        OrderState::PendingPayment
    }

    fn transition(
        &self,
        state: OrderState,
        event: &OrderEvent,
        _context: &mut OrderContext,
    ) -> Transition<OrderState> {
        match (state, event) {
            (OrderState::PendingPayment, OrderEvent::Pay) => Transition::To(OrderState::Paid),
            (OrderState::PendingPayment, OrderEvent::Ship) => {
                Transition::reject("cannot ship unpaid order")
            }
            (OrderState::PendingPayment, OrderEvent::Finish) => {
                Transition::reject("cannot finish an order that is neither paid nor shipped")
            }

            (OrderState::Paid, OrderEvent::Pay) => Transition::reject("order is already paid"),
            (OrderState::Paid, OrderEvent::Ship) => Transition::To(OrderState::Shipping),
            (OrderState::Paid, OrderEvent::Finish) => {
                Transition::reject("cannot finish an order that has not shipped")
            }

            // A second ship event while shipping marks delivery
            (OrderState::Shipping, OrderEvent::Ship) => Transition::To(OrderState::Completed),
            (OrderState::Shipping, OrderEvent::Pay) => {
                Transition::reject("order is already paid")
            }
            (OrderState::Shipping, OrderEvent::Finish) => {
                Transition::reject("cannot finish an order while it is shipping")
            }

            (OrderState::Completed, _) => Transition::reject("order is already completed"),
        }
    }
}

impl MementoConvertible for OrderContext {
    fn to_memento(&self) -> Memento {
        let mut memento = Memento::new();
        memento.insert("order_id", self.order_id.to_string());
        memento
    }

    fn from_memento(memento: &Memento) -> MementoResult<Self> {
        let raw = memento.require("order_id")?;
        let order_id = raw.parse().map_err(|e| MementoError::InvalidValue {
            field: "order_id".to_string(),
            value: raw.to_string(),
            reason: format!("{e}"),
        })?;
        Ok(Self { order_id })
    }
}

/// A freshly placed order awaiting payment
pub fn order(order_id: u64) -> Order {
    StateMachine::new(OrderDefinition, OrderContext { order_id })
}

impl StateMachine<OrderDefinition> {
    pub fn order_id(&self) -> u64 {
        self.context().order_id
    }

    pub fn pay(&mut self) -> SendOutcome<OrderState> {
        self.send(OrderEvent::Pay)
    }

    pub fn ship(&mut self) -> SendOutcome<OrderState> {
        self.send(OrderEvent::Ship)
    }

    pub fn finish(&mut self) -> SendOutcome<OrderState> {
        self.send(OrderEvent::Finish)
    }
}
