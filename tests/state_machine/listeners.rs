use behavior_kit::state_machine::{
    coffee_machine, order, LogTransitionListener, OrderState, TransitionListener,
    TransitionRecord,
};
use parking_lot::Mutex;
use std::sync::Arc;

struct Recorder {
    seen: Arc<Mutex<Vec<(String, OrderState, OrderState)>>>,
}

impl TransitionListener<OrderState> for Recorder {
    fn on_transition(&self, machine: &'static str, record: &TransitionRecord<OrderState>) {
        self.seen
            .lock()
            .push((machine.to_string(), record.from, record.to));
    }

    fn description(&self) -> &'static str {
        "Record order transitions"
    }
}

#[test]
fn test_listeners_see_applied_transitions_only() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut order = order(11);
    order.subscribe(Recorder {
        seen: Arc::clone(&seen),
    });

    order.ship();
    order.pay();
    order.ship();

    let seen = seen.lock();
    assert_eq!(
        *seen,
        vec![
            ("order".to_string(), OrderState::PendingPayment, OrderState::Paid),
            ("order".to_string(), OrderState::Paid, OrderState::Shipping),
        ]
    );
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let count = Arc::new(Mutex::new(0usize));
    let mut machine = coffee_machine();

    let counter = Arc::clone(&count);
    let id = machine.subscribe_fn("count transitions", move |_, _| {
        *counter.lock() += 1;
    });
    machine.subscribe(LogTransitionListener);
    assert_eq!(machine.listener_count(), 2);

    machine.start_brewing();
    assert!(machine.unsubscribe(id));
    assert!(!machine.unsubscribe(id));
    machine.start_brewing();

    assert_eq!(*count.lock(), 1);
    assert_eq!(machine.listener_count(), 1);
}
