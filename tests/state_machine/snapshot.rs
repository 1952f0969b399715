use behavior_kit::memento::{Memento, MementoError};
use behavior_kit::state_machine::{
    coffee_machine, order, CoffeeMachineState, OrderState, RESTORE_EVENT, STATE_KEY,
};

#[test]
fn test_snapshot_and_restore_order() {
    let mut paid = order(77);
    paid.pay();
    let snapshot = paid.snapshot();

    assert_eq!(snapshot.get(STATE_KEY), Some("paid"));
    assert_eq!(snapshot.get("order_id"), Some("77"));

    let mut copy = order(0);
    copy.restore(&snapshot).unwrap();
    assert_eq!(copy.current_state(), OrderState::Paid);
    assert_eq!(copy.order_id(), 77);

    // Restored machine keeps following the lifecycle
    assert_eq!(copy.ship().state(), OrderState::Shipping);
}

#[test]
fn test_snapshot_survives_json() {
    let mut machine = coffee_machine();
    for _ in 0..4 {
        machine.start_brewing();
    }
    let json = machine.snapshot().to_json().unwrap();

    let mut restored = coffee_machine();
    restored.restore(&Memento::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.current_state(), CoffeeMachineState::Heating);
    assert_eq!(restored.cups_brewed(), 1);
}

#[test]
fn test_invalid_snapshot_leaves_machine_untouched() {
    let mut machine = order(5);
    machine.pay();

    let bad_state: Memento = [(STATE_KEY, "teleported"), ("order_id", "5")]
        .into_iter()
        .collect();
    let err = machine.restore(&bad_state).unwrap_err();
    assert!(matches!(err, MementoError::InvalidValue { ref field, .. } if field == STATE_KEY));

    let missing_context: Memento = [(STATE_KEY, "shipping")].into_iter().collect();
    let err = machine.restore(&missing_context).unwrap_err();
    assert!(matches!(err, MementoError::MissingField { ref field } if field == "order_id"));

    assert_eq!(machine.current_state(), OrderState::Paid);
    assert_eq!(machine.order_id(), 5);
}

#[test]
fn test_brew_count_saturates_after_restore() {
    let mut machine = coffee_machine();
    let full: Memento = [(STATE_KEY, "brewing"), ("cups_brewed", "4294967295")]
        .into_iter()
        .collect();
    machine.restore(&full).unwrap();
    assert_eq!(machine.cups_brewed(), u32::MAX);

    assert_eq!(machine.start_brewing().state(), CoffeeMachineState::Idle);
    assert_eq!(machine.cups_brewed(), u32::MAX);
}

#[test]
fn test_restore_is_recorded_in_history() {
    let mut machine = order(8);
    machine.pay();
    machine.ship();
    let before = machine.history().len();

    let pending: Memento = [(STATE_KEY, "pending_payment"), ("order_id", "8")]
        .into_iter()
        .collect();
    machine.restore(&pending).unwrap();

    let latest = machine.history().latest().unwrap();
    assert_eq!(latest.event, RESTORE_EVENT);
    assert_eq!(latest.from, OrderState::Shipping);
    assert_eq!(latest.to, OrderState::PendingPayment);
    assert_eq!(machine.history().len(), before + 1);
    assert_eq!(
        machine.history().resolve_current_state(),
        Some(machine.current_state())
    );

    // A rejected snapshot records nothing
    let bad: Memento = [(STATE_KEY, "lost")].into_iter().collect();
    assert!(machine.restore(&bad).is_err());
    assert_eq!(machine.history().len(), before + 1);
}
