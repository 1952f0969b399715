use behavior_kit::config::StateMachineConfig;
use behavior_kit::state_machine::{
    coffee_machine, order, CoffeeMachineContext, CoffeeMachineDefinition, CoffeeMachineState,
    OrderState, StateMachine,
};

#[test]
fn test_records_are_ordered_and_flag_most_recent() {
    let mut order = order(3);
    order.pay();
    order.ship();

    let records: Vec<_> = order.history().records().collect();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].from, OrderState::PendingPayment);
    assert_eq!(records[0].to, OrderState::Paid);
    assert_eq!(records[0].event, "pay");
    assert!(!records[0].most_recent);

    assert_eq!(records[1].event, "ship");
    assert!(records[1].most_recent);
    assert!(records[0].sort_key < records[1].sort_key);

    assert_eq!(
        order.history().resolve_current_state(),
        Some(order.current_state())
    );
}

#[test]
fn test_history_respects_configured_limit() {
    let config = StateMachineConfig {
        history_limit: 2,
        warn_on_ignored: false,
    };
    let mut machine: StateMachine<CoffeeMachineDefinition> = StateMachine::with_config(
        CoffeeMachineDefinition,
        CoffeeMachineContext::default(),
        &config,
    );

    for _ in 0..6 {
        machine.start_brewing();
    }

    let history = machine.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history.limit(), 2);
    assert_eq!(history.total_recorded(), 6);
    assert_eq!(history.latest().map(|r| r.sort_key), Some(6));
    assert_eq!(
        history.resolve_current_state(),
        Some(CoffeeMachineState::Idle)
    );
}

#[test]
fn test_ignored_events_are_not_recorded() {
    let mut order = order(4);
    order.ship();
    order.finish();
    assert!(order.history().is_empty());
    assert_eq!(order.history().resolve_current_state(), None);

    let machine = coffee_machine();
    assert!(machine.history().latest().is_none());
}
