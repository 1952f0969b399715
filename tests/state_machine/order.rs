use behavior_kit::state_machine::{order, OrderEvent, OrderState, SendOutcome};

#[test]
fn test_happy_path_to_completion() {
    let mut order = order(42);
    assert_eq!(order.current_state(), OrderState::PendingPayment);
    assert_eq!(order.order_id(), 42);

    assert_eq!(
        order.pay(),
        SendOutcome::Transitioned {
            from: OrderState::PendingPayment,
            to: OrderState::Paid
        }
    );
    assert_eq!(order.ship().state(), OrderState::Shipping);
    assert_eq!(order.ship().state(), OrderState::Completed);
    assert!(order.is_terminal());
}

#[test]
fn test_ship_before_pay_is_ignored() {
    let mut order = order(1);
    let outcome = order.ship();

    assert!(!outcome.is_transitioned());
    assert_eq!(outcome.state(), OrderState::PendingPayment);
    assert_eq!(outcome.diagnostic(), Some("cannot ship unpaid order"));
    assert!(order.history().is_empty());

    // Still payable afterwards
    assert_eq!(order.pay().state(), OrderState::Paid);
}

#[test]
fn test_rejections_per_state() {
    let mut order = order(7);
    assert_eq!(
        order.finish().diagnostic(),
        Some("cannot finish an order that is neither paid nor shipped")
    );

    order.pay();
    assert_eq!(order.pay().diagnostic(), Some("order is already paid"));
    assert_eq!(
        order.finish().diagnostic(),
        Some("cannot finish an order that has not shipped")
    );

    order.ship();
    assert_eq!(order.current_state(), OrderState::Shipping);
    assert_eq!(order.pay().diagnostic(), Some("order is already paid"));
    assert_eq!(
        order.finish().diagnostic(),
        Some("cannot finish an order while it is shipping")
    );
    assert_eq!(order.current_state(), OrderState::Shipping);
}

#[test]
fn test_completed_order_ignores_every_event() {
    let mut order = order(9);
    order.pay();
    order.ship();
    order.ship();
    let recorded = order.history().len();

    for event in [OrderEvent::Pay, OrderEvent::Ship, OrderEvent::Finish] {
        let outcome = order.send(event);
        assert_eq!(outcome.state(), OrderState::Completed);
        let diagnostic = outcome.diagnostic().unwrap();
        assert!(diagnostic.contains("terminal state completed"));
    }

    assert_eq!(order.history().len(), recorded);
}
