use behavior_kit::state_machine::{
    coffee_machine, CoffeeMachineEvent, CoffeeMachineState, MachineState, SendOutcome,
};

#[test]
fn test_starts_idle() {
    let machine = coffee_machine();
    assert_eq!(machine.current_state(), CoffeeMachineState::Idle);
    assert_eq!(machine.name(), "coffee_machine");
    assert_eq!(machine.cups_brewed(), 0);
    assert!(machine.history().is_empty());
}

#[test]
fn test_full_brewing_cycle() {
    let mut machine = coffee_machine();

    assert_eq!(
        machine.start_brewing(),
        SendOutcome::Transitioned {
            from: CoffeeMachineState::Idle,
            to: CoffeeMachineState::Heating
        }
    );
    assert_eq!(
        machine.start_brewing().state(),
        CoffeeMachineState::Brewing
    );
    assert_eq!(machine.start_brewing().state(), CoffeeMachineState::Idle);

    assert_eq!(machine.cups_brewed(), 1);
    assert_eq!(machine.history().len(), 3);
}

#[test]
fn test_cycle_repeats_indefinitely() {
    let mut machine = coffee_machine();
    for _ in 0..5 {
        machine.send(CoffeeMachineEvent::StartBrewing);
        machine.send(CoffeeMachineEvent::StartBrewing);
        machine.send(CoffeeMachineEvent::StartBrewing);
    }
    assert_eq!(machine.current_state(), CoffeeMachineState::Idle);
    assert_eq!(machine.cups_brewed(), 5);
}

#[test]
fn test_no_terminal_states() {
    assert!(CoffeeMachineState::all().iter().all(|s| !s.is_terminal()));

    let mut machine = coffee_machine();
    for _ in 0..10 {
        assert!(machine.start_brewing().is_transitioned());
        assert!(!machine.is_terminal());
    }
}
