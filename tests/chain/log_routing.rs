use behavior_kit::chain::{log_routing_chain, LevelHandler, LogLevel, LogMessage, Outcome};

#[test]
fn test_info_message_handled_by_info_handler() {
    let chain = log_routing_chain();
    let report = chain
        .dispatch_with_report(&LogMessage::new(LogLevel::Info, "m"))
        .unwrap();

    assert_eq!(report.outcome.handler(), Some("info"));
    let output = report.outcome.output().unwrap();
    assert!(output.starts_with("printed via Info"));
    assert_eq!(output, "printed via Info: INFO m");
    // Error handler never consulted
    assert_eq!(report.probed, 2);
}

#[test]
fn test_each_level_reaches_its_handler() {
    let chain = log_routing_chain();
    let cases = [
        (LogLevel::Debug, "debug"),
        (LogLevel::Info, "info"),
        (LogLevel::Error, "error"),
    ];

    for (level, expected) in cases {
        let outcome = chain.dispatch(&LogMessage::new(level, "message")).unwrap();
        assert_eq!(outcome.handler(), Some(expected));
    }
}

#[test]
fn test_chain_without_error_handler_leaves_errors_unhandled() {
    let chain = behavior_kit::chain::HandlerChain::builder("partial")
        .with_handler(LevelHandler::debug())
        .with_handler(LevelHandler::info())
        .build();

    let outcome = chain
        .dispatch(&LogMessage::new(LogLevel::Error, "lost"))
        .unwrap();
    assert_eq!(outcome, Outcome::Unhandled);
}

#[test]
fn test_routing_chain_order() {
    assert_eq!(
        log_routing_chain().handler_names(),
        vec!["debug", "info", "error"]
    );
}
