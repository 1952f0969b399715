use behavior_kit::chain::{
    ChainError, Handler, HandlerChain, HandlerError, HandlerResult, Outcome,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Handler that counts how often each method is called
struct Counting {
    name: &'static str,
    accepts: bool,
    probes: Arc<AtomicUsize>,
    handles: Arc<AtomicUsize>,
}

impl Counting {
    fn new(name: &'static str, accepts: bool) -> Self {
        Self {
            name,
            accepts,
            probes: Arc::new(AtomicUsize::new(0)),
            handles: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn counters(&self) -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        (Arc::clone(&self.probes), Arc::clone(&self.handles))
    }
}

impl Handler<str> for Counting {
    type Output = &'static str;

    fn name(&self) -> &'static str {
        self.name
    }

    fn can_handle(&self, _request: &str) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.accepts
    }

    fn handle(&self, _request: &str) -> HandlerResult<&'static str> {
        self.handles.fetch_add(1, Ordering::SeqCst);
        Ok(self.name)
    }
}

struct Broken;

impl Handler<str> for Broken {
    type Output = &'static str;

    fn name(&self) -> &'static str {
        "broken"
    }

    fn can_handle(&self, request: &str) -> bool {
        request == "boom"
    }

    fn handle(&self, _request: &str) -> HandlerResult<&'static str> {
        Err(anyhow::anyhow!("downstream sink unavailable").into())
    }
}

#[test]
fn test_stops_at_first_accepting_handler() {
    let first = Counting::new("first", false);
    let second = Counting::new("second", true);
    let third = Counting::new("third", true);
    let (p1, h1) = first.counters();
    let (p2, h2) = second.counters();
    let (p3, h3) = third.counters();

    let chain = HandlerChain::builder("counting")
        .with_handler(first)
        .with_handler(second)
        .with_handler(third)
        .build();

    let outcome = chain.dispatch("request").unwrap();
    assert_eq!(
        outcome,
        Outcome::Handled {
            handler: "second",
            output: "second"
        }
    );

    assert_eq!(p1.load(Ordering::SeqCst), 1);
    assert_eq!(h1.load(Ordering::SeqCst), 0);
    assert_eq!(p2.load(Ordering::SeqCst), 1);
    assert_eq!(h2.load(Ordering::SeqCst), 1);
    // Never consulted
    assert_eq!(p3.load(Ordering::SeqCst), 0);
    assert_eq!(h3.load(Ordering::SeqCst), 0);
}

#[test]
fn test_unhandled_when_nobody_accepts() {
    let chain = HandlerChain::builder("refusing")
        .with_handler(Counting::new("a", false))
        .with_handler(Counting::new("b", false))
        .build();

    let report = chain.dispatch_with_report("request").unwrap();
    assert_eq!(report.outcome, Outcome::Unhandled);
    assert_eq!(report.probed, 2);
}

#[test]
fn test_empty_chain_is_unhandled() {
    let chain: HandlerChain<str, &'static str> = HandlerChain::empty("empty");
    assert_eq!(chain.len(), 0);
    assert_eq!(chain.dispatch("anything").unwrap(), Outcome::Unhandled);
}

#[test]
fn test_handler_failure_propagates() {
    let fallback = Counting::new("fallback", true);
    let (probes, handles) = fallback.counters();

    let chain = HandlerChain::builder("failing")
        .with_handler(Broken)
        .with_handler(fallback)
        .build();

    let err = chain.dispatch("boom").unwrap_err();
    match &err {
        ChainError::HandlerFailed { handler, source } => {
            assert_eq!(*handler, "broken");
            assert!(matches!(source, HandlerError::Internal(_)));
        }
    }
    assert!(err.to_string().contains("downstream sink unavailable"));

    // No routing around the failed handler
    assert_eq!(probes.load(Ordering::SeqCst), 0);
    assert_eq!(handles.load(Ordering::SeqCst), 0);

    // Requests the broken handler declines still reach the fallback
    assert_eq!(chain.dispatch("fine").unwrap().handler(), Some("fallback"));
}

#[test]
fn test_chain_is_reusable() {
    let chain = HandlerChain::builder("reusable")
        .with_boxed_handler(Box::new(Counting::new("only", true)))
        .build();

    for _ in 0..3 {
        assert!(chain.dispatch("again").unwrap().is_handled());
    }
    assert_eq!(chain.handler_names(), vec!["only"]);
    assert_eq!(chain.label(), "reusable");
}
