use super::*;
use crate::provider::{CountingEntropy, DeterministicEntropy};

struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn get_random_bytes(&mut self, _dest: &mut [u8]) -> Result<()> {
        Err(Error::EntropySourceFailure {
            source_name: "failing",
            message: "exhausted".into(),
        })
    }
}

#[test]
fn test_requests_fail_before_init() {
    let mut engine = Engine::new();
    let err = engine.get_random_bytes(&mut [0u8; 8]).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidState { context: "entropy engine request", state: "uninitialized" }
    );
    assert!(engine.install(Box::new(DeterministicEntropy::from_u64(0))).is_err());
    assert!(engine.shutdown().is_err());
}

#[test]
fn test_default_provider_is_counted() {
    let mut engine = Engine::new();
    engine.init();
    assert_eq!(engine.state, EngineState::DefaultActive);

    engine.get_random_bytes(&mut [0u8; 8]).unwrap();
    engine.get_random_bytes(&mut [0u8; 8]).unwrap();
    assert_eq!(engine.default_invocations, 2);
}

#[test]
fn test_override_is_exclusive() {
    let mut engine = Engine::new();
    engine.init();

    let source = CountingEntropy::new(DeterministicEntropy::from_u64(5));
    let counter = source.counter();
    engine.install(Box::new(source)).unwrap();
    assert_eq!(engine.state, EngineState::OverrideActive);

    let mut got = [0u8; 16];
    engine.get_random_bytes(&mut got).unwrap();
    assert_eq!(counter.get(), 1);
    assert_eq!(engine.default_invocations, 0);

    let mut expected = [0u8; 16];
    DeterministicEntropy::from_u64(5).get_random_bytes(&mut expected).unwrap();
    assert_eq!(got, expected);
}

#[test]
fn test_remove_override_returns_to_default() {
    let mut engine = Engine::new();
    engine.init();
    engine.install(Box::new(DeterministicEntropy::from_u64(1))).unwrap();
    engine.remove_override().unwrap();

    assert_eq!(engine.state, EngineState::DefaultActive);
    assert!(engine.override_source.is_none());
    engine.get_random_bytes(&mut [0u8; 4]).unwrap();
    assert_eq!(engine.default_invocations, 1);
}

#[test]
fn test_override_failure_propagates() {
    let mut engine = Engine::new();
    engine.init();
    engine.install(Box::new(FailingEntropy)).unwrap();

    let err = engine.get_random_bytes(&mut [0u8; 4]).unwrap_err();
    assert!(matches!(err, Error::EntropySourceFailure { source_name: "failing", .. }));
    assert_eq!(engine.default_invocations, 0);
}

#[test]
fn test_shutdown_and_reinit() {
    let mut engine = Engine::new();
    engine.init();
    engine.install(Box::new(DeterministicEntropy::from_u64(1))).unwrap();
    engine.shutdown().unwrap();

    assert_eq!(engine.state, EngineState::Shutdown);
    assert!(engine.override_source.is_none());
    assert_eq!(
        engine.get_random_bytes(&mut [0u8; 4]).unwrap_err(),
        Error::InvalidState { context: "entropy engine request", state: "shut down" }
    );
    assert!(engine.remove_override().is_err());

    engine.init();
    assert_eq!(engine.state, EngineState::DefaultActive);
    engine.get_random_bytes(&mut [0u8; 4]).unwrap();
}

#[test]
fn test_init_is_idempotent_while_running() {
    let mut engine = Engine::new();
    engine.init();
    engine.install(Box::new(DeterministicEntropy::from_u64(1))).unwrap();
    engine.init();
    assert_eq!(engine.state, EngineState::OverrideActive);
}
