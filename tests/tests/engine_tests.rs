//! Entropy engine behaviour as seen by DH key generation

use dstuffer_api::{EntropySource, Error};
use dstuffer_kem::{pkcs3_to_dh_params, DhParameters};
use dstuffer_common::Stuffer;
use dstuffer_rand::engine::{self, EngineState};
use dstuffer_rand::{CountingEntropy, DeterministicEntropy, EngineEntropy};
use dstuffer_tests::fixtures::DHPARAMS_PEM;
use dstuffer_tests::{engine_guard, FailingEntropy};
use dstuffer_utils::dhparams_from_pem;

fn canonical_params() -> DhParameters {
    let mut input = Stuffer::with_data(DHPARAMS_PEM.as_bytes());
    let mut der = Stuffer::growable_alloc(0);
    dhparams_from_pem(&mut input, &mut der).unwrap();
    pkcs3_to_dh_params(&mut der).unwrap()
}

#[test]
fn default_provider_generates_full_width_keys() {
    let _guard = engine_guard();
    let params = canonical_params();

    let pair = params.context().unwrap().generate_keypair_with_engine().unwrap();
    assert_eq!(pair.public_key().len(), 256);
    assert_eq!(engine::default_invocations().unwrap(), 1);
}

#[test]
fn override_is_exclusive() {
    let _guard = engine_guard();
    let params = canonical_params();

    let source = CountingEntropy::new(DeterministicEntropy::from_u64(7));
    let counter = source.counter();
    engine::install(Box::new(source)).unwrap();
    assert_eq!(engine::state().unwrap(), EngineState::OverrideActive);
    assert_eq!(counter.get(), 0);

    params.context().unwrap().generate_keypair_with_engine().unwrap();
    assert_eq!(counter.get(), 1);
    assert_eq!(engine::default_invocations().unwrap(), 0);
}

#[test]
fn deterministic_override_is_reproducible() {
    let _guard = engine_guard();
    let params = canonical_params();
    let ctx = params.context().unwrap();

    engine::install(Box::new(DeterministicEntropy::from_u64(99))).unwrap();
    let first = ctx.generate_keypair_with_engine().unwrap();

    engine::install(Box::new(DeterministicEntropy::from_u64(99))).unwrap();
    let second = ctx.generate_keypair_with_engine().unwrap();

    assert_eq!(first.public_key(), second.public_key());

    // the same seed passed directly gives the same key as through the engine
    let direct = ctx.generate_keypair(&mut DeterministicEntropy::from_u64(99)).unwrap();
    assert_eq!(direct.public_key(), first.public_key());
}

#[test]
fn remove_override_restores_default() {
    let _guard = engine_guard();
    engine::install(Box::new(FailingEntropy)).unwrap();
    engine::remove_override().unwrap();

    assert_eq!(engine::state().unwrap(), EngineState::DefaultActive);
    EngineEntropy.get_random_bytes(&mut [0u8; 32]).unwrap();
    assert_eq!(engine::default_invocations().unwrap(), 1);
}

#[test]
fn entropy_failure_aborts_keygen() {
    let _guard = engine_guard();
    let params = canonical_params();

    engine::install(Box::new(FailingEntropy)).unwrap();
    let err = params.context().unwrap().generate_keypair_with_engine().unwrap_err();
    assert!(matches!(err, Error::EntropySourceFailure { source_name: "failing", .. }));
    assert_eq!(engine::default_invocations().unwrap(), 0);
}

#[test]
fn calls_after_shutdown_fail() {
    let _guard = engine_guard();
    let params = canonical_params();

    engine::shutdown().unwrap();
    assert_eq!(engine::state().unwrap(), EngineState::Shutdown);

    let err = params.context().unwrap().generate_keypair_with_engine().unwrap_err();
    assert_eq!(
        err,
        Error::InvalidState { context: "entropy engine request", state: "shut down" }
    );
    assert!(engine::install(Box::new(DeterministicEntropy::from_u64(1))).is_err());

    engine::init().unwrap();
    params.context().unwrap().generate_keypair_with_engine().unwrap();
}
