//! Testing utilities and benchmarks for dstuffer
//!
//! Shared by every integration test binary under `tests/`.

pub mod fixtures;

use dstuffer_api::{EntropySource, Error, Result};
use std::sync::{Mutex, MutexGuard};

static ENGINE_LOCK: Mutex<()> = Mutex::new(());

/// Install a test logger once per binary; honours `RUST_LOG`
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Serialize access to the process-wide entropy engine
///
/// Returns with the engine freshly initialized on its default provider and
/// the default invocation count at zero. Hold the guard for the whole test.
pub fn engine_guard() -> MutexGuard<'static, ()> {
    init_logging();
    let guard = ENGINE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _ = dstuffer_rand::engine::shutdown();
    dstuffer_rand::engine::init().expect("engine init");
    guard
}

/// Entropy source that always fails
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn get_random_bytes(&mut self, _dest: &mut [u8]) -> Result<()> {
        Err(Error::EntropySourceFailure {
            source_name: "failing",
            message: "entropy pool exhausted".into(),
        })
    }
}
