//! Invocation counting wrapper

use dstuffer_api::{EntropySource, Result};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared view of a [`CountingEntropy`] call count
///
/// Stays valid after the wrapped source has been moved into the engine.
#[derive(Clone, Debug, Default)]
pub struct EntropyCounter(Arc<AtomicUsize>);

impl EntropyCounter {
    /// Number of `get_random_bytes` calls so far, failed ones included
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Reset the count to zero
    pub fn reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }
}

/// Wraps another source and counts how often it is asked for bytes
pub struct CountingEntropy<S> {
    inner: S,
    count: EntropyCounter,
}

impl<S: EntropySource> CountingEntropy<S> {
    /// Wrap `inner` with a fresh counter
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            count: EntropyCounter::default(),
        }
    }

    /// A handle onto this wrapper's counter
    pub fn counter(&self) -> EntropyCounter {
        self.count.clone()
    }
}

impl<S: EntropySource> EntropySource for CountingEntropy<S> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.count.0.fetch_add(1, Ordering::SeqCst);
        self.inner.get_random_bytes(dest)
    }
}
