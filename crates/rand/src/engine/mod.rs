//! Process-wide entropy engine
//!
//! Holds the default provider and at most one installed override. The
//! lifecycle is
//!
//! ```text
//! Uninitialized --init--> DefaultActive --install--> OverrideActive
//!                               ^                          |
//!                               +-----remove_override------+
//! (any initialized state) --shutdown--> Shutdown --init--> DefaultActive
//! ```
//!
//! Requests made while uninitialized or after shutdown fail with
//! `InvalidState`. The active source is called with the engine lock held,
//! so a source must never call back into the engine. Swapping providers
//! while other threads are generating keys is sound but belongs in a
//! quiescent period.

use dstuffer_api::{EntropySource, Error, Result};
use log::{debug, info, warn};
use std::fmt;
use std::sync::{Mutex, MutexGuard};

use crate::provider::OsEntropy;

#[cfg(test)]
mod tests;

/// Lifecycle state of the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// `init` has not been called
    Uninitialized,
    /// Requests go to the default provider
    DefaultActive,
    /// Requests go to the installed override
    OverrideActive,
    /// `shutdown` has been called
    Shutdown,
}

impl EngineState {
    /// Lowercase name for logs and errors
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::DefaultActive => "default active",
            Self::OverrideActive => "override active",
            Self::Shutdown => "shut down",
        }
    }

    fn is_running(&self) -> bool {
        matches!(self, Self::DefaultActive | Self::OverrideActive)
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Engine {
    state: EngineState,
    default: OsEntropy,
    override_source: Option<Box<dyn EntropySource>>,
    default_invocations: usize,
}

impl Engine {
    const fn new() -> Self {
        Self {
            state: EngineState::Uninitialized,
            default: OsEntropy,
            override_source: None,
            default_invocations: 0,
        }
    }

    fn not_running(&self, context: &'static str) -> Error {
        Error::InvalidState {
            context,
            state: self.state.as_str(),
        }
    }

    fn init(&mut self) {
        if self.state.is_running() {
            debug!("entropy engine already initialized ({})", self.state);
            return;
        }
        self.state = EngineState::DefaultActive;
        self.default_invocations = 0;
        info!("entropy engine initialized with default provider '{}'", self.default.name());
    }

    fn install(&mut self, source: Box<dyn EntropySource>) -> Result<()> {
        if !self.state.is_running() {
            return Err(self.not_running("entropy engine install"));
        }
        info!("entropy engine override installed: '{}'", source.name());
        self.override_source = Some(source);
        self.state = EngineState::OverrideActive;
        Ok(())
    }

    fn remove_override(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Err(self.not_running("entropy engine remove_override"));
        }
        if let Some(source) = self.override_source.take() {
            info!("entropy engine override removed: '{}'", source.name());
        }
        self.state = EngineState::DefaultActive;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Err(self.not_running("entropy engine shutdown"));
        }
        self.override_source = None;
        self.state = EngineState::Shutdown;
        info!("entropy engine shut down");
        Ok(())
    }

    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        let result = match self.state {
            EngineState::DefaultActive => {
                self.default_invocations += 1;
                self.default.get_random_bytes(dest)
            }
            EngineState::OverrideActive => match &mut self.override_source {
                Some(source) => source.get_random_bytes(dest),
                None => Err(Error::InvalidState {
                    context: "entropy engine request",
                    state: "override missing",
                }),
            },
            EngineState::Uninitialized | EngineState::Shutdown => {
                return Err(self.not_running("entropy engine request"));
            }
        };

        if let Err(err) = &result {
            warn!("entropy engine request for {} bytes failed: {}", dest.len(), err);
        }
        result
    }
}

static ENGINE: Mutex<Engine> = Mutex::new(Engine::new());

fn lock() -> Result<MutexGuard<'static, Engine>> {
    ENGINE.lock().map_err(|_| Error::InvalidState {
        context: "entropy engine",
        state: "poisoned",
    })
}

/// Bring the engine up with the default provider
///
/// Calling this while the engine is already running has no effect. After
/// [`shutdown`] it starts the engine again.
pub fn init() -> Result<()> {
    lock()?.init();
    Ok(())
}

/// Route all subsequent requests to `source`, replacing any earlier override
pub fn install(source: Box<dyn EntropySource>) -> Result<()> {
    lock()?.install(source)
}

/// Drop the installed override and return to the default provider
pub fn remove_override() -> Result<()> {
    lock()?.remove_override()
}

/// Release the override; every request fails until [`init`] is called again
pub fn shutdown() -> Result<()> {
    lock()?.shutdown()
}

/// Current lifecycle state
pub fn state() -> Result<EngineState> {
    Ok(lock()?.state)
}

/// Number of requests the default provider has served since [`init`]
pub fn default_invocations() -> Result<usize> {
    Ok(lock()?.default_invocations)
}

/// Fill `dest` from whichever provider is active
pub fn get_random_bytes(dest: &mut [u8]) -> Result<()> {
    lock()?.get_random_bytes(dest)
}

/// An [`EntropySource`] that forwards every request to the engine
#[derive(Debug, Default, Clone, Copy)]
pub struct EngineEntropy;

impl EntropySource for EngineEntropy {
    fn name(&self) -> &'static str {
        "engine"
    }

    fn get_random_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        get_random_bytes(dest)
    }
}
