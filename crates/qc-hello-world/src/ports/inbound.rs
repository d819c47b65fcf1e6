//! # Driving Ports (API - Inbound)
//!
//! How the execution engine drives the module: one `run` per call and one
//! `configure` per chain at activation.

use crate::config::ModuleConfig;
use crate::domain::entities::{CallContext, CallOutput};
use crate::domain::value_objects::Address;
use crate::errors::{ConfigError, ModuleError};
use crate::ports::outbound::StateStore;

/// A module the engine can call at a fixed address.
pub trait StatefulModule {
    /// Address the module is installed at. Also its storage namespace.
    fn address(&self) -> Address;

    /// Execute one call against `state`.
    ///
    /// Either every check passes and the call's mutation is applied, or an
    /// error is returned and `state` is untouched.
    ///
    /// # Errors
    ///
    /// One [`ModuleError`] per terminal dispatcher state.
    fn run(&self, state: &mut dyn StateStore, call: &CallContext)
        -> Result<CallOutput, ModuleError>;
}

/// Applies a module's genesis configuration.
pub trait Configurator {
    /// Seed `state` from `config`. Called once, before any call is run.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid; nothing is written
    /// in that case.
    fn configure(&self, state: &mut dyn StateStore, config: &ModuleConfig)
        -> Result<(), ConfigError>;
}
