//! # QC Hello World - Allowlist-Gated Stateful Precompile
//!
//! **Install address:** `0x0300000000000000000000000000000000000000`
//!
//! ## Purpose
//!
//! A stateful precompile with two functions: `sayHello()` returns the stored
//! greeting and `setGreeting(string)` replaces it. Writes are gated by a
//! three-tier allowlist and every call pays a fixed gas cost up front.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Stored greeting is at most 32 bytes | `domain/greeting.rs` - `GreetingStore::set()` |
//! | Failed calls leave state untouched | `module.rs` - all checks precede the write |
//! | Gas is checked before anything else | `module.rs` - `HelloWorldModule::dispatch()` |
//! | Read-only calls never write | `module.rs` - `FunctionKind::is_mutating()` gate |
//! | Bad genesis config writes nothing | `config.rs` - `ModuleConfig::verify()` |
//!
//! ## Functions
//!
//! | Function | Gas | Role | Read-only |
//! |----------|-----|------|-----------|
//! | `sayHello()` | 5 000 | any | allowed |
//! | `setGreeting(string)` | 25 000 | `Enabled`, `Manager`, `Admin` | rejected |
//!
//! ## Outbound Dependencies
//!
//! | Port | Purpose |
//! |------|---------|
//! | `StateStore` | Read/write slots, snapshot/revert |
//! | `RoleResolver` | Look up a caller's allowlist role |
//!
//! ## Usage Example
//!
//! ```
//! use qc_hello_world::prelude::*;
//!
//! let module: HelloWorldModule = HelloWorldModule::default();
//! let mut state = InMemoryStateStore::new();
//!
//! let admin = Address::from_low_u8(1);
//! let config = ModuleConfig::new(
//!     Some(0),
//!     AllowListConfig { admin_addresses: vec![admin], ..Default::default() },
//!     Some("Hello World!".to_string()),
//! );
//! module.initializer().configure(&mut state, &config).unwrap();
//!
//! let call = CallContext::new(admin, pack_set_greeting("gm"), costs::SET_GREETING);
//! module.run(&mut state, &call).unwrap();
//!
//! let call = CallContext::new(Address::ZERO, pack_say_hello(), costs::SAY_HELLO).read_only();
//! let out = module.run(&mut state, &call).unwrap();
//! assert_eq!(unpack_say_hello_output(out.output.as_slice()).unwrap(), "gm");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod abi;
pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod gas;
pub mod module;
pub mod ports;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::entities::{
        CallContext, CallOutput, ModuleParams, Role, MAX_GREETING_LEN,
    };
    pub use crate::domain::greeting::GreetingStore;
    pub use crate::domain::value_objects::{Address, Bytes, StorageKey, StorageValue, U256};

    // ABI
    pub use crate::abi::{
        decode_call, pack_say_hello, pack_say_hello_output, pack_set_greeting,
        unpack_say_hello_output, unpack_set_greeting_input, Call, FunctionKind,
    };

    // Gas
    pub use crate::gas::{costs, GasMeter};

    // Config
    pub use crate::config::{AllowListConfig, Initializer, ModuleConfig, Upgrade};

    // Ports
    pub use crate::ports::inbound::{Configurator, StatefulModule};
    pub use crate::ports::outbound::{RoleResolver, SnapshotId, StateStore};

    // Adapters
    pub use crate::adapters::{AllowList, InMemoryStateStore};

    // Errors
    pub use crate::errors::{AbiError, AllowListError, ConfigError, ErrorKind, ModuleError};

    // Module
    pub use crate::module::{HelloWorldModule, CONTRACT_ADDRESS};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
