//! # Core Domain Entities
//!
//! Roles, per-call context and dispatcher parameters.

use crate::domain::value_objects::{Address, Bytes, StorageValue, U256};
use crate::gas::costs;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ROLE
// =============================================================================

/// Allowlist privilege tier of a caller.
///
/// Stored by the allowlist as a 256-bit word: `None = 0`, `Enabled = 1`,
/// `Admin = 2`, `Manager = 3`. Any other stored word reads back as `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// No privileges. May only read.
    #[default]
    None,
    /// May call state-changing functions.
    Enabled,
    /// May call state-changing functions and modify every role.
    Admin,
    /// May call state-changing functions and toggle `None` / `Enabled`.
    Manager,
}

impl Role {
    /// Numeric form used in storage.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Enabled => 1,
            Self::Admin => 2,
            Self::Manager => 3,
        }
    }

    /// Privilege rank: `None < Enabled < Manager < Admin`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Enabled => 1,
            Self::Manager => 2,
            Self::Admin => 3,
        }
    }

    /// Decodes a stored role word.
    #[must_use]
    pub fn from_storage(value: StorageValue) -> Self {
        let word = value.to_u256();
        if word == U256::from(1) {
            Self::Enabled
        } else if word == U256::from(2) {
            Self::Admin
        } else if word == U256::from(3) {
            Self::Manager
        } else {
            Self::None
        }
    }

    /// Encodes the role as a storage word.
    #[must_use]
    pub fn to_storage(self) -> StorageValue {
        StorageValue::from_u256(U256::from(self.as_u8()))
    }

    /// True for every role that may call state-changing functions.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }

    /// True if a caller holding `self` may move `target` from `current`
    /// to `next`.
    ///
    /// Admins may do anything. Managers may only toggle between `None`
    /// and `Enabled`.
    #[must_use]
    pub const fn can_modify(self, current: Self, next: Self) -> bool {
        match self {
            Self::Admin => true,
            Self::Manager => {
                matches!(current, Self::None | Self::Enabled)
                    && matches!(next, Self::None | Self::Enabled)
            }
            Self::None | Self::Enabled => false,
        }
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::Enabled => "Enabled",
            Self::Admin => "Admin",
            Self::Manager => "Manager",
        };
        f.write_str(name)
    }
}

// =============================================================================
// CALL CONTEXT
// =============================================================================

/// Everything the dispatcher receives for a single call.
///
/// Created by the engine per call and dropped when the call returns.
#[derive(Clone, Debug, Default)]
pub struct CallContext {
    /// Identity of the immediate caller.
    pub caller: Address,
    /// Raw call payload (selector + ABI arguments).
    pub input: Bytes,
    /// Gas budget supplied with the call.
    pub supplied_gas: u64,
    /// Static call: no state mutation allowed.
    pub read_only: bool,
}

impl CallContext {
    /// Creates a mutable-context call.
    #[must_use]
    pub fn new(caller: Address, input: impl Into<Bytes>, supplied_gas: u64) -> Self {
        Self {
            caller,
            input: input.into(),
            supplied_gas,
            read_only: false,
        }
    }

    /// Marks the call as read-only.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Successful call result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallOutput {
    /// ABI-encoded return data (empty for `setGreeting`).
    pub output: Bytes,
    /// Gas left after the fixed cost was charged.
    pub remaining_gas: u64,
}

// =============================================================================
// MODULE PARAMETERS
// =============================================================================

/// Fixed costs and bounds handed to the dispatcher at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleParams {
    /// Cost of `sayHello()`.
    pub say_hello_gas_cost: u64,
    /// Cost of `setGreeting(string)`.
    pub set_greeting_gas_cost: u64,
    /// Maximum greeting length in bytes.
    pub max_greeting_len: usize,
}

impl Default for ModuleParams {
    fn default() -> Self {
        Self {
            say_hello_gas_cost: costs::SAY_HELLO,
            set_greeting_gas_cost: costs::SET_GREETING,
            max_greeting_len: MAX_GREETING_LEN,
        }
    }
}

/// A greeting must fit a single 32-byte storage slot.
pub const MAX_GREETING_LEN: usize = 32;

// =============================================================================
// TESTS
// =============================================================================
