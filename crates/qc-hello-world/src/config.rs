//! # Module Configuration
//!
//! Genesis configuration and the initializer that applies it.
//!
//! ```json
//! {
//!   "blockTimestamp": 0,
//!   "adminAddresses": ["0x8db97c7cece249c2b98bdc0226cc4c2a57bf52fc"],
//!   "enabledAddresses": [],
//!   "initialGreeting": "Hello World!"
//! }
//! ```

use crate::adapters::AllowList;
use crate::domain::entities::{Role, MAX_GREETING_LEN};
use crate::domain::greeting::GreetingStore;
use crate::domain::value_objects::Address;
use crate::errors::ConfigError;
use crate::ports::inbound::Configurator;
use crate::ports::outbound::StateStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

// =============================================================================
// CONFIG TYPES
// =============================================================================

/// Activation header shared by all modules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    /// Timestamp of the block that activates (or deactivates) the module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_timestamp: Option<u64>,
    /// True if this entry deactivates the module.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disable: bool,
}

/// Initial allowlist membership.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowListConfig {
    /// Addresses granted `Admin`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admin_addresses: Vec<Address>,
    /// Addresses granted `Manager`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub manager_addresses: Vec<Address>,
    /// Addresses granted `Enabled`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_addresses: Vec<Address>,
}

impl AllowListConfig {
    /// Every listed address with its role, admins first.
    pub fn entries(&self) -> impl Iterator<Item = (Address, Role)> + '_ {
        let admins = self.admin_addresses.iter().map(|a| (*a, Role::Admin));
        let managers = self.manager_addresses.iter().map(|a| (*a, Role::Manager));
        let enabled = self.enabled_addresses.iter().map(|a| (*a, Role::Enabled));
        admins.chain(managers).chain(enabled)
    }

    /// Rejects any address listed more than once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateAddress`] for the first repeat found.
    pub fn verify(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<Address, Role> = HashMap::new();
        for (address, role) in self.entries() {
            if let Some(first) = seen.insert(address, role) {
                return Err(ConfigError::DuplicateAddress {
                    address,
                    first,
                    second: role,
                });
            }
        }
        Ok(())
    }
}

/// Genesis configuration of the hello-world module.
///
/// Immutable once applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleConfig {
    /// Activation header.
    #[serde(flatten)]
    pub upgrade: Upgrade,
    /// Initial roles.
    #[serde(flatten)]
    pub allow_list: AllowListConfig,
    /// Greeting stored at activation. `None` and `Some("")` store nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_greeting: Option<String>,
}

impl ModuleConfig {
    /// Config activating at `block_timestamp`.
    #[must_use]
    pub fn new(
        block_timestamp: Option<u64>,
        allow_list: AllowListConfig,
        initial_greeting: Option<String>,
    ) -> Self {
        Self {
            upgrade: Upgrade {
                block_timestamp,
                disable: false,
            },
            allow_list,
            initial_greeting,
        }
    }

    /// Config deactivating the module at `block_timestamp`.
    #[must_use]
    pub fn new_disable(block_timestamp: Option<u64>) -> Self {
        Self {
            upgrade: Upgrade {
                block_timestamp,
                disable: true,
            },
            ..Self::default()
        }
    }

    /// Parses a genesis JSON fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Activation timestamp, if any.
    #[must_use]
    pub const fn timestamp(&self) -> Option<u64> {
        self.upgrade.block_timestamp
    }

    /// True if this entry deactivates the module.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.upgrade.disable
    }

    /// Checks the config against the default 32-byte greeting bound.
    ///
    /// # Errors
    ///
    /// See [`ModuleConfig::verify_with_max_len`].
    pub fn verify(&self) -> Result<(), ConfigError> {
        self.verify_with_max_len(MAX_GREETING_LEN)
    }

    /// Checks the config before anything is written.
    ///
    /// # Errors
    ///
    /// [`ConfigError::GreetingExceedsLimit`] for a greeting over `max_len`
    /// bytes, [`ConfigError::DuplicateAddress`] for a repeated address.
    pub fn verify_with_max_len(&self, max_len: usize) -> Result<(), ConfigError> {
        if let Some(greeting) = &self.initial_greeting {
            if greeting.len() > max_len {
                return Err(ConfigError::GreetingExceedsLimit {
                    length: greeting.len(),
                    max: max_len,
                });
            }
        }
        self.allow_list.verify()
    }
}

// =============================================================================
// INITIALIZER
// =============================================================================

/// Applies a [`ModuleConfig`] to the module's namespace.
#[derive(Clone, Copy, Debug)]
pub struct Initializer {
    greeting: GreetingStore,
    allow_list: AllowList,
}

impl Initializer {
    /// Initializer for the module installed at `address`.
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self {
            greeting: GreetingStore::new(address),
            allow_list: AllowList::new(address),
        }
    }

    /// Initializer whose greeting bound matches a module built with
    /// `max_len`. Bounds above one slot are clamped to 32.
    #[must_use]
    pub fn with_max_len(address: Address, max_len: usize) -> Self {
        Self {
            greeting: GreetingStore::with_max_len(address, max_len),
            allow_list: AllowList::new(address),
        }
    }
}

impl Configurator for Initializer {
    #[instrument(skip(self, state, config), fields(namespace = %self.allow_list.namespace()))]
    fn configure(
        &self,
        state: &mut dyn StateStore,
        config: &ModuleConfig,
    ) -> Result<(), ConfigError> {
        config.verify_with_max_len(self.greeting.max_len())?;

        if config.is_disabled() {
            info!(timestamp = ?config.timestamp(), "module disabled, nothing to seed");
            return Ok(());
        }

        match config.initial_greeting.as_deref() {
            Some(greeting) if !greeting.is_empty() => {
                self.greeting
                    .set(state, greeting)
                    .map_err(|_| ConfigError::GreetingExceedsLimit {
                        length: greeting.len(),
                        max: self.greeting.max_len(),
                    })?;
                debug!(greeting, "initial greeting stored");
            }
            _ => debug!("no initial greeting"),
        }

        self.allow_list.configure(state, &config.allow_list);
        info!(timestamp = ?config.timestamp(), "module configured");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
