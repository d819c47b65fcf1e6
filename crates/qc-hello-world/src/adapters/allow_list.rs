//! # Allowlist Adapter
//!
//! State-backed role registry. Each address's role lives in the owning
//! module's namespace under the address left-padded to 32 bytes.
//!
//! The dispatcher only sees this through [`RoleResolver`]. Role management
//! (`set_role`, `modify_role`, `configure`) is for the engine and for
//! genesis.

use crate::config::AllowListConfig;
use crate::domain::entities::Role;
use crate::domain::value_objects::{Address, StorageKey};
use crate::errors::AllowListError;
use crate::ports::outbound::{RoleResolver, StateStore};
use tracing::{debug, warn};

/// Allowlist scoped to one module's storage namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllowList {
    namespace: Address,
}

impl AllowList {
    /// Allowlist stored under `namespace`.
    #[must_use]
    pub const fn new(namespace: Address) -> Self {
        Self { namespace }
    }

    /// Namespace the roles are stored under.
    #[must_use]
    pub const fn namespace(&self) -> Address {
        self.namespace
    }

    /// Read `address`'s role.
    #[must_use]
    pub fn get_role(&self, state: &dyn StateStore, address: Address) -> Role {
        Role::from_storage(state.get_state(self.namespace, StorageKey::from_address(address)))
    }

    /// Write `address`'s role without any permission check.
    pub fn set_role(&self, state: &mut dyn StateStore, address: Address, role: Role) {
        state.set_state(
            self.namespace,
            StorageKey::from_address(address),
            role.to_storage(),
        );
    }

    /// Change `target`'s role on behalf of `caller`.
    ///
    /// Admins may set any role. Managers may only move targets between
    /// `None` and `Enabled`.
    ///
    /// # Errors
    ///
    /// Returns [`AllowListError::CannotModify`] if `caller` lacks the
    /// privilege; state is untouched in that case.
    pub fn modify_role(
        &self,
        state: &mut dyn StateStore,
        caller: Address,
        target: Address,
        requested: Role,
    ) -> Result<(), AllowListError> {
        let caller_role = self.get_role(state, caller);
        let current = self.get_role(state, target);

        if !caller_role.can_modify(current, requested) {
            warn!(%caller, %caller_role, %target, %current, %requested, "role change rejected");
            return Err(AllowListError::CannotModify {
                caller,
                caller_role,
                target,
                current,
                requested,
            });
        }

        self.set_role(state, target, requested);
        debug!(%caller, %target, from = %current, to = %requested, "role changed");
        Ok(())
    }

    /// Seed roles from genesis. Later sets win if an address repeats;
    /// `ModuleConfig::verify` rejects such configs first.
    pub fn configure(&self, state: &mut dyn StateStore, config: &AllowListConfig) {
        let grants = [
            (&config.enabled_addresses, Role::Enabled),
            (&config.manager_addresses, Role::Manager),
            (&config.admin_addresses, Role::Admin),
        ];
        for (addresses, role) in grants {
            for address in addresses {
                self.set_role(state, *address, role);
            }
        }
        debug!(
            namespace = %self.namespace,
            admins = config.admin_addresses.len(),
            managers = config.manager_addresses.len(),
            enabled = config.enabled_addresses.len(),
            "allowlist configured"
        );
    }
}

impl RoleResolver for AllowList {
    fn resolve(&self, state: &dyn StateStore, identity: Address) -> Role {
        self.get_role(state, identity)
    }
}

// =============================================================================
// TESTS
// =============================================================================
