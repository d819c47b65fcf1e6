//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the module depends on but does not own:
//! - the engine's key/value state store
//! - the allowlist that assigns roles
//!
//! The module only reads roles. Role assignment belongs to whoever
//! implements [`RoleResolver`].

use crate::domain::entities::Role;
use crate::domain::value_objects::{Address, StorageKey, StorageValue};

// =============================================================================
// STATE STORE
// =============================================================================

/// Identifier returned by [`StateStore::snapshot`].
pub type SnapshotId = usize;

/// Interface to the engine's persistent state.
///
/// Storage is namespaced by account address. Reads of unwritten slots
/// return [`StorageValue::ZERO`], never an error.
///
/// ## Implementation Notes
///
/// Snapshots nest: reverting to an older snapshot discards every newer one.
/// The engine takes a snapshot around each call, transaction or block and
/// reverts it if the enclosing execution aborts.
pub trait StateStore {
    /// Read a slot.
    ///
    /// # Arguments
    ///
    /// * `address` - Account namespace
    /// * `key` - Storage slot key
    ///
    /// # Returns
    ///
    /// * `StorageValue` - Value at slot (zero if never written)
    fn get_state(&self, address: Address, key: StorageKey) -> StorageValue;

    /// Write a slot. Visible to every later read in the same stream.
    fn set_state(&mut self, address: Address, key: StorageKey, value: StorageValue);

    /// Record the current state so it can be restored later.
    fn snapshot(&mut self) -> SnapshotId;

    /// Restore the state recorded by `id`, discarding later snapshots.
    ///
    /// Unknown ids are ignored.
    fn revert_to_snapshot(&mut self, id: SnapshotId);
}

// =============================================================================
// ROLE RESOLVER (Allowlist capability)
// =============================================================================

/// Read-only view of the allowlist.
///
/// `resolve` is a pure lookup: no side effects, never fails. Identities
/// without an entry resolve to [`Role::None`].
pub trait RoleResolver {
    /// Role of `identity` in `state`.
    fn resolve(&self, state: &dyn StateStore, identity: Address) -> Role;
}

impl<R: RoleResolver + ?Sized> RoleResolver for &R {
    fn resolve(&self, state: &dyn StateStore, identity: Address) -> Role {
        (**self).resolve(state, identity)
    }
}
