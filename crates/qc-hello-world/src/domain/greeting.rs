//! # Greeting Store
//!
//! The greeting occupies one 32-byte slot under a fixed key in the module's
//! namespace, left-padded with zeros. An unwritten slot reads as `""`.

use crate::domain::entities::MAX_GREETING_LEN;
use crate::domain::value_objects::{Address, StorageKey, StorageValue};
use crate::errors::ModuleError;
use crate::ports::outbound::StateStore;

/// Raw bytes of the greeting slot key (left-padded to 32 bytes).
pub const GREETING_KEY_SEED: &[u8] = b"storageKey";

/// Slot key holding the greeting.
#[must_use]
pub fn greeting_key() -> StorageKey {
    StorageKey::left_padded(GREETING_KEY_SEED)
}

/// Accessor for the greeting slot of one module.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GreetingStore {
    namespace: Address,
    max_len: usize,
}

impl GreetingStore {
    /// Store in `namespace` with the default 32-byte bound.
    #[must_use]
    pub const fn new(namespace: Address) -> Self {
        Self {
            namespace,
            max_len: MAX_GREETING_LEN,
        }
    }

    /// Store with a tighter bound. Bounds above one slot are clamped to 32.
    #[must_use]
    pub fn with_max_len(namespace: Address, max_len: usize) -> Self {
        Self {
            namespace,
            max_len: max_len.min(MAX_GREETING_LEN),
        }
    }

    /// Maximum greeting length in bytes.
    #[must_use]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }

    /// Current greeting, or `""` if none was ever stored.
    #[must_use]
    pub fn get(&self, state: &dyn StateStore) -> String {
        let slot = state.get_state(self.namespace, greeting_key());
        String::from_utf8_lossy(slot.trim_leading_zeros()).into_owned()
    }

    /// Checks that `greeting` fits without touching state.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::InputExceedsLimit`] if it is too long.
    pub fn validate(&self, greeting: &str) -> Result<(), ModuleError> {
        if greeting.len() > self.max_len {
            return Err(ModuleError::InputExceedsLimit {
                length: greeting.len(),
                max: self.max_len,
            });
        }
        Ok(())
    }

    /// Overwrites the greeting.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::InputExceedsLimit`] if `greeting` is longer
    /// than the bound; the stored greeting is unchanged.
    pub fn set(&self, state: &mut dyn StateStore, greeting: &str) -> Result<(), ModuleError> {
        self.validate(greeting)?;
        state.set_state(
            self.namespace,
            greeting_key(),
            StorageValue::left_padded(greeting.as_bytes()),
        );
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStateStore;
    use proptest::prelude::*;

    const NAMESPACE: Address = Address::from_low_u8(3);

    #[test]
    fn test_absent_greeting_is_empty() {
        let state = InMemoryStateStore::new();
        assert_eq!(GreetingStore::new(NAMESPACE).get(&state), "");
    }

    #[test]
    fn test_set_then_get() {
        let store = GreetingStore::new(NAMESPACE);
        let mut state = InMemoryStateStore::new();
        store.set(&mut state, "test").unwrap();
        assert_eq!(store.get(&state), "test");
    }

    #[test]
    fn test_exactly_32_bytes_fits() {
        let store = GreetingStore::new(NAMESPACE);
        let mut state = InMemoryStateStore::new();
        let greeting = "x".repeat(32);
        store.set(&mut state, &greeting).unwrap();
        assert_eq!(store.get(&state), greeting);
    }

    #[test]
    fn test_too_long_leaves_slot_untouched() {
        let store = GreetingStore::new(NAMESPACE);
        let mut state = InMemoryStateStore::new();
        store.set(&mut state, "keep").unwrap();

        let err = store.set(&mut state, &"y".repeat(33)).unwrap_err();
        assert_eq!(err, ModuleError::InputExceedsLimit { length: 33, max: 32 });
        assert_eq!(store.get(&state), "keep");
    }

    #[test]
    fn test_multibyte_length_counts_bytes() {
        let store = GreetingStore::new(NAMESPACE);
        // 11 chars, 33 bytes
        assert!(store.validate("ありがとうございました").is_err());
    }

    #[test]
    fn test_custom_bound() {
        let store = GreetingStore::with_max_len(NAMESPACE, 4);
        assert!(store.validate("four").is_ok());
        assert!(store.validate("fives").is_err());
        assert_eq!(GreetingStore::with_max_len(NAMESPACE, 100).max_len(), 32);
    }

    #[test]
    fn test_empty_write_clears_greeting() {
        let store = GreetingStore::new(NAMESPACE);
        let mut state = InMemoryStateStore::new();
        store.set(&mut state, "hi").unwrap();
        store.set(&mut state, "").unwrap();
        assert_eq!(store.get(&state), "");
    }

    proptest! {
        #[test]
        fn prop_stored_greeting_never_exceeds_bound(s in "[a-zA-Z0-9 ]{0,64}") {
            let store = GreetingStore::new(NAMESPACE);
            let mut state = InMemoryStateStore::new();
            let result = store.set(&mut state, &s);
            prop_assert_eq!(result.is_ok(), s.len() <= 32);
            prop_assert!(store.get(&state).len() <= 32);
            if s.len() <= 32 {
                prop_assert_eq!(store.get(&state), s);
            }
        }
    }
}
