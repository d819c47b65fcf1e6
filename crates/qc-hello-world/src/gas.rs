//! # Gas Metering
//!
//! Fixed per-function costs and the meter that charges them.
//!
//! Every function charges its whole cost up front, before any other
//! validation. There are no partial charges and no refunds.

use crate::errors::ModuleError;

// =============================================================================
// BASE GAS COSTS
// =============================================================================

/// Gas costs for module functions.
pub mod costs {
    /// Reading one storage slot.
    pub const READ_GAS_COST_PER_SLOT: u64 = 5_000;
    /// Writing one storage slot.
    pub const WRITE_GAS_COST_PER_SLOT: u64 = 20_000;
    /// Reading the caller's allowlist role (one slot).
    pub const READ_ALLOW_LIST: u64 = READ_GAS_COST_PER_SLOT;

    /// `sayHello()`: one slot read.
    pub const SAY_HELLO: u64 = READ_GAS_COST_PER_SLOT;
    /// `setGreeting(string)`: one slot write plus one role read.
    pub const SET_GREETING: u64 = WRITE_GAS_COST_PER_SLOT + READ_ALLOW_LIST;
}

// =============================================================================
// GAS METER
// =============================================================================

/// Deducts `cost` from `budget`.
///
/// # Errors
///
/// Returns [`ModuleError::OutOfGas`] if `budget < cost`.
pub fn charge(budget: u64, cost: u64) -> Result<u64, ModuleError> {
    match budget.checked_sub(cost) {
        Some(remaining) => Ok(remaining),
        None => Err(ModuleError::OutOfGas),
    }
}

/// Tracks the budget of a single call.
///
/// ## Invariants
/// - `used <= limit` at all times
/// - A failed charge leaves the meter unchanged
#[derive(Clone, Copy, Debug, Default)]
pub struct GasMeter {
    /// Gas supplied with the call.
    limit: u64,
    /// Gas consumed so far.
    used: u64,
}

impl GasMeter {
    /// Creates a meter for a call supplied with `limit` gas.
    #[must_use]
    pub const fn new(limit: u64) -> Self {
        Self { limit, used: 0 }
    }

    /// Returns the supplied gas.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.limit
    }

    /// Returns gas used so far.
    #[must_use]
    pub const fn used(&self) -> u64 {
        self.used
    }

    /// Returns remaining gas.
    #[must_use]
    pub const fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }

    /// Charges a fixed cost.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::OutOfGas`] if the remaining budget is below
    /// `cost`; nothing is deducted in that case.
    pub fn charge(&mut self, cost: u64) -> Result<u64, ModuleError> {
        let remaining = charge(self.remaining(), cost)?;
        self.used += cost;
        Ok(remaining)
    }
}

// =============================================================================
// TESTS
// =============================================================================
