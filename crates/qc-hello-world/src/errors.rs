//! # Error Types
//!
//! Call-time failures, ABI decoding failures, activation-time configuration
//! failures and allowlist management failures.

use crate::domain::entities::Role;
use crate::domain::value_objects::Address;
use thiserror::Error;

// =============================================================================
// MODULE ERRORS
// =============================================================================

/// Terminal failure of a single call. Each variant is one dispatcher state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModuleError {
    /// Supplied gas is below the selector's fixed cost.
    #[error("out of gas")]
    OutOfGas,

    /// Caller's role does not allow state changes.
    #[error("non-enabled cannot call setGreeting: {caller}")]
    CannotSetGreeting {
        /// Rejected caller.
        caller: Address,
    },

    /// State-changing call attempted in a read-only context.
    #[error("write protection")]
    WriteProtection,

    /// Greeting longer than one storage slot.
    #[error("input string is longer than {max} bytes: got {length}")]
    InputExceedsLimit {
        /// Encoded length of the rejected greeting.
        length: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// Payload did not match any selector or argument shape.
    #[error("invalid input: {0}")]
    Abi(#[from] AbiError),
}

/// Stable discriminant for a [`ModuleError`], for callers that only branch
/// on the kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ModuleError::OutOfGas`].
    OutOfBudget,
    /// See [`ModuleError::CannotSetGreeting`].
    AccessDenied,
    /// See [`ModuleError::WriteProtection`].
    WriteProtected,
    /// See [`ModuleError::InputExceedsLimit`].
    InputTooLarge,
    /// See [`ModuleError::Abi`].
    DecodeError,
}

impl ModuleError {
    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfGas => ErrorKind::OutOfBudget,
            Self::CannotSetGreeting { .. } => ErrorKind::AccessDenied,
            Self::WriteProtection => ErrorKind::WriteProtected,
            Self::InputExceedsLimit { .. } => ErrorKind::InputTooLarge,
            Self::Abi(_) => ErrorKind::DecodeError,
        }
    }

    /// Returns true if this error consumes all supplied gas.
    #[must_use]
    pub const fn consumes_all_gas(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }
}

// =============================================================================
// ABI ERRORS
// =============================================================================

/// Errors from decoding a call payload or a return value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AbiError {
    /// Payload shorter than the bytes it must contain.
    #[error("input too short: expected at least {expected} bytes, got {actual}")]
    InputTooShort {
        /// Minimum length required.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Selector matches no known function.
    #[error("unknown selector: 0x{}", hex::encode(.0))]
    UnknownSelector([u8; 4]),

    /// Dynamic-type offset word points outside the payload.
    #[error("invalid offset: {0}")]
    InvalidOffset(String),

    /// Dynamic-type length word runs past the payload.
    #[error("invalid length: {0}")]
    InvalidLength(String),

    /// String argument is not valid UTF-8.
    #[error("string is not valid utf-8")]
    InvalidUtf8,
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Activation-time configuration failures. Fatal: the module does not start.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Initial greeting does not fit one storage slot.
    #[error("initial greeting is longer than {max} bytes: got {length}")]
    GreetingExceedsLimit {
        /// Encoded length of the configured greeting.
        length: usize,
        /// Allowed maximum.
        max: usize,
    },

    /// Address appears in more than one role set, or twice in one set.
    #[error("address {address} listed as both {first} and {second}")]
    DuplicateAddress {
        /// Offending address.
        address: Address,
        /// Role of the first listing.
        first: Role,
        /// Role of the second listing.
        second: Role,
    },

    /// Genesis JSON could not be parsed.
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// ALLOWLIST ERRORS
// =============================================================================

/// Errors from allowlist role management.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AllowListError {
    /// Caller lacks the privilege for this role change.
    #[error("{caller} ({caller_role}) cannot change {target} from {current} to {requested}")]
    CannotModify {
        /// Address attempting the change.
        caller: Address,
        /// Caller's role.
        caller_role: Role,
        /// Address whose role would change.
        target: Address,
        /// Target's current role.
        current: Role,
        /// Role requested.
        requested: Role,
    },
}

// =============================================================================
// TESTS
// =============================================================================
