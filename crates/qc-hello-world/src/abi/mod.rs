//! # Call ABI
//!
//! Selector dispatch and argument packing for the two module functions:
//!
//! | Function | Signature | Arguments | Returns |
//! |----------|-----------|-----------|---------|
//! | `sayHello` | `sayHello()` | none | `string` |
//! | `setGreeting` | `setGreeting(string)` | `string` | nothing |
//!
//! Decoding is split in two so the dispatcher can charge gas between the
//! steps: [`decode_selector`] runs first, [`FunctionKind::decode_args`] only
//! after the fixed cost has been paid.

pub mod codec;

use crate::domain::services::function_selector;
use crate::errors::AbiError;

/// Canonical signature of `sayHello`.
pub const SAY_HELLO_SIGNATURE: &str = "sayHello()";
/// Canonical signature of `setGreeting`.
pub const SET_GREETING_SIGNATURE: &str = "setGreeting(string)";
/// Selector length in bytes.
pub const SELECTOR_LEN: usize = 4;

/// Selector of `sayHello()`.
#[must_use]
pub fn say_hello_selector() -> [u8; SELECTOR_LEN] {
    function_selector(SAY_HELLO_SIGNATURE)
}

/// Selector of `setGreeting(string)`.
#[must_use]
pub fn set_greeting_selector() -> [u8; SELECTOR_LEN] {
    function_selector(SET_GREETING_SIGNATURE)
}

// =============================================================================
// CALLS
// =============================================================================

/// Function targeted by a payload, before its arguments are decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `sayHello()`
    SayHello,
    /// `setGreeting(string)`
    SetGreeting,
}

impl FunctionKind {
    /// True for functions that mutate state.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::SetGreeting)
    }

    /// Decodes the arguments that follow the selector.
    ///
    /// # Errors
    ///
    /// Returns an [`AbiError`] if `args` does not match the function's
    /// argument shape.
    pub fn decode_args(self, args: &[u8]) -> Result<Call, AbiError> {
        match self {
            Self::SayHello => Ok(Call::SayHello),
            Self::SetGreeting => codec::decode_string(args).map(Call::SetGreeting),
        }
    }
}

/// A fully decoded call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Read the greeting.
    SayHello,
    /// Replace the greeting.
    SetGreeting(String),
}

impl Call {
    /// Function this call targets.
    #[must_use]
    pub const fn kind(&self) -> FunctionKind {
        match self {
            Self::SayHello => FunctionKind::SayHello,
            Self::SetGreeting(_) => FunctionKind::SetGreeting,
        }
    }

    /// Encodes the call into a payload.
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SayHello => pack_say_hello(),
            Self::SetGreeting(greeting) => pack_set_greeting(greeting),
        }
    }
}

/// Splits `input` into the targeted function and its argument bytes.
///
/// # Errors
///
/// `InputTooShort` if there is no full selector, `UnknownSelector` if it
/// matches neither function.
pub fn decode_selector(input: &[u8]) -> Result<(FunctionKind, &[u8]), AbiError> {
    if input.len() < SELECTOR_LEN {
        return Err(AbiError::InputTooShort {
            expected: SELECTOR_LEN,
            actual: input.len(),
        });
    }
    let (head, args) = input.split_at(SELECTOR_LEN);
    let mut selector = [0u8; SELECTOR_LEN];
    selector.copy_from_slice(head);

    let kind = if selector == say_hello_selector() {
        FunctionKind::SayHello
    } else if selector == set_greeting_selector() {
        FunctionKind::SetGreeting
    } else {
        return Err(AbiError::UnknownSelector(selector));
    };
    Ok((kind, args))
}

/// Decodes a full payload in one step.
///
/// # Errors
///
/// Any [`AbiError`] from the selector or the arguments.
pub fn decode_call(input: &[u8]) -> Result<Call, AbiError> {
    let (kind, args) = decode_selector(input)?;
    kind.decode_args(args)
}

// =============================================================================
// PACKING
// =============================================================================

/// Payload for `sayHello()`.
#[must_use]
pub fn pack_say_hello() -> Vec<u8> {
    say_hello_selector().to_vec()
}

/// Return data of `sayHello()`.
#[must_use]
pub fn pack_say_hello_output(greeting: &str) -> Vec<u8> {
    codec::encode_string(greeting)
}

/// Decodes the return data of `sayHello()`.
///
/// # Errors
///
/// Returns an [`AbiError`] if `output` is not one encoded string.
pub fn unpack_say_hello_output(output: &[u8]) -> Result<String, AbiError> {
    codec::decode_string(output)
}

/// Payload for `setGreeting(greeting)`.
#[must_use]
pub fn pack_set_greeting(greeting: &str) -> Vec<u8> {
    let mut input = set_greeting_selector().to_vec();
    input.extend(codec::encode_string(greeting));
    input
}

/// Decodes the argument of `setGreeting` (selector already stripped).
///
/// # Errors
///
/// Returns an [`AbiError`] if `args` is not one encoded string.
pub fn unpack_set_greeting_input(args: &[u8]) -> Result<String, AbiError> {
    codec::decode_string(args)
}

// =============================================================================
// TESTS
// =============================================================================
