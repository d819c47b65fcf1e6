//! # Hello World Module
//!
//! The call dispatcher. One call moves through:
//!
//! ```text
//! selector -> gas -> role lookup -> read-only -> arguments -> role check
//!          -> size check -> execute -> encode
//! ```
//!
//! Each step either advances or ends the call with one [`ModuleError`].
//! Nothing is written until every check has passed, so a failed call never
//! leaves a partial mutation behind.
//!
//! ## Check Order
//!
//! | Step | Failure | Applies to |
//! |------|---------|-----------|
//! | selector | `Abi` | all |
//! | gas | `OutOfGas` | all |
//! | read-only | `WriteProtection` | `setGreeting` |
//! | arguments | `Abi` | `setGreeting` |
//! | role | `CannotSetGreeting` | `setGreeting` |
//! | size | `InputExceedsLimit` | `setGreeting` |

use crate::abi::{self, Call, FunctionKind};
use crate::adapters::AllowList;
use crate::config::Initializer;
use crate::domain::entities::{CallContext, CallOutput, ModuleParams, Role};
use crate::domain::greeting::GreetingStore;
use crate::domain::value_objects::{Address, Bytes};
use crate::errors::ModuleError;
use crate::gas::GasMeter;
use crate::ports::inbound::StatefulModule;
use crate::ports::outbound::{RoleResolver, StateStore};
use tracing::{debug, instrument, warn};

/// Address the module is installed at.
pub const CONTRACT_ADDRESS: Address = Address::new([
    0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00,
]);

/// Allowlist-gated greeting module.
///
/// Holds no state of its own: every call reads and writes through the
/// [`StateStore`] it is given, so one instance can serve any number of
/// independent states.
#[derive(Clone, Debug)]
pub struct HelloWorldModule<R: RoleResolver = AllowList> {
    /// Install address and storage namespace.
    address: Address,
    /// Gas costs and greeting bound.
    params: ModuleParams,
    /// Greeting slot accessor.
    greeting: GreetingStore,
    /// Allowlist view.
    roles: R,
}

impl HelloWorldModule<AllowList> {
    /// Module at `address` with its allowlist in the same namespace.
    #[must_use]
    pub fn new(address: Address, params: ModuleParams) -> Self {
        Self::with_resolver(address, params, AllowList::new(address))
    }
}

impl Default for HelloWorldModule<AllowList> {
    fn default() -> Self {
        Self::new(CONTRACT_ADDRESS, ModuleParams::default())
    }
}

impl<R: RoleResolver> HelloWorldModule<R> {
    /// Module at `address` resolving roles through `roles`.
    #[must_use]
    pub fn with_resolver(address: Address, params: ModuleParams, roles: R) -> Self {
        let greeting = GreetingStore::with_max_len(address, params.max_greeting_len);
        Self {
            address,
            params,
            greeting,
            roles,
        }
    }

    /// Fixed cost of `kind`.
    #[must_use]
    pub const fn gas_cost(&self, kind: FunctionKind) -> u64 {
        match kind {
            FunctionKind::SayHello => self.params.say_hello_gas_cost,
            FunctionKind::SetGreeting => self.params.set_greeting_gas_cost,
        }
    }

    /// Current greeting, read directly without a call.
    #[must_use]
    pub fn greeting(&self, state: &dyn StateStore) -> String {
        self.greeting.get(state)
    }

    /// Initializer for this module's namespace and greeting bound.
    #[must_use]
    pub fn initializer(&self) -> Initializer {
        Initializer::with_max_len(self.address, self.params.max_greeting_len)
    }

    fn dispatch(
        &self,
        state: &mut dyn StateStore,
        call: &CallContext,
    ) -> Result<CallOutput, ModuleError> {
        let (kind, args) = abi::decode_selector(call.input.as_slice())?;

        let remaining_gas = GasMeter::new(call.supplied_gas).charge(self.gas_cost(kind))?;

        let role = self.roles.resolve(&*state, call.caller);

        if kind.is_mutating() && call.read_only {
            return Err(ModuleError::WriteProtection);
        }

        let output = match kind.decode_args(args)? {
            Call::SayHello => self.say_hello(&*state),
            Call::SetGreeting(greeting) => {
                self.set_greeting(state, call.caller, role, &greeting)?
            }
        };

        Ok(CallOutput {
            output,
            remaining_gas,
        })
    }

    fn say_hello(&self, state: &dyn StateStore) -> Bytes {
        Bytes::from(abi::pack_say_hello_output(&self.greeting.get(state)))
    }

    fn set_greeting(
        &self,
        state: &mut dyn StateStore,
        caller: Address,
        role: Role,
        greeting: &str,
    ) -> Result<Bytes, ModuleError> {
        if !role.is_enabled() {
            return Err(ModuleError::CannotSetGreeting { caller });
        }
        self.greeting.set(state, greeting)?;
        debug!(%caller, %role, greeting, "greeting updated");
        Ok(Bytes::new())
    }
}

impl<R: RoleResolver> StatefulModule for HelloWorldModule<R> {
    fn address(&self) -> Address {
        self.address
    }

    #[instrument(
        skip(self, state, call),
        fields(caller = %call.caller, gas = call.supplied_gas, read_only = call.read_only)
    )]
    fn run(
        &self,
        state: &mut dyn StateStore,
        call: &CallContext,
    ) -> Result<CallOutput, ModuleError> {
        match self.dispatch(state, call) {
            Ok(output) => {
                debug!(remaining_gas = output.remaining_gas, "call succeeded");
                Ok(output)
            }
            Err(err) => {
                warn!(error = %err, kind = ?err.kind(), "call rejected");
                Err(err)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
