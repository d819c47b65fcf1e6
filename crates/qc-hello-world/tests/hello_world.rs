//! # Hello World Module Call Tests
//!
//! Table-driven calls against a fresh state per case.
//!
//! ## Test Categories
//!
//! 1. **Role Gating** - who may read and who may write
//! 2. **Gas** - fixed costs, one unit short fails
//! 3. **Read-only** - static calls never write
//! 4. **Bounds** - greetings over 32 bytes are rejected, state unchanged
//! 5. **Configuration** - genesis greeting and role seeding
//! 6. **Rollback** - engine snapshots undo successful writes

use qc_hello_world::prelude::*;

// =============================================================================
// TEST HELPERS
// =============================================================================

const ADMIN: Address = Address::from_low_u8(0x11);
const ENABLED: Address = Address::from_low_u8(0x22);
const NO_ROLE: Address = Address::from_low_u8(0x33);
const MANAGER: Address = Address::from_low_u8(0x44);

const TEST_GREETING: &str = "test";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn default_roles() -> AllowListConfig {
    AllowListConfig {
        admin_addresses: vec![ADMIN],
        manager_addresses: vec![MANAGER],
        enabled_addresses: vec![ENABLED],
    }
}

/// Seeds the allowlist only, leaving the greeting slot untouched.
fn set_default_roles(module: &HelloWorldModule, state: &mut InMemoryStateStore) {
    let allow_list = AllowList::new(module.address());
    allow_list.configure(state, &default_roles());
}

type Hook = fn(&HelloWorldModule, &mut InMemoryStateStore);

struct ModuleTest {
    name: &'static str,
    caller: Address,
    before: Option<Hook>,
    config: Option<ModuleConfig>,
    input: Vec<u8>,
    supplied_gas: u64,
    read_only: bool,
    expected: Result<Vec<u8>, ErrorKind>,
    after: Option<Hook>,
}

impl ModuleTest {
    fn run(self) {
        let module: HelloWorldModule = HelloWorldModule::default();
        let mut state = InMemoryStateStore::new();

        if let Some(config) = &self.config {
            module
                .initializer()
                .configure(&mut state, config)
                .unwrap_or_else(|e| panic!("{}: configure failed: {e}", self.name));
        }
        if let Some(before) = self.before {
            before(&module, &mut state);
        }

        let mut call = CallContext::new(self.caller, self.input, self.supplied_gas);
        call.read_only = self.read_only;
        let result = module.run(&mut state, &call);

        match (&self.expected, &result) {
            (Ok(expected), Ok(out)) => {
                assert_eq!(out.output.as_slice(), expected.as_slice(), "{}", self.name);
                let kind = decode_call(call.input.as_slice()).unwrap().kind();
                assert_eq!(
                    out.remaining_gas,
                    self.supplied_gas - module.gas_cost(kind),
                    "{}",
                    self.name
                );
            }
            (Err(kind), Err(err)) => assert_eq!(err.kind(), *kind, "{}: {err}", self.name),
            _ => panic!("{}: expected {:?}, got {:?}", self.name, self.expected, result),
        }

        if let Some(after) = self.after {
            after(&module, &mut state);
        }
    }
}

fn expect_test_greeting(module: &HelloWorldModule, state: &mut InMemoryStateStore) {
    assert_eq!(module.greeting(state), TEST_GREETING);
}

fn expect_no_greeting(module: &HelloWorldModule, state: &mut InMemoryStateStore) {
    assert_eq!(module.greeting(state), "");
}

fn seed_test_greeting(module: &HelloWorldModule, state: &mut InMemoryStateStore) {
    set_default_roles(module, state);
    GreetingStore::new(module.address())
        .set(state, TEST_GREETING)
        .unwrap();
}

fn cases() -> Vec<ModuleTest> {
    vec![
        ModuleTest {
            name: "calling sayHello from NoRole should succeed",
            caller: NO_ROLE,
            before: Some(set_default_roles),
            config: None,
            input: pack_say_hello(),
            supplied_gas: costs::SAY_HELLO,
            read_only: false,
            expected: Ok(pack_say_hello_output("")),
            after: None,
        },
        ModuleTest {
            name: "calling sayHello from Enabled should succeed",
            caller: ENABLED,
            before: Some(set_default_roles),
            config: None,
            input: pack_say_hello(),
            supplied_gas: costs::SAY_HELLO,
            read_only: false,
            expected: Ok(pack_say_hello_output("")),
            after: None,
        },
        ModuleTest {
            name: "calling sayHello from Admin should succeed",
            caller: ADMIN,
            before: Some(set_default_roles),
            config: None,
            input: pack_say_hello(),
            supplied_gas: costs::SAY_HELLO,
            read_only: false,
            expected: Ok(pack_say_hello_output("")),
            after: None,
        },
        ModuleTest {
            name: "calling sayHello from NoRole with an empty-greeting config returns empty",
            caller: NO_ROLE,
            before: None,
            config: Some(ModuleConfig::new(
                Some(0),
                AllowListConfig::default(),
                Some(String::new()),
            )),
            input: pack_say_hello(),
            supplied_gas: costs::SAY_HELLO,
            read_only: false,
            expected: Ok(pack_say_hello_output("")),
            after: None,
        },
        ModuleTest {
            name: "calling sayHello with a configured greeting returns it",
            caller: NO_ROLE,
            before: None,
            config: Some(ModuleConfig::new(
                Some(0),
                default_roles(),
                Some("Hello World!".to_string()),
            )),
            input: pack_say_hello(),
            supplied_gas: costs::SAY_HELLO,
            read_only: true,
            expected: Ok(pack_say_hello_output("Hello World!")),
            after: None,
        },
        ModuleTest {
            name: "insufficient gas for sayHello should fail",
            caller: Address::from_low_u8(1),
            before: None,
            config: None,
            input: pack_say_hello(),
            supplied_gas: costs::SAY_HELLO - 1,
            read_only: false,
            expected: Err(ErrorKind::OutOfBudget),
            after: None,
        },
        ModuleTest {
            name: "insufficient gas for read-only sayHello from Admin should fail",
            caller: ADMIN,
            before: Some(set_default_roles),
            config: None,
            input: pack_say_hello(),
            supplied_gas: costs::SAY_HELLO - 1,
            read_only: true,
            expected: Err(ErrorKind::OutOfBudget),
            after: None,
        },
        ModuleTest {
            name: "calling setGreeting from NoRole should fail",
            caller: NO_ROLE,
            before: Some(set_default_roles),
            config: None,
            input: pack_set_greeting(TEST_GREETING),
            supplied_gas: costs::SET_GREETING,
            read_only: false,
            expected: Err(ErrorKind::AccessDenied),
            after: Some(expect_no_greeting),
        },
        ModuleTest {
            name: "calling setGreeting from Enabled should succeed",
            caller: ENABLED,
            before: Some(set_default_roles),
            config: None,
            input: pack_set_greeting(TEST_GREETING),
            supplied_gas: costs::SET_GREETING,
            read_only: false,
            expected: Ok(Vec::new()),
            after: Some(expect_test_greeting),
        },
        ModuleTest {
            name: "calling setGreeting from Admin should succeed",
            caller: ADMIN,
            before: Some(set_default_roles),
            config: None,
            input: pack_set_greeting(TEST_GREETING),
            supplied_gas: costs::SET_GREETING,
            read_only: false,
            expected: Ok(Vec::new()),
            after: Some(expect_test_greeting),
        },
        ModuleTest {
            name: "calling setGreeting from Manager should succeed",
            caller: MANAGER,
            before: Some(set_default_roles),
            config: None,
            input: pack_set_greeting(TEST_GREETING),
            supplied_gas: costs::SET_GREETING,
            read_only: false,
            expected: Ok(Vec::new()),
            after: Some(expect_test_greeting),
        },
        ModuleTest {
            name: "readOnly setGreeting should fail",
            caller: Address::from_low_u8(1),
            before: None,
            config: None,
            input: pack_set_greeting(""),
            supplied_gas: costs::SET_GREETING,
            read_only: true,
            expected: Err(ErrorKind::WriteProtected),
            after: None,
        },
        ModuleTest {
            name: "readOnly setGreeting from Admin should fail",
            caller: ADMIN,
            before: Some(set_default_roles),
            config: None,
            input: pack_set_greeting(TEST_GREETING),
            supplied_gas: costs::SET_GREETING,
            read_only: true,
            expected: Err(ErrorKind::WriteProtected),
            after: Some(expect_no_greeting),
        },
        ModuleTest {
            name: "insufficient gas for setGreeting should fail",
            caller: Address::from_low_u8(1),
            before: None,
            config: None,
            input: pack_set_greeting(""),
            supplied_gas: costs::SET_GREETING - 1,
            read_only: false,
            expected: Err(ErrorKind::OutOfBudget),
            after: None,
        },
        ModuleTest {
            name: "insufficient gas beats write protection",
            caller: ENABLED,
            before: Some(set_default_roles),
            config: None,
            input: pack_set_greeting(TEST_GREETING),
            supplied_gas: costs::SET_GREETING - 1,
            read_only: true,
            expected: Err(ErrorKind::OutOfBudget),
            after: None,
        },
        ModuleTest {
            name: "store greeting then say hello from non-enabled address",
            caller: NO_ROLE,
            before: Some(seed_test_greeting),
            config: None,
            input: pack_say_hello(),
            supplied_gas: costs::SAY_HELLO,
            read_only: true,
            expected: Ok(pack_say_hello_output(TEST_GREETING)),
            after: None,
        },
        ModuleTest {
            name: "set a very long greeting from enabled address",
            caller: ENABLED,
            before: Some(seed_test_greeting),
            config: None,
            input: pack_set_greeting(
                "a very long string that is longer than 32 bytes and will cause an error",
            ),
            supplied_gas: costs::SET_GREETING,
            read_only: false,
            expected: Err(ErrorKind::InputTooLarge),
            after: Some(expect_test_greeting),
        },
        ModuleTest {
            name: "malformed setGreeting arguments should fail",
            caller: ENABLED,
            before: Some(set_default_roles),
            config: None,
            input: {
                let mut input = pack_set_greeting(TEST_GREETING);
                input.truncate(40);
                input
            },
            supplied_gas: costs::SET_GREETING,
            read_only: false,
            expected: Err(ErrorKind::DecodeError),
            after: Some(expect_no_greeting),
        },
    ]
}

// =============================================================================
// TABLE
// =============================================================================

#[test]
fn test_hello_world_run() {
    init_tracing();
    for case in cases() {
        case.run();
    }
}

// =============================================================================
// SEQUENCES
// =============================================================================

#[test]
fn test_set_greeting_is_idempotent() {
    init_tracing();
    let module: HelloWorldModule = HelloWorldModule::default();
    let mut state = InMemoryStateStore::new();
    set_default_roles(&module, &mut state);

    for _ in 0..2 {
        let call = CallContext::new(ENABLED, pack_set_greeting("again"), costs::SET_GREETING);
        assert!(module.run(&mut state, &call).unwrap().output.is_empty());
        assert_eq!(module.greeting(&state), "again");
    }
}

#[test]
fn test_write_visible_to_next_call() {
    let module: HelloWorldModule = HelloWorldModule::default();
    let mut state = InMemoryStateStore::new();
    set_default_roles(&module, &mut state);

    let call = CallContext::new(ADMIN, pack_set_greeting("gm"), costs::SET_GREETING);
    module.run(&mut state, &call).unwrap();

    let call = CallContext::new(NO_ROLE, pack_say_hello(), costs::SAY_HELLO);
    let out = module.run(&mut state, &call).unwrap();
    assert_eq!(unpack_say_hello_output(out.output.as_slice()).unwrap(), "gm");
}

#[test]
fn test_manager_enables_new_writer() {
    let module: HelloWorldModule = HelloWorldModule::default();
    let mut state = InMemoryStateStore::new();
    set_default_roles(&module, &mut state);
    let allow_list = AllowList::new(module.address());

    let call = CallContext::new(NO_ROLE, pack_set_greeting("hi"), costs::SET_GREETING);
    assert_eq!(
        module.run(&mut state, &call).unwrap_err().kind(),
        ErrorKind::AccessDenied
    );

    allow_list
        .modify_role(&mut state, MANAGER, NO_ROLE, Role::Enabled)
        .unwrap();
    assert!(module.run(&mut state, &call).is_ok());
    assert_eq!(module.greeting(&state), "hi");

    assert!(allow_list
        .modify_role(&mut state, MANAGER, NO_ROLE, Role::Admin)
        .is_err());
}

#[test]
fn test_snapshot_revert_undoes_greeting() {
    let module: HelloWorldModule = HelloWorldModule::default();
    let mut state = InMemoryStateStore::new();
    set_default_roles(&module, &mut state);

    let call = CallContext::new(ADMIN, pack_set_greeting("before"), costs::SET_GREETING);
    module.run(&mut state, &call).unwrap();

    let snapshot = state.snapshot();
    let call = CallContext::new(ADMIN, pack_set_greeting("after"), costs::SET_GREETING);
    module.run(&mut state, &call).unwrap();
    assert_eq!(module.greeting(&state), "after");

    state.revert_to_snapshot(snapshot);
    assert_eq!(module.greeting(&state), "before");
}

#[test]
fn test_failed_calls_do_not_touch_state() {
    let module: HelloWorldModule = HelloWorldModule::default();
    let mut state = InMemoryStateStore::new();
    set_default_roles(&module, &mut state);
    let before = state.clone();
    let slots = state.slot_count();

    let failing = [
        CallContext::new(NO_ROLE, pack_set_greeting("x"), costs::SET_GREETING),
        CallContext::new(ADMIN, pack_set_greeting("x"), costs::SET_GREETING - 1),
        CallContext::new(ADMIN, pack_set_greeting("x"), costs::SET_GREETING).read_only(),
        CallContext::new(ADMIN, pack_set_greeting(&"x".repeat(33)), costs::SET_GREETING),
    ];
    for call in &failing {
        assert!(module.run(&mut state, call).is_err());
    }
    assert_eq!(state.slot_count(), slots);
    assert_eq!(module.greeting(&state), module.greeting(&before));
}

#[test]
fn test_genesis_json_activation() {
    let json = r#"{
        "blockTimestamp": 0,
        "adminAddresses": ["0x0000000000000000000000000000000000000011"],
        "enabledAddresses": ["0x0000000000000000000000000000000000000022"],
        "initialGreeting": "from genesis"
    }"#;
    let config = ModuleConfig::from_json(json).unwrap();
    let module: HelloWorldModule = HelloWorldModule::default();
    let mut state = InMemoryStateStore::new();
    module.initializer().configure(&mut state, &config).unwrap();

    assert_eq!(module.greeting(&state), "from genesis");
    let call = CallContext::new(ENABLED, pack_set_greeting("next"), costs::SET_GREETING);
    assert!(module.run(&mut state, &call).is_ok());
}

#[test]
fn test_oversized_genesis_greeting_is_fatal() {
    let config = ModuleConfig::new(Some(0), default_roles(), Some("g".repeat(33)));
    let module: HelloWorldModule = HelloWorldModule::default();
    let mut state = InMemoryStateStore::new();
    assert!(matches!(
        module.initializer().configure(&mut state, &config),
        Err(ConfigError::GreetingExceedsLimit { .. })
    ));
    assert_eq!(state.slot_count(), 0);
}

#[test]
fn test_genesis_greeting_uses_module_bound() {
    let params = ModuleParams {
        max_greeting_len: 4,
        ..ModuleParams::default()
    };
    let module = HelloWorldModule::new(CONTRACT_ADDRESS, params);
    let mut state = InMemoryStateStore::new();

    let config = ModuleConfig::new(Some(0), default_roles(), Some("twelve bytes".to_string()));
    assert!(matches!(
        module.initializer().configure(&mut state, &config),
        Err(ConfigError::GreetingExceedsLimit { length: 12, max: 4 })
    ));
    assert_eq!(state.slot_count(), 0);

    set_default_roles(&module, &mut state);
    let call = CallContext::new(ADMIN, pack_set_greeting("twelve bytes"), costs::SET_GREETING);
    assert_eq!(
        module.run(&mut state, &call),
        Err(ModuleError::InputExceedsLimit { length: 12, max: 4 })
    );
    assert_eq!(module.greeting(&state), "");
}
