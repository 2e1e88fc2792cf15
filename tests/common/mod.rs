//! Shared specifiers and fakes for bootstrap and host tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use endpoint_host::bootstrap::{BootstrapContext, BootstrapOrchestrator};
use endpoint_host::capability::BoxError;
use endpoint_host::profiles::{LoggingConfigurer, Profile, ProfileCatalog};
use endpoint_host::roles::{Role, RoleError, RoleManager};
use endpoint_host::types::{TypeRegistry, TypeUniverse};
use endpoint_host::{
    CapabilityDescriptor, Configure, ConfigureLogging, EndpointSpecifier, InitializeEndpoint,
    InitializeError,
};

pub fn args(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Counts invocations; cloned handles share the count.
#[derive(Debug, Clone, Default)]
pub struct Counter(Arc<AtomicUsize>);

impl Counter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Profile logging configurer that records its profile name into a shared log.
#[derive(Clone)]
pub struct RecordingConfigurer {
    pub name: &'static str,
    pub log: Arc<Mutex<Vec<String>>>,
}

impl LoggingConfigurer for RecordingConfigurer {
    fn configure(&self, _: &dyn EndpointSpecifier, ctx: &BootstrapContext) -> Result<(), BoxError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, ctx.endpoint_name()));
        Ok(())
    }
}

/// Catalog of recording profiles `lite`, `integration`, `production`
/// (fallback), plus the shared log.
pub fn recording_catalog() -> (ProfileCatalog, Arc<Mutex<Vec<String>>>) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut catalog = ProfileCatalog::empty();
    for name in ["lite", "integration", "production"] {
        catalog = catalog.register(Profile::new(
            name,
            RecordingConfigurer {
                name,
                log: Arc::clone(&log),
            },
        ));
    }
    (catalog.with_fallback("production"), log)
}

pub struct FailingConfigurer;

impl LoggingConfigurer for FailingConfigurer {
    fn configure(&self, _: &dyn EndpointSpecifier, _: &BootstrapContext) -> Result<(), BoxError> {
        Err("log directory is read-only".into())
    }
}

/// Role manager that counts calls and otherwise does nothing.
pub struct CountingRoleManager(pub Counter);

impl RoleManager for CountingRoleManager {
    fn configure_roles(
        &self,
        _: &dyn EndpointSpecifier,
        _: &mut Configure,
    ) -> Result<(), RoleError> {
        self.0.hit();
        Ok(())
    }
}

pub fn orchestrator() -> (BootstrapOrchestrator, Arc<Mutex<Vec<String>>>) {
    let (catalog, log) = recording_catalog();
    (BootstrapOrchestrator::new().with_profiles(catalog), log)
}

pub fn universe_for<T>(initializes: bool) -> TypeUniverse {
    let mut registry = TypeRegistry::new();
    registry.register_specifier::<T>(initializes);
    registry.build()
}

pub fn context_for<T>(initializes: bool) -> BootstrapContext {
    BootstrapContext::new("Sales", "1.0.0", universe_for::<T>(initializes))
}

/// Specifier without optional capabilities.
pub struct PlainSpecifier {
    pub roles: Vec<Role>,
}

impl EndpointSpecifier for PlainSpecifier {
    fn roles(&self) -> Vec<Role> {
        self.roles.clone()
    }
}

/// What a test initializer does when invoked.
#[derive(Debug, Clone, Copy)]
pub enum InitBehavior {
    Succeed,
    MissingContext,
    Fail,
}

/// Specifier with only the initialization capability.
pub struct InitOnlySpecifier {
    pub calls: Counter,
    pub behavior: InitBehavior,
}

impl InitOnlySpecifier {
    pub fn new(behavior: InitBehavior) -> Self {
        Self {
            calls: Counter::default(),
            behavior,
        }
    }
}

fn run_initializer(calls: &Counter, behavior: InitBehavior, ctx: &BootstrapContext) -> Result<Configure, InitializeError> {
    calls.hit();
    match behavior {
        InitBehavior::Succeed => {
            let mut config = Configure::with(ctx);
            config.bus.max_retries = 9;
            Ok(config)
        }
        InitBehavior::MissingContext => Err(InitializeError::MissingContext {
            what: "transport".into(),
        }),
        InitBehavior::Fail => Err(InitializeError::Failed("database unreachable".into())),
    }
}

impl InitializeEndpoint for InitOnlySpecifier {
    fn initialize(&self, ctx: &BootstrapContext) -> Result<Configure, InitializeError> {
        run_initializer(&self.calls, self.behavior, ctx)
    }
}

impl EndpointSpecifier for InitOnlySpecifier {
    fn initialization(&self) -> Option<&dyn InitializeEndpoint> {
        Some(self)
    }
}

/// Specifier with both capabilities and a registered descriptor.
pub struct DualSpecifier {
    pub descriptor: CapabilityDescriptor,
    pub init_calls: Counter,
    pub logging_calls: Counter,
}

impl DualSpecifier {
    pub fn new(descriptor: CapabilityDescriptor) -> Self {
        Self {
            descriptor,
            init_calls: Counter::default(),
            logging_calls: Counter::default(),
        }
    }
}

impl ConfigureLogging for DualSpecifier {
    fn configure_logging(&self) -> Result<(), BoxError> {
        self.logging_calls.hit();
        Ok(())
    }
}

impl InitializeEndpoint for DualSpecifier {
    fn initialize(&self, ctx: &BootstrapContext) -> Result<Configure, InitializeError> {
        run_initializer(&self.init_calls, InitBehavior::Succeed, ctx)
    }
}

impl EndpointSpecifier for DualSpecifier {
    fn descriptor(&self) -> CapabilityDescriptor {
        self.descriptor
    }

    fn logging(&self) -> Option<&dyn ConfigureLogging> {
        Some(self)
    }

    fn initialization(&self) -> Option<&dyn InitializeEndpoint> {
        Some(self)
    }
}
