//! Provider registry
//!
//! Maps declarative type names to provider constructors so the orchestrator
//! can dispatch lifecycle operations polymorphically.

use std::collections::HashMap;
use tracing::debug;

use crate::resources::instance_profile::InstanceProfileProvider;
use crate::resources::{instance_profile, ResourceProvider};

type ProviderFactory = Box<dyn Fn() -> Box<dyn ResourceProvider> + Send + Sync>;

/// Registry of resource providers keyed by type name.
#[derive(Default)]
pub struct ProviderRegistry {
    factories: HashMap<&'static str, ProviderFactory>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every built-in provider registered.
    pub fn with_builtin_providers() -> Self {
        let mut registry = Self::new();
        registry.register(instance_profile::TYPE_NAME, || {
            Box::new(InstanceProfileProvider)
        });
        registry
    }

    pub fn register<F>(&mut self, type_name: &'static str, factory: F)
    where
        F: Fn() -> Box<dyn ResourceProvider> + Send + Sync + 'static,
    {
        debug!("Registered resource provider: {}", type_name);
        self.factories.insert(type_name, Box::new(factory));
    }

    /// Construct a provider for the given type name.
    pub fn instantiate(&self, type_name: &str) -> Option<Box<dyn ResourceProvider>> {
        self.factories.get(type_name).map(|factory| factory())
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
