//! Per-run bootstrap context.

use crate::capability::EndpointSpecifier;
use crate::configure::BusSettings;
use crate::types::TypeUniverse;

/// Inputs shared by every resolver of one bootstrap run.
///
/// Built once before the run starts and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapContext {
    endpoint_name: String,
    endpoint_version: String,
    universe: TypeUniverse,
    sections: toml::Table,
    bus_defaults: BusSettings,
}

impl BootstrapContext {
    pub fn new(
        endpoint_name: impl Into<String>,
        endpoint_version: impl Into<String>,
        universe: TypeUniverse,
    ) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            endpoint_version: endpoint_version.into(),
            universe,
            sections: toml::Table::new(),
            bus_defaults: BusSettings::default(),
        }
    }

    /// Context named after the specifier: its declared name, otherwise the
    /// module path of its type.
    pub fn for_specifier<S: EndpointSpecifier>(
        specifier: &S,
        endpoint_version: impl Into<String>,
        universe: TypeUniverse,
    ) -> Self {
        let name = specifier
            .endpoint_name()
            .unwrap_or_else(|| default_endpoint_name(std::any::type_name::<S>()));
        Self::new(name, endpoint_version, universe)
    }

    pub fn with_sections(mut self, sections: toml::Table) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_bus_defaults(mut self, bus: BusSettings) -> Self {
        self.bus_defaults = bus;
        self
    }

    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }

    pub fn endpoint_version(&self) -> &str {
        &self.endpoint_version
    }

    pub fn universe(&self) -> &TypeUniverse {
        &self.universe
    }

    pub fn sections(&self) -> &toml::Table {
        &self.sections
    }

    pub fn bus_defaults(&self) -> &BusSettings {
        &self.bus_defaults
    }
}

fn default_endpoint_name(type_name: &str) -> String {
    // Generic parameters would confuse the path split.
    let base = type_name.split('<').next().unwrap_or(type_name);
    match base.rsplit_once("::") {
        Some((module, _)) => module.to_string(),
        None => base.to_string(),
    }
}
