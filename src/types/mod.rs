//! Type universe known to the host.
//!
//! # Data Flow
//! ```text
//! composition root
//!     → TypeRegistry::register* (one entry per participating type)
//!     → TypeUniverse (immutable snapshot)
//!     → Configure (default configuration) + constraint validation
//! ```
//!
//! # Design Decisions
//! - Registration happens at composition time; nothing is scanned at runtime
//! - Entries are plain data so validation stays a pure function
//! - Names are fully qualified (`std::any::type_name`)

use serde::Serialize;

/// Whether a registered type is an interface (trait) or a concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Interface,
    Concrete,
}

/// One registered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Fully qualified type name.
    pub name: String,
    pub kind: TypeKind,
    /// Provides the custom initialization capability.
    pub initializes: bool,
    /// Implements the endpoint specifier role.
    pub specifier: bool,
}

impl TypeDescriptor {
    pub fn concrete<T: ?Sized>() -> Self {
        Self {
            name: std::any::type_name::<T>().to_string(),
            kind: TypeKind::Concrete,
            initializes: false,
            specifier: false,
        }
    }

    pub fn interface<T: ?Sized>() -> Self {
        Self {
            kind: TypeKind::Interface,
            ..Self::concrete::<T>()
        }
    }

    pub fn initializes(mut self) -> Self {
        self.initializes = true;
        self
    }

    pub fn specifier(mut self) -> Self {
        self.specifier = true;
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }
}

/// Immutable set of types considered part of the running host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TypeUniverse {
    types: Vec<TypeDescriptor>,
}

impl TypeUniverse {
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.iter().any(|t| t.name == name)
    }
}

impl FromIterator<TypeDescriptor> for TypeUniverse {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut registry = TypeRegistry::new();
        for descriptor in iter {
            registry.register(descriptor);
        }
        registry.build()
    }
}

/// Composition-time registry the host builds its universe from.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. Re-registering a name replaces the earlier entry
    /// in place.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> &mut Self {
        match self.types.iter_mut().find(|t| t.name == descriptor.name) {
            Some(existing) => *existing = descriptor,
            None => self.types.push(descriptor),
        }
        self
    }

    /// Register a concrete endpoint specifier type.
    pub fn register_specifier<T>(&mut self, initializes: bool) -> &mut Self {
        let mut descriptor = TypeDescriptor::concrete::<T>().specifier();
        descriptor.initializes = initializes;
        self.register(descriptor)
    }

    pub fn build(&self) -> TypeUniverse {
        TypeUniverse {
            types: self.types.clone(),
        }
    }
}
