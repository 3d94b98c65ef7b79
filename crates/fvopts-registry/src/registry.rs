//! [`RegistryBuilder`] and the frozen [`Registry`].

use fvopts_core::RegistryError;
use indexmap::IndexMap;
use std::fmt;

/// Collects `(type name, constructor)` pairs before the registry is frozen.
///
/// # Examples
///
/// ```
/// use fvopts_registry::RegistryBuilder;
///
/// fn double(x: f64) -> f64 { 2.0 * x }
/// fn square(x: f64) -> f64 { x * x }
///
/// let mut builder = RegistryBuilder::<fn(f64) -> f64>::new("operator");
/// builder.register("double", double).unwrap();
/// builder.register("square", square).unwrap();
/// assert!(builder.register("double", square).is_err());
///
/// let registry = builder.build();
/// let op = registry.lookup("square").unwrap();
/// assert_eq!(op(3.0), 9.0);
/// ```
pub struct RegistryBuilder<F> {
    kind: &'static str,
    entries: IndexMap<&'static str, F>,
}

impl<F> RegistryBuilder<F> {
    /// Start an empty registry for constructors of `kind`
    /// (used in diagnostics, e.g. `"fvSource"`).
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: IndexMap::new(),
        }
    }

    /// Add a constructor under `type_name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateType`] if `type_name` is already present.
    /// The existing entry is kept.
    pub fn register(&mut self, type_name: &'static str, constructor: F) -> Result<(), RegistryError> {
        if self.entries.contains_key(type_name) {
            return Err(RegistryError::DuplicateType {
                kind: self.kind.to_string(),
                type_name: type_name.to_string(),
            });
        }
        self.entries.insert(type_name, constructor);
        Ok(())
    }

    /// Whether `type_name` has been registered so far.
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Freeze the registry. No further registration is possible.
    pub fn build(self) -> Registry<F> {
        tracing::debug!(
            kind = self.kind,
            types = self.entries.len(),
            "runtime type registry built"
        );
        Registry {
            kind: self.kind,
            entries: self.entries,
        }
    }
}

/// A frozen, read-only map from type name to constructor.
pub struct Registry<F> {
    kind: &'static str,
    entries: IndexMap<&'static str, F>,
}

impl<F> Registry<F> {
    /// What this registry constructs.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Constructor registered under `type_name`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownType`] listing every registered name, sorted,
    /// so a user can see the valid configuration values.
    pub fn lookup(&self, type_name: &str) -> Result<&F, RegistryError> {
        self.entries
            .get(type_name)
            .ok_or_else(|| RegistryError::UnknownType {
                kind: self.kind.to_string(),
                type_name: type_name.to_string(),
                known: self.type_names().into_iter().map(String::from).collect(),
            })
    }

    /// Whether `type_name` is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// All registered type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<F> fmt::Debug for Registry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &self.kind)
            .field("types", &self.type_names())
            .finish()
    }
}
