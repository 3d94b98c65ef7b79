//! [`SourceRegistry`]: run-time selection of source-term models.

use crate::acceleration::AccelerationSource;
use crate::context::SourceContext;
use crate::source::FvSource;
use fvopts_core::{ConfigError, Dictionary, RegistryError};
use fvopts_registry::{Registry, RegistryBuilder};

/// Constructs a source from its instance name and configuration block.
pub type SourceConstructor =
    for<'a> fn(&str, &Dictionary, SourceContext<'a>) -> Result<Box<dyn FvSource + 'a>, ConfigError>;

/// The frozen registry of source-term model types.
///
/// # Examples
///
/// ```
/// use fvopts_core::{Dictionary, Vector};
/// use fvopts_function::FunctionLibrary;
/// use fvopts_selection::SelectionCatalog;
/// use fvopts_source::{SourceContext, SourceRegistry};
///
/// let registry = SourceRegistry::builtin().unwrap();
/// let functions = FunctionLibrary::builtin().unwrap();
/// let catalog = SelectionCatalog::uniform(4, 1.0).unwrap();
/// let ctx = SourceContext::new(&catalog, &functions);
///
/// let dict = Dictionary::new("gravity")
///     .with("type", "accelerationSource")
///     .with("selectionMode", "all")
///     .with("velocity", Vector::new(0.0, 0.0, -9.81));
/// let source = registry.new_source("gravity", &dict, ctx).unwrap();
/// assert_eq!(source.type_name(), "accelerationSource");
/// ```
#[derive(Debug)]
pub struct SourceRegistry {
    inner: Registry<SourceConstructor>,
}

impl SourceRegistry {
    /// Registry kind used in diagnostics.
    pub const KIND: &'static str = "fvSource";

    /// An empty builder for source constructors.
    pub fn builder() -> RegistryBuilder<SourceConstructor> {
        RegistryBuilder::new(Self::KIND)
    }

    /// Add the built-in model types to `builder`, in a fixed order.
    pub fn register_builtins(builder: &mut RegistryBuilder<SourceConstructor>) -> Result<(), RegistryError> {
        builder.register(AccelerationSource::TYPE_NAME, acceleration_source)?;
        Ok(())
    }

    /// A registry holding exactly the built-in types.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut builder = Self::builder();
        Self::register_builtins(&mut builder)?;
        Ok(Self::from(builder.build()))
    }

    /// Look up `type_name` and construct an instance called `name`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Registry`] if the type is unknown (listing the known
    /// ones), or whatever the constructor reports.
    pub fn create<'a>(
        &self,
        type_name: &str,
        name: &str,
        dict: &Dictionary,
        ctx: SourceContext<'a>,
    ) -> Result<Box<dyn FvSource + 'a>, ConfigError> {
        let ctor = self
            .inner
            .lookup(type_name)
            .map_err(|reason| ConfigError::Registry {
                instance: name.to_string(),
                reason,
            })?;
        ctor(name, dict, ctx)
    }

    /// Construct an instance whose type is given by `type` in `dict`.
    pub fn new_source<'a>(
        &self,
        name: &str,
        dict: &Dictionary,
        ctx: SourceContext<'a>,
    ) -> Result<Box<dyn FvSource + 'a>, ConfigError> {
        let type_name = dict.lookup_word("type").map_err(|reason| ConfigError::Dict {
            instance: name.to_string(),
            reason,
        })?;
        tracing::info!(source = name, source_type = type_name, "selecting finite volume source model");
        self.create(type_name, name, dict, ctx)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        self.inner.type_names()
    }

    /// Whether `type_name` is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.inner.contains(type_name)
    }
}

impl From<Registry<SourceConstructor>> for SourceRegistry {
    fn from(inner: Registry<SourceConstructor>) -> Self {
        Self { inner }
    }
}

fn acceleration_source<'a>(
    name: &str,
    dict: &Dictionary,
    ctx: SourceContext<'a>,
) -> Result<Box<dyn FvSource + 'a>, ConfigError> {
    Ok(Box::new(AccelerationSource::new(name, dict, ctx)?))
}
