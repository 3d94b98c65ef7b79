//! [`SourceList`]: every source configured for a case.

use crate::context::SourceContext;
use crate::registry::SourceRegistry;
use crate::source::FvSource;
use fvopts_core::{ConfigError, Dictionary, SolverTime, SourceError, VectorEquation, VolScalarField};

/// Outcome of [`SourceList::read`].
#[derive(Debug, Default)]
pub struct ReloadReport {
    /// Sources that took their new configuration.
    pub reloaded: usize,
    /// Sources that kept their previous configuration, with the reason.
    pub failed: Vec<ConfigError>,
}

impl ReloadReport {
    /// Whether every source reloaded.
    pub fn is_ok(&self) -> bool {
        self.failed.is_empty()
    }
}

/// An ordered collection of sources, applied together to each equation.
///
/// Built from a dictionary whose sub-dictionaries are source blocks; other
/// entries are ignored. Sources are applied in configuration order, only
/// while [`active`](FvSource::is_active) and only to equations for a field
/// they list.
pub struct SourceList<'a> {
    sources: Vec<Box<dyn FvSource + 'a>>,
    applied: Vec<bool>,
}

impl<'a> SourceList<'a> {
    /// Construct every source block in `dict`.
    ///
    /// # Errors
    ///
    /// The first block that fails to construct.
    pub fn new(dict: &Dictionary, registry: &SourceRegistry, ctx: SourceContext<'a>) -> Result<Self, ConfigError> {
        let sources = dict
            .sub_dicts()
            .map(|(name, block)| registry.new_source(name, block, ctx))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::info!(count = sources.len(), "constructed finite volume sources");
        Ok(Self::from_sources(sources))
    }

    /// Wrap already-built sources.
    pub fn from_sources(sources: Vec<Box<dyn FvSource + 'a>>) -> Self {
        let applied = vec![false; sources.len()];
        Self { sources, applied }
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// The sources, in order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn FvSource + 'a)> {
        self.sources.iter().map(|s| s.as_ref())
    }

    /// Source called `name`.
    pub fn get(&self, name: &str) -> Option<&(dyn FvSource + 'a)> {
        self.iter().find(|s| s.name() == name)
    }

    /// Whether any source applies to `field_name`.
    pub fn applies_to_field(&self, field_name: &str) -> bool {
        self.sources
            .iter()
            .any(|s| s.applies_to_field(field_name).is_some())
    }

    /// Apply every relevant source's incompressible form.
    ///
    /// Stops at the first failing source; earlier sources' contributions
    /// remain in the equation.
    pub fn add_sup(&mut self, time: &SolverTime, eqn: &mut dyn VectorEquation) -> Result<(), SourceError> {
        self.apply(time, eqn, |source, eqn, fieldi| source.add_sup(time, eqn, fieldi))
    }

    /// Apply every relevant source's compressible form.
    pub fn add_rho_sup(
        &mut self,
        time: &SolverTime,
        rho: &VolScalarField,
        eqn: &mut dyn VectorEquation,
    ) -> Result<(), SourceError> {
        self.apply(time, eqn, |source, eqn, fieldi| {
            source.add_rho_sup(time, rho, eqn, fieldi)
        })
    }

    /// Apply every relevant source's multiphase form.
    pub fn add_alpha_rho_sup(
        &mut self,
        time: &SolverTime,
        alpha: &VolScalarField,
        rho: &VolScalarField,
        eqn: &mut dyn VectorEquation,
    ) -> Result<(), SourceError> {
        self.apply(time, eqn, |source, eqn, fieldi| {
            source.add_alpha_rho_sup(time, alpha, rho, eqn, fieldi)
        })
    }

    fn apply(
        &mut self,
        time: &SolverTime,
        eqn: &mut dyn VectorEquation,
        mut call: impl FnMut(&dyn FvSource, &mut dyn VectorEquation, usize) -> Result<(), SourceError>,
    ) -> Result<(), SourceError> {
        let field = eqn.field_name().to_string();
        for (source, applied) in self.sources.iter().zip(self.applied.iter_mut()) {
            if !source.is_active(time) {
                continue;
            }
            let Some(fieldi) = source.applies_to_field(&field) else {
                continue;
            };
            tracing::trace!(source = source.name(), field = %field, "applying source");
            match call(source.as_ref(), eqn, fieldi) {
                Ok(()) => *applied = true,
                Err(SourceError::Unsupported { source: name, form }) => {
                    tracing::debug!(source = %name, form, field = %field, "entry point not implemented, skipped");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Reconfigure each source from the block of the same name in `dict`.
    ///
    /// A source whose block is missing or invalid keeps its previous
    /// configuration; the others still reload.
    pub fn read(&mut self, dict: &Dictionary) -> ReloadReport {
        let mut report = ReloadReport::default();
        for source in &mut self.sources {
            let result = dict
                .lookup_dict(source.name())
                .map_err(|reason| ConfigError::Dict {
                    instance: source.name().to_string(),
                    reason,
                })
                .and_then(|block| source.read(block));
            match result {
                Ok(()) => report.reloaded += 1,
                Err(e) => {
                    tracing::warn!(source = source.name(), error = %e, "reload failed, keeping previous configuration");
                    report.failed.push(e);
                }
            }
        }
        report
    }

    /// Names of sources that have not been applied to any equation yet,
    /// each logged at warn level.
    pub fn check_applied(&self) -> Vec<&str> {
        let mut unapplied = Vec::new();
        for (source, &applied) in self.sources.iter().zip(&self.applied) {
            if !applied {
                tracing::warn!(
                    source = source.name(),
                    fields = ?source.field_names(),
                    "source has not been applied"
                );
                unapplied.push(source.name());
            }
        }
        unapplied
    }
}

impl std::fmt::Debug for SourceList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sources.iter().map(|s| (s.name(), s.type_name())))
            .finish()
    }
}
