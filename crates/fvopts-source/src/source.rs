//! The [`FvSource`] trait.

use fvopts_core::{ConfigError, Dictionary, SolverTime, SourceError, VectorEquation, VolScalarField};

/// A cell-scoped source-term model for vector equations.
///
/// # Contract
///
/// - The three `add_*sup` entry points agree: with `rho ≡ 1` and
///   `alpha ≡ 1` they produce identical contributions.
/// - Each call evaluates the model's time-varying parameters once, at
///   `time`.
/// - A call that returns `Err` has not modified the equation.
/// - Only the equation is mutated. Repeated calls recompute from inputs.
/// - Activity (`is_active`) is the caller's concern; the entry points apply
///   the source unconditionally. [`SourceList`](crate::SourceList) checks it.
///
/// `fieldi` is the position of the equation's field in
/// [`field_names`](Self::field_names), as returned by
/// [`applies_to_field`](Self::applies_to_field).
///
/// The entry points default to returning [`SourceError::Unsupported`]
/// without touching the equation, so a model supports only the
/// representations it overrides.
///
/// # Object safety
///
/// This trait is object-safe; registries produce `Box<dyn FvSource + 'a>`.
pub trait FvSource {
    /// Instance name from the configuration.
    fn name(&self) -> &str;

    /// Registered type name.
    fn type_name(&self) -> &'static str;

    /// Fields this source applies to.
    fn field_names(&self) -> &[String];

    /// Position of `field_name` in [`field_names`](Self::field_names).
    fn applies_to_field(&self, field_name: &str) -> Option<usize> {
        self.field_names().iter().position(|f| f == field_name)
    }

    /// Whether the source should be applied at `time`.
    fn is_active(&self, _time: &SolverTime) -> bool {
        true
    }

    /// Incompressible form: contribution `v V(c)`.
    fn add_sup(
        &self,
        _time: &SolverTime,
        _eqn: &mut dyn VectorEquation,
        _fieldi: usize,
    ) -> Result<(), SourceError> {
        Err(SourceError::Unsupported {
            source: self.name().to_string(),
            form: "addSup",
        })
    }

    /// Compressible form: contribution `v V(c) rho(c)`.
    fn add_rho_sup(
        &self,
        _time: &SolverTime,
        _rho: &VolScalarField,
        _eqn: &mut dyn VectorEquation,
        _fieldi: usize,
    ) -> Result<(), SourceError> {
        Err(SourceError::Unsupported {
            source: self.name().to_string(),
            form: "addRhoSup",
        })
    }

    /// Multiphase form: contribution `v V(c) rho(c) alpha(c)`.
    fn add_alpha_rho_sup(
        &self,
        _time: &SolverTime,
        _alpha: &VolScalarField,
        _rho: &VolScalarField,
        _eqn: &mut dyn VectorEquation,
        _fieldi: usize,
    ) -> Result<(), SourceError> {
        Err(SourceError::Unsupported {
            source: self.name().to_string(),
            form: "addAlphaRhoSup",
        })
    }

    /// Reconfigure from `dict`.
    ///
    /// Either the whole new configuration is applied or, on `Err`, none of
    /// it is.
    fn read(&mut self, dict: &Dictionary) -> Result<(), ConfigError>;
}
