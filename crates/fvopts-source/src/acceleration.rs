//! [`AccelerationSource`]: a uniform, time-varying body acceleration.
//!
//! Configuration:
//!
//! ```text
//! accelerationSource1
//! {
//!     type            accelerationSource;
//!     selectionMode   all;
//!     U               U;
//!     velocity        scale;
//!     value           (-2.572 0 0);
//!     scale
//!     {
//!         type        halfCosineRamp;
//!         start       0;
//!         duration    10;
//!     }
//! }
//! ```
//!
//! `velocity` accepts anything [`FunctionLibrary::vector`] does: a literal
//! vector, a sub-dictionary with a `type`, or a type name whose
//! coefficients sit alongside it (as above).

use crate::cell_set::{checked_window, CellSetOption};
use crate::context::SourceContext;
use crate::source::FvSource;
use crate::weight::MassWeight;
use fvopts_core::{
    ConfigError, Dictionary, SolverTime, SourceError, Vector, VectorEquation, VolScalarField,
};
use fvopts_function::{Function1, FunctionLibrary};
use fvopts_selection::{CellSelection, SelectionSpec};
use smallvec::smallvec;

/// Adds `v(t) V(c)`, weighted by density and phase fraction where given,
/// to every selected cell of the velocity equation.
pub struct AccelerationSource<'a> {
    name: String,
    ctx: SourceContext<'a>,
    state: AccelerationState<'a>,
}

// Everything derived from configuration; replaced as a unit by `read`.
struct AccelerationState<'a> {
    cells: CellSetOption<'a>,
    velocity: Box<dyn Function1<Vector>>,
}

impl<'a> AccelerationSource<'a> {
    /// Registered type name.
    pub const TYPE_NAME: &'static str = "accelerationSource";

    /// Build from a configuration block.
    ///
    /// # Errors
    ///
    /// A [`ConfigError`] naming `name` and the offending key if the
    /// selection, field name or velocity function is missing or invalid.
    pub fn new(name: impl Into<String>, dict: &Dictionary, ctx: SourceContext<'a>) -> Result<Self, ConfigError> {
        let name = name.into();
        let state = AccelerationState::from_dict(&name, dict, ctx)?;
        Ok(Self { name, ctx, state })
    }

    /// Start a programmatic builder.
    pub fn builder(name: impl Into<String>, ctx: SourceContext<'a>) -> AccelerationSourceBuilder<'a> {
        AccelerationSourceBuilder {
            name: name.into(),
            ctx,
            selection: SelectionSpec::All,
            field: "U".to_string(),
            velocity: None,
            active: true,
            window: None,
        }
    }

    /// The velocity function.
    pub fn velocity(&self) -> &dyn Function1<Vector> {
        self.state.velocity.as_ref()
    }

    /// The selected cells.
    pub fn selection(&self) -> &'a CellSelection {
        self.state.cells.selection()
    }

    /// Shared cell-set configuration.
    pub fn cell_set(&self) -> &CellSetOption<'a> {
        &self.state.cells
    }

    fn add_weighted(
        &self,
        time: &SolverTime,
        eqn: &mut dyn VectorEquation,
        fieldi: usize,
        weight: MassWeight<'_>,
    ) -> Result<(), SourceError> {
        let cells = &self.state.cells;
        cells.check(eqn, fieldi, &weight)?;

        let v = self.state.velocity.value(time.value());
        if !v.is_finite() {
            return Err(SourceError::NonFiniteValue {
                source: self.name.clone(),
                time: time.value(),
            });
        }
        cells.add_uniform(v, eqn, &weight);
        Ok(())
    }
}

impl<'a> AccelerationState<'a> {
    fn from_dict(name: &str, dict: &Dictionary, ctx: SourceContext<'a>) -> Result<Self, ConfigError> {
        let field = dict
            .lookup_word_or("U", "U")
            .map_err(|reason| ConfigError::Dict {
                instance: name.to_string(),
                reason,
            })?;
        let cells = CellSetOption::from_dict(name, dict, ctx.selections(), smallvec![field])?;
        let velocity = velocity_function(name, dict, ctx.functions())?;
        Ok(Self { cells, velocity })
    }
}

fn velocity_function(
    name: &str,
    dict: &Dictionary,
    functions: &FunctionLibrary,
) -> Result<Box<dyn Function1<Vector>>, ConfigError> {
    functions
        .vector("velocity", dict)
        .map_err(|reason| ConfigError::Function {
            instance: name.to_string(),
            reason,
        })
}

impl FvSource for AccelerationSource<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn field_names(&self) -> &[String] {
        self.state.cells.field_names()
    }

    fn is_active(&self, time: &SolverTime) -> bool {
        self.state.cells.is_active(time)
    }

    fn add_sup(
        &self,
        time: &SolverTime,
        eqn: &mut dyn VectorEquation,
        fieldi: usize,
    ) -> Result<(), SourceError> {
        self.add_weighted(time, eqn, fieldi, MassWeight::Unit)
    }

    fn add_rho_sup(
        &self,
        time: &SolverTime,
        rho: &VolScalarField,
        eqn: &mut dyn VectorEquation,
        fieldi: usize,
    ) -> Result<(), SourceError> {
        self.add_weighted(time, eqn, fieldi, MassWeight::Density(rho))
    }

    fn add_alpha_rho_sup(
        &self,
        time: &SolverTime,
        alpha: &VolScalarField,
        rho: &VolScalarField,
        eqn: &mut dyn VectorEquation,
        fieldi: usize,
    ) -> Result<(), SourceError> {
        self.add_weighted(time, eqn, fieldi, MassWeight::PhaseDensity { alpha, rho })
    }

    fn read(&mut self, dict: &Dictionary) -> Result<(), ConfigError> {
        let state = AccelerationState::from_dict(&self.name, dict, self.ctx)?;
        self.state = state;
        tracing::debug!(source = %self.name, "reloaded");
        Ok(())
    }
}

impl std::fmt::Debug for AccelerationSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelerationSource")
            .field("name", &self.name)
            .field("cells", &self.state.cells)
            .field("velocity", &self.state.velocity.type_name())
            .finish()
    }
}

/// Builder for [`AccelerationSource`].
///
/// Defaults: all cells, field `U`, active, no time window. The velocity
/// function is required.
pub struct AccelerationSourceBuilder<'a> {
    name: String,
    ctx: SourceContext<'a>,
    selection: SelectionSpec,
    field: String,
    velocity: Option<Box<dyn Function1<Vector>>>,
    active: bool,
    window: Option<(f64, f64)>,
}

impl<'a> AccelerationSourceBuilder<'a> {
    /// Cells to act on (default: all).
    pub fn selection(mut self, spec: SelectionSpec) -> Self {
        self.selection = spec;
        self
    }

    /// Velocity field name (default `U`).
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.field = name.into();
        self
    }

    /// The velocity function. Required.
    pub fn velocity(mut self, f: Box<dyn Function1<Vector>>) -> Self {
        self.velocity = Some(f);
        self
    }

    /// A constant velocity.
    pub fn constant_velocity(self, v: Vector) -> Self {
        self.velocity(Box::new(fvopts_function::Constant::new(v)))
    }

    /// Switch on or off (default on).
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Only act for `start <= t <= start + duration`.
    pub fn window(mut self, start: f64, duration: f64) -> Self {
        self.window = Some((start, duration));
        self
    }

    /// Validate and resolve the selection.
    pub fn build(self) -> Result<AccelerationSource<'a>, ConfigError> {
        let velocity = self.velocity.ok_or_else(|| ConfigError::InvalidValue {
            instance: self.name.clone(),
            key: "velocity".to_string(),
            reason: "is required".to_string(),
        })?;
        let window = self
            .window
            .map(|(start, duration)| checked_window(&self.name, start, duration))
            .transpose()?;
        let cells = CellSetOption::new(
            &self.name,
            self.selection,
            self.ctx.selections(),
            smallvec![self.field],
        )?
        .with_active(self.active)
        .with_window(window);

        Ok(AccelerationSource {
            name: self.name,
            ctx: self.ctx,
            state: AccelerationState { cells, velocity },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fvopts_selection::SelectionCatalog;
    use fvopts_test_utils::{fixtures, RecordingEquation};

    fn lib() -> FunctionLibrary {
        FunctionLibrary::builtin().unwrap()
    }

    #[test]
    fn constant_velocity_scales_by_volume() {
        let (catalog, functions) = (SelectionCatalog::new(vec![2.0, 0.5]).unwrap(), lib());
        let ctx = SourceContext::new(&catalog, &functions);
        let dict = Dictionary::new("accel")
            .with("selectionMode", "all")
            .with("velocity", Vector::new(1.0, 2.0, 0.0));
        let src = AccelerationSource::new("accel", &dict, ctx).unwrap();
        assert_eq!(src.type_name(), "accelerationSource");
        assert_eq!(src.field_names(), &["U".to_string()]);

        let mut eqn = RecordingEquation::new("U", 2);
        src.add_sup(&SolverTime::at(0.0), &mut eqn, 0).unwrap();
        assert_eq!(eqn.source(0), Vector::new(2.0, 4.0, 0.0));
        assert_eq!(eqn.source(1), Vector::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn custom_field_name() {
        let (catalog, functions) = (SelectionCatalog::uniform(1, 1.0).unwrap(), lib());
        let ctx = SourceContext::new(&catalog, &functions);
        let dict = fixtures::acceleration_dict("accel").with("U", "U.water");
        let src = AccelerationSource::new("accel", &dict, ctx).unwrap();
        assert_eq!(src.applies_to_field("U.water"), Some(0));
        assert_eq!(src.applies_to_field("U"), None);
    }

    #[test]
    fn missing_velocity_names_key_and_instance() {
        let (catalog, functions) = (SelectionCatalog::uniform(1, 1.0).unwrap(), lib());
        let ctx = SourceContext::new(&catalog, &functions);
        let dict = fixtures::acceleration_dict("accel").without("velocity");
        let err = AccelerationSource::new("accel", &dict, ctx).unwrap_err();
        assert_eq!(err.instance(), "accel");
        let msg = err.to_string();
        assert!(msg.contains("velocity"), "{msg}");
    }

    #[test]
    fn missing_selection_mode_rejected() {
        let (catalog, functions) = (SelectionCatalog::uniform(1, 1.0).unwrap(), lib());
        let ctx = SourceContext::new(&catalog, &functions);
        let dict = fixtures::acceleration_dict("accel").without("selectionMode");
        assert!(matches!(
            AccelerationSource::new("accel", &dict, ctx),
            Err(ConfigError::Selection { .. })
        ));
    }

    #[test]
    fn invalid_ramp_duration_rejected() {
        let (catalog, functions) = (SelectionCatalog::uniform(1, 1.0).unwrap(), lib());
        let ctx = SourceContext::new(&catalog, &functions);
        let dict = fixtures::acceleration_dict("accel").with(
            "scale",
            Dictionary::new("scale")
                .with("type", "halfCosineRamp")
                .with("duration", 0.0),
        );
        assert!(matches!(
            AccelerationSource::new("accel", &dict, ctx),
            Err(ConfigError::Function { .. })
        ));
    }

    #[test]
    fn builder_requires_velocity() {
        let (catalog, functions) = (SelectionCatalog::uniform(1, 1.0).unwrap(), lib());
        let ctx = SourceContext::new(&catalog, &functions);
        match AccelerationSource::builder("b", ctx).build() {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "velocity"),
            other => panic!("expected missing velocity, got {other:?}"),
        }
    }

    #[test]
    fn builder_matches_dictionary_construction() {
        let catalog = SelectionCatalog::uniform(3, 0.25)
            .unwrap()
            .with_set("inlet", vec![0, 2])
            .unwrap();
        let functions = lib();
        let ctx = SourceContext::new(&catalog, &functions);
        let built = AccelerationSource::builder("a", ctx)
            .selection(SelectionSpec::CellSet("inlet".into()))
            .constant_velocity(Vector::new(4.0, 0.0, 0.0))
            .window(0.0, 1.0)
            .build()
            .unwrap();
        let read = AccelerationSource::new(
            "a",
            &Dictionary::new("a")
                .with("selectionMode", "cellSet")
                .with("cellSet", "inlet")
                .with("velocity", Vector::new(4.0, 0.0, 0.0))
                .with("timeStart", 0.0)
                .with("duration", 1.0),
            ctx,
        )
        .unwrap();

        let t = SolverTime::at(0.5);
        let (mut e1, mut e2) = (RecordingEquation::new("U", 3), RecordingEquation::new("U", 3));
        built.add_sup(&t, &mut e1, 0).unwrap();
        read.add_sup(&t, &mut e2, 0).unwrap();
        assert_eq!(e1.sources(), e2.sources());
        assert_eq!(built.is_active(&SolverTime::at(2.0)), read.is_active(&SolverTime::at(2.0)));
        assert_eq!(built.selection().cells(), &[0, 2]);
    }

    #[test]
    fn non_finite_velocity_leaves_equation_untouched() {
        let (catalog, functions) = (SelectionCatalog::uniform(2, 1.0).unwrap(), lib());
        let ctx = SourceContext::new(&catalog, &functions);
        let src = AccelerationSource::builder("nan", ctx)
            .velocity(Box::new(fixtures::NonFinite))
            .build()
            .unwrap();
        let mut eqn = RecordingEquation::new("U", 2);
        assert!(matches!(
            src.add_sup(&SolverTime::at(1.0), &mut eqn, 0),
            Err(SourceError::NonFiniteValue { .. })
        ));
        assert_eq!(eqn.calls(), 0);
    }
}
