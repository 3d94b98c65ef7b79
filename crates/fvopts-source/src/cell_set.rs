//! [`CellSetOption`]: configuration shared by every cell-scoped source.

use crate::weight::MassWeight;
use fvopts_core::{ConfigError, Dictionary, SolverTime, SourceError, Vector, VectorEquation};
use fvopts_selection::{CellSelection, SelectionProvider, SelectionSpec};
use smallvec::SmallVec;

/// An interval `[start, start + duration]` outside which a source is inactive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    start: f64,
    duration: f64,
}

impl TimeWindow {
    /// A window starting at `start`, lasting `duration`.
    ///
    /// Returns `None` unless both are finite and `duration >= 0`.
    pub fn new(start: f64, duration: f64) -> Option<Self> {
        (start.is_finite() && duration.is_finite() && duration >= 0.0).then_some(Self { start, duration })
    }

    /// Window start.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Window end.
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }

    /// Whether `t` lies in the window, both ends included.
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start && t <= self.end()
    }
}

/// Selected cells, target fields and activity of one source instance.
///
/// Reads these keys:
///
/// | key | default | |
/// |---|---|---|
/// | `selectionMode` | required | `all`, `cellZone` or `cellSet` |
/// | `cellZone` / `cellSet` | required by the mode | |
/// | `active` | `true` | |
/// | `timeStart` | none | opens a window |
/// | `duration` | required with `timeStart` | read only when `timeStart` is given |
///
/// The selection is borrowed from the [`SelectionProvider`] for `'a`.
#[derive(Clone, Debug)]
pub struct CellSetOption<'a> {
    name: String,
    spec: SelectionSpec,
    selection: &'a CellSelection,
    field_names: SmallVec<[String; 1]>,
    active: bool,
    window: Option<TimeWindow>,
}

impl<'a> CellSetOption<'a> {
    /// Resolve `spec` against `selections`, for the given target fields.
    pub fn new(
        name: &str,
        spec: SelectionSpec,
        selections: &'a dyn SelectionProvider,
        field_names: SmallVec<[String; 1]>,
    ) -> Result<Self, ConfigError> {
        let selection = selections
            .select(&spec)
            .map_err(|reason| ConfigError::Selection {
                instance: name.to_string(),
                reason,
            })?;
        tracing::debug!(
            source = name,
            selection = %spec,
            cells = selection.len(),
            volume = selection.total_volume(),
            "selected cells"
        );
        Ok(Self {
            name: name.to_string(),
            spec,
            selection,
            field_names,
            active: true,
            window: None,
        })
    }

    /// Read the selection and activity keys from `dict`.
    pub fn from_dict(
        name: &str,
        dict: &Dictionary,
        selections: &'a dyn SelectionProvider,
        field_names: SmallVec<[String; 1]>,
    ) -> Result<Self, ConfigError> {
        let spec = SelectionSpec::from_dict(dict).map_err(|reason| ConfigError::Selection {
            instance: name.to_string(),
            reason,
        })?;
        let dict_err = |reason| ConfigError::Dict {
            instance: name.to_string(),
            reason,
        };
        let active = dict.lookup_bool_or("active", true).map_err(dict_err)?;
        // `duration` belongs to the window only when `timeStart` is given;
        // otherwise it is left for flat function coefficients such as a ramp's.
        let window = match dict.lookup_optional_scalar("timeStart").map_err(dict_err)? {
            None => None,
            Some(start) => {
                let duration = dict.lookup_scalar("duration").map_err(dict_err)?;
                Some(checked_window(name, start, duration)?)
            }
        };

        Ok(Self::new(name, spec, selections, field_names)?
            .with_active(active)
            .with_window(window))
    }

    /// Switch the source on or off.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Restrict the source to a time window, or lift the restriction.
    pub fn with_window(mut self, window: Option<TimeWindow>) -> Self {
        self.window = window;
        self
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The configured selection.
    pub fn spec(&self) -> &SelectionSpec {
        &self.spec
    }

    /// The resolved cells.
    pub fn selection(&self) -> &'a CellSelection {
        self.selection
    }

    /// Target field names.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    /// The activity window, if any.
    pub fn window(&self) -> Option<TimeWindow> {
        self.window
    }

    /// Switched on, and inside the window if there is one.
    pub fn is_active(&self, time: &SolverTime) -> bool {
        self.active && self.window.is_none_or(|w| w.contains(time.value()))
    }

    /// Check a call's inputs against the equation before touching it.
    pub fn check(
        &self,
        eqn: &dyn VectorEquation,
        fieldi: usize,
        weight: &MassWeight<'_>,
    ) -> Result<(), SourceError> {
        let expected = self
            .field_names
            .get(fieldi)
            .ok_or_else(|| SourceError::FieldIndexOutOfRange {
                source: self.name.clone(),
                fieldi,
                field_count: self.field_names.len(),
            })?;
        if eqn.field_name() != expected {
            return Err(SourceError::FieldMismatch {
                source: self.name.clone(),
                expected: expected.clone(),
                found: eqn.field_name().to_string(),
            });
        }
        let cell_count = eqn.cell_count();
        if let Some(cell) = self.selection.max_cell().filter(|&c| c >= cell_count) {
            return Err(SourceError::CellOutOfRange {
                source: self.name.clone(),
                cell,
                cell_count,
            });
        }
        weight.check_len(&self.name, cell_count)
    }

    /// Add `v V(c) w(c)` for every selected cell.
    ///
    /// Inputs must already have passed [`check`](Self::check).
    pub fn add_uniform(&self, v: Vector, eqn: &mut dyn VectorEquation, weight: &MassWeight<'_>) {
        for (cell, volume) in self.selection.iter() {
            eqn.add_source(cell, v * (volume * weight.at(cell)));
        }
    }
}

pub(crate) fn checked_window(instance: &str, start: f64, duration: f64) -> Result<TimeWindow, ConfigError> {
    TimeWindow::new(start, duration).ok_or_else(|| ConfigError::InvalidValue {
        instance: instance.to_string(),
        key: "duration".to_string(),
        reason: format!("must be finite and >= 0 with a finite timeStart, got timeStart {start}, duration {duration}"),
    })
}
