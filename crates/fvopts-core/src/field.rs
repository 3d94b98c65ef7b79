//! Per-cell scalar fields supplied by the host solver.

/// A named cell-centred scalar field, e.g. density `rho` or a phase
/// fraction `alpha.water`.
///
/// Sources only ever read these; the host owns and updates them.
#[derive(Clone, Debug, PartialEq)]
pub struct VolScalarField {
    name: String,
    values: Vec<f64>,
}

impl VolScalarField {
    /// Wrap existing per-cell values.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// A field holding `value` in each of `cell_count` cells.
    pub fn uniform(name: impl Into<String>, cell_count: usize, value: f64) -> Self {
        Self::new(name, vec![value; cell_count])
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-cell values, indexed by cell.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mutable per-cell values, for the host to update between iterations.
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the field has no cells.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::ops::Index<usize> for VolScalarField {
    type Output = f64;

    fn index(&self, cell: usize) -> &f64 {
        &self.values[cell]
    }
}
