//! The seam between source-term models and the host solver's matrix.

use crate::vector::Vector;

/// Additive access to the explicit source of a discretised vector equation.
///
/// Implemented by the host solver's matrix type. A source term only ever
/// adds per-cell contributions; it never reads back or clears the source.
/// Contributions to distinct cells are independent, so implementations
/// backed by a flat per-cell array may accept them in any order.
pub trait VectorEquation {
    /// Name of the field this equation solves for (e.g. `"U"` or `"U.air"`).
    fn field_name(&self) -> &str;

    /// Number of cells (rows) in the equation.
    fn cell_count(&self) -> usize;

    /// Add `contribution` to the explicit source at `cell`.
    ///
    /// `cell` is below [`cell_count`](Self::cell_count); callers check this
    /// before the first call of a batch.
    fn add_source(&mut self, cell: usize, contribution: Vector);
}
