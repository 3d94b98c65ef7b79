//! The [`SelectionProvider`] seam.

use crate::selection::CellSelection;
use crate::spec::SelectionSpec;
use fvopts_core::SelectionError;

/// Resolves a [`SelectionSpec`] to the cells it covers.
///
/// Implemented by whatever owns the mesh. Selections are borrowed from the
/// provider, so sources built against it cannot outlive it.
pub trait SelectionProvider {
    /// Number of cells in the mesh.
    fn cell_count(&self) -> usize;

    /// The selection for `spec`.
    ///
    /// # Errors
    ///
    /// [`SelectionError::UnknownZone`] / [`SelectionError::UnknownSet`] if
    /// the name is not known, or [`SelectionError::UnsupportedMode`] if the
    /// provider cannot resolve that kind of selection.
    fn select(&self, spec: &SelectionSpec) -> Result<&CellSelection, SelectionError>;
}
