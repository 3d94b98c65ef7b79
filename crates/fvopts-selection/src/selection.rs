//! [`CellSelection`]: selected cells and their volumes.

use fvopts_core::SelectionError;

/// An immutable set of cell indices with the volume of each cell.
///
/// Cells keep the order they were given in; contributions are applied in
/// that order.
#[derive(Clone, Debug, PartialEq)]
pub struct CellSelection {
    cells: Vec<usize>,
    volumes: Vec<f64>,
}

impl CellSelection {
    /// Select `cells` from a mesh whose cell volumes are `mesh_volumes`.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::CellOutOfRange`] if a cell is not below
    ///   `mesh_volumes.len()`.
    /// - [`SelectionError::DuplicateCell`] if a cell appears twice.
    /// - [`SelectionError::InvalidVolume`] if a selected cell's volume is
    ///   non-finite or not positive.
    pub fn new(cells: Vec<usize>, mesh_volumes: &[f64]) -> Result<Self, SelectionError> {
        let cell_count = mesh_volumes.len();
        let mut seen = vec![false; cell_count];
        let mut volumes = Vec::with_capacity(cells.len());
        for &cell in &cells {
            if cell >= cell_count {
                return Err(SelectionError::CellOutOfRange { cell, cell_count });
            }
            if seen[cell] {
                return Err(SelectionError::DuplicateCell { cell });
            }
            seen[cell] = true;
            let volume = mesh_volumes[cell];
            if !volume.is_finite() || volume <= 0.0 {
                return Err(SelectionError::InvalidVolume { cell, volume });
            }
            volumes.push(volume);
        }
        Ok(Self { cells, volumes })
    }

    /// Every cell of the mesh, in index order.
    pub fn all(mesh_volumes: &[f64]) -> Result<Self, SelectionError> {
        Self::new((0..mesh_volumes.len()).collect(), mesh_volumes)
    }

    /// A selection with no cells.
    pub fn empty() -> Self {
        Self {
            cells: Vec::new(),
            volumes: Vec::new(),
        }
    }

    /// Selected cell indices.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Volume of each selected cell, parallel to [`cells`](Self::cells).
    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    /// `(cell, volume)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.cells.iter().copied().zip(self.volumes.iter().copied())
    }

    /// Number of selected cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells are selected.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of selected cell volumes.
    pub fn total_volume(&self) -> f64 {
        self.volumes.iter().sum()
    }

    /// Largest selected cell index, if any.
    pub fn max_cell(&self) -> Option<usize> {
        self.cells.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_volumes() {
        let vols = [1.0, 2.0, 3.0, 4.0];
        let s = CellSelection::new(vec![3, 0, 2], &vols).unwrap();
        assert_eq!(s.cells(), &[3, 0, 2]);
        assert_eq!(s.volumes(), &[4.0, 1.0, 3.0]);
        assert_eq!(s.total_volume(), 8.0);
        assert_eq!(s.max_cell(), Some(3));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![(3, 4.0), (0, 1.0), (2, 3.0)]);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            CellSelection::new(vec![0, 5], &[1.0; 3]),
            Err(SelectionError::CellOutOfRange {
                cell: 5,
                cell_count: 3
            })
        );
    }

    #[test]
    fn rejects_duplicates() {
        assert_eq!(
            CellSelection::new(vec![1, 2, 1], &[1.0; 3]),
            Err(SelectionError::DuplicateCell { cell: 1 })
        );
    }

    #[test]
    fn rejects_bad_volume() {
        assert!(matches!(
            CellSelection::new(vec![0, 1], &[1.0, 0.0]),
            Err(SelectionError::InvalidVolume { cell: 1, .. })
        ));
    }

    #[test]
    fn empty_selection() {
        let s = CellSelection::empty();
        assert!(s.is_empty());
        assert_eq!(s.max_cell(), None);
        assert_eq!(s.total_volume(), 0.0);
        assert_eq!(CellSelection::new(Vec::new(), &[]).unwrap(), s);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn all_covers_every_cell(vols in prop::collection::vec(0.001f64..10.0, 0..64)) {
                let s = CellSelection::all(&vols).unwrap();
                prop_assert_eq!(s.len(), vols.len());
                prop_assert_eq!(s.volumes(), vols.as_slice());
                prop_assert!((s.total_volume() - vols.iter().sum::<f64>()).abs() < 1e-9);
            }
        }
    }
}
