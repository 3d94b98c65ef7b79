//! [`SelectionCatalog`]: a host-side store of named selections.

use crate::provider::SelectionProvider;
use crate::selection::CellSelection;
use crate::spec::SelectionSpec;
use fvopts_core::SelectionError;
use indexmap::IndexMap;

/// Mesh cell volumes plus named cell zones and sets.
///
/// # Examples
///
/// ```
/// use fvopts_selection::{SelectionCatalog, SelectionProvider, SelectionSpec};
///
/// let catalog = SelectionCatalog::new(vec![1.0, 2.0, 3.0])
///     .unwrap()
///     .with_zone("porosity", vec![1, 2])
///     .unwrap();
///
/// let zone = catalog.select(&SelectionSpec::CellZone("porosity".into())).unwrap();
/// assert_eq!(zone.total_volume(), 5.0);
/// assert_eq!(catalog.select(&SelectionSpec::All).unwrap().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct SelectionCatalog {
    volumes: Vec<f64>,
    all: CellSelection,
    zones: IndexMap<String, CellSelection>,
    sets: IndexMap<String, CellSelection>,
}

impl SelectionCatalog {
    /// A catalog over a mesh with the given cell volumes.
    ///
    /// # Errors
    ///
    /// [`SelectionError::InvalidVolume`] for a non-finite or non-positive volume.
    pub fn new(volumes: Vec<f64>) -> Result<Self, SelectionError> {
        let all = CellSelection::all(&volumes)?;
        Ok(Self {
            volumes,
            all,
            zones: IndexMap::new(),
            sets: IndexMap::new(),
        })
    }

    /// A mesh of `cell_count` cells of equal `volume`.
    pub fn uniform(cell_count: usize, volume: f64) -> Result<Self, SelectionError> {
        Self::new(vec![volume; cell_count])
    }

    /// Add (or replace) a named cell zone.
    pub fn with_zone(mut self, name: impl Into<String>, cells: Vec<usize>) -> Result<Self, SelectionError> {
        let selection = CellSelection::new(cells, &self.volumes)?;
        self.zones.insert(name.into(), selection);
        Ok(self)
    }

    /// Add (or replace) a named cell set.
    pub fn with_set(mut self, name: impl Into<String>, cells: Vec<usize>) -> Result<Self, SelectionError> {
        let selection = CellSelection::new(cells, &self.volumes)?;
        self.sets.insert(name.into(), selection);
        Ok(self)
    }

    /// Mesh cell volumes.
    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    /// Zone names in insertion order.
    pub fn zone_names(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }

    /// Set names in insertion order.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

impl SelectionProvider for SelectionCatalog {
    fn cell_count(&self) -> usize {
        self.volumes.len()
    }

    fn select(&self, spec: &SelectionSpec) -> Result<&CellSelection, SelectionError> {
        match spec {
            SelectionSpec::All => Ok(&self.all),
            SelectionSpec::CellZone(name) => {
                self.zones
                    .get(name)
                    .ok_or_else(|| SelectionError::UnknownZone {
                        name: name.clone(),
                        known: self.zones.keys().cloned().collect(),
                    })
            }
            SelectionSpec::CellSet(name) => {
                self.sets
                    .get(name)
                    .ok_or_else(|| SelectionError::UnknownSet {
                        name: name.clone(),
                        known: self.sets.keys().cloned().collect(),
                    })
            }
        }
    }
}
