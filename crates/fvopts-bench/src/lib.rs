//! Benchmark profiles for fvopts.
//!
//! - [`reference_mesh`]: 100K cells with graded volumes and a 10% zone
//! - [`reference_options`]: ramped acceleration over all cells plus a
//!   constant one on the zone
//! - [`density_field`]: a deterministic non-uniform density

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fvopts_core::{Dictionary, SelectionError, Vector, VolScalarField};
use fvopts_selection::SelectionCatalog;

/// Cells in the reference mesh.
pub const REFERENCE_CELLS: usize = 100_000;

/// Mesh of `cells` cells with volumes cycling through `1e-3 * (1..=8)`,
/// and a zone `porous` covering every tenth cell.
pub fn reference_mesh(cells: usize) -> Result<SelectionCatalog, SelectionError> {
    let volumes = (0..cells).map(|i| 1e-3 * ((i % 8) + 1) as f64).collect();
    SelectionCatalog::new(volumes)?.with_zone("porous", (0..cells).step_by(10).collect())
}

/// Two sources: a ramped all-cell acceleration on `U` and a constant one on
/// zone `porous`.
pub fn reference_options() -> Dictionary {
    Dictionary::new("fvOptions")
        .with(
            "ramped",
            Dictionary::new("ramped")
                .with("type", "accelerationSource")
                .with("selectionMode", "all")
                .with("velocity", "scale")
                .with("value", Vector::new(-2.572, 0.0, 0.0))
                .with(
                    "scale",
                    Dictionary::new("scale")
                        .with("type", "halfCosineRamp")
                        .with("duration", 10.0),
                ),
        )
        .with(
            "porous",
            Dictionary::new("porous")
                .with("type", "accelerationSource")
                .with("selectionMode", "cellZone")
                .with("cellZone", "porous")
                .with("velocity", Vector::new(0.0, 0.0, -9.81)),
        )
}

/// Density varying smoothly between 1 and 2 over `cells` cells.
pub fn density_field(cells: usize) -> VolScalarField {
    let values = (0..cells)
        .map(|i| 1.5 + 0.5 * (i as f64 * 1e-3).sin())
        .collect();
    VolScalarField::new("rho", values)
}
