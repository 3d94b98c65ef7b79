//! Reusable meshes, configuration blocks and functions.
//!
//! - [`acceleration_dict`]: the ramped `accelerationSource` block.
//! - [`graded_catalog`]: a small mesh with unequal volumes, a zone and a set.
//! - [`NonFinite`]: a velocity function that always returns NaN.

use fvopts_core::{Dictionary, Vector};
use fvopts_function::Function1;
use fvopts_selection::SelectionCatalog;

/// Target value of the ramped acceleration block.
pub const RAMP_VALUE: Vector = Vector::new(-2.572, 0.0, 0.0);

/// `accelerationSource` over all cells of `U`, ramping `RAMP_VALUE` in
/// with a half-cosine ramp from t = 0 to t = 10.
pub fn acceleration_dict(name: &str) -> Dictionary {
    Dictionary::new(name)
        .with("type", "accelerationSource")
        .with("selectionMode", "all")
        .with("U", "U")
        .with("velocity", "scale")
        .with("value", RAMP_VALUE)
        .with("scale", half_cosine_ramp(0.0, 10.0))
}

/// A `halfCosineRamp` coefficient block.
pub fn half_cosine_ramp(start: f64, duration: f64) -> Dictionary {
    Dictionary::new("scale")
        .with("type", "halfCosineRamp")
        .with("start", start)
        .with("duration", duration)
}

/// A constant-velocity `accelerationSource` on the cells of zone `zone`.
pub fn zone_acceleration_dict(name: &str, zone: &str, velocity: Vector) -> Dictionary {
    Dictionary::new(name)
        .with("type", "accelerationSource")
        .with("selectionMode", "cellZone")
        .with("cellZone", zone)
        .with("velocity", velocity)
}

/// Six cells with volumes `1..=6`; zone `inlet` = cells 0, 1; zone
/// `outlet` = cells 4, 5; set `probe` = cell 3; zone `none` is empty.
pub fn graded_catalog() -> SelectionCatalog {
    SelectionCatalog::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .and_then(|c| c.with_zone("inlet", vec![0, 1]))
        .and_then(|c| c.with_zone("outlet", vec![5, 4]))
        .and_then(|c| c.with_zone("none", Vec::new()))
        .and_then(|c| c.with_set("probe", vec![3]))
        .expect("fixture catalog is valid")
}

/// Always NaN.
#[derive(Clone, Copy, Debug)]
pub struct NonFinite;

impl Function1<Vector> for NonFinite {
    fn type_name(&self) -> &'static str {
        "nonFinite"
    }

    fn value(&self, _x: f64) -> Vector {
        Vector::new(f64::NAN, 0.0, 0.0)
    }
}
