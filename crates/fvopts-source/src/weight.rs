//! [`MassWeight`]: the per-cell factor distinguishing the three entry points.

use fvopts_core::{SourceError, VolScalarField};
use smallvec::SmallVec;

/// Per-cell mass weighting applied on top of the cell volume.
#[derive(Clone, Copy, Debug)]
pub enum MassWeight<'f> {
    /// Incompressible: weight 1.
    Unit,
    /// Compressible: weight `rho(c)`.
    Density(&'f VolScalarField),
    /// Multiphase: weight `alpha(c) rho(c)`.
    PhaseDensity {
        /// Phase fraction.
        alpha: &'f VolScalarField,
        /// Phase density.
        rho: &'f VolScalarField,
    },
}

impl MassWeight<'_> {
    /// Weight at `cell`.
    ///
    /// `Unit` is exactly `1.0`, and `alpha * rho` with both equal to one is
    /// exactly `1.0`, so the degenerate forms agree bit for bit.
    #[inline]
    pub fn at(&self, cell: usize) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::Density(rho) => rho[cell],
            Self::PhaseDensity { alpha, rho } => alpha[cell] * rho[cell],
        }
    }

    /// The fields read by this weight.
    pub fn fields(&self) -> SmallVec<[&VolScalarField; 2]> {
        match *self {
            Self::Unit => SmallVec::new(),
            Self::Density(rho) => smallvec::smallvec![rho],
            Self::PhaseDensity { alpha, rho } => smallvec::smallvec![alpha, rho],
        }
    }

    /// Check that every weighting field has one value per equation cell.
    pub fn check_len(&self, source: &str, cell_count: usize) -> Result<(), SourceError> {
        for field in self.fields() {
            if field.len() != cell_count {
                return Err(SourceError::FieldSizeMismatch {
                    source: source.to_string(),
                    field: field.name().to_string(),
                    expected: cell_count,
                    found: field.len(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_per_cell() {
        let rho = VolScalarField::new("rho", vec![1.2, 0.8]);
        let alpha = VolScalarField::new("alpha.water", vec![0.5, 0.25]);
        assert_eq!(MassWeight::Unit.at(1), 1.0);
        assert_eq!(MassWeight::Density(&rho).at(0), 1.2);
        assert_eq!(MassWeight::PhaseDensity { alpha: &alpha, rho: &rho }.at(1), 0.2);
    }

    #[test]
    fn unit_fields_are_exact_one() {
        let one = VolScalarField::uniform("one", 3, 1.0);
        let w = MassWeight::PhaseDensity { alpha: &one, rho: &one };
        assert_eq!(w.at(2).to_bits(), MassWeight::Unit.at(2).to_bits());
    }

    #[test]
    fn size_check_names_field() {
        let rho = VolScalarField::uniform("rho", 2, 1.0);
        let alpha = VolScalarField::uniform("alpha.air", 3, 1.0);
        let w = MassWeight::PhaseDensity { alpha: &alpha, rho: &rho };
        assert!(MassWeight::Unit.check_len("s", 3).is_ok());
        assert_eq!(
            w.check_len("s", 3),
            Err(SourceError::FieldSizeMismatch {
                source: "s".into(),
                field: "rho".into(),
                expected: 3,
                found: 2,
            })
        );
    }
}
