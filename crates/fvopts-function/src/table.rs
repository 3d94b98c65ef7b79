//! Piecewise-linear interpolation over `(x, y)` rows.

use crate::function::Function1;
use fvopts_core::{Dictionary, FunctionError};

/// What a [`Table`] returns outside its first and last rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutOfBounds {
    /// Hold the first/last value.
    #[default]
    Clamp,
    /// Treat the table as periodic over `[x_first, x_last]`.
    Repeat,
}

impl OutOfBounds {
    fn parse(word: &str) -> Option<Self> {
        match word {
            "clamp" => Some(Self::Clamp),
            "repeat" => Some(Self::Repeat),
            _ => None,
        }
    }
}

/// Linear interpolation between tabulated rows.
///
/// Coefficients: `values ((x0 y0) (x1 y1) ...)` with strictly increasing
/// `x`, and `outOfBounds clamp | repeat` (default `clamp`).
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    rows: Vec<(f64, f64)>,
    out_of_bounds: OutOfBounds,
}

impl Table {
    /// Build from rows, validating ordering and finiteness.
    ///
    /// # Errors
    ///
    /// [`FunctionError::InvalidCoefficient`] for an empty table, a
    /// non-finite entry, or `x` values that are not strictly increasing.
    pub fn new(rows: Vec<(f64, f64)>, out_of_bounds: OutOfBounds) -> Result<Self, FunctionError> {
        let invalid = |reason: String| FunctionError::InvalidCoefficient {
            function: "table".to_string(),
            key: "values".to_string(),
            reason,
        };
        if rows.is_empty() {
            return Err(invalid("must contain at least one row".to_string()));
        }
        for (i, &(x, y)) in rows.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(invalid(format!("row {i} is not finite: ({x} {y})")));
            }
            if i > 0 && x <= rows[i - 1].0 {
                return Err(invalid(format!(
                    "x must be strictly increasing, row {i} has {x} after {}",
                    rows[i - 1].0
                )));
            }
        }
        Ok(Self {
            rows,
            out_of_bounds,
        })
    }

    /// Read `values` and `outOfBounds` from a dictionary.
    pub fn from_dict(dict: &Dictionary) -> Result<Self, FunctionError> {
        let rows = dict.lookup_pairs("values")?;
        let mode = dict.lookup_word_or("outOfBounds", "clamp")?;
        let out_of_bounds = OutOfBounds::parse(&mode).ok_or_else(|| {
            dict.invalid("outOfBounds", format!("unknown mode '{mode}' (clamp, repeat)"))
        })?;
        Self::new(rows, out_of_bounds)
    }

    /// The tabulated rows.
    pub fn rows(&self) -> &[(f64, f64)] {
        &self.rows
    }

    fn wrap(&self, x: f64) -> f64 {
        let (x0, _) = self.rows[0];
        let (x1, _) = self.rows[self.rows.len() - 1];
        let period = x1 - x0;
        if period <= 0.0 {
            return x0;
        }
        x0 + (x - x0).rem_euclid(period)
    }
}

impl Function1<f64> for Table {
    fn type_name(&self) -> &'static str {
        "table"
    }

    fn value(&self, x: f64) -> f64 {
        let x = match self.out_of_bounds {
            OutOfBounds::Clamp => x,
            OutOfBounds::Repeat => self.wrap(x),
        };
        let first = self.rows[0];
        let last = self.rows[self.rows.len() - 1];
        if x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }
        // First row with x_i > x; guaranteed in 1..len by the checks above.
        let hi = self.rows.partition_point(|&(xi, _)| xi <= x);
        let (xa, ya) = self.rows[hi - 1];
        let (xb, yb) = self.rows[hi];
        ya + (yb - ya) * (x - xa) / (xb - xa)
    }
}
