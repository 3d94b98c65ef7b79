//! Sinusoidal oscillation.

use crate::function::Function1;
use fvopts_core::{Dictionary, FunctionError};
use std::f64::consts::TAU;

/// `amplitude * sin(2π frequency (t - start)) + level`.
///
/// Coefficients: `frequency` (required, finite), `amplitude` (default 1),
/// `start` (default 0), `level` (default 0).
#[derive(Clone, Debug, PartialEq)]
pub struct Sine {
    amplitude: f64,
    frequency: f64,
    start: f64,
    level: f64,
}

impl Sine {
    /// Build from coefficients, rejecting non-finite values.
    pub fn new(amplitude: f64, frequency: f64, start: f64, level: f64) -> Result<Self, FunctionError> {
        for (key, v) in [
            ("amplitude", amplitude),
            ("frequency", frequency),
            ("start", start),
            ("level", level),
        ] {
            if !v.is_finite() {
                return Err(FunctionError::InvalidCoefficient {
                    function: "sine".to_string(),
                    key: key.to_string(),
                    reason: format!("must be finite, got {v}"),
                });
            }
        }
        Ok(Self {
            amplitude,
            frequency,
            start,
            level,
        })
    }

    /// Read coefficients from a dictionary.
    pub fn from_dict(dict: &Dictionary) -> Result<Self, FunctionError> {
        Self::new(
            dict.lookup_scalar_or("amplitude", 1.0)?,
            dict.lookup_scalar("frequency")?,
            dict.lookup_scalar_or("start", 0.0)?,
            dict.lookup_scalar_or("level", 0.0)?,
        )
    }
}

impl Function1<f64> for Sine {
    fn type_name(&self) -> &'static str {
        "sine"
    }

    fn value(&self, x: f64) -> f64 {
        self.amplitude * (TAU * self.frequency * (x - self.start)).sin() + self.level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_period_peaks() {
        let f = Sine::new(2.0, 0.5, 0.0, 1.0).unwrap();
        assert!((f.value(0.0) - 1.0).abs() < 1e-12);
        assert!((f.value(0.5) - 3.0).abs() < 1e-12);
        assert!((f.value(1.5) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn from_dict_requires_frequency() {
        let d = Dictionary::new("f").with("amplitude", 3.0);
        assert!(matches!(Sine::from_dict(&d), Err(FunctionError::Dict(_))));
    }

    #[test]
    fn rejects_nan_level() {
        assert!(Sine::new(1.0, 1.0, 0.0, f64::NAN).is_err());
    }
}
