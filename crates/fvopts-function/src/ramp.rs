//! Monotonic ramps from 0 to 1 over a finite interval.

use crate::function::Function1;
use fvopts_core::{Dictionary, FunctionError};
use std::f64::consts::{FRAC_PI_2, PI};

/// Shape of the ramp between `start` and `start + duration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampShape {
    /// `r`
    Linear,
    /// `r²`
    Quadratic,
    /// `0.5 (1 - cos(π r))`, smooth at both ends.
    HalfCosine,
    /// `sin(π r / 2)`, smooth at the end.
    QuarterSine,
    /// `1 - cos(π r / 2)`, smooth at the start.
    QuarterCosine,
}

impl RampShape {
    /// Every shape, in registration order.
    pub const ALL: [RampShape; 5] = [
        Self::Linear,
        Self::Quadratic,
        Self::HalfCosine,
        Self::QuarterSine,
        Self::QuarterCosine,
    ];

    /// Registered type name.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Linear => "linearRamp",
            Self::Quadratic => "quadraticRamp",
            Self::HalfCosine => "halfCosineRamp",
            Self::QuarterSine => "quarterSineRamp",
            Self::QuarterCosine => "quarterCosineRamp",
        }
    }

    fn shape(self, r: f64) -> f64 {
        match self {
            Self::Linear => r,
            Self::Quadratic => r * r,
            Self::HalfCosine => 0.5 * (1.0 - (PI * r).cos()),
            Self::QuarterSine => (FRAC_PI_2 * r).sin(),
            Self::QuarterCosine => 1.0 - (FRAC_PI_2 * r).cos(),
        }
    }
}

/// A ramp that is 0 before `start`, 1 after `start + duration`, and
/// follows its [`RampShape`] in between.
///
/// Coefficients: `start` (default 0), `duration` (required, finite, > 0).
#[derive(Clone, Debug, PartialEq)]
pub struct Ramp {
    shape: RampShape,
    start: f64,
    duration: f64,
}

impl Ramp {
    /// Build a ramp, validating the interval.
    ///
    /// # Errors
    ///
    /// [`FunctionError::InvalidCoefficient`] if `start` is not finite or
    /// `duration` is not finite and positive.
    pub fn new(shape: RampShape, start: f64, duration: f64) -> Result<Self, FunctionError> {
        if !start.is_finite() {
            return Err(FunctionError::InvalidCoefficient {
                function: shape.type_name().to_string(),
                key: "start".to_string(),
                reason: format!("must be finite, got {start}"),
            });
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(FunctionError::InvalidCoefficient {
                function: shape.type_name().to_string(),
                key: "duration".to_string(),
                reason: format!("must be finite and > 0, got {duration}"),
            });
        }
        Ok(Self {
            shape,
            start,
            duration,
        })
    }

    /// Read `start` and `duration` from a coefficient dictionary.
    pub fn from_dict(shape: RampShape, dict: &Dictionary) -> Result<Self, FunctionError> {
        let start = dict.lookup_scalar_or("start", 0.0)?;
        let duration = dict.lookup_scalar("duration")?;
        Self::new(shape, start, duration)
    }

    /// Ramp shape.
    pub fn shape(&self) -> RampShape {
        self.shape
    }

    /// Fraction of the interval elapsed at `t`, clamped to `[0, 1]`.
    pub fn linear_fraction(&self, t: f64) -> f64 {
        ((t - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

impl Function1<f64> for Ramp {
    fn type_name(&self) -> &'static str {
        self.shape.type_name()
    }

    fn value(&self, x: f64) -> f64 {
        self.shape.shape(self.linear_fraction(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn half_cosine_ramp_reference_points() {
        let ramp = Ramp::new(RampShape::HalfCosine, 0.0, 10.0).unwrap();
        assert_eq!(ramp.value(0.0), 0.0);
        assert!((ramp.value(5.0) - 0.5).abs() < EPS);
        assert_eq!(ramp.value(10.0), 1.0);
        assert_eq!(ramp.value(20.0), 1.0);
        assert_eq!(ramp.value(-3.0), 0.0);
    }

    #[test]
    fn every_shape_spans_zero_to_one() {
        for shape in RampShape::ALL {
            let ramp = Ramp::new(shape, 2.0, 4.0).unwrap();
            assert!(ramp.value(2.0).abs() < EPS, "{shape:?} at start");
            assert!((ramp.value(6.0) - 1.0).abs() < EPS, "{shape:?} at end");
            assert_eq!(ramp.type_name(), shape.type_name());
        }
    }

    #[test]
    fn midpoint_values() {
        let mid = |shape| Ramp::new(shape, 0.0, 2.0).unwrap().value(1.0);
        assert!((mid(RampShape::Linear) - 0.5).abs() < EPS);
        assert!((mid(RampShape::Quadratic) - 0.25).abs() < EPS);
        assert!((mid(RampShape::QuarterSine) - 0.5f64.sqrt()).abs() < EPS);
        assert!((mid(RampShape::QuarterCosine) - (1.0 - 0.5f64.sqrt())).abs() < EPS);
    }

    #[test]
    fn rejects_non_positive_duration() {
        for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            match Ramp::new(RampShape::Linear, 0.0, d) {
                Err(FunctionError::InvalidCoefficient { key, .. }) => assert_eq!(key, "duration"),
                other => panic!("expected InvalidCoefficient for {d}, got {other:?}"),
            }
        }
    }

    #[test]
    fn from_dict_defaults_start() {
        let dict = Dictionary::new("scale").with("duration", 10.0);
        let ramp = Ramp::from_dict(RampShape::Linear, &dict).unwrap();
        assert!((ramp.value(2.5) - 0.25).abs() < EPS);
    }

    #[test]
    fn from_dict_requires_duration() {
        let dict = Dictionary::new("scale").with("start", 1.0);
        match Ramp::from_dict(RampShape::HalfCosine, &dict) {
            Err(FunctionError::Dict(e)) => assert_eq!(e.key(), "duration"),
            other => panic!("expected missing duration, got {other:?}"),
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ramps_are_monotone_and_bounded(
                start in -100.0f64..100.0,
                duration in 0.01f64..100.0,
                t0 in -200.0f64..200.0,
                dt in 0.0f64..50.0,
            ) {
                for shape in RampShape::ALL {
                    let ramp = Ramp::new(shape, start, duration).unwrap();
                    let a = ramp.value(t0);
                    let b = ramp.value(t0 + dt);
                    prop_assert!((0.0..=1.0 + EPS).contains(&a));
                    prop_assert!(b + EPS >= a);
                }
            }
        }
    }
}
