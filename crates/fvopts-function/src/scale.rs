//! A vector function multiplied by a scalar one.

use crate::function::Function1;
use crate::library::FunctionLibrary;
use fvopts_core::{Dictionary, FunctionError, Vector};

/// `scale(t) * value(t)`.
///
/// Both parts are themselves selected from the coefficient dictionary
/// through the [`FunctionLibrary`], so `value` may be a literal vector and
/// `scale` any scalar type, e.g. a ramp.
pub struct Scale {
    scale: Box<dyn Function1<f64>>,
    value: Box<dyn Function1<Vector>>,
}

impl Scale {
    /// Combine two already-built functions.
    pub fn new(scale: Box<dyn Function1<f64>>, value: Box<dyn Function1<Vector>>) -> Self {
        Self { scale, value }
    }

    /// Read `scale` and `value` from `dict`.
    pub fn from_dict(dict: &Dictionary, library: &FunctionLibrary) -> Result<Self, FunctionError> {
        let value = library.vector("value", dict)?;
        let scale = library.scalar("scale", dict)?;
        Ok(Self::new(scale, value))
    }
}

impl Function1<Vector> for Scale {
    fn type_name(&self) -> &'static str {
        "scale"
    }

    fn value(&self, x: f64) -> Vector {
        self.value.value(x) * self.scale.value(x)
    }
}

impl std::fmt::Debug for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scale")
            .field("scale", &self.scale.type_name())
            .field("value", &self.value.type_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::Constant;
    use crate::ramp::{Ramp, RampShape};

    #[test]
    fn multiplies_value_by_scale() {
        let f = Scale::new(
            Box::new(Ramp::new(RampShape::Linear, 0.0, 4.0).unwrap()),
            Box::new(Constant::new(Vector::new(2.0, -4.0, 0.0))),
        );
        assert_eq!(f.value(0.0), Vector::ZERO);
        assert_eq!(f.value(1.0), Vector::new(0.5, -1.0, 0.0));
        assert_eq!(f.value(8.0), Vector::new(2.0, -4.0, 0.0));
    }
}
