//! [`FunctionLibrary`]: run-time selection of [`Function1`] types.

use crate::constant::Constant;
use crate::function::Function1;
use crate::ramp::{Ramp, RampShape};
use crate::scale::Scale;
use crate::sine::Sine;
use crate::table::Table;
use fvopts_core::{Dictionary, Entry, FunctionError, RegistryError, Vector};
use fvopts_registry::{Registry, RegistryBuilder};

/// Constructs a scalar function from its coefficient dictionary.
pub type ScalarConstructor =
    fn(&Dictionary, &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError>;

/// Constructs a vector function from its coefficient dictionary.
pub type VectorConstructor =
    fn(&Dictionary, &FunctionLibrary) -> Result<Box<dyn Function1<Vector>>, FunctionError>;

/// The scalar and vector function registries.
///
/// # Selection
///
/// [`scalar`](Self::scalar) and [`vector`](Self::vector) look at the entry
/// under `key`:
///
/// - a literal value becomes a [`Constant`];
/// - a sub-dictionary names its type under `type` and holds its own
///   coefficients;
/// - a word names the type, with coefficients read from `<key>Coeffs` if
///   present, otherwise from the enclosing dictionary minus `key`.
///
/// # Examples
///
/// ```
/// use fvopts_core::{Dictionary, Vector};
/// use fvopts_function::FunctionLibrary;
///
/// let lib = FunctionLibrary::builtin().unwrap();
/// let dict = Dictionary::new("accel")
///     .with("velocity", "scale")
///     .with("value", Vector::new(-2.572, 0.0, 0.0))
///     .with(
///         "scale",
///         Dictionary::new("scale")
///             .with("type", "halfCosineRamp")
///             .with("start", 0.0)
///             .with("duration", 10.0),
///     );
///
/// let velocity = lib.vector("velocity", &dict).unwrap();
/// assert!((velocity.value(5.0).x + 1.286).abs() < 1e-12);
/// ```
pub struct FunctionLibrary {
    scalars: Registry<ScalarConstructor>,
    vectors: Registry<VectorConstructor>,
}

/// Collects function types before freezing them into a [`FunctionLibrary`].
pub struct FunctionLibraryBuilder {
    scalars: RegistryBuilder<ScalarConstructor>,
    vectors: RegistryBuilder<VectorConstructor>,
}

impl FunctionLibraryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self {
            scalars: RegistryBuilder::new("scalar Function1"),
            vectors: RegistryBuilder::new("vector Function1"),
        }
    }

    /// Register every built-in type, in a fixed order.
    pub fn register_builtins(&mut self) -> Result<(), RegistryError> {
        self.scalars.register("constant", scalar_constant)?;
        self.scalars.register(RampShape::Linear.type_name(), linear_ramp)?;
        self.scalars.register(RampShape::Quadratic.type_name(), quadratic_ramp)?;
        self.scalars.register(RampShape::HalfCosine.type_name(), half_cosine_ramp)?;
        self.scalars.register(RampShape::QuarterSine.type_name(), quarter_sine_ramp)?;
        self.scalars.register(RampShape::QuarterCosine.type_name(), quarter_cosine_ramp)?;
        self.scalars.register("sine", sine)?;
        self.scalars.register("table", table)?;

        self.vectors.register("constant", vector_constant)?;
        self.vectors.register("scale", scale)?;
        Ok(())
    }

    /// Add a scalar function type.
    pub fn register_scalar(
        &mut self,
        type_name: &'static str,
        constructor: ScalarConstructor,
    ) -> Result<(), RegistryError> {
        self.scalars.register(type_name, constructor)
    }

    /// Add a vector function type.
    pub fn register_vector(
        &mut self,
        type_name: &'static str,
        constructor: VectorConstructor,
    ) -> Result<(), RegistryError> {
        self.vectors.register(type_name, constructor)
    }

    /// Freeze both registries.
    pub fn build(self) -> FunctionLibrary {
        FunctionLibrary {
            scalars: self.scalars.build(),
            vectors: self.vectors.build(),
        }
    }
}

impl Default for FunctionLibraryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionLibrary {
    /// Start from an empty builder.
    pub fn builder() -> FunctionLibraryBuilder {
        FunctionLibraryBuilder::new()
    }

    /// A library holding exactly the built-in types.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut builder = FunctionLibraryBuilder::new();
        builder.register_builtins()?;
        Ok(builder.build())
    }

    /// Registered scalar types, sorted.
    pub fn scalar_types(&self) -> Vec<&'static str> {
        self.scalars.type_names()
    }

    /// Registered vector types, sorted.
    pub fn vector_types(&self) -> Vec<&'static str> {
        self.vectors.type_names()
    }

    /// Select and build the scalar function under `key` in `dict`.
    pub fn scalar(&self, key: &str, dict: &Dictionary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
        match dict.lookup(key)? {
            Entry::Scalar(v) => Ok(Box::new(Constant::new(finite_scalar(key, *v)?))),
            Entry::Dict(coeffs) => {
                let ctor = self.scalars.lookup(coeffs.lookup_word("type")?)?;
                ctor(coeffs, self)
            }
            Entry::Word(type_name) => {
                let ctor = self.scalars.lookup(type_name)?;
                ctor(&word_coeffs(key, dict)?, self)
            }
            other => Err(dict.invalid(key, format!("expected a scalar, word or dictionary, found {}", other.kind())).into()),
        }
    }

    /// Select and build the vector function under `key` in `dict`.
    pub fn vector(&self, key: &str, dict: &Dictionary) -> Result<Box<dyn Function1<Vector>>, FunctionError> {
        let entry = dict.lookup(key)?;
        if let Some(v) = entry.as_vector() {
            return Ok(Box::new(Constant::new(finite_vector(key, v)?)));
        }
        match entry {
            Entry::Dict(coeffs) => {
                let ctor = self.vectors.lookup(coeffs.lookup_word("type")?)?;
                ctor(coeffs, self)
            }
            Entry::Word(type_name) => {
                let ctor = self.vectors.lookup(type_name)?;
                ctor(&word_coeffs(key, dict)?, self)
            }
            other => Err(dict.invalid(key, format!("expected a vector, word or dictionary, found {}", other.kind())).into()),
        }
    }
}

impl std::fmt::Debug for FunctionLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionLibrary")
            .field("scalars", &self.scalars)
            .field("vectors", &self.vectors)
            .finish()
    }
}

// Coefficients for the `key <typeName>;` form. Removing `key` stops a
// constructor from re-reading its own selector.
fn word_coeffs(key: &str, dict: &Dictionary) -> Result<Dictionary, FunctionError> {
    let coeffs_key = format!("{key}Coeffs");
    if dict.contains(&coeffs_key) {
        return Ok(dict.lookup_dict(&coeffs_key)?.clone());
    }
    Ok(dict.without(key))
}

fn finite_scalar(key: &str, v: f64) -> Result<f64, FunctionError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FunctionError::InvalidCoefficient {
            function: "constant".to_string(),
            key: key.to_string(),
            reason: format!("must be finite, got {v}"),
        })
    }
}

fn finite_vector(key: &str, v: Vector) -> Result<Vector, FunctionError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FunctionError::InvalidCoefficient {
            function: "constant".to_string(),
            key: key.to_string(),
            reason: format!("must be finite, got {v}"),
        })
    }
}

fn scalar_constant(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    let v = finite_scalar("value", dict.lookup_scalar("value")?)?;
    Ok(Box::new(Constant::new(v)))
}

fn vector_constant(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<Vector>>, FunctionError> {
    let v = finite_vector("value", dict.lookup_vector("value")?)?;
    Ok(Box::new(Constant::new(v)))
}

fn ramp(shape: RampShape, dict: &Dictionary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    Ok(Box::new(Ramp::from_dict(shape, dict)?))
}

fn linear_ramp(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    ramp(RampShape::Linear, dict)
}

fn quadratic_ramp(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    ramp(RampShape::Quadratic, dict)
}

fn half_cosine_ramp(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    ramp(RampShape::HalfCosine, dict)
}

fn quarter_sine_ramp(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    ramp(RampShape::QuarterSine, dict)
}

fn quarter_cosine_ramp(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    ramp(RampShape::QuarterCosine, dict)
}

fn sine(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    Ok(Box::new(Sine::from_dict(dict)?))
}

fn table(dict: &Dictionary, _: &FunctionLibrary) -> Result<Box<dyn Function1<f64>>, FunctionError> {
    Ok(Box::new(Table::from_dict(dict)?))
}

fn scale(dict: &Dictionary, lib: &FunctionLibrary) -> Result<Box<dyn Function1<Vector>>, FunctionError> {
    Ok(Box::new(Scale::from_dict(dict, lib)?))
}
