//! Time-varying functions of one variable.
//!
//! A [`Function1`] maps a scalar (simulation time) to a value of type `T`.
//! Sources own one and evaluate it once per equation-modification call.
//!
//! Functions are selected from configuration by type name through a
//! [`FunctionLibrary`], which holds one [`Registry`](fvopts_registry::Registry)
//! for scalar-valued and one for vector-valued types.
//!
//! # Built-in types
//!
//! | type | value | output |
//! |------|-------|--------|
//! | `constant` | `value` | scalar, vector |
//! | `linearRamp` | `r` | scalar |
//! | `quadraticRamp` | `r²` | scalar |
//! | `halfCosineRamp` | `0.5 (1 - cos πr)` | scalar |
//! | `quarterSineRamp` | `sin(πr/2)` | scalar |
//! | `quarterCosineRamp` | `1 - cos(πr/2)` | scalar |
//! | `sine` | `A sin(2πf (t - t0)) + level` | scalar |
//! | `table` | linear interpolation | scalar |
//! | `scale` | `scale(t) * value(t)` | vector |
//!
//! where `r = clamp((t - start) / duration, 0, 1)`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constant;
pub mod function;
pub mod library;
pub mod ramp;
pub mod scale;
pub mod sine;
pub mod table;

pub use constant::Constant;
pub use function::Function1;
pub use library::{FunctionLibrary, FunctionLibraryBuilder, ScalarConstructor, VectorConstructor};
pub use ramp::{Ramp, RampShape};
pub use scale::Scale;
pub use sine::Sine;
pub use table::{OutOfBounds, Table};
