//! Core types and traits for finite-volume source options.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the workspace: the
//! [`Vector`] value type, the solver clock, the configuration
//! [`Dictionary`], per-cell scalar fields, the [`VectorEquation`] seam
//! to the host solver's matrix, and every error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dict;
pub mod error;
pub mod field;
pub mod time;
pub mod traits;
pub mod vector;

pub use dict::{Dictionary, Entry};
pub use error::{
    ConfigError, DictError, FunctionError, RegistryError, SelectionError, SourceError,
};
pub use field::VolScalarField;
pub use time::SolverTime;
pub use traits::VectorEquation;
pub use vector::Vector;
