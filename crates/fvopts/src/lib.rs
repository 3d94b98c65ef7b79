//! fvopts: run-time selectable source-term options for finite-volume solvers.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! fvopts sub-crates. For most users, adding `fvopts` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use fvopts::prelude::*;
//!
//! // The host's momentum equation: here, a flat per-cell source array.
//! struct Momentum {
//!     source: Vec<Vector>,
//! }
//!
//! impl VectorEquation for Momentum {
//!     fn field_name(&self) -> &str { "U" }
//!     fn cell_count(&self) -> usize { self.source.len() }
//!     fn add_source(&mut self, cell: usize, contribution: Vector) {
//!         self.source[cell] += contribution;
//!     }
//! }
//!
//! // Explicit initialisation: registries are frozen before any lookup.
//! let registry = SourceRegistry::builtin().unwrap();
//! let functions = FunctionLibrary::builtin().unwrap();
//! let mesh = SelectionCatalog::uniform(4, 0.5).unwrap();
//! let ctx = SourceContext::new(&mesh, &functions);
//!
//! let options = Dictionary::new("fvOptions").with(
//!     "accelerationSource1",
//!     Dictionary::new("accelerationSource1")
//!         .with("type", "accelerationSource")
//!         .with("selectionMode", "all")
//!         .with("velocity", "scale")
//!         .with("value", Vector::new(-2.572, 0.0, 0.0))
//!         .with(
//!             "scale",
//!             Dictionary::new("scale")
//!                 .with("type", "halfCosineRamp")
//!                 .with("start", 0.0)
//!                 .with("duration", 10.0),
//!         ),
//! );
//! let mut sources = SourceList::new(&options, &registry, ctx).unwrap();
//!
//! let mut eqn = Momentum { source: vec![Vector::ZERO; 4] };
//! sources.add_sup(&SolverTime::at(5.0), &mut eqn).unwrap();
//! assert!((eqn.source[0].x + 0.643).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fvopts-core` | Vectors, time, dictionaries, fields, errors, the equation trait |
//! | [`registry`] | `fvopts-registry` | Generic name-keyed constructor registry |
//! | [`function`] | `fvopts-function` | Time-varying functions and their library |
//! | [`selection`] | `fvopts-selection` | Cell selections and providers |
//! | [`source`] | `fvopts-source` | Source-term models, their registry and lists |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`fvopts-core`).
///
/// Contains [`types::Vector`], [`types::SolverTime`], the
/// [`types::Dictionary`] configuration tree and the
/// [`types::VectorEquation`] trait implemented by host solvers.
pub use fvopts_core as types;

/// Name-keyed constructor registry (`fvopts-registry`).
pub use fvopts_registry as registry;

/// Time-varying functions (`fvopts-function`).
///
/// Built-in ramps, sine, table, constant and scale types, selected through
/// a [`function::FunctionLibrary`].
pub use fvopts_function as function;

/// Cell selections (`fvopts-selection`).
pub use fvopts_selection as selection;

/// Source-term models (`fvopts-source`).
///
/// The [`source::FvSource`] trait is the main extension point for
/// user-defined models.
pub use fvopts_source as source;

/// Common imports for typical fvopts usage.
///
/// ```rust
/// use fvopts::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use fvopts_core::{Dictionary, Entry, SolverTime, Vector, VectorEquation, VolScalarField};

    // Errors
    pub use fvopts_core::{ConfigError, SourceError};

    // Functions
    pub use fvopts_function::{Function1, FunctionLibrary};

    // Selection
    pub use fvopts_selection::{CellSelection, SelectionCatalog, SelectionProvider, SelectionSpec};

    // Sources
    pub use fvopts_source::{
        AccelerationSource, FvSource, SourceContext, SourceList, SourceRegistry,
    };
}
