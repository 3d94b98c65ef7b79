//! Run-time selectable source-term models.
//!
//! A source-term model ([`FvSource`]) adds a per-cell explicit contribution
//! to a discretised vector equation. Models are selected by type name
//! through a [`SourceRegistry`] and configured from a
//! [`Dictionary`](fvopts_core::Dictionary) block; the solver never names a
//! concrete model.
//!
//! Every model exposes three entry points, one per field representation:
//!
//! | entry point | contribution per selected cell `c` |
//! |---|---|
//! | [`add_sup`](FvSource::add_sup) | `v V(c)` |
//! | [`add_rho_sup`](FvSource::add_rho_sup) | `v V(c) rho(c)` |
//! | [`add_alpha_rho_sup`](FvSource::add_alpha_rho_sup) | `v V(c) rho(c) alpha(c)` |
//!
//! [`AccelerationSource`] implements all three through one
//! [`MassWeight`]-parameterised computation, so that `rho ≡ 1` and
//! `alpha ≡ 1` give bit-identical results.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod acceleration;
pub mod cell_set;
pub mod context;
pub mod list;
pub mod registry;
pub mod source;
pub mod weight;

pub use acceleration::{AccelerationSource, AccelerationSourceBuilder};
pub use cell_set::{CellSetOption, TimeWindow};
pub use context::SourceContext;
pub use list::{ReloadReport, SourceList};
pub use registry::{SourceConstructor, SourceRegistry};
pub use source::FvSource;
pub use weight::MassWeight;
