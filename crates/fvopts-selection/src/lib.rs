//! Cell selections for cell-scoped source options.
//!
//! A [`SelectionSpec`] is what a configuration block asks for
//! (`selectionMode all`, a named zone, a named set). A
//! [`SelectionProvider`] resolves it to a [`CellSelection`]: the selected
//! cell indices together with their volumes. Working out which cells lie
//! in a zone is the mesh's business; [`SelectionCatalog`] is a simple
//! provider for hosts that already know.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod provider;
pub mod selection;
pub mod spec;

pub use catalog::SelectionCatalog;
pub use provider::SelectionProvider;
pub use selection::CellSelection;
pub use spec::SelectionSpec;
