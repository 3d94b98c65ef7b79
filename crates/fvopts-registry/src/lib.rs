//! Runtime type registry for finite-volume source options.
//!
//! A [`Registry`] maps a configuration-supplied type name to a constructor.
//! It is generic over the constructor type so the same machinery backs
//! source-term models, time-varying functions, and any other extension
//! point a host adds.
//!
//! Registration happens in an explicit initialisation phase through a
//! [`RegistryBuilder`]; [`RegistryBuilder::build`] freezes the map. Lookups
//! are only available on the frozen [`Registry`], so no lookup can observe
//! a half-populated table, and a registry built from the same ordered list
//! of registrations is identical in every process.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod registry;

pub use registry::{Registry, RegistryBuilder};
