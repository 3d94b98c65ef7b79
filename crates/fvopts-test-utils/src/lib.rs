//! Test utilities and mock types for fvopts development.
//!
//! Provides a recording implementation of [`VectorEquation`], an
//! instrumented [`Function1`](fvopts_function::Function1) that counts its
//! evaluations, and reusable configuration and mesh [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use fvopts_core::{Vector, VectorEquation};
use fvopts_function::Function1;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock implementation of [`VectorEquation`].
///
/// Accumulates contributions per cell and counts `add_source` calls so
/// tests can assert that a failed call left the equation untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordingEquation {
    field: String,
    sources: Vec<Vector>,
    calls: usize,
}

impl RecordingEquation {
    pub fn new(field: impl Into<String>, cell_count: usize) -> Self {
        Self {
            field: field.into(),
            sources: vec![Vector::ZERO; cell_count],
            calls: 0,
        }
    }

    /// Accumulated source at `cell`.
    pub fn source(&self, cell: usize) -> Vector {
        self.sources[cell]
    }

    /// Accumulated source of every cell.
    pub fn sources(&self) -> &[Vector] {
        &self.sources
    }

    /// Sum over all cells.
    pub fn total(&self) -> Vector {
        self.sources.iter().fold(Vector::ZERO, |acc, &v| acc + v)
    }

    /// Number of `add_source` calls so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Whether no contribution was ever added.
    pub fn is_untouched(&self) -> bool {
        self.calls == 0
    }
}

impl VectorEquation for RecordingEquation {
    fn field_name(&self) -> &str {
        &self.field
    }

    fn cell_count(&self) -> usize {
        self.sources.len()
    }

    fn add_source(&mut self, cell: usize, contribution: Vector) {
        self.sources[cell] += contribution;
        self.calls += 1;
    }
}

/// Wraps a function and counts how often it is evaluated.
///
/// The counter is shared, so a test keeps a [`CallCounter`] after handing
/// the boxed function to a source.
pub struct CountingFunction<F> {
    inner: F,
    calls: Arc<AtomicUsize>,
}

/// Read side of a [`CountingFunction`]'s counter.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<F> CountingFunction<F> {
    pub fn new(inner: F) -> (Self, CallCounter) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = CallCounter(Arc::clone(&calls));
        (Self { inner, calls }, counter)
    }
}

impl<T, F: Function1<T>> Function1<T> for CountingFunction<F> {
    fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    fn value(&self, x: f64) -> T {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.value(x)
    }
}
