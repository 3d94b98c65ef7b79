//! [`SourceContext`]: what a source may borrow from its host.

use fvopts_function::FunctionLibrary;
use fvopts_selection::SelectionProvider;
use std::fmt;

/// Host services available while constructing or reloading a source.
///
/// Sources keep the context so that `read()` can resolve a new selection and
/// value function later; everything they borrow lives for `'a`.
#[derive(Clone, Copy)]
pub struct SourceContext<'a> {
    selections: &'a dyn SelectionProvider,
    functions: &'a FunctionLibrary,
}

impl<'a> SourceContext<'a> {
    /// Bundle a selection provider and a function library.
    pub fn new(selections: &'a dyn SelectionProvider, functions: &'a FunctionLibrary) -> Self {
        Self {
            selections,
            functions,
        }
    }

    /// Resolves `selectionMode` blocks to cells.
    pub fn selections(&self) -> &'a dyn SelectionProvider {
        self.selections
    }

    /// Selects time-varying functions by type name.
    pub fn functions(&self) -> &'a FunctionLibrary {
        self.functions
    }
}

impl fmt::Debug for SourceContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceContext")
            .field("cell_count", &self.selections.cell_count())
            .field("functions", self.functions)
            .finish()
    }
}
