//! Constant-valued functions.

use crate::function::Function1;

/// Returns the same value for every `x`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// A constant function returning `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Copy + Send + Sync> Function1<T> for Constant<T> {
    fn type_name(&self) -> &'static str {
        "constant"
    }

    fn value(&self, _x: f64) -> T {
        self.value
    }
}
