//! The [`Function1`] trait.

/// A function of one scalar variable, usually simulation time.
///
/// # Contract
///
/// - `value()` is pure: the same `x` always gives the same result.
/// - `&self`: evaluation never mutates the function. Instrumented test
///   doubles count calls through atomics.
///
/// # Object safety
///
/// This trait is object-safe; sources store functions as
/// `Box<dyn Function1<T>>`.
pub trait Function1<T>: Send + Sync {
    /// Registered type name, e.g. `"halfCosineRamp"`.
    fn type_name(&self) -> &'static str;

    /// Evaluate at `x`.
    fn value(&self, x: f64) -> T;
}
