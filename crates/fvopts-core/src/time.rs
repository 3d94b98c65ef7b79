//! The solver clock handed to every source-term call.

use std::fmt;

/// Snapshot of the host solver's clock.
///
/// Passed by reference into each equation-modification call so that a
/// source evaluates its time-varying parameters against the time the
/// solver is currently assembling, never against a clock of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverTime {
    value: f64,
    delta_t: f64,
    index: u64,
}

impl SolverTime {
    /// A clock at `value` with time step `delta_t` and time index 0.
    pub fn new(value: f64, delta_t: f64) -> Self {
        Self {
            value,
            delta_t,
            index: 0,
        }
    }

    /// A clock at `value` with unit time step. Convenient in tests.
    pub fn at(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    /// Current simulation time.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current time-step size.
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Number of completed time steps.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Advance one time step.
    pub fn advance(&mut self) {
        self.value += self.delta_t;
        self.index += 1;
    }
}

impl fmt::Display for SolverTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t = {} (step {})", self.value, self.index)
    }
}
