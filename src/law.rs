//! Symbolic proto-law placeholder.
//!
//! The proto-law is a descriptive artifact: a rendered equation relating
//! proto-time `t` and an energy-like potential `E`. It is never evaluated
//! numerically and feeds nothing in the simulation engine; it exists so
//! reports can display the law the toy model is gesturing at.

use std::fmt;

/// An inert symbolic equation of the form `lhs = rhs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoLaw {
    /// Left-hand side, e.g. `L(t, E)`.
    pub lhs: String,
    /// Right-hand side, e.g. `sin(t) * exp(-E/t)`.
    pub rhs: String,
}

impl ProtoLaw {
    /// The default non-linear temporal-progression law.
    pub fn temporal_progression() -> Self {
        Self {
            lhs: "L(t, E)".to_string(),
            rhs: "sin(t) * exp(-E/t)".to_string(),
        }
    }
}

impl Default for ProtoLaw {
    fn default() -> Self {
        Self::temporal_progression()
    }
}

impl fmt::Display for ProtoLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}
