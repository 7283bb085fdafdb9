//! Input-validation failures for metric generation and simulation.
//!
//! All variants are detected eagerly, before any computation or random
//! draw is consumed. There is no partial-failure mode: a call either
//! returns a fully-populated result or fails without producing output.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("dimensionality must be at least 1 (got {dim})")]
    InvalidDimension { dim: usize },

    #[error("uncertainty level must be finite and non-negative (got {value})")]
    InvalidUncertainty { value: f64 },

    #[error("joint evolution requires at least 1 step (got {steps})")]
    InvalidStepCount { steps: usize },

    #[error("time step dt must be finite and positive (got {dt})")]
    InvalidTimeStep { dt: f64 },

    #[error("initial metric must be {expected}x{expected} square (got {rows}x{cols})")]
    InvalidInitialMetric {
        expected: usize,
        rows: usize,
        cols: usize,
    },
}
