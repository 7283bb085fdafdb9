//! # proto-time-sim
//!
//! Exploratory toy model of a "proto-time" phase and its transition toward
//! ordinary spacetime. The model is deliberately simple: a symmetric metric
//! tensor perturbed by Gaussian fluctuations provides the structural
//! backdrop, and a discrete-step simulator produces either a scalar
//! transition-potential series or a joint evolution of generalized time,
//! an uncertainty scalar, and the metric itself.
//!
//! No claim of physical correctness is made — this is a numerical sandbox
//! for exploring how fluctuation-driven recurrences behave, not a solver.
//!
//! ## Usage
//!
//! ```
//! use proto_time_sim::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = ModelConfig::new(4, 0.05).unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let metric = generate_metric(&config, &mut rng).unwrap();
//! assert!(metric.is_symmetric());
//!
//! let series = simulate_scalar(&config, 100, &mut rng).unwrap();
//! println!("mean potential: {:.4}", series.mean());
//! ```

pub mod error;
pub mod law;
pub mod metric;
pub mod transition;

#[cfg(test)]
pub(crate) mod test_rng;

pub mod prelude {
    pub use crate::error::*;
    pub use crate::law::*;
    pub use crate::metric::*;
    pub use crate::transition::*;
}
