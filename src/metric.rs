//! Fluctuation metric generation.
//!
//! The proto-time metric is a symmetric square matrix: nominally the
//! identity, with one Gaussian fluctuation injected per unordered index
//! pair. Sampling once per pair (not per cell) makes the matrix exactly
//! symmetric by construction, bit-for-bit, with no symmetrization pass.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::ModelError;

/// Model parameters shared by metric generation and simulation.
///
/// Immutable once constructed: validation happens in [`ModelConfig::new`],
/// so every downstream routine can trust the fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// Number of proto-time dimensions (metric is dim × dim).
    pub dimensionality: usize,
    /// Standard deviation of the injected quantum fluctuations.
    pub uncertainty: f64,
}

impl ModelConfig {
    /// Create a config, rejecting zero dimensionality and negative or
    /// non-finite uncertainty.
    pub fn new(dimensionality: usize, uncertainty: f64) -> Result<Self, ModelError> {
        if dimensionality < 1 {
            return Err(ModelError::InvalidDimension {
                dim: dimensionality,
            });
        }
        if !uncertainty.is_finite() || uncertainty < 0.0 {
            return Err(ModelError::InvalidUncertainty { value: uncertainty });
        }
        Ok(Self {
            dimensionality,
            uncertainty,
        })
    }

    /// Re-run the constructor checks. Lets routines that accept a plain
    /// struct literal still fail eagerly, before any random draw.
    pub fn validate(&self) -> Result<(), ModelError> {
        Self::new(self.dimensionality, self.uncertainty).map(|_| ())
    }
}

/// A square matrix representing a fluctuation-perturbed identity.
///
/// Row-major storage. Freshly generated matrices are exactly symmetric;
/// snapshots evolved by the joint simulator stay square but carry no
/// symmetry guarantee once scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct FluctuationMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl FluctuationMatrix {
    /// The exact identity matrix of the given size.
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![0.0; dim * dim];
        for i in 0..dim {
            data[i * dim + i] = 1.0;
        }
        Self { dim, data }
    }

    /// Build a matrix from explicit rows, rejecting non-square input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ModelError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(ModelError::InvalidInitialMetric {
                expected: 1,
                rows: 0,
                cols: 0,
            });
        }
        for row in &rows {
            if row.len() != dim {
                return Err(ModelError::InvalidInitialMetric {
                    expected: dim,
                    rows: dim,
                    cols: row.len(),
                });
            }
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Self { dim, data })
    }

    /// Matrix side length.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entry at (row, col). Panics if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        self.data[row * self.dim + col]
    }

    fn set_pair(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.dim + j] = value;
        self.data[j * self.dim + i] = value;
    }

    /// True when every entry equals its transpose partner exactly.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.dim {
            for j in (i + 1)..self.dim {
                if self.data[i * self.dim + j] != self.data[j * self.dim + i] {
                    return false;
                }
            }
        }
        true
    }

    /// Largest |entry - identity entry| across the matrix: a cheap
    /// fluctuation-magnitude summary for reports.
    pub fn max_abs_deviation_from_identity(&self) -> f64 {
        let mut max = 0.0f64;
        for i in 0..self.dim {
            for j in 0..self.dim {
                let base = if i == j { 1.0 } else { 0.0 };
                max = max.max((self.data[i * self.dim + j] - base).abs());
            }
        }
        max
    }

    /// Entrywise multiplication by a scalar, returning a new matrix.
    /// This is the joint-evolution update primitive.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            dim: self.dim,
            data: self.data.iter().map(|v| v * factor).collect(),
        }
    }

    /// True if any entry is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        self.data.iter().any(|v| !v.is_finite())
    }

    /// Row-major view of the entries.
    pub fn entries(&self) -> &[f64] {
        &self.data
    }
}

/// Generate a fluctuation metric: identity plus one Gaussian draw per
/// unordered index pair, assigned to both mirror cells.
///
/// Consumes exactly `dim * (dim + 1) / 2` draws from `rng`, in row-major
/// pair order `(0,0), (0,1), ..., (0,n-1), (1,1), ...`. With zero
/// uncertainty the draws are still consumed (scaled by zero) and the
/// result is the exact identity.
pub fn generate_metric<R: Rng>(
    config: &ModelConfig,
    rng: &mut R,
) -> Result<FluctuationMatrix, ModelError> {
    config.validate()?;

    let dim = config.dimensionality;
    let mut metric = FluctuationMatrix::identity(dim);
    for i in 0..dim {
        for j in i..dim {
            let base = if i == j { 1.0 } else { 0.0 };
            let noise: f64 = config.uncertainty * rng.sample::<f64, _>(StandardNormal);
            metric.set_pair(i, j, base + noise);
        }
    }
    Ok(metric)
}
