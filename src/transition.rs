//! Transition-potential simulation.
//!
//! Two modes share one engine:
//!
//! - **Scalar mode**: each step's potential is a pure function of the step
//!   index plus one fresh noise draw — a cyclic term damped by an
//!   exponential decay envelope. No state is carried between steps.
//! - **Joint mode**: a strict sequential recurrence advancing generalized
//!   time, an uncertainty random walk, and a metric snapshot together.
//!   Step i cannot be computed without step i-1.
//!
//! Randomness is consumed in a fixed, documented order (one draw per noise
//! term, in step order), so a seeded source reproduces a run bit-for-bit.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::ModelError;
use crate::metric::{generate_metric, FluctuationMatrix, ModelConfig};

/// Step size of the uncertainty random walk in joint mode. Fixed,
/// independent of the model's uncertainty parameter.
pub const RANDOM_WALK_SIGMA: f64 = 0.01;

/// Coupling between the uncertainty walk and the metric update:
/// each snapshot is the previous one scaled by `1 + coupling * delta`.
pub const METRIC_COUPLING: f64 = 0.01;

/// Angular increment of the cyclic potential term per step.
const CYCLE_RATE: f64 = 0.1;

/// Ordered per-step transition-potential values from a scalar-mode run.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSeries {
    values: Vec<f64>,
}

impl TransitionSeries {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the run had zero steps.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw per-step values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mean potential across the series (0 for an empty series).
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Population standard deviation of the series.
    pub fn std_dev(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let var = self
            .values
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / self.values.len() as f64;
        var.sqrt()
    }
}

/// Parallel time series from a joint-mode run. All three sequences have
/// length exactly equal to the requested step count; index 0 holds the
/// unperturbed seed state.
#[derive(Debug, Clone)]
pub struct JointEvolution {
    /// Generalized time: 0, dt, 2dt, ... — deterministic, never touched
    /// by noise.
    pub time: Vec<f64>,
    /// Uncertainty random walk, seeded with the model's uncertainty.
    pub uncertainty: Vec<f64>,
    /// Metric snapshots. Snapshot i is snapshot i-1 uniformly scaled by
    /// `1 + METRIC_COUPLING * uncertainty[i]`. Square but not necessarily
    /// symmetric once evolved.
    pub metrics: Vec<FluctuationMatrix>,
}

impl JointEvolution {
    /// Number of steps recorded.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// True if the multiplicative metric update drove any snapshot entry
    /// to a non-finite value. The update is deliberately unclamped, so
    /// long runs can diverge; callers that care should check this.
    pub fn diverged(&self) -> bool {
        self.metrics.iter().any(|m| m.has_non_finite())
    }
}

/// Which update rule a [`run_simulation`] call uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationMode {
    /// Independent per-step potential values.
    Scalar { steps: usize },
    /// Sequential (time, uncertainty, metric) recurrence.
    Joint { steps: usize, dt: f64 },
}

/// Output of [`run_simulation`], tagged by mode.
#[derive(Debug, Clone)]
pub enum SimulationOutput {
    Scalar(TransitionSeries),
    Joint(JointEvolution),
}

/// Simulate the scalar transition potential for `steps` discrete steps.
///
/// Each entry is `sin(i * 0.1) * exp(-i / steps)` plus one Gaussian draw
/// scaled by the model's uncertainty. Zero steps yields an empty series
/// without consuming any randomness. Consumes exactly one draw per step
/// otherwise, in step order.
pub fn simulate_scalar<R: Rng>(
    config: &ModelConfig,
    steps: usize,
    rng: &mut R,
) -> Result<TransitionSeries, ModelError> {
    config.validate()?;

    let mut values = Vec::with_capacity(steps);
    for i in 0..steps {
        let phase = i as f64 * CYCLE_RATE;
        let decay = (-(i as f64) / steps as f64).exp();
        let noise: f64 = config.uncertainty * rng.sample::<f64, _>(StandardNormal);
        values.push(phase.sin() * decay + noise);
    }
    Ok(TransitionSeries { values })
}

/// Simulate the joint evolution of time, uncertainty, and metric.
///
/// The seed state (index 0) is `time = 0`, `uncertainty = config
/// uncertainty`, and either the supplied metric or a freshly generated
/// one. Steps 1.. follow the recurrence:
///
/// 1. uncertainty walks by one `Normal(0, RANDOM_WALK_SIGMA)` draw;
/// 2. the metric is uniformly scaled by `1 + METRIC_COUPLING * delta`;
/// 3. time advances by `dt`.
///
/// Draw order: metric-generation draws first (when no metric is
/// supplied), then one walk draw per step in step order.
pub fn simulate_joint<R: Rng>(
    config: &ModelConfig,
    steps: usize,
    dt: f64,
    initial_metric: Option<FluctuationMatrix>,
    rng: &mut R,
) -> Result<JointEvolution, ModelError> {
    config.validate()?;
    if steps < 1 {
        return Err(ModelError::InvalidStepCount { steps });
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Err(ModelError::InvalidTimeStep { dt });
    }
    if let Some(m) = &initial_metric {
        if m.dim() != config.dimensionality {
            return Err(ModelError::InvalidInitialMetric {
                expected: config.dimensionality,
                rows: m.dim(),
                cols: m.dim(),
            });
        }
    }

    let seed_metric = match initial_metric {
        Some(m) => m,
        None => generate_metric(config, rng)?,
    };

    let mut time = Vec::with_capacity(steps);
    let mut uncertainty = Vec::with_capacity(steps);
    let mut metrics = Vec::with_capacity(steps);
    time.push(0.0);
    uncertainty.push(config.uncertainty);
    metrics.push(seed_metric);

    for i in 1..steps {
        let walk: f64 = RANDOM_WALK_SIGMA * rng.sample::<f64, _>(StandardNormal);
        let delta = uncertainty[i - 1] + walk;
        uncertainty.push(delta);
        metrics.push(metrics[i - 1].scaled(1.0 + METRIC_COUPLING * delta));
        time.push(time[i - 1] + dt);
    }

    Ok(JointEvolution {
        time,
        uncertainty,
        metrics,
    })
}

/// Run a simulation under the given mode with one shared engine.
pub fn run_simulation<R: Rng>(
    config: &ModelConfig,
    mode: &SimulationMode,
    rng: &mut R,
) -> Result<SimulationOutput, ModelError> {
    match *mode {
        SimulationMode::Scalar { steps } => {
            simulate_scalar(config, steps, rng).map(SimulationOutput::Scalar)
        }
        SimulationMode::Joint { steps, dt } => {
            simulate_joint(config, steps, dt, None, rng).map(SimulationOutput::Joint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_rng::CountingRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(dim: usize, uncertainty: f64) -> ModelConfig {
        ModelConfig::new(dim, uncertainty).unwrap()
    }

    #[test]
    fn test_scalar_zero_steps_empty_series_no_draws() {
        let mut rng = CountingRng::seeded(0);
        let series = simulate_scalar(&config(4, 0.1), 0, &mut rng).unwrap();
        assert!(series.is_empty());
        assert_eq!(rng.draws(), 0, "empty run must not touch the rng");
    }

    #[test]
    fn test_scalar_series_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(2);
        for steps in [1, 5, 100] {
            let series = simulate_scalar(&config(4, 0.1), steps, &mut rng).unwrap();
            assert_eq!(series.len(), steps);
        }
    }

    #[test]
    fn test_scalar_zero_uncertainty_matches_closed_form() {
        let mut rng = StdRng::seed_from_u64(13);
        let series = simulate_scalar(&config(4, 0.0), 5, &mut rng).unwrap();
        for (i, &v) in series.values().iter().enumerate() {
            let expected = (i as f64 * 0.1).sin() * (-(i as f64) / 5.0).exp();
            assert_eq!(
                v, expected,
                "zero uncertainty must leave the deterministic part untouched at step {}",
                i
            );
        }
    }

    #[test]
    fn test_scalar_seeded_runs_are_reproducible() {
        let cfg = config(4, 0.3);
        let a = simulate_scalar(&cfg, 50, &mut StdRng::seed_from_u64(21)).unwrap();
        let b = simulate_scalar(&cfg, 50, &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_scalar_invalid_config_fails_before_any_draw() {
        let mut rng = CountingRng::seeded(0);
        let bad = ModelConfig {
            dimensionality: 0,
            uncertainty: 0.1,
        };
        assert!(simulate_scalar(&bad, 10, &mut rng).is_err());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_joint_time_series_is_exact_linear_grid() {
        let mut rng = StdRng::seed_from_u64(4);
        let evo = simulate_joint(&config(3, 0.05), 8, 0.25, None, &mut rng).unwrap();
        for (i, &t) in evo.time.iter().enumerate() {
            assert!(
                (t - i as f64 * 0.25).abs() < 1e-12,
                "time must be 0, dt, 2dt, ... regardless of noise (step {}: {})",
                i,
                t
            );
        }
    }

    #[test]
    fn test_joint_all_sequences_have_step_count_length() {
        let mut rng = StdRng::seed_from_u64(4);
        let evo = simulate_joint(&config(3, 0.05), 20, 0.1, None, &mut rng).unwrap();
        assert_eq!(evo.len(), 20);
        assert_eq!(evo.time.len(), 20);
        assert_eq!(evo.uncertainty.len(), 20);
        assert_eq!(evo.metrics.len(), 20);
    }

    #[test]
    fn test_joint_seed_state_is_unperturbed() {
        let mut rng = StdRng::seed_from_u64(5);
        let cfg = config(3, 0.07);
        let seed = generate_metric(&cfg, &mut rng).unwrap();
        let evo = simulate_joint(&cfg, 10, 0.1, Some(seed.clone()), &mut rng).unwrap();
        assert_eq!(evo.time[0], 0.0);
        assert_eq!(evo.uncertainty[0], 0.07);
        assert_eq!(evo.metrics[0], seed);
    }

    #[test]
    fn test_joint_metric_snapshots_are_uniform_scalings() {
        let mut rng = StdRng::seed_from_u64(6);
        let evo = simulate_joint(&config(4, 0.05), 12, 0.1, None, &mut rng).unwrap();
        for i in 1..evo.len() {
            let factor = 1.0 + METRIC_COUPLING * evo.uncertainty[i];
            assert_eq!(
                evo.metrics[i],
                evo.metrics[i - 1].scaled(factor),
                "snapshot {} must be the previous snapshot scaled by {}",
                i,
                factor
            );
            // Cell-ratio check on the diagonal, where entries stay near 1.
            for a in 0..4 {
                let ratio = evo.metrics[i].get(a, a) / evo.metrics[i - 1].get(a, a);
                assert!(
                    (ratio - factor).abs() < 1e-12,
                    "per-cell ratio must equal the common factor (step {}, cell {})",
                    i,
                    a
                );
            }
        }
    }

    #[test]
    fn test_joint_seeded_runs_are_reproducible() {
        let cfg = config(3, 0.02);
        let a = simulate_joint(&cfg, 30, 0.05, None, &mut StdRng::seed_from_u64(8)).unwrap();
        let b = simulate_joint(&cfg, 30, 0.05, None, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a.uncertainty, b.uncertainty);
        assert_eq!(a.metrics, b.metrics);
    }

    #[test]
    fn test_joint_zero_steps_rejected_without_draws() {
        let mut rng = CountingRng::seeded(0);
        let err = simulate_joint(&config(3, 0.05), 0, 0.1, None, &mut rng).unwrap_err();
        assert_eq!(err, ModelError::InvalidStepCount { steps: 0 });
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_joint_bad_dt_rejected_without_draws() {
        let mut rng = CountingRng::seeded(0);
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = simulate_joint(&config(3, 0.05), 10, dt, None, &mut rng).unwrap_err();
            assert!(matches!(err, ModelError::InvalidTimeStep { .. }), "dt={}", dt);
        }
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_joint_mismatched_metric_rejected_without_draws() {
        let wrong = FluctuationMatrix::identity(5);
        let mut rng = CountingRng::seeded(0);
        let err = simulate_joint(&config(3, 0.05), 10, 0.1, Some(wrong), &mut rng).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidInitialMetric {
                expected: 3,
                rows: 5,
                cols: 5,
            }
        );
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_joint_stays_finite_over_moderate_runs() {
        let mut rng = StdRng::seed_from_u64(9);
        let evo = simulate_joint(&config(4, 0.05), 500, 0.05, None, &mut rng).unwrap();
        assert!(
            !evo.diverged(),
            "a 500-step run at small uncertainty must stay finite"
        );
    }

    #[test]
    fn test_run_simulation_dispatches_by_mode() {
        let cfg = config(3, 0.05);
        let mut rng = StdRng::seed_from_u64(10);

        match run_simulation(&cfg, &SimulationMode::Scalar { steps: 7 }, &mut rng).unwrap() {
            SimulationOutput::Scalar(series) => assert_eq!(series.len(), 7),
            other => panic!("scalar mode must produce a scalar series, got {:?}", other),
        }
        match run_simulation(&cfg, &SimulationMode::Joint { steps: 7, dt: 0.1 }, &mut rng).unwrap()
        {
            SimulationOutput::Joint(evo) => assert_eq!(evo.len(), 7),
            other => panic!("joint mode must produce a joint evolution, got {:?}", other),
        }
    }

    #[test]
    fn test_run_simulation_matches_direct_call_under_same_seed() {
        let cfg = config(3, 0.05);
        let direct = simulate_scalar(&cfg, 25, &mut StdRng::seed_from_u64(33)).unwrap();
        let via_mode = match run_simulation(
            &cfg,
            &SimulationMode::Scalar { steps: 25 },
            &mut StdRng::seed_from_u64(33),
        )
        .unwrap()
        {
            SimulationOutput::Scalar(s) => s,
            _ => unreachable!(),
        };
        assert_eq!(direct, via_mode, "the dispatcher must not reorder draws");
    }

    #[test]
    fn test_series_statistics() {
        let series = TransitionSeries {
            values: vec![1.0, 2.0, 3.0, 4.0],
        };
        assert_eq!(series.mean(), 2.5);
        assert!((series.std_dev() - 1.118033988749895).abs() < 1e-12);

        let empty = TransitionSeries { values: vec![] };
        assert_eq!(empty.mean(), 0.0);
        assert_eq!(empty.std_dev(), 0.0);
    }
}
