//! Joint evolution run: generalized time, uncertainty walk, metric drift.
//!
//! Tracks the (0,0) metric element across the run — the multiplicative
//! update has no normalization, so its drift away from 1 is the headline
//! number to watch.
//!
//! Run with:
//!   cargo run --example joint_evolution

use proto_time_sim::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    let config = ModelConfig::new(4, 0.05).unwrap();
    let steps = 200;
    let dt = 0.05;

    let mut rng = StdRng::seed_from_u64(7);
    let evo = simulate_joint(&config, steps, dt, None, &mut rng).unwrap();

    println!("step,T,Delta,metric_00");
    for i in 0..evo.len() {
        println!(
            "{},{:.3},{:.6},{:.6}",
            i,
            evo.time[i],
            evo.uncertainty[i],
            evo.metrics[i].get(0, 0)
        );
    }

    let first = evo.metrics.first().unwrap().get(0, 0);
    let last = evo.metrics.last().unwrap().get(0, 0);
    println!();
    println!("# metric(0,0): {:.6} -> {:.6} over {} steps", first, last, steps);
    println!("# diverged: {}", evo.diverged());
}
