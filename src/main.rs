//! Proto-time model demo — metric, proto-law, and both simulation modes.

use proto_time_sim::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║        PROTO-TIME MODEL — exploratory sandbox        ║");
    println!("║   fluctuation metric · transition potential · joint  ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let config = ModelConfig::new(6, 0.05).expect("default parameters are valid");
    let mut rng = StdRng::seed_from_u64(42);

    // ═══ Fluctuation metric ═══
    println!(
        "━━━ Proto-Time Metric ({}×{}, σ = {}) ━━━",
        config.dimensionality, config.dimensionality, config.uncertainty
    );
    println!();
    let metric = generate_metric(&config, &mut rng).expect("config already validated");
    for i in 0..metric.dim() {
        print!(" ");
        for j in 0..metric.dim() {
            print!(" {:>8.4}", metric.get(i, j));
        }
        println!();
    }
    println!();
    println!("  symmetric: {}", metric.is_symmetric());
    println!(
        "  max |deviation from identity|: {:.4}",
        metric.max_abs_deviation_from_identity()
    );
    println!();

    // ═══ Proto-law ═══
    println!("━━━ Proto-Law ━━━");
    println!();
    println!("  {}", ProtoLaw::default());
    println!();

    // ═══ Scalar transition potential ═══
    println!("━━━ Transition Potential (scalar mode, 1000 steps) ━━━");
    println!();
    let series = simulate_scalar(&config, 1000, &mut rng).expect("config already validated");
    println!("  mean:    {:>9.6}", series.mean());
    println!("  std dev: {:>9.6}", series.std_dev());
    println!();

    // ═══ Joint evolution ═══
    println!("━━━ Joint Evolution (200 steps, dt = 0.05) ━━━");
    println!();
    let evo = simulate_joint(&config, 200, 0.05, Some(metric), &mut rng)
        .expect("parameters already validated");
    println!("  {:>6}  {:>8}  {:>10}  {:>12}", "step", "T", "Δ", "metric(0,0)");
    println!("  {:─>6}  {:─>8}  {:─>10}  {:─>12}", "", "", "", "");
    for i in (0..evo.len()).step_by(25) {
        println!(
            "  {:>6}  {:>8.3}  {:>10.5}  {:>12.6}",
            i,
            evo.time[i],
            evo.uncertainty[i],
            evo.metrics[i].get(0, 0)
        );
    }
    println!();
    println!("  diverged: {}", evo.diverged());
}
