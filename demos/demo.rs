// demos/demo.rs
use sde_paths::math_utils::Timer;
use sde_paths::models::gbm::Gbm;
use sde_paths::models::ou_process::OuProcess;
use sde_paths::rng::seed_rng_from_u64;
use sde_paths::simulator::{simulate, simulate_par, solve, Path, SimConfig};
use std::f64;

fn terminal_values(batch: &[Path]) -> Vec<f64> {
    batch.iter().map(|path| path[path.len() - 1]).collect()
}

fn sample_mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_variance(values: &[f64]) -> f64 {
    let mean = sample_mean(values);
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

fn main() {
    println!("Running sde-paths Demo\n");

    // --- Closure-Driven Simulation ---
    println!("--- Closure-Driven Simulation ---");
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(
        |x, _t| 1.0 - x,
        |x, _t| 0.5 * x,
        1.0,
        0.01,
        1.0,
        100,
        &mut rng,
    );
    println!(
        "Simulated {} paths of {} points each",
        batch.len(),
        batch[0].len()
    );
    let terminals = terminal_values(&batch);
    println!(
        "Terminal mean: {} (drift reverts toward 1.0)\n",
        sample_mean(&terminals)
    );

    // --- Ornstein-Uhlenbeck Model ---
    println!("--- Ornstein-Uhlenbeck Model ---");
    let ou = OuProcess::new(2.0, 1.0, 0.3);
    let cfg_ou = SimConfig {
        x0: 0.0,
        dt: 0.01,
        t: 2.0,
        paths: 50_000,
        seed: 12345,
    };

    let mut timer = Timer::new();
    timer.start();
    let batch = simulate(&ou, &cfg_ou).expect("Valid configuration");
    let ou_time = timer.elapsed_ms();

    let terminals = terminal_values(&batch);
    let mc_mean_ou = sample_mean(&terminals);
    let exact_mean_ou = ou.exact_mean(cfg_ou.x0, cfg_ou.t);
    let mc_var_ou = sample_variance(&terminals);
    let exact_var_ou = ou.exact_variance(cfg_ou.t);
    println!("MC Mean (OU): {} ({} ms)", mc_mean_ou, ou_time);
    println!("Exact Mean (OU): {}", exact_mean_ou);
    println!("Absolute Error (Mean): {}", (mc_mean_ou - exact_mean_ou).abs());
    println!("MC Variance (OU): {}", mc_var_ou);
    println!("Exact Variance (OU): {}", exact_var_ou);
    println!("Stationary Variance (OU): {}", ou.stationary_variance());
    println!(
        "Absolute Error (Variance): {}\n",
        (mc_var_ou - exact_var_ou).abs()
    );

    // --- Geometric Brownian Motion ---
    println!("--- Geometric Brownian Motion ---");
    let gbm = Gbm::new(0.05, 0.2);
    let cfg_gbm = SimConfig {
        x0: 100.0,
        dt: 0.01,
        t: 1.0,
        paths: 50_000,
        seed: 12345,
    };

    timer.start();
    let batch = simulate(&gbm, &cfg_gbm).expect("Valid configuration");
    let gbm_time = timer.elapsed_ms();

    let terminals = terminal_values(&batch);
    let mc_mean_gbm = sample_mean(&terminals);
    let exact_mean_gbm = gbm.exact_mean(cfg_gbm.x0, cfg_gbm.t);
    println!("MC Mean (GBM): {} ({} ms)", mc_mean_gbm, gbm_time);
    println!("Exact Mean (GBM): {}", exact_mean_gbm);
    println!(
        "Absolute Error (Mean): {}\n",
        (mc_mean_gbm - exact_mean_gbm).abs()
    );

    // --- Sequential vs Parallel ---
    println!("--- Sequential vs Parallel ---");
    let cfg_bench = SimConfig {
        x0: 0.0,
        dt: 0.01,
        t: 1.0,
        paths: 200_000,
        seed: 42,
    };

    timer.start();
    let batch_seq = simulate(&ou, &cfg_bench).expect("Valid configuration");
    let seq_time = timer.elapsed_ms();

    timer.start();
    let batch_par = simulate_par(&ou, &cfg_bench).expect("Valid configuration");
    let par_time = timer.elapsed_ms();

    let seq_throughput = cfg_bench.paths as f64 / (seq_time / 1000.0);
    let par_throughput = cfg_bench.paths as f64 / (par_time / 1000.0);
    println!(
        "Sequential: {} paths in {:.2} ms ({:.0} paths/sec)",
        batch_seq.len(),
        seq_time,
        seq_throughput
    );
    println!(
        "Parallel:   {} paths in {:.2} ms ({:.0} paths/sec)",
        batch_par.len(),
        par_time,
        par_throughput
    );
    println!("Speedup: {:.2}x", seq_time / par_time);
}
