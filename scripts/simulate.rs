// scripts/simulate.rs
use sde_paths::rng::seed_rng_from_u64;
use sde_paths::simulator::solve;

fn main() {
    // Mean reversion toward 1.0 with state-proportional noise:
    // dX_t = (1 - X_t) dt + 0.5 X_t dW_t
    let drift = |x: f64, _t: f64| 1.0 - x;
    let diffusion = |x: f64, _t: f64| 0.5 * x;

    let x0 = 1.0;
    let dt = 0.01;
    let t = 1.0;
    let n_simulations = 100;

    let mut rng = seed_rng_from_u64(42);
    let simulations = solve(drift, diffusion, x0, dt, t, n_simulations, &mut rng);

    for (i, path) in simulations.iter().enumerate() {
        println!("Simulation {}: t, X", i + 1);
        for (j, &x) in path.iter().enumerate() {
            println!("{}, {}, {}", i + 1, j as f64 * dt, x);
        }
        println!();
    }
}
