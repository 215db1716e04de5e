// tests/simulator_test.rs
use approx::assert_abs_diff_eq;
use sde_paths::models::model::SdeFunctions;
use sde_paths::rng::seed_rng_from_u64;
use sde_paths::simulator::{simulate, simulate_par, solve, SimConfig};

#[test]
fn test_batch_and_path_dimensions() {
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|x, _t| 1.0 - x, |x, _t| 0.5 * x, 1.0, 0.25, 1.0, 7, &mut rng);

    assert_eq!(batch.len(), 7, "One path per requested simulation");
    for path in &batch {
        assert_eq!(path.len(), 5, "4 steps plus the initial point");
    }
}

#[test]
fn test_partial_final_interval_dropped() {
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|x, _t| 1.0 - x, |x, _t| 0.5 * x, 1.0, 0.3, 1.0, 3, &mut rng);

    // 1.0 / 0.3 truncates to 3 steps; the grid stops at t = 0.9
    for path in &batch {
        assert_eq!(path.len(), 4);
    }
}

#[test]
fn test_first_point_is_initial_value() {
    let x0 = 1.37;
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|x, _t| 1.0 - x, |x, _t| 0.5 * x, x0, 0.01, 1.0, 25, &mut rng);

    for path in &batch {
        assert_eq!(path[0], x0, "Initial point must carry x0 unchanged");
    }
}

#[test]
fn test_zero_simulations_yield_empty_batch() {
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|x, _t| 1.0 - x, |x, _t| 0.5 * x, 1.0, 0.01, 1.0, 0, &mut rng);
    assert!(batch.is_empty());

    let cfg = SimConfig {
        paths: 0,
        ..Default::default()
    };
    let model = SdeFunctions::new(|x, _t| 1.0 - x, |x, _t| 0.5 * x);
    let batch = simulate(&model, &cfg).expect("Valid configuration");
    assert!(batch.is_empty());

    let batch = simulate_par(&model, &cfg).expect("Valid configuration");
    assert!(batch.is_empty());
}

#[test]
fn test_zero_coefficients_hold_path_constant() {
    let x0 = 2.5;
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|_x, _t| 0.0, |_x, _t| 0.0, x0, 0.1, 1.0, 5, &mut rng);

    for path in &batch {
        assert_eq!(path.len(), 11);
        for &x in path {
            assert_eq!(x, x0, "Zero drift and diffusion must not move the state");
        }
    }
}

#[test]
fn test_constant_drift_accumulates_along_grid() {
    // dX = 1 dt with no noise integrates to X(t_j) = j * dt
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|_x, _t| 1.0, |_x, _t| 0.0, 0.0, 0.1, 0.5, 2, &mut rng);

    for path in &batch {
        assert_eq!(path.len(), 6);
        for (j, &x) in path.iter().enumerate() {
            assert_abs_diff_eq!(x, j as f64 * 0.1, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_time_dependent_drift_sees_step_end_times() {
    // dX = t dt with no noise; each step adds t_j * dt with t_j = j * dt.
    // With dt = 0.25 every quantity is dyadic, so the values are exact.
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|_x, t| t, |_x, _t| 0.0, 0.0, 0.25, 1.0, 1, &mut rng);

    assert_eq!(batch[0], vec![0.0, 0.0625, 0.1875, 0.375, 0.625]);
}

#[test]
fn test_state_dependent_drift_sees_previous_value() {
    // dX = X dt with no noise compounds as X_j = X_{j-1} * (1 + dt)
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|x, _t| x, |_x, _t| 0.0, 1.0, 0.5, 1.0, 1, &mut rng);

    assert_eq!(batch[0], vec![1.0, 1.5, 2.25]);
}

#[test]
fn test_same_seed_reproduces_batch() {
    let mut rng1 = seed_rng_from_u64(42);
    let batch1 = solve(|x, _t| 1.0 - x, |x, _t| 0.5 * x, 1.0, 0.01, 1.0, 50, &mut rng1);

    let mut rng2 = seed_rng_from_u64(42);
    let batch2 = solve(|x, _t| 1.0 - x, |x, _t| 0.5 * x, 1.0, 0.01, 1.0, 50, &mut rng2);

    assert_eq!(batch1, batch2, "Identical seeds must reproduce every draw");
}

#[test]
fn test_closure_and_config_entry_points_agree() {
    let cfg = SimConfig {
        x0: 1.0,
        dt: 0.01,
        t: 1.0,
        paths: 50,
        seed: 42,
    };
    let model = SdeFunctions::new(|x, _t| 1.0 - x, |x, _t| 0.5 * x);
    let from_config = simulate(&model, &cfg).expect("Valid configuration");

    let mut rng = seed_rng_from_u64(cfg.seed);
    let from_closures = solve(
        |x, _t| 1.0 - x,
        |x, _t| 0.5 * x,
        cfg.x0,
        cfg.dt,
        cfg.t,
        cfg.paths,
        &mut rng,
    );

    assert_eq!(
        from_config, from_closures,
        "Both entry points share one stream layout"
    );
}

#[test]
fn test_parallel_simulation_is_deterministic() {
    let cfg = SimConfig {
        x0: 1.0,
        dt: 0.01,
        t: 1.0,
        paths: 64,
        seed: 42,
    };
    let model = SdeFunctions::new(|x, _t| 1.0 - x, |x, _t| 0.5 * x);

    let batch1 = simulate_par(&model, &cfg).expect("Valid configuration");
    let batch2 = simulate_par(&model, &cfg).expect("Valid configuration");

    assert_eq!(batch1.len(), 64);
    for path in &batch1 {
        assert_eq!(path.len(), 101);
        assert_eq!(path[0], cfg.x0);
    }
    assert_eq!(
        batch1, batch2,
        "Per-path streams must not depend on scheduling"
    );
}

#[test]
fn test_negative_values_are_preserved() {
    // Pure additive noise from zero crosses below zero and stays recorded
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|_x, _t| 0.0, |_x, _t| 1.0, 0.0, 0.1, 1.0, 1000, &mut rng);

    let has_negative = batch.iter().any(|path| path.iter().any(|&x| x < 0.0));
    assert!(
        has_negative,
        "Simulated states are stored without clamping at zero"
    );
}

#[test]
fn test_non_finite_states_propagate() {
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|_x, _t| f64::NAN, |_x, _t| 0.0, 1.0, 0.25, 1.0, 2, &mut rng);

    for path in &batch {
        assert_eq!(path[0], 1.0, "Initial point is untouched");
        for &x in &path[1..] {
            assert!(x.is_nan(), "NaN coefficients flow into the stored states");
        }
    }
}

fn cross_path_means(batch: &[Vec<f64>]) -> Vec<f64> {
    let num_points = batch[0].len();
    let mut means = vec![0.0; num_points];
    for path in batch {
        for (j, &x) in path.iter().enumerate() {
            means[j] += x;
        }
    }
    for mean in &mut means {
        *mean /= batch.len() as f64;
    }
    means
}

#[test]
fn test_mean_reversion_statistics_at_equilibrium() {
    // dX = (1 - X) dt + 0.5 X dW started at the mean: E[X_t] = 1 for all t
    let paths = 20_000;
    let mut rng = seed_rng_from_u64(42);
    let batch = solve(|x, _t| 1.0 - x, |x, _t| 0.5 * x, 1.0, 0.01, 1.0, paths, &mut rng);

    let means = cross_path_means(&batch);
    println!("\nTerminal mean at equilibrium: {}", means[means.len() - 1]);

    for (j, &mean) in means.iter().enumerate() {
        assert!(
            (mean - 1.0).abs() < 0.02,
            "Cross-path mean ({}) drifted from the equilibrium value 1.0 at grid index {}",
            mean,
            j
        );
    }
}

#[test]
fn test_mean_reversion_statistics_off_equilibrium() {
    // Same dynamics started at 3.0: E[X_t] = 1 + 2 e^{-t}
    let paths = 20_000;
    let dt = 0.01;
    let mut rng = seed_rng_from_u64(12345);
    let batch = solve(|x, _t| 1.0 - x, |x, _t| 0.5 * x, 3.0, dt, 1.0, paths, &mut rng);

    let means = cross_path_means(&batch);
    println!("\nTerminal mean off equilibrium: {}", means[means.len() - 1]);
    println!("Exact terminal mean: {}", 1.0 + 2.0 * (-1.0_f64).exp());

    for (j, &mean) in means.iter().enumerate() {
        let exact_mean = 1.0 + 2.0 * (-(j as f64 * dt)).exp();
        assert!(
            (mean - exact_mean).abs() < 0.05,
            "Cross-path mean ({}) too far from exact mean ({}) at grid index {}",
            mean,
            exact_mean,
            j
        );
    }
}
