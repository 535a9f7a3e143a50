// tests/ou_calibration_test.rs
use fast_ou::calibration::ou_estimator::{estimate_ou_params, estimate_ou_params_with};
use fast_ou::calibration::regression::NalgebraOls;
use fast_ou::models::brownian;
use fast_ou::models::ou_process::{OuParams, OuProcess, OuSimulation};
use fast_ou::rng::NormalGenerator;
use fast_ou::solvers::euler_maruyama::EulerMaruyama;
use fast_ou::SdeError;
use proptest::prelude::*;

const ROUND_TRIP_PARAMS: OuParams = OuParams {
    alpha: 0.07,
    gamma: 0.0,
    beta: 0.001,
};

fn simulate_round_trip_path(seed: u64) -> Vec<f64> {
    let ou = OuProcess::new(ROUND_TRIP_PARAMS);
    let mut rng = NormalGenerator::default();
    let options = OuSimulation {
        x0: None,
        seed: Some(seed),
    };
    ou.simulate(100_000, &options, &mut rng)
        .expect("Valid parameters")
}

#[test]
fn test_calibration_round_trip_single_path() {
    let path = simulate_round_trip_path(7);
    let fitted = estimate_ou_params(&path).expect("Non-degenerate path");

    // At unit steps the regression slope estimates 1 - e^(-α), not α itself.
    let discrete_alpha = 1.0 - (-ROUND_TRIP_PARAMS.alpha).exp();
    let rel_error = (fitted.alpha - ROUND_TRIP_PARAMS.alpha).abs() / ROUND_TRIP_PARAMS.alpha;
    let rel_error_discrete = (fitted.alpha - discrete_alpha).abs() / discrete_alpha;

    println!("\nFitted params: {:?}", fitted);
    println!("Relative alpha error: {}", rel_error);
    println!("Relative error vs 1 - e^(-alpha): {}", rel_error_discrete);

    assert!(rel_error < 0.05, "Relative alpha error exceeds 5%: {}", rel_error);
    assert!(
        rel_error_discrete < 0.05,
        "Relative error vs discrete slope exceeds 5%: {}",
        rel_error_discrete
    );
    assert!(fitted.gamma.abs() < 5e-4, "Long-run mean off: {}", fitted.gamma);

    // Residual scale of the exact sampler is β e^(-α).
    let expected_beta = ROUND_TRIP_PARAMS.beta * (-ROUND_TRIP_PARAMS.alpha).exp();
    let beta_error = (fitted.beta - expected_beta).abs() / expected_beta;
    assert!(beta_error < 0.02, "Relative beta error too large: {}", beta_error);
}

#[test]
fn test_calibration_round_trip_within_five_percent() {
    let seeds: Vec<u64> = (100..116).collect();
    let mean_alpha = seeds
        .iter()
        .map(|&seed| {
            estimate_ou_params(&simulate_round_trip_path(seed))
                .expect("Non-degenerate path")
                .alpha
        })
        .sum::<f64>()
        / seeds.len() as f64;

    let rel_error = (mean_alpha - ROUND_TRIP_PARAMS.alpha).abs() / ROUND_TRIP_PARAMS.alpha;
    println!("\nMean fitted alpha over {} paths: {}", seeds.len(), mean_alpha);
    assert!(rel_error < 0.05, "Relative alpha error exceeds 5%: {}", rel_error);
}

#[test]
fn test_nalgebra_backend_round_trip() {
    let path = simulate_round_trip_path(7);
    let simple = estimate_ou_params(&path).expect("Non-degenerate path");
    let nalg = estimate_ou_params_with(&path, &mut NalgebraOls::default()).expect("Non-degenerate path");

    assert!((simple.alpha - nalg.alpha).abs() / simple.alpha < 1e-8);
    assert!((simple.beta - nalg.beta).abs() / simple.beta < 1e-8);
}

#[test]
fn test_degenerate_path_raises() {
    let flat = vec![3.0; 1_000];
    match estimate_ou_params(&flat) {
        Err(SdeError::DegenerateMeanReversion { slope }) => assert_eq!(slope, 0.0),
        other => panic!("Expected DegenerateMeanReversion, got {:?}", other),
    }
}

#[test]
fn test_zero_volatility_independent_of_increments() {
    let params = OuParams::new(0.15, -2.0, 0.0);
    let ou = OuProcess::new(params);
    let x0 = 5.0;

    let mut rng = NormalGenerator::default();
    let a = ou
        .simulate(500, &OuSimulation { x0: Some(x0), seed: Some(1) }, &mut rng)
        .expect("Valid parameters");
    let b = ou
        .simulate(500, &OuSimulation { x0: Some(x0), seed: Some(2) }, &mut rng)
        .expect("Valid parameters");

    assert_eq!(a, b);
    for (i, &x) in a.iter().enumerate() {
        let t = i as f64;
        assert_eq!(x, params.gamma + (x0 - params.gamma) * (-params.alpha * t).exp());
    }
}

#[test]
fn test_exact_sampler_close_to_euler_for_slow_reversion() {
    // Same draws, α small: the schemes differ only by O(α) per step.
    let params = OuParams::new(0.001, 1.0, 0.5);
    let ou = OuProcess::new(params);
    let dw = NormalGenerator::seeded(31).sample_increments(1_000, None);

    let exact = ou.simulate_with_increments(&dw, Some(0.0)).expect("Valid parameters");
    let euler = EulerMaruyama::integrate(&ou, 0.0, 1.0, &dw);

    let max_diff = exact
        .iter()
        .zip(&euler)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!("\nMax |exact - Euler|: {}", max_diff);
    assert_eq!(exact.len(), euler.len());
    assert_eq!(exact[0], euler[0]);
    assert!(max_diff < 0.25, "Exact and Euler paths diverged: {}", max_diff);
}

#[test]
fn test_ou_uses_brownian_increment_convention() {
    // α = 0, β = 1, X0 = γ = 0 reduces the OU sampler to the Brownian path.
    let ou = OuProcess::new(OuParams::new(0.0, 0.0, 1.0));
    let mut rng = NormalGenerator::default();

    let w = brownian::build_path(&mut rng, 200, Some(5));
    let x = ou
        .simulate(200, &OuSimulation { x0: None, seed: Some(5) }, &mut rng)
        .expect("Valid parameters");

    for (a, b) in w.iter().zip(&x) {
        assert!((a - b).abs() < 1e-12);
    }
}

proptest! {
    #[test]
    fn prop_brownian_path_shape(t in 0usize..300, seed in any::<u64>()) {
        let mut rng = NormalGenerator::default();
        let dw = brownian::sample_increments(&mut rng, t, Some(seed));
        let w = brownian::build_path(&mut rng, t, Some(seed));

        prop_assert_eq!(dw.len(), t);
        prop_assert_eq!(w.len(), t);
        if t >= 1 {
            prop_assert_eq!(w[0], 0.0);
        }
        // Same seed, same draws.
        prop_assert_eq!(dw, brownian::sample_increments(&mut rng, t, Some(seed)));
    }
}
