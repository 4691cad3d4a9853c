//! Convergence tests
//!
//! The rectangle scheme's error against a closed-form integral shrinks as the
//! step count grows.

use std::f64::consts::FRAC_PI_2;

use quadrature_core_rs::{Integrator, MonteCarloScheme, RectangleScheme};

fn sin_plus_cos(x: f64) -> f64 {
    x.sin() + x.cos()
}

/// Step counts 2^5, 2^10, 2^15, 2^20
fn step_counts() -> Vec<u64> {
    (5..=20).step_by(5).map(|k| 1u64 << k).collect()
}

#[test]
fn test_rectangle_error_decreases() {
    let integrator = Integrator::new(sin_plus_cos, 0.0, FRAC_PI_2).unwrap();

    let errors: Vec<f64> = step_counts()
        .into_iter()
        .map(|steps| (integrator.apply(&RectangleScheme::new(steps).unwrap()) - 2.0).abs())
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "error did not decrease: {:?}", errors);
    }
    assert!(errors[errors.len() - 1] < 1e-3);
}

#[test]
fn test_rectangle_error_decreases_for_exponential() {
    // ∫_0^1 e^x dx = e - 1
    let exact = std::f64::consts::E - 1.0;
    let integrator = Integrator::new(f64::exp, 0.0, 1.0).unwrap();

    let errors: Vec<f64> = step_counts()
        .into_iter()
        .map(|steps| (integrator.apply(&RectangleScheme::new(steps).unwrap()) - exact).abs())
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] < pair[0], "error did not decrease: {:?}", errors);
    }
}

#[test]
fn test_monte_carlo_large_sample_accuracy() {
    let integrator = Integrator::new(sin_plus_cos, 0.0, FRAC_PI_2).unwrap();

    let coarse = integrator.apply(&MonteCarloScheme::new(1 << 5, Some(42)).unwrap());
    let fine = integrator.apply(&MonteCarloScheme::new(1 << 20, Some(42)).unwrap());

    assert!(coarse.is_finite());
    assert!((fine - 2.0).abs() < 1e-2, "got {}", fine);
}
