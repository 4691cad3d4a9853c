//! Concurrent apply tests
//!
//! `apply` takes `&self` and schemes keep no per-call state, so threads can
//! share one integrator, and even one scheme, without locking.

use std::f64::consts::FRAC_PI_2;
use std::thread;

use quadrature_core_rs::{Integrator, MonteCarloScheme, QuadratureScheme, RectangleScheme};

fn sin_plus_cos(x: f64) -> f64 {
    x.sin() + x.cos()
}

#[test]
fn test_unseeded_schemes_from_many_threads() {
    let integrator = Integrator::new(sin_plus_cos, 0.0, FRAC_PI_2).unwrap();

    let results: Vec<f64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let integrator = &integrator;
                scope.spawn(move || {
                    let scheme = MonteCarloScheme::unseeded(1 << 15).unwrap();
                    integrator.apply(&scheme)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results.len(), 8);
    for result in results {
        assert!(result.is_finite());
        assert!((result - 2.0).abs() < 0.05, "got {}", result);
    }
}

#[test]
fn test_shared_seeded_scheme_matches_serial_result() {
    let integrator = Integrator::new(sin_plus_cos, 0.0, 1.0).unwrap();
    let scheme = MonteCarloScheme::new(1 << 14, Some(42)).unwrap();
    let serial = integrator.apply(&scheme);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..6)
            .map(|_| {
                let integrator = &integrator;
                let scheme = &scheme;
                scope.spawn(move || integrator.apply(scheme))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().to_bits(), serial.to_bits());
        }
    });
}

#[test]
fn test_interleaved_schemes_across_threads() {
    let integrator = Integrator::new(|x: f64| x, 0.0, 2.0).unwrap();
    let rectangle = RectangleScheme::new(1001).unwrap();
    let expected = integrator.apply(&rectangle);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let integrator = &integrator;
                let rectangle = &rectangle;
                scope.spawn(move || {
                    let monte_carlo = MonteCarloScheme::new(1000, Some(seed)).unwrap();
                    let a = integrator.apply(rectangle);
                    let b = integrator.apply(&monte_carlo);
                    let c = integrator.apply(rectangle);
                    (a, b, c)
                })
            })
            .collect();

        for handle in handles {
            let (a, b, c) = handle.join().unwrap();
            assert_eq!(a, expected);
            assert_eq!(c, expected);
            assert!(b.is_finite());
        }
    });
}

#[test]
fn test_boxed_schemes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let scheme: Box<dyn QuadratureScheme> = Box::new(RectangleScheme::new(4).unwrap());
    assert_send_sync(&scheme);

    let integrator = Integrator::new(sin_plus_cos, 0.0, 1.0).unwrap();
    assert_send_sync(&integrator);
}
