//! Adaptive Simpson quadrature
//!
//! Reference values for the convergence study. This lives in the driver, not
//! the engine: the engine schemes never estimate or control their own error.

/// Integrate `f` over `[a, b]` to absolute tolerance `tolerance`
///
/// Recursion stops at `max_depth` even if the tolerance is not met.
pub fn adaptive_simpson<F>(f: F, a: f64, b: f64, tolerance: f64, max_depth: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = simpson(a, b, fa, fm, fb);
    refine(&f, a, b, fa, fm, fb, whole, tolerance, max_depth)
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn refine<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tolerance: f64,
    depth: u32,
) -> f64
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (a + b);
    let left_mid = 0.5 * (a + m);
    let right_mid = 0.5 * (m + b);
    let f_left_mid = f(left_mid);
    let f_right_mid = f(right_mid);

    let left = simpson(a, m, fa, f_left_mid, fm);
    let right = simpson(m, b, fm, f_right_mid, fb);
    let delta = left + right - whole;

    if depth == 0 || delta.abs() <= 15.0 * tolerance {
        // Richardson extrapolation
        return left + right + delta / 15.0;
    }

    refine(f, a, m, fa, f_left_mid, fm, left, 0.5 * tolerance, depth - 1)
        + refine(f, m, b, fm, f_right_mid, fb, right, 0.5 * tolerance, depth - 1)
}
