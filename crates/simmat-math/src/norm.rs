//! Euclidean norm via scaled accumulation.
//!
//! A naive `sqrt(sum(x^2))` overflows for components above ~1e154 and
//! underflows to 0 below ~1e-154. The scaled form tracks the largest
//! magnitude seen and accumulates squares relative to it, so the running
//! sum stays near 1.

/// Compute the L2 norm of a vector.
///
/// Tracks a running scale `t` (largest magnitude so far) and a relative
/// sum-of-squares `s`; the result is `t * sqrt(s)`. Zero components are
/// skipped — they contribute nothing and must not perturb the scale.
///
/// An all-zero (or empty) vector yields exactly `0.0`.
pub fn l2_norm(v: &[f64]) -> f64 {
    let mut s = 1.0_f64;
    let mut t = 0.0_f64;

    for &x in v {
        let abs = x.abs();
        if abs > 0.0 {
            if abs > t {
                // Sign cancels under squaring
                let r = t / x;
                s = 1.0 + s * r * r;
                t = abs;
            } else {
                let r = x / t;
                s += r * r;
            }
        }
    }

    t * s.sqrt()
}
