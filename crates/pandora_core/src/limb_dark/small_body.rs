//! Linear-limb-darkening small-body occultation approximation.
//!
//! Cheaper and numerically stable substitute for [`super::mandel_agol::occult`]
//! when the occulter is much smaller than the star (`k` below
//! `occult_small_threshold`, default 0.01). Treats the stellar intensity
//! under the occulter as uniform across its tiny disc and evaluated at its
//! center, using the averaged linear coefficient `u = u1 + 2*u2`.

/// Approximate occultation flux for a small occulter of radius `k`.
pub fn occult_small(z: f64, k: f64, u1: f64, u2: f64) -> f64 {
    if k <= 0.0 {
        return 1.0;
    }
    if z >= 1.0 + k {
        return 1.0;
    }
    if z <= k - 1.0 {
        return 0.0;
    }

    let u = u1 + 2.0 * u2;
    let mu = (1.0 - z * z).max(0.0).sqrt();
    let intensity = 1.0 - u * (1.0 - mu);
    // The normalization is the exact integral of the quadratic law over the
    // stellar disc, not a re-derivation from the linearized `u`; using
    // `1 - u/3` here instead disagrees with `mandel_agol::occult`'s omega
    // at leading order in k^2 whenever u2 != 0.
    let omega = 1.0 - u1 / 3.0 - u2 / 6.0;
    (1.0 - k * k * intensity / omega).clamp(0.0, 1.0)
}
