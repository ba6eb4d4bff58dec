//! Exact quadratic limb-darkened occultation flux (Mandel & Agol 2002).
//!
//! `occult` evaluates `F(z, k, u1, u2)`, the fraction of a quadratically
//! limb-darkened star's flux that remains visible when a dark circular disc
//! of radius `k` (stellar radii) occults it at center-to-center separation
//! `z` (stellar radii). The case analysis follows the four geometric
//! regimes of the closed-form solution: no overlap, total occultation of
//! the star, the occulter silhouette entirely inside the stellar disc, and
//! the occulter limb crossing the stellar limb.

use super::elliptic::{complete_e, complete_k, complete_pi};
use std::f64::consts::PI;

/// Quadratic limb-darkened occultation flux, normalized so `F = 1` outside
/// transit and `F = 0` for a total occultation of the star.
pub fn occult(z: f64, k: f64, u1: f64, u2: f64) -> f64 {
    if k <= 0.0 {
        return 1.0;
    }
    if z >= 1.0 + k {
        return 1.0;
    }
    if k >= 1.0 && z <= k - 1.0 {
        return 0.0;
    }

    // Reference occultquad implementations nudge z away from the z = k
    // singularity of the characteristic n = 1/x1 - 1; we do the same.
    let z = if (k - z).abs() < 1e-6 { z + 1e-6 } else { z };

    let omega = 1.0 - u1 / 3.0 - u2 / 6.0;
    let (lambda_e, lambda_d, eta_d) = if z <= (1.0 - k).abs() {
        interior(z, k)
    } else {
        limb_crossing(z, k)
    };

    let flux = 1.0
        - ((1.0 - u1 - 2.0 * u2) * lambda_e + (u1 + 2.0 * u2) * lambda_d + u2 * eta_d) / omega;
    flux.clamp(0.0, 1.0)
}

fn kappas(z: f64, k: f64) -> (f64, f64) {
    let kap0 = ((k * k + z * z - 1.0) / (2.0 * k * z)).clamp(-1.0, 1.0).acos();
    let kap1 = ((1.0 - k * k + z * z) / (2.0 * z)).clamp(-1.0, 1.0).acos();
    (kap0, kap1)
}

/// Occulter silhouette entirely within the stellar disc (or vice versa),
/// away from the z = 0 degeneracy.
fn interior(z: f64, k: f64) -> (f64, f64, f64) {
    let lambda_e = if k <= 1.0 { k * k } else { 1.0 };

    if z < 1e-10 {
        // Central transit: exact, non-elliptic closed form. Mandel & Agol's
        // expression for this case omits a constant +2/3 whenever the
        // occulter covers the stellar center (always true here, since k > 0
        // and z is essentially 0); add it back.
        let lambda_d = -(2.0 / 3.0) * (1.0 - k * k).powf(1.5) + 2.0 / 3.0;
        let eta_d = k.powi(4) / 2.0;
        return (lambda_e, lambda_d, eta_d);
    }

    // Integrated directly from the definition of lambda_d/eta_d as
    // limb-darkening-weighted occulted-area moments, so unlike the
    // elliptic-integral closed form below, this already has no missing
    // +2/3 term to restore.
    let (a, b) = interior_quadrature(z, k);
    let lambda_d = lambda_e - a;
    let eta_d = 2.0 * a - b;
    (lambda_e, lambda_d, eta_d)
}

/// `lambda_d` and `eta_d` for the occulter-entirely-inside-the-star regime,
/// via direct quadrature rather than the elliptic-integral closed form.
///
/// The literature's closed form for this branch needs a characteristic and
/// modulus above 1, which the limb-crossing polynomial below cannot reach by
/// substituting the reciprocal modulus alone: the prefactor polynomial
/// itself differs between the two regimes, not just the elliptic-integral
/// argument. Rather than carry a second, easy-to-get-wrong polynomial, this
/// integrates the same two limb-darkening area moments (`A = lambda_e -
/// lambda_d`, `B = 2A - eta_d`) directly over the occulter disc, which is
/// entirely inside the unit disc in this regime so the domain needs no
/// clipping. The integrand is smooth and periodic in `phi`, so a periodic
/// trapezoid sum there is spectrally accurate, and Simpson's rule in `rho`
/// converges quickly on the same smooth integrand.
fn interior_quadrature(z: f64, k: f64) -> (f64, f64) {
    const N_RHO: usize = 24;
    const N_PHI: usize = 48;

    let h = k / N_RHO as f64;
    let dphi = 2.0 * PI / N_PHI as f64;

    let mut a = 0.0;
    let mut b = 0.0;
    for i in 0..=N_RHO {
        let rho = i as f64 * h;
        let mut sa = 0.0;
        let mut sb = 0.0;
        for j in 0..N_PHI {
            let phi = j as f64 * dphi;
            let x = z + rho * phi.cos();
            let y = rho * phi.sin();
            let r2 = x * x + y * y;
            let mu = (1.0 - r2).max(0.0).sqrt();
            let one_minus_mu = 1.0 - mu;
            sa += one_minus_mu;
            sb += one_minus_mu * one_minus_mu;
        }
        sa *= dphi;
        sb *= dphi;
        let weight = if i == 0 || i == N_RHO {
            1.0
        } else if i % 2 == 1 {
            4.0
        } else {
            2.0
        };
        a += weight * rho * sa;
        b += weight * rho * sb;
    }
    a *= h / 3.0;
    b *= h / 3.0;
    (a / PI, b / PI)
}

/// Occulter limb crosses the stellar limb.
fn limb_crossing(z: f64, k: f64) -> (f64, f64, f64) {
    let (kap0, kap1) = kappas(z, k);
    let lambda_e = (k * k * kap0 + kap1
        - 0.5 * (4.0 * z * z - (1.0 + z * z - k * k).powi(2)).max(0.0).sqrt())
        / PI;

    let (lambda_d, eta_d) = elliptic_terms(z, k);
    // Mandel & Agol's closed form for lambda_d omits a constant +2/3
    // whenever the occulter covers the stellar center.
    let lambda_d = if k > z { lambda_d + 2.0 / 3.0 } else { lambda_d };
    (lambda_e, lambda_d, eta_d)
}

/// Limb-darkening correction terms for the limb-crossing regime, expressed
/// through the complete elliptic integrals.
///
/// `(1 - x1) / (4kz)` is the limb-crossing modulus; it stays in `[0, 1]`
/// throughout this regime (it reaches 1 only at the interior/crossing
/// boundary `z = 1 - k`), so it feeds `complete_k`/`complete_e` directly.
/// The interior regime uses [`interior_quadrature`] instead, since its
/// closed form needs a modulus above 1 that this polynomial can't absorb.
fn elliptic_terms(z: f64, k: f64) -> (f64, f64) {
    let x1 = (k - z).powi(2);
    let x2 = (k + z).powi(2);
    let x3 = k * k - z * z;

    let m = (1.0 - x1) / (4.0 * k * z);
    let n = (1.0 / x1 - 1.0).min(1e6);

    let lambda_d = (1.0 / (9.0 * PI * (k * z).sqrt()))
        * (((1.0 - x2) * (2.0 * x2 + x1 - 3.0) - 3.0 * x3 * (x2 - 2.0)) * complete_k(m)
            + 4.0 * k * z * (z * z + 7.0 * k * k - 4.0) * complete_e(m)
            - 3.0 * (x3 / x1) * complete_pi(n, m));

    let (kap0, kap1) = kappas(z, k);
    let eta_d = (1.0 / (2.0 * PI))
        * (kap1 + k * k * (k * k + 2.0 * z * z) * kap0
            - 0.25 * (1.0 + 5.0 * k * k + z * z) * ((1.0 - x1) * (x2 - 1.0).abs()).sqrt());

    (lambda_d, eta_d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn far_from_star_flux_is_unity() {
        assert_abs_diff_eq!(occult(10.0, 0.1, 0.3, 0.2), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn total_occultation_of_star_gives_zero_flux() {
        assert_abs_diff_eq!(occult(0.0, 2.0, 0.3, 0.2), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn central_uniform_disc_transit_matches_area_ratio() {
        let k = 0.1;
        let f = occult(0.0, k, 0.0, 0.0);
        assert_abs_diff_eq!(f, 1.0 - k * k, epsilon = 1e-12);
    }

    #[test]
    fn flux_is_continuous_across_the_silhouette_interior_boundary() {
        let k = 0.2;
        let z_inside = (1.0 - k) - 1e-6;
        let z_outside = (1.0 - k) + 1e-6;
        let f_inside = occult(z_inside, k, 0.4, 0.2);
        let f_outside = occult(z_outside, k, 0.4, 0.2);
        assert_abs_diff_eq!(f_inside, f_outside, epsilon = 1e-4);
    }

    #[test]
    fn flux_stays_within_unit_interval() {
        let k = 0.3;
        for i in 0..40 {
            let z = i as f64 * 0.05;
            let f = occult(z, k, 0.5, 0.1);
            assert!((0.0..=1.0).contains(&f), "f={f} out of range at z={z}");
        }
    }

    #[test]
    fn flux_recovers_outside_transit_with_any_limb_darkening() {
        assert_abs_diff_eq!(occult(1.5, 0.1, 0.9, -0.2), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn central_transit_with_limb_darkening_is_not_fully_clamped() {
        // Without the +2/3 Heaviside term lambda_d comes out large and
        // negative and flux clamps to 1.0 (zero depth) for every central
        // transit with nonzero limb darkening.
        let f = occult(0.0, 0.1, 0.5, 0.5);
        assert_abs_diff_eq!(f, 0.9867, epsilon = 1e-3);
        assert!(f < 1.0);
    }

    #[test]
    fn partial_transit_with_small_planet_is_finite() {
        // k << z puts the characteristic n = 1/x1 - 1 well above 1; this
        // used to NaN before complete_pi handled characteristics above 1.
        let f = occult(0.4, 0.00915, 0.5, 0.5);
        assert!(f.is_finite(), "flux was not finite");
        assert!(f < 1.0 && f > 0.999);
    }

    #[test]
    fn interior_flux_matches_high_precision_reference() {
        // z well inside the silhouette boundary (|1-k| = 0.8 here), so this
        // exercises interior_quadrature rather than the central closed form
        // or the limb-crossing elliptic-integral branch.
        let f = occult(0.4, 0.2, 0.4, 0.2);
        assert_abs_diff_eq!(f, 0.9539423, epsilon = 1e-5);
    }
}
