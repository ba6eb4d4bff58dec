//! Sky-plane positions for a circular moon orbit around the planet.

use super::project::{barycentric_split, project_to_sky};
use std::f64::consts::TAU;

/// Sky-plane positions of planet and moon for a circular moon orbit.
pub struct CircularOrbit {
    /// Planet x, units of R_star.
    pub xp: Vec<f64>,
    /// Planet y, units of R_star.
    pub yp: Vec<f64>,
    /// Moon x, units of R_star.
    pub xm: Vec<f64>,
    /// Moon y, units of R_star.
    pub ym: Vec<f64>,
}

/// Compute planet and moon sky positions for a circular moon orbit.
///
/// - `a`: moon semimajor axis, units of R_star.
/// - `per`: moon orbital period, days.
/// - `tau`: mean-anomaly offset, normalized to `[0, 1)`.
/// - `omega_deg`: longitude of ascending node, degrees.
/// - `i_deg`: inclination, degrees.
/// - `time`: sample times, days.
/// - `x_bary`: planet barycenter x at each sample, units of R_star.
/// - `mass_ratio`: `M_moon / M_planet`.
/// - `b_bary`: impact parameter of the barycenter orbit.
#[allow(clippy::too_many_arguments)]
pub fn positions(
    a: f64,
    per: f64,
    tau: f64,
    omega_deg: f64,
    i_deg: f64,
    time: &[f64],
    x_bary: &[f64],
    mass_ratio: f64,
    b_bary: f64,
) -> CircularOrbit {
    let omega = omega_deg.to_radians();
    let i = i_deg.to_radians();

    let n = time.len();
    let mut xp = Vec::with_capacity(n);
    let mut yp = Vec::with_capacity(n);
    let mut xm = Vec::with_capacity(n);
    let mut ym = Vec::with_capacity(n);

    for k in 0..n {
        let mut mean_anomaly = TAU * (time[k] / per - tau);
        mean_anomaly = mean_anomaly.rem_euclid(TAU);

        let x_orb = a * mean_anomaly.cos();
        let y_orb = a * mean_anomaly.sin();

        let (dx, dy) = project_to_sky(x_orb, y_orb, i, omega);
        let (xp_k, yp_k, xm_k, ym_k) = barycentric_split(dx, dy, x_bary[k], b_bary, mass_ratio);

        xp.push(xp_k);
        yp.push(yp_k);
        xm.push(xm_k);
        ym.push(ym_k);
    }

    CircularOrbit { xp, yp, xm, ym }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn quarter_period_moves_a_quarter_turn_face_on() {
        // i=0 (face-on moon orbit) keeps the full circle in the sky plane.
        let time = vec![0.0, 2.5];
        let x_bary = vec![0.0, 0.0];
        let orbit = positions(1.0, 10.0, 0.0, 0.0, 0.0, &time, &x_bary, 0.0, 0.0);
        // at t=0, M=0 -> (a,0); at t=2.5 (quarter period), M=pi/2 -> (0,a)
        assert_abs_diff_eq!(orbit.xm[0], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(orbit.ym[0], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(orbit.xm[1], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(orbit.ym[1], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn edge_on_inclination_collapses_to_a_line() {
        // i=90 (edge-on moon orbit) leaves only x motion in the sky plane,
        // matching the transit-chord geometry used throughout the testable
        // properties (e.g. the i_moon = 90 symmetry scenario).
        let time = vec![2.5];
        let x_bary = vec![0.0];
        let orbit = positions(1.0, 10.0, 0.0, 0.0, 90.0, &time, &x_bary, 0.0, 0.0);
        assert_abs_diff_eq!(orbit.ym[0], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_mass_ratio_keeps_planet_on_barycenter_track() {
        let time = vec![1.0, 2.0, 3.0];
        let x_bary = vec![0.1, 0.2, 0.3];
        let orbit = positions(0.05, 5.0, 0.25, 10.0, 85.0, &time, &x_bary, 0.0, 0.4);
        for k in 0..time.len() {
            assert_abs_diff_eq!(orbit.xp[k], x_bary[k], epsilon = 1e-12);
            assert_abs_diff_eq!(orbit.yp[k], 0.4, epsilon = 1e-12);
        }
    }
}
