//! Sky-plane positions for an eccentric moon orbit around the planet.

use super::circular::CircularOrbit;
use super::project::{barycentric_split, project_to_sky};
use crate::kepler;
use std::f64::consts::TAU;

/// Compute planet and moon sky positions for an eccentric moon orbit.
///
/// Same geometry as [`super::circular::positions`] plus eccentricity `e` and
/// argument of periastron `w_deg` (degrees). Solves Kepler's equation per
/// sample to get the eccentric and true anomalies before projecting.
#[allow(clippy::too_many_arguments)]
pub fn positions(
    a: f64,
    per: f64,
    e: f64,
    tau: f64,
    omega_deg: f64,
    w_deg: f64,
    i_deg: f64,
    time: &[f64],
    mass_ratio: f64,
    x_bary: &[f64],
    b_bary: f64,
) -> (CircularOrbit, u32) {
    let omega = omega_deg.to_radians();
    let w = w_deg.to_radians();
    let i = i_deg.to_radians();

    let n = time.len();
    let mut xp = Vec::with_capacity(n);
    let mut yp = Vec::with_capacity(n);
    let mut xm = Vec::with_capacity(n);
    let mut ym = Vec::with_capacity(n);
    let mut non_converged = 0u32;

    for k in 0..n {
        let mut mean_anomaly = TAU * (time[k] / per - tau);
        mean_anomaly = mean_anomaly.rem_euclid(TAU);

        let (ecc_anomaly, converged) = kepler::solve(mean_anomaly, e);
        if !converged {
            non_converged += 1;
        }

        let true_anomaly = 2.0
            * ((1.0 + e).sqrt() * (ecc_anomaly / 2.0).sin())
                .atan2((1.0 - e).sqrt() * (ecc_anomaly / 2.0).cos());
        let r = a * (1.0 - e * ecc_anomaly.cos());

        let x_orb = r * (true_anomaly + w).cos();
        let y_orb = r * (true_anomaly + w).sin();

        let (dx, dy) = project_to_sky(x_orb, y_orb, i, omega);
        let (xp_k, yp_k, xm_k, ym_k) = barycentric_split(dx, dy, x_bary[k], b_bary, mass_ratio);

        xp.push(xp_k);
        yp.push(yp_k);
        xm.push(xm_k);
        ym.push(ym_k);
    }

    (CircularOrbit { xp, yp, xm, ym }, non_converged)
}
