//! Numerical correction for mutual planet-moon eclipses.
//!
//! When the planet and moon discs overlap on the sky, the region where both
//! occult the star has already been subtracted once from `flux_moon` by the
//! moon's own occultation model; this adds it back so the combined flux
//! stays physically correct (see flux composition in the top-level model).

use std::f64::consts::PI;

/// Apply the mutual-eclipse correction to `flux_moon` in place, for every
/// sample where the planet and moon discs overlap.
#[allow(clippy::too_many_arguments)]
pub fn correct_moon_flux(
    xp: &[f64],
    yp: &[f64],
    xm: &[f64],
    ym: &[f64],
    r_planet: f64,
    r_moon: f64,
    flux_moon: &mut [f64],
    u1: f64,
    u2: f64,
    numerical_grid: u32,
) {
    let omega = 1.0 - u1 / 3.0 - u2 / 6.0;

    for k in 0..flux_moon.len() {
        let d = ((xp[k] - xm[k]).powi(2) + (yp[k] - ym[k]).powi(2)).sqrt();
        if d >= r_planet + r_moon {
            continue;
        }
        let delta = overlap_correction(
            xp[k], yp[k], xm[k], ym[k], r_planet, r_moon, u1, u2, omega, numerical_grid,
        );
        flux_moon[k] = (flux_moon[k] + delta).min(1.0);
    }
}

/// Grid-integrate the doubly-occulted, in-stellar-disc region bounded by the
/// moon's disc, returning the overcounted flux loss to add back to
/// `flux_moon`.
///
/// The grid is a deterministic `numerical_grid x numerical_grid` array of
/// cell-center samples over the moon's bounding box
/// `[xm - r_moon, xm + r_moon] x [ym - r_moon, ym + r_moon]`.
#[allow(clippy::too_many_arguments)]
fn overlap_correction(
    xp: f64,
    yp: f64,
    xm: f64,
    ym: f64,
    r_planet: f64,
    r_moon: f64,
    u1: f64,
    u2: f64,
    omega: f64,
    numerical_grid: u32,
) -> f64 {
    let n = numerical_grid;
    let step = 2.0 * r_moon / n as f64;
    let cell_area = step * step;

    let mut sum = 0.0;
    for i in 0..n {
        let x = xm - r_moon + (i as f64 + 0.5) * step;
        for j in 0..n {
            let y = ym - r_moon + (j as f64 + 0.5) * step;

            let dist_planet = ((x - xp).powi(2) + (y - yp).powi(2)).sqrt();
            let dist_moon = ((x - xm).powi(2) + (y - ym).powi(2)).sqrt();
            let z = (x * x + y * y).sqrt();

            if dist_planet <= r_planet && dist_moon <= r_moon && z <= 1.0 {
                let mu = (1.0 - z.min(1.0).powi(2)).max(0.0).sqrt();
                let intensity = 1.0 - u1 * (1.0 - mu) - u2 * (1.0 - mu).powi(2);
                sum += intensity;
            }
        }
    }

    sum * cell_area / (PI * omega)
}
