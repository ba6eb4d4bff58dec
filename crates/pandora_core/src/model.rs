//! Top-level composition: barycenter track, moon orbit, occultation flux,
//! mutual-eclipse correction, and supersampling downconversion.

use crate::barycenter;
use crate::constants::{G, OFF_DISC, SECONDS_PER_DAY};
use crate::eclipse;
use crate::limb_dark::{occult, occult_small};
use crate::orbit::{circular, eccentric};
use crate::params::SystemParams;
use crate::supersample;
use crate::PandoraResult;
use std::f64::consts::PI;

/// Non-fatal facts about a single evaluation: whether the Kepler solver
/// exhausted its iteration budget on any sample, and whether the moon
/// orbit was flagged physically implausible (and thus forced off-disc).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// Number of samples where Newton iteration on Kepler's equation did
    /// not converge within the configured tolerance/iteration budget.
    pub kepler_iterations_exhausted: u32,
    /// The moon's derived semimajor axis failed the Hill-sphere or
    /// collision plausibility check; the moon was forced off-disc.
    pub unphysical: bool,
}

/// Flux arrays at data (downsampled) cadence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightCurve {
    /// Total normalized flux.
    pub flux_total: Vec<f64>,
    /// Planet-only occultation flux.
    pub flux_planet: Vec<f64>,
    /// Moon-only occultation flux, including the mutual-eclipse correction.
    pub flux_moon: Vec<f64>,
}

/// Sky-plane coordinate arrays, units of R_star, at the supersampled input
/// cadence (not downsampled, even when the light curve is).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Planet sky x position.
    pub xp: Vec<f64>,
    /// Planet sky y position.
    pub yp: Vec<f64>,
    /// Moon sky x position.
    pub xm: Vec<f64>,
    /// Moon sky y position.
    pub ym: Vec<f64>,
}

/// Full result of one model evaluation.
pub struct ModelOutput {
    /// Flux arrays at data cadence.
    pub light_curve: LightCurve,
    /// Coordinate arrays at supersampled cadence.
    pub coordinates: Coordinates,
    /// Non-fatal facts about this evaluation.
    pub diagnostics: Diagnostics,
}

/// Evaluate the full planet+moon transit model at the given (supersampled)
/// `time` grid.
pub fn evaluate(params: &SystemParams, time: &[f64]) -> PandoraResult<ModelOutput> {
    let omega_moon_motion = 2.0 * PI / (params.per_moon * SECONDS_PER_DAY);
    let a_moon_m =
        (G * params.m_planet * (1.0 + params.mass_ratio) / omega_moon_motion.powi(2)).cbrt();
    let a_moon = a_moon_m / (params.r_star * 1000.0);

    let m_star = 4.0 * PI * PI * (params.a_bary * params.r_star * 1000.0).powi(3)
        / (G * (params.per_bary * SECONDS_PER_DAY).powi(2));
    let r_hill = params.a_bary * (params.m_planet / (3.0 * m_star)).cbrt();
    let r_hill_fraction = a_moon / r_hill;

    let unphysical =
        r_hill_fraction > params.hill_sphere_threshold || a_moon < params.r_planet + params.r_moon;

    let x_bary = barycenter::track(
        time,
        params.a_bary,
        params.per_bary,
        params.t0_bary,
        params.t0_bary_offset,
        params.epoch_distance,
        params.ecc_bary,
        params.w_bary,
    );

    let mut kepler_iterations_exhausted = 0u32;
    let (xp, yp, xm, ym) = if unphysical {
        let n = time.len();
        (
            x_bary.clone(),
            vec![params.b_bary; n],
            vec![OFF_DISC; n],
            vec![OFF_DISC; n],
        )
    } else if params.ecc_moon == 0.0 {
        let orbit = circular::positions(
            a_moon,
            params.per_moon,
            params.tau_moon,
            params.omega_moon,
            params.i_moon,
            time,
            &x_bary,
            params.mass_ratio,
            params.b_bary,
        );
        (orbit.xp, orbit.yp, orbit.xm, orbit.ym)
    } else {
        let (orbit, non_converged) = eccentric::positions(
            a_moon,
            params.per_moon,
            params.ecc_moon,
            params.tau_moon,
            params.omega_moon,
            params.w_moon,
            params.i_moon,
            time,
            params.mass_ratio,
            &x_bary,
            params.b_bary,
        );
        kepler_iterations_exhausted = non_converged;
        (orbit.xp, orbit.yp, orbit.xm, orbit.ym)
    };

    let z_planet: Vec<f64> = xp.iter().zip(&yp).map(|(x, y)| (x * x + y * y).sqrt()).collect();
    let z_moon: Vec<f64> = if unphysical {
        xm.clone()
    } else {
        xm.iter().zip(&ym).map(|(x, y)| (x * x + y * y).sqrt()).collect()
    };

    let flux_planet: Vec<f64> = z_planet
        .iter()
        .map(|&z| occult(z, params.r_planet, params.u1, params.u2))
        .collect();

    let mut flux_moon: Vec<f64> = z_moon
        .iter()
        .map(|&z| {
            if params.r_moon < params.occult_small_threshold {
                occult_small(z, params.r_moon, params.u1, params.u2)
            } else {
                occult(z, params.r_moon, params.u1, params.u2)
            }
        })
        .collect();

    if !unphysical {
        eclipse::correct_moon_flux(
            &xp,
            &yp,
            &xm,
            &ym,
            params.r_planet,
            params.r_moon,
            &mut flux_moon,
            params.u1,
            params.u2,
            params.numerical_grid,
        );
    }

    let flux_total: Vec<f64> = flux_planet
        .iter()
        .zip(&flux_moon)
        .map(|(&fp, &fm)| 1.0 - (1.0 - fp) - (1.0 - fm))
        .collect();

    let (flux_planet, flux_moon, flux_total) = if params.supersampling_factor > 1 {
        (
            supersample::downsample(&flux_planet, params.supersampling_factor)?,
            supersample::downsample(&flux_moon, params.supersampling_factor)?,
            supersample::downsample(&flux_total, params.supersampling_factor)?,
        )
    } else {
        (flux_planet, flux_moon, flux_total)
    };

    Ok(ModelOutput {
        light_curve: LightCurve {
            flux_total,
            flux_planet,
            flux_moon,
        },
        coordinates: Coordinates { xp, yp, xm, ym },
        diagnostics: Diagnostics {
            kepler_iterations_exhausted,
            unphysical,
        },
    })
}

/// Convenience wrapper returning only the flux arrays.
pub fn light_curve(params: &SystemParams, time: &[f64]) -> PandoraResult<LightCurve> {
    Ok(evaluate(params, time)?.light_curve)
}

/// Convenience wrapper returning only the sky-plane coordinate arrays, at
/// the supersampled resolution of the input `time` grid.
pub fn coordinates(params: &SystemParams, time: &[f64]) -> PandoraResult<Coordinates> {
    Ok(evaluate(params, time)?.coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SystemParamsBuilder;
    use approx::assert_abs_diff_eq;

    fn earth_analog_no_moon() -> SystemParams {
        SystemParamsBuilder::new()
            .u1(0.5)
            .u2(0.5)
            .r_star(696_342.0)
            .per_bary(365.25)
            .a_bary(215.032)
            .r_planet(0.00915)
            .b_bary(0.4)
            .ecc_bary(0.0)
            .t0_bary(100.0)
            .t0_bary_offset(0.0)
            .m_planet(5.972e24)
            .r_moon(0.0)
            .per_moon(10.0)
            .mass_ratio(0.0)
            .i_moon(90.0)
            .epoch_distance(365.25)
            .build()
            .unwrap()
    }

    #[test]
    fn out_of_transit_is_a_flat_unit_line() {
        let mut params = earth_analog_no_moon();
        params.b_bary = 5.0;
        let time: Vec<f64> = (0..50).map(|i| 100.0 + i as f64 * 0.1 - 2.5).collect();
        let out = evaluate(&params, &time).unwrap();
        for &f in &out.light_curve.flux_total {
            assert_abs_diff_eq!(f, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn no_moon_limit_matches_planet_only_flux() {
        let params = earth_analog_no_moon();
        let time: Vec<f64> = (0..100).map(|i| 100.0 + (i as f64 - 50.0) * 0.01).collect();
        let out = evaluate(&params, &time).unwrap();
        for k in 0..time.len() {
            assert_abs_diff_eq!(out.light_curve.flux_moon[k], 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(
                out.light_curve.flux_total[k],
                out.light_curve.flux_planet[k],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn central_transit_depth_matches_area_ratio() {
        let params = earth_analog_no_moon();
        let out = evaluate(&params, &[100.0]).unwrap();
        let depth = 1.0 - out.light_curve.flux_total[0];
        assert!(depth > 0.0 && depth < 1e-3, "depth was {depth}");
    }

    #[test]
    fn hill_sphere_violation_forces_moon_off_disc() {
        let mut params = earth_analog_no_moon();
        // A moon period long enough to put a_moon far beyond the Hill radius.
        params.per_moon = 5000.0;
        params.r_moon = 0.01;
        params.mass_ratio = 0.001;
        let out = evaluate(&params, &[100.0]).unwrap();
        assert!(out.diagnostics.unphysical);
        assert_abs_diff_eq!(out.light_curve.flux_moon[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn supersampling_one_matches_unsupersampled_cadence_count() {
        let params = earth_analog_no_moon();
        let time: Vec<f64> = (0..10).map(|i| 100.0 + i as f64 * 0.01).collect();
        let out = evaluate(&params, &time).unwrap();
        assert_eq!(out.light_curve.flux_total.len(), time.len());
    }

    #[test]
    fn repeated_evaluation_is_bitwise_deterministic() {
        let params = earth_analog_no_moon();
        let time: Vec<f64> = (0..20).map(|i| 100.0 + i as f64 * 0.02 - 0.2).collect();
        let a = evaluate(&params, &time).unwrap();
        let b = evaluate(&params, &time).unwrap();
        assert_eq!(a.light_curve.flux_total, b.light_curve.flux_total);
        assert_eq!(a.coordinates.xm, b.coordinates.xm);
    }

    #[test]
    fn all_fluxes_stay_within_unit_interval() {
        let mut params = earth_analog_no_moon();
        params.r_moon = 0.02;
        params.mass_ratio = 0.01;
        params.per_moon = 8.0;
        let time: Vec<f64> = (0..200).map(|i| 100.0 + (i as f64 - 100.0) * 0.01).collect();
        let out = evaluate(&params, &time).unwrap();
        let lc = &out.light_curve;
        for (&fp, (&fm, &ft)) in lc.flux_planet.iter().zip(lc.flux_moon.iter().zip(&lc.flux_total)) {
            assert!((0.0..=1.0).contains(&fp));
            assert!((0.0..=1.0).contains(&fm));
            assert!((0.0..=1.0).contains(&ft));
        }
    }

    #[test]
    fn supersampling_factor_one_is_a_noop_downsample() {
        let params = earth_analog_no_moon();
        let time: Vec<f64> = (0..15).map(|i| 100.0 + i as f64 * 0.01).collect();
        let out = evaluate(&params, &time).unwrap();
        assert_eq!(out.light_curve.flux_total.len(), time.len());
        assert_eq!(out.coordinates.xp.len(), time.len());
    }

    #[test]
    fn eccentric_moon_near_zero_matches_circular_path() {
        let mut circular_params = earth_analog_no_moon();
        circular_params.r_moon = 0.02;
        circular_params.mass_ratio = 0.01;
        circular_params.per_moon = 5.0;

        let mut eccentric_params = circular_params;
        eccentric_params.ecc_moon = 1e-9;

        let time: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 0.05 - 0.75).collect();
        let a = evaluate(&circular_params, &time).unwrap();
        let b = evaluate(&eccentric_params, &time).unwrap();
        for k in 0..time.len() {
            assert_abs_diff_eq!(
                a.light_curve.flux_total[k],
                b.light_curve.flux_total[k],
                epsilon = 1e-6
            );
        }
    }
}
