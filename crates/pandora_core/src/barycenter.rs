//! Planet-barycenter x-coordinate on the stellar sky across transit epochs.

/// Compute the planet barycenter's x position (units of R_star) for each
/// sample in `time` (days).
///
/// `x = 0` at mid-transit and `x = +/-1` when the barycenter center crosses
/// the stellar limb on an equatorial (`b = 0`) chord. Handles drift between
/// the assumed `epoch_distance` and the true `per_bary` by accumulating the
/// difference per epoch.
pub fn track(
    time: &[f64],
    a_bary: f64,
    per_bary: f64,
    t0_bary: f64,
    t0_bary_offset: f64,
    epoch_distance: f64,
    ecc_bary: f64,
    w_bary_deg: f64,
) -> Vec<f64> {
    let w_bary = w_bary_deg.to_radians();

    let half_duration_circular = per_bary / (2.0 * std::f64::consts::PI) * (1.0 / a_bary).asin();
    let eccentricity_factor = (1.0 - ecc_bary * ecc_bary).sqrt() / (1.0 + ecc_bary * w_bary.cos());
    let half_duration = half_duration_circular * eccentricity_factor;

    time.iter()
        .map(|&t| {
            let epoch = ((t - t0_bary) / epoch_distance).round();
            let epoch_center = t0_bary + epoch * epoch_distance;
            let drift = epoch * (per_bary - epoch_distance);
            let local_time = t - epoch_center - t0_bary_offset - drift;
            local_time / half_duration
        })
        .collect()
}
