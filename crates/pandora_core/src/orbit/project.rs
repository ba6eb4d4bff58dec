//! Shared inclination/ascending-node rotation and barycentric split used by
//! both the circular and eccentric moon-orbit models (Design Note 9.2).

/// Rotate an orbital-plane position `(x_orb, y_orb)` by inclination `i`
/// (about the line of nodes, the x-axis) and then by ascending node `Omega`
/// (about the line of sight, the z-axis), returning the sky-plane
/// displacement `(dx, dy)` of the moon relative to the planet.
///
/// `i` and `omega` are in radians.
pub fn project_to_sky(x_orb: f64, y_orb: f64, i: f64, omega: f64) -> (f64, f64) {
    // Inclination tilts the orbital plane out of the sky plane about the x-axis.
    let x_incl = x_orb;
    let y_incl = y_orb * i.cos();

    // Ascending node rotates the tilted orbit about the line of sight.
    let (sin_omega, cos_omega) = omega.sin_cos();
    let dx = x_incl * cos_omega - y_incl * sin_omega;
    let dy = x_incl * sin_omega + y_incl * cos_omega;

    (dx, dy)
}

/// Split a planet-to-moon sky-plane separation `(dx, dy)` into absolute
/// planet and moon sky positions about a barycenter at `(x_bary, b_bary)`,
/// conserving the center of mass for the given `mass_ratio = M_moon / M_planet`.
pub fn barycentric_split(
    dx: f64,
    dy: f64,
    x_bary: f64,
    b_bary: f64,
    mass_ratio: f64,
) -> (f64, f64, f64, f64) {
    let k = mass_ratio / (1.0 + mass_ratio);
    let xp = x_bary - k * dx;
    let yp = b_bary - k * dy;
    let xm = xp + dx;
    let ym = yp + dy;
    (xp, yp, xm, ym)
}
