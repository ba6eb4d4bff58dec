//! Immutable, validated parameter bundle describing one star+planet+moon system.

use crate::error::{PandoraError, PandoraResult};

/// Full set of physical and sampling parameters for one planet+moon system.
///
/// All angles are stored in degrees at this boundary; internal math converts
/// to radians. Distances marked "R_star" are in units of the stellar radius;
/// `R_star` itself is in km; masses are in kg; times are in days.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemParams {
    // --- Star ---
    /// Quadratic limb-darkening coefficient u1.
    pub u1: f64,
    /// Quadratic limb-darkening coefficient u2.
    pub u2: f64,
    /// Stellar radius, km.
    pub r_star: f64,

    // --- Planet barycenter orbit ---
    /// Planet barycenter orbital period, days.
    pub per_bary: f64,
    /// Planet barycenter semimajor axis, units of R_star.
    pub a_bary: f64,
    /// Planet radius, units of R_star.
    pub r_planet: f64,
    /// Impact parameter of the barycenter orbit, dimensionless.
    pub b_bary: f64,
    /// Argument of periastron of the barycenter orbit, degrees.
    pub w_bary: f64,
    /// Eccentricity of the barycenter orbit, in [0, 1).
    pub ecc_bary: f64,
    /// Reference mid-transit time of the barycenter orbit, days.
    pub t0_bary: f64,
    /// Offset applied to `t0_bary`, days.
    pub t0_bary_offset: f64,
    /// Planet mass, kg.
    pub m_planet: f64,

    // --- Moon ---
    /// Moon radius, units of R_star.
    pub r_moon: f64,
    /// Moon orbital period around the planet, days.
    pub per_moon: f64,
    /// Time of periastron / mean-anomaly offset, normalized to [0, 1).
    pub tau_moon: f64,
    /// Longitude of ascending node of the moon orbit, degrees.
    pub omega_moon: f64,
    /// Inclination of the moon orbit, degrees.
    pub i_moon: f64,
    /// Eccentricity of the moon orbit, in [0, 1).
    pub ecc_moon: f64,
    /// Argument of periastron of the moon orbit, degrees.
    pub w_moon: f64,
    /// Moon-to-planet mass ratio, M_moon / M_planet.
    pub mass_ratio: f64,

    // --- Sampling / dispatch knobs ---
    /// Assumed days between nominal transit epochs.
    pub epoch_distance: f64,
    /// Temporal supersampling factor (>= 1).
    pub supersampling_factor: u32,
    /// k below which the small-body occultation approximation is used.
    pub occult_small_threshold: f64,
    /// Fraction of the Hill radius beyond which the moon orbit is flagged unphysical.
    pub hill_sphere_threshold: f64,
    /// Side length of the mutual-eclipse numerical integration grid.
    pub numerical_grid: u32,
}

impl SystemParams {
    /// Validate and construct a parameter bundle directly from its fields.
    ///
    /// Prefer [`SystemParamsBuilder`] at call sites assembling these
    /// incrementally; this constructor is the single place validation lives.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        u1: f64,
        u2: f64,
        r_star: f64,
        per_bary: f64,
        a_bary: f64,
        r_planet: f64,
        b_bary: f64,
        w_bary: f64,
        ecc_bary: f64,
        t0_bary: f64,
        t0_bary_offset: f64,
        m_planet: f64,
        r_moon: f64,
        per_moon: f64,
        tau_moon: f64,
        omega_moon: f64,
        i_moon: f64,
        ecc_moon: f64,
        w_moon: f64,
        mass_ratio: f64,
        epoch_distance: f64,
        supersampling_factor: u32,
        occult_small_threshold: f64,
        hill_sphere_threshold: f64,
        numerical_grid: u32,
    ) -> PandoraResult<Self> {
        if !(0.0..1.0).contains(&ecc_bary) {
            return Err(PandoraError::InvalidEccentricity {
                which: "ecc_bary",
                value: ecc_bary,
            });
        }
        if !(0.0..1.0).contains(&ecc_moon) {
            return Err(PandoraError::InvalidEccentricity {
                which: "ecc_moon",
                value: ecc_moon,
            });
        }
        if per_bary <= 0.0 {
            return Err(PandoraError::InvalidPeriod {
                which: "per_bary",
                value: per_bary,
            });
        }
        if per_moon <= 0.0 {
            return Err(PandoraError::InvalidPeriod {
                which: "per_moon",
                value: per_moon,
            });
        }
        if supersampling_factor < 1 {
            return Err(PandoraError::InvalidSupersamplingFactor {
                factor: supersampling_factor as i64,
            });
        }

        Ok(Self {
            u1,
            u2,
            r_star,
            per_bary,
            a_bary,
            r_planet,
            b_bary,
            w_bary,
            ecc_bary,
            t0_bary,
            t0_bary_offset,
            m_planet,
            r_moon,
            per_moon,
            tau_moon,
            omega_moon,
            i_moon,
            ecc_moon,
            w_moon,
            mass_ratio,
            epoch_distance,
            supersampling_factor,
            occult_small_threshold,
            hill_sphere_threshold,
            numerical_grid,
        })
    }
}

/// Incremental builder for [`SystemParams`] with Pandora's usual defaults
/// pre-filled (`w_bary = 0`, `ecc_bary = 0`, `ecc_moon = 0`, `w_moon = 0`,
/// `supersampling_factor = 1`, `occult_small_threshold = 0.01`,
/// `hill_sphere_threshold = 1.1`, `numerical_grid = 25`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParamsBuilder {
    u1: f64,
    u2: f64,
    r_star: f64,
    per_bary: f64,
    a_bary: f64,
    r_planet: f64,
    b_bary: f64,
    w_bary: f64,
    ecc_bary: f64,
    t0_bary: f64,
    t0_bary_offset: f64,
    m_planet: f64,
    r_moon: f64,
    per_moon: f64,
    tau_moon: f64,
    omega_moon: f64,
    i_moon: f64,
    ecc_moon: f64,
    w_moon: f64,
    mass_ratio: f64,
    epoch_distance: f64,
    supersampling_factor: u32,
    occult_small_threshold: f64,
    hill_sphere_threshold: f64,
    numerical_grid: u32,
}

impl Default for SystemParamsBuilder {
    fn default() -> Self {
        Self {
            u1: 0.0,
            u2: 0.0,
            r_star: 0.0,
            per_bary: 1.0,
            a_bary: 1.0,
            r_planet: 0.0,
            b_bary: 0.0,
            w_bary: 0.0,
            ecc_bary: 0.0,
            t0_bary: 0.0,
            t0_bary_offset: 0.0,
            m_planet: 0.0,
            r_moon: 0.0,
            per_moon: 1.0,
            tau_moon: 0.0,
            omega_moon: 0.0,
            i_moon: 90.0,
            ecc_moon: 0.0,
            w_moon: 0.0,
            mass_ratio: 0.0,
            epoch_distance: 1.0,
            supersampling_factor: 1,
            occult_small_threshold: 0.01,
            hill_sphere_threshold: 1.1,
            numerical_grid: 25,
        }
    }
}

macro_rules! setter {
    ($name:ident, $field:ident, $ty:ty) => {
        /// Set this field, consuming and returning the builder.
        pub fn $name(mut self, $field: $ty) -> Self {
            self.$field = $field;
            self
        }
    };
}

impl SystemParamsBuilder {
    /// Start a new builder with Pandora's defaults.
    pub fn new() -> Self {
        Self::default()
    }

    setter!(u1, u1, f64);
    setter!(u2, u2, f64);
    setter!(r_star, r_star, f64);
    setter!(per_bary, per_bary, f64);
    setter!(a_bary, a_bary, f64);
    setter!(r_planet, r_planet, f64);
    setter!(b_bary, b_bary, f64);
    setter!(w_bary, w_bary, f64);
    setter!(ecc_bary, ecc_bary, f64);
    setter!(t0_bary, t0_bary, f64);
    setter!(t0_bary_offset, t0_bary_offset, f64);
    setter!(m_planet, m_planet, f64);
    setter!(r_moon, r_moon, f64);
    setter!(per_moon, per_moon, f64);
    setter!(tau_moon, tau_moon, f64);
    setter!(omega_moon, omega_moon, f64);
    setter!(i_moon, i_moon, f64);
    setter!(ecc_moon, ecc_moon, f64);
    setter!(w_moon, w_moon, f64);
    setter!(mass_ratio, mass_ratio, f64);
    setter!(epoch_distance, epoch_distance, f64);
    setter!(supersampling_factor, supersampling_factor, u32);
    setter!(occult_small_threshold, occult_small_threshold, f64);
    setter!(hill_sphere_threshold, hill_sphere_threshold, f64);
    setter!(numerical_grid, numerical_grid, u32);

    /// Validate and build the final [`SystemParams`].
    pub fn build(self) -> PandoraResult<SystemParams> {
        SystemParams::new(
            self.u1,
            self.u2,
            self.r_star,
            self.per_bary,
            self.a_bary,
            self.r_planet,
            self.b_bary,
            self.w_bary,
            self.ecc_bary,
            self.t0_bary,
            self.t0_bary_offset,
            self.m_planet,
            self.r_moon,
            self.per_moon,
            self.tau_moon,
            self.omega_moon,
            self.i_moon,
            self.ecc_moon,
            self.w_moon,
            self.mass_ratio,
            self.epoch_distance,
            self.supersampling_factor,
            self.occult_small_threshold,
            self.hill_sphere_threshold,
            self.numerical_grid,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_build_successfully() {
        let params = SystemParamsBuilder::new()
            .r_star(696_000.0)
            .per_bary(10.0)
            .a_bary(15.0)
            .r_planet(0.1)
            .b_bary(0.3)
            .m_planet(1.0e27)
            .build()
            .unwrap();
        assert_eq!(params.supersampling_factor, 1);
        assert_eq!(params.numerical_grid, 25);
    }

    #[test]
    fn rejects_bad_eccentricity() {
        let err = SystemParamsBuilder::new().ecc_bary(1.0).build().unwrap_err();
        assert_eq!(
            err,
            PandoraError::InvalidEccentricity {
                which: "ecc_bary",
                value: 1.0
            }
        );
    }

    #[test]
    fn rejects_nonpositive_period() {
        let err = SystemParamsBuilder::new().per_moon(0.0).build().unwrap_err();
        assert_eq!(
            err,
            PandoraError::InvalidPeriod {
                which: "per_moon",
                value: 0.0
            }
        );
    }

    #[test]
    fn rejects_zero_supersampling_factor() {
        let err = SystemParamsBuilder::new()
            .supersampling_factor(0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            PandoraError::InvalidSupersamplingFactor { factor: 0 }
        );
    }
}
