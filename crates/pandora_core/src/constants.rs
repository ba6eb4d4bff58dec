//! Physical and numerical constants shared across the engine.

/// Newtonian gravitational constant, m^3 kg^-1 s^-2.
pub const G: f64 = 6.674_08e-11;

/// Seconds per day, used to convert orbital periods given in days.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convergence tolerance for Newton iteration on Kepler's equation (radians).
pub const KEPLER_TOLERANCE: f64 = 1e-7;

/// Maximum Newton iterations before the Kepler solver fails soft.
pub const KEPLER_MAX_ITERATIONS: u32 = 50;

/// Convergence tolerance used by the Carlson symmetric elliptic integrals.
pub const ELLIPTIC_TOLERANCE: f64 = 1e-8;

/// Sentinel sky-plane coordinate used to push an unphysical moon off the stellar disc.
pub const OFF_DISC: f64 = 1e8;
