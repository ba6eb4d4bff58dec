//! Pure orbital-mechanics and limb-darkened occultation engine for planet +
//! moon transit light curves.
//!
//! The engine is synchronous and allocation-light: every public function
//! takes its inputs by reference and returns freshly allocated output
//! vectors, with no shared mutable state, I/O, or logging. Callers that
//! need batch parallelism or structured logging build on top of this crate
//! (see the `pandora` crate).

pub mod barycenter;
pub mod constants;
pub mod eclipse;
pub mod error;
pub mod kepler;
pub mod limb_dark;
pub mod model;
pub mod orbit;
pub mod params;
pub mod supersample;
pub mod time_grid;

pub use error::{PandoraError, PandoraResult};
pub use model::{coordinates, light_curve, Coordinates, Diagnostics, LightCurve, ModelOutput};
pub use params::{SystemParams, SystemParamsBuilder};
