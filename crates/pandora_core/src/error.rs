//! Error types for parameter validation and grid construction.

/// Errors that can occur while building parameters or evaluating the model.
///
/// All variants are precondition violations (spec: "InvalidArgument"); none
/// are recovered internally. Kepler non-convergence and unphysical moon
/// geometry are *not* represented here — they are non-fatal diagnostics
/// surfaced on the result (see [`crate::model::Diagnostics`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PandoraError {
    /// `supersampling_factor` must be >= 1.
    #[error("supersampling_factor must be >= 1, got {factor}")]
    InvalidSupersamplingFactor {
        /// The offending factor.
        factor: i64,
    },

    /// The time array length is not evenly divisible by the supersampling factor.
    #[error("time array of length {len} is not divisible by supersampling_factor {factor}")]
    TimeGridNotDivisible {
        /// Length of the supplied array.
        len: usize,
        /// The supersampling factor it was checked against.
        factor: u32,
    },

    /// An eccentricity fell outside the valid range `[0, 1)`.
    #[error("{which} eccentricity must be in [0, 1), got {value}")]
    InvalidEccentricity {
        /// Which eccentricity failed (`"ecc_bary"` or `"ecc_moon"`).
        which: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A period was non-positive.
    #[error("{which} must be > 0, got {value}")]
    InvalidPeriod {
        /// Which period failed (`"per_bary"` or `"per_moon"`).
        which: &'static str,
        /// The offending value.
        value: f64,
    },

    /// `epochs` or `epoch_duration` produced an empty or malformed time grid.
    #[error("time_grid requires epochs > 0 and epoch_duration > 0, got epochs={epochs}, epoch_duration={epoch_duration}")]
    InvalidTimeGridExtent {
        /// Number of epochs requested.
        epochs: u32,
        /// Epoch duration in days.
        epoch_duration: f64,
    },
}

/// Result type used throughout the engine.
pub type PandoraResult<T> = Result<T, PandoraError>;
