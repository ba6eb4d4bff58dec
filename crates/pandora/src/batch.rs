//! Data-parallel evaluation of many independent planet+moon systems sharing
//! one time grid.

use pandora_core::{light_curve, LightCurve, PandoraError, SystemParams};
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Failure of a single batch row: either a validation failure from the
/// engine, or a recovered panic during evaluation.
#[derive(Debug, thiserror::Error)]
pub enum BatchRowError {
    /// The engine rejected this system's parameters or time grid.
    #[error(transparent)]
    Pandora(#[from] PandoraError),
    /// Evaluating this row panicked; the batch was not poisoned, but this
    /// row's result is undefined and must be discarded.
    #[error("row evaluation panicked")]
    Panicked,
}

/// Evaluate the light curve for every system in `params`, against the shared
/// `time` grid, in parallel.
///
/// One slot of the returned vector corresponds to one input system. A
/// system whose evaluation panics does not poison the batch: that slot
/// becomes an `Err` and every other slot is still computed and returned.
pub fn batch_light_curve(
    params: &[SystemParams],
    time: &[f64],
) -> Vec<Result<LightCurve, BatchRowError>> {
    log::debug!(
        "evaluating batch of {} systems against a {}-sample time grid",
        params.len(),
        time.len()
    );

    let results: Vec<Result<LightCurve, BatchRowError>> = params
        .par_iter()
        .enumerate()
        .map(|(row, p)| evaluate_row(row, p, time))
        .collect();

    let failed_rows = results.iter().filter(|r| r.is_err()).count();
    if failed_rows > 0 {
        log::warn!(
            "batch of {} systems: {} row(s) failed evaluation",
            params.len(),
            failed_rows
        );
    }

    results
}

fn evaluate_row(row: usize, params: &SystemParams, time: &[f64]) -> Result<LightCurve, BatchRowError> {
    match catch_unwind(AssertUnwindSafe(|| light_curve(params, time))) {
        Ok(result) => Ok(result?),
        Err(_) => {
            log::warn!("row {row} panicked during evaluation; marking it undefined");
            Err(BatchRowError::Panicked)
        }
    }
}
