//! Block-averaging downsampler for temporal supersampling.

use crate::error::{PandoraError, PandoraResult};

/// Downsample `f` (length `C * factor`) to length `C` by averaging each
/// consecutive block of `factor` samples.
///
/// `factor == 1` returns a copy of `f` unchanged.
pub fn downsample(f: &[f64], factor: u32) -> PandoraResult<Vec<f64>> {
    let factor = factor as usize;
    if f.len() % factor != 0 {
        return Err(PandoraError::TimeGridNotDivisible {
            len: f.len(),
            factor: factor as u32,
        });
    }

    Ok(f.chunks_exact(factor)
        .map(|block| block.iter().sum::<f64>() / factor as f64)
        .collect())
}
