//! Construction of the supersampled cadence time axis.

use crate::error::{PandoraError, PandoraResult};

/// Build a concatenated time axis of `epochs` linearly spaced blocks, each
/// centered on its own nominal transit epoch.
///
/// Each block has `round(epoch_duration * cadences_per_day * supersampling_factor)`
/// samples spanning `[t_e - epoch_duration/2, t_e + epoch_duration/2]`, with
/// `t_e = t0_bary + e * epoch_distance`.
pub fn build(
    t0_bary: f64,
    epochs: u32,
    epoch_duration: f64,
    cadences_per_day: f64,
    epoch_distance: f64,
    supersampling_factor: u32,
) -> PandoraResult<Vec<f64>> {
    if epoch_duration <= 0.0 || cadences_per_day <= 0.0 {
        return Err(PandoraError::InvalidTimeGridExtent {
            epochs,
            epoch_duration,
        });
    }

    let samples_per_epoch =
        (epoch_duration * cadences_per_day * supersampling_factor as f64).round() as usize;
    if samples_per_epoch == 0 {
        return Err(PandoraError::InvalidTimeGridExtent {
            epochs,
            epoch_duration,
        });
    }

    let denom = if samples_per_epoch > 1 {
        (samples_per_epoch - 1) as f64
    } else {
        1.0
    };

    let mut time = Vec::with_capacity(epochs as usize * samples_per_epoch);
    for e in 0..epochs {
        let t_e = t0_bary + e as f64 * epoch_distance;
        let start = t_e - epoch_duration / 2.0;
        let end = t_e + epoch_duration / 2.0;
        for i in 0..samples_per_epoch {
            let frac = i as f64 / denom;
            time.push(start + frac * (end - start));
        }
    }
    Ok(time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn single_epoch_spans_the_expected_window() {
        let time = build(100.0, 1, 1.0, 48.0, 365.25, 1).unwrap();
        assert_eq!(time.len(), 48);
        assert_abs_diff_eq!(time[0], 99.5, epsilon = 1e-9);
        assert_abs_diff_eq!(time[time.len() - 1], 100.5, epsilon = 1e-9);
    }

    #[test]
    fn multiple_epochs_are_concatenated_and_centered() {
        let time = build(100.0, 3, 1.0, 10.0, 50.0, 1).unwrap();
        assert_eq!(time.len(), 30);
        assert_abs_diff_eq!(time[15], 150.0, epsilon = 1.0 / 10.0);
    }

    #[test]
    fn supersampling_multiplies_sample_count() {
        let time_ss1 = build(100.0, 1, 1.0, 48.0, 365.25, 1).unwrap();
        let time_ss5 = build(100.0, 1, 1.0, 48.0, 365.25, 5).unwrap();
        assert_eq!(time_ss5.len(), time_ss1.len() * 5);
    }

    #[test]
    fn rejects_nonpositive_epoch_duration() {
        assert!(build(100.0, 1, 0.0, 48.0, 365.25, 1).is_err());
    }
}
