use wavedump_common::Real;
use wavedump_reader::Waveform;

use super::AnalysisError;
use crate::parameters::SampleWindow;

/// Mean and RMS of the leading baseline region of a waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BaselineStats {
    pub(crate) mean: Real,
    pub(crate) rms: Real,
}

/// Computes baseline statistics over `window`.
///
/// The RMS is taken over the raw sample values, not over their
/// deviation from the mean, so for a flat baseline at level `c` the
/// RMS equals `|c|`.
pub(crate) fn baseline_stats(
    waveform: &Waveform,
    window: SampleWindow,
) -> Result<BaselineStats, AnalysisError> {
    let samples = waveform
        .samples()
        .get(window.lower..window.upper)
        .ok_or(AnalysisError::WindowOutOfRange {
            window,
            samples: waveform.len(),
        })?;

    let size = samples.len() as Real;
    let sum: Real = samples.iter().sum();
    let sum_of_squares: Real = samples.iter().map(|s| s.powi(2)).sum();

    Ok(BaselineStats {
        mean: sum / size,
        rms: (sum_of_squares / size).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn window(lower: usize, upper: usize) -> SampleWindow {
        SampleWindow { lower, upper }
    }

    #[test]
    fn constant_baseline() {
        let waveform = Waveform::from(vec![100.0; 16]);
        let stats = baseline_stats(&waveform, window(0, 8)).unwrap();

        assert_approx_eq!(stats.mean, 100.0);
        assert_approx_eq!(stats.rms, 100.0);
    }

    #[test]
    fn negative_constant_baseline_has_positive_rms() {
        let waveform = Waveform::from(vec![-50.0; 16]);
        let stats = baseline_stats(&waveform, window(0, 16)).unwrap();

        assert_approx_eq!(stats.mean, -50.0);
        assert_approx_eq!(stats.rms, 50.0);
    }

    #[test]
    fn rms_is_not_centred_on_the_mean() {
        let waveform = Waveform::from(vec![3.0, 4.0, 3.0, 4.0]);
        let stats = baseline_stats(&waveform, window(0, 4)).unwrap();

        assert_approx_eq!(stats.mean, 3.5);
        // sqrt((9 + 16 + 9 + 16) / 4), not the standard deviation 0.5
        assert_approx_eq!(stats.rms, (12.5 as Real).sqrt());
    }

    #[test]
    fn window_ignores_samples_outside_it() {
        let mut samples = vec![10.0; 8];
        samples.extend_from_slice(&[9999.0; 8]);
        let stats = baseline_stats(&Waveform::from(samples), window(0, 8)).unwrap();

        assert_approx_eq!(stats.mean, 10.0);
    }

    #[test]
    fn short_waveform_is_an_error() {
        let waveform = Waveform::from(vec![1.0; 4]);
        let result = baseline_stats(&waveform, window(0, 8));

        assert!(matches!(
            result,
            Err(AnalysisError::WindowOutOfRange { samples: 4, .. })
        ));
    }
}
