use wavedump_common::{Real, SampleIndex};
use wavedump_reader::Waveform;

use super::AnalysisError;
use crate::parameters::SampleWindow;

/// The largest sample found in the peak search region, and where.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PeakStats {
    pub(crate) amplitude: Real,
    pub(crate) sample: SampleIndex,
}

/// Scans `[window.lower, window.upper - 1)` for the largest sample.
///
/// The candidate starts at amplitude zero on sample zero, so a region
/// holding only negative samples reports a zero peak at sample zero.
/// The comparison is strictly-greater, so the first sample attaining
/// the maximum wins, and the window's final sample is never
/// inspected.
// TODO: seed the candidate from the first windowed sample and scan
// through window.upper, once downstream spectra can absorb the shift.
pub(crate) fn find_peak(
    waveform: &Waveform,
    window: SampleWindow,
) -> Result<PeakStats, AnalysisError> {
    let samples = waveform
        .samples()
        .get(window.lower..window.upper.saturating_sub(1))
        .ok_or(AnalysisError::WindowOutOfRange {
            window,
            samples: waveform.len(),
        })?;

    let mut peak = PeakStats {
        amplitude: 0.0,
        sample: 0,
    };
    for (offset, sample) in samples.iter().enumerate() {
        if *sample > peak.amplitude {
            peak = PeakStats {
                amplitude: *sample,
                sample: window.lower + offset,
            };
        }
    }
    Ok(peak)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(lower: usize, upper: usize) -> SampleWindow {
        SampleWindow { lower, upper }
    }

    fn flat_with_spike(len: usize, level: Real, spike_at: usize, spike: Real) -> Waveform {
        let mut samples = vec![level; len];
        samples[spike_at] = spike;
        Waveform::from(samples)
    }

    #[test]
    fn single_spike_is_found() {
        let waveform = flat_with_spike(64, 0.0, 40, 7.5);
        let peak = find_peak(&waveform, window(32, 64)).unwrap();

        assert_eq!(
            peak,
            PeakStats {
                amplitude: 7.5,
                sample: 40
            }
        );
    }

    #[test]
    fn spike_below_the_window_is_ignored() {
        let waveform = flat_with_spike(64, 0.0, 10, 9000.0);
        let peak = find_peak(&waveform, window(32, 64)).unwrap();

        assert_eq!(peak.amplitude, 0.0);
    }

    #[test]
    fn all_negative_region_reports_zero_at_sample_zero() {
        let waveform = Waveform::from(vec![-5.0; 64]);
        let peak = find_peak(&waveform, window(32, 64)).unwrap();

        assert_eq!(
            peak,
            PeakStats {
                amplitude: 0.0,
                sample: 0
            }
        );
    }

    #[test]
    fn first_sample_attaining_the_maximum_wins() {
        let mut samples = vec![0.0; 64];
        samples[40] = 3.0;
        samples[50] = 3.0;
        let peak = find_peak(&Waveform::from(samples), window(32, 64)).unwrap();

        assert_eq!(peak.sample, 40);
    }

    #[test]
    fn final_window_sample_is_never_inspected() {
        let waveform = flat_with_spike(64, 1.0, 63, 9000.0);
        let peak = find_peak(&waveform, window(32, 64)).unwrap();

        assert_eq!(peak.amplitude, 1.0);
    }

    #[test]
    fn short_waveform_is_an_error() {
        let waveform = Waveform::from(vec![0.0; 32]);
        let result = find_peak(&waveform, window(32, 64));

        assert!(matches!(
            result,
            Err(AnalysisError::WindowOutOfRange { samples: 32, .. })
        ));
    }

    #[test]
    fn waveform_ending_inside_the_scan_is_an_error() {
        // The scan stops one short of the window's upper bound, so a
        // waveform of 63 samples still satisfies a [32, 64) window.
        let waveform = Waveform::from(vec![0.0; 63]);
        assert!(find_peak(&waveform, window(32, 64)).is_ok());

        let waveform = Waveform::from(vec![0.0; 62]);
        assert!(find_peak(&waveform, window(32, 64)).is_err());
    }
}
