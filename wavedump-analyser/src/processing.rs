use tracing::{debug, info};
use wavedump_common::Real;
use wavedump_reader::WavedumpFile;

use crate::{
    analysis::{self, AnalysisError},
    parameters::AnalysisSettings,
};

/// Index-aligned per-event summary statistics for a whole run.
///
/// `results[i]` derives from waveform `i` and from no other waveform;
/// all four vectors share the event collection's length.
#[derive(Debug, Default)]
pub(crate) struct AnalysisResults {
    pub(crate) baseline_rms: Vec<Real>,
    pub(crate) baseline_mean: Vec<Real>,
    pub(crate) peak_above_baseline: Vec<Real>,
    pub(crate) peak_time: Vec<Real>,
}

impl AnalysisResults {
    pub(crate) fn num_events(&self) -> usize {
        self.baseline_mean.len()
    }
}

/// Runs baseline and peak extraction over every decoded waveform in
/// event order.
///
/// The peak amplitude is reported relative to the event's own
/// baseline mean; the peak time is the sample index. Any extraction
/// failure aborts the whole batch, no partial results are returned.
pub(crate) fn analyse(
    wavedump: &WavedumpFile,
    settings: &AnalysisSettings,
) -> Result<AnalysisResults, AnalysisError> {
    info!("analysing {} waveforms", wavedump.num_events());

    let mut results = AnalysisResults::default();
    for (index, waveform) in wavedump.waveforms().iter().enumerate() {
        let baseline = analysis::baseline_stats(waveform, settings.baseline_window)?;
        let peak = analysis::find_peak(waveform, settings.peak_window)?;
        debug!(
            "event {index}: baseline mean {}, rms {}, peak {} at sample {}",
            baseline.mean, baseline.rms, peak.amplitude, peak.sample
        );

        results.baseline_rms.push(baseline.rms);
        results.baseline_mean.push(baseline.mean);
        results
            .peak_above_baseline
            .push(peak.amplitude - baseline.mean);
        results.peak_time.push(peak.sample as Real);
    }

    info!("analysis complete, {} events", results.num_events());
    Ok(results)
}
