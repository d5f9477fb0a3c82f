//! Per-waveform feature extraction.
//!
//! Both extractors operate on a fixed window of the waveform and are
//! pure functions of their input; neither carries state between
//! events.

pub(crate) mod baseline;
pub(crate) mod peak;

pub(crate) use baseline::baseline_stats;
pub(crate) use peak::find_peak;

use crate::parameters::SampleWindow;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AnalysisError {
    #[error("window {window} extends beyond the waveform length {samples}")]
    WindowOutOfRange {
        window: SampleWindow,
        samples: usize,
    },
}
