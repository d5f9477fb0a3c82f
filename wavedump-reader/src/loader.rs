use std::{fs, num::ParseFloatError, path::Path};

use thiserror::Error;
use tracing::{debug, warn};
use wavedump_common::Real;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read wavedump file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid sample {token:?} on line {line}: {source}")]
    InvalidSample {
        line: usize,
        token: String,
        source: ParseFloatError,
    },

    #[error("invalid event index: {index} should be less than {num_events}")]
    EventOutOfRange { index: usize, num_events: usize },

    #[error("samples per waveform must be non-zero")]
    InvalidWaveformLength,
}

/// One event's full digitised trace. Immutable once decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<Real>,
}

impl Waveform {
    pub fn samples(&self) -> &[Real] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<Real>> for Waveform {
    fn from(samples: Vec<Real>) -> Self {
        Waveform { samples }
    }
}

/// The decoded contents of a wavedump file.
#[derive(Debug)]
pub struct WavedumpFile {
    waveforms: Vec<Waveform>,
    samples_per_waveform: usize,
}

impl WavedumpFile {
    pub fn num_events(&self) -> usize {
        self.waveforms.len()
    }

    pub fn samples_per_waveform(&self) -> usize {
        self.samples_per_waveform
    }

    pub fn waveforms(&self) -> &[Waveform] {
        &self.waveforms
    }

    pub fn waveform(&self, index: usize) -> Result<&Waveform, LoaderError> {
        self.waveforms
            .get(index)
            .ok_or(LoaderError::EventOutOfRange {
                index,
                num_events: self.waveforms.len(),
            })
    }
}

/// Decodes wavedump text into waveforms of `samples_per_waveform`
/// samples each.
///
/// The event count is the line count divided by `samples_per_waveform`,
/// rounded down. Lines beyond the last complete event are dropped
/// without being parsed; the drop is logged as it loses data. A line
/// that does not parse as a number within a complete event aborts the
/// decode.
pub fn decode_wavedump(
    contents: &str,
    samples_per_waveform: usize,
) -> Result<WavedumpFile, LoaderError> {
    if samples_per_waveform == 0 {
        return Err(LoaderError::InvalidWaveformLength);
    }

    let tokens: Vec<&str> = contents.lines().collect();
    let num_events = tokens.len() / samples_per_waveform;
    let remainder = tokens.len() % samples_per_waveform;
    if remainder != 0 {
        warn!(
            "dropping {remainder} trailing lines, not enough for a complete waveform of {samples_per_waveform} samples"
        );
    }

    let samples = tokens
        .iter()
        .take(num_events * samples_per_waveform)
        .enumerate()
        .map(|(line, token)| {
            token
                .trim()
                .parse::<Real>()
                .map_err(|source| LoaderError::InvalidSample {
                    line: line + 1,
                    token: (*token).to_owned(),
                    source,
                })
        })
        .collect::<Result<Vec<Real>, LoaderError>>()?;

    let waveforms: Vec<Waveform> = samples
        .chunks_exact(samples_per_waveform)
        .map(|chunk| Waveform::from(chunk.to_vec()))
        .collect();

    debug!(
        "decoded {} waveforms of {samples_per_waveform} samples",
        waveforms.len()
    );
    Ok(WavedumpFile {
        waveforms,
        samples_per_waveform,
    })
}

/// Reads and decodes a wavedump file. The file handle is dropped once
/// the contents are in memory.
pub fn load_wavedump_file(
    path: &Path,
    samples_per_waveform: usize,
) -> Result<WavedumpFile, LoaderError> {
    let contents = fs::read_to_string(path)?;
    decode_wavedump(&contents, samples_per_waveform)
}
