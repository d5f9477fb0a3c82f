use std::{fmt, str::FromStr};

use anyhow::{Error, anyhow};
use wavedump_common::{Nanoseconds, SampleIndex};

/// Half-open window of sample indices, `[lower, upper)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SampleWindow {
    pub(crate) lower: SampleIndex,
    pub(crate) upper: SampleIndex,
}

impl fmt::Display for SampleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

impl FromStr for SampleWindow {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let vals: Vec<_> = s.split(',').collect();
        if vals.len() == 2 {
            let window = SampleWindow {
                lower: SampleIndex::from_str(vals[0].trim())?,
                upper: SampleIndex::from_str(vals[1].trim())?,
            };
            if window.lower < window.upper {
                Ok(window)
            } else {
                Err(anyhow!(
                    "Window lower bound {} must be below upper bound {}",
                    window.lower,
                    window.upper
                ))
            }
        } else {
            Err(anyhow!(
                "Incorrect number of bounds in window, expected pattern '*,*', got '{s}'"
            ))
        }
    }
}

/// Digitiser geometry and analysis windows, assembled once from the
/// command line and passed by reference into each stage.
#[derive(Debug, Clone)]
pub(crate) struct AnalysisSettings {
    pub(crate) samples_per_waveform: usize,
    pub(crate) ns_per_sample: Nanoseconds,
    pub(crate) dynamic_range: u32,
    pub(crate) baseline_window: SampleWindow,
    pub(crate) peak_window: SampleWindow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_parses_from_bounds_pair() {
        let window = SampleWindow::from_str("1500,8192").unwrap();
        assert_eq!(
            window,
            SampleWindow {
                lower: 1500,
                upper: 8192
            }
        );
    }

    #[test]
    fn window_rejects_wrong_arity() {
        assert!(SampleWindow::from_str("1500").is_err());
        assert!(SampleWindow::from_str("0,1000,2000").is_err());
    }

    #[test]
    fn window_rejects_non_numeric_bounds() {
        assert!(SampleWindow::from_str("low,high").is_err());
    }

    #[test]
    fn window_rejects_inverted_bounds() {
        assert!(SampleWindow::from_str("1000,1000").is_err());
        assert!(SampleWindow::from_str("2000,1500").is_err());
    }
}
