use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::Result;
use tracing::info;
use wavedump_reader::WavedumpFile;

use crate::{
    graphics::{self, FileFormat},
    parameters::AnalysisSettings,
};

/// Prompts on stdin for event indices and renders one scatter chart
/// per accepted index, until the user declines or input ends.
pub(crate) fn run_event_viewer(
    wavedump: &WavedumpFile,
    settings: &AnalysisSettings,
    output_path: &Path,
    format: FileFormat,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    event_viewer_loop(
        wavedump,
        settings,
        output_path,
        format,
        stdin.lock(),
        &mut stdout,
    )
}

/// The viewer loop itself, generic over its streams. Invalid answers
/// and out-of-range indices are reported and re-prompted, never
/// fatal.
fn event_viewer_loop<R: BufRead, W: Write>(
    wavedump: &WavedumpFile,
    settings: &AnalysisSettings,
    output_path: &Path,
    format: FileFormat,
    input: R,
    output: &mut W,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "Plot an event? (y/n): ")?;
        output.flush()?;
        let Some(answer) = lines.next() else { break };
        match answer?.trim() {
            "y" | "Y" | "yes" => {}
            "n" | "N" | "no" => break,
            other => {
                writeln!(output, "Unrecognised answer {other:?}, expected y or n.")?;
                continue;
            }
        }

        write!(
            output,
            "Event number (0 to {}): ",
            wavedump.num_events().saturating_sub(1)
        )?;
        output.flush()?;
        let Some(entry) = lines.next() else { break };
        let entry = entry?;
        let index: usize = match entry.trim().parse() {
            Ok(index) => index,
            Err(_) => {
                writeln!(output, "{:?} is not an event number. Try again.", entry.trim())?;
                continue;
            }
        };

        match wavedump.waveform(index) {
            Ok(waveform) => {
                let path =
                    graphics::save_waveform_scatter(waveform, index, settings, output_path, format)?;
                info!("wrote event {index} to {}", path.display());
                writeln!(output, "Wrote {}", path.display())?;
            }
            Err(e) => writeln!(output, "{e}. Try again.")?,
        }
    }
    Ok(())
}
