mod analysis;
mod graphics;
mod interactive;
mod parameters;
mod processing;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use wavedump_common::{DYNAMIC_RANGE, NS_PER_SAMPLE, Nanoseconds, SAMPLES_PER_WAVEFORM};
use wavedump_reader::load_wavedump_file;

use graphics::FileFormat;
use parameters::{AnalysisSettings, SampleWindow};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long)]
    file_name: PathBuf,

    #[clap(long, default_value_t = SAMPLES_PER_WAVEFORM)]
    samples_per_waveform: usize,

    #[clap(long, default_value_t = NS_PER_SAMPLE)]
    ns_per_sample: Nanoseconds,

    #[clap(long, default_value_t = DYNAMIC_RANGE)]
    dynamic_range: u32,

    #[clap(long, default_value = "0,1000")]
    baseline_window: SampleWindow,

    #[clap(long, default_value = "1500,8192")]
    peak_window: SampleWindow,

    #[clap(long, default_value = "100")]
    histogram_bins: usize,

    #[clap(short, long, default_value = "wavedump-plots")]
    output_path: PathBuf,

    #[clap(long, default_value = "svg")]
    format: FileFormat,

    #[clap(long, default_value = "false")]
    interactive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Cli::parse();

    let settings = AnalysisSettings {
        samples_per_waveform: args.samples_per_waveform,
        ns_per_sample: args.ns_per_sample,
        dynamic_range: args.dynamic_range,
        baseline_window: args.baseline_window,
        peak_window: args.peak_window,
    };

    let wavedump = load_wavedump_file(&args.file_name, settings.samples_per_waveform)
        .context("failed to decode wavedump file")?;
    info!(
        "loaded {} events from {}",
        wavedump.num_events(),
        args.file_name.display()
    );

    let results =
        processing::analyse(&wavedump, &settings).context("waveform analysis failed")?;

    let path = graphics::save_summary_histograms(
        &results,
        &args.output_path,
        args.format,
        args.histogram_bins,
    )
    .context("failed to render summary histograms")?;
    info!("wrote summary histograms to {}", path.display());

    if args.interactive {
        interactive::run_event_viewer(&wavedump, &settings, &args.output_path, args.format)?;
    }

    Ok(())
}
