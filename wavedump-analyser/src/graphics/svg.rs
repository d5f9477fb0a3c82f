use std::path::{Path, PathBuf};

use anyhow::Result;
use plotters::{coord::Shift, prelude::*};
use wavedump_common::{Real, sample_time_ns};
use wavedump_reader::Waveform;

use super::{
    FileFormat,
    histogram::{BinnedValues, bin_values},
};
use crate::{parameters::AnalysisSettings, processing::AnalysisResults};

const SUMMARY_SIZE: (u32, u32) = (1280, 960);
const EVENT_SIZE: (u32, u32) = (1024, 768);

/// Renders the four result histograms as one 2x2 panel.
///
/// The peak-above-baseline panel takes a logarithmic count axis, as
/// the pulse spectrum spans several decades while the baseline panels
/// do not.
pub(crate) fn save_summary_histograms(
    results: &AnalysisResults,
    output_path: &Path,
    format: FileFormat,
    num_bins: usize,
) -> Result<PathBuf> {
    let path = format.build_path(output_path, "summary")?;
    let root = SVGBackend::new(&path, SUMMARY_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((2, 2));
    draw_count_histogram(
        &panels[0],
        "Baseline Mean (ADC)",
        &bin_values(&results.baseline_mean, num_bins),
    )?;
    draw_count_histogram(
        &panels[1],
        "Baseline RMS (ADC)",
        &bin_values(&results.baseline_rms, num_bins),
    )?;
    draw_log_count_histogram(
        &panels[2],
        "Peak Above Baseline (ADC)",
        &bin_values(&results.peak_above_baseline, num_bins),
    )?;
    draw_count_histogram(
        &panels[3],
        "Peak Time (sample)",
        &bin_values(&results.peak_time, num_bins),
    )?;

    root.present()?;
    let result = path.clone();
    Ok(result)
}

fn draw_count_histogram(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    label: &str,
    data: &BinnedValues,
) -> Result<()> {
    let max_count = data.counts.iter().copied().max().unwrap_or(0).max(1);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(data.min..data.max(), 0u32..max_count + 1)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(label)
        .y_desc("Counts")
        .draw()?;

    chart.draw_series(data.counts.iter().enumerate().map(|(bin, count)| {
        let x0 = data.min + data.bin_width * bin as Real;
        Rectangle::new([(x0, 0), (x0 + data.bin_width, *count)], BLUE.filled())
    }))?;
    Ok(())
}

fn draw_log_count_histogram(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    label: &str,
    data: &BinnedValues,
) -> Result<()> {
    let max_count = data.counts.iter().copied().max().unwrap_or(0).max(1) as Real;

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(data.min..data.max(), (1.0..max_count * 10.0).log_scale())?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(label)
        .y_desc("Counts")
        .draw()?;

    // Empty bins have no height on a logarithmic axis.
    chart.draw_series(
        data.counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(bin, count)| {
                let x0 = data.min + data.bin_width * bin as Real;
                Rectangle::new(
                    [(x0, 1.0), (x0 + data.bin_width, *count as Real)],
                    BLUE.filled(),
                )
            }),
    )?;
    Ok(())
}

/// Renders one event's raw trace as an ADC-vs-sample scatter chart,
/// with the count axis spanning the digitiser dynamic range in eight
/// tick steps.
pub(crate) fn save_waveform_scatter(
    waveform: &Waveform,
    index: usize,
    settings: &AnalysisSettings,
    output_path: &Path,
    format: FileFormat,
) -> Result<PathBuf> {
    let path = format.build_path(output_path, &format!("event-{index}"))?;
    let root = SVGBackend::new(&path, EVENT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let len = waveform.len() as i32;
    let span_ns = sample_time_ns(waveform.len(), settings.ns_per_sample);
    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(format!("Event {index} ({span_ns} ns)"), ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(0..len, 0.0..settings.dynamic_range as Real)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .y_labels(8)
        .x_desc("Sample Number")
        .y_desc("ADC")
        .draw()?;

    chart.draw_series(
        waveform
            .samples()
            .iter()
            .enumerate()
            .map(|(sample, adc)| Circle::new((sample as i32, *adc), 2, RED.filled())),
    )?;

    root.present()?;
    let result = path.clone();
    Ok(result)
}
