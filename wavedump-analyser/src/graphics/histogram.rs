use ndarray::array;
use ndarray_stats::histogram::{Bins, Edges, Grid, Histogram};
use tracing::warn;
use wavedump_common::Real;

/// Equal-width bin counts over a result vector, with enough of the
/// binning geometry to draw an axis.
pub(crate) struct BinnedValues {
    pub(crate) counts: Vec<u32>,
    pub(crate) min: Real,
    pub(crate) bin_width: Real,
}

impl BinnedValues {
    pub(crate) fn max(&self) -> Real {
        self.min + self.bin_width * self.counts.len() as Real
    }
}

pub(crate) fn make_bin_edges(num_bins: usize) -> Edges<usize> {
    Edges::from((0..=num_bins).collect::<Vec<_>>())
}

/// Bins `values` into `num_bins` equal-width bins spanning the data
/// range. The top of the range closes the final bin, so the maximum
/// value is counted rather than falling off the grid.
pub(crate) fn bin_values(values: &[Real], num_bins: usize) -> BinnedValues {
    let num_bins = num_bins.max(1);

    let min = values.iter().copied().fold(Real::INFINITY, Real::min);
    let max = values.iter().copied().fold(Real::NEG_INFINITY, Real::max);
    let (min, max) = if values.is_empty() {
        (0.0, 1.0)
    } else if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let bin_width = (max - min) / num_bins as Real;

    let grid = Grid::from(vec![Bins::new(make_bin_edges(num_bins))]);
    let mut histogram = Histogram::new(grid);
    for value in values {
        let bin = (((value - min) / bin_width) as usize).min(num_bins - 1);
        if histogram.add_observation(&array![bin]).is_err() {
            warn!("Bin not found for value {}", value);
        }
    }

    BinnedValues {
        counts: histogram.counts().iter().map(|c| *c as u32).collect(),
        min,
        bin_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_make_bin_edges() {
        let edges = make_bin_edges(4);
        assert_eq!(Edges::from(vec![0, 1, 2, 3, 4]), edges);
    }

    #[test]
    fn every_value_is_counted() {
        let values = vec![0.0, 1.0, 2.0, 3.0];
        let binned = bin_values(&values, 4);

        assert_eq!(binned.counts, vec![1, 1, 1, 1]);
        assert_approx_eq!(binned.min, 0.0);
        assert_approx_eq!(binned.bin_width, 0.75);
    }

    #[test]
    fn maximum_value_lands_in_the_final_bin() {
        let values = vec![0.0, 10.0];
        let binned = bin_values(&values, 5);

        assert_eq!(binned.counts, vec![1, 0, 0, 0, 1]);
    }

    #[test]
    fn constant_values_share_one_padded_bin() {
        let values = vec![7.0; 12];
        let binned = bin_values(&values, 3);

        assert_eq!(binned.counts.iter().sum::<u32>(), 12);
        assert!(binned.min < 7.0);
        assert!(binned.max() > 7.0);
    }

    #[test]
    fn empty_values_produce_empty_counts() {
        let binned = bin_values(&[], 4);

        assert_eq!(binned.counts, vec![0, 0, 0, 0]);
    }
}
