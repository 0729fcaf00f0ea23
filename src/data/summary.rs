use super::model::RuleTable;

// ---------------------------------------------------------------------------
// Chart-ready views of a filtered row set
// ---------------------------------------------------------------------------

/// One marker of the support/confidence scatter plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub support: f64,
    pub confidence: f64,
    /// Drives marker size and colour.
    pub lift: f64,
}

/// Everything the chart panel needs, derived from one filtered row set.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// The `lift` column of the filtered rows, for histogram binning.
    pub lift_values: Vec<f64>,
    pub points: Vec<ScatterPoint>,
}

/// Build the chart views for the given filtered indices. Returns `None` for
/// an empty selection: no chart is drawn at all in that case.
pub fn chart_data(table: &RuleTable, indices: &[usize]) -> Option<ChartData> {
    if indices.is_empty() {
        return None;
    }
    let mut lift_values = Vec::with_capacity(indices.len());
    let mut points = Vec::with_capacity(indices.len());
    for &idx in indices {
        let rule = &table.rules[idx];
        lift_values.push(rule.lift);
        points.push(ScatterPoint {
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
        });
    }
    Some(ChartData {
        lift_values,
        points,
    })
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// One equal-width histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub center: f64,
    pub width: f64,
    pub count: usize,
}

/// Bin values into `ceil(sqrt(n))` equal-width bins over `[min, max]`.
/// All-equal input (zero range) collapses to a single bin holding everything.
pub fn histogram_bins(values: &[f64]) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= f64::EPSILON {
        return vec![HistogramBin {
            center: min,
            width: 1.0,
            count: values.len(),
        }];
    }

    let n_bins = (values.len() as f64).sqrt().ceil() as usize;
    let width = range / n_bins as f64;
    let mut counts = vec![0usize; n_bins];
    for &v in values {
        // The maximum lands in the last bin instead of overflowing past it.
        let idx = (((v - min) / width) as usize).min(n_bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            center: min + (i as f64 + 0.5) * width,
            width,
            count,
        })
        .collect()
}
