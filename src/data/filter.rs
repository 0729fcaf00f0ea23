use super::model::RuleTable;

// ---------------------------------------------------------------------------
// Filter criteria: three lower bounds, conjunctive
// ---------------------------------------------------------------------------

/// User-chosen lower bounds for the three rule metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCriteria {
    pub min_support: f64,
    pub min_confidence: f64,
    pub min_lift: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_support: 0.0,
            min_confidence: 0.0,
            min_lift: 0.0,
        }
    }
}

impl FilterCriteria {
    /// Keep each threshold within `[0, column max]` after a table switch.
    pub fn clamp_to(&mut self, bounds: &MetricBounds) {
        self.min_support = self.min_support.clamp(0.0, bounds.max_support);
        self.min_confidence = self.min_confidence.clamp(0.0, bounds.max_confidence);
        self.min_lift = self.min_lift.clamp(0.0, bounds.max_lift);
    }
}

// ---------------------------------------------------------------------------
// Per-table metric maxima, used to range the sliders
// ---------------------------------------------------------------------------

/// Column-wise maxima of the three metrics for one table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricBounds {
    pub max_support: f64,
    pub max_confidence: f64,
    pub max_lift: f64,
}

/// Compute the slider ranges for a table. An empty table yields all-zero
/// bounds: the sliders collapse to a fixed point at zero and the filtered
/// result is empty, which is valid rather than an error.
pub fn compute_bounds(table: &RuleTable) -> MetricBounds {
    let mut bounds = MetricBounds::default();
    for rule in &table.rules {
        bounds.max_support = bounds.max_support.max(rule.support);
        bounds.max_confidence = bounds.max_confidence.max(rule.confidence);
        bounds.max_lift = bounds.max_lift.max(rule.lift);
    }
    bounds
}

/// Return indices of rules passing all three thresholds, in source order.
///
/// The predicate is conjunctive and non-strict: a rule passes when
/// `support >= min_support && confidence >= min_confidence && lift >= min_lift`.
/// Pure function of its inputs; an empty result is valid.
pub fn filtered_indices(table: &RuleTable, criteria: &FilterCriteria) -> Vec<usize> {
    table
        .rules
        .iter()
        .enumerate()
        .filter(|(_, rule)| {
            rule.support >= criteria.min_support
                && rule.confidence >= criteria.min_confidence
                && rule.lift >= criteria.min_lift
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RuleRecord;

    fn rule(support: f64, confidence: f64, lift: f64) -> RuleRecord {
        RuleRecord {
            support,
            confidence,
            lift,
            items: Vec::new(),
        }
    }

    fn sample_table() -> RuleTable {
        RuleTable {
            item_columns: Vec::new(),
            rules: vec![rule(0.1, 0.5, 1.2), rule(0.3, 0.8, 2.0), rule(0.05, 0.9, 0.9)],
        }
    }

    fn criteria(s: f64, c: f64, l: f64) -> FilterCriteria {
        FilterCriteria {
            min_support: s,
            min_confidence: c,
            min_lift: l,
        }
    }

    #[test]
    fn zero_thresholds_keep_every_row_in_order() {
        let table = sample_table();
        let indices = filtered_indices(&table, &FilterCriteria::default());
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn thresholds_at_maxima_keep_rows_at_the_maxima() {
        let table = sample_table();
        let bounds = compute_bounds(&table);
        // Non-strict comparison: a row equal to a threshold stays in.
        let only_support = criteria(bounds.max_support, 0.0, 0.0);
        assert_eq!(filtered_indices(&table, &only_support), vec![1]);
        let only_confidence = criteria(0.0, bounds.max_confidence, 0.0);
        assert_eq!(filtered_indices(&table, &only_confidence), vec![2]);
    }

    #[test]
    fn conjunctive_scenario() {
        let table = sample_table();
        let indices = filtered_indices(&table, &criteria(0.2, 0.0, 1.0));
        assert_eq!(indices, vec![1]);
    }

    #[test]
    fn raising_any_threshold_never_grows_the_result() {
        let table = sample_table();
        let steps = [0.0, 0.04, 0.2, 0.6, 1.0, 2.5];
        for metric in 0..3 {
            let mut previous = usize::MAX;
            for &step in &steps {
                let mut crit = FilterCriteria::default();
                match metric {
                    0 => crit.min_support = step,
                    1 => crit.min_confidence = step,
                    _ => crit.min_lift = step,
                }
                let size = filtered_indices(&table, &crit).len();
                assert!(size <= previous);
                previous = size;
            }
        }
    }

    #[test]
    fn filtering_is_idempotent_and_leaves_the_table_untouched() {
        let table = sample_table();
        let crit = criteria(0.1, 0.5, 0.0);
        let first = filtered_indices(&table, &crit);
        let second = filtered_indices(&table, &crit);
        assert_eq!(first, second);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn empty_table_has_zero_bounds_and_no_matches() {
        let empty = RuleTable::default();
        assert_eq!(compute_bounds(&empty), MetricBounds::default());
        assert!(filtered_indices(&empty, &FilterCriteria::default()).is_empty());
        assert!(filtered_indices(&empty, &criteria(0.5, 0.5, 0.5)).is_empty());
    }

    #[test]
    fn clamp_pulls_thresholds_into_the_new_range() {
        let mut crit = criteria(0.9, 0.9, 5.0);
        crit.clamp_to(&MetricBounds {
            max_support: 0.3,
            max_confidence: 0.9,
            max_lift: 2.0,
        });
        assert_eq!(crit, criteria(0.3, 0.9, 2.0));
    }
}
