use std::path::{Path, PathBuf};

use crate::data::filter::{compute_bounds, filtered_indices, FilterCriteria, MetricBounds};
use crate::data::loader::load_collection;
use crate::data::model::{OccurrenceType, RuleCollection, RuleTable};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Directory the four rule tables were (or will be) loaded from.
    pub data_dir: PathBuf,

    /// Loaded collection; read-only for the rest of the session.
    /// `None` while the session is in the load-error state.
    pub collection: Option<RuleCollection>,

    /// Consolidated load failure shown instead of the dashboard.
    pub load_error: Option<String>,

    /// Currently selected occurrence type.
    pub active: OccurrenceType,

    /// Slider ranges for the active table (cached once per table switch).
    pub bounds: MetricBounds,

    /// Current threshold selections.
    pub criteria: FilterCriteria,

    /// Indices of rules passing the current thresholds (cached).
    pub visible_indices: Vec<usize>,
}

impl AppState {
    /// Start a session against `data_dir`, loading all four tables once.
    pub fn new(data_dir: PathBuf) -> Self {
        let mut state = Self {
            data_dir,
            collection: None,
            load_error: None,
            // First entry of the selector.
            active: OccurrenceType::Accident,
            bounds: MetricBounds::default(),
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
        };
        state.reload();
        state
    }

    /// (Re)load the collection from `data_dir`. On failure the session
    /// enters the blocking error state; nothing downstream is reachable.
    pub fn reload(&mut self) {
        match load_collection(&self.data_dir) {
            Ok(collection) => {
                self.collection = Some(collection);
                self.load_error = None;
                self.select_table(self.active);
            }
            Err(e) => {
                log::error!("failed to load rule tables: {e}");
                self.collection = None;
                self.load_error = Some(e.to_string());
                self.visible_indices.clear();
            }
        }
    }

    /// Point the session at a different directory and load it.
    pub fn open_data_dir(&mut self, dir: &Path) {
        self.data_dir = dir.to_path_buf();
        self.reload();
    }

    /// Switch the active table: recompute its bounds, clamp the thresholds
    /// into the new ranges, and refilter.
    pub fn select_table(&mut self, occurrence: OccurrenceType) {
        self.active = occurrence;
        if let Some(collection) = &self.collection {
            self.bounds = compute_bounds(collection.table(occurrence));
            self.criteria.clamp_to(&self.bounds);
        }
        self.refilter();
    }

    /// Recompute `visible_indices` after a threshold change.
    pub fn refilter(&mut self) {
        match &self.collection {
            Some(collection) => {
                self.visible_indices =
                    filtered_indices(collection.table(self.active), &self.criteria);
            }
            None => self.visible_indices.clear(),
        }
    }

    /// The active table, if the session loaded successfully.
    pub fn active_table(&self) -> Option<&RuleTable> {
        self.collection.as_ref().map(|c| c.table(self.active))
    }
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

    fn state_with_collection() -> AppState {
        let mut state = AppState::new(PathBuf::from("/nonexistent"));
        assert!(state.load_error.is_some());
        state.collection = Some(RuleCollection {
            accident: RuleTable {
                item_columns: Vec::new(),
                rules: vec![rule(0.1, 0.5, 1.2), rule(0.3, 0.8, 2.0)],
            },
            incident: RuleTable {
                item_columns: Vec::new(),
                rules: vec![rule(0.05, 0.4, 0.9)],
            },
            serious_incident: RuleTable::default(),
            all_variables: RuleTable {
                item_columns: Vec::new(),
                rules: vec![rule(0.1, 0.5, 1.2), rule(0.3, 0.8, 2.0), rule(0.05, 0.4, 0.9)],
            },
        });
        state.load_error = None;
        state.select_table(OccurrenceType::Accident);
        state
    }

    #[test]
    fn missing_data_dir_puts_the_session_in_error_state() {
        let state = AppState::new(PathBuf::from("/nonexistent"));
        assert!(state.collection.is_none());
        assert!(state.load_error.is_some());
        assert!(state.visible_indices.is_empty());
    }

    #[test]
    fn table_switch_recomputes_bounds_and_clamps_thresholds() {
        let mut state = state_with_collection();
        assert_eq!(state.bounds.max_support, 0.3);

        state.criteria.min_support = 0.2;
        state.refilter();
        assert_eq!(state.visible_indices, vec![1]);

        // Incident's max support is 0.05, so the threshold clamps down and
        // the single row stays visible.
        state.select_table(OccurrenceType::Incident);
        assert_eq!(state.bounds.max_support, 0.05);
        assert_eq!(state.criteria.min_support, 0.05);
        assert_eq!(state.visible_indices, vec![0]);
    }

    #[test]
    fn empty_table_collapses_to_zero_bounds() {
        let mut state = state_with_collection();
        state.criteria.min_lift = 1.5;
        state.select_table(OccurrenceType::SeriousIncident);
        assert_eq!(state.bounds, MetricBounds::default());
        assert_eq!(state.criteria.min_lift, 0.0);
        assert!(state.visible_indices.is_empty());
    }
}
