use std::fmt;

// ---------------------------------------------------------------------------
// OccurrenceType – which of the four rule tables is meant
// ---------------------------------------------------------------------------

/// The occurrence category a rule table was mined from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccurrenceType {
    Accident,
    Incident,
    SeriousIncident,
    /// Rules mined over the full dataset, all categories combined.
    AllVariables,
}

impl OccurrenceType {
    /// Selector order shown in the UI.
    pub const ALL: [OccurrenceType; 4] = [
        OccurrenceType::Accident,
        OccurrenceType::Incident,
        OccurrenceType::SeriousIncident,
        OccurrenceType::AllVariables,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OccurrenceType::Accident => "Accident",
            OccurrenceType::Incident => "Incident",
            OccurrenceType::SeriousIncident => "Serious Incident",
            OccurrenceType::AllVariables => "All Variables",
        }
    }

    /// File-name stem of the table for this occurrence type.
    pub fn file_stem(&self) -> &'static str {
        match self {
            OccurrenceType::Accident => "association_rules_accident",
            OccurrenceType::Incident => "association_rules_incident",
            OccurrenceType::SeriousIncident => "association_rules_serious_incident",
            OccurrenceType::AllVariables => "association_rules_all_variables",
        }
    }

    /// Parse a display label. Unrecognized labels fall back to `Incident`,
    /// matching the historical selector behaviour; callers inside the app
    /// never hit this path because the selector is enum-backed.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Accident" => OccurrenceType::Accident,
            "Serious Incident" => OccurrenceType::SeriousIncident,
            "All Variables" => OccurrenceType::AllVariables,
            _ => OccurrenceType::Incident,
        }
    }
}

impl fmt::Display for OccurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// RuleRecord – one row of a rule table
// ---------------------------------------------------------------------------

/// A single association rule with its three quality metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleRecord {
    /// Fraction of records containing the full item set, in `[0, 1]`.
    pub support: f64,
    /// Conditional probability of the consequent given the antecedent.
    pub confidence: f64,
    /// Observed / expected co-occurrence ratio, `>= 0`.
    pub lift: f64,
    /// Opaque pass-through cells (antecedent/consequent item sets and any
    /// other source columns), aligned with [`RuleTable::item_columns`].
    pub items: Vec<String>,
}

// ---------------------------------------------------------------------------
// RuleTable – one complete loaded table
// ---------------------------------------------------------------------------

/// A loaded rule table. Immutable after load; filtering yields index views.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    /// Non-metric column names in source order.
    pub item_columns: Vec<String>,
    /// All rules (rows) in source order.
    pub rules: Vec<RuleRecord>,
}

impl RuleTable {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RuleCollection – the four tables of a session
// ---------------------------------------------------------------------------

/// The four rule tables, one per occurrence type. Loaded once per session
/// and kept read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct RuleCollection {
    pub accident: RuleTable,
    pub incident: RuleTable,
    pub serious_incident: RuleTable,
    pub all_variables: RuleTable,
}

impl RuleCollection {
    /// Select the table for an occurrence type. `AllVariables` resolves to
    /// the combined table regardless of what was active before.
    pub fn table(&self, occurrence: OccurrenceType) -> &RuleTable {
        match occurrence {
            OccurrenceType::Accident => &self.accident,
            OccurrenceType::Incident => &self.incident,
            OccurrenceType::SeriousIncident => &self.serious_incident,
            OccurrenceType::AllVariables => &self.all_variables,
        }
    }

    /// Total number of rules across all four tables.
    pub fn total_rules(&self) -> usize {
        self.accident.len()
            + self.incident.len()
            + self.serious_incident.len()
            + self.all_variables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(n: usize) -> RuleTable {
        RuleTable {
            item_columns: vec!["antecedents".into(), "consequents".into()],
            rules: (0..n)
                .map(|i| RuleRecord {
                    support: 0.1,
                    confidence: 0.5,
                    lift: 1.0,
                    items: vec![format!("a{i}"), format!("c{i}")],
                })
                .collect(),
        }
    }

    #[test]
    fn labels_round_trip() {
        for occ in OccurrenceType::ALL {
            assert_eq!(OccurrenceType::from_label(occ.label()), occ);
        }
    }

    #[test]
    fn unknown_label_falls_back_to_incident() {
        assert_eq!(
            OccurrenceType::from_label("Unheard Of"),
            OccurrenceType::Incident
        );
        assert_eq!(OccurrenceType::from_label(""), OccurrenceType::Incident);
    }

    #[test]
    fn all_variables_selects_combined_table() {
        let collection = RuleCollection {
            accident: table_with(1),
            incident: table_with(2),
            serious_incident: table_with(3),
            all_variables: table_with(6),
        };
        // Resolution is independent of any previously active table.
        for occ in OccurrenceType::ALL {
            let _ = collection.table(occ);
            assert_eq!(collection.table(OccurrenceType::AllVariables).len(), 6);
        }
        assert_eq!(collection.total_rules(), 12);
    }
}
