/// Data layer: core types, loading, filtering, and chart summaries.
///
/// Architecture:
/// ```text
///  .xlsx / .csv / .json  (four files, one per occurrence type)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → RuleCollection
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ RuleCollection  │  four RuleTables, selected by OccurrenceType
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply metric thresholds → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  filtered indices → histogram / scatter views
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
