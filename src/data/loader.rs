use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Reader, Xlsx};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{OccurrenceType, RuleCollection, RuleRecord, RuleTable};

/// The three metric columns every rule table must carry.
const METRIC_COLUMNS: [&str; 3] = ["support", "confidence", "lift"];

/// Extensions probed for each table, in order of preference.
const EXTENSIONS: [&str; 3] = ["xlsx", "csv", "json"];

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// A rule table could not be loaded. Any variant aborts the whole session
/// render; the UI shows it as a single consolidated message.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error(
        "no data file for '{occurrence}': expected {stem}.xlsx, .csv or .json in {}",
        dir.display()
    )]
    MissingFile {
        occurrence: &'static str,
        stem: &'static str,
        dir: PathBuf,
    },

    #[error("failed to read {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("{} is missing required column '{column}'", path.display())]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
    },

    #[error("{}: row {row}: column '{column}' is not numeric", path.display())]
    NonNumeric {
        path: PathBuf,
        row: usize,
        column: &'static str,
    },
}

fn unreadable(path: &Path, message: impl ToString) -> DataLoadError {
    DataLoadError::Unreadable {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load all four rule tables from `dir`. The result is held by the app for
/// the process lifetime; files are only re-read on an explicit reload.
pub fn load_collection(dir: &Path) -> Result<RuleCollection, DataLoadError> {
    let collection = RuleCollection {
        accident: load_table(dir, OccurrenceType::Accident)?,
        incident: load_table(dir, OccurrenceType::Incident)?,
        serious_incident: load_table(dir, OccurrenceType::SeriousIncident)?,
        all_variables: load_table(dir, OccurrenceType::AllVariables)?,
    };
    log::info!(
        "loaded {} rules across 4 tables from {}",
        collection.total_rules(),
        dir.display()
    );
    Ok(collection)
}

/// Load one table, probing `<stem>.xlsx`, `<stem>.csv`, `<stem>.json`.
pub fn load_table(dir: &Path, occurrence: OccurrenceType) -> Result<RuleTable, DataLoadError> {
    for ext in EXTENSIONS {
        let path = dir.join(format!("{}.{ext}", occurrence.file_stem()));
        if !path.is_file() {
            continue;
        }
        let table = match ext {
            "xlsx" => load_xlsx(&path)?,
            "csv" => load_csv(&path)?,
            _ => load_json(&path)?,
        };
        log::info!(
            "{}: {} rules from {}",
            occurrence,
            table.len(),
            path.display()
        );
        return Ok(table);
    }
    Err(DataLoadError::MissingFile {
        occurrence: occurrence.label(),
        stem: occurrence.file_stem(),
        dir: dir.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Shared header handling
// ---------------------------------------------------------------------------

/// Positions of the three metric columns plus the remaining (item) columns
/// in source order.
struct ColumnLayout {
    metric_idx: [usize; 3],
    item_idx: Vec<usize>,
    item_columns: Vec<String>,
}

fn column_layout(path: &Path, headers: &[String]) -> Result<ColumnLayout, DataLoadError> {
    let mut metric_idx = [0usize; 3];
    for (slot, column) in METRIC_COLUMNS.iter().enumerate() {
        metric_idx[slot] = headers
            .iter()
            .position(|h| h == column)
            .ok_or(DataLoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            })?;
    }
    let item_idx: Vec<usize> = (0..headers.len())
        .filter(|i| !metric_idx.contains(i))
        .collect();
    let item_columns = item_idx.iter().map(|&i| headers[i].clone()).collect();
    Ok(ColumnLayout {
        metric_idx,
        item_idx,
        item_columns,
    })
}

fn check_metric(
    path: &Path,
    row: usize,
    column: &'static str,
    value: Option<f64>,
) -> Result<f64, DataLoadError> {
    match value {
        Some(v) if v.is_finite() => {
            if v < 0.0 {
                log::warn!(
                    "{}: row {row}: negative value {v} in '{column}'",
                    path.display()
                );
            }
            Ok(v)
        }
        _ => Err(DataLoadError::NonNumeric {
            path: path.to_path_buf(),
            row,
            column,
        }),
    }
}

// ---------------------------------------------------------------------------
// XLSX loader (the format the rule tables are published in)
// ---------------------------------------------------------------------------

fn load_xlsx(path: &Path) -> Result<RuleTable, DataLoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| unreadable(path, e))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| unreadable(path, "workbook has no sheets"))?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| unreadable(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_to_string).collect())
        .unwrap_or_default();
    let layout = column_layout(path, &headers)?;

    let mut rules = Vec::new();
    for (row_no, row) in rows.enumerate() {
        let mut metrics = [0.0f64; 3];
        for (slot, &idx) in layout.metric_idx.iter().enumerate() {
            let value = row.get(idx).and_then(cell_to_f64);
            metrics[slot] = check_metric(path, row_no, METRIC_COLUMNS[slot], value)?;
        }
        let items = layout
            .item_idx
            .iter()
            .map(|&idx| row.get(idx).map(cell_to_string).unwrap_or_default())
            .collect();
        rules.push(RuleRecord {
            support: metrics[0],
            confidence: metrics[1],
            lift: metrics[2],
            items,
        });
    }

    Ok(RuleTable {
        item_columns: layout.item_columns,
        rules,
    })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn cell_to_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names; `support`, `confidence` and
/// `lift` hold plain floats, every other column is opaque item data.
fn load_csv(path: &Path) -> Result<RuleTable, DataLoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| unreadable(path, e))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| unreadable(path, e))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let layout = column_layout(path, &headers)?;

    let mut rules = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| unreadable(path, e))?;
        let mut metrics = [0.0f64; 3];
        for (slot, &idx) in layout.metric_idx.iter().enumerate() {
            let value = record.get(idx).and_then(|s| s.trim().parse::<f64>().ok());
            metrics[slot] = check_metric(path, row_no, METRIC_COLUMNS[slot], value)?;
        }
        let items = layout
            .item_idx
            .iter()
            .map(|&idx| record.get(idx).unwrap_or("").to_string())
            .collect();
        rules.push(RuleRecord {
            support: metrics[0],
            confidence: metrics[1],
            lift: metrics[2],
            items,
        });
    }

    Ok(RuleTable {
        item_columns: layout.item_columns,
        rules,
    })
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` shape:
///
/// ```json
/// [
///   {
///     "antecedents": "Engine Failure",
///     "consequents": "Forced Landing",
///     "support": 0.12,
///     "confidence": 0.8,
///     "lift": 1.9
///   },
///   ...
/// ]
/// ```
#[derive(Debug, Deserialize)]
struct RawRule {
    support: f64,
    confidence: f64,
    lift: f64,
    #[serde(flatten)]
    items: serde_json::Map<String, JsonValue>,
}

fn load_json(path: &Path) -> Result<RuleTable, DataLoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| unreadable(path, e))?;
    let root: JsonValue = serde_json::from_str(&text).map_err(|e| unreadable(path, e))?;
    let records = root
        .as_array()
        .ok_or_else(|| unreadable(path, "expected a top-level JSON array"))?;

    // Column presence is checked up front so a short file reports the same
    // error shape as the other loaders.
    if let Some(first) = records.first() {
        let obj = first
            .as_object()
            .ok_or_else(|| unreadable(path, "row 0 is not a JSON object"))?;
        for column in METRIC_COLUMNS {
            if !obj.contains_key(column) {
                return Err(DataLoadError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }
    }

    let mut item_columns: Vec<String> = Vec::new();
    let mut rules = Vec::new();
    for (row_no, record) in records.iter().enumerate() {
        let raw: RawRule = serde_json::from_value(record.clone())
            .map_err(|e| unreadable(path, format!("row {row_no}: {e}")))?;
        for (slot, value) in [raw.support, raw.confidence, raw.lift].into_iter().enumerate() {
            check_metric(path, row_no, METRIC_COLUMNS[slot], Some(value))?;
        }
        if row_no == 0 {
            item_columns = raw.items.keys().cloned().collect();
        }
        let items = item_columns
            .iter()
            .map(|col| raw.items.get(col).map(json_to_string).unwrap_or_default())
            .collect();
        rules.push(RuleRecord {
            support: raw.support,
            confidence: raw.confidence,
            lift: raw.lift,
            items,
        });
    }

    Ok(RuleTable {
        item_columns,
        rules,
    })
}

fn json_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const SAMPLE_CSV: &str = "\
antecedents,consequents,support,confidence,lift
Engine Failure,Forced Landing,0.12,0.80,1.90
Bird Strike,Aborted Takeoff,0.05,0.60,1.10
";

    #[test]
    fn csv_table_keeps_item_columns_and_order() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "rules.csv", SAMPLE_CSV);
        let table = load_csv(&dir.path().join("rules.csv")).unwrap();
        assert_eq!(table.item_columns, vec!["antecedents", "consequents"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rules[0].support, 0.12);
        assert_eq!(table.rules[1].items, vec!["Bird Strike", "Aborted Takeoff"]);
    }

    #[test]
    fn missing_metric_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "rules.csv",
            "antecedents,support,confidence\nA,0.1,0.5\n",
        );
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn { column: "lift", .. }
        ));
    }

    #[test]
    fn non_numeric_metric_is_reported_with_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "rules.csv",
            "antecedents,support,confidence,lift\nA,0.1,oops,1.2\n",
        );
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::NonNumeric {
                row: 0,
                column: "confidence",
                ..
            }
        ));
    }

    #[test]
    fn json_loader_agrees_with_csv_loader() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"[
            {"antecedents": "Engine Failure", "consequents": "Forced Landing",
             "support": 0.12, "confidence": 0.80, "lift": 1.90},
            {"antecedents": "Bird Strike", "consequents": "Aborted Takeoff",
             "support": 0.05, "confidence": 0.60, "lift": 1.10}
        ]"#;
        let json_path = write_file(dir.path(), "rules.json", json);
        write_file(dir.path(), "rules.csv", SAMPLE_CSV);

        let from_json = load_json(&json_path).unwrap();
        let from_csv = load_csv(&dir.path().join("rules.csv")).unwrap();
        assert_eq!(from_json.rules, from_csv.rules);
    }

    #[test]
    fn empty_json_array_is_an_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "rules.json", "[]");
        let table = load_json(&path).unwrap();
        assert!(table.is_empty());
        assert!(table.item_columns.is_empty());
    }

    #[test]
    fn missing_file_aborts_the_collection_load() {
        let dir = tempfile::tempdir().unwrap();
        // Only one of the four tables present.
        write_file(
            dir.path(),
            "association_rules_accident.csv",
            SAMPLE_CSV,
        );
        let err = load_collection(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingFile {
                occurrence: "Incident",
                ..
            }
        ));
    }

    #[test]
    fn collection_loads_when_all_four_tables_exist() {
        let dir = tempfile::tempdir().unwrap();
        for occ in OccurrenceType::ALL {
            write_file(dir.path(), &format!("{}.csv", occ.file_stem()), SAMPLE_CSV);
        }
        let collection = load_collection(dir.path()).unwrap();
        assert_eq!(collection.total_rules(), 8);
        assert_eq!(collection.table(OccurrenceType::SeriousIncident).len(), 2);
    }
}
