use std::fs::File;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use super::model::{LaunchDataset, LaunchRecord, Outcome};
use crate::error::DataLoadError;

pub const COL_LAUNCH_SITE: &str = "Launch Site";
pub const COL_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COL_BOOSTER_VERSION: &str = "Booster Version";

type Result<T> = std::result::Result<T, DataLoadError>;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least `Launch Site`, `Payload Mass (kg)`,
///   `class` and `Booster Version Category`; other columns are ignored
/// * `.json` – `[{ "Launch Site": "...", "Payload Mass (kg)": 500.0, ... }, ...]`
pub fn load_file(path: &Path) -> Result<LaunchDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => return Err(DataLoadError::UnsupportedExtension(other.to_string())),
    };

    LaunchDataset::from_records(records).ok_or(DataLoadError::Empty)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

/// Parse launch records from any CSV source.
pub fn read_csv<R: std::io::Read>(source: R) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let find = |name: &'static str| headers.iter().position(|h| h == name);
    let required = |name: &'static str| find(name).ok_or(DataLoadError::MissingColumn(name));

    let site_idx = required(COL_LAUNCH_SITE)?;
    let payload_idx = required(COL_PAYLOAD_MASS)?;
    let class_idx = required(COL_CLASS)?;
    let category_idx = required(COL_BOOSTER_CATEGORY)?;
    let version_idx = find(COL_BOOSTER_VERSION);

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();

        records.push(LaunchRecord {
            launch_site: cell(site_idx).to_string(),
            payload_mass_kg: parse_payload(cell(payload_idx), row_no)?,
            outcome: parse_class(cell(class_idx), row_no)?,
            booster_version_category: cell(category_idx).to_string(),
            booster_version: version_idx
                .map(|i| cell(i).to_string())
                .filter(|s| !s.is_empty()),
        });
    }

    Ok(records)
}

fn parse_payload(s: &str, row: usize) -> Result<f64> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(invalid(row, COL_PAYLOAD_MASS, s)),
    }
}

/// `class` is written as `0`/`1`, sometimes as `0.0`/`1.0`.
fn parse_class(s: &str, row: usize) -> Result<Outcome> {
    let class = s.parse::<f64>().ok().and_then(|v| {
        if v == 0.0 {
            Some(Outcome::Failure)
        } else if v == 1.0 {
            Some(Outcome::Success)
        } else {
            None
        }
    });
    class.ok_or_else(|| invalid(row, COL_CLASS, s))
}

fn invalid(row: usize, column: &'static str, value: &str) -> DataLoadError {
    DataLoadError::InvalidValue {
        row,
        column,
        value: value.to_string(),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Launch Site": "CCAFS LC-40",
///     "Payload Mass (kg)": 525.0,
///     "class": 0,
///     "Booster Version Category": "v1.0"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_json(&text)
}

/// Parse launch records from a records-oriented JSON document.
pub fn read_json(text: &str) -> Result<Vec<LaunchRecord>> {
    let root: JsonValue = serde_json::from_str(text)?;
    let Some(rows) = root.as_array() else {
        return Err(DataLoadError::NotRecords);
    };

    let mut records = Vec::with_capacity(rows.len());

    for (row_no, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or(DataLoadError::NotRecords)?;

        let payload = json_cell(obj, COL_PAYLOAD_MASS)?;
        let class = json_cell(obj, COL_CLASS)?;

        records.push(LaunchRecord {
            launch_site: json_text(json_cell(obj, COL_LAUNCH_SITE)?),
            payload_mass_kg: parse_payload(&json_text(payload), row_no)?,
            outcome: parse_class(&json_text(class), row_no)?,
            booster_version_category: json_text(json_cell(obj, COL_BOOSTER_CATEGORY)?),
            booster_version: obj
                .get(COL_BOOSTER_VERSION)
                .and_then(|v| v.as_str())
                .map(str::to_string),
        });
    }

    Ok(records)
}

fn json_cell<'a>(obj: &'a Map<String, JsonValue>, column: &'static str) -> Result<&'a JsonValue> {
    obj.get(column).ok_or(DataLoadError::MissingColumn(column))
}

fn json_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.trim().to_string(),
        other => other.to_string(),
    }
}
