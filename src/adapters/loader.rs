use crate::core::{Record, TableRequest};
use crate::utils::error::{Result, SearchError};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Records from a JSON document: an array of objects, an object with a `data`
/// array (DataTables' ajax source shape), or a single object.
pub fn records_from_json_str(content: &str) -> Result<Vec<Record>> {
    let json_data: serde_json::Value = serde_json::from_str(content)?;

    let items = match json_data {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut obj) => match obj.remove("data") {
            Some(serde_json::Value::Array(items)) => items,
            Some(other) => {
                obj.insert("data".to_string(), other);
                vec![serde_json::Value::Object(obj)]
            }
            None => vec![serde_json::Value::Object(obj)],
        },
        other => {
            tracing::warn!("Records document is neither an array nor an object: {}", other);
            Vec::new()
        }
    };

    let total = items.len();
    let records: Vec<Record> = items
        .into_iter()
        .filter_map(|item| match item {
            serde_json::Value::Object(obj) => Some(Record::from(obj)),
            _ => None,
        })
        .collect();

    if records.len() < total {
        tracing::warn!("Skipped {} non-object entries", total - records.len());
    }

    Ok(records)
}

/// Records from CSV with a header row. Every cell is kept as text.
pub fn records_from_csv_reader<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let data: HashMap<String, serde_json::Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.to_string(), serde_json::Value::String(cell.to_string())))
            .collect();
        records.push(Record { data });
    }

    Ok(records)
}

/// Load records from a `.json` or `.csv` file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let records = match extension.as_deref() {
        Some("json") => records_from_json_str(&std::fs::read_to_string(path)?)?,
        Some("csv") => records_from_csv_reader(std::fs::File::open(path)?)?,
        _ => {
            return Err(SearchError::UnsupportedInput {
                path: path.display().to_string(),
            })
        }
    };

    tracing::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn load_request<P: AsRef<Path>>(path: P) -> Result<TableRequest> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
