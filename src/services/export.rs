//! Tabular CSV export.
//!
//! Every field is quoted regardless of content, the document starts with a
//! UTF-8 BOM so spreadsheet tools pick the right encoding, and file names
//! carry an ISO date suffix. Missing or null cells become empty quoted
//! strings; nested values are JSON-stringified.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::services::{ServiceError, ServiceResult};

/// Byte-order mark prefixed to every export.
pub const UTF8_BOM: &str = "\u{feff}";

/// Ordered column descriptor: which row key to read and what to label it.
#[derive(Clone, Debug)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Serializes any row collection into the JSON values the CSV writer reads.
pub fn rows_to_values<T: Serialize>(rows: &[T]) -> ServiceResult<Vec<Value>> {
    rows.iter()
        .map(|row| serde_json::to_value(row).map_err(|e| ServiceError::Export(e.to_string())))
        .collect()
}

/// Renders the rows into a BOM-prefixed CSV document.
pub fn csv_document(rows: &[Value], columns: &[Column]) -> ServiceResult<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(columns.iter().map(|c| c.label.as_str()))
        .map_err(|e| ServiceError::Export(e.to_string()))?;

    for row in rows {
        let record: Vec<String> = columns
            .iter()
            .map(|column| cell_text(row.get(&column.key)))
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| ServiceError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ServiceError::Export(e.to_string()))?;
    let body = String::from_utf8(bytes).map_err(|e| ServiceError::Export(e.to_string()))?;
    Ok(format!("{UTF8_BOM}{body}"))
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(nested) => serde_json::to_string(nested).unwrap_or_default(),
    }
}

/// `{base}_{YYYY-MM-DD}.csv`
pub fn export_filename(base: &str, date: NaiveDate) -> String {
    format!("{base}_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the export under `dir` and returns the full path.
pub fn write_export(
    dir: &Path,
    base: &str,
    date: NaiveDate,
    rows: &[Value],
    columns: &[Column],
) -> ServiceResult<PathBuf> {
    let document = csv_document(rows, columns)?;
    fs::create_dir_all(dir).map_err(|e| ServiceError::Export(e.to_string()))?;
    let path = dir.join(export_filename(base, date));
    fs::write(&path, document).map_err(|e| ServiceError::Export(e.to_string()))?;
    Ok(path)
}
