//! The `sheet.tsv` / `field.tsv` manifest tables.
//!
//! Both tables are tab-delimited with a fixed header row and are always
//! rewritten in full, never edited row by row.

use crate::errors::CogsError;
use crate::fs::atomic_write;
use crate::project::Project;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

pub const SHEET_COLUMNS: [&str; 4] = ["ID", "Title", "Path", "Description"];
pub const FIELD_COLUMNS: [&str; 4] = ["Field", "Label", "Datatype", "Description"];
pub const DEFAULT_DATATYPE: &str = "text";

static NON_ALPHANUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid field key regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Remote sheet id; empty until the remote resource is created.
    #[serde(rename = "ID", default)]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Datatype", default)]
    pub datatype: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl Field {
    /// A field inferred from a column header, with the default datatype.
    pub fn from_header(header: &str) -> Self {
        Self {
            field: normalize_field_key(header),
            label: header.to_string(),
            datatype: DEFAULT_DATATYPE.to_string(),
            description: String::new(),
        }
    }
}

/// Title -> sheet, in manifest order.
pub type SheetTable = IndexMap<String, Sheet>;
/// Field key -> field, in manifest order.
pub type FieldTable = IndexMap<String, Field>;

/// Lowercase, collapse every run of non-alphanumerics into `_`, trim `_`.
pub fn normalize_field_key(header: &str) -> String {
    let lowered = header.to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

pub fn load_sheets(project: &Project) -> Result<SheetTable> {
    let rows: Vec<Sheet> = read_table(&project.sheet_manifest_path(), &["Title", "Path"])?;
    Ok(rows
        .into_iter()
        .map(|sheet| (sheet.title.clone(), sheet))
        .collect())
}

pub fn load_fields(project: &Project) -> Result<FieldTable> {
    let rows: Vec<Field> = read_table(&project.field_manifest_path(), &["Field", "Label"])?;
    Ok(rows
        .into_iter()
        .map(|field| (field.field.clone(), field))
        .collect())
}

pub fn save_sheets(project: &Project, sheets: &SheetTable) -> Result<()> {
    write_table(&project.sheet_manifest_path(), &SHEET_COLUMNS, sheets.values())
}

pub fn save_fields(project: &Project, fields: &FieldTable) -> Result<()> {
    write_table(&project.field_manifest_path(), &FIELD_COLUMNS, fields.values())
}

fn read_table<T: DeserializeOwned>(path: &Path, required: &[&str]) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;
    let parse_error = || CogsError::parse(format!("unable to read '{}' as TSV", path.display()));

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(file);
    let headers = reader
        .headers()
        .map_err(|e| parse_error().with_cause(e))?
        .clone();

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        return Err(parse_error()
            .with_cause(format!("missing column(s): {}", missing.join(", ")))
            .into());
    }

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record.map_err(|e| parse_error().with_cause(e))?);
    }
    Ok(rows)
}

fn write_table<'a, T: Serialize + 'a>(
    path: &Path,
    columns: &[&str],
    rows: impl IntoIterator<Item = &'a T>,
) -> Result<()> {
    atomic_write(path, |file| -> Result<(), csv::Error> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .terminator(csv::Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(file);
        writer.write_record(columns)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    })
    .with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "manifest rewritten");
    Ok(())
}
