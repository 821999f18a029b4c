use crate::errors::CogsError;
use crate::manifest::{self, Field, Sheet, normalize_field_key};
use crate::project::{Project, RESERVED_TITLES};
use crate::table::{TableFormat, read_header_row};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct AddParams {
    pub path: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddReport {
    pub title: String,
    pub path: String,
    pub format: &'static str,
    pub fields_added: Vec<String>,
}

/// Track a new CSV/TSV file as a sheet and register its columns as fields.
///
/// Nothing is written unless every check passes.
pub fn add(project: &Project, params: AddParams) -> Result<AddReport> {
    project.validate()?;

    let AddParams { path, description } = params;
    let format = TableFormat::from_path(&path);
    let headers = read_header_row(&project.resolve_source(&path), format).map_err(|e| {
        CogsError::add(format!("unable to read {path} as {}", format.label())).with_cause(e)
    })?;
    if headers.is_empty() {
        return Err(CogsError::add(format!("{path} does not have a header row")).into());
    }

    let title = title_from_path(&path);
    if title.is_empty() {
        return Err(CogsError::add(format!("unable to derive a sheet title from '{path}'")).into());
    }
    if RESERVED_TITLES.contains(&title.as_str()) {
        return Err(CogsError::add(format!("table cannot use reserved name '{title}'")).into());
    }

    let mut sheets = manifest::load_sheets(project)?;
    if sheets.contains_key(&title) {
        return Err(
            CogsError::add(format!("'{title}' sheet already exists in this project")).into(),
        );
    }
    if let Some(existing) = sheets.values().find(|sheet| sheet.path == path) {
        return Err(CogsError::add(format!(
            "'{path}' is already tracked as sheet '{}'",
            existing.title
        ))
        .into());
    }

    let mut fields = manifest::load_fields(project)?;
    let mut fields_added = Vec::new();
    for header in &headers {
        let key = normalize_field_key(header);
        if !fields.contains_key(&key) {
            fields.insert(key.clone(), Field::from_header(header));
            fields_added.push(key);
        }
    }
    if !fields_added.is_empty() {
        manifest::save_fields(project, &fields)?;
    }

    sheets.insert(
        title.clone(),
        Sheet {
            id: String::new(),
            title: title.clone(),
            path: path.clone(),
            description: description.unwrap_or_default(),
        },
    );
    manifest::save_sheets(project, &sheets)?;

    tracing::info!(%title, %path, new_fields = fields_added.len(), "sheet added");
    Ok(AddReport {
        title,
        path,
        format: format.label(),
        fields_added,
    })
}

/// The file name with its directory and every extension stripped. Both `/`
/// and `\` separate directories.
pub fn title_from_path(path: &str) -> String {
    let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    file_name.split('.').next().unwrap_or_default().to_string()
}
