use crate::errors::CogsError;
use crate::manifest::{self, Sheet};
use crate::project::Project;
use crate::security::{canonicalize_within, unsafe_title_reason};
use crate::table::{TableFormat, read_header_row};
use anyhow::{Context, Result};
use indexmap::IndexSet;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct RmReport {
    pub removed: Vec<String>,
    pub fields_pruned: Vec<String>,
    pub cache_files_deleted: Vec<String>,
}

/// Stop tracking the sheets at `paths`, prune fields only they used, and delete
/// their cached copies.
pub fn rm(project: &Project, paths: &[String]) -> Result<RmReport> {
    project.validate()?;

    let sheets = manifest::load_sheets(project)?;
    let by_path: HashMap<&str, &Sheet> = sheets
        .values()
        .map(|sheet| (sheet.path.as_str(), sheet))
        .collect();

    let untracked: IndexSet<&str> = paths
        .iter()
        .map(String::as_str)
        .filter(|path| !by_path.contains_key(path))
        .collect();
    if !untracked.is_empty() {
        let listed: Vec<&str> = untracked.into_iter().collect();
        return Err(CogsError::rm(format!(
            "unable to remove untracked file(s): {}",
            listed.join(" ")
        ))
        .into());
    }

    let removed: IndexSet<String> = paths
        .iter()
        .filter_map(|path| by_path.get(path.as_str()))
        .map(|sheet| sheet.title.clone())
        .collect();

    // Read every header before touching the manifest so an unsafe title or an
    // unreadable cache aborts with nothing rewritten.
    let mut fields_in_kept: HashSet<String> = HashSet::new();
    let mut fields_candidate: HashSet<String> = HashSet::new();
    for (title, sheet) in &sheets {
        let headers = sheet_headers(project, sheet)?;
        if removed.contains(title) {
            fields_candidate.extend(headers);
        } else {
            fields_in_kept.extend(headers);
        }
    }
    let fields_to_remove: HashSet<&String> = fields_candidate.difference(&fields_in_kept).collect();

    let kept: manifest::SheetTable = sheets
        .iter()
        .filter(|(title, _)| !removed.contains(*title))
        .map(|(title, sheet)| (title.clone(), sheet.clone()))
        .collect();
    manifest::save_sheets(project, &kept)?;

    // Pruning matches the original column header (Label), not the field key.
    let mut fields = manifest::load_fields(project)?;
    let mut fields_pruned = Vec::new();
    fields.retain(|key, field| {
        let keep = !fields_to_remove.contains(&field.label);
        if !keep {
            fields_pruned.push(key.clone());
        }
        keep
    });
    manifest::save_fields(project, &fields)?;

    let mut cache_files_deleted = Vec::new();
    for title in &removed {
        let cached = canonicalize_within(&project.cogs_dir(), &cache_path(project, title)?)
            .map_err(|e| {
                CogsError::rm(format!("refusing to delete cache for '{title}'")).with_cause(e)
            })?;
        if cached.exists() {
            fs::remove_file(&cached)
                .with_context(|| format!("failed to delete '{}'", cached.display()))?;
            cache_files_deleted.push(cached.display().to_string());
        } else {
            tracing::debug!(%title, "no cached copy to delete");
        }
    }

    tracing::info!(
        removed = removed.len(),
        pruned = fields_pruned.len(),
        "sheets removed"
    );
    Ok(RmReport {
        removed: removed.into_iter().collect(),
        fields_pruned,
        cache_files_deleted,
    })
}

/// Path of a sheet's cached copy, refusing titles that are not a plain file stem.
fn cache_path(project: &Project, title: &str) -> Result<PathBuf> {
    match unsafe_title_reason(title) {
        Some(reason) => {
            Err(CogsError::rm(format!("invalid title for sheet '{title}', {reason}")).into())
        }
        None => Ok(project.cached_copy_path(title)),
    }
}

/// Column headers of a sheet, taken from its cached copy.
fn sheet_headers(project: &Project, sheet: &Sheet) -> Result<Vec<String>> {
    let cached = cache_path(project, &sheet.title)?;
    read_header_row(&cached, TableFormat::Tsv).map_err(|e| {
        CogsError::rm(format!("unable to read {} as a TSV", cached.display()))
            .with_cause(e)
            .into()
    })
}
