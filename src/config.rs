use crate::errors::CogsError;
use crate::project::Project;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::fs::File;

pub const GOOGLE_SHEET_ID: &str = "Google Sheet ID";
pub const TITLE: &str = "Title";
pub const CREDENTIALS: &str = "Credentials";

/// Key/value settings read from `.cogs/config.tsv`.
///
/// The file has two tab-separated columns and no header row. Later rows win
/// over earlier rows with the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    entries: IndexMap<String, String>,
}

impl ProjectConfig {
    /// Load the project configuration. A missing file yields an empty config so
    /// callers report the specific key they need.
    pub fn load(project: &Project) -> Result<Self> {
        let path = project.config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no project configuration found");
            return Ok(Self::default());
        }

        let file = File::open(&path).with_context(|| format!("failed to open '{}'", path.display()))?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut entries = IndexMap::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                CogsError::parse(format!("unable to read '{}' as TSV", path.display())).with_cause(e)
            })?;
            let (Some(key), Some(value)) = (record.get(0), record.get(1)) else {
                return Err(CogsError::parse(format!(
                    "'{}' line {} must have a key and a value",
                    path.display(),
                    idx + 1
                ))
                .into());
            };
            entries.insert(key.to_string(), value.to_string());
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
