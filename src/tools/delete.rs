use crate::config::{self, ProjectConfig};
use crate::confirm::Confirm;
use crate::errors::CogsError;
use crate::project::Project;
use crate::remote::SpreadsheetClient;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;

pub const DELETE_WARNING: &str = "WARNING: This task will permanently destroy the Google Sheet and all COGS data.\n         Do you wish to proceed? [y/n]\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    /// The operator declined; nothing was touched.
    Aborted,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteReport {
    pub outcome: DeleteOutcome,
    pub title: String,
    pub project_root: String,
}

/// Delete the remote spreadsheet and then the local `.cogs` directory.
///
/// `connect` turns the stored credentials into a client and is only called
/// after the operator confirms. If the remote deletion fails the local project
/// is left as it was.
pub fn delete<C, F, S>(project: &Project, confirm: &mut C, connect: F) -> Result<DeleteReport>
where
    C: Confirm + ?Sized,
    F: FnOnce(&str) -> Result<S>,
    S: SpreadsheetClient,
{
    if !project.is_initialized() {
        return Err(CogsError::delete("").into());
    }

    let config = ProjectConfig::load(project)?;
    let require = |key: &str| {
        config.get(key).ok_or_else(|| {
            CogsError::delete(format!("COGS configuration does not contain '{key}'"))
        })
    };
    let sheet_id = require(config::GOOGLE_SHEET_ID)?;
    let title = require(config::TITLE)?;
    let credentials = require(config::CREDENTIALS)?;

    let project_root = project.root().display().to_string();
    if !confirm.confirm(DELETE_WARNING)? {
        tracing::info!("delete declined by operator");
        return Ok(DeleteReport {
            outcome: DeleteOutcome::Aborted,
            title: title.to_string(),
            project_root,
        });
    }

    let client = connect(credentials).map_err(|e| {
        CogsError::delete(format!("unable to authenticate with credentials '{credentials}'"))
            .with_cause(format!("{e:#}"))
    })?;

    tracing::info!(%title, root = %project_root, "removing COGS project");
    client.delete_spreadsheet(sheet_id).map_err(|e| {
        CogsError::delete(format!("Unable to delete Sheet '{title}'")).with_cause(e)
    })?;

    let cogs_dir = project.cogs_dir();
    if cogs_dir.exists() {
        fs::remove_dir_all(&cogs_dir)
            .with_context(|| format!("failed to remove '{}'", cogs_dir.display()))?;
    }

    Ok(DeleteReport {
        outcome: DeleteOutcome::Deleted,
        title: title.to_string(),
        project_root,
    })
}
