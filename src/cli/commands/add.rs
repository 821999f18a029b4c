use super::CommandReply;
use crate::project::Project;
use crate::tools::{self, AddParams};
use anyhow::Result;

pub fn add(project: &Project, path: String, description: Option<String>) -> Result<CommandReply> {
    let report = tools::add(project, AddParams { path, description })?;
    let summary = match report.fields_added.len() {
        0 => format!("added '{}' from {}", report.title, report.path),
        n => format!(
            "added '{}' from {} ({n} new field{})",
            report.title,
            report.path,
            if n == 1 { "" } else { "s" }
        ),
    };
    Ok(CommandReply {
        summary,
        payload: serde_json::to_value(report)?,
    })
}
