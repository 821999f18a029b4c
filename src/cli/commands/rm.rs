use super::CommandReply;
use crate::project::Project;
use crate::tools;
use anyhow::Result;

pub fn rm(project: &Project, paths: Vec<String>) -> Result<CommandReply> {
    let report = tools::rm(project, &paths)?;
    let summary = format!(
        "removed {} (pruned {} field(s))",
        report
            .removed
            .iter()
            .map(|title| format!("'{title}'"))
            .collect::<Vec<_>>()
            .join(", "),
        report.fields_pruned.len()
    );
    Ok(CommandReply {
        summary,
        payload: serde_json::to_value(report)?,
    })
}
