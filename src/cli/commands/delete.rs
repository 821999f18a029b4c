use super::CommandReply;
use crate::confirm::PromptConfirm;
use crate::project::Project;
use crate::remote::GoogleDriveClient;
use crate::tools::{self, DeleteOutcome};
use anyhow::Result;

pub fn delete(project: &Project) -> Result<CommandReply> {
    let mut confirm = PromptConfirm::stdio();
    let report = tools::delete(project, &mut confirm, |credentials| {
        GoogleDriveClient::from_credentials(project, credentials)
    })?;

    let summary = match report.outcome {
        DeleteOutcome::Aborted => "'delete' operation stopped".to_string(),
        DeleteOutcome::Deleted => format!(
            "removed COGS project '{}' from {}",
            report.title, report.project_root
        ),
    };
    Ok(CommandReply {
        summary,
        payload: serde_json::to_value(report)?,
    })
}
