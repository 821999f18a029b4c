pub mod add;
pub mod delete;
pub mod rm;

use crate::cli::Commands;
use crate::project::Project;
use anyhow::Result;
use serde_json::Value;

/// What a command hands back to the output layer: a one-line summary for text
/// mode and the serialized report for JSON mode.
#[derive(Debug)]
pub struct CommandReply {
    pub summary: String,
    pub payload: Value,
}

pub fn run_command(project: &Project, command: Commands) -> Result<CommandReply> {
    match command {
        Commands::Add { path, description } => add::add(project, path, description),
        Commands::Rm { paths } => rm::rm(project, paths),
        Commands::Delete => delete::delete(project),
    }
}
