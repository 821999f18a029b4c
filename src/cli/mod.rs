pub mod commands;
pub mod errors;
pub mod output;

use crate::project::Project;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "cogs",
    version,
    about = "Track local CSV/TSV tables as sheets of a cloud spreadsheet project"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "COGS_PROJECT_DIR",
        default_value = ".",
        help = "Directory containing the .cogs project"
    )]
    pub project_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true, help = "Suppress success summaries")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Track a TSV or CSV file as a new sheet")]
    Add {
        #[arg(value_name = "PATH", help = "Path to the table (.csv is comma-delimited, anything else tab)")]
        path: String,
        #[arg(short, long, help = "Description stored in sheet.tsv")]
        description: Option<String>,
    },
    #[command(about = "Stop tracking one or more files and delete their cached copies")]
    Rm {
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,
    },
    #[command(about = "Delete the remote spreadsheet and the local .cogs directory")]
    Delete,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let project = Project::at(&cli.project_dir);

    match commands::run_command(&project, cli.command) {
        Ok(reply) => {
            if let Err(error) = output::emit_reply(&reply, cli.format, cli.quiet) {
                errors::emit_error_and_exit(error, cli.format);
            }
            Ok(())
        }
        Err(error) => errors::emit_error_and_exit(error, cli.format),
    }
}
