use crate::cli::OutputFormat;
use crate::cli::commands::CommandReply;
use anyhow::Result;
use std::io::Write;

pub fn emit_reply(reply: &CommandReply, format: OutputFormat, quiet: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    match format {
        OutputFormat::Text => {
            if quiet || reply.summary.is_empty() {
                return Ok(());
            }
            writeln!(handle, "{}", reply.summary)?;
        }
        OutputFormat::Json => {
            if quiet {
                serde_json::to_writer(&mut handle, &reply.payload)?;
            } else {
                serde_json::to_writer_pretty(&mut handle, &reply.payload)?;
            }
            handle.write_all(b"\n")?;
        }
    }
    Ok(())
}
