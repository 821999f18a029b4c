use crate::cli::OutputFormat;
use crate::errors::CogsError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

pub fn envelope_for(error: &anyhow::Error) -> ErrorEnvelope {
    if let Some(cogs) = error.downcast_ref::<CogsError>() {
        return ErrorEnvelope {
            code: cogs.kind().code().to_string(),
            message: cogs.message().to_string(),
            cause: cogs.cause().map(str::to_string),
        };
    }

    ErrorEnvelope {
        code: "COMMAND_FAILED".to_string(),
        message: format!("{error:#}"),
        cause: None,
    }
}

/// Human-readable rendering for text mode. Empty messages print nothing.
pub fn render_text(error: &anyhow::Error) -> Option<String> {
    let rendered = match error.downcast_ref::<CogsError>() {
        Some(cogs) => cogs.to_string(),
        None => format!("{error:#}"),
    };
    if rendered.is_empty() {
        None
    } else {
        Some(format!("ERROR: {rendered}"))
    }
}

pub fn emit_error_and_exit(error: anyhow::Error, format: OutputFormat) -> ! {
    tracing::debug!(error = ?error, "command failed");
    match format {
        OutputFormat::Text => {
            if let Some(text) = render_text(&error) {
                eprintln!("{text}");
            }
        }
        OutputFormat::Json => {
            let envelope = envelope_for(&error);
            match serde_json::to_string(&envelope) {
                Ok(line) => eprintln!("{line}"),
                Err(_) => eprintln!("{{\"code\":\"COMMAND_FAILED\",\"message\":\"{}\"}}", error),
            }
        }
    }
    std::process::exit(1)
}
