use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Project not initialized or manifest files missing.
    Project,
    Add,
    Rm,
    Delete,
    /// Malformed manifest or configuration table.
    Parse,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Project => "PROJECT_ERROR",
            ErrorKind::Add => "ADD_ERROR",
            ErrorKind::Rm => "RM_ERROR",
            ErrorKind::Delete => "DELETE_ERROR",
            ErrorKind::Parse => "PARSE_ERROR",
        }
    }
}

/// Domain failure raised by a command. Rendered as the message, followed by a
/// `CAUSE:` line when an underlying error is attached.
#[derive(Debug, Error)]
#[error("{}", render(.message, .cause))]
pub struct CogsError {
    kind: ErrorKind,
    message: String,
    cause: Option<String>,
}

impl CogsError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn project(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Project, message)
    }

    pub fn add(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Add, message)
    }

    pub fn rm(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Rm, message)
    }

    pub fn delete(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Delete, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn with_cause(mut self, cause: impl Display) -> Self {
        self.cause = Some(cause.to_string());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

fn render(message: &str, cause: &Option<String>) -> String {
    match cause {
        Some(cause) => format!("{message}\nCAUSE: {cause}"),
        None => message.to_string(),
    }
}
