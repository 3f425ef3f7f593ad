//! Client error taxonomy.

use thiserror::Error;

/// Errors from controller operations.
///
/// None of these are fatal; each is turned into a toast by the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("no character class selected")]
    InvalidOptions,

    #[error("site name or generated password missing")]
    MissingInput,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("server rejected request: {}", .0.as_deref().unwrap_or("no reason given"))]
    Server(Option<String>),

    #[error("clipboard write failed: {0}")]
    ClipboardDenied(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// User actions that can fail, used to pick the fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Generate,
    Copy,
    Save,
    Delete,
}

impl Operation {
    /// Generic failure text shown when nothing more specific is known.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Generate => "Failed to generate password",
            Operation::Copy => "Failed to copy password",
            Operation::Save => "Failed to save password",
            Operation::Delete => "Failed to delete password",
        }
    }
}

impl ClientError {
    /// Text shown to the user for this error raised by `op`.
    pub fn user_message(&self, op: Operation) -> String {
        match self {
            ClientError::InvalidOptions => "Please select at least one character type".to_string(),
            ClientError::MissingInput => {
                "Please enter a site name and generate a password".to_string()
            }
            ClientError::Server(Some(reason)) if !reason.is_empty() => reason.clone(),
            ClientError::Server(_)
            | ClientError::Transport(_)
            | ClientError::ClipboardDenied(_) => op.failure_message().to_string(),
        }
    }

    /// Whether the error deserves a developer console line.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::ClipboardDenied(_))
    }
}
