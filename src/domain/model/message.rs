//! Output messages reporting the status of a run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Informational log entry.
    Log,
    /// Message addressed to the user.
    Message,
    /// Error report.
    Error,
}

/// A `(code, text, kind)` status entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputMessage {
    pub code: String,
    pub text: String,
    pub kind: MessageKind,
}

impl OutputMessage {
    pub fn new(code: impl Into<String>, text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
            kind,
        }
    }

    /// The single message written after a successful run.
    pub fn done() -> Self {
        Self::new("OK", "Done", MessageKind::Log)
    }
}

impl fmt::Display for OutputMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.text)
    }
}
