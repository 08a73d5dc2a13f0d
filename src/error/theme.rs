use std::fmt::{Display, Formatter};

/// Failures raised by the theme side-effect surface. Both variants are
/// recoverable: callers log them and keep the in-memory state authoritative.
#[derive(Debug)]
pub enum ThemeError {
    /// Persisted storage could not be read or written.
    Storage(String),
    /// The document-level visual-mode marker could not be updated.
    Document(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Document(msg) => write!(f, "Document Error: {}", msg),
        }
    }
}
