//! Error types for parsing operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A parse failure, tied to the 1-based source line where it was detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line: usize,
    message: String,
}

impl ParseError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// Line number (1-based) of the offending line
    pub fn line(&self) -> usize {
        self.line
    }

    /// Human-readable message without the line suffix
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}", self.message, self.line)
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while loading a source file from disk
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io { path: PathBuf, source: io::Error },
    /// The file was read but its markup is malformed
    Parse { path: PathBuf, error: ParseError },
}

impl LoadError {
    pub fn path(&self) -> &PathBuf {
        match self {
            LoadError::Io { path, .. } | LoadError::Parse { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => {
                write!(f, "Error reading file '{}': {source}", path.display())
            }
            LoadError::Parse { error, .. } => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            LoadError::Parse { error, .. } => Some(error),
        }
    }
}
