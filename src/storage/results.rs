//! Storage result types
//!
//! Defines result structures returned by storage operations.

use std::io;
use std::path::PathBuf;

/// Outcome of a delete, move or copy
#[derive(Debug)]
pub enum FileOutcome {
    Succeeded,
    /// The source path did not exist; nothing was touched
    NotFound,
    Failed(io::Error),
}

impl FileOutcome {
    /// Collapse to the plain success flag
    pub fn succeeded(&self) -> bool {
        matches!(self, FileOutcome::Succeeded)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileOutcome::NotFound)
    }

    pub fn error(&self) -> Option<&io::Error> {
        match self {
            FileOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// Result of a file read
///
/// `content` holds whatever was read before `error` occurred.
#[derive(Debug)]
pub struct ReadResult {
    pub physical_path: PathBuf,
    pub content: String,
    pub found: bool,
    pub error: Option<io::Error>,
}

impl ReadResult {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}
