//! Error handlers
//!
//! Reports errors to the operator log and maps them to process exit codes.

use crate::error::types::FileStoreError;
use log::error;

/// Report an error on the operator-visible channel
pub fn report_error(err: &FileStoreError) {
    error!("File store error: {}", err);
}

/// Convert error to a CLI exit code
pub fn error_to_exit_code(err: &FileStoreError) -> i32 {
    match err {
        FileStoreError::Storage(_) => 1,
        FileStoreError::Digest(_) => 1,
        FileStoreError::Usage(_) => 2,
        FileStoreError::Classify(_) => 3,
        FileStoreError::Config(_) => 3,
    }
}
