//! Error types
//!
//! Defines domain-specific error types for each module of the file store.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// File operation errors
#[derive(Debug)]
pub enum StorageError {
    CreationFailed(PathBuf, io::Error),
    WriteFailed(PathBuf, io::Error),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::CreationFailed(p, e) => {
                write!(f, "Failed to create file {}: {}", p.display(), e)
            }
            StorageError::WriteFailed(p, e) => {
                write!(f, "Failed to write file {}: {}", p.display(), e)
            }
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::CreationFailed(_, e)
            | StorageError::WriteFailed(_, e)
            | StorageError::IoError(e) => Some(e),
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Content digest errors
#[derive(Debug)]
pub enum DigestError {
    Unavailable(String),
    IoError(PathBuf, io::Error),
    InvalidDigest(String),
    Mismatch { expected: String, actual: String },
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestError::Unavailable(alg) => write!(f, "Digest algorithm unavailable: {}", alg),
            DigestError::IoError(p, e) => write!(f, "Failed to digest {}: {}", p.display(), e),
            DigestError::InvalidDigest(d) => write!(f, "Invalid digest: {}", d),
            DigestError::Mismatch { expected, actual } => {
                write!(f, "Digest mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for DigestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DigestError::IoError(_, e) => Some(e),
            _ => None,
        }
    }
}

/// Classification table construction errors
#[derive(Debug)]
pub enum ClassifyError {
    DuplicateCategory(String),
    EmptyTable,
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::DuplicateCategory(c) => write!(f, "Category listed twice: {}", c),
            ClassifyError::EmptyTable => write!(f, "Classification table has no categories"),
        }
    }
}

impl std::error::Error for ClassifyError {}

/// General error that encompasses all error types
#[derive(Debug)]
pub enum FileStoreError {
    Storage(StorageError),
    Digest(DigestError),
    Classify(ClassifyError),
    Config(config::ConfigError),
    Usage(String),
}

impl fmt::Display for FileStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStoreError::Storage(e) => write!(f, "Storage error: {}", e),
            FileStoreError::Digest(e) => write!(f, "Digest error: {}", e),
            FileStoreError::Classify(e) => write!(f, "Classification error: {}", e),
            FileStoreError::Config(e) => write!(f, "Configuration error: {}", e),
            FileStoreError::Usage(e) => write!(f, "Usage error: {}", e),
        }
    }
}

impl std::error::Error for FileStoreError {}

impl From<StorageError> for FileStoreError {
    fn from(error: StorageError) -> Self {
        FileStoreError::Storage(error)
    }
}

impl From<DigestError> for FileStoreError {
    fn from(error: DigestError) -> Self {
        FileStoreError::Digest(error)
    }
}

impl From<ClassifyError> for FileStoreError {
    fn from(error: ClassifyError) -> Self {
        FileStoreError::Classify(error)
    }
}

impl From<io::Error> for FileStoreError {
    fn from(error: io::Error) -> Self {
        FileStoreError::Storage(StorageError::IoError(error))
    }
}

impl From<config::ConfigError> for FileStoreError {
    fn from(error: config::ConfigError) -> Self {
        FileStoreError::Config(error)
    }
}
