//! Configuration management for the file store
//!
//! Everything here is resolved once at startup: the classification table,
//! the path separator, the digest settings and the log level.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use crate::classify::{CategoryEntry, ClassificationTable, default_entries};
use crate::digest::{DEFAULT_BUFFER_SIZE, DigestEngine, MD5, MIN_BUFFER_SIZE};
use crate::error::{ClassifyError, DigestError};
use crate::path::PathNormalizer;
use crate::storage::FileStore;

/// Config file looked up in the working directory (any format `config` knows)
pub const DEFAULT_CONFIG_NAME: &str = "netdisk-files";

/// Environment variable prefix, e.g. `NETDISK_FILES_LOG_LEVEL`
pub const ENV_PREFIX: &str = "NETDISK_FILES";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Log level (`error` .. `trace`, or `off`) used when `RUST_LOG` is unset.
    /// Per-module directives belong in `RUST_LOG`.
    pub log_level: String,

    /// Overrides the host's native separator; single character
    pub path_separator: Option<String>,

    pub digest: DigestConfig,

    /// Classification table in tie-break order
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DigestConfig {
    pub algorithm: String,
    /// Read chunk size in bytes
    pub buffer_size: usize,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            path_separator: None,
            digest: DigestConfig::default(),
            categories: default_entries(),
        }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            algorithm: MD5.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl FileStoreConfig {
    /// Load from `netdisk-files.*` in the working directory, if present,
    /// with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(File::with_name(DEFAULT_CONFIG_NAME).required(false))
    }

    /// Load from an explicit config file with environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: FileStoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if log::LevelFilter::from_str(&self.log_level).is_err() {
            return Err(config::ConfigError::Message(format!(
                "Invalid log_level: {:?} (expected off, error, warn, info, debug or trace; use RUST_LOG for per-module filters)",
                self.log_level
            )));
        }

        if let Some(sep) = &self.path_separator {
            if sep.chars().count() != 1 {
                return Err(config::ConfigError::Message(format!(
                    "path_separator must be a single character, got {:?}",
                    sep
                )));
            }
        }

        if self.digest.buffer_size < MIN_BUFFER_SIZE {
            return Err(config::ConfigError::Message(format!(
                "digest.buffer_size must be at least {} bytes",
                MIN_BUFFER_SIZE
            )));
        }

        self.classification_table()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(())
    }

    pub fn separator(&self) -> Option<char> {
        self.path_separator.as_deref().and_then(|s| s.chars().next())
    }

    pub fn normalizer(&self) -> PathNormalizer {
        match self.separator() {
            Some(sep) => PathNormalizer::with_separator(sep),
            None => PathNormalizer::host(),
        }
    }

    pub fn classification_table(&self) -> Result<ClassificationTable, ClassifyError> {
        ClassificationTable::from_entries(&self.categories)
    }

    pub fn digest_engine(&self) -> Result<DigestEngine, DigestError> {
        DigestEngine::new(&self.digest.algorithm, self.digest.buffer_size)
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(self.normalizer())
    }
}
