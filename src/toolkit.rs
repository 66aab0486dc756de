//! File toolkit
//!
//! Bundles the components built from one startup configuration so callers can
//! pass a single reference around.

use log::info;

use crate::classify::{Category, ClassificationTable};
use crate::config::FileStoreConfig;
use crate::digest::DigestEngine;
use crate::error::FileStoreError;
use crate::storage::FileStore;

#[derive(Debug, Clone, Default)]
pub struct FileToolkit {
    pub table: ClassificationTable,
    pub digests: DigestEngine,
    pub store: FileStore,
}

impl FileToolkit {
    pub fn from_config(config: &FileStoreConfig) -> Result<Self, FileStoreError> {
        let table = config.classification_table()?;
        let digests = config.digest_engine()?;
        let store = config.file_store();

        info!(
            "File toolkit ready: {} categories, {} digest, separator {:?}",
            table.categories().count(),
            config.digest.algorithm,
            store.normalizer().separator()
        );

        Ok(Self {
            table,
            digests,
            store,
        })
    }

    pub fn category_of(&self, filename: &str) -> Option<Category> {
        self.table.category_of(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config() {
        let toolkit = FileToolkit::from_config(&FileStoreConfig::default()).unwrap();
        assert_eq!(toolkit.category_of("clip.MP4"), Some(Category::Video));
        assert_eq!(
            toolkit.digests.digest_of_string("").as_str(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn test_default_matches_default_config() {
        let built = FileToolkit::default();
        let configured = FileToolkit::from_config(&FileStoreConfig::default()).unwrap();

        assert!(built.table.categories().eq(configured.table.categories()));
        assert_eq!(built.category_of("notes.TXT"), Some(Category::Document));
        assert_eq!(built.digests.buffer_size(), configured.digests.buffer_size());
        assert_eq!(built.store.normalizer(), configured.store.normalizer());
    }

    #[test]
    fn test_bad_algorithm_is_fatal() {
        let mut config = FileStoreConfig::default();
        config.digest.algorithm = "crc32".into();
        assert!(matches!(
            FileToolkit::from_config(&config),
            Err(FileStoreError::Digest(_))
        ));
    }
}
