//! Classification table
//!
//! Ordered mapping from category to its extension set. The first category in
//! table order that lists an extension wins.

use log::debug;
use serde::Deserialize;
use std::collections::HashSet;

use super::category::Category;
use super::defaults::DEFAULT_CATEGORIES;
use crate::error::ClassifyError;

/// One row of the classification table as it appears in configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryEntry {
    pub category: Category,
    pub extensions: Vec<String>,
}

impl CategoryEntry {
    pub fn new(category: Category, extensions: &[&str]) -> Self {
        Self {
            category,
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Built-in table rows in default order
pub fn default_entries() -> Vec<CategoryEntry> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(category, extensions)| CategoryEntry::new(*category, extensions))
        .collect()
}

/// Returns the substring after the last `.`, or `None` when there is no `.`.
///
/// A trailing dot yields `Some("")`, which is distinct from no extension.
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.rfind('.').map(|idx| &filename[idx + 1..])
}

#[derive(Debug, Clone)]
pub struct ClassificationTable {
    rows: Vec<(Category, HashSet<String>)>,
}

impl Default for ClassificationTable {
    fn default() -> Self {
        let rows = DEFAULT_CATEGORIES
            .iter()
            .map(|(category, extensions)| {
                (*category, extensions.iter().map(|e| e.to_string()).collect())
            })
            .collect();
        Self { rows }
    }
}

impl ClassificationTable {
    /// Build a table from configured rows, keeping their order.
    ///
    /// Extensions are trimmed, lower-cased and stripped of one leading dot.
    pub fn from_entries(entries: &[CategoryEntry]) -> Result<Self, ClassifyError> {
        if entries.is_empty() {
            return Err(ClassifyError::EmptyTable);
        }

        let mut rows: Vec<(Category, HashSet<String>)> = Vec::with_capacity(entries.len());
        for entry in entries {
            if rows.iter().any(|(c, _)| *c == entry.category) {
                return Err(ClassifyError::DuplicateCategory(entry.category.to_string()));
            }
            let extensions = entry
                .extensions
                .iter()
                .map(|e| {
                    let e = e.trim();
                    e.strip_prefix('.').unwrap_or(e).to_lowercase()
                })
                .filter(|e| !e.is_empty())
                .collect();
            rows.push((entry.category, extensions));
        }

        debug!("Built classification table with {} categories", rows.len());
        Ok(Self { rows })
    }

    /// Category of a filename by its lower-cased extension
    pub fn category_of(&self, filename: &str) -> Option<Category> {
        let ext = extension_of(filename)?.to_lowercase();
        self.rows
            .iter()
            .find(|(_, extensions)| extensions.contains(&ext))
            .map(|(category, _)| *category)
    }

    /// Extensions registered for a category
    pub fn extensions(&self, category: Category) -> Option<&HashSet<String>> {
        self.rows
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, extensions)| extensions)
    }

    /// Categories in tie-break order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.rows.iter().map(|(c, _)| *c)
    }
}
