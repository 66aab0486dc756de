//! File categories

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Semantic file-type tag assigned by extension lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Photo,
    Music,
    Document,
    Compressed,
    Video,
    Application,
    Mirror,
    Code,
    Configuration,
}

impl Category {
    /// All categories in tie-break order
    pub const ALL: [Category; 9] = [
        Category::Photo,
        Category::Music,
        Category::Document,
        Category::Compressed,
        Category::Video,
        Category::Application,
        Category::Mirror,
        Category::Code,
        Category::Configuration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Photo => "photo",
            Category::Music => "music",
            Category::Document => "document",
            Category::Compressed => "compressed",
            Category::Video => "video",
            Category::Application => "application",
            Category::Mirror => "mirror",
            Category::Code => "code",
            Category::Configuration => "configuration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
