//! Logical to physical path conversion

use std::path::{MAIN_SEPARATOR, PathBuf};

/// Separator used by logical paths regardless of the caller's platform
pub const LOGICAL_SEPARATOR: char = '/';

/// Rewrites logical `/`-separated paths to the native separator.
///
/// The separator is resolved once when the normalizer is built and never
/// changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNormalizer {
    separator: char,
}

impl Default for PathNormalizer {
    fn default() -> Self {
        Self::host()
    }
}

impl PathNormalizer {
    /// Normalizer for the host's native separator
    pub fn host() -> Self {
        Self {
            separator: MAIN_SEPARATOR,
        }
    }

    /// Normalizer for an explicit separator
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Replace every `/` with the native separator.
    ///
    /// Identity when the native separator is already `/`.
    pub fn normalize(&self, path: &str) -> String {
        if self.separator == LOGICAL_SEPARATOR {
            return path.to_string();
        }
        path.replace(LOGICAL_SEPARATOR, self.separator.encode_utf8(&mut [0; 4]))
    }

    /// Normalize and wrap as a physical path
    pub fn to_path(&self, path: &str) -> PathBuf {
        PathBuf::from(self.normalize(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_on_slash_host() {
        let normalizer = PathNormalizer::with_separator('/');
        assert_eq!(normalizer.normalize("a/b/c.txt"), "a/b/c.txt");
        assert_eq!(normalizer.normalize(""), "");
        assert_eq!(normalizer.normalize("C:\\dir\\f"), "C:\\dir\\f");
    }

    #[test]
    fn test_backslash_host() {
        let normalizer = PathNormalizer::with_separator('\\');
        assert_eq!(
            normalizer.normalize("/Users/me/Desktop/a.txt"),
            "\\Users\\me\\Desktop\\a.txt"
        );
        assert_eq!(normalizer.normalize("noslash"), "noslash");
    }

    #[test]
    fn test_idempotent() {
        for sep in ['/', '\\', ':'] {
            let normalizer = PathNormalizer::with_separator(sep);
            for input in ["a/b", "/x//y/", "mixed\\and/slash", ""] {
                let once = normalizer.normalize(input);
                assert_eq!(normalizer.normalize(&once), once);
            }
        }
    }

    #[test]
    fn test_host_uses_main_separator() {
        let normalizer = PathNormalizer::default();
        assert_eq!(normalizer.separator(), MAIN_SEPARATOR);
        assert_eq!(
            normalizer.to_path("dir/file.txt"),
            PathBuf::from(format!("dir{}file.txt", MAIN_SEPARATOR))
        );
    }
}
