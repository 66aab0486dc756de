//! Digest value type

use std::fmt;

use crate::error::DigestError;

/// Hex length of a 128-bit digest
pub const DIGEST_HEX_LEN: usize = 32;

/// Lowercase hexadecimal content fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Digest(hex::encode(bytes))
    }

    /// Parse a 32-character hex digest, accepting either case
    pub fn parse(value: &str) -> Result<Self, DigestError> {
        let value = value.trim();
        if value.len() != DIGEST_HEX_LEN || hex::decode(value).is_err() {
            return Err(DigestError::InvalidDigest(value.to_string()));
        }
        Ok(Digest(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes() {
        let digest = Digest::from_bytes(&[0xab; 16]);
        assert_eq!(digest.as_str().len(), DIGEST_HEX_LEN);
        assert_eq!(digest.as_str(), "abababababababababababababababab");
    }

    #[test]
    fn test_parse() {
        let digest = Digest::parse("D41D8CD98F00B204E9800998ECF8427E").unwrap();
        assert_eq!(digest.as_str(), "d41d8cd98f00b204e9800998ecf8427e");

        assert!(Digest::parse("d41d8cd98f00b204").is_err());
        assert!(Digest::parse("z41d8cd98f00b204e9800998ecf8427e").is_err());
        assert!(Digest::parse("").is_err());
    }
}
