// src/options.rs - Engine configuration
use serde::{Deserialize, Serialize};

use crate::alphabet::DEFAULT_ALPHABET;

/// Largest supported minimum id length
pub const MIN_LENGTH_LIMIT: usize = 255;

/// Settings an encoder is built from.
///
/// Deserializes with every field optional:
///
/// ```
/// let options: sqids::Options = serde_json::from_str(r#"{"min_length": 8}"#).unwrap();
/// assert_eq!(options.min_length, 8);
/// assert!(options.blocklist.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Characters ids are written with
    pub alphabet: String,

    /// Ids shorter than this are padded
    pub min_length: usize,

    /// Words ids must not contain; `None` selects the built-in list
    pub blocklist: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            min_length: 0,
            blocklist: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.alphabet, DEFAULT_ALPHABET);
        assert_eq!(options.min_length, 0);
        assert_eq!(options.blocklist, None);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: Options =
            serde_json::from_str(r#"{"alphabet": "abc", "blocklist": []}"#).unwrap();
        assert_eq!(options.alphabet, "abc");
        assert_eq!(options.min_length, 0);
        assert_eq!(options.blocklist, Some(vec![]));
    }
}
