// src/blocklist/mod.rs - Rejecting ids that spell unwanted words
use log::debug;

mod default;

pub use default::DEFAULT_BLOCKLIST;

/// Entries shorter than this are dropped; they would reject too many ids
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalized set of words an id must not contain
#[derive(Debug, Clone, Default)]
pub struct Blocklist {
    words: Vec<String>,
}

impl Blocklist {
    /// Builds a blocklist for ids written with `alphabet`.
    ///
    /// Words are lowercased. Words shorter than [`MIN_WORD_LENGTH`] and words
    /// using characters the (lowercased) alphabet cannot produce are dropped,
    /// since they can never match.
    pub fn new<I, S>(words: I, alphabet: &[u8]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let producible: Vec<u8> = alphabet.iter().map(u8::to_ascii_lowercase).collect();

        let mut kept: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_lowercase())
            .filter(|word| word.bytes().all(|b| b.is_ascii() && producible.contains(&b)))
            .filter(|word| word.len() >= MIN_WORD_LENGTH)
            .collect();
        kept.sort_unstable();
        kept.dedup();

        debug!("Blocklist built with {} applicable words", kept.len());
        Self { words: kept }
    }

    /// Builds the built-in list for `alphabet`
    pub fn with_defaults(alphabet: &[u8]) -> Self {
        Self::new(DEFAULT_BLOCKLIST.iter().copied(), alphabet)
    }

    /// Number of words that can actually match
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reports whether `candidate` must be rejected
    pub fn is_blocked(&self, candidate: &str) -> bool {
        is_blocked(candidate, &self.words)
    }
}

/// Case-insensitive match of `candidate` against lowercase ASCII `words`.
///
/// Lengths are counted in characters.
///
/// * ids or words of at most 3 characters only match exactly
/// * words containing a digit only match as a prefix or suffix
/// * any other word matches anywhere in the id
pub(crate) fn is_blocked<S: AsRef<str>>(candidate: &str, words: &[S]) -> bool {
    let id = candidate.to_lowercase();
    let id_len = id.chars().count();

    words.iter().any(|word| {
        let word: &str = word.as_ref();
        let word_len = word.chars().count();
        if word_len < MIN_WORD_LENGTH || word_len > id_len {
            return false;
        }

        if id_len <= 3 || word_len <= 3 {
            id == word
        } else if word.bytes().any(|b| b.is_ascii_digit()) {
            id.starts_with(word) || id.ends_with(word)
        } else {
            id.contains(word)
        }
    })
}
