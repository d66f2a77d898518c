// src/sqids.rs - Encoder/decoder engine
use std::sync::Arc;

use log::{debug, warn};

use crate::{
    alphabet,
    blocklist::Blocklist,
    error::{Error, Result},
    numeral,
    options::{Options, MIN_LENGTH_LIMIT},
    pool::BufferPool,
};

/// Turns lists of numbers into short ids and back.
///
/// The engine holds only immutable configuration, so one instance can be
/// shared between threads; every call works on its own copy of the alphabet.
///
/// ```
/// use sqids::Sqids;
///
/// let sqids = Sqids::default();
/// let id = sqids.encode(&[1, 2, 3]).unwrap();
/// assert_eq!(id, "86Rf07");
/// assert_eq!(sqids.decode(&id).unwrap(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Sqids {
    alphabet: Vec<u8>,
    min_length: usize,
    blocklist: Blocklist,
    pool: Arc<BufferPool>,
}

impl Sqids {
    /// Builds an engine from `options` with a private buffer pool
    pub fn new(options: Options) -> Result<Self> {
        Self::with_pool(options, Arc::new(BufferPool::default()))
    }

    /// Builds an engine that rents its scratch buffers from `pool`
    pub fn with_pool(options: Options, pool: Arc<BufferPool>) -> Result<Self> {
        let mut alphabet = alphabet::validate(&options.alphabet)?;

        if options.min_length > MIN_LENGTH_LIMIT {
            return Err(Error::MinLengthTooLarge {
                requested: options.min_length,
                limit: MIN_LENGTH_LIMIT,
            });
        }

        let blocklist = match &options.blocklist {
            Some(words) => Blocklist::new(words, &alphabet),
            None => Blocklist::with_defaults(&alphabet),
        };

        alphabet::shuffle(&mut alphabet);

        debug!(
            "Sqids engine ready: {} character alphabet, min length {}, {} blocked words",
            alphabet.len(),
            options.min_length,
            blocklist.len()
        );

        Ok(Self {
            alphabet,
            min_length: options.min_length,
            blocklist,
            pool,
        })
    }

    pub fn builder() -> SqidsBuilder {
        SqidsBuilder::default()
    }

    /// Number of characters ids are written with
    pub fn alphabet_len(&self) -> usize {
        self.alphabet.len()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Number of blocklist words that apply to this alphabet
    pub fn blocklist_len(&self) -> usize {
        self.blocklist.len()
    }

    /// Encodes `numbers` into an id.
    ///
    /// When an id hits the blocklist the alphabet is rotated one step further
    /// and the id rebuilt, at most once per alphabet character.
    ///
    /// ### Errors
    /// * `Error::EmptyInput` - `numbers` is empty
    /// * `Error::EncodingExhausted` - every rotation produced a blocked id
    pub fn encode(&self, numbers: &[u64]) -> Result<String> {
        if numbers.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut buffer = self.pool.acquire();

        for attempt in 0..=self.alphabet.len() {
            buffer.clear();
            self.encode_attempt(numbers, attempt, &mut buffer);

            if !self.blocklist.is_blocked(&buffer) {
                return Ok(buffer.as_str().to_owned());
            }
            debug!("Id blocked on attempt {}, rotating alphabet", attempt);
        }

        let attempts = self.alphabet.len() + 1;
        warn!(
            "Blocklist rejected all {} rotations for {} number(s)",
            attempts,
            numbers.len()
        );
        Err(Error::EncodingExhausted { attempts })
    }

    /// Encodes numbers of any integer type, rejecting values that are
    /// negative or wider than 64 bits.
    ///
    /// ### Errors
    /// * `Error::InvalidNumber` - a value does not fit in a `u64`
    /// * everything [`encode`](Self::encode) returns
    pub fn encode_signed<T>(&self, numbers: &[T]) -> Result<String>
    where
        T: Copy + TryInto<u64>,
    {
        let numbers = numbers
            .iter()
            .enumerate()
            .map(|(index, &number)| number.try_into().map_err(|_| Error::InvalidNumber { index }))
            .collect::<Result<Vec<u64>>>()?;

        self.encode(&numbers)
    }

    /// Decodes an id back into its numbers.
    ///
    /// An empty id decodes to an empty list. Ids that were not produced by
    /// `encode` with the same configuration decode on a best-effort basis:
    /// reading stops at the first empty segment and the numbers read so far
    /// are returned.
    ///
    /// ### Errors
    /// * `Error::InvalidCharacter` - the id uses a character outside the alphabet
    /// * `Error::Overflow` - a segment does not fit in a `u64`
    pub fn decode(&self, id: &str) -> Result<Vec<u64>> {
        let mut numbers = Vec::new();
        if id.is_empty() {
            return Ok(numbers);
        }

        for (position, character) in id.chars().enumerate() {
            if !character.is_ascii() || self.index_of(character as u8).is_none() {
                return Err(Error::InvalidCharacter {
                    character,
                    position,
                });
            }
        }

        // All characters are ASCII past this point
        let bytes = id.as_bytes();
        let offset = self.index_of(bytes[0]).ok_or(Error::InvalidCharacter {
            character: char::from(bytes[0]),
            position: 0,
        })?;
        let mut alphabet = self.working_alphabet(offset);
        let mut rest = &bytes[1..];

        while !rest.is_empty() {
            let separator = alphabet[0];
            let (chunk, tail) = match rest.iter().position(|&b| b == separator) {
                Some(at) => (&rest[..at], Some(&rest[at + 1..])),
                None => (rest, None),
            };

            // Padding starts right after a separator
            if chunk.is_empty() {
                break;
            }

            numbers.push(numeral::to_number(chunk, &alphabet[1..])?);

            match tail {
                Some(tail) => {
                    alphabet::shuffle(&mut alphabet);
                    rest = tail;
                }
                None => break,
            }
        }

        Ok(numbers)
    }

    fn encode_attempt(&self, numbers: &[u64], attempt: usize, out: &mut String) {
        let len = self.alphabet.len();

        let offset = numbers
            .iter()
            .enumerate()
            .fold(numbers.len() % len, |acc, (i, &number)| {
                let code = self.alphabet[(number % len as u64) as usize] as usize;
                (acc + code + i % len) % len
            });
        let offset = (offset + attempt) % len;

        let mut alphabet = self.working_alphabet(offset);
        out.push(char::from(self.alphabet[offset]));

        for (i, &number) in numbers.iter().enumerate() {
            numeral::to_id(number, &alphabet[1..], out);

            if i + 1 < numbers.len() {
                out.push(char::from(alphabet[0]));
                alphabet::shuffle(&mut alphabet);
            }
        }

        if out.len() < self.min_length {
            out.push(char::from(alphabet[0]));

            while out.len() < self.min_length {
                alphabet::shuffle(&mut alphabet);
                let take = (self.min_length - out.len()).min(alphabet.len());
                out.extend(alphabet[..take].iter().map(|&b| char::from(b)));
            }
        }
    }

    /// Canonical alphabet rotated left by `offset`, then reversed.
    /// The character at `offset` is the id's anchor.
    fn working_alphabet(&self, offset: usize) -> Vec<u8> {
        let mut alphabet = Vec::with_capacity(self.alphabet.len());
        alphabet.extend_from_slice(&self.alphabet[offset..]);
        alphabet.extend_from_slice(&self.alphabet[..offset]);
        alphabet.reverse();
        alphabet
    }

    fn index_of(&self, byte: u8) -> Option<usize> {
        self.alphabet.iter().position(|&c| c == byte)
    }
}

impl Default for Sqids {
    fn default() -> Self {
        match Self::new(Options::default()) {
            Ok(sqids) => sqids,
            // built-in alphabet and blocklist always validate
            Err(e) => unreachable!("default options rejected: {}", e),
        }
    }
}

/// Step-by-step construction of a [`Sqids`] engine
#[derive(Debug, Default)]
pub struct SqidsBuilder {
    options: Options,
    pool: Option<Arc<BufferPool>>,
}

impl SqidsBuilder {
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.options.alphabet = alphabet.into();
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.options.min_length = min_length;
        self
    }

    /// Replaces the built-in blocklist; pass an empty list to disable it
    pub fn blocklist<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.blocklist = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Shares `pool` instead of giving the engine its own
    pub fn pool(mut self, pool: Arc<BufferPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn build(self) -> Result<Sqids> {
        let pool = self.pool.unwrap_or_default();
        Sqids::with_pool(self.options, pool)
    }
}
