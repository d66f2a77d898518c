//! Short, URL-safe ids generated from lists of non-negative integers.
//!
//! Ids are reversible without any stored state: the same configuration always
//! turns the same numbers into the same id, and decodes it back. The output is
//! obfuscated, not encrypted, so ids must not be treated as secrets.
//!
//! ```
//! use sqids::Sqids;
//!
//! let sqids = Sqids::builder().min_length(10).build().unwrap();
//! let id = sqids.encode(&[1, 2, 3]).unwrap();
//! assert!(id.len() >= 10);
//! assert_eq!(sqids.decode(&id).unwrap(), vec![1, 2, 3]);
//! ```

pub mod alphabet;
pub mod blocklist;
pub mod error;
pub mod numeral;
pub mod options;
pub mod pool;
mod sqids;

pub use blocklist::{Blocklist, DEFAULT_BLOCKLIST};
pub use error::{Error, ErrorKind, Result};
pub use options::Options;
pub use pool::{BufferPool, PooledBuffer};
pub use sqids::{Sqids, SqidsBuilder};
