//! Token frequency counting, two ways.
//!
//! Both strategies count whitespace-delimited byte tokens borrowed from a single in-memory buffer:
//!
//! -   [`LinearMap`], the baseline: an unordered vector searched linearly on every token.
//! -   [`FixedHashTable`], an open-addressing table of fixed capacity, hashed with djb2 and probed linearly.
//!
//! Tokens are never copied, so the buffer must outlive every counter fed from it.
//!
//! ```
//! use tokfreq::{FixedHashTable, FrequencyCounter, LinearMap, tally};
//!
//! let content = b"a a b";
//!
//! let mut naive = LinearMap::new();
//! let mut table = FixedHashTable::new(64).unwrap();
//!
//! assert_eq!(tally(&mut naive, content).unwrap(), 3);
//! assert_eq!(tally(&mut table, content).unwrap(), 3);
//!
//! assert_eq!(naive.get(b"a"), Some(2));
//! assert_eq!(table.get(b"b"), Some(1));
//! ```
#![no_std]

extern crate alloc;

use alloc::vec::Vec;

pub mod error;
pub mod fixed_hash_table;
pub mod hash;
pub mod linear_map;
pub mod report;
pub mod tokenizer;

pub use error::Error;
pub use fixed_hash_table::{DEFAULT_CAPACITY, FixedHashTable};
pub use linear_map::LinearMap;
pub use report::{Report, Strategy};

/// A map from token to number of occurrences.
pub trait FrequencyCounter<'a> {
    /// Counts one more occurrence of `token`, inserting it with a count of 1 if unseen.
    fn increment(&mut self, token: &'a [u8]) -> Result<(), Error>;

    /// Number of occurrences of `token` seen so far.
    fn get(&self, token: &[u8]) -> Option<usize>;

    /// All (token, count) pairs, in no particular order.
    fn entries(&self) -> Vec<(&'a [u8], usize)>;

    /// Number of distinct tokens.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Feeds every token of `content` to `counter`, returning how many tokens were counted.
///
/// Stops at the first error, leaving the tokens counted so far in `counter`.
pub fn tally<'a, C>(counter: &mut C, content: &'a [u8]) -> Result<usize, Error>
where
    C: FrequencyCounter<'a> + ?Sized,
{
    let mut count = 0;
    for token in tokenizer::tokens(content) {
        counter.increment(token)?;
        count += 1;
    }
    Ok(count)
}
