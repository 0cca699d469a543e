use alloc::vec::Vec;

use crate::{Error, FrequencyCounter, hash::djb2};

#[cfg(test)]
use unix_print::unix_println as println;

/// Number of slots of the table used by the binary.
///
/// Far above the distinct-token count of any book-sized text, which keeps probe sequences short.
pub const DEFAULT_CAPACITY: usize = 1_000_000;

#[derive(Clone, Copy, Debug, Default)]
enum Slot<'a> {
    #[default]
    Empty,
    /// Occupied contains the token and its count. Never goes back to Empty.
    Occupied(&'a [u8], usize),
}

/// Fixed-capacity token counter, using open addressing and linear probing.
///
/// The capacity is set at construction and never changes: once every slot is taken, inserting a new token fails
/// with [`Error::TableOverflow`], while tokens already present can still be counted.
#[derive(Debug)]
pub struct FixedHashTable<'a> {
    // The slots, allocated once. Home slot is djb2(token) % capacity
    buckets: Vec<Slot<'a>>,
    // Number of occupied slots
    size: usize,
}

impl<'a> FixedHashTable<'a> {
    /// Allocates a table of exactly `capacity` empty slots.
    pub fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Slot::default);
        Ok(Self { buckets, size: 0 })
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Ratio of occupied slots to capacity.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    #[inline]
    fn home(&self, token: &[u8]) -> usize {
        djb2(token) as usize % self.capacity()
    }

    /// Slot indices visited for `token`: one full cycle, starting at its home slot.
    fn probe_sequence(&self, token: &[u8]) -> impl Iterator<Item = usize> + use<> {
        let capacity = self.capacity();
        let home = self.home(token);
        (0..capacity).map(move |i| (home + i) % capacity)
    }
}

impl<'a> FrequencyCounter<'a> for FixedHashTable<'a> {
    fn increment(&mut self, token: &'a [u8]) -> Result<(), Error> {
        for bucket_i in self.probe_sequence(token) {
            match &mut self.buckets[bucket_i] {
                Slot::Occupied(key, count) if *key == token => {
                    *count += 1;
                    return Ok(());
                }
                Slot::Empty => {
                    #[cfg(test)]
                    println!("Adding to bucket {}", bucket_i);
                    self.buckets[bucket_i] = Slot::Occupied(token, 1);
                    self.size += 1;
                    return Ok(());
                }
                Slot::Occupied(..) => continue,
            }
        }
        Err(Error::TableOverflow {
            capacity: self.capacity(),
        })
    }

    // Lookup using linear probing. No deletion, so an empty slot ends the search.
    fn get(&self, token: &[u8]) -> Option<usize> {
        for bucket_i in self.probe_sequence(token) {
            match self.buckets[bucket_i] {
                Slot::Occupied(key, count) if key == token => {
                    #[cfg(test)]
                    println!("Found! Slot: {}", bucket_i);
                    return Some(count);
                }
                Slot::Empty => return None,
                Slot::Occupied(..) => continue,
            }
        }
        None
    }

    /// Entries in slot order.
    fn entries(&self) -> Vec<(&'a [u8], usize)> {
        self.buckets
            .iter()
            .filter_map(|slot| match *slot {
                Slot::Occupied(key, count) => Some((key, count)),
                Slot::Empty => None,
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.size
    }
}
