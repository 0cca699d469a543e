use alloc::vec::Vec;

use crate::{Error, FrequencyCounter};

/// Baseline counter: an unordered list of (token, count), searched linearly on every access.
///
/// Quadratic in the number of distinct tokens, it only exists to check and time [`FixedHashTable`] against.
///
/// [`FixedHashTable`]: crate::FixedHashTable
#[derive(Debug, Default)]
pub struct LinearMap<'a> {
    items: Vec<(&'a [u8], usize)>,
}

impl LinearMap<'_> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'a> FrequencyCounter<'a> for LinearMap<'a> {
    /// Never fails: the list grows as needed.
    fn increment(&mut self, token: &'a [u8]) -> Result<(), Error> {
        match self.items.iter_mut().find(|(key, _)| *key == token) {
            Some((_, count)) => *count += 1,
            None => self.items.push((token, 1)),
        }
        Ok(())
    }

    fn get(&self, token: &[u8]) -> Option<usize> {
        self.items.iter().find(|(key, _)| *key == token).map(|&(_, count)| count)
    }

    /// Entries in first-seen order.
    fn entries(&self) -> Vec<(&'a [u8], usize)> {
        self.items.clone()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tally;

    #[test]
    fn test_insert_and_update() {
        let mut map = LinearMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(b"a"), None);

        map.increment(b"a").unwrap();
        map.increment(b"b").unwrap();
        map.increment(b"a").unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(b"a"), Some(2));
        assert_eq!(map.get(b"b"), Some(1));
    }

    #[test]
    fn test_entries_keep_first_seen_order() {
        let mut map = LinearMap::new();
        tally(&mut map, b"b a b c a b").unwrap();
        let expected: [(&[u8], usize); 3] = [(b"b", 3), (b"a", 2), (b"c", 1)];
        assert_eq!(map.entries(), expected);
    }

    #[test]
    fn test_equality_is_by_content() {
        let content = b"same same";
        let (left, right) = content.split_at(4);

        let mut map = LinearMap::new();
        map.increment(left).unwrap();
        map.increment(&right[1..]).unwrap();

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(b"same"), Some(2));
    }

    #[test]
    fn test_empty_input() {
        let mut map = LinearMap::new();
        assert_eq!(tally(&mut map, b"").unwrap(), 0);
        assert!(map.entries().is_empty());
    }
}
