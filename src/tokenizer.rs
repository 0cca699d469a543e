//! Whitespace tokenizer over a borrowed byte buffer.
//!
//! Tokens are sub-slices of the input, nothing is copied. The sequence is forward-only: to start over, call
//! [`tokens`] again on the original buffer.

/// Returns `true` for the bytes C's `isspace` accepts in the "C" locale.
///
/// Unlike `u8::is_ascii_whitespace`, this includes the vertical tab.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Lazily splits `content` into maximal runs of non-whitespace bytes.
pub fn tokens(content: &[u8]) -> Tokens<'_> {
    Tokens { rest: content }
}

/// Iterator returned by [`tokens`].
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    rest: &'a [u8],
}

impl<'a> Tokens<'a> {
    /// The part of the buffer not consumed yet.
    pub fn remaining(&self) -> &'a [u8] {
        self.rest
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.rest.iter().position(|&b| !is_space(b))?;
        let rest = &self.rest[start..];
        let end = rest.iter().position(|&b| is_space(b)).unwrap_or(rest.len());
        let (token, rest) = rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Tokens are at least one byte long, and separated by at least one byte.
        (0, Some(self.rest.len().div_ceil(2)))
    }
}

impl core::iter::FusedIterator for Tokens<'_> {}
