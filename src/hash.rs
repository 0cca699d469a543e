//  djb2, as published by Dan Bernstein on comp.lang.c.
//
//  Weak, but cheap and good enough to spread natural-language tokens over a sparsely loaded table.

/// Initial state of the digest.
pub const DJB2_SEED: u32 = 5381;

/// Hashes `bytes` with the `hash * 33 + byte` recurrence, wrapping on overflow.
#[inline]
pub fn djb2(bytes: &[u8]) -> u32 {
    bytes.iter().fold(DJB2_SEED, |hash, &byte| {
        // (hash << 5) + hash == hash * 33
        (hash << 5).wrapping_add(hash).wrapping_add(u32::from(byte))
    })
}
