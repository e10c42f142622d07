//! Name Generator
//!
//! Random identifiers for files and directories, and the alphanumeric
//! payloads carried by `write` lines.

use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces entry names and write payloads from a caller-supplied RNG.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    min_len: usize,
    max_len: usize,
    payload_max_len: usize,
}

impl NameGenerator {
    /// `min_len..=max_len` is the total name length, first letter included.
    pub fn new(min_len: usize, max_len: usize, payload_max_len: usize) -> Self {
        let min_len = min_len.max(1);
        Self {
            min_len,
            max_len: max_len.max(min_len),
            payload_max_len: payload_max_len.max(1),
        }
    }

    /// A name matching `[A-Za-z][A-Za-z0-9]*` with a randomized length.
    pub fn name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let len = rng.gen_range(self.min_len..=self.max_len);
        let mut name = String::with_capacity(len);
        name.push(LETTERS[rng.gen_range(0..LETTERS.len())] as char);
        Alphanumeric.append_string(rng, &mut name, len - 1);
        name
    }

    /// Payload of 1 to `payload_max_len` alphanumeric characters.
    pub fn payload<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let len = rng.gen_range(1..=self.payload_max_len);
        Alphanumeric.sample_string(rng, len)
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new(3, 7, 320)
    }
}
