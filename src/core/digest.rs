//! Digest value emitted after the final block.

use std::fmt;

use super::engine::HashState;
use super::mode::Mode;

/// Final digest: 8 words for SHA-256, 7 for SHA-224 (H7 discarded).
/// Rendered as lowercase hex in big-endian word order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digest {
    words: HashState,
    keep: usize,
}

impl Digest {
    pub(crate) fn new(state: &HashState, mode: Mode) -> Self {
        Digest { words: *state, keep: mode.digest_words() }
    }

    /// Retained digest words.
    pub fn words(&self) -> &[u32] {
        &self.words[..self.keep]
    }

    /// Big-endian byte serialization (28 or 32 bytes).
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.keep * 4);
        for word in self.words() {
            out.extend_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words() {
            write!(f, "{:08x}", word)?;
        }
        Ok(())
    }
}
