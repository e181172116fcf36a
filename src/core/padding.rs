//! Merkle-Damgard padding: turns an arbitrary byte sequence into whole
//! 512-bit blocks with the original bit length in the trailer.

use super::constants::{BLOCK_BYTES, BLOCK_WORDS};
use super::error::HashError;

/// One 512-bit block as big-endian 32-bit words, the unit the engine eats.
pub type Block = [u32; BLOCK_WORDS];

/// Zero bytes inserted between the 0x80 marker and the 8-byte length
/// trailer. The raw count goes negative when the marker plus trailer spill
/// into the next block; that case wraps by one full block.
pub fn zero_fill(len: usize) -> usize {
    let raw = BLOCK_BYTES as isize - (len % BLOCK_BYTES) as isize - 1 - 8;
    if raw < 0 {
        (raw + BLOCK_BYTES as isize) as usize
    } else {
        raw as usize
    }
}

/// Total length after padding: the smallest multiple of 64 that is at least
/// `len + 9`.
pub fn padded_len(len: usize) -> usize {
    len + 1 + zero_fill(len) + 8
}

/// Pad `message`: append the 0x80 marker, zero fill, then the original bit
/// length as a big-endian u64. Pure; any input length is valid.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(padded_len(message.len()));
    out.extend_from_slice(message);
    out.push(0x80);
    out.resize(out.len() + zero_fill(message.len()), 0);
    out.extend_from_slice(&(message.len() as u64 * 8).to_be_bytes());
    out
}

/// Load one 64-byte chunk as 16 big-endian words.
pub(crate) fn load_block(bytes: &[u8]) -> Block {
    debug_assert_eq!(bytes.len(), BLOCK_BYTES);
    let mut block = [0u32; BLOCK_WORDS];
    for (word, be) in block.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_be_bytes([be[0], be[1], be[2], be[3]]);
    }
    block
}

/// Reinterpret a padded byte sequence as word blocks. Fails on input that is
/// not block aligned; never truncates or pads.
pub fn blocks(padded: &[u8]) -> Result<Vec<Block>, HashError> {
    if padded.len() % BLOCK_BYTES != 0 {
        return Err(HashError::unaligned_message(padded.len()));
    }
    Ok(padded.chunks_exact(BLOCK_BYTES).map(load_block).collect())
}

/// Checked conversion from a dynamically sized word slice.
pub fn block_from_words(words: &[u32]) -> Result<Block, HashError> {
    Block::try_from(words).map_err(|_| HashError::block_length(words.len()))
}
