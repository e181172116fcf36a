//! Caller-held hash state threading blocks through the engine
//! (Merkle-Damgard iteration).

use super::constants::BLOCK_BYTES;
use super::digest::Digest;
use super::engine::{self, HashState, RoundObserver};
use super::mode::Mode;
use super::padding::{self, Block};

/// One message's running hash. The engine itself is stateless; all state
/// lives here. Start a new message with a fresh `Hasher`.
#[derive(Clone, Debug)]
pub struct Hasher {
    mode: Mode,
    state: HashState,
}

impl Hasher {
    /// Fresh state from the mode's IV.
    pub fn new(mode: Mode) -> Self {
        Hasher { mode, state: mode.iv() }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Fold one block into the state. Blocks of a message must arrive in
    /// the exact order the padder produced them.
    pub fn update(&mut self, block: &Block) {
        engine::compress(&mut self.state, block);
    }

    /// Same as `update`, reporting per-round registers to `observer`.
    pub fn update_observed(&mut self, block: &Block, observer: &mut dyn RoundObserver) {
        engine::compress_observed(&mut self.state, block, observer);
    }

    /// Digest of everything folded so far. Readable at any block boundary;
    /// it is the message digest once the final padded block went in.
    pub fn digest(&self) -> Digest {
        Digest::new(&self.state, self.mode)
    }
}

/// One-shot digest of `data`: pad, split, compress every block in order.
pub fn hash(mode: Mode, data: &[u8]) -> Digest {
    let padded = padding::pad(data);
    let mut hasher = Hasher::new(mode);
    for chunk in padded.chunks_exact(BLOCK_BYTES) {
        hasher.update(&padding::load_block(chunk));
    }
    hasher.digest()
}
