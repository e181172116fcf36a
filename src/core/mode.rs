//! Digest mode, fixed at construction time.

use std::fmt;
use std::str::FromStr;

use super::constants::{SHA224_IV, SHA256_IV, STATE_WORDS};
use super::error::HashError;

/// Which family member to compute. Selects the initial hash state and how
/// many words the emitted digest keeps; the compression rounds are shared.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Sha224,
    Sha256,
}

impl Mode {
    /// Initial hash state for a fresh message.
    pub fn iv(self) -> [u32; STATE_WORDS] {
        match self {
            Mode::Sha224 => SHA224_IV,
            Mode::Sha256 => SHA256_IV,
        }
    }

    /// Words kept in the emitted digest (SHA-224 discards H7).
    pub fn digest_words(self) -> usize {
        match self {
            Mode::Sha224 => 7,
            Mode::Sha256 => 8,
        }
    }

    pub fn digest_bytes(self) -> usize {
        self.digest_words() * 4
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Sha224 => "sha224",
            Mode::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, HashError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha224" | "sha-224" | "224" => Ok(Mode::Sha224),
            "sha256" | "sha-256" | "256" => Ok(Mode::Sha256),
            _ => Err(HashError::unknown_mode(s)),
        }
    }
}
