use std::fmt;

#[derive(Debug)]
pub enum HashError {
    UnknownMode(String),
    UnalignedMessage(usize),
    BlockLength(usize),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::UnknownMode(name) => write!(f, "Unknown mode: {}", name),
            HashError::UnalignedMessage(bytes) => {
                write!(f, "Unaligned message: {} bytes is not a multiple of 64", bytes)
            }
            HashError::BlockLength(words) => {
                write!(f, "Bad block length: expected 16 words, got {}", words)
            }
        }
    }
}

impl std::error::Error for HashError {}

impl HashError {
    pub fn unknown_mode(name: &str) -> Self { HashError::UnknownMode(name.to_string()) }
    pub fn unaligned_message(bytes: usize) -> Self { HashError::UnalignedMessage(bytes) }
    pub fn block_length(words: usize) -> Self { HashError::BlockLength(words) }
}
