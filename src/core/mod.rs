//! Core module tree for the SHA-224/256 reference model.
//! Only declare modules that exist in the src/core/ directory.

pub mod constants;
pub mod digest;
pub mod engine;
pub mod error;
pub mod hasher;
pub mod mode;
pub mod padding;
