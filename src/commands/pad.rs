use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::constants::BLOCK_BYTES;
use crate::core::padding;
use crate::io::atomic::atomic_write;

/// Write a padded copy of `input`: the original bytes, the 0x80 marker, the
/// zero fill, and the big-endian bit-length trailer.
pub fn main_with_opts(input: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let data = fs::read(&input).with_context(|| format!("Read '{}'", input.display()))?;

    let out_path = out.unwrap_or_else(|| {
        let mut name = input.clone().into_os_string();
        name.push(".padded");
        PathBuf::from(name)
    });

    let padded = padding::pad(&data);
    atomic_write(&out_path, &padded)
        .with_context(|| format!("Write '{}'", out_path.display()))?;

    println!(
        "{} {} ({} bytes -> {} bytes, {} zero fill, {} block(s))",
        "padded:".bright_green().bold(),
        out_path.display(),
        data.len(),
        padded.len(),
        padding::zero_fill(data.len()),
        padded.len() / BLOCK_BYTES,
    );
    Ok(())
}
