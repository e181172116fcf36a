use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::ModeArg;
use crate::config::Settings;
use crate::core::engine::{Registers, RoundObserver};
use crate::core::hasher::{self, Hasher};
use crate::core::mode::Mode;
use crate::core::padding;

/// Prints each round's shifted registers, reproducing the engine's internal
/// flow on stdout while the engine itself stays free of I/O.
struct TracePrinter;

impl RoundObserver for TracePrinter {
    fn after_round(&mut self, round: usize, regs: &Registers) {
        println!("round 0x{:02x}:", round);
        println!(
            "  a = 0x{:08x}  b = 0x{:08x}  c = 0x{:08x}  d = 0x{:08x}",
            regs.a, regs.b, regs.c, regs.d
        );
        println!(
            "  e = 0x{:08x}  f = 0x{:08x}  g = 0x{:08x}  h = 0x{:08x}",
            regs.e, regs.f, regs.g, regs.h
        );
    }
}

pub fn main_with_opts(
    input: Option<PathBuf>,
    text: Option<String>,
    mode_arg: Option<ModeArg>,
    json: bool,
    trace: bool,
    settings: &Settings,
) -> Result<()> {
    let mode = resolve_mode(mode_arg, settings)?;
    let (data, label) = read_input(input, text)?;

    let digest = if trace {
        let mut hasher = Hasher::new(mode);
        let mut printer = TracePrinter;
        for (i, block) in padding::blocks(&padding::pad(&data))?.iter().enumerate() {
            println!("{} block {}", "trace:".cyan().bold(), i);
            hasher.update_observed(block, &mut printer);
        }
        hasher.digest()
    } else {
        hasher::hash(mode, &data)
    };

    if json || settings.json.unwrap_or(false) {
        let report = serde_json::json!({
            "mode": mode.to_string(),
            "input": label,
            "bytes": data.len(),
            "digest": digest.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}  {}", digest.to_string().bright_green(), label);
    }
    Ok(())
}

fn resolve_mode(arg: Option<ModeArg>, settings: &Settings) -> Result<Mode> {
    if let Some(arg) = arg {
        return Ok(arg.into());
    }
    if let Some(mode) = settings.mode()? {
        return Ok(mode);
    }
    Ok(Mode::Sha256)
}

fn read_input(input: Option<PathBuf>, text: Option<String>) -> Result<(Vec<u8>, String)> {
    if let Some(text) = text {
        let label = format!("\"{}\"", text);
        return Ok((text.into_bytes(), label));
    }
    match input {
        Some(path) if path.as_os_str() == "-" => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("Read stdin")?;
            Ok((buf, "-".to_string()))
        }
        Some(path) => {
            let data =
                fs::read(&path).with_context(|| format!("Read '{}'", path.display()))?;
            Ok((data, path.display().to_string()))
        }
        None => bail!("digest needs an INPUT file, '-', or --text"),
    }
}
