use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::mode::Mode;

#[derive(Copy, Clone, Debug, ValueEnum)]
#[derive(Default)]
pub enum ModeArg {
    #[clap(alias = "224")]
    Sha224,
    #[clap(alias = "256")]
    #[default]
    Sha256,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Mode {
        match arg {
            ModeArg::Sha224 => Mode::Sha224,
            ModeArg::Sha256 => Mode::Sha256,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sha2ref",
    about = "sha2ref: reference SHA-224/256 digests (digest, pad, selftest)",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct Sha2RefCli {
    /// Global: path to config (TOML); default: ~/.sha2ref/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute a digest
    ///
    /// Examples:
    ///   sha2ref digest notes.txt
    ///   sha2ref digest --mode sha224 --text abc
    ///   cat notes.txt | sha2ref digest -
    Digest {
        /// Input file ('-' for stdin)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Hash a literal string instead of a file
        #[arg(long = "text", value_name = "STRING", conflicts_with = "input")]
        text: Option<String>,

        /// Digest mode; falls back to the config default, then sha256
        #[arg(long = "mode", value_enum)]
        mode: Option<ModeArg>,

        /// Emit a JSON report instead of the checksum line
        #[arg(long = "json", action = ArgAction::SetTrue)]
        json: bool,

        /// Print every compression round's registers (debug)
        #[arg(long = "trace", action = ArgAction::SetTrue)]
        trace: bool,
    },

    /// Append hash padding to a file copy
    ///
    /// Examples:
    ///   sha2ref pad message.bin            (writes message.bin.padded)
    ///   sha2ref pad message.bin -o blocks.bin
    Pad {
        /// Input file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path (short: -o). Defaults to INPUT.padded
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Run the built-in NIST test vectors
    Selftest {
        /// Limit the run to one mode
        #[arg(long = "mode", value_enum)]
        mode: Option<ModeArg>,
    },
}
