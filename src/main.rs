use clap::Parser; // trait import enables Sha2RefCli::parse()

use sha2ref::cli::{Command, Sha2RefCli};
use sha2ref::commands;
use sha2ref::config::{load_settings, resolve_config_path};

fn main() -> anyhow::Result<()> {
    let args = Sha2RefCli::parse();

    let cfg_path = resolve_config_path(&args.config);
    let settings = load_settings(cfg_path.as_deref())?;

    match args.cmd {
        Command::Digest { input, text, mode, json, trace } => {
            commands::digest::main_with_opts(input, text, mode, json, trace, &settings)
        }
        Command::Pad { input, out } => commands::pad::main_with_opts(input, out),
        Command::Selftest { mode } => commands::selftest::main_with_opts(mode.map(Into::into)),
    }
}
