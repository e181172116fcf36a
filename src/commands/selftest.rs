use anyhow::{bail, ensure, Result};
use colored::Colorize;

use crate::core::hasher::Hasher;
use crate::core::mode::Mode;
use crate::core::padding;

struct Case {
    name: &'static str,
    mode: Mode,
    message: &'static [u8],
    /// Expected digest after each padded block, lowercase hex. The
    /// double-block vectors pin the carried state mid-message too.
    checkpoints: &'static [&'static str],
}

const TWO_BLOCK_MSG: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

const CASES: &[Case] = &[
    Case {
        name: "sha256 empty message",
        mode: Mode::Sha256,
        message: b"",
        checkpoints: &["e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"],
    },
    Case {
        name: "sha256 single block message (NIST \"abc\")",
        mode: Mode::Sha256,
        message: b"abc",
        checkpoints: &["ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"],
    },
    Case {
        name: "sha256 double block message (NIST)",
        mode: Mode::Sha256,
        message: TWO_BLOCK_MSG,
        checkpoints: &[
            "85e655d6417a17953363376a624cde5c76e09589cac5f811cc4b32c1f20e533a",
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
        ],
    },
    Case {
        name: "sha224 empty message",
        mode: Mode::Sha224,
        message: b"",
        checkpoints: &["d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"],
    },
    Case {
        name: "sha224 single block message (NIST \"abc\")",
        mode: Mode::Sha224,
        message: b"abc",
        checkpoints: &["23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"],
    },
    Case {
        name: "sha224 double block message (NIST)",
        mode: Mode::Sha224,
        message: TWO_BLOCK_MSG,
        checkpoints: &[
            "8250e65dbcf62f8466659c3333e5e91a10c8b7b0953927691f1419c2",
            "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
        ],
    },
];

pub fn main_with_opts(only: Option<Mode>) -> Result<()> {
    let mut ran = 0usize;
    let mut failures = 0usize;

    for case in CASES {
        if matches!(only, Some(mode) if mode != case.mode) {
            continue;
        }
        ran += 1;

        let blocks = padding::blocks(&padding::pad(case.message))?;
        ensure!(
            blocks.len() == case.checkpoints.len(),
            "case '{}' expects {} block(s), padder produced {}",
            case.name,
            case.checkpoints.len(),
            blocks.len()
        );

        let mut hasher = Hasher::new(case.mode);
        let mut ok = true;
        for (i, (block, expected)) in blocks.iter().zip(case.checkpoints).enumerate() {
            hasher.update(block);
            let got = hasher.digest().to_string();
            if got != *expected {
                ok = false;
                eprintln!(
                    "{} {} (block {}):\n  got      {}\n  expected {}",
                    "error:".bright_red().bold(),
                    case.name,
                    i,
                    got,
                    expected
                );
            }
        }

        if ok {
            println!("{} {}", "ok:".bright_green().bold(), case.name);
        } else {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{}/{} self test case(s) failed", failures, ran);
    }
    println!("{} {} case(s) passed", "selftest:".bright_green().bold(), ran);
    Ok(())
}
