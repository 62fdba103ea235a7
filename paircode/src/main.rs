//! # paircode - Main Entry Point
//!
//! Default invocation runs the built-in self-test, then prints the full
//! 25-pair reference manual. Lookup modes convert a single pair number or
//! color pair instead:
//! - `paircode 12` - pair number to colors
//! - `paircode --colors Black Orange` - colors to pair number

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};

use paircode::cli::Args;
use paircode::codec::{color_pair_from_number, pair_number_from_names};
use paircode::domain::CodecError;
use paircode::export::ManualExporter;
use paircode::manual::print_manual;
use paircode::selftest::run_selftest;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    // A conversion rejecting user-supplied input is a usage error; anything
    // else (self-test failure, export I/O) is an internal one.
    if err.downcast_ref::<CodecError>().is_some() {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    // Lookup modes short-circuit: no self-test, no manual
    if let Some(number) = args.pair {
        let pair = color_pair_from_number(number)?;
        println!("{number}: {pair}");
        return Ok(());
    }
    if let Some([major, minor]) = args.colors.as_deref() {
        let number = pair_number_from_names(major, minor)?;
        println!("{major} {minor}: {number}");
        return Ok(());
    }

    run_selftest().context("self-test failed")?;
    if !args.quiet {
        println!("All self-tests passed.");
    }

    print_manual();

    if let Some(ref path) = args.export {
        let file = File::create(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        ManualExporter::new().export(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush export file: {}", path.display()))?;
        info!("manual exported to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paircode::domain::Axis;

    #[test]
    fn test_codec_errors_are_usage_errors() {
        let err = anyhow::Error::from(CodecError::OutOfRange { axis: Axis::Major, number: 26 });
        assert_eq!(exit_code_for(&err), EXIT_USAGE);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = anyhow::anyhow!("self-test failed");
        assert_eq!(exit_code_for(&err), EXIT_ERROR);
    }
}
