//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "paircode",
    about = "25-pair color code reference manual and pair lookup",
    after_help = "\
EXAMPLES:
    paircode                             Self-test, then print the full manual
    paircode 12                          Look up the colors for pair 12
    paircode --colors Black Orange       Look up the pair number for a color pair
    paircode --export manual.json        Print the manual and write it as JSON"
)]
pub struct Args {
    /// Pair number to look up (prints its color pair instead of the manual)
    #[arg(value_name = "PAIR", conflicts_with = "colors")]
    pub pair: Option<i64>,

    /// Look up the pair number for MAJOR and MINOR color names
    #[arg(long, num_args = 2, value_names = ["MAJOR", "MINOR"])]
    pub colors: Option<Vec<String>>,

    /// Export the manual as JSON (for external tooling)
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
