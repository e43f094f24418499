mod cli_tests;
mod execute;
mod execute_tests;
mod output;

use clap::Args;

pub use execute::ProbeResult;

/// Open and close the connection through nested guard scopes
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  conn_guard probe               # Two nested open/close scopes
  conn_guard probe --depth 5     # Five nested scopes
  conn_guard -o json probe       # Machine-readable step list")]
pub struct ProbeCmd {
    /// Number of nested open() calls before closing (1-32)
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=32))]
    pub depth: u32,
}
