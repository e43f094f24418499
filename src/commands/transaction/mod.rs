mod execute;
mod output;

use clap::Args;

use crate::handle::IsolationLevel;

pub use execute::TransactionResult;

/// Run an empty transaction and report the guard state around it
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  conn_guard transaction                          # Begin, then roll back
  conn_guard transaction --commit                 # Begin, then commit
  conn_guard transaction -i serializable          # At a specific isolation level")]
pub struct TransactionCmd {
    /// Isolation level to begin the transaction with
    #[arg(short, long, value_enum, default_value_t = IsolationLevel::Unspecified)]
    pub isolation: IsolationLevel,

    /// Commit instead of rolling back
    #[arg(long, default_value_t = false)]
    pub commit: bool,
}
