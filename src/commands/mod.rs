//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - An `Execute` impl that drives a guard and records what happened
//! - An `Outputable` impl for its result

mod probe;
mod transaction;

pub use probe::{ProbeCmd, ProbeResult};
pub use transaction::{TransactionCmd, TransactionResult};

use clap::Subcommand;
use std::error::Error;

use crate::guard::ConnectionGuard;
use crate::handle::ConnectionHandle;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute<C: ConnectionHandle>(
        self,
        guard: &mut ConnectionGuard<C>,
    ) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open and close the connection through nested guard scopes
    Probe(ProbeCmd),

    /// Run an empty transaction and report the guard state around it
    Transaction(TransactionCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run<C: ConnectionHandle>(
        self,
        guard: &mut ConnectionGuard<C>,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Probe(cmd) => {
                let result = cmd.execute(guard)?;
                Ok(result.format(format))
            }
            Command::Transaction(cmd) => {
                let result = cmd.execute(guard)?;
                Ok(result.format(format))
            }
        }
    }
}
