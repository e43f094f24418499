use std::error::Error;

use serde::Serialize;

use super::TransactionCmd;
use crate::commands::Execute;
use crate::guard::ConnectionGuard;
use crate::handle::{ConnectionHandle, IsolationLevel};
use crate::types::GuardStep;

/// Result of the transaction command execution
#[derive(Debug, Serialize)]
pub struct TransactionResult {
    pub isolation_level: IsolationLevel,
    pub committed: bool,
    pub steps: Vec<GuardStep>,
}

impl Execute for TransactionCmd {
    type Output = TransactionResult;

    fn execute<C: ConnectionHandle>(
        self,
        guard: &mut ConnectionGuard<C>,
    ) -> Result<Self::Output, Box<dyn Error>> {
        let mut steps = vec![GuardStep::capture("start", guard)];

        guard.begin_transaction(self.isolation)?;
        steps.push(GuardStep::capture("begin", guard));

        if self.commit {
            guard.commit()?;
            steps.push(GuardStep::capture("commit", guard));
        } else {
            guard.rollback()?;
            steps.push(GuardStep::capture("rollback", guard));
        }

        // Matches the open performed by begin_transaction.
        guard.close()?;
        steps.push(GuardStep::capture("close", guard));

        Ok(TransactionResult {
            isolation_level: self.isolation,
            committed: self.commit,
            steps,
        })
    }
}
