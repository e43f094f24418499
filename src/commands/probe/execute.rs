use std::error::Error;

use serde::Serialize;

use super::ProbeCmd;
use crate::commands::Execute;
use crate::guard::ConnectionGuard;
use crate::handle::ConnectionHandle;
use crate::types::GuardStep;

/// Result of the probe command execution
#[derive(Debug, Default, Serialize)]
pub struct ProbeResult {
    pub depth: u32,
    pub command_timeout: Option<i32>,
    pub steps: Vec<GuardStep>,
}

impl Execute for ProbeCmd {
    type Output = ProbeResult;

    fn execute<C: ConnectionHandle>(
        self,
        guard: &mut ConnectionGuard<C>,
    ) -> Result<Self::Output, Box<dyn Error>> {
        let mut result = ProbeResult {
            depth: self.depth,
            command_timeout: guard.command_timeout(),
            ..Default::default()
        };

        result.steps.push(GuardStep::capture("start", guard));
        for _ in 0..self.depth {
            guard.open()?;
            result.steps.push(GuardStep::capture("open", guard));
        }
        for _ in 0..self.depth {
            guard.close()?;
            result.steps.push(GuardStep::capture("close", guard));
        }

        Ok(result)
    }
}
