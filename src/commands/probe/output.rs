//! Output formatting for probe command results.

use super::execute::ProbeResult;
use crate::output::Outputable;
use crate::types::format_steps;

impl Outputable for ProbeResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Probe: depth {}", self.depth));
        match self.command_timeout {
            Some(secs) => lines.push(format!("Command timeout: {}s", secs)),
            None => lines.push("Command timeout: none".to_string()),
        }
        lines.push(String::new());
        lines.extend(format_steps(&self.steps));

        lines.join("\n")
    }
}
