//! Shared result types for guard commands.

use serde::Serialize;

use crate::guard::{ConnectionGuard, GuardSnapshot};
use crate::handle::ConnectionHandle;

/// Guard bookkeeping captured right after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardStep {
    pub action: String,
    #[serde(flatten)]
    pub snapshot: GuardSnapshot,
}

impl GuardStep {
    pub fn capture<C: ConnectionHandle>(action: &str, guard: &ConnectionGuard<C>) -> Self {
        Self {
            action: action.to_string(),
            snapshot: guard.snapshot(),
        }
    }

    /// Format as a single table line
    pub fn format_line(&self) -> String {
        format!(
            "{:<8} {:<6} open_count={} opened_by_guard={} in_transaction={}",
            self.action,
            self.snapshot.state,
            self.snapshot.open_count,
            self.snapshot.opened_by_guard,
            self.snapshot.in_transaction
        )
    }
}

/// Format a list of steps as indented table lines.
pub fn format_steps(steps: &[GuardStep]) -> Vec<String> {
    if steps.is_empty() {
        return vec!["No steps recorded.".to_string()];
    }
    let mut lines = vec![format!("Steps ({}):", steps.len())];
    lines.extend(steps.iter().map(|step| format!("  {}", step.format_line())));
    lines
}
