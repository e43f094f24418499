//! Output formatting for transaction command results.

use super::execute::TransactionResult;
use crate::output::Outputable;
use crate::types::format_steps;

impl Outputable for TransactionResult {
    fn to_table(&self) -> String {
        let outcome = if self.committed { "commit" } else { "rollback" };

        let mut lines = vec![
            format!("Transaction: {:?} ({})", self.isolation_level, outcome),
            String::new(),
        ];
        lines.extend(format_steps(&self.steps));

        lines.join("\n")
    }
}
