use std::cell::RefCell;
use std::rc::{Rc, Weak};

use postgres::Client;

use super::PgError;
use crate::handle::TransactionHandle;

/// A transaction running on a PostgreSQL session.
///
/// Only a weak reference to the session is kept. Once the connection closes,
/// commit and rollback fail with [`PgError::NotOpen`]; the server already
/// discarded any uncommitted work when the session ended.
pub struct PgTransaction {
    client: Weak<RefCell<Client>>,
    finished: bool,
}

impl PgTransaction {
    pub(super) fn new(client: Weak<RefCell<Client>>) -> Self {
        Self {
            client,
            finished: false,
        }
    }

    /// Whether `COMMIT` or `ROLLBACK` has already been issued.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the session this transaction ran on has been closed.
    pub fn is_detached(&self) -> bool {
        self.client.strong_count() == 0
    }

    fn finish(&mut self, sql: &str) -> Result<(), PgError> {
        let client = self.client.upgrade().ok_or(PgError::NotOpen)?;
        client.borrow_mut().batch_execute(sql)?;
        self.finished = true;
        Ok(())
    }
}

impl std::fmt::Debug for PgTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgTransaction")
            .field("finished", &self.finished)
            .field("detached", &self.is_detached())
            .finish()
    }
}

impl TransactionHandle for PgTransaction {
    type Error = PgError;

    fn commit(&mut self) -> Result<(), PgError> {
        self.finish("COMMIT")
    }

    fn rollback(&mut self) -> Result<(), PgError> {
        self.finish("ROLLBACK")
    }

    /// Rolls back work that was never committed, as the server would on disconnect.
    fn dispose(&mut self) {
        if self.finished {
            return;
        }
        let Some(client) = self.client.upgrade() else {
            return;
        };
        let closed = client.borrow().is_closed();
        drop(client);
        if closed {
            return;
        }
        if let Err(e) = self.finish("ROLLBACK") {
            log::warn!("Failed to roll back transaction during dispose: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn detached() -> PgTransaction {
        PgTransaction::new(Weak::new())
    }

    #[rstest]
    fn test_detached_commit_fails(mut detached: PgTransaction) {
        assert!(detached.is_detached());
        assert!(matches!(detached.commit(), Err(PgError::NotOpen)));
        assert!(!detached.is_finished());
    }

    #[rstest]
    fn test_detached_rollback_fails(mut detached: PgTransaction) {
        assert!(matches!(detached.rollback(), Err(PgError::NotOpen)));
    }

    #[rstest]
    fn test_detached_dispose_is_noop(mut detached: PgTransaction) {
        detached.dispose();
        assert!(!detached.is_finished());
    }
}
