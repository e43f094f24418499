//! Single-active-transaction state machine.

use super::{ConnectionGuard, GuardResult};
use crate::error::GuardError;
use crate::handle::{ConnectionHandle, IsolationLevel, TransactionHandle};

impl<C: ConnectionHandle> ConnectionGuard<C> {
    /// Start a transaction, opening the connection first.
    ///
    /// The `open()` performed here is not matched automatically; the caller
    /// owes one `close()` for it.
    pub fn begin_transaction(
        &mut self,
        isolation_level: IsolationLevel,
    ) -> GuardResult<&mut C::Transaction, C> {
        if self.current_transaction.is_some() {
            return Err(GuardError::TransactionAlreadyStarted);
        }

        self.open()?;

        log::debug!("Beginning transaction ({:?})", isolation_level);
        let transaction = self
            .handle
            .begin_transaction(isolation_level)
            .map_err(GuardError::Handle)?;
        Ok(self.current_transaction.insert(transaction))
    }

    /// Commit the current transaction.
    ///
    /// The transaction stays registered afterwards; a second commit goes
    /// straight to the transaction handle.
    pub fn commit(&mut self) -> GuardResult<(), C> {
        let transaction = self
            .current_transaction
            .as_mut()
            .ok_or(GuardError::NoActiveTransaction)?;
        transaction.commit().map_err(GuardError::Handle)
    }

    /// Roll back the current transaction. Same contract as [`commit`](Self::commit).
    pub fn rollback(&mut self) -> GuardResult<(), C> {
        let transaction = self
            .current_transaction
            .as_mut()
            .ok_or(GuardError::NoActiveTransaction)?;
        transaction.rollback().map_err(GuardError::Handle)
    }
}
