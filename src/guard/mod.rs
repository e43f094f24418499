//! Lifecycle guard over a single shared connection handle.
//!
//! Several call sites can bracket their work with [`ConnectionGuard::open`] and
//! [`ConnectionGuard::close`] without knowing about each other. The guard
//! physically opens the connection on first demand and only closes it when the
//! last outstanding open is released, and only if it performed the open itself.
//! It also makes sure at most one transaction runs on the connection.
//!
//! The guard keeps a plain counter and no locks. It is meant for a single
//! logical flow; callers sharing one guard across threads must serialize
//! access themselves.

mod counter;
mod transaction;


use std::time::Duration;

use serde::Serialize;

use crate::error::GuardError;
use crate::handle::{ConnectionHandle, ConnectionState, TransactionHandle};

/// Result of a guard operation over the handle type `C`.
pub type GuardResult<T, C> = Result<T, GuardError<<C as ConnectionHandle>::Error>>;

pub struct ConnectionGuard<C: ConnectionHandle> {
    handle: C,
    owns_handle: bool,
    open_count: usize,
    opened_by_guard: bool,
    current_transaction: Option<C::Transaction>,
    command_timeout: Option<i32>,
}

/// Point-in-time view of the guard bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardSnapshot {
    pub state: ConnectionState,
    pub open_count: usize,
    pub opened_by_guard: bool,
    pub in_transaction: bool,
}

impl<C: ConnectionHandle> ConnectionGuard<C> {
    /// Wrap a handle the guard owns and disposes.
    pub fn new(handle: C) -> Self {
        Self::with_ownership(handle, true)
    }

    /// Wrap a handle, choosing whether [`dispose`](Self::dispose) releases it.
    ///
    /// `owns_handle` only controls disposal. A handle moved in is still dropped
    /// with the guard, so pass `&mut handle` for one that must outlive it.
    pub fn with_ownership(handle: C, owns_handle: bool) -> Self {
        Self {
            handle,
            owns_handle,
            open_count: 0,
            opened_by_guard: false,
            current_transaction: None,
            command_timeout: None,
        }
    }

    /// Wrap a handle that may be missing, failing with a validation error if it is.
    pub fn from_optional(handle: Option<C>, owns_handle: bool) -> GuardResult<Self, C> {
        let handle = handle.ok_or(GuardError::MissingHandle)?;
        Ok(Self::with_ownership(handle, owns_handle))
    }

    pub fn handle(&self) -> &C {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut C {
        &mut self.handle
    }

    pub fn owns_handle(&self) -> bool {
        self.owns_handle
    }

    /// Number of `open()` calls not yet matched by `close()`.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Whether the current open streak was physically opened by this guard.
    pub fn is_opened_by_guard(&self) -> bool {
        self.opened_by_guard
    }

    pub fn current_transaction(&self) -> Option<&C::Transaction> {
        self.current_transaction.as_ref()
    }

    pub fn in_transaction(&self) -> bool {
        self.current_transaction.is_some()
    }

    /// Command timeout in seconds, for statement execution to honour.
    pub fn command_timeout(&self) -> Option<i32> {
        self.command_timeout
    }

    pub fn command_timeout_duration(&self) -> Option<Duration> {
        self.command_timeout
            .map(|secs| Duration::from_secs(secs as u64))
    }

    /// Set or clear the command timeout. Negative values are rejected.
    pub fn set_command_timeout(&mut self, timeout: Option<i32>) -> GuardResult<(), C> {
        if let Some(secs) = timeout {
            if secs < 0 {
                return Err(GuardError::InvalidCommandTimeout(secs));
            }
        }
        self.command_timeout = timeout;
        Ok(())
    }

    pub fn snapshot(&self) -> GuardSnapshot {
        GuardSnapshot {
            state: self.handle.state(),
            open_count: self.open_count,
            opened_by_guard: self.opened_by_guard,
            in_transaction: self.in_transaction(),
        }
    }

    /// Release the transaction and, when owned, the connection handle.
    ///
    /// The transaction is disposed as-is: it is neither committed nor rolled
    /// back here. A borrowed handle is left alone. The guard should not be
    /// used afterwards.
    pub fn dispose(&mut self) {
        if let Some(mut transaction) = self.current_transaction.take() {
            transaction.dispose();
        }

        if self.owns_handle {
            self.handle.dispose();
            self.open_count = 0;
            self.opened_by_guard = false;
        }
    }
}

impl<C: ConnectionHandle> std::fmt::Debug for ConnectionGuard<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionGuard")
            .field("state", &self.handle.state())
            .field("owns_handle", &self.owns_handle)
            .field("open_count", &self.open_count)
            .field("opened_by_guard", &self.opened_by_guard)
            .field("in_transaction", &self.in_transaction())
            .field("command_timeout", &self.command_timeout)
            .finish()
    }
}
