//! Capability sets consumed from the underlying database driver.
//!
//! The guard never talks to a driver directly. It only sees a
//! [`ConnectionHandle`] (state, open, close, begin) and the
//! [`TransactionHandle`] it hands back. Both are passed in by the caller, so
//! connection state is never global.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;

/// Observable state of a physical connection.
///
/// Only `Closed`, `Open` and `Broken` drive guard decisions; the remaining
/// states are reported by some drivers while work is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Closed,
    Open,
    Broken,
    Connecting,
    Executing,
    Fetching,
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Closed => "Closed",
            Self::Open => "Open",
            Self::Broken => "Broken",
            Self::Connecting => "Connecting",
            Self::Executing => "Executing",
            Self::Fetching => "Fetching",
        };
        f.pad(name)
    }
}

/// Transaction isolation level requested on `begin_transaction`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum IsolationLevel {
    /// Let the server pick its default level
    #[default]
    Unspecified,
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

impl IsolationLevel {
    /// SQL keywords for `BEGIN ISOLATION LEVEL ...`, or `None` for the server default.
    pub fn as_sql(&self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::ReadUncommitted => Some("READ UNCOMMITTED"),
            Self::ReadCommitted => Some("READ COMMITTED"),
            Self::RepeatableRead => Some("REPEATABLE READ"),
            Self::Serializable => Some("SERIALIZABLE"),
        }
    }
}

/// An in-progress transaction started by a [`ConnectionHandle`].
pub trait TransactionHandle {
    type Error: Error + 'static;

    fn commit(&mut self) -> Result<(), Self::Error>;

    fn rollback(&mut self) -> Result<(), Self::Error>;

    /// Release any resources held by the transaction.
    ///
    /// Drivers decide what happens to unfinished work; the default does nothing.
    fn dispose(&mut self) {}
}

/// A physical database connection the guard opens and closes on demand.
pub trait ConnectionHandle {
    type Error: Error + 'static;
    type Transaction: TransactionHandle<Error = Self::Error>;

    fn state(&self) -> ConnectionState;

    fn open(&mut self) -> Result<(), Self::Error>;

    fn close(&mut self) -> Result<(), Self::Error>;

    fn begin_transaction(
        &mut self,
        isolation_level: IsolationLevel,
    ) -> Result<Self::Transaction, Self::Error>;

    /// Release the connection for good.
    ///
    /// Default closes the connection if it is not already closed. Failures are
    /// logged, never raised.
    fn dispose(&mut self) {
        if self.state() != ConnectionState::Closed {
            if let Err(e) = self.close() {
                log::warn!("Failed to close connection during dispose: {}", e);
            }
        }
    }
}

/// Borrowed handles let a guard work on a connection it does not own.
impl<T: ConnectionHandle + ?Sized> ConnectionHandle for &mut T {
    type Error = T::Error;
    type Transaction = T::Transaction;

    fn state(&self) -> ConnectionState {
        (**self).state()
    }

    fn open(&mut self) -> Result<(), Self::Error> {
        (**self).open()
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }

    fn begin_transaction(
        &mut self,
        isolation_level: IsolationLevel,
    ) -> Result<Self::Transaction, Self::Error> {
        (**self).begin_transaction(isolation_level)
    }

    fn dispose(&mut self) {
        (**self).dispose()
    }
}
