//! Guard error types.
//!
//! Misuse of the guard is reported with dedicated variants. Anything the
//! connection or transaction handle raises comes back as [`GuardError::Handle`]
//! untouched.

use thiserror::Error;

/// Broad category of a [`GuardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input (missing handle, negative timeout)
    Validation,
    /// Operation not permitted in the current state (second begin)
    Conflict,
    /// Required precondition is absent (commit without a transaction)
    State,
    /// Raised by the underlying handle
    Handle,
}

#[derive(Error, Debug)]
pub enum GuardError<E> {
    #[error("A connection handle is required")]
    MissingHandle,

    #[error("CommandTimeout must be zero or positive (got {0})")]
    InvalidCommandTimeout(i32),

    #[error("The connection is already in a transaction and cannot participate in another transaction.")]
    TransactionAlreadyStarted,

    #[error("The connection does not have any active transactions.")]
    NoActiveTransaction,

    #[error(transparent)]
    Handle(E),
}

impl<E> GuardError<E> {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingHandle | Self::InvalidCommandTimeout(_) => ErrorKind::Validation,
            Self::TransactionAlreadyStarted => ErrorKind::Conflict,
            Self::NoActiveTransaction => ErrorKind::State,
            Self::Handle(_) => ErrorKind::Handle,
        }
    }

    /// The handle error, if this error came from the handle.
    pub fn into_handle_error(self) -> Option<E> {
        match self {
            Self::Handle(e) => Some(e),
            _ => None,
        }
    }
}
