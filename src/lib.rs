//! conn_guard library - lifecycle guard for a shared database connection
//!
//! Lets independent call sites open and close logical use of one physical
//! connection without closing it under each other, and keeps at most one
//! transaction active on it. Ships a PostgreSQL handle and a small CLI to
//! exercise the guard against a live server.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod guard;
pub mod handle;
pub mod output;
pub mod pg;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;

pub use error::{ErrorKind, GuardError};
pub use guard::{ConnectionGuard, GuardResult, GuardSnapshot};
pub use handle::{ConnectionHandle, ConnectionState, IsolationLevel, TransactionHandle};
