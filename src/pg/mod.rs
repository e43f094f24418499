//! PostgreSQL connection handle.
//!
//! Implements [`ConnectionHandle`](crate::handle::ConnectionHandle) on top of
//! the synchronous `postgres` client so a guard can drive a real server.
//! Transactions are plain `BEGIN`/`COMMIT`/`ROLLBACK` statements issued on the
//! connection's client, which the transaction only references weakly.

mod config;
mod connection;
mod transaction;

pub use config::PostgresConfig;
pub use connection::PgConnection;
pub use transaction::PgTransaction;

use thiserror::Error;

/// PostgreSQL handle errors
#[derive(Error, Debug)]
pub enum PgError {
    #[error("Connection is not open")]
    NotOpen,

    #[error("Invalid PostgreSQL configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Postgres(#[from] postgres::Error),
}
