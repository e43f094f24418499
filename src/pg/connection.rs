use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use postgres::{Client, NoTls};

use super::{PgError, PgTransaction};
use crate::handle::{ConnectionHandle, ConnectionState, IsolationLevel};

/// Largest `statement_timeout` PostgreSQL accepts, in milliseconds.
const MAX_STATEMENT_TIMEOUT_MS: u128 = i32::MAX as u128;

/// A lazily connected PostgreSQL session.
///
/// The connection is the only strong owner of the client. Transactions hold a
/// weak reference, so closing the connection always ends the server session
/// and leaves any outstanding transaction detached.
pub struct PgConnection {
    config: postgres::Config,
    client: Option<Rc<RefCell<Client>>>,
    statement_timeout: Option<Duration>,
}

impl PgConnection {
    pub fn new(config: postgres::Config) -> Self {
        Self {
            config,
            client: None,
            statement_timeout: None,
        }
    }

    /// Applied as `statement_timeout` on every new session.
    pub fn set_statement_timeout(&mut self, timeout: Option<Duration>) {
        self.statement_timeout = timeout;
    }

    pub fn statement_timeout(&self) -> Option<Duration> {
        self.statement_timeout
    }

    /// Run statements on the open session.
    pub fn batch_execute(&mut self, sql: &str) -> Result<(), PgError> {
        let client = self.client.as_ref().ok_or(PgError::NotOpen)?;
        client.borrow_mut().batch_execute(sql)?;
        Ok(())
    }
}

impl ConnectionHandle for PgConnection {
    type Error = PgError;
    type Transaction = PgTransaction;

    fn state(&self) -> ConnectionState {
        match &self.client {
            None => ConnectionState::Closed,
            Some(client) if client.borrow().is_closed() => ConnectionState::Broken,
            Some(_) => ConnectionState::Open,
        }
    }

    fn open(&mut self) -> Result<(), PgError> {
        let mut client = self.config.connect(NoTls)?;
        if let Some(timeout) = self.statement_timeout {
            client.batch_execute(&statement_timeout_sql(timeout))?;
        }
        log::debug!("PostgreSQL session established");
        self.client = Some(Rc::new(RefCell::new(client)));
        Ok(())
    }

    fn close(&mut self) -> Result<(), PgError> {
        let Some(client) = self.client.take() else {
            return Ok(());
        };

        match Rc::try_unwrap(client) {
            Ok(client) => {
                let client = client.into_inner();
                if !client.is_closed() {
                    client.close()?;
                }
            }
            Err(_) => log::warn!("PostgreSQL session still in use while closing; it ends when released"),
        }
        Ok(())
    }

    fn begin_transaction(
        &mut self,
        isolation_level: IsolationLevel,
    ) -> Result<PgTransaction, PgError> {
        let client = self.client.as_ref().ok_or(PgError::NotOpen)?;
        let sql = match isolation_level.as_sql() {
            Some(level) => format!("BEGIN ISOLATION LEVEL {}", level),
            None => "BEGIN".to_string(),
        };
        client.borrow_mut().batch_execute(&sql)?;
        Ok(PgTransaction::new(Rc::downgrade(client)))
    }
}

/// Build the `SET statement_timeout` statement, capped at the server maximum.
fn statement_timeout_sql(timeout: Duration) -> String {
    let millis = timeout.as_millis();
    if millis > MAX_STATEMENT_TIMEOUT_MS {
        log::debug!(
            "Statement timeout of {}ms capped at {}ms",
            millis,
            MAX_STATEMENT_TIMEOUT_MS
        );
    }
    format!(
        "SET statement_timeout = {}",
        millis.min(MAX_STATEMENT_TIMEOUT_MS)
    )
}
