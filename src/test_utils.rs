//! Shared test utilities.
//!
//! In-memory connection and transaction handles that record every call in a
//! shared [`Journal`], so tests can assert on physical opens and closes even
//! after the guard has taken the handle.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::handle::{ConnectionHandle, ConnectionState, IsolationLevel, TransactionHandle};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FakeError {
    #[error("simulated {0} failure")]
    Simulated(&'static str),
}

/// Every call made against the fake handles.
#[derive(Debug, Default)]
pub struct Journal {
    pub opens: usize,
    pub closes: usize,
    pub disposes: usize,
    pub begins: Vec<IsolationLevel>,
    pub commits: usize,
    pub rollbacks: usize,
    pub transaction_disposes: usize,
}

pub type SharedJournal = Rc<RefCell<Journal>>;

#[derive(Debug)]
pub struct FakeConnection {
    state: ConnectionState,
    journal: SharedJournal,
    pub fail_open: bool,
    pub fail_close: bool,
    pub fail_begin: bool,
}

impl FakeConnection {
    pub fn new() -> Self {
        Self::with_state(ConnectionState::Closed)
    }

    pub fn with_state(state: ConnectionState) -> Self {
        Self {
            state,
            journal: SharedJournal::default(),
            fail_open: false,
            fail_close: false,
            fail_begin: false,
        }
    }

    pub fn journal(&self) -> SharedJournal {
        Rc::clone(&self.journal)
    }

    /// Simulate the server dropping the connection.
    pub fn break_connection(&mut self) {
        self.state = ConnectionState::Broken;
    }

    /// Simulate something outside the guard changing the state.
    pub fn set_state(&mut self, state: ConnectionState) {
        self.state = state;
    }
}

impl Default for FakeConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionHandle for FakeConnection {
    type Error = FakeError;
    type Transaction = FakeTransaction;

    fn state(&self) -> ConnectionState {
        self.state
    }

    fn open(&mut self) -> Result<(), FakeError> {
        if self.fail_open {
            return Err(FakeError::Simulated("open"));
        }
        self.journal.borrow_mut().opens += 1;
        self.state = ConnectionState::Open;
        Ok(())
    }

    fn close(&mut self) -> Result<(), FakeError> {
        if self.fail_close {
            return Err(FakeError::Simulated("close"));
        }
        self.journal.borrow_mut().closes += 1;
        self.state = ConnectionState::Closed;
        Ok(())
    }

    fn begin_transaction(
        &mut self,
        isolation_level: IsolationLevel,
    ) -> Result<FakeTransaction, FakeError> {
        if self.fail_begin {
            return Err(FakeError::Simulated("begin"));
        }
        self.journal.borrow_mut().begins.push(isolation_level);
        Ok(FakeTransaction {
            journal: Rc::clone(&self.journal),
            isolation_level,
            fail_commit: false,
        })
    }

    fn dispose(&mut self) {
        self.journal.borrow_mut().disposes += 1;
        self.state = ConnectionState::Closed;
    }
}

#[derive(Debug)]
pub struct FakeTransaction {
    journal: SharedJournal,
    pub isolation_level: IsolationLevel,
    pub fail_commit: bool,
}

impl TransactionHandle for FakeTransaction {
    type Error = FakeError;

    fn commit(&mut self) -> Result<(), FakeError> {
        if self.fail_commit {
            return Err(FakeError::Simulated("commit"));
        }
        self.journal.borrow_mut().commits += 1;
        Ok(())
    }

    fn rollback(&mut self) -> Result<(), FakeError> {
        self.journal.borrow_mut().rollbacks += 1;
        Ok(())
    }

    fn dispose(&mut self) {
        self.journal.borrow_mut().transaction_disposes += 1;
    }
}
