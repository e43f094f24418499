//! Open/close reference counting.

use super::{ConnectionGuard, GuardResult};
use crate::error::GuardError;
use crate::handle::{ConnectionHandle, ConnectionState};

impl<C: ConnectionHandle> ConnectionGuard<C> {
    /// Register demand for an open connection, opening it physically if needed.
    ///
    /// A broken connection is closed and reopened. When the guard performs the
    /// physical open with no outstanding demand it takes ownership of the streak
    /// and will close the connection when the streak ends. A connection that was
    /// already open is only counted, never claimed.
    pub fn open(&mut self) -> GuardResult<(), C> {
        if self.handle.state() == ConnectionState::Broken {
            log::debug!("Closing broken connection before reopening");
            self.handle.close().map_err(GuardError::Handle)?;
        }

        if self.handle.state() != ConnectionState::Open {
            log::debug!("Opening connection (open_count={})", self.open_count);
            self.handle.open().map_err(GuardError::Handle)?;

            if self.open_count == 0 {
                self.opened_by_guard = true;
                self.open_count += 1;
            } else {
                // Recovery mid-streak leaves the bookkeeping as it was.
                log::warn!(
                    "Connection reopened with {} outstanding open(s); open count and ownership left unchanged",
                    self.open_count
                );
            }
        } else {
            self.open_count += 1;
        }

        Ok(())
    }

    /// Release one unit of demand.
    ///
    /// The connection is physically closed when the count drops to zero and the
    /// guard opened it. Closing with no outstanding demand does nothing.
    pub fn close(&mut self) -> GuardResult<(), C> {
        if self.open_count == 0 {
            return Ok(());
        }

        self.open_count -= 1;
        if self.open_count == 0 && self.opened_by_guard {
            self.opened_by_guard = false;
            if self.handle.state() != ConnectionState::Closed {
                log::debug!("Closing connection opened by guard");
                self.handle.close().map_err(GuardError::Handle)?;
            }
        }

        Ok(())
    }
}
