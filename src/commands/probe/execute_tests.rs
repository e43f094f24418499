//! Execute tests for probe command.

#[cfg(test)]
mod tests {
    use super::super::ProbeCmd;
    use crate::commands::Execute;
    use crate::guard::ConnectionGuard;
    use crate::handle::ConnectionState;
    use crate::test_utils::FakeConnection;
    use rstest::rstest;

    #[rstest]
    fn test_probe_records_every_step() {
        let mut guard = ConnectionGuard::new(FakeConnection::new());

        let result = ProbeCmd { depth: 3 }.execute(&mut guard).unwrap();

        assert_eq!(result.depth, 3);
        assert_eq!(result.steps.len(), 7);
        let actions: Vec<&str> = result.steps.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(
            actions,
            vec!["start", "open", "open", "open", "close", "close", "close"]
        );
    }

    #[rstest]
    fn test_probe_opens_and_closes_once() {
        let connection = FakeConnection::new();
        let journal = connection.journal();
        let mut guard = ConnectionGuard::new(connection);

        let result = ProbeCmd { depth: 4 }.execute(&mut guard).unwrap();

        assert_eq!(journal.borrow().opens, 1);
        assert_eq!(journal.borrow().closes, 1);
        let open_counts: Vec<usize> = result.steps.iter().map(|s| s.snapshot.open_count).collect();
        assert_eq!(open_counts, vec![0, 1, 2, 3, 4, 3, 2, 1, 0]);
        assert_eq!(result.steps.last().unwrap().snapshot.state, ConnectionState::Closed);
    }

    #[rstest]
    fn test_probe_leaves_preopened_connection_open() {
        let mut guard = ConnectionGuard::new(FakeConnection::with_state(ConnectionState::Open));

        let result = ProbeCmd { depth: 1 }.execute(&mut guard).unwrap();

        let last = result.steps.last().unwrap();
        assert_eq!(last.snapshot.state, ConnectionState::Open);
        assert!(!last.snapshot.opened_by_guard);
    }

    #[rstest]
    fn test_probe_reports_timeout() {
        let mut guard = ConnectionGuard::new(FakeConnection::new());
        guard.set_command_timeout(Some(12)).unwrap();

        let result = ProbeCmd { depth: 1 }.execute(&mut guard).unwrap();

        assert_eq!(result.command_timeout, Some(12));
    }

    #[rstest]
    fn test_probe_fails_when_open_fails() {
        let mut connection = FakeConnection::new();
        connection.fail_open = true;
        let mut guard = ConnectionGuard::new(connection);

        let result = ProbeCmd { depth: 2 }.execute(&mut guard);

        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "simulated open failure");
    }
}
