use super::*;
use crate::club::ClientStatus;

// ========================================================================
// Helpers
// ========================================================================

fn at(time: &str) -> ClubTime {
    let (hour, minute) = time.split_once(':').unwrap();
    ClubTime::new(hour.parse().unwrap(), minute.parse().unwrap()).unwrap()
}

fn table(id: u32) -> TableId {
    TableId::new(id).unwrap()
}

fn settings(tables: u32, opening: &str, closing: &str, cost_per_hour: u32) -> ClubSettings {
    ClubSettings {
        tables,
        opening: at(opening),
        closing: at(closing),
        cost_per_hour,
    }
}

/// 09:00-19:00, 10 per hour
fn open_club(tables: u32) -> ClubSession {
    ClubSession::open(settings(tables, "09:00", "19:00", 10))
}

fn arrive(time: &str, client: &str) -> ClubEvent {
    ClubEvent::new(at(time), client, ClientAction::Arrive)
}

fn sit(time: &str, client: &str, id: u32) -> ClubEvent {
    ClubEvent::new(at(time), client, ClientAction::Sit { table: table(id) })
}

fn wait(time: &str, client: &str) -> ClubEvent {
    ClubEvent::new(at(time), client, ClientAction::Wait)
}

fn leave(time: &str, client: &str) -> ClubEvent {
    ClubEvent::new(at(time), client, ClientAction::Leave)
}

/// Process `events`, checking the registry invariants after each one
fn play(session: &mut ClubSession, events: &[ClubEvent]) {
    for event in events {
        session.process(event);
        assert_invariants(session);
    }
}

fn rendered(log: &[LogLine]) -> Vec<String> {
    log.iter().map(|line| line.to_string()).collect()
}

/// Lines logged after the opening marker
fn lines_after_opening(session: &ClubSession) -> Vec<String> {
    rendered(&session.log()[1..])
}

fn assert_invariants(session: &ClubSession) {
    for (id, account) in session.tables().iter() {
        let seated = session
            .clients()
            .iter()
            .filter(|(_, status)| status.table() == Some(id))
            .count();
        assert!(seated <= 1, "table {} shared by {} clients", id, seated);
        assert_eq!(
            account.is_busy(),
            seated == 1,
            "table {} busy flag out of sync",
            id
        );
    }
    for name in session.queue().iter() {
        assert_eq!(
            session.clients().status(name),
            Some(ClientStatus::Waiting),
            "{} queued but not waiting",
            name
        );
    }
    for (name, status) in session.clients().iter() {
        if status == ClientStatus::Waiting {
            assert!(session.queue().contains(name), "{} waiting but not queued", name);
        }
    }
}
