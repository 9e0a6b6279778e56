use chrono::NaiveDateTime;
use smartcal::core::calendar::Calendar;
use smartcal::db::EventStore;
use smartcal::models::event::Event;
use smartcal::models::history::TIMESTAMP_FORMAT;

mod common;
use common::setup_test_db;

fn store() -> EventStore {
    EventStore::open_in_memory().expect("open in-memory store")
}

#[test]
fn test_add_standup_scenario() {
    let mut cal = Calendar::in_memory(10).expect("calendar");

    let id = cal
        .add_event("Standup", 2, "2099-01-01", "09:00")
        .expect("add event");
    assert_eq!(id, 1);

    let events = cal.list_events().expect("list events");
    assert_eq!(events, vec![Event::new(1, "Standup", 2, "2099-01-01", "09:00")]);

    let history = cal.list_history().expect("list history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].event_name, "Standup");
    assert_eq!(history[0].action, "Event Added");
    assert_eq!(history[0].event_id, 1);

    let ts = NaiveDateTime::parse_from_str(&history[0].timestamp, TIMESTAMP_FORMAT);
    assert!(ts.is_ok(), "unexpected timestamp {}", history[0].timestamp);
}

#[test]
fn test_list_events_sorted_by_priority_then_insertion() {
    let s = store();
    let a = s.add_event("low", 3, "2099-01-01", "10:00").unwrap();
    let b = s.add_event("urgent", 1, "2099-01-02", "10:00").unwrap();
    let c = s.add_event("low again", 3, "2099-01-03", "10:00").unwrap();
    let d = s.add_event("mid", 2, "2099-01-04", "10:00").unwrap();

    let ids: Vec<i64> = s.list_events().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![b, d, a, c]);
}

#[test]
fn test_priority_one_listed_first() {
    let s = store();
    s.add_event("three", 3, "2099-01-01", "10:00").unwrap();
    s.add_event("one", 1, "2099-01-01", "11:00").unwrap();

    let events = s.list_events().unwrap();
    assert_eq!(events[0].name, "one");
    assert_eq!(events[1].name, "three");
}

#[test]
fn test_get_event_missing_is_none() {
    let s = store();
    assert_eq!(s.get_event(42).unwrap(), None);
}

#[test]
fn test_delete_removes_event_and_history() {
    let mut cal = Calendar::in_memory(10).unwrap();
    let keep = cal.add_event("keep", 1, "2099-02-01", "08:00").unwrap();
    let gone = cal.add_event("gone", 2, "2099-02-01", "09:00").unwrap();
    cal.store().record_history("Edited", gone).unwrap();

    assert!(cal.delete_event(gone).unwrap());

    assert_eq!(cal.get_event(gone).unwrap(), None);
    assert!(cal.history_for_event(gone).unwrap().is_empty());
    let history = cal.list_history().unwrap();
    assert!(history.iter().all(|h| h.event_id != gone));
    assert!(history.iter().any(|h| h.event_id == keep));
}

#[test]
fn test_delete_nonexistent_is_noop() {
    let mut cal = Calendar::in_memory(10).unwrap();
    cal.add_event("only", 1, "2099-03-01", "12:00").unwrap();

    let events_before = cal.list_events().unwrap();
    let history_before = cal.list_history().unwrap();

    assert!(!cal.delete_event(9999).unwrap());

    assert_eq!(cal.list_events().unwrap(), events_before);
    assert_eq!(cal.list_history().unwrap(), history_before);
}

#[test]
fn test_record_history_is_append_only() {
    let s = store();
    let id = s.add_event("audit", 1, "2099-01-01", "10:00").unwrap();

    for n in 1..=4 {
        s.record_history("Touched", id).unwrap();
        assert_eq!(s.list_history().unwrap().len(), n);
    }

    let raw = s.history_for_event(id).unwrap();
    assert_eq!(raw.len(), 4);
    assert!(raw.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn test_history_most_recent_first() {
    let s = store();
    let id = s.add_event("ordered", 1, "2099-01-01", "10:00").unwrap();
    s.record_history("first", id).unwrap();
    s.record_history("second", id).unwrap();

    let history = s.list_history().unwrap();
    assert_eq!(history[0].action, "second");
    assert_eq!(history[1].action, "first");
}

#[test]
fn test_history_of_deleted_event_hidden_by_join() {
    let s = store();
    // A reminder that fired after its event vanished leaves an orphan row.
    s.record_history("Reminder Sent", 77).unwrap();
    assert!(s.list_history().unwrap().is_empty());
    assert_eq!(s.history_for_event(77).unwrap().len(), 1);
}

#[test]
fn test_mark_reminder_sent_is_idempotent() {
    let s = store();
    let id = s.add_event("ping", 1, "2099-01-01", "10:00").unwrap();

    s.mark_reminder_sent(id).unwrap();
    s.mark_reminder_sent(id).unwrap();
    assert!(s.get_event(id).unwrap().unwrap().reminder_sent);

    // Missing rows are fine too.
    s.mark_reminder_sent(12345).unwrap();
}

#[test]
fn test_store_accepts_malformed_data() {
    let s = store();
    let id = s.add_event("", 42, "not-a-date", "25:99").unwrap();

    let ev = s.get_event(id).unwrap().unwrap();
    assert_eq!(ev.name, "");
    assert_eq!(ev.priority, 42);
    assert_eq!(ev.starts_at(), None);
}

#[test]
fn test_file_store_persists_across_reopen() {
    let db_path = setup_test_db("store_persist");

    let s = EventStore::open(&db_path).unwrap();
    let id = s.add_event("persisted", 2, "2099-05-05", "05:05").unwrap();
    s.record_history("Event Added", id).unwrap();
    s.close().unwrap();

    let s = EventStore::open(&db_path).unwrap();
    let ev = s.get_event(id).unwrap().expect("event survives reopen");
    assert_eq!(ev.name, "persisted");
    assert_eq!(s.list_history().unwrap().len(), 1);
    s.close().unwrap();
}

#[test]
fn test_legacy_events_table_gets_reminder_column() {
    let db_path = setup_test_db("store_legacy");

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE events (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                priority INTEGER NOT NULL,
                date TEXT NOT NULL,
                time TEXT NOT NULL
            );
            INSERT INTO events (name, priority, date, time)
            VALUES ('Meeting with Bob', 1, '2025-01-10', '15:00');",
        )
        .unwrap();
    }

    let s = EventStore::open(&db_path).unwrap();
    let events = s.list_events().unwrap();
    assert_eq!(events.len(), 1);
    assert!(!events[0].reminder_sent);

    s.mark_reminder_sent(events[0].id).unwrap();
    assert!(s.get_event(events[0].id).unwrap().unwrap().reminder_sent);
    s.close().unwrap();
}
