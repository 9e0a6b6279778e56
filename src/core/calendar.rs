//! High-level calendar backend used by the CLI.
//!
//! Owns the store and the scheduler; every mutation is followed by a
//! full reschedule pass.

use crate::core::reminder::{Reminder, ReminderScheduler};
use crate::db::EventStore;
use crate::errors::AppResult;
use crate::models::action::HistoryAction;
use crate::models::event::Event;
use crate::models::history::{HistoryEntry, HistoryRecord};
use chrono::{Local, NaiveDateTime};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub struct Calendar {
    store: EventStore,
    scheduler: ReminderScheduler,
}

impl Calendar {
    pub fn open<P: AsRef<Path>>(path: P, lead_minutes: i64) -> AppResult<Self> {
        Ok(Self::with_store(EventStore::open(path)?, lead_minutes))
    }

    pub fn in_memory(lead_minutes: i64) -> AppResult<Self> {
        Ok(Self::with_store(EventStore::open_in_memory()?, lead_minutes))
    }

    pub fn with_store(store: EventStore, lead_minutes: i64) -> Self {
        Self {
            store,
            scheduler: ReminderScheduler::new(lead_minutes),
        }
    }

    pub fn close(self) -> AppResult<()> {
        self.store.close()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Store a new event, log its creation and reschedule.
    ///
    /// Insert and history write are separate commits.
    pub fn add_event(&mut self, name: &str, priority: i64, date: &str, time: &str) -> AppResult<i64> {
        let id = self.store.add_event(name, priority, date, time)?;
        self.store
            .record_history(HistoryAction::EventAdded.to_db_str(), id)?;
        log::info!("added event {} '{}'", id, name);

        self.reschedule(local_now())?;
        Ok(id)
    }

    pub fn list_events(&self) -> AppResult<Vec<Event>> {
        self.store.list_events()
    }

    pub fn get_event(&self, id: i64) -> AppResult<Option<Event>> {
        self.store.get_event(id)
    }

    pub fn list_history(&self) -> AppResult<Vec<HistoryEntry>> {
        self.store.list_history()
    }

    pub fn history_for_event(&self, id: i64) -> AppResult<Vec<HistoryRecord>> {
        self.store.history_for_event(id)
    }

    /// Delete an event and its history, then reschedule.
    pub fn delete_event(&mut self, id: i64) -> AppResult<bool> {
        let removed = self.store.delete_event(id)?;
        self.scheduler.cancel(id);
        log::info!("delete event {}: removed={}", id, removed);

        self.reschedule(local_now())?;
        Ok(removed)
    }

    pub fn reschedule(&mut self, now: NaiveDateTime) -> AppResult<usize> {
        self.scheduler.reschedule(&self.store, now)
    }

    /// Fire whatever is due at `now`.
    pub fn tick(&mut self, now: NaiveDateTime) -> AppResult<Vec<Reminder>> {
        self.scheduler.fire_due(&self.store, now)
    }

    pub fn pending_reminders(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn next_deadline(&mut self) -> Option<NaiveDateTime> {
        self.scheduler.next_deadline()
    }

    /// Run the reminder loop until `stop` returns true.
    ///
    /// Expects a reschedule pass to have run already (`add_event`,
    /// `delete_event` and `reschedule` all do one). Each round first fires
    /// whatever is due, so a late wake-up delivers overdue reminders, then
    /// re-reads the store once `refresh` has elapsed so events added by
    /// other processes are picked up, then sleeps until the next reminder
    /// or refresh. `stop` receives the number of reminders fired so far;
    /// the same number is returned.
    pub fn watch<F>(&mut self, refresh: Duration, mut stop: F) -> AppResult<usize>
    where
        F: FnMut(usize) -> bool,
    {
        let mut next_refresh = Instant::now() + refresh;
        let mut fired_total = 0;

        loop {
            fired_total += self.tick(local_now())?.len();
            if stop(fired_total) {
                break;
            }

            if Instant::now() >= next_refresh {
                self.reschedule(local_now())?;
                next_refresh = Instant::now() + refresh;
            }

            let until_refresh = next_refresh.saturating_duration_since(Instant::now());
            let sleep_for = match self.next_deadline() {
                Some(at) => (at - local_now())
                    .to_std()
                    .unwrap_or(Duration::ZERO)
                    .min(until_refresh),
                None => until_refresh,
            };

            log::trace!("watch loop sleeping for {:?}", sleep_for);
            thread::sleep(sleep_for);
        }

        Ok(fired_total)
    }
}
