//! Reminder scheduling.
//!
//! Pending reminders live in a min-heap ordered by their absolute fire
//! instant, plus a map keyed by event id that says which heap entry is
//! current. Cancelled entries stay in the heap and are dropped when they
//! reach the top.

use crate::db::EventStore;
use crate::errors::AppResult;
use crate::models::action::HistoryAction;
use crate::ui::messages::reminder;
use chrono::{NaiveDateTime, TimeDelta};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Default lead time between a reminder and its event.
pub const DEFAULT_LEAD_MINUTES: i64 = 10;

/// Longest lead time accepted from configuration (one week).
pub const MAX_LEAD_MINUTES: i64 = 7 * 24 * 60;

/// Instant a reminder for an event starting at `starts_at` should fire.
///
/// `None` when the lead is out of range for date arithmetic.
pub fn fire_instant(starts_at: NaiveDateTime, lead_minutes: i64) -> Option<NaiveDateTime> {
    starts_at.checked_sub_signed(TimeDelta::try_minutes(lead_minutes)?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub fire_at: NaiveDateTime,
    pub event_id: i64,
    pub event_name: String,
}

impl Ord for Reminder {
    fn cmp(&self, other: &Self) -> Ordering {
        self.fire_at
            .cmp(&other.fire_at)
            .then(self.event_id.cmp(&other.event_id))
    }
}

impl PartialOrd for Reminder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

pub struct ReminderScheduler {
    lead_minutes: i64,
    queue: BinaryHeap<Reverse<Reminder>>,
    pending: HashMap<i64, NaiveDateTime>,
}

impl ReminderScheduler {
    pub fn new(lead_minutes: i64) -> Self {
        Self {
            lead_minutes,
            queue: BinaryHeap::new(),
            pending: HashMap::new(),
        }
    }

    pub fn lead_minutes(&self) -> i64 {
        self.lead_minutes
    }

    /// Number of reminders waiting to fire.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Rebuild every pending reminder from the store.
    ///
    /// An event gets a reminder when it is unsent, starts after `now`, and
    /// its fire instant (start minus lead) is also after `now`. Events
    /// already inside the lead window are skipped for good, unless their
    /// reminder was registered by an earlier pass: an overdue reminder is
    /// kept so the next `fire_due` delivers it late instead of losing it.
    pub fn reschedule(&mut self, store: &EventStore, now: NaiveDateTime) -> AppResult<usize> {
        let events = store.list_events()?;

        let previous = std::mem::take(&mut self.pending);
        self.queue.clear();

        for ev in events {
            if ev.reminder_sent {
                continue;
            }

            let Some(starts_at) = ev.starts_at() else {
                log::warn!(
                    "event {} has unparseable date/time '{}', not scheduling",
                    ev.id,
                    ev.get_date_time()
                );
                continue;
            };

            let Some(fire_at) = fire_instant(starts_at, self.lead_minutes) else {
                log::warn!(
                    "lead of {} minutes is out of range for event {}, not scheduling",
                    self.lead_minutes,
                    ev.id
                );
                continue;
            };

            let overdue = previous.get(&ev.id) == Some(&fire_at) && fire_at <= now;
            if !overdue {
                if starts_at <= now {
                    continue;
                }
                if fire_at <= now {
                    log::debug!("event {} starts within the lead window, no reminder", ev.id);
                    continue;
                }
            }

            self.pending.insert(ev.id, fire_at);
            self.queue.push(Reverse(Reminder {
                fire_at,
                event_id: ev.id,
                event_name: ev.name,
            }));
        }

        log::debug!("reschedule pass: {} reminder(s) pending", self.pending.len());
        Ok(self.pending.len())
    }

    /// Withdraw the pending reminder of one event. Returns whether one existed.
    pub fn cancel(&mut self, event_id: i64) -> bool {
        self.pending.remove(&event_id).is_some()
    }

    /// Earliest fire instant still pending.
    pub fn next_deadline(&mut self) -> Option<NaiveDateTime> {
        while let Some(Reverse(head)) = self.queue.peek() {
            if self.pending.get(&head.event_id) == Some(&head.fire_at) {
                return Some(head.fire_at);
            }
            self.queue.pop();
        }
        None
    }

    /// Fire, in order, every reminder due at or before `now`.
    pub fn fire_due(&mut self, store: &EventStore, now: NaiveDateTime) -> AppResult<Vec<Reminder>> {
        let mut fired = Vec::new();

        while let Some(at) = self.next_deadline() {
            if at > now {
                break;
            }
            let Some(Reverse(due)) = self.queue.pop() else {
                break;
            };
            self.pending.remove(&due.event_id);
            self.fire_reminder(store, due.event_id, &due.event_name)?;
            fired.push(due);
        }

        Ok(fired)
    }

    /// Notify the user, then record the reminder and flag the event.
    pub fn fire_reminder(&self, store: &EventStore, event_id: i64, event_name: &str) -> AppResult<()> {
        reminder(format!(
            "Reminder: Event '{}' is coming up in {} minutes!",
            event_name, self.lead_minutes
        ));
        store.record_history(HistoryAction::ReminderSent.to_db_str(), event_id)?;
        store.mark_reminder_sent(event_id)?;
        log::info!("reminder sent for event {}", event_id);
        Ok(())
    }
}

impl Default for ReminderScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_LEAD_MINUTES)
    }
}
