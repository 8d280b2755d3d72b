//! `EventQueue` — sparse per-tick event schedule.
//!
//! Most ticks carry no events.  Keying a `BTreeMap` by tick means the driver
//! only touches ticks that actually have work, and events scheduled for the
//! same tick keep their insertion order.

use std::collections::BTreeMap;

use lift_core::Tick;

use crate::Event;

/// A schedule mapping ticks → events due at that tick.
#[derive(Default, Debug, Clone)]
pub struct EventQueue {
    inner: BTreeMap<Tick, Vec<Event>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `tick`, after any events already queued there.
    pub fn push(&mut self, tick: Tick, event: Event) {
        self.inner.entry(tick).or_default().push(event);
        self.total += 1;
    }

    /// Remove and return all events scheduled for exactly `tick`.
    ///
    /// Returns `None` if nothing is queued for that tick.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Event>> {
        let events = self.inner.remove(&tick)?;
        self.total -= events.len();
        Some(events)
    }

    /// Remove and return every event scheduled at or before `now`, oldest
    /// tick first.
    pub fn drain_due(&mut self, now: Tick) -> Vec<Event> {
        let later = self.inner.split_off(&now.offset(1));
        let due = std::mem::replace(&mut self.inner, later);
        let events: Vec<Event> = due.into_values().flatten().collect();
        self.total -= events.len();
        events
    }

    /// The earliest tick with at least one queued event.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// The latest tick with at least one queued event.
    pub fn last_tick(&self) -> Option<Tick> {
        self.inner.keys().next_back().copied()
    }

    /// Total number of queued events across all ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Fold another queue into this one.
    pub fn merge(&mut self, other: EventQueue) {
        for (tick, events) in other.inner {
            for event in events {
                self.push(tick, event);
            }
        }
    }
}
