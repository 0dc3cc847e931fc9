use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Arrival,
    Departure,
    Transfer,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EventKind::Arrival => "arrival",
            EventKind::Departure => "departure",
            EventKind::Transfer => "transfer",
        };
        f.write_str(label)
    }
}

/// A pending event. `queue` is the position of the target queue in the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    pub queue: usize,
    pub time: f64,
}

impl Event {
    pub fn new(kind: EventKind, queue: usize, time: f64) -> Self {
        Self { kind, queue, time }
    }
}

/// An event stamped with its insertion order.
#[derive(Clone, Copy, Debug)]
pub struct ScheduledEvent {
    pub event: Event,
    pub sequence: u64,
}

impl PartialEq for ScheduledEvent {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduledEvent {}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event
            .time
            .total_cmp(&other.event.time)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Pending events, extracted earliest first.
///
/// Events that share a time come out in the order they were inserted.
#[derive(Debug, Default)]
pub struct Timeline {
    heap: BinaryHeap<Reverse<ScheduledEvent>>,
    next_sequence: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, event: Event) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(ScheduledEvent { event, sequence }));
    }

    pub fn extract_earliest(&mut self) -> Result<Event> {
        self.heap
            .pop()
            .map(|Reverse(scheduled)| scheduled.event)
            .ok_or(Error::EmptyTimeline)
    }

    pub fn peek_time(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(scheduled)| scheduled.event.time)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
