use serde::Serialize;

use crate::events::EventKind;
use crate::queue::Queue;

/// One processed event, in processing order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventRecord {
    pub index: usize,
    pub kind: EventKind,
    pub queue_id: String,
    pub time: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LevelTime {
    pub level: u32,
    pub time: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueueReport {
    pub id: String,
    pub servers: u32,
    pub capacity: u32,
    pub occupancy: u32,
    pub lost: u64,
    pub statistics: Vec<LevelTime>,
}

impl QueueReport {
    pub fn from_queue(queue: &Queue) -> Self {
        Self {
            id: queue.id().to_string(),
            servers: queue.servers(),
            capacity: queue.capacity(),
            occupancy: queue.occupancy(),
            lost: queue.lost(),
            statistics: queue
                .statistics()
                .iter()
                .enumerate()
                .map(|(level, time)| LevelTime {
                    level: level as u32,
                    time: *time,
                })
                .collect(),
        }
    }

    pub fn total_time(&self) -> f64 {
        self.statistics.iter().map(|entry| entry.time).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunMetadata {
    pub seed: i64,
    pub duration: f64,
    /// Time of the last processed event.
    pub elapsed: f64,
    pub processed_events: usize,
    pub pending_events: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    pub metadata: RunMetadata,
    pub queues: Vec<QueueReport>,
    pub events: Vec<EventRecord>,
}

impl SimulationResult {
    pub fn queue(&self, id: &str) -> Option<&QueueReport> {
        self.queues.iter().find(|queue| queue.id == id)
    }
}

/// Share of `elapsed` spent at a level, as a percentage. Zero when nothing elapsed.
pub fn percent_of(time: f64, elapsed: f64) -> f64 {
    if elapsed == 0.0 {
        0.0
    } else {
        time * 100.0 / elapsed
    }
}
