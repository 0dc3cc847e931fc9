use std::collections::HashMap;
use tracing::{debug, info, trace};

use crate::error::{Error, Result};
use crate::events::{Event, EventKind, Timeline};
use crate::models::{QueueConfig, SimConfig};
use crate::queue::{Interval, Queue};
use crate::rng::LinearCongruential;
use crate::state::{EventRecord, QueueReport, RunMetadata, SimulationResult};
use crate::topology::Topology;

/// Largest accepted queue capacity; statistics keep one slot per level.
pub const MAX_CAPACITY: u32 = 1 << 20;

/// Outcome of a single [`SimulationEngine::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    Processed(Event),
    Finished,
}

pub struct SimulationEngine {
    queues: Vec<Queue>,
    topology: Topology,
    timeline: Timeline,
    rng: LinearCongruential,
    duration: f64,
    previous_event_time: f64,
    processed: usize,
    finished: bool,
    record_trace: bool,
    trace: Vec<EventRecord>,
}

impl SimulationEngine {
    /// Validates `config` and seeds the timeline with its arrivals.
    ///
    /// Without a seed in the configuration a random one is drawn; it is
    /// reported in the result metadata so the run can be repeated.
    pub fn new(config: &SimConfig) -> Result<Self> {
        let (index, topology) = prepare(config)?;
        let queues: Vec<Queue> = config.queues.iter().map(Queue::from_config).collect();

        let mut timeline = Timeline::new();
        for arrival in &config.arrivals {
            let queue = index
                .get(arrival.queue_id.as_str())
                .copied()
                .ok_or_else(|| Error::UnknownArrivalQueue(arrival.queue_id.to_string()))?;
            timeline.insert(Event::new(EventKind::Arrival, queue, arrival.time));
        }

        let seed = config.seed.unwrap_or_else(rand::random);

        Ok(Self {
            queues,
            topology,
            timeline,
            rng: LinearCongruential::new(seed),
            duration: config.duration,
            previous_event_time: 0.0,
            processed: 0,
            finished: false,
            record_trace: true,
            trace: Vec::new(),
        })
    }

    /// Turns the processed-event trace on or off. On by default.
    pub fn with_trace(mut self, record_trace: bool) -> Self {
        self.record_trace = record_trace;
        self
    }

    pub fn queues(&self) -> &[Queue] {
        &self.queues
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn previous_event_time(&self) -> f64 {
        self.previous_event_time
    }

    pub fn pending_events(&self) -> usize {
        self.timeline.len()
    }

    pub fn seed(&self) -> i64 {
        self.rng.seed()
    }

    pub fn run(&mut self) -> Result<SimulationResult> {
        info!(
            seed = self.rng.seed(),
            duration = self.duration,
            queues = self.queues.len(),
            "starting simulation"
        );
        while let Step::Processed(_) = self.step()? {}
        info!(
            processed = self.processed,
            elapsed = self.previous_event_time,
            pending = self.timeline.len(),
            "simulation finished"
        );
        Ok(self.finish())
    }

    /// Processes the earliest pending event, or reports that the run is over
    /// once that event lies beyond the configured duration.
    pub fn step(&mut self) -> Result<Step> {
        if self.finished {
            return Ok(Step::Finished);
        }

        let event = self.timeline.extract_earliest()?;
        if event.time > self.duration {
            self.finished = true;
            return Ok(Step::Finished);
        }

        trace!(
            kind = %event.kind,
            queue = self.queues[event.queue].id(),
            time = event.time,
            "dispatching event"
        );
        if self.record_trace {
            self.trace.push(EventRecord {
                index: self.processed,
                kind: event.kind,
                queue_id: self.queues[event.queue].id().to_string(),
                time: event.time,
            });
        }

        match event.kind {
            EventKind::Arrival => self.arrival(event.queue, event.time),
            EventKind::Departure => self.departure(event.queue, event.time),
            EventKind::Transfer => self.transfer(event.queue, event.time)?,
        }

        self.previous_event_time = event.time;
        self.processed += 1;
        Ok(Step::Processed(event))
    }

    fn arrival(&mut self, queue: usize, time: f64) {
        self.record_time(time);
        self.admit(queue, time);
        let interval = self.queues[queue].arrival();
        let at = time + self.sample(interval);
        self.timeline.insert(Event::new(EventKind::Arrival, queue, at));
    }

    fn departure(&mut self, queue: usize, time: f64) {
        self.record_time(time);
        self.release(queue, time);
    }

    fn transfer(&mut self, queue: usize, time: f64) -> Result<()> {
        let destination = self
            .topology
            .downstream_of(queue)
            .ok_or_else(|| Error::UnroutedTransfer(self.queues[queue].id().to_string()))?;
        self.record_time(time);
        self.release(queue, time);
        self.admit(destination, time);
        Ok(())
    }

    /// Adds the time since the previous event to every queue at its current level.
    fn record_time(&mut self, time: f64) {
        let delta = time - self.previous_event_time;
        for queue in &mut self.queues {
            let level = queue.occupancy();
            queue.accumulate(level, delta);
        }
    }

    /// Lets a client into `queue`, starting service if a server is free.
    fn admit(&mut self, queue: usize, time: f64) {
        let target = &mut self.queues[queue];
        if target.is_full() {
            target.record_lost();
            debug!(
                queue = target.id(),
                lost = target.lost(),
                time,
                "client lost at full queue"
            );
            return;
        }
        target.increment();
        if target.occupancy() <= target.servers() {
            self.schedule_completion(queue, time);
        }
    }

    /// Removes a served client; the next waiting client, if any, starts service.
    fn release(&mut self, queue: usize, time: f64) {
        let source = &mut self.queues[queue];
        source.decrement();
        if source.occupancy() >= source.servers() {
            self.schedule_completion(queue, time);
        }
    }

    fn schedule_completion(&mut self, queue: usize, time: f64) {
        let interval = self.queues[queue].service();
        let at = time + self.sample(interval);
        let kind = self.completion_kind(queue);
        self.timeline.insert(Event::new(kind, queue, at));
    }

    /// Service completions at a routed queue hand the client on; elsewhere it leaves.
    fn completion_kind(&self, queue: usize) -> EventKind {
        match self.topology.downstream_of(queue) {
            Some(_) => EventKind::Transfer,
            None => EventKind::Departure,
        }
    }

    fn sample(&mut self, interval: Interval) -> f64 {
        self.rng.between(interval.min, interval.max)
    }

    fn finish(&mut self) -> SimulationResult {
        SimulationResult {
            metadata: RunMetadata {
                seed: self.rng.seed(),
                duration: self.duration,
                elapsed: self.previous_event_time,
                processed_events: self.processed,
                pending_events: self.timeline.len(),
            },
            queues: self.queues.iter().map(QueueReport::from_queue).collect(),
            events: std::mem::take(&mut self.trace),
        }
    }
}

pub fn run_simulation(config: &SimConfig) -> Result<SimulationResult> {
    run_simulation_with_options(config, true)
}

pub fn run_simulation_summary(config: &SimConfig) -> Result<SimulationResult> {
    run_simulation_with_options(config, false)
}

pub fn run_simulation_with_options(
    config: &SimConfig,
    record_trace: bool,
) -> Result<SimulationResult> {
    let mut engine = SimulationEngine::new(config)?.with_trace(record_trace);
    engine.run()
}

pub fn validate_config(config: &SimConfig) -> Result<()> {
    prepare(config).map(|_| ())
}

/// Checks `config` and resolves queue ids to indices along with the topology.
fn prepare(config: &SimConfig) -> Result<(HashMap<String, usize>, Topology)> {
    if !config.duration.is_finite() || config.duration < 0.0 {
        return Err(Error::InvalidDuration(config.duration));
    }
    if config.queues.is_empty() {
        return Err(Error::EmptyQueues);
    }

    for queue in &config.queues {
        validate_queue(queue)?;
    }
    let index = queue_index(&config.queues)?;

    let topology = Topology::build(&config.topology, &index)?;

    if config.arrivals.is_empty() {
        return Err(Error::NoArrivals);
    }
    for arrival in &config.arrivals {
        let queue = index
            .get(arrival.queue_id.as_str())
            .map(|&idx| &config.queues[idx])
            .ok_or_else(|| Error::UnknownArrivalQueue(arrival.queue_id.to_string()))?;
        if !arrival.time.is_finite() || arrival.time < 0.0 {
            return Err(Error::InvalidArrivalTime {
                queue: arrival.queue_id.to_string(),
                time: arrival.time,
            });
        }
        // Only queues fed from outside sample their arrival range.
        if queue.max_arrival == 0.0 {
            return Err(Error::ZeroArrivalInterval(queue.id.to_string()));
        }
    }

    Ok((index, topology))
}

fn validate_queue(queue: &QueueConfig) -> Result<()> {
    let id = queue.id.to_string();
    if queue.capacity > MAX_CAPACITY {
        return Err(Error::CapacityTooLarge {
            queue: id,
            capacity: queue.capacity,
            max: MAX_CAPACITY,
        });
    }
    if queue.servers > queue.capacity {
        return Err(Error::ServersExceedCapacity {
            queue: id,
            servers: queue.servers,
            capacity: queue.capacity,
        });
    }

    let ranges = [
        ("arrival", queue.min_arrival, queue.max_arrival),
        ("service", queue.min_service, queue.max_service),
    ];
    for (range, min, max) in ranges {
        for value in [min, max] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidRate {
                    queue: id,
                    range,
                    value,
                });
            }
        }
        if min > max {
            return Err(Error::InvertedRange {
                queue: id,
                range,
                min,
                max,
            });
        }
    }

    Ok(())
}

fn queue_index(queues: &[QueueConfig]) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(queues.len());
    for (idx, queue) in queues.iter().enumerate() {
        if index.insert(queue.id.to_string(), idx).is_some() {
            return Err(Error::DuplicateQueueId(queue.id.to_string()));
        }
    }
    Ok(index)
}
