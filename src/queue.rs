use crate::models::QueueConfig;

/// Closed interval `[min, max]` sampled for inter-arrival or service times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// State of a single finite-capacity, multi-server queue.
///
/// Occupancy counts every client present (waiting and in service) and never
/// leaves `0..=capacity`. `statistics[level]` holds the simulated time spent
/// with exactly `level` clients present.
#[derive(Clone, Debug)]
pub struct Queue {
    id: String,
    servers: u32,
    capacity: u32,
    arrival: Interval,
    service: Interval,
    occupancy: u32,
    lost: u64,
    statistics: Vec<f64>,
}

impl Queue {
    pub fn new(
        id: impl Into<String>,
        servers: u32,
        capacity: u32,
        arrival: Interval,
        service: Interval,
    ) -> Self {
        Self {
            id: id.into(),
            servers,
            capacity,
            arrival,
            service,
            occupancy: 0,
            lost: 0,
            statistics: vec![0.0; capacity as usize + 1],
        }
    }

    pub fn from_config(config: &QueueConfig) -> Self {
        Self::new(
            config.id.as_str(),
            config.servers,
            config.capacity,
            Interval::new(config.min_arrival, config.max_arrival),
            Interval::new(config.min_service, config.max_service),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn servers(&self) -> u32 {
        self.servers
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn arrival(&self) -> Interval {
        self.arrival
    }

    pub fn service(&self) -> Interval {
        self.service
    }

    pub fn occupancy(&self) -> u32 {
        self.occupancy
    }

    pub fn lost(&self) -> u64 {
        self.lost
    }

    pub fn statistics(&self) -> &[f64] {
        &self.statistics
    }

    pub fn is_full(&self) -> bool {
        self.occupancy >= self.capacity
    }

    pub fn increment(&mut self) {
        if self.occupancy < self.capacity {
            self.occupancy += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.occupancy > 0 {
            self.occupancy -= 1;
        }
    }

    pub fn record_lost(&mut self) {
        self.lost += 1;
    }

    pub fn accumulate(&mut self, level: u32, delta: f64) {
        if let Some(slot) = self.statistics.get_mut(level as usize) {
            *slot += delta;
        }
    }
}
