use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("queues must not be empty")]
    EmptyQueues,
    #[error("duplicate queue id '{0}'")]
    DuplicateQueueId(String),
    #[error("queue '{queue}' has capacity {capacity}, above the limit of {max}")]
    CapacityTooLarge { queue: String, capacity: u32, max: u32 },
    #[error("queue '{queue}' has {servers} servers but capacity {capacity}")]
    ServersExceedCapacity {
        queue: String,
        servers: u32,
        capacity: u32,
    },
    #[error("queue '{queue}' has invalid {range} range [{min}, {max}]: min must not exceed max")]
    InvertedRange {
        queue: String,
        range: &'static str,
        min: f64,
        max: f64,
    },
    #[error("queue '{queue}' has invalid {range} bound {value}: must be finite and >= 0")]
    InvalidRate {
        queue: String,
        range: &'static str,
        value: f64,
    },
    #[error("queue '{0}' has a zero arrival range; arrivals would never advance the clock")]
    ZeroArrivalInterval(String),
    #[error("topology edge references unknown queue '{0}'")]
    UnknownTopologyQueue(String),
    #[error("queue '{0}' has more than one downstream edge")]
    DuplicateRoute(String),
    #[error("arrival references unknown queue '{0}'")]
    UnknownArrivalQueue(String),
    #[error("arrival at queue '{queue}' has invalid time {time}: must be finite and >= 0")]
    InvalidArrivalTime { queue: String, time: f64 },
    #[error("arrivals must not be empty")]
    NoArrivals,
    #[error("duration must be finite and >= 0 (got {0})")]
    InvalidDuration(f64),
    #[error("event timeline is empty while the run is still active")]
    EmptyTimeline,
    #[error("transfer event at queue '{0}' which has no downstream queue")]
    UnroutedTransfer(String),
    #[error("{0}")]
    ConfigIo(String),
    #[error("{0}")]
    ConfigParse(String),
    #[error("unsupported config format '{0}'")]
    UnsupportedConfigFormat(String),
    #[error("{0}")]
    Cli(String),
}

pub type Result<T> = std::result::Result<T, Error>;
