use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SimConfig {
    pub duration: f64,
    #[serde(default)]
    pub seed: Option<i64>,
    pub queues: Vec<QueueConfig>,
    #[serde(default)]
    pub topology: Vec<EdgeConfig>,
    #[serde(default)]
    pub arrivals: Vec<ArrivalConfig>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct QueueConfig {
    pub id: QueueId,
    pub servers: u32,
    pub capacity: u32,
    pub min_arrival: f64,
    pub max_arrival: f64,
    pub min_service: f64,
    pub max_service: f64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct EdgeConfig {
    pub from: QueueId,
    pub to: QueueId,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ArrivalConfig {
    pub queue_id: QueueId,
    pub time: f64,
}

/// Queue identifier. Model files write ids either as strings or as bare
/// integers; both forms end up as the same string.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(from = "RawQueueId", into = "String")]
pub struct QueueId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQueueId {
    Number(i64),
    Text(String),
}

impl From<RawQueueId> for QueueId {
    fn from(value: RawQueueId) -> Self {
        match value {
            RawQueueId::Number(number) => QueueId(number.to_string()),
            RawQueueId::Text(text) => QueueId(text),
        }
    }
}

impl From<QueueId> for String {
    fn from(value: QueueId) -> Self {
        value.0
    }
}

impl From<&str> for QueueId {
    fn from(value: &str) -> Self {
        QueueId(value.to_string())
    }
}

impl From<String> for QueueId {
    fn from(value: String) -> Self {
        QueueId(value)
    }
}

impl QueueId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
