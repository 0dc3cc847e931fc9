pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod models;
pub mod output;
pub mod queue;
pub mod rng;
pub mod state;
pub mod topology;
