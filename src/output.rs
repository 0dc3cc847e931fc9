use crate::state::{percent_of, QueueReport, SimulationResult};

pub trait Formatter {
    fn write(&self, result: &SimulationResult) -> String;
}

/// Metadata, the numbered event trace and the per-queue tables.
pub struct HumanFormatter;

/// Metadata and per-queue tables only.
pub struct SummaryFormatter;

pub struct JsonFormatter;

impl Formatter for HumanFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = String::new();
        write_metadata(&mut out, result);
        out.push_str("Events:\n");
        for record in &result.events {
            out.push_str(&format!(
                "{} - {} {} {:.4}\n",
                record.index, record.queue_id, record.kind, record.time
            ));
        }
        write_queues(&mut out, result);
        out
    }
}

impl Formatter for SummaryFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        let mut out = String::new();
        write_metadata(&mut out, result);
        write_queues(&mut out, result);
        out
    }
}

impl Formatter for JsonFormatter {
    fn write(&self, result: &SimulationResult) -> String {
        match serde_json::to_string_pretty(result) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(err) => format!("{{\"error\": \"{}\"}}\n", err),
        }
    }
}

fn write_metadata(out: &mut String, result: &SimulationResult) {
    let meta = &result.metadata;
    out.push_str("Metadata:\n");
    out.push_str(&format!("seed: {}\n", meta.seed));
    out.push_str(&format!("duration: {}\n", meta.duration));
    out.push_str(&format!("elapsed: {:.4}\n", meta.elapsed));
    out.push_str(&format!("processed_events: {}\n", meta.processed_events));
    out.push_str(&format!("pending_events: {}\n", meta.pending_events));
}

fn write_queues(out: &mut String, result: &SimulationResult) {
    out.push_str("Queues:\n");
    for queue in &result.queues {
        write_queue(out, queue, result.metadata.elapsed);
    }
}

fn write_queue(out: &mut String, queue: &QueueReport, elapsed: f64) {
    out.push_str(&format!(
        "Queue {} (servers: {}, capacity: {})\n",
        queue.id, queue.servers, queue.capacity
    ));
    for entry in &queue.statistics {
        out.push_str(&format!(
            "  {}: {:.4} ({:.2}%)\n",
            entry.level,
            entry.time,
            percent_of(entry.time, elapsed)
        ));
    }
    out.push_str(&format!("  clients lost: {}\n", queue.lost));
}
