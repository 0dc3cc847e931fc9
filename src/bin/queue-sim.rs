use queue_sim::config::{self, Command, FormatArg};
use queue_sim::engine::{self, SimulationEngine};
use queue_sim::error::Result;
use queue_sim::models::SimConfig;
use queue_sim::output::{Formatter, HumanFormatter, JsonFormatter, SummaryFormatter};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = config::parse_args()?;
    match args.command {
        Command::Run(run_args) => {
            let config = config::build_config(&run_args.config)?;
            let mut engine = SimulationEngine::new(&config)?.with_trace(!run_args.no_trace);
            let result = engine.run()?;

            let formatter = formatter_for(&run_args.format);
            print!("{}", formatter.write(&result));
        }
        Command::ShowConfig(config_args) => {
            let config = config::build_config(&config_args)?;
            engine::validate_config(&config)?;
            print!("{}", describe(&config));
        }
        Command::Validate(config_args) => {
            let config = config::build_config(&config_args)?;
            engine::validate_config(&config)?;
            println!("ok");
        }
    }

    Ok(())
}

fn formatter_for(format: &FormatArg) -> Box<dyn Formatter> {
    match format {
        FormatArg::Human => Box::new(HumanFormatter),
        FormatArg::Summary => Box::new(SummaryFormatter),
        FormatArg::Json => Box::new(JsonFormatter),
    }
}

fn describe(config: &SimConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("Duration: {}\n", config.duration));
    match config.seed {
        Some(seed) => out.push_str(&format!("Seed: {}\n", seed)),
        None => out.push_str("Seed: random\n"),
    }
    out.push_str("Queues:\n");
    for queue in &config.queues {
        out.push_str(&format!(
            "- {} (servers: {}, capacity: {}, arrival: {}..{}, service: {}..{})\n",
            queue.id,
            queue.servers,
            queue.capacity,
            queue.min_arrival,
            queue.max_arrival,
            queue.min_service,
            queue.max_service
        ));
    }
    out.push_str("Topology:\n");
    for edge in &config.topology {
        out.push_str(&format!("- {} -> {}\n", edge.from, edge.to));
    }
    out.push_str("Arrivals:\n");
    for arrival in &config.arrivals {
        out.push_str(&format!("- {} at {}\n", arrival.queue_id, arrival.time));
    }
    out
}
