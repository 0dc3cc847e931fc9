use clap::error::ErrorKind;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "queue-sim")]
#[command(version, about = "Discrete-event simulator for networks of finite queues")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a simulation and print its report
    Run(RunArgs),
    /// Print the configuration after overrides and validation
    ShowConfig(ConfigArgs),
    /// Check a configuration file without running it
    Validate(ConfigArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ConfigArgs {
    /// Model file (.toml, .json, .yaml or .yml)
    #[arg(long)]
    pub config: PathBuf,
    /// Override the seed from the model file
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,
    /// Override the simulation duration from the model file
    #[arg(long)]
    pub duration: Option<f64>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long, value_enum, default_value_t = FormatArg::Human)]
    pub format: FormatArg,
    /// Leave the processed-event trace out of the report
    #[arg(long)]
    pub no_trace: bool,
}

#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

pub fn parse_args() -> Result<Args> {
    Args::try_parse().map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => Error::Cli(e.to_string()),
    })
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let contents = fs::read_to_string(path).map_err(|err| {
        Error::ConfigIo(format!(
            "failed to read config '{}': {}",
            path.display(),
            err
        ))
    })?;
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .unwrap_or("");

    parse_config(&contents, ext)
}

pub fn parse_config(contents: &str, format: &str) -> Result<SimConfig> {
    match format {
        "toml" => toml::from_str(contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse TOML: {}", err))),
        "json" => serde_json::from_str(contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse JSON: {}", err))),
        "yaml" | "yml" => serde_yaml::from_str(contents)
            .map_err(|err| Error::ConfigParse(format!("failed to parse YAML: {}", err))),
        "" => Err(Error::UnsupportedConfigFormat("unknown".to_string())),
        _ => Err(Error::UnsupportedConfigFormat(format.to_string())),
    }
}

/// Loads the model file named in `args` and applies the command-line overrides.
pub fn build_config(args: &ConfigArgs) -> Result<SimConfig> {
    let mut config = load_config(&args.config)?;
    apply_overrides(&mut config, args.seed, args.duration);
    Ok(config)
}

fn apply_overrides(config: &mut SimConfig, seed: Option<i64>, duration: Option<f64>) {
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(duration) = duration {
        config.duration = duration;
    }
}
