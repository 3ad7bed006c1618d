//! CabinetKit CLI
//!
//! Places cabinets from JSON requests, lays out runs, and manages the
//! configuration file.

use anyhow::{bail, Context, Result};
use cabinetkit::report::{describe_run, run_requests, RequestFile};
use cabinetkit::{init_logging, ApplianceGap, CabinetRun, Config, BUILD_DATE, VERSION};
use cabinetkit_core::units::parse_length;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "cabinetkit")]
#[command(about = "Parametric kitchen cabinet geometry", long_about = None)]
struct Cli {
    /// Configuration file (.toml or .json); defaults to the platform config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place the cabinets in one or more JSON request files
    Build {
        /// Request files, each holding one request or an array
        requests: Vec<PathBuf>,
        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Auto-fill a run with standard-width cabinets
    Layout {
        /// Run length in the configured units, e.g. `120`, `"120 1/2"` or `"10' 6"`
        #[arg(short, long)]
        length: String,
        /// Appliance gap as `position:width[:label]`
        #[arg(short, long)]
        gap: Vec<String>,
    },
    /// Show or create the configuration file
    Config {
        /// Write the default configuration if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    info!("cabinetkit {} (built {})", VERSION, BUILD_DATE);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };

    match cli.command {
        Commands::Build { requests, output } => {
            let config = Config::load_or_default(&config_path)?;
            build(&config, &requests, output.as_deref())?;
        }
        Commands::Layout { length, gap } => {
            let config = Config::load_or_default(&config_path)?;
            layout(&config, &length, &gap)?;
        }
        Commands::Config { init } => {
            if init && !config_path.exists() {
                Config::default().save_to_file(&config_path)?;
                println!("Wrote {}", config_path.display());
            } else {
                let config = Config::load_or_default(&config_path)?;
                println!("# {}", config_path.display());
                println!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn build(config: &Config, paths: &[PathBuf], output: Option<&Path>) -> Result<()> {
    if paths.is_empty() {
        bail!("No request files given");
    }

    let mut requests = Vec::new();
    for path in paths {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: RequestFile = serde_json::from_str(&json)
            .with_context(|| format!("Invalid request file {}", path.display()))?;
        requests.extend(file.into_requests());
    }

    let report = run_requests(config, &requests)?;
    let json = serde_json::to_string_pretty(&report)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Wrote report to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn parse_gap(raw: &str, config: &Config) -> Result<ApplianceGap> {
    let mut parts = raw.splitn(3, ':');
    let (Some(position), Some(width)) = (parts.next(), parts.next()) else {
        bail!("Gap '{}' must look like position:width[:label]", raw);
    };
    let label = parts.next().unwrap_or("Appliance");
    let position = parse_length(position, config.units).map_err(anyhow::Error::msg)?;
    let width = parse_length(width, config.units).map_err(anyhow::Error::msg)?;
    Ok(ApplianceGap::new(position, width, label))
}

fn layout(config: &Config, length: &str, gaps: &[String]) -> Result<()> {
    let total = parse_length(length, config.units).map_err(anyhow::Error::msg)?;
    let gaps = gaps
        .iter()
        .map(|g| parse_gap(g, config))
        .collect::<Result<Vec<_>>>()?;

    let mut run = CabinetRun::new("Run 1", total, gaps)?;
    run.auto_layout(&config.run_options(), &config.dimensions)?;

    for line in describe_run(&run, config.units) {
        println!("{}", line);
    }
    if run.unallocated() > 1e-6 {
        println!("unallocated {:.3}", run.unallocated());
    }
    Ok(())
}
