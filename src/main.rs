use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use storeplan::commands::{
    remember_recent_file, run_analyze, run_init_config, run_new, run_optimize,
};
use storeplan::{init_logging, Config, BUILD_DATE, VERSION};

/// Storeplan - retail store floor planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an empty layout file
    New {
        /// Layout file to create (.storeplan.json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Store name
        #[arg(long, default_value = "Untitled Store")]
        name: String,

        /// Store width; defaults to layout.default_store_width
        #[arg(long)]
        width: Option<f64>,

        /// Store height; defaults to layout.default_store_height
        #[arg(long)]
        height: Option<f64>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Recompute overlaps and metrics for a layout file and print them as JSON
    Analyze {
        /// Layout file (.storeplan.json)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Auto-arrange the zones of a layout, or the shelves of one zone
    Optimize {
        /// Layout file (.storeplan.json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pack the shelves of this zone instead of the zones
        #[arg(long, value_name = "ID")]
        zone: Option<String>,

        /// Write the result here instead of over FILE
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Write a default config file
    InitConfig {
        /// Destination; defaults to the platform config directory
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Loads the config and returns it with the path it belongs to, if any.
fn load_config(path: Option<&PathBuf>) -> Result<(Config, Option<PathBuf>)> {
    match path {
        Some(p) => {
            let config = Config::load_from_file(p)
                .with_context(|| format!("Failed to load config {}", p.display()))?;
            Ok((config, Some(p.clone())))
        }
        None => match Config::default_config_path() {
            Some(p) => {
                let config = Config::load_or_default(&p)
                    .with_context(|| format!("Failed to load config {}", p.display()))?;
                Ok((config, Some(p)))
            }
            None => Ok((Config::default(), None)),
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::InitConfig { path, force } = &cli.command {
        let written = run_init_config(path.as_deref(), *force)?;
        println!("Wrote {}", written.display());
        return Ok(());
    }

    let (mut config, config_path) = load_config(cli.config.as_ref())?;
    init_logging(&config.logging)?;
    tracing::debug!(version = VERSION, build_date = BUILD_DATE, "starting storeplan");

    let opened = match cli.command {
        Command::New {
            file,
            name,
            width,
            height,
            force,
        } => {
            let snapshot = run_new(&file, &name, width, height, force, &config)?;
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            file
        }
        Command::Analyze { file } => {
            let report = run_analyze(&file, &config)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            file
        }
        Command::Optimize { file, zone, output } => {
            let summary = run_optimize(&file, zone.as_deref(), output.as_deref(), &config)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
            summary.output
        }
        Command::InitConfig { .. } => return Ok(()),
    };

    remember_recent_file(&mut config, config_path.as_deref(), &opened);

    Ok(())
}
