//! Scintilla command-line interface.
//!
//! Run jobs from TOML configuration files:
//! ```sh
//! scintilla-cli run job.toml
//! scintilla-cli validate job.toml
//! scintilla-cli materials
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use scintilla_cli::{config, runner};
use scintilla_materials::MaterialCatalog;

#[derive(Parser)]
#[command(name = "scintilla-cli")]
#[command(about = "Scintilla: parametric detector model and VUV photon source")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the geometry and sample primaries from a TOML job file.
    Run {
        /// Path to the job configuration file.
        config: PathBuf,
        /// Output directory (overrides config file setting).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Number of events to sample (overrides config file setting).
        #[arg(short, long)]
        events: Option<usize>,
    },
    /// Validate a configuration file without running the job.
    Validate {
        /// Path to the job configuration file.
        config: PathBuf,
    },
    /// Display information about available materials.
    Materials,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, output, events } => {
            println!("Scintilla");
            println!("=========");
            let mut job = config::load_config(&config)?;
            println!("Configuration: {}", config.display());

            if let Some(events) = events {
                job.source.events = events;
            }

            let result = runner::run_job(&job)?;

            let out_dir = output.unwrap_or_else(|| PathBuf::from(&job.output.directory));

            if job.output.save_vertices {
                let csv_path = out_dir.join("vertices.csv");
                runner::write_vertices_csv(&result.vertices, &csv_path, &job)?;
            }

            if job.output.save_json {
                let json_path = out_dir.join("vertices.json");
                runner::write_vertices_json(&result.vertices, &json_path)?;
            }

            println!("Job complete.");
            Ok(())
        }
        Commands::Validate { config } => {
            let _job = config::load_config(&config)?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Materials => {
            let mut catalog = MaterialCatalog::new();
            println!("Available materials:");
            println!();
            for name in MaterialCatalog::available() {
                match catalog.find_or_build(name) {
                    Ok(material) => println!("  {}", material),
                    Err(err) => println!("  {name} — {err}"),
                }
            }
            Ok(())
        }
    }
}
