//! Build Interface - Development Tools

use std::path::{Path, PathBuf};

use build_hci::settings::BuildMenuSettings;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "build-tools")]
#[command(about = "Development tools for the build interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario files
    Validate {
        /// Scenario file or directory of scenarios
        #[arg(default_value = "assets/scenarios")]
        path: PathBuf,
    },
    /// Show what the build interface offers in a scenario
    Inspect {
        /// Scenario file
        scenario: PathBuf,
        /// Menu settings file (favorites and toggles)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Offer obsolete designs
        #[arg(long)]
        show_redundant: bool,
        /// Offer favorites only
        #[arg(long)]
        favorites_only: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating scenarios in: {}", path.display());
            match build_tools::validate::validate_path(&path) {
                Ok(summary) if summary.is_ok() => {
                    tracing::info!("Validation passed ({} files)", summary.passed.len());
                }
                Ok(summary) => {
                    tracing::error!(
                        "Validation failed: {} of {} files",
                        summary.failed.len(),
                        summary.failed.len() + summary.passed.len()
                    );
                    std::process::exit(1);
                }
                Err(e) => {
                    tracing::error!("Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Inspect {
            scenario,
            settings,
            show_redundant,
            favorites_only,
            json,
        } => {
            let world = match build_tools::scenario::load_world(&scenario) {
                Ok(world) => world,
                Err(e) => {
                    tracing::error!("Cannot load scenario: {e}");
                    std::process::exit(1);
                }
            };

            let mut settings = load_settings(settings.as_deref());
            settings.show_redundant_designs |= show_redundant;
            settings.show_favorites_only |= favorites_only;

            let report = build_tools::report::inspect(world, settings);
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        tracing::error!("Cannot serialize report: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print!("{report}");
            }
        }
    }
}

fn load_settings(path: Option<&Path>) -> BuildMenuSettings {
    let Some(path) = path else {
        return BuildMenuSettings::default();
    };
    match BuildMenuSettings::load(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Cannot load settings: {e}");
            std::process::exit(1);
        }
    }
}
