//! Endpoint host binary.
//!
//! # Architecture Overview
//!
//! ```text
//!   host.toml ──▶ config ──▶ BootstrapContext ──┐
//!                                               ▼
//!   specifier ──▶ capability probe ──▶ bootstrap orchestrator
//!                                       │ logging → init → profiles
//!                                       │ → validation → roles
//!                                       ▼
//!                                   Configure ──▶ bus factory ──▶ bus
//!                                                                  │
//!   SIGINT/SIGTERM ──▶ lifecycle::Shutdown ──────────────▶ stop ◀──┘
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use endpoint_host::bootstrap::{BootstrapContext, BootstrapOrchestrator};
use endpoint_host::bus::InProcessBusFactory;
use endpoint_host::config::{load_config, HostConfig};
use endpoint_host::lifecycle::{shutdown_on_signal, ConfiguredSpecifier, EndpointHost, Shutdown};
use endpoint_host::profiles::ProfileCatalog;
use endpoint_host::types::TypeRegistry;

#[derive(Parser)]
#[command(name = "endpoint-host")]
#[command(about = "Hosts a message endpoint", long_about = None)]
struct Cli {
    /// Host configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap and run the endpoint until interrupted
    Run {
        /// Profiles to activate
        profiles: Vec<String>,
    },
    /// Bootstrap without starting the bus
    Install {
        /// Profiles to activate
        profiles: Vec<String>,

        /// Print the resolved configuration as JSON
        #[arg(long)]
        print: bool,
    },
}

fn build_host(config: &HostConfig, args: Vec<String>) -> EndpointHost {
    let specifier = ConfiguredSpecifier::from_config(config);

    let mut registry = TypeRegistry::new();
    registry.register_specifier::<ConfiguredSpecifier>(false);

    let version = config
        .endpoint
        .version
        .clone()
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    let context = BootstrapContext::for_specifier(&specifier, version, registry.build())
        .with_sections(config.sections.clone())
        .with_bus_defaults(config.bus.clone());

    let orchestrator =
        BootstrapOrchestrator::new().with_profiles(ProfileCatalog::builtin(&config.logging));

    EndpointHost::new(Box::new(specifier), args, context, Box::new(InProcessBusFactory))
        .with_orchestrator(orchestrator)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => HostConfig::default(),
    };

    match cli.command.unwrap_or(Commands::Run { profiles: Vec::new() }) {
        Commands::Run { profiles } => {
            let mut host = build_host(&config, profiles);
            let shutdown = Shutdown::new();
            let mut stop_rx = shutdown.subscribe();
            host.start()?;

            tokio::spawn(async move {
                if let Err(e) = shutdown_on_signal(&shutdown).await {
                    tracing::error!(error = %e, "Failed to listen for shutdown signals");
                }
            });

            let reason = stop_rx.recv().await?;
            tracing::info!(reason = ?reason, "Stopping endpoint");
            host.stop()?;
        }
        Commands::Install { profiles, print } => {
            let host = build_host(&config, profiles);
            let resolved = host.install()?;
            if print {
                println!("{}", serde_json::to_string_pretty(&resolved)?);
            }
        }
    }

    Ok(())
}
