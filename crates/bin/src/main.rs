use clap::Parser;
use serde_json::{Map, Value as Json};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};
use output::OutputFormat;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("layerstack=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format: OutputFormat = cli.format.into();
    let command = cli.command.unwrap_or(Commands::All);
    tracing::debug!(?command, ?format, "Running demonstration");

    let sections = match command {
        Commands::Records => vec![commands::records::run(format)?],
        Commands::Layers => vec![commands::layers::run(format)?],
        Commands::All => vec![
            commands::records::run(format)?,
            commands::layers::run(format)?,
        ],
    };

    if format == OutputFormat::Json {
        let document: Map<String, Json> = sections
            .into_iter()
            .map(|(section, json)| (section.to_string(), json))
            .collect();
        println!("{}", serde_json::to_string_pretty(&Json::Object(document))?);
    }

    Ok(())
}
