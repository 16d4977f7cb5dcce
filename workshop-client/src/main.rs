//! Command-line client for the workshop API.
//!
//! # Environment Variables
//!
//! - `API_BASE_URL`: API location (default: http://localhost:3001)
//! - `RUST_LOG`: tracing filter (default: "warn")

use clap::{Parser, Subcommand};
use workshop_client::{ClientConfig, Workshop};

#[derive(Debug, Parser)]
#[command(name = "workshop-client", version, about = "Talk to the workshop API")]
struct Cli {
    #[command(flatten)]
    config: ClientConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the backend is up
    Health,
    /// Add 10 to a number
    Add {
        /// The number, as typed
        number: String,
    },
    /// Rewrite text in a given style with Gemini
    Style {
        /// Text to transform
        #[arg(long)]
        text: String,
        /// Style to apply, e.g. "say it like a pirate"
        #[arg(long)]
        style: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(api = %cli.config.api_base_url, "Using workshop API");

    let workshop = Workshop::new(&cli.config);

    let output = match &cli.command {
        Command::Health => workshop.check_health().await,
        Command::Add { number } => workshop.add_ten(number).await,
        Command::Style { text, style } => workshop.style_text(text, style).await,
    };

    match output {
        Some(line) => {
            println!("{}", line);
            Ok(())
        }
        None => anyhow::bail!("Nothing to send: fill in every input first"),
    }
}
