//! Vultr Client Generator
//!
//! Generates the typed Vultr API client from the HTML API reference.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vultr_gen::config::{DEFAULT_CLIENT_NAME, DEFAULT_URL, GeneratorConfig};
use vultr_gen::errors::GeneratorError;
use vultr_gen::output::write_output;

/// Vultr client generator - turns the HTML API reference into a typed Rust client
#[derive(Parser, Debug)]
#[command(name = "vultr-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// URL of the API reference page
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Read the reference page from a saved HTML file instead of fetching it
    #[arg(long, value_name = "FILE", conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Output file for the generated client
    #[arg(short, long, default_value = "api.generated.rs")]
    output: PathBuf,

    /// Name of the generated client struct
    #[arg(long, default_value = DEFAULT_CLIENT_NAME)]
    client_name: String,

    /// Fail on API key cells other than "Yes" or "No"
    #[arg(long)]
    strict_auth: bool,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Logs go to stderr so `--dry-run` output stays clean on stdout.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,vultr_gen=info".to_string(),
            2 => "info,vultr_gen=debug".to_string(),
            _ => "debug,vultr_gen=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 3)
                .with_line_number(verbose >= 3)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GeneratorConfig::new()
        .url(cli.url)
        .client_name(cli.client_name)
        .strict_auth(cli.strict_auth);

    let code = match &cli.input {
        Some(path) => {
            info!(path = %path.display(), "Reading API reference from file");
            let html = fs::read_to_string(path).map_err(|e| {
                GeneratorError::ConfigError(format!("cannot read '{}': {e}", path.display()))
            })?;
            vultr_gen::generate_from_html(&html, &config)?
        }
        None => vultr_gen::generate(&config).await?,
    };

    write_output(&cli.output, &code, cli.dry_run)
}
