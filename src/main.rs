use anyhow::Result;
use clap::{Parser, Subcommand};

/// sipandslay - Luxury mobile bartending site
#[derive(Parser)]
#[command(name = "sipandslay")]
#[command(about = "Marketing site and quote-request relay for Sip & Slay", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Report which email secrets are configured, without their values
    EnvCheck,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = sipandslay::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        Commands::Serve { host, port } => {
            sipandslay::observability::init_observability(
                "sipandslay",
                env!("CARGO_PKG_VERSION"),
                &config.observability.log_level,
            )?;

            sipandslay::cli::server::serve(config, host, port).await
        }
        Commands::EnvCheck => sipandslay::cli::env_check::print(&config),
    }
}
