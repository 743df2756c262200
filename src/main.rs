use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use folio::config::AppConfig;

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the portfolio site server
    Serve {
        #[clap(short, long, default_value = "3000")]
        port: u16,
        #[clap(short, long, default_value = "folio.yaml")]
        config: String,
        /// Run against the in-memory demo store instead of the hosted one
        #[clap(long)]
        offline: bool,
        #[clap(long)]
        cors_origin: Option<String>,
    },
    /// Write a starter configuration file
    Init {
        #[clap(short, long, default_value = "folio.yaml")]
        config: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.log_level);

    match args.command {
        Commands::Serve {
            port,
            config,
            offline,
            cors_origin,
        } => {
            let mut config = AppConfig::load(&config)?;
            if offline {
                config.offline_mode = true;
            }
            if cors_origin.is_some() {
                config.cors_origin = cors_origin;
            }
            info!("Starting server on port {}", port);
            folio::server::start_server(port, config).await?;
        }
        Commands::Init { config } => {
            info!("Writing starter configuration: {}", config);
            let starter = serde_yaml::to_string(&AppConfig::default())?;
            std::fs::write(&config, starter)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &Option<String>) {
    let log_level = match log_level
        .as_ref()
        .unwrap_or(&"info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("handlebars=off,{}", log_level)))
        .init();
}
