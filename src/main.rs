use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use users_api::config::{self, Config};
use users_api::server;

/// REST service for user records kept in memory.
#[derive(Parser)]
#[command(name = "users-api", version, about)]
struct Cli {
    /// Bind host (overrides `HOST`)
    #[arg(long)]
    host: Option<String>,

    /// First listening port (overrides `PORT`)
    #[arg(short, long)]
    port: Option<u16>,

    /// Number of listeners on successive ports, sharing one store (overrides `WORKERS`)
    #[arg(short, long)]
    workers: Option<usize>,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
            if self.port.is_none() && std::env::var("PORT").is_err() {
                config.port = config::default_port(workers);
            }
        }
        if let Some(port) = self.port {
            config.port = port;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
