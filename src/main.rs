//! omikuji HTTP server entry point

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use omikuji::cli::Cli;
use omikuji::core::config::LogFormat;
use omikuji::{build_router, AppState};

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "omikuji=info".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config is needed before logging is up, so report failures directly
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    init_logging(config.logging.format);

    tracing::info!("Starting omikuji service");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    config.log_config();

    let addr = config.bind_addr();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - test page at http://{}/index", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
