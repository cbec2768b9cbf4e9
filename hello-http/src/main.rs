use hello_http::{shutdown_signal, AppState};
use shared::config::Config;
use shared::InstanceId;
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before the filter is built so RUST_LOG may come from it
    let dotenv = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(hello_http::env_filter())
        .init();

    match dotenv {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal startup error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> shared::Result<()> {
    let config = Config::from_env()?;

    let instance_id = InstanceId::generate();
    let state = AppState::new(instance_id);

    let listener = hello_http::bind(config.listen_addr()).await?;

    info!(
        instance_id = %instance_id,
        "Application with Instance ID {} started", instance_id
    );

    hello_http::serve(listener, state, shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}
