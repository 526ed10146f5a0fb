use about_api::core::config::{Config, DatabaseSettings};
use about_api::core::routes::build_router;
use about_api::core::shutdown::{release_store, wait_for_signal};
use about_api::core::state::AppState;
use about_api::core::tracing_init::init_tracing;
use about_api::repository::build_repository;
use anyhow::{Context, Result};
use axum::serve;
use std::env;
use std::future::IntoFuture;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let config_path = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        PathBuf::from("config.toml")
    };

    let config = Config::from_file(&config_path)
        .context(format!("Failed to load configuration from '{}'", config_path.display()))?;

    init_tracing(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.num_threads)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    // Dropping the runtime on return aborts any request still in flight
    runtime.block_on(async_main(config, config_path))
}

async fn async_main(config: Config, config_path: PathBuf) -> Result<()> {
    info!(
        config_path = %config_path.display(),
        port = config.server.port,
        num_threads = config.server.num_threads,
        log_level = %config.logging.level,
        log_format = %config.logging.format,
        repository = %config.database.kind,
        "Service starting"
    );

    let settings = DatabaseSettings::from_env();
    let users = build_repository(&config.database, &settings)
        .context("Failed to create user repository")?;

    let port = config.server.port;
    let state = Arc::new(AppState::new(config, Arc::clone(&users)));

    let app = build_router(state).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    );

    let addr = format!("0.0.0.0:{}", port);
    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind TCP listener to {}", addr))?;

    info!(address = %addr, "HTTP server listening");

    tokio::select! {
        result = serve(listener, app).into_future() => {
            result.context("HTTP server error")?;
        }
        signal = wait_for_signal() => {
            let signal = signal.context("Failed to install signal handlers")?;
            release_store(users.as_ref(), signal)
                .await
                .context("Failed to close database connection")?;
        }
    }

    info!("Shutdown complete");

    Ok(())
}
