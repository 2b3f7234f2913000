//! GameZone Accounts server
//!
//! # Usage
//!
//! ```bash
//! cargo run -- serve
//! cargo run -- serve --port 9000 --workers 4 --seed
//! cargo run -- serve --seed-dir ./seed
//! cargo run -- export --seed > members.csv
//! ```
//!
//! Settings fall back to `GAMEZONE_HOST`, `GAMEZONE_PORT`, `GAMEZONE_WORKERS`
//! and `GAMEZONE_SEED_DIR`, read from the environment or a `.env` file. Logs
//! go to stderr and are filtered with `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (address in use, unreadable seed file, etc.)

use anyhow::{Context, Result};
use gamezone_accounts::cli::{self, Command, SeedArgs, ServeArgs};
use gamezone_accounts::core::{Services, Stores};
use gamezone_accounts::{build_app, seed, write_members_csv, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "gamezone_accounts=info,tower_http=info";

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = cli::parse_args();

    match args.command {
        Command::Serve(serve_args) => {
            // Use multi-threaded runtime with configured number of worker threads
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(serve_args.worker_threads())
                .enable_all()
                .build()
                .context("Failed to create tokio runtime")?;
            runtime.block_on(serve(serve_args))
        }
        Command::Export(seed_args) => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to create tokio runtime")?;
            let services = Services::new(&Stores::in_memory());
            runtime.block_on(load(&services, &seed_args))?;

            let members = services.members.find_all();
            let mut output = std::io::stdout();
            write_members_csv(&members, &mut output).map_err(anyhow::Error::msg)
        }
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let state = AppState::in_memory();
    load(&state.services, &args.seed).await?;

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("GameZone Accounts listening on {}", listener.local_addr()?);

    axum::serve(listener, build_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn load(services: &Services, args: &SeedArgs) -> Result<()> {
    if let Some(dir) = &args.seed_dir {
        seed::seed_from_dir(services, dir).await?;
    }
    if args.seed {
        seed::seed_samples(services);
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
