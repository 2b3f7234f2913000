use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// GameZone member account service
#[derive(Parser, Debug)]
#[command(name = "gamezone-accounts")]
#[command(about = "GameZone member account and ledger service", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP API
    Serve(ServeArgs),

    /// Seed the stores, then write the member ledger as CSV to stdout
    Export(SeedArgs),
}

/// Where initial data comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SeedArgs {
    /// Load the built-in sample catalog, members and ledger
    #[arg(long = "seed")]
    pub seed: bool,

    /// Directory holding members.csv, games.csv, recharges.csv, transactions.csv
    #[arg(long = "seed-dir", value_name = "DIR", env = "GAMEZONE_SEED_DIR")]
    pub seed_dir: Option<PathBuf>,
}

/// Options of the `serve` subcommand
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, value_name = "HOST", env = "GAMEZONE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(long, value_name = "PORT", env = "GAMEZONE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Runtime worker threads
    #[arg(
        long,
        value_name = "COUNT",
        env = "GAMEZONE_WORKERS",
        help = "Runtime worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    #[command(flatten)]
    pub seed: SeedArgs,
}

impl ServeArgs {
    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Number of runtime worker threads
    ///
    /// Falls back to the CPU count when unset. Zero is rejected with a
    /// warning and also falls back to the CPU count.
    pub fn worker_threads(&self) -> usize {
        match self.workers {
            Some(0) => {
                tracing::warn!("workers must be > 0, using default {}", num_cpus::get());
                num_cpus::get()
            }
            Some(n) => n,
            None => num_cpus::get(),
        }
    }
}
