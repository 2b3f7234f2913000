// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, Command, SeedArgs, ServeArgs};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// Values not given on the command line fall back to the `GAMEZONE_*`
/// environment variables. On invalid arguments or `--help`, clap prints a
/// message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
