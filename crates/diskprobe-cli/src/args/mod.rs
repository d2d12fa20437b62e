// NOTE: Command Organization Rationale
//
// Why namespaced subcommands (not one binary per probe)?
// - The original plugin family shipped seven binaries; one `diskprobe`
//   binary with `check <probe>` / `metrics <probe>` keeps the install
//   surface small without changing any probe's flag set
// - Namespaces separate verdict-line probes (check) from Graphite
//   emitters (metrics), which have different output contracts

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "diskprobe")]
#[command(about = "Disk health monitoring probes in the Sensu plugin style", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print per-device detail to stderr while keeping stdout to one line
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
