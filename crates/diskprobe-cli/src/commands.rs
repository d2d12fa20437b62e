use crate::args::{CheckCommand, Cli, Commands, MetricsCommand};
use crate::handlers;
use anyhow::Result;
use diskprobe_types::Severity;

/// Dispatch a parsed command line and return the severity for the process
/// exit code.
pub fn run(cli: Cli) -> Result<Severity> {
    let verbose = cli.verbose;

    match cli.command {
        Commands::Check { command } => match command {
            CheckCommand::SmartHealth { smart } => {
                let config = smart.to_config(
                    diskprobe_smart::DEFAULT_SHORT_TEST_INTERVAL,
                    diskprobe_smart::DEFAULT_LONG_TEST_INTERVAL,
                );
                handlers::smart::handle_health(&config, verbose)
            }
            CheckCommand::SmartStatus { smart } => {
                let config = smart.to_config(
                    diskprobe_smart::DEFAULT_SHORT_TEST_INTERVAL,
                    diskprobe_smart::DEFAULT_LONG_TEST_INTERVAL,
                );
                handlers::smart::handle_status(&config, verbose)
            }
            CheckCommand::SmartTests {
                smart,
                short_test_interval,
                long_test_interval,
            } => {
                let config = smart.to_config(short_test_interval, long_test_interval);
                handlers::smart::handle_tests(&config, verbose)
            }
            CheckCommand::DiskUsage {
                warning,
                critical,
                filter,
            } => handlers::disk_usage::handle(warning, critical, &filter.to_filter(), verbose),
            CheckCommand::FstabMounts { fstab_path } => {
                handlers::fstab_mounts::handle(&fstab_path)
            }
        },

        Commands::Metrics { command } => match command {
            MetricsCommand::DiskUsage { scheme, filter } => {
                handlers::metrics::handle_usage(&scheme, &filter.to_filter())
            }
            MetricsCommand::DiskCapacity { scheme, filter } => {
                handlers::metrics::handle_capacity(&scheme, &filter.to_filter())
            }
        },
    }
}
