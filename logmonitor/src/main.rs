use clap::Parser;
use logmonitor_core::cli::{MonitorArgs, print_error, run_monitor};
use logmonitor_core::logging::{LogFormat, default_log_format, init_logging};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "logmonitor",
    version,
    about = "Logmonitor: server health log analyzer",
    long_about = "Reads a server health log and reports timeout recoveries, \
                  overload periods and subnet-wide faults."
)]
struct Cli {
    #[command(flatten)]
    monitor: MonitorArgs,

    /// Diagnostics format on stderr (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_logging(cli.log_format.unwrap_or_else(default_log_format)) {
        eprintln!("warning: diagnostics logging unavailable: {err}");
    }

    match run_monitor(&cli.monitor) {
        Ok(summary) => {
            tracing::debug!(?summary, "done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "monitoring run failed");
            print_error(&err, !io::stderr().is_terminal());
            ExitCode::FAILURE
        }
    }
}
