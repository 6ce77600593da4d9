//! Extract QC statistics from a fastp JSON report

use std::process::ExitCode;

use clap::Parser;

use metagen_utils::cli::qc_stats::{run, QcStatsArgs};
use metagen_utils::cli::{exit_status, init_logging, CommonArgs};

#[derive(Parser)]
#[command(name = "extract-qc-stats")]
#[command(version)]
#[command(about = "Extract QC statistics from a fastp JSON report")]
struct Cli {
    #[command(flatten)]
    args: QcStatsArgs,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.common.verbose);

    exit_status(run(&cli.args, cli.common.format))
}
