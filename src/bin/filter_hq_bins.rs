//! Filter high-quality bins from a CheckM2 report

use std::process::ExitCode;

use clap::Parser;

use metagen_utils::cli::filter_bins::{run, FilterBinsArgs};
use metagen_utils::cli::{exit_status, init_logging, CommonArgs};

#[derive(Parser)]
#[command(name = "filter-hq-bins")]
#[command(version)]
#[command(about = "Filter high-quality bins from a CheckM2 report")]
struct Cli {
    #[command(flatten)]
    args: FilterBinsArgs,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.common.verbose);

    exit_status(run(&cli.args, cli.common.format))
}
