//! Filter contigs by length

use std::process::ExitCode;

use clap::Parser;

use metagen_utils::cli::filter_contigs::{run, FilterContigsArgs};
use metagen_utils::cli::{exit_status, init_logging, CommonArgs};

#[derive(Parser)]
#[command(name = "filter-contigs")]
#[command(version)]
#[command(about = "Filter contigs by length")]
struct Cli {
    #[command(flatten)]
    args: FilterContigsArgs,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.common.verbose);

    exit_status(run(&cli.args, cli.common.format))
}
