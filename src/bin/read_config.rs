//! Read a YAML config and print shell-friendly KEY=VALUE pairs

use std::process::ExitCode;

use clap::Parser;

use metagen_utils::cli::read_config::{run, ReadConfigArgs};
use metagen_utils::cli::{exit_status, init_logging, CommonArgs};

#[derive(Parser)]
#[command(name = "read-config")]
#[command(version)]
#[command(about = "Read a YAML config and print shell-friendly KEY=VALUE pairs")]
struct Cli {
    #[command(flatten)]
    args: ReadConfigArgs,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.common.verbose);

    exit_status(run(&cli.args, cli.common.format))
}
