use std::process::ExitCode;

use clap::Parser;

use metagen_utils::cli;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    cli::init_logging(cli.verbose);

    cli::exit_status(cli.execute())
}
