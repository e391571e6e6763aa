//! nova-timestamp command-line host.

use clap::Parser;
use nova_timestamp::cli::{self, logger, Cli};

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = cli::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
