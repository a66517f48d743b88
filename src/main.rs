use clap::Parser;
use dependabot_generate::cli::Cli;
use std::process;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    if let Err(e) = dependabot_generate::run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
