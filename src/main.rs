use clap::Parser;
use downsort::cli::{Cli, run_cli};
use downsort::output::OutputFormatter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_cli(&cli) {
        OutputFormatter::error(&e);
        std::process::exit(1);
    }
}
