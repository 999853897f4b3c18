//! Match Factor - fleet matching for open-pit load and haul
//!
//! A CLI tool that sizes a truck fleet against a loader and reports
//! match factor, productivity and sensitivity sweeps.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    matchfactor_app::logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
