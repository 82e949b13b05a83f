//! CLI entry point for the seating chart generator

use clap::Parser;
use seatplan::io::cli::{Cli, SeatingRunner};

fn main() -> seatplan::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    SeatingRunner::new(cli).run()
}
