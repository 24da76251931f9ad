//! Dice Game Binary
//!
//! Solves a game file exactly, then optionally prints its liquidation
//! schedule and compares strategies by simulation.
//!
//! Options: --dynamic, --liquidate, --simulate

use clap::Parser;
use dicegame::cli;

fn main() {
    let args = cli::Args::parse();
    if let Err(e) = dicegame::log() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
    if let Err(e) = cli::run(args) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
