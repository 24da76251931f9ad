use crate::SIMULATION_SEED;
use crate::SIMULATION_SIZE;
use crate::strategy::Kind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "dice game optimization", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "game.json", help = "game file (json)")]
    pub game: PathBuf,
    #[arg(short, long, help = "output file (text)")]
    pub output: Option<PathBuf>,
    #[arg(short, long, help = "show dynamic programming value")]
    pub dynamic: bool,
    #[arg(short = 'k', long, help = "show equivalent liquidation values")]
    pub liquidate: bool,
    #[arg(short, long, help = "run game simulations")]
    pub simulate: bool,
    #[arg(short = 'n', long, default_value_t = SIMULATION_SIZE, help = "sample size per strategy")]
    pub size: usize,
    #[arg(long, default_value_t = SIMULATION_SEED, help = "simulation seed")]
    pub seed: u64,
    #[arg(value_enum, help = "strategies to compare (default: all)")]
    pub names: Vec<Kind>,
}
