//! Exact solution of a dice accumulation game.
//!
//! Each round a player may buy one more die, rolls every die it owns and
//! banks the highest face. Some rulesets let the player sell a die back for
//! a second copy of the roll. Leftover dice are liquidated at the horizon.
//! The [`solver`] computes optimal play by backward induction; the
//! [`simulate`] module measures any [`strategy`] against it by sampling.

pub mod game;
pub mod progress;
pub mod report;
pub mod simulate;
pub mod solver;
pub mod strategy;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected scores, liquidation bonuses, and simulated payoffs.
pub type Utility = f64;
/// Roll outcome probabilities.
pub type Probability = f64;
/// Banked score, used as a table coordinate.
pub type Score = usize;
/// Number of dice owned, used as a table coordinate.
pub type Dice = usize;
/// Round index in `0..=time`.
pub type Step = usize;
/// Face of a single die in `1..=FACES`.
pub type Face = usize;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Faces on every die.
pub const FACES: Face = 6;
/// Dice owned when the game starts.
pub const OPENING_DICE: Dice = 1;
/// Score banked when the game starts.
pub const OPENING_SCORE: Score = 0;

// ============================================================================
// SIMULATION
// ============================================================================
/// Games sampled per strategy unless told otherwise.
pub const SIMULATION_SIZE: usize = 10_000;
/// Default seed for reproducible simulations.
pub const SIMULATION_SEED: u64 = 0x5EED;
/// Two-sided confidence level of the reported score interval.
pub const CONFIDENCE: Probability = 0.95;
/// Progress lines emitted over a full simulation run.
pub const PROGRESS_TICKS: usize = 100;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory that receives one debug-level log file per run.
#[cfg(feature = "cli")]
pub const LOG_DIRECTORY: &str = "logs";

/// Log info and above to stderr, and everything down to debug into
/// `logs/dicegame-<unix seconds>.log`. Stdout stays free for reports.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    std::fs::create_dir_all(LOG_DIRECTORY)?;
    let ref path = std::path::Path::new(LOG_DIRECTORY).join(format!("dicegame-{}.log", stamp));
    let loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, std::fs::File::create(path)?),
    ];
    simplelog::CombinedLogger::init(loggers)?;
    Ok(())
}
