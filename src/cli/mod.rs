//! Command line front end: load a game, then solve, liquidate, and/or simulate.

pub mod actions;
pub mod args;

pub use args::Args;

use crate::game::Game;
use crate::solver::Registry;
use anyhow::Context;
use std::io::Write;

/// run every action requested on the command line, in order
pub fn run(args: Args) -> anyhow::Result<()> {
    let game = Game::load(&args.game).with_context(|| format!("loading {}", args.game.display()))?;
    log::info!("loaded {}", game);
    let ref registry = Registry::new();
    let styled = args.output.is_none();
    let mut output: Box<dyn Write> = match args.output {
        Some(ref path) => Box::new(
            std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };
    if args.dynamic {
        actions::dynamic(&game, registry, output.as_mut())?;
    }
    if args.liquidate {
        let derived = actions::liquidate(&game, registry, output.as_mut(), styled)?;
        log::info!("equivalent game: {}", serde_json::to_string(&derived)?);
    }
    if args.simulate {
        let kinds = match args.names.is_empty() {
            true => crate::strategy::Kind::all().to_vec(),
            false => args.names.clone(),
        };
        actions::simulation(&game, registry, args.size, args.seed, &kinds, output.as_mut(), styled)?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("dicegame-{}-{}", std::process::id(), name))
    }

    #[test]
    fn writes_report_to_output_file() {
        let ref game = scratch("run-game.json");
        let ref output = scratch("run-output.txt");
        std::fs::write(game, r#"{ "price": 4, "time": 5, "limit": 3 }"#).unwrap();
        let args = Args::try_parse_from([
            "dicegame",
            "-g",
            game.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-d",
            "-k",
            "-s",
            "-n",
            "100",
            "passive",
        ])
        .unwrap();
        run(args).unwrap();
        let text = std::fs::read_to_string(output).unwrap();
        let _ = std::fs::remove_file(game);
        let _ = std::fs::remove_file(output);
        assert!(text.starts_with("optimal value: "));
        assert!(text.contains("Liquidation\n"));
        assert!(text.contains("Scores\n"));
        assert!(text.contains("passive"));
        assert!(!text.contains("│ optimal"));
    }

    #[test]
    fn missing_game_file_fails() {
        let args = Args::try_parse_from(["dicegame", "-g", "no-such-dicegame-file.json", "-d"]).unwrap();
        assert!(run(args).is_err());
    }
}
