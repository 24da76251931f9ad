use crate::game::Game;
use crate::report::Liquidation;
use crate::report::Scores;
use crate::simulate::Simulator;
use crate::solver::Registry;
use crate::strategy::Kind;
use colored::Colorize;
use std::io::Write;

fn title(output: &mut dyn Write, text: &str, styled: bool) -> std::io::Result<()> {
    match styled {
        true => writeln!(output, "{}", text.bold()),
        false => writeln!(output, "{}", text),
    }
}

/// optimal expected score from the opening state
pub fn dynamic(game: &Game, registry: &Registry, output: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(output, "optimal value: {:.4}", registry.optimal_value(game))?;
    Ok(())
}

/// print the equivalent liquidation bonuses and return
/// the same game with those bonuses swapped in
pub fn liquidate(
    game: &Game,
    registry: &Registry,
    output: &mut dyn Write,
    styled: bool,
) -> anyhow::Result<Game> {
    let table = Liquidation::from(registry.liquidation(game));
    title(output, "Liquidation", styled)?;
    write!(output, "{}", table)?;
    Ok(game.with_liquid(table.bonuses())?)
}

/// simulate every named strategy and print their score intervals
pub fn simulation(
    game: &Game,
    registry: &Registry,
    size: usize,
    seed: u64,
    kinds: &[Kind],
    output: &mut dyn Write,
    styled: bool,
) -> anyhow::Result<Scores> {
    let simulator = Simulator::seeded(game.clone(), seed);
    let mut scores = Scores::default();
    for kind in kinds {
        log::info!("simulating {} x{}", kind, size);
        let ref strategy = kind.build(game, registry);
        scores.push(kind, simulator.run(size, strategy.as_ref()));
    }
    title(output, "Scores", styled)?;
    write!(output, "{}", scores)?;
    Ok(scores)
}
