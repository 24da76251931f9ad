criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        computing_roll_probabilities,
        solving_short_game,
        solving_long_game,
        solving_reselling_game,
        simulating_optimal_strategy,
}

fn computing_roll_probabilities(c: &mut criterion::Criterion) {
    c.bench_function("sum every roll probability up to 64 dice", |b| {
        b.iter(|| {
            (1..=64)
                .flat_map(|dice| (1..=FACES).map(move |face| proba(dice, face)))
                .sum::<f64>()
        })
    });
}

fn solving_short_game(c: &mut criterion::Criterion) {
    let game = Game::simple(5, 10).unwrap();
    c.bench_function("solve a 10 round Game", |b| {
        b.iter(|| Tables::solve(&game))
    });
}

fn solving_long_game(c: &mut criterion::Criterion) {
    let game = Game::simple(10, 40).unwrap();
    c.bench_function("solve a 40 round Game", |b| {
        b.iter(|| Tables::solve(&game))
    });
}

fn solving_reselling_game(c: &mut criterion::Criterion) {
    let game = Game::new(5, 20, true, 8, vec![]).unwrap();
    c.bench_function("solve a 20 round Game with reselling", |b| {
        b.iter(|| Tables::solve(&game))
    });
}

fn simulating_optimal_strategy(c: &mut criterion::Criterion) {
    let game = Game::simple(5, 10).unwrap();
    let registry = Registry::new();
    let strategy = Kind::Optimal.build(&game, &registry);
    let simulator = Simulator::new(game);
    c.bench_function("simulate 1000 optimal Games", |b| {
        b.iter(|| simulator.run(1_000, strategy.as_ref()))
    });
}

use dicegame::FACES;
use dicegame::game::Game;
use dicegame::simulate::Simulator;
use dicegame::solver::Registry;
use dicegame::solver::Tables;
use dicegame::solver::proba;
use dicegame::strategy::Kind;
