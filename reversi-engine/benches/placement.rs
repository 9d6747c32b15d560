use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use reversi_engine::{Engine, Location, Player};
use std::str::FromStr;

/// A few moves into a standard game, Player 2 to move.
fn midgame() -> Engine {
    let mut engine = Engine::default();
    for mv in ["C5", "C4", "D3", "E6", "F4"].iter() {
        let loc = Location::from_str(mv).expect("valid notation");
        assert_eq!(engine.place_at(loc), Ok(true));
    }
    engine
}

/// Total flips available to the mover, probing every cell.
fn sweep(engine: &Engine) -> usize {
    engine
        .cells()
        .filter_map(|(loc, _)| engine.flips_at(loc.col(), loc.row()).ok())
        .sum()
}

fn criterion_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("flips_at sweep");

    group.bench_function("midgame 8x8", |b| {
        let engine = midgame();
        b.iter(|| sweep(black_box(&engine)))
    });

    for &edge in [8usize, 16, 32].iter() {
        let engine = Engine::with_size(Player::Player1, edge, edge).expect("even edge");
        group.bench_with_input(BenchmarkId::new("opening", edge), &engine, |b, engine| {
            b.iter(|| sweep(black_box(engine)))
        });
    }

    group.finish();
}

fn criterion_place(c: &mut Criterion) {
    let engine = midgame();
    let moves: Vec<Location> = engine
        .cells()
        .map(|(loc, _)| loc)
        .filter(|loc| matches!(engine.flips_at(loc.col(), loc.row()), Ok(n) if n > 0))
        .collect();

    c.bench_function("place_piece midgame 8x8", |b| {
        b.iter_batched(
            || engine.clone(),
            |mut child| {
                for loc in moves.iter() {
                    black_box(child.place_piece(loc.col(), loc.row()).ok());
                }
                child
            },
            BatchSize::SmallInput,
        )
    });
}

#[cfg(unix)]
criterion_group! {
    name = placement;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_probe, criterion_place
}

#[cfg(not(unix))]
criterion_group! {
    name = placement;
    config = Criterion::default();
    targets = criterion_probe, criterion_place
}

criterion_main!(placement);
