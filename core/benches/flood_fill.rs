use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use minato_core::*;
use std::hint::black_box;

fn bench_flood_fill(c: &mut Criterion) {
    let grid = Grid::from_cell_count(Difficulty::Easy.cell_count()).unwrap();
    let empty = MineField::from_coords(grid, &[]).unwrap();
    let corners = MineField::from_coords(grid, &[(0, 9), (9, 0), (9, 9)]).unwrap();

    let mut group = c.benchmark_group("flood_fill");
    for (name, field) in [("empty", &empty), ("corners", &corners)] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || GameSession::with_mine_field(field.clone()),
                |mut session| black_box(session.reveal((0, 0)).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_new_session(c: &mut Criterion) {
    let config = Difficulty::Easy.config(false);
    c.bench_function("new_session", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(GameSession::new(config, seed).unwrap())
        })
    });
}

criterion_group!(benches, bench_flood_fill, bench_new_session);
criterion_main!(benches);
