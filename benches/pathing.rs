use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use maze_solver::{
    generators::{self, MazeGenerator},
    grid::Grid,
    pathing,
    session::Session,
    units::{Height, Width},
};

fn generated_grid(side: usize) -> Grid {
    let mut g = Grid::new(Width(side), Height(side)).unwrap();
    MazeGenerator::seeded(7).recursive_backtracker(&mut g);
    g
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let g = generated_grid(351);
        let start = generators::start_position(&g);
        let end = generators::end_position(&g);
        b.iter(|| pathing::shortest_path(&g, start, end))
    });
}

fn bench_distances(c: &mut Criterion) {
    c.bench_function("distances", |b| {
        let g = generated_grid(351);
        let start = generators::start_position(&g);
        b.iter(|| pathing::Distances::for_grid(&g, start))
    });
}

fn bench_auto_solve(c: &mut Criterion) {
    c.bench_function("auto_solve_101", |b| {
        let mut session = Session::seeded(Width(101), Height(101), 7).unwrap();
        b.iter(|| {
            session.reset();
            session.prepare_auto_move();
            while session.auto_move_step() {}
        })
    });
}

criterion_group!(benches,
    bench_shortest_path,
    bench_distances,
    bench_auto_solve
);
criterion_main!(benches);
