use criterion::{criterion_group, criterion_main, Criterion};
use maze_solver::{
    renderers,
    session::Session,
    units::{CellPixels, Height, Width},
};

fn render_grid(c: &mut Criterion) {
    let mut session = Session::seeded(Width(201), Height(201), 3).unwrap();
    session.find_path_bfs();

    let render_options = renderers::RenderOptionsBuilder::new()
        .cell_side_pixels_length(CellPixels(8))
        .show_path(true)
        .build();

    c.bench_function("render_image_201", |b| {
        b.iter(|| renderers::render_image(session.grid(), session.solution(), session.path_found(), &render_options))
    });
}

criterion_group!(benches, render_grid);
criterion_main!(benches);
