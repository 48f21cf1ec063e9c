use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, Engine, GameSnapshot, Shape};
use blockfall::types::{PieceKind, Pixel};

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    engine.start();

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if !engine.is_running() {
                engine.start();
            }
            engine.tick();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(Pixel::C));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_soft_drop_game(c: &mut Criterion) {
    c.bench_function("soft_drop_until_top_out", |b| {
        b.iter(|| {
            let mut engine = Engine::new(black_box(7));
            engine.start();
            while engine.is_running() {
                engine.set_soft_drop(true);
                engine.tick();
            }
            black_box(engine.score())
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    engine.start();

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            engine.move_right();
            engine.rotate();
            engine.move_left();
        })
    });
}

fn bench_shape_rotation(c: &mut Criterion) {
    let shape = Shape::canonical(PieceKind::I);
    c.bench_function("shape_rotated", |b| b.iter(|| black_box(shape).rotated()));
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = Engine::new(12345);
    engine.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_soft_drop_game,
    bench_move_and_rotate,
    bench_shape_rotation,
    bench_snapshot
);
criterion_main!(benches);
