use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, shape_def, Board, HighScores, Session};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Color, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345, HighScores::new());

    c.bench_function("session_tick_33ms", |b| {
        b.iter(|| {
            session.tick(black_box(33));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let color = Color::new(0, 240, 240);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for row in 16..20 {
                board.fill_row(row, color);
            }
            board.clear_full_rows();
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::new();
    let shape = shape_def(PieceKind::T).shape;

    c.bench_function("collides", |b| {
        b.iter(|| collides(&board, black_box(&shape), black_box(10), black_box(4)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut session = Session::new(12345, HighScores::new());

    c.bench_function("try_move", |b| {
        b.iter(|| {
            session.try_move(1, 0);
            session.try_move(-1, 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut session = Session::new(12345, HighScores::new());
    session.try_move(0, 5);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            session.try_rotate();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let session = Session::new(12345, HighScores::new());
    let snap = session.snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_try_move,
    bench_try_rotate,
    bench_render
);
criterion_main!(benches);
