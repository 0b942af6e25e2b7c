use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, GameState, ScriptedSource};
use blockfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("tick_below_interval", |b| {
        b.iter(|| {
            state.tick(black_box(16));
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::MoveLeft));
            state.apply_action(black_box(GameAction::MoveRight));
        })
    });

    c.bench_function("rotate_cw", |b| {
        b.iter(|| {
            state.apply_action(black_box(GameAction::RotateCw));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop_full_height", |b| {
        b.iter(|| {
            let mut state = GameState::with_source(ScriptedSource::new(vec![
                PieceKind::I,
                PieceKind::J,
                PieceKind::L,
            ]));
            state.apply_action(GameAction::HardDrop);
            black_box(state.lines());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("snapshot", |b| {
        b.iter(|| {
            black_box(state.snapshot());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_move_and_rotate,
    bench_hard_drop,
    bench_line_clear,
    bench_snapshot
);
criterion_main!(benches);
