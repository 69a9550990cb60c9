use criterion::{black_box, criterion_group, criterion_main, Criterion};
use brick_tetris::core::lines::clear_full_rows;
use brick_tetris::core::rotation::try_rotate;
use brick_tetris::core::{Board, GameState, MemoryHighScoreStore, SimpleRng};
use brick_tetris::types::UserAction;

fn new_game() -> GameState<SimpleRng, MemoryHighScoreStore> {
    let mut game = GameState::new(SimpleRng::new(12345), MemoryHighScoreStore::default());
    game.apply_action(UserAction::Start);
    game
}

fn bench_tick(c: &mut Criterion) {
    let mut game = new_game();

    c.bench_function("soft_tick", |b| {
        b.iter(|| {
            if game.game_over() {
                game = new_game();
            }
            game.apply_action(black_box(UserAction::Up));
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut game = new_game();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if game.game_over() {
                game = new_game();
            }
            game.apply_action(black_box(UserAction::Down));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, 1);
                }
            }
            clear_full_rows(black_box(&mut board))
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut game = new_game();
    let mut right = true;

    c.bench_function("shift", |b| {
        b.iter(|| {
            let action = if right { UserAction::Right } else { UserAction::Left };
            if !game.apply_action(action) {
                right = !right;
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let game = new_game();
    let mut board = game.board().clone();
    let mut piece = *game.active();

    c.bench_function("try_rotate", |b| {
        b.iter(|| try_rotate(black_box(&mut board), black_box(&mut piece)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = new_game();

    c.bench_function("snapshot", |b| b.iter(|| black_box(game.snapshot())));
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop,
    bench_line_clear,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot
);
criterion_main!(benches);
