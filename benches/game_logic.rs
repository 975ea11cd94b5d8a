use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{Board, Game, Piece, ShapeBag};
use gridfall::types::{GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);
    game.apply(GameAction::Confirm);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            game.tick(black_box(false));
        })
    });
}

fn bench_clear_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            for y in 16..20 {
                board.clear_row(black_box(y));
            }
            board
        })
    });
}

fn bench_bag_draw(c: &mut Criterion) {
    let mut bag = ShapeBag::new(12345);

    c.bench_function("bag_draw", |b| {
        b.iter(|| black_box(bag.draw()))
    });
}

fn bench_lateral_move(c: &mut Criterion) {
    let board = Board::new();
    let mut bag = ShapeBag::new(12345);
    let mut piece = Piece::new(&mut bag);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            piece.move_left(black_box(&board));
            piece.move_right(black_box(&board));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut bag = ShapeBag::new(12345);
    let mut piece = Piece::new(&mut bag);
    piece.reset_to(PieceKind::T, &board);
    for _ in 0..8 {
        piece.move_down(&board);
    }

    c.bench_function("rotate_cw_ccw", |b| {
        b.iter(|| {
            piece.rotate(true, black_box(&board));
            piece.rotate(false, black_box(&board));
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let board = Board::new();
    let mut bag = ShapeBag::new(12345);
    let piece = Piece::new(&mut bag);

    c.bench_function("ghost_cells", |b| {
        b.iter(|| black_box(piece.ghost_cells(&board)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_clear_rows,
    bench_bag_draw,
    bench_lateral_move,
    bench_rotate,
    bench_ghost
);
criterion_main!(benches);
