use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_draughts::{Board, CellValue, Color, GameEngine, Square};

fn bench_opening_moves(c: &mut Criterion) {
    let game = GameEngine::new(8);
    c.bench_function("get_all_moves_opening", |b| {
        b.iter(|| black_box(game.get_all_moves()))
    });
}

fn bench_king_chains(c: &mut Criterion) {
    let mut board = Board::empty(8);
    for row in [1, 3, 5] {
        for col in [2, 4, 6] {
            board.set(Square::new(row, col), CellValue::WhiteMan).unwrap();
        }
    }
    board.set(Square::new(4, 1), CellValue::BlackKing).unwrap();
    let game = GameEngine::from_board(board, Color::Black);

    c.bench_function("get_all_moves_king_chains", |b| {
        b.iter(|| black_box(game.get_all_moves()))
    });
}

fn bench_make_undo(c: &mut Criterion) {
    let mut game = GameEngine::new(8);
    let mv = game.get_all_moves()[0].clone();
    c.bench_function("make_move_undo", |b| {
        b.iter(|| {
            game.make_move_unchecked(black_box(&mv)).unwrap();
            game.undo();
        })
    });
}

criterion_group!(benches, bench_opening_moves, bench_king_chains, bench_make_undo);
criterion_main!(benches);
