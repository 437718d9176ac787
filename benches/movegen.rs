use criterion::{black_box, criterion_group, criterion_main, Criterion};

use shatranj::{fen, movegen, Board, Color};

const POSITIONS: &[&str] = &[
    fen::STARTING_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
];

fn bench_pseudo_legal_moves(c: &mut Criterion) {
    let boards: Vec<Board> = POSITIONS
        .iter()
        .map(|fen_str| Board::from_fen(fen_str).unwrap())
        .collect();

    c.bench_function("pseudo_legal_moves", |b| {
        b.iter(|| {
            let mut total = 0;
            for board in &boards {
                total += movegen::pseudo_legal_moves(black_box(board), Color::White).len();
                total += movegen::pseudo_legal_moves(black_box(board), Color::Black).len();
            }
            total
        })
    });
}

fn bench_fen_roundtrip(c: &mut Criterion) {
    c.bench_function("fen_roundtrip", |b| {
        b.iter(|| {
            for fen_str in POSITIONS {
                let board = Board::from_fen(black_box(fen_str)).unwrap();
                black_box(board.fen());
            }
        })
    });
}

criterion_group!(benches, bench_pseudo_legal_moves, bench_fen_roundtrip);
criterion_main!(benches);
