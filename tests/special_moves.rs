use shatranj::{movegen, Board, CastlingSide, Color, Move, MoveKind, Square};

#[test]
fn double_advance_opens_a_one_move_en_passant_window() {
    let mut board = Board::from_fen("8/8/8/8/8/8/P7/8 w - - 0 1").unwrap();

    let moves = movegen::pseudo_legal_moves(&board, Color::White);
    let double = Move::with_kind(Square::A2, Square::A4, MoveKind::DoublePawnAdvance);
    assert!(moves.contains(&double));

    board.apply_move(double).unwrap();
    assert_eq!(board.fen(), "8/8/8/8/P7/8/8/8 b - a3 0 1");
}

#[test]
fn en_passant_capture_removes_the_bypassed_pawn() {
    // Black just played d7-d5 past the white pawn on e5.
    let mut board = Board::from_fen("8/8/8/3pP3/8/8/8/8 w - d6 0 1").unwrap();

    let moves = movegen::pseudo_legal_moves(&board, Color::White);
    let capture = Move::with_kind(Square::E5, Square::D6, MoveKind::EnPassant);
    assert!(moves.contains(&capture));

    board.apply_move(capture).unwrap();
    assert_eq!(board.piece_at(Square::D6), Some(Color::White.pawn()));
    assert_eq!(board.piece_at(Square::D5), None);
    assert_eq!(board.ep_square(), None);
}

#[test]
fn castling_relocates_the_rook_and_clears_both_rights() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1").unwrap();

    let moves = movegen::pseudo_legal_moves(&board, Color::White);
    let castle = Move::with_kind(Square::E1, Square::G1, MoveKind::Castle);
    assert!(moves.contains(&castle));
    // No rook on a1, so no queen-side castle despite the flag.
    assert!(!moves.contains(&Move::with_kind(Square::E1, Square::C1, MoveKind::Castle)));

    board.apply_move(castle).unwrap();
    assert_eq!(board.piece_at(Square::G1), Some(Color::White.king()));
    assert_eq!(board.piece_at(Square::F1), Some(Color::White.rook()));
    assert!(!board
        .castling_rights()
        .has(Color::White, CastlingSide::KingSide));
    assert!(!board
        .castling_rights()
        .has(Color::White, CastlingSide::QueenSide));
}

#[test]
fn halfmove_clock_counts_quiet_moves_and_resets() {
    let mut board = Board::new();

    board.apply_move(Move::new(Square::G1, Square::F3)).unwrap();
    board.apply_move(Move::new(Square::B8, Square::C6)).unwrap();
    board.apply_move(Move::new(Square::B1, Square::C3)).unwrap();
    assert_eq!(board.halfmoves(), 3);

    board.apply_move(Move::new(Square::E7, Square::E6)).unwrap();
    assert_eq!(board.halfmoves(), 0);
}

#[test]
fn every_generated_move_applies_cleanly() {
    for fen_str in [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/8/8/3pP3/8/8/8/8 w - d6 0 1",
        "4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1",
    ] {
        let board = Board::from_fen(fen_str).unwrap();
        for color in Color::ALL {
            for m in movegen::pseudo_legal_moves(&board, color) {
                let mut scratch = board.clone();
                assert_eq!(scratch.apply_move(m), Ok(()), "{} on {}", m, fen_str);
            }
        }
    }
}

#[test]
fn generation_reads_without_mutating() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let snapshot = board.clone();
    let first = movegen::pseudo_legal_moves(&board, Color::White);
    let second = movegen::pseudo_legal_moves(&board, Color::White);
    assert_eq!(first, second);
    assert_eq!(board, snapshot);
}
