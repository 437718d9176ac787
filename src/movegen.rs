// This file is part of the shatranj library.
// Copyright (C) 2026 the shatranj authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! Pseudo-legal move generation.

use crate::{
    board::Board,
    castling::{self, CastlingSide},
    color::Color,
    role::Role,
    square::{Delta, Square},
    steps,
    types::{Move, MoveKind, MoveList},
};

/// Generates all pseudo-legal moves for one color.
///
/// Pseudo-legal means consistent with piece movement and occupancy rules
/// plus the board's tracked castling and en passant rights. Whether a move
/// would leave the mover's own king in check is not considered, and a
/// castling path only has to be empty, not safe.
///
/// The board is only read. Generating twice on an unchanged board yields
/// the same moves in the same order.
///
/// # Examples
///
/// ```
/// use shatranj::{movegen, Board, Color};
///
/// let board = Board::new();
/// assert_eq!(movegen::pseudo_legal_moves(&board, Color::White).len(), 20);
/// ```
pub fn pseudo_legal_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, piece) in board.pieces_of(color) {
        match piece.role {
            Role::Pawn => pawn_moves(board, color, from, &mut moves),
            Role::Knight => leaper_moves(board, color, from, &steps::KNIGHT_LEAPS, &mut moves),
            Role::Bishop => {
                slider_moves(board, color, from, &steps::BISHOP_DIRECTIONS, &mut moves)
            }
            Role::Rook => slider_moves(board, color, from, &steps::ROOK_DIRECTIONS, &mut moves),
            Role::Queen => slider_moves(board, color, from, &steps::QUEEN_DIRECTIONS, &mut moves),
            Role::King => {
                leaper_moves(board, color, from, &steps::KING_STEPS, &mut moves);
                castle_moves(board, color, from, &mut moves);
            }
        }
    }
    moves
}

/// One step per delta: knights and kings.
fn leaper_moves(
    board: &Board,
    color: Color,
    from: Square,
    deltas: &[Delta],
    moves: &mut MoveList,
) {
    for &delta in deltas {
        if let Some(to) = from.step(delta) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(piece) if piece.color != color => {
                    moves.push(Move::with_kind(from, to, MoveKind::Capture));
                }
                Some(_) => (),
            }
        }
    }
}

/// Repeated steps per delta until the board's edge or a piece: bishops,
/// rooks and queens.
fn slider_moves(
    board: &Board,
    color: Color,
    from: Square,
    deltas: &[Delta],
    moves: &mut MoveList,
) {
    for &delta in deltas {
        let mut current = from;
        while let Some(to) = current.step(delta) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(Move::with_kind(from, to, MoveKind::Capture));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

fn pawn_moves(board: &Board, color: Color, from: Square, moves: &mut MoveList) {
    let forward = color.fold(steps::NORTH, steps::SOUTH);
    let Some(advance) = from.step(forward) else {
        return;
    };

    if board.piece_at(advance).is_none() {
        moves.push(Move::new(from, advance));

        if from.rank() == color.pawn_rank() {
            if let Some(double) = advance.step(forward) {
                if board.piece_at(double).is_none() {
                    moves.push(Move::with_kind(from, double, MoveKind::DoublePawnAdvance));
                }
            }
        }
    }

    for capture_delta in color.fold(
        [steps::NORTH_WEST, steps::NORTH_EAST],
        [steps::SOUTH_WEST, steps::SOUTH_EAST],
    ) {
        if let Some(to) = from.step(capture_delta) {
            match board.piece_at(to) {
                Some(piece) if piece.color != color => {
                    moves.push(Move::with_kind(from, to, MoveKind::Capture));
                }
                None if board.ep_square() == Some(to) => {
                    moves.push(Move::with_kind(from, to, MoveKind::EnPassant));
                }
                _ => (),
            }
        }
    }
}

/// Castle moves for each side whose right is still held, requiring the
/// king and rook on their home squares with nothing between them. Mirrors
/// the validation `Board::apply_move` performs, so an emitted castle
/// always applies cleanly.
fn castle_moves(board: &Board, color: Color, from: Square, moves: &mut MoveList) {
    if from != castling::king_home(color) {
        return;
    }

    for side in CastlingSide::ALL {
        if !board.castling_rights().has(color, side) {
            continue;
        }
        if board.piece_at(side.rook_from(color)) != Some(color.rook()) {
            continue;
        }
        if side
            .between(color)
            .iter()
            .any(|&square| board.piece_at(square).is_some())
        {
            continue;
        }
        moves.push(Move::with_kind(from, side.king_to(color), MoveKind::Castle));
    }
}
