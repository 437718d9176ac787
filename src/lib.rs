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

//! A library for chess board state, FEN and pseudo-legal move generation.
//!
//! The board tracks piece placement, the side to move, castling rights,
//! the en passant target square and both move clocks. Move generation
//! enumerates every move consistent with piece movement and occupancy
//! rules; whether a move leaves the mover's own king in check is left to
//! higher layers.
//!
//! # Examples
//!
//! Generate the moves of the starting position:
//!
//! ```
//! use shatranj::{movegen, Board, Color};
//!
//! let board = Board::new();
//! let moves = movegen::pseudo_legal_moves(&board, Color::White);
//! assert_eq!(moves.len(), 20);
//! ```
//!
//! Play moves:
//!
//! ```
//! use shatranj::{Board, Move, MoveKind, Square};
//!
//! let mut board = Board::new();
//!
//! // 1. e4
//! board.apply_move(Move::with_kind(
//!     Square::E2,
//!     Square::E4,
//!     MoveKind::DoublePawnAdvance,
//! ))?;
//! assert_eq!(
//!     board.fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! # Ok::<_, shatranj::ApplyMoveError>(())
//! ```
//!
//! Read and write positions as [FEN](fen):
//!
//! ```
//! use shatranj::Board;
//!
//! let board = Board::from_fen("8/8/8/3pP3/8/8/8/8 w - d6 0 1")?;
//! assert_eq!(board.fen(), "8/8/8/3pP3/8/8/8/8 w - d6 0 1");
//! # Ok::<_, shatranj::fen::ParseFenError>(())
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural text representations.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod util;

mod board;
mod castling;
mod color;
mod role;
mod square;
mod types;

pub mod fen;
pub mod movegen;
pub mod steps;

pub use board::{ApplyMoveError, Board};
pub use castling::{CastlingRights, CastlingSide};
pub use color::{Color, ParseColorError};
pub use movegen::pseudo_legal_moves;
pub use role::{ParseRoleError, Role};
pub use square::{Delta, ParseSquareError, Square};
pub use types::{Move, MoveKind, MoveList, ParsePieceError, Piece};
