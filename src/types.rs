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

use std::{error::Error, fmt, str::FromStr};

use arrayvec::ArrayVec;

use crate::{color::Color, role::Role, square::Square};

/// A piece with [`Color`] and [`Role`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub color: Color,
    pub role: Role,
}

impl Piece {
    /// The FEN letter of the piece: uppercase for White, lowercase for
    /// Black.
    ///
    /// # Examples
    ///
    /// ```
    /// use shatranj::Color;
    ///
    /// assert_eq!(Color::White.knight().char(), 'N');
    /// assert_eq!(Color::Black.queen().char(), 'q');
    /// ```
    pub const fn char(self) -> char {
        match self.color {
            Color::White => self.role.upper_char(),
            Color::Black => self.role.char(),
        }
    }

    /// Gets the piece from its FEN letter.
    pub const fn from_char(ch: char) -> Option<Piece> {
        match Role::from_char(ch) {
            Some(role) => Some(Piece {
                color: Color::from_white(ch.is_ascii_uppercase()),
                role,
            }),
            None => None,
        }
    }

    /// The compact byte encoding of the piece, 1 to 12. Black pieces take
    /// 1 to 6 and White pieces 7 to 12; 0 is reserved for an empty square.
    ///
    /// # Examples
    ///
    /// ```
    /// use shatranj::{Color, Piece};
    ///
    /// assert_eq!(Color::Black.pawn().code(), 1);
    /// assert_eq!(Color::White.king().code(), 12);
    /// assert_eq!(Piece::from_code(12), Some(Color::White.king()));
    /// assert_eq!(Piece::from_code(0), None);
    /// ```
    pub const fn code(self) -> u8 {
        let base = match self.color {
            Color::Black => 0,
            Color::White => 6,
        };
        base + self.role as u8
    }

    /// The inverse of [`Piece::code`]. Returns `None` for 0 (empty) and
    /// for any byte outside `1..=12`.
    pub const fn from_code(code: u8) -> Option<Piece> {
        let (color, role) = match code {
            1..=6 => (Color::Black, code),
            7..=12 => (Color::White, code - 6),
            _ => return None,
        };
        let role = match role {
            1 => Role::Pawn,
            2 => Role::Knight,
            3 => Role::Bishop,
            4 => Role::Rook,
            5 => Role::Queen,
            _ => Role::King,
        };
        Some(Piece { color, role })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Error when parsing an invalid piece letter.
#[derive(Clone, Debug)]
pub struct ParsePieceError;

impl fmt::Display for ParsePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid piece letter")
    }
}

impl Error for ParsePieceError {}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Piece, ParsePieceError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Piece::from_char(ch).ok_or(ParsePieceError),
            _ => Err(ParsePieceError),
        }
    }
}

display_from_str_serde_impl! { Piece }

/// The special-case behavior a move carries into
/// [`Board::apply_move`](crate::Board::apply_move).
///
/// `Promotion` is tracked as a kind, but replacing the pawn with the
/// promoted piece is left to the caller.
#[allow(missing_docs)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub enum MoveKind {
    #[default]
    Normal,
    Capture,
    EnPassant,
    Castle,
    DoublePawnAdvance,
    Promotion,
}

/// A move from one square to another, with its [`MoveKind`].
///
/// # Display
///
/// `Move` implements [`fmt::Display`] using long algebraic notation,
/// e.g. `e2-e4`, `e5xd6`, `O-O`.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    /// Constructs a quiet move.
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    /// Constructs a move with an explicit kind.
    pub const fn with_kind(from: Square, to: Square, kind: MoveKind) -> Move {
        Move { from, to, kind }
    }

    /// Checks if the move takes an opposing piece, either directly or en
    /// passant.
    pub const fn is_capture(self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant)
    }

    /// Checks if the move is a castling move.
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Castle => f.write_str(if self.to.file() > self.from.file() {
                "O-O"
            } else {
                "O-O-O"
            }),
            MoveKind::Capture | MoveKind::EnPassant => write!(f, "{}x{}", self.from, self.to),
            _ => write!(f, "{}-{}", self.from, self.to),
        }
    }
}

/// A container for moves that can be stored inline on the stack.
///
/// The capacity is limited, but large enough to hold the pseudo-legal
/// moves of any position reachable from a standard game.
pub type MoveList = ArrayVec<Move, 512>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_piece_char_roundtrip() {
        for ch in "pnbrqkPNBRQK".chars() {
            let piece = Piece::from_char(ch).unwrap();
            assert_eq!(piece.char(), ch);
        }
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('1'), None);
    }

    #[test]
    fn test_piece_code_roundtrip() {
        for code in 1..=12 {
            let piece = Piece::from_code(code).unwrap();
            assert_eq!(piece.code(), code);
        }
        assert_eq!(Piece::from_code(0), None);
        assert_eq!(Piece::from_code(13), None);
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Square::E2, Square::E4).to_string(), "e2-e4");
        assert_eq!(
            Move::with_kind(Square::E5, Square::D6, MoveKind::EnPassant).to_string(),
            "e5xd6"
        );
        assert_eq!(
            Move::with_kind(Square::E1, Square::G1, MoveKind::Castle).to_string(),
            "O-O"
        );
        assert_eq!(
            Move::with_kind(Square::E8, Square::C8, MoveKind::Castle).to_string(),
            "O-O-O"
        );
    }

    #[test]
    fn test_move_size() {
        assert!(mem::size_of::<Move>() <= 4);
    }
}
