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

use std::fmt;

use bitflags::bitflags;

use crate::{color::Color, square::Square};

/// `KingSide` (O-O) or `QueenSide` (O-O-O).
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    #[inline]
    pub const fn is_king_side(self) -> bool {
        matches!(self, CastlingSide::KingSide)
    }

    #[inline]
    pub const fn is_queen_side(self) -> bool {
        matches!(self, CastlingSide::QueenSide)
    }

    #[inline]
    pub const fn from_king_side(king_side: bool) -> CastlingSide {
        if king_side {
            CastlingSide::KingSide
        } else {
            CastlingSide::QueenSide
        }
    }

    /// The square the king castles to.
    pub const fn king_to(self, color: Color) -> Square {
        match (self, color) {
            (CastlingSide::KingSide, Color::White) => Square::G1,
            (CastlingSide::QueenSide, Color::White) => Square::C1,
            (CastlingSide::KingSide, Color::Black) => Square::G8,
            (CastlingSide::QueenSide, Color::Black) => Square::C8,
        }
    }

    /// The home corner of the castling rook.
    pub const fn rook_from(self, color: Color) -> Square {
        match (self, color) {
            (CastlingSide::KingSide, Color::White) => Square::H1,
            (CastlingSide::QueenSide, Color::White) => Square::A1,
            (CastlingSide::KingSide, Color::Black) => Square::H8,
            (CastlingSide::QueenSide, Color::Black) => Square::A8,
        }
    }

    /// The square the castling rook ends up on.
    pub const fn rook_to(self, color: Color) -> Square {
        match (self, color) {
            (CastlingSide::KingSide, Color::White) => Square::F1,
            (CastlingSide::QueenSide, Color::White) => Square::D1,
            (CastlingSide::KingSide, Color::Black) => Square::F8,
            (CastlingSide::QueenSide, Color::Black) => Square::D8,
        }
    }

    /// The squares strictly between the king's and the rook's home
    /// squares, all of which must be empty for the castle to be playable.
    pub const fn between(self, color: Color) -> &'static [Square] {
        match (self, color) {
            (CastlingSide::KingSide, Color::White) => &[Square::F1, Square::G1],
            (CastlingSide::QueenSide, Color::White) => &[Square::B1, Square::C1, Square::D1],
            (CastlingSide::KingSide, Color::Black) => &[Square::F8, Square::G8],
            (CastlingSide::QueenSide, Color::Black) => &[Square::B8, Square::C8, Square::D8],
        }
    }

    /// `KingSide` and `QueenSide`, in this order.
    pub const ALL: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];
}

/// The home square of the king, `e1` or `e8`.
pub(crate) fn king_home(color: Color) -> Square {
    color.fold(Square::E1, Square::E8)
}

bitflags! {
    /// The four castling-rights flags of a position.
    ///
    /// Flags only ever transition from set to cleared as a game
    /// progresses; nothing restores a lost right.
    #[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
    pub struct CastlingRights: u8 {
        const WHITE_KING_SIDE = 0b0001;
        const WHITE_QUEEN_SIDE = 0b0010;
        const BLACK_KING_SIDE = 0b0100;
        const BLACK_QUEEN_SIDE = 0b1000;
    }
}

impl CastlingRights {
    /// The flag for one side of one color.
    pub const fn single(color: Color, side: CastlingSide) -> CastlingRights {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => CastlingRights::WHITE_KING_SIDE,
            (Color::White, CastlingSide::QueenSide) => CastlingRights::WHITE_QUEEN_SIDE,
            (Color::Black, CastlingSide::KingSide) => CastlingRights::BLACK_KING_SIDE,
            (Color::Black, CastlingSide::QueenSide) => CastlingRights::BLACK_QUEEN_SIDE,
        }
    }

    /// Checks the flag for one side of one color.
    #[inline]
    pub fn has(self, color: Color, side: CastlingSide) -> bool {
        self.contains(CastlingRights::single(color, side))
    }

    /// Clears both of a color's flags.
    pub fn discard_color(&mut self, color: Color) {
        self.remove(
            CastlingRights::single(color, CastlingSide::KingSide)
                | CastlingRights::single(color, CastlingSide::QueenSide),
        );
    }

    /// Clears the flag tied to a rook home corner. Squares that are not a
    /// corner clear nothing.
    pub fn discard_rook_home(&mut self, square: Square) {
        match square {
            Square::H1 => self.remove(CastlingRights::WHITE_KING_SIDE),
            Square::A1 => self.remove(CastlingRights::WHITE_QUEEN_SIDE),
            Square::H8 => self.remove(CastlingRights::BLACK_KING_SIDE),
            Square::A8 => self.remove(CastlingRights::BLACK_QUEEN_SIDE),
            _ => (),
        }
    }
}

impl Default for CastlingRights {
    fn default() -> CastlingRights {
        CastlingRights::all()
    }
}

impl fmt::Display for CastlingRights {
    /// Writes the FEN castling field, `K`, `Q`, `k` and `q` in that order,
    /// or `-` when no right remains.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (flag, ch) in [
            (CastlingRights::WHITE_KING_SIDE, 'K'),
            (CastlingRights::WHITE_QUEEN_SIDE, 'Q'),
            (CastlingRights::BLACK_KING_SIDE, 'k'),
            (CastlingRights::BLACK_QUEEN_SIDE, 'q'),
        ] {
            if self.contains(flag) {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}
