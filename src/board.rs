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

use std::{
    error::Error,
    fmt,
    fmt::Write as _,
    num::NonZeroU32,
    str::FromStr,
};

use crate::{
    castling::{CastlingRights, CastlingSide},
    color::Color,
    fen::{self, ParseFenError},
    role::Role,
    square::Square,
    types::{Move, MoveKind, Piece},
};

/// The full state of a position.
///
/// A board holds the piece placement of all 64 squares, the side to move,
/// the four castling-rights flags, the en passant target square (if the
/// last move was a double pawn advance), the half-move clock and the
/// full-move number.
///
/// A board is created once, either with the standard starting layout or
/// from a FEN string, and then mutated in place by successive
/// [`apply_move`](Board::apply_move) calls. There is no undo: callers
/// that want to try a move snapshot the board with [`Clone`] first.
///
/// # Examples
///
/// ```
/// use shatranj::{Board, Color, Square};
///
/// let board = Board::new();
/// assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
/// assert_eq!(board.turn(), Color::White);
/// assert_eq!(board.fen(), shatranj::fen::STARTING_FEN);
/// ```
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    pub(crate) squares: [u8; 64],
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) ep_square: Option<Square>,
    pub(crate) halfmoves: u32,
    pub(crate) fullmoves: NonZeroU32,
}

impl Board {
    /// Constructs a board with the standard starting layout, White to
    /// move, all castling rights, no en passant target and clocks at
    /// `0` and `1`.
    pub fn new() -> Board {
        const BACK_RANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        let mut board = Board::empty();
        for (file, &role) in BACK_RANK.iter().enumerate() {
            let file = file as u32;
            board.set_piece_at(Square::new(file), role.of(Color::White));
            board.set_piece_at(Square::new(file + 8), Color::White.pawn());
            board.set_piece_at(Square::new(file + 48), Color::Black.pawn());
            board.set_piece_at(Square::new(file + 56), role.of(Color::Black));
        }
        board.castling = CastlingRights::all();
        board
    }

    /// Constructs a board with no pieces, White to move and no castling
    /// rights.
    pub fn empty() -> Board {
        Board {
            squares: [0; 64],
            turn: Color::White,
            castling: CastlingRights::empty(),
            ep_square: None,
            halfmoves: 0,
            fullmoves: NonZeroU32::MIN,
        }
    }

    /// Parses a board from a FEN string.
    ///
    /// # Examples
    ///
    /// ```
    /// use shatranj::{Board, Color, Square};
    ///
    /// let board = Board::from_fen("8/8/8/3pP3/8/8/8/8 w - d6 0 1")?;
    /// assert_eq!(board.piece_at(Square::E5), Some(Color::White.pawn()));
    /// assert_eq!(board.ep_square(), Some(Square::D6));
    /// # Ok::<_, shatranj::fen::ParseFenError>(())
    /// ```
    pub fn from_fen(fen: &str) -> Result<Board, ParseFenError> {
        fen::parse(fen)
    }

    /// Writes the board as a FEN string, the exact inverse of
    /// [`Board::from_fen`].
    pub fn fen(&self) -> String {
        fen::write(self)
    }

    /// The piece on a square, or `None` if the square is empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        Piece::from_code(self.squares[square.index()])
    }

    /// Puts a piece on a square, replacing whatever was there.
    pub fn set_piece_at(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = piece.code();
    }

    /// Takes the piece off a square, returning it.
    pub fn remove_piece_at(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square);
        self.squares[square.index()] = 0;
        piece
    }

    /// All occupied squares with their pieces, in increasing square index
    /// order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().filter_map(|(index, &code)| {
            Piece::from_code(code).map(|piece| (Square::new(index as u32), piece))
        })
    }

    /// The occupied squares of one color, in increasing square index
    /// order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The castling-rights flags.
    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// The square a pawn could capture onto en passant this turn, set
    /// only immediately after a double pawn advance.
    #[inline]
    pub fn ep_square(&self) -> Option<Square> {
        self.ep_square
    }

    /// Half-moves since the last capture or pawn move. Tracked for the
    /// fifty-move rule, not enforced.
    #[inline]
    pub fn halfmoves(&self) -> u32 {
        self.halfmoves
    }

    /// The full-move number. Starts at 1 and increments after every Black
    /// move.
    #[inline]
    pub fn fullmoves(&self) -> NonZeroU32 {
        self.fullmoves
    }

    /// Plays a move, updating the placement, the en passant target, the
    /// castling rights, the clocks and the side to move.
    ///
    /// The move is validated before anything is touched, so a failed call
    /// leaves the board exactly as it was. Failure means the caller
    /// constructed a move by hand that does not fit this board; the move
    /// generator never produces one.
    ///
    /// # Errors
    ///
    /// - [`ApplyMoveError::NoPiece`] if the origin square is empty.
    /// - [`ApplyMoveError::CastlingRookMissing`] and
    ///   [`ApplyMoveError::CastlingRookMismatch`] if a castle move finds
    ///   anything other than the moving side's rook on its home corner.
    ///
    /// # Examples
    ///
    /// ```
    /// use shatranj::{Board, Move, MoveKind, Square};
    ///
    /// let mut board = Board::from_fen("8/8/8/8/8/8/P7/8 w - - 0 1")?;
    /// board.apply_move(Move::with_kind(
    ///     Square::A2,
    ///     Square::A4,
    ///     MoveKind::DoublePawnAdvance,
    /// ))?;
    /// assert_eq!(board.fen(), "8/8/8/8/P7/8/8/8 b - a3 0 1");
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn apply_move(&mut self, m: Move) -> Result<(), ApplyMoveError> {
        let piece = self
            .piece_at(m.from)
            .ok_or(ApplyMoveError::NoPiece { at: m.from })?;

        let castle = if m.kind == MoveKind::Castle {
            let side = CastlingSide::from_king_side(m.to.file() > m.from.file());
            let rook_from = side.rook_from(piece.color);
            match self.piece_at(rook_from) {
                None => return Err(ApplyMoveError::CastlingRookMissing { at: rook_from }),
                Some(found) if found != piece.color.rook() => {
                    return Err(ApplyMoveError::CastlingRookMismatch {
                        at: rook_from,
                        found,
                    })
                }
                Some(_) => Some((side, rook_from)),
            }
        } else {
            None
        };

        let capture = self.piece_at(m.to).is_some() || m.kind == MoveKind::EnPassant;

        self.remove_piece_at(m.from);
        self.set_piece_at(m.to, piece);

        if let Some((side, rook_from)) = castle {
            self.remove_piece_at(rook_from);
            self.set_piece_at(side.rook_to(piece.color), piece.color.rook());
        }

        if m.kind == MoveKind::EnPassant {
            // The captured pawn stands beside the destination, on the
            // capturing pawn's origin rank.
            if let Some(bypassed) = Square::from_coords(m.from.rank(), m.to.file()) {
                self.remove_piece_at(bypassed);
            }
        }

        self.ep_square = if m.kind == MoveKind::DoublePawnAdvance {
            Square::from_coords((m.from.rank() + m.to.rank()) / 2, m.to.file())
        } else {
            None
        };

        if capture || piece.role == Role::Pawn {
            self.halfmoves = 0;
        } else {
            self.halfmoves += 1;
        }

        if piece.role == Role::King {
            self.castling.discard_color(piece.color);
        }
        self.castling.discard_rook_home(m.from);
        self.castling.discard_rook_home(m.to);

        self.turn = !self.turn;
        if self.turn.is_white() {
            self.fullmoves = self.fullmoves.saturating_add(1);
        }

        Ok(())
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl FromStr for Board {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Board, ParseFenError> {
        Board::from_fen(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fen())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=8u8).rev() {
            for file in 1..=8u8 {
                let square = Square::new(u32::from(rank - 1) * 8 + u32::from(file - 1));
                f.write_char(self.piece_at(square).map_or('.', Piece::char))?;
                f.write_char(if file < 8 { ' ' } else { '\n' })?;
            }
        }
        Ok(())
    }
}

/// Error when a move does not fit the board it is applied to.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ApplyMoveError {
    /// No piece stands on the move's origin square.
    NoPiece {
        #[allow(missing_docs)]
        at: Square,
    },
    /// A castle move found no rook on the home corner.
    CastlingRookMissing {
        #[allow(missing_docs)]
        at: Square,
    },
    /// A castle move found something other than the moving side's rook on
    /// the home corner.
    CastlingRookMismatch {
        #[allow(missing_docs)]
        at: Square,
        #[allow(missing_docs)]
        found: Piece,
    },
}

impl fmt::Display for ApplyMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ApplyMoveError::NoPiece { at } => write!(f, "no piece on {}", at),
            ApplyMoveError::CastlingRookMissing { at } => {
                write!(f, "no rook to castle with on {}", at)
            }
            ApplyMoveError::CastlingRookMismatch { at, found } => {
                write!(f, "expected a castling rook on {}, found '{}'", at, found)
            }
        }
    }
}

impl Error for ApplyMoveError {}
