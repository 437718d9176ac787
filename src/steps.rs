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

//! Step vectors and empty-board geometry.

use crate::{
    role::Role,
    square::{Delta, Square},
};

#[allow(missing_docs)]
pub const NORTH: Delta = Delta::new(1, 0);
#[allow(missing_docs)]
pub const NORTH_EAST: Delta = Delta::new(1, 1);
#[allow(missing_docs)]
pub const EAST: Delta = Delta::new(0, 1);
#[allow(missing_docs)]
pub const SOUTH_EAST: Delta = Delta::new(-1, 1);
#[allow(missing_docs)]
pub const SOUTH: Delta = Delta::new(-1, 0);
#[allow(missing_docs)]
pub const SOUTH_WEST: Delta = Delta::new(-1, -1);
#[allow(missing_docs)]
pub const WEST: Delta = Delta::new(0, -1);
#[allow(missing_docs)]
pub const NORTH_WEST: Delta = Delta::new(1, -1);

/// The four orthogonal unit steps, the rook directions.
pub const ROOK_DIRECTIONS: [Delta; 4] = [NORTH, EAST, SOUTH, WEST];

/// The four diagonal unit steps, the bishop directions.
pub const BISHOP_DIRECTIONS: [Delta; 4] = [NORTH_EAST, SOUTH_EAST, SOUTH_WEST, NORTH_WEST];

/// All eight unit steps, the queen directions.
pub const QUEEN_DIRECTIONS: [Delta; 8] = [
    NORTH, NORTH_EAST, EAST, SOUTH_EAST, SOUTH, SOUTH_WEST, WEST, NORTH_WEST,
];

/// All eight unit steps, taken singly by the king.
pub const KING_STEPS: [Delta; 8] = QUEEN_DIRECTIONS;

/// The eight knight leaps.
pub const KNIGHT_LEAPS: [Delta; 8] = [
    Delta::new(2, 1),
    Delta::new(1, 2),
    Delta::new(-1, 2),
    Delta::new(-2, 1),
    Delta::new(-2, -1),
    Delta::new(-1, -2),
    Delta::new(1, -2),
    Delta::new(2, -1),
];

/// The squares a piece of the given type could reach from `from` on an
/// otherwise empty board.
///
/// Returns `None` for pawns, whose reach depends on color, occupancy and
/// move history.
///
/// # Examples
///
/// ```
/// use shatranj::{steps, Role, Square};
///
/// assert_eq!(steps::empty_board_reach(Role::Queen, Square::D4).unwrap().len(), 27);
/// assert_eq!(steps::empty_board_reach(Role::Pawn, Square::D4), None);
/// ```
pub fn empty_board_reach(role: Role, from: Square) -> Option<Vec<Square>> {
    let mut reach = Vec::new();
    match role {
        Role::Pawn => return None,
        Role::Knight => leaps(from, &KNIGHT_LEAPS, &mut reach),
        Role::King => leaps(from, &KING_STEPS, &mut reach),
        Role::Bishop => rays(from, &BISHOP_DIRECTIONS, &mut reach),
        Role::Rook => rays(from, &ROOK_DIRECTIONS, &mut reach),
        Role::Queen => rays(from, &QUEEN_DIRECTIONS, &mut reach),
    }
    Some(reach)
}

fn leaps(from: Square, deltas: &[Delta], reach: &mut Vec<Square>) {
    for &delta in deltas {
        if let Some(to) = from.step(delta) {
            reach.push(to);
        }
    }
}

fn rays(from: Square, deltas: &[Delta], reach: &mut Vec<Square>) {
    for &delta in deltas {
        let mut current = from;
        while let Some(to) = current.step(delta) {
            reach.push(to);
            current = to;
        }
    }
}

/// Empty-board reach for every piece type and square, built once up front.
///
/// An owned alternative to calling [`empty_board_reach`] repeatedly, for
/// callers that query the same geometry many times.
#[derive(Debug, Clone)]
pub struct ReachTable {
    reach: Vec<Vec<Square>>,
}

/// The reaching roles in table order: everything but the pawn.
const TABLE_ROLES: [Role; 5] = [Role::Knight, Role::Bishop, Role::Rook, Role::Queen, Role::King];

impl ReachTable {
    pub fn new() -> ReachTable {
        let mut reach = Vec::with_capacity(TABLE_ROLES.len() * 64);
        for role in TABLE_ROLES {
            for square in Square::all() {
                reach.push(empty_board_reach(role, square).unwrap_or_default());
            }
        }
        ReachTable { reach }
    }

    /// The precomputed reach of a piece type from a square, or `None` for
    /// pawns.
    pub fn get(&self, role: Role, square: Square) -> Option<&[Square]> {
        match role {
            Role::Pawn => None,
            _ => Some(&self.reach[(role as usize - 2) * 64 + square.index()]),
        }
    }
}

impl Default for ReachTable {
    fn default() -> ReachTable {
        ReachTable::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_reach_is_always_fourteen() {
        for square in Square::all() {
            assert_eq!(
                empty_board_reach(Role::Rook, square).unwrap().len(),
                14,
                "rook reach from {}",
                square
            );
        }
    }

    #[test]
    fn test_knight_corner_reach() {
        let reach = empty_board_reach(Role::Knight, Square::A1).unwrap();
        assert_eq!(reach.len(), 2);
        assert!(reach.contains(&Square::B3));
        assert!(reach.contains(&Square::C2));
    }

    #[test]
    fn test_king_reach() {
        assert_eq!(empty_board_reach(Role::King, Square::E4).unwrap().len(), 8);
        assert_eq!(empty_board_reach(Role::King, Square::A1).unwrap().len(), 3);
    }

    #[test]
    fn test_bishop_center_reach() {
        assert_eq!(
            empty_board_reach(Role::Bishop, Square::D4).unwrap().len(),
            13
        );
    }

    #[test]
    fn test_table_matches_direct_computation() {
        let table = ReachTable::new();
        for role in TABLE_ROLES {
            for square in Square::all() {
                assert_eq!(
                    table.get(role, square).unwrap(),
                    empty_board_reach(role, square).unwrap().as_slice()
                );
            }
        }
        assert_eq!(table.get(Role::Pawn, Square::E2), None);
    }
}
