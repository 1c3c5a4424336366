use crate::bitboard::{BitBoard, EMPTY};
use crate::square::Square;

/// A step on the board, in (ranks, files).
pub type Direction = (i8, i8);

/// North, south, east, west.
pub const ROOK_DIRECTIONS: [Direction; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonals.
pub const BISHOP_DIRECTIONS: [Direction; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Walk each direction from `sq`, adding every square passed, and stop on (and include) the
/// first square occupied in `occupancy`, or at the edge of the board.
///
/// This is the slow, obviously-correct version of the magic lookups.
///
/// ```
/// use chess_core::{ray_attacks, BitBoard, Square, ROOK_DIRECTIONS};
///
/// let blockers = BitBoard::from_square(Square::A3);
/// let attacks = ray_attacks(Square::A1, blockers, &ROOK_DIRECTIONS);
/// assert!(attacks.contains(Square::A3));
/// assert!(!attacks.contains(Square::A4));
/// assert!(attacks.contains(Square::H1));
/// ```
pub fn ray_attacks(sq: Square, occupancy: BitBoard, directions: &[Direction]) -> BitBoard {
    let mut result = EMPTY;
    for &(ranks, files) in directions {
        let mut next = sq.offset(ranks, files);
        while let Some(to) = next {
            result |= BitBoard::from_square(to);
            if occupancy.contains(to) {
                break;
            }
            next = to.offset(ranks, files);
        }
    }
    result
}

/// The squares a slider could reach from `sq` on an empty board.
#[inline]
pub fn empty_board_rays(sq: Square, directions: &[Direction]) -> BitBoard {
    ray_attacks(sq, EMPTY, directions)
}
