use crate::bitboard::{BitBoard, EMPTY};
use crate::color::{Color, ALL_COLORS, NUM_COLORS};
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use crate::tables::rays::Direction;

const KNIGHT_DELTAS: [Direction; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [Direction; 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Attacks for the pieces that jump: knights, kings, and pawn captures.
#[derive(Clone)]
pub struct LeaperTable {
    knight: [BitBoard; NUM_SQUARES],
    king: [BitBoard; NUM_SQUARES],
    pawn: [[BitBoard; NUM_SQUARES]; NUM_COLORS],
}

// Every delta that stays on the board, as one bitboard.
fn jumps(src: Square, deltas: &[Direction]) -> BitBoard {
    deltas
        .iter()
        .filter_map(|&(ranks, files)| src.offset(ranks, files))
        .fold(EMPTY, |b, s| b | BitBoard::from_square(s))
}

impl LeaperTable {
    pub fn new() -> LeaperTable {
        let mut result = LeaperTable {
            knight: [EMPTY; NUM_SQUARES],
            king: [EMPTY; NUM_SQUARES],
            pawn: [[EMPTY; NUM_SQUARES]; NUM_COLORS],
        };

        for src in ALL_SQUARES.iter() {
            result.knight[src.to_index()] = jumps(*src, &KNIGHT_DELTAS);
            result.king[src.to_index()] = jumps(*src, &KING_DELTAS);
            for color in ALL_COLORS.iter() {
                let forward = color.pawn_direction();
                result.pawn[color.to_index()][src.to_index()] =
                    jumps(*src, &[(forward, -1), (forward, 1)]);
            }
        }

        result
    }

    /// Get the knight moves for a particular square.
    #[inline]
    pub fn knight(&self, sq: Square) -> BitBoard {
        self.knight[sq.to_index()]
    }

    /// Get the king moves for a particular square (no castling).
    #[inline]
    pub fn king(&self, sq: Square) -> BitBoard {
        self.king[sq.to_index()]
    }

    /// The squares a pawn of `color` on `sq` attacks, whether or not anything is there.
    #[inline]
    pub fn pawn(&self, sq: Square, color: Color) -> BitBoard {
        self.pawn[color.to_index()][sq.to_index()]
    }
}

impl Default for LeaperTable {
    fn default() -> Self {
        LeaperTable::new()
    }
}
