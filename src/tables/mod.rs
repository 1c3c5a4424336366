//! Precomputed attack tables.
//!
//! Everything here is built once and only read afterwards, so one `AttackTables` can be shared
//! by any number of positions and threads.  `AttackTables::shared()` hands out a process-wide
//! instance; `AttackTables::new()` builds a private one.

mod leapers;
mod magic;
mod magic_helpers;
mod magic_numbers;
mod rays;

pub use self::leapers::LeaperTable;
pub use self::magic::{Magic, SlidingTable};
pub use self::magic_helpers::{blocker_subsets, magic_mask, questions_and_answers, Slider};
pub use self::magic_numbers::{BISHOP_MAGICS, ROOK_MAGICS};
pub use self::rays::{
    empty_board_rays, ray_attacks, Direction, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};

use crate::bitboard::BitBoard;
use crate::color::Color;
use crate::error::Error;
use crate::piece::Piece;
use crate::square::Square;
use lazy_static::lazy_static;
use log::debug;

lazy_static! {
    static ref SHARED: AttackTables =
        AttackTables::new().expect("the shipped magic numbers are collision free");
}

/// Every attack lookup a move generator needs.
#[derive(Clone)]
pub struct AttackTables {
    leapers: LeaperTable,
    rook: SlidingTable,
    bishop: SlidingTable,
}

impl AttackTables {
    /// Build all of the tables.  This enumerates every blocker set for every square, so do it
    /// once and share the result.
    pub fn new() -> Result<AttackTables, Error> {
        let leapers = LeaperTable::new();
        let rook = SlidingTable::generate(Slider::Rook)?;
        let bishop = SlidingTable::generate(Slider::Bishop)?;
        debug!(
            "built attack tables: {} rook slots, {} bishop slots",
            rook.len(),
            bishop.len()
        );
        Ok(AttackTables {
            leapers,
            rook,
            bishop,
        })
    }

    /// The process-wide tables, built on first use.  Safe to call from any thread.
    pub fn shared() -> &'static AttackTables {
        &SHARED
    }

    /// What does a `piece` of `color` on `sq` attack, given everything on the board?
    ///
    /// ```
    /// use chess_core::{AttackTables, BitBoard, Color, Piece, Square, EMPTY};
    ///
    /// let tables = AttackTables::shared();
    /// let queen = tables.attacks(Piece::Queen, Color::White, Square::D1, EMPTY);
    /// assert_eq!(queen.popcnt(), 21);
    /// let pawn = tables.attacks(Piece::Pawn, Color::Black, Square::E7, EMPTY);
    /// assert_eq!(pawn, BitBoard::from_square(Square::D6) | BitBoard::from_square(Square::F6));
    /// ```
    #[inline]
    pub fn attacks(&self, piece: Piece, color: Color, sq: Square, occupancy: BitBoard) -> BitBoard {
        match piece {
            Piece::Pawn => self.pawn_attacks(sq, color),
            Piece::Knight => self.knight_attacks(sq),
            Piece::Bishop => self.bishop_attacks(sq, occupancy),
            Piece::Rook => self.rook_attacks(sq, occupancy),
            Piece::Queen => self.bishop_attacks(sq, occupancy) | self.rook_attacks(sq, occupancy),
            Piece::King => self.king_attacks(sq),
        }
    }

    #[inline]
    pub fn rook_attacks(&self, sq: Square, occupancy: BitBoard) -> BitBoard {
        self.rook.attacks(sq, occupancy)
    }

    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occupancy: BitBoard) -> BitBoard {
        self.bishop.attacks(sq, occupancy)
    }

    #[inline]
    pub fn knight_attacks(&self, sq: Square) -> BitBoard {
        self.leapers.knight(sq)
    }

    #[inline]
    pub fn king_attacks(&self, sq: Square) -> BitBoard {
        self.leapers.king(sq)
    }

    #[inline]
    pub fn pawn_attacks(&self, sq: Square, color: Color) -> BitBoard {
        self.leapers.pawn(sq, color)
    }
}
