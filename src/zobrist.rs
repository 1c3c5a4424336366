use crate::castle_rights::{CastleRights, NUM_CASTLE_RIGHTS};
use crate::color::{Color, NUM_COLORS};
use crate::file::{File, NUM_FILES};
use crate::piece::{Piece, NUM_PIECES};
use crate::square::{Square, NUM_SQUARES};
use lazy_static::lazy_static;
use log::debug;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

/// The seed behind `Zobrist::shared()`.
pub const DEFAULT_ZOBRIST_SEED: u64 = 0xDEAD_BEEF_1234_5678;

lazy_static! {
    static ref SHARED: Zobrist = Zobrist::new(DEFAULT_ZOBRIST_SEED);
}

/// The random numbers behind the position hash.  One per piece on each square, one for black
/// to move, one per castle right and one per en passant file.
///
/// Two tables built from the same seed are identical, so hashes are reproducible from run to
/// run.  They are not meant to be unpredictable.
#[derive(Clone)]
pub struct Zobrist {
    pieces: [[[u64; NUM_SQUARES]; NUM_PIECES]; NUM_COLORS],
    side_to_move: u64,
    castles: [u64; NUM_CASTLE_RIGHTS],
    en_passant: [u64; NUM_FILES],
}

impl Zobrist {
    /// Draw every key from a generator seeded with `seed`.
    pub fn new(seed: u64) -> Zobrist {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut result = Zobrist {
            pieces: [[[0; NUM_SQUARES]; NUM_PIECES]; NUM_COLORS],
            side_to_move: 0,
            castles: [0; NUM_CASTLE_RIGHTS],
            en_passant: [0; NUM_FILES],
        };

        for color in result.pieces.iter_mut() {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.next_u64();
                }
            }
        }
        result.side_to_move = rng.next_u64();
        for key in result.castles.iter_mut() {
            *key = rng.next_u64();
        }
        for key in result.en_passant.iter_mut() {
            *key = rng.next_u64();
        }

        debug!("built zobrist keys from seed {:#x}", seed);
        result
    }

    /// The process-wide table, seeded with `DEFAULT_ZOBRIST_SEED`.
    pub fn shared() -> &'static Zobrist {
        &SHARED
    }

    /// Get the value for a particular piece
    #[inline]
    pub fn piece(&self, piece: Piece, color: Color, square: Square) -> u64 {
        self.pieces[color.to_index()][piece.to_index()][square.to_index()]
    }

    /// XOR of the keys for every right that is set.
    #[inline]
    pub fn castles(&self, castle_rights: CastleRights) -> u64 {
        castle_rights
            .bits()
            .fold(0, |key, bit| key ^ self.castles[bit])
    }

    #[inline]
    pub fn en_passant(&self, file: File) -> u64 {
        self.en_passant[file.to_index()]
    }

    /// Folded in when black is to move.
    #[inline]
    pub fn side_to_move(&self) -> u64 {
        self.side_to_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ALL_COLORS;
    use crate::piece::ALL_PIECES;
    use crate::square::ALL_SQUARES;
    use std::collections::HashSet;

    #[test]
    fn same_seed_same_keys() {
        let a = Zobrist::new(42);
        let b = Zobrist::new(42);
        let c = Zobrist::new(43);
        assert_eq!(a.side_to_move(), b.side_to_move());
        assert_eq!(
            a.piece(Piece::Queen, Color::Black, Square::D8),
            b.piece(Piece::Queen, Color::Black, Square::D8)
        );
        assert_ne!(
            a.piece(Piece::Queen, Color::Black, Square::D8),
            c.piece(Piece::Queen, Color::Black, Square::D8)
        );
    }

    #[test]
    fn keys_do_not_collide() {
        let z = Zobrist::shared();
        let mut keys = HashSet::new();
        for color in ALL_COLORS.iter() {
            for piece in ALL_PIECES.iter() {
                for sq in ALL_SQUARES.iter() {
                    keys.insert(z.piece(*piece, *color, *sq));
                }
            }
        }
        keys.insert(z.side_to_move());
        for bit in 0..NUM_CASTLE_RIGHTS {
            keys.insert(z.castles(CastleRights::ALL & single_right(bit)));
        }
        for file in 0..NUM_FILES {
            keys.insert(z.en_passant(File::from_index(file)));
        }
        assert_eq!(keys.len(), 12 * 64 + 1 + 4 + 8);
    }

    fn single_right(bit: usize) -> CastleRights {
        [
            CastleRights::WHITE_KINGSIDE,
            CastleRights::WHITE_QUEENSIDE,
            CastleRights::BLACK_KINGSIDE,
            CastleRights::BLACK_QUEENSIDE,
        ][bit]
    }

    #[test]
    fn castle_keys_combine_by_xor() {
        let z = Zobrist::shared();
        assert_eq!(z.castles(CastleRights::NONE), 0);
        assert_eq!(
            z.castles(CastleRights::ALL),
            z.castles(CastleRights::for_color(Color::White))
                ^ z.castles(CastleRights::for_color(Color::Black))
        );
    }
}
