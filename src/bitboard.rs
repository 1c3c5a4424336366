use crate::square::Square;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul, Not};

/// A good old-fashioned bitboard: one bit per square, a1 is the least significant bit.
///
/// ```
/// use chess_core::{BitBoard, Square};
///
/// let bb = BitBoard(7); // a1, b1, c1
///
/// assert_eq!(bb.popcnt(), 3);
/// assert_eq!(bb.collect::<Vec<_>>(), vec![Square::A1, Square::B1, Square::C1]);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Clone, Copy, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct BitBoard(pub u64);

/// An empty bitboard.  It is sometimes useful to use !EMPTY to get the universe of squares.
pub const EMPTY: BitBoard = BitBoard(0);

/// The 32 light squares (b1, d1, ..., a8).
pub const LIGHT_SQUARES: BitBoard = BitBoard(0x55AA_55AA_55AA_55AA);

/// The 32 dark squares (a1, c1, ..., h8).
pub const DARK_SQUARES: BitBoard = BitBoard(0xAA55_AA55_AA55_AA55);

/// The outer ring of the board: ranks 1 and 8, files a and h.
pub const EDGES: BitBoard = BitBoard(0xFF81_8181_8181_81FF);

macro_rules! impl_bit_op {
    ($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl $trait for BitBoard {
            type Output = BitBoard;

            #[inline]
            fn $fn(self, other: BitBoard) -> BitBoard {
                BitBoard(self.0 $op other.0)
            }
        }

        impl $trait<&BitBoard> for BitBoard {
            type Output = BitBoard;

            #[inline]
            fn $fn(self, other: &BitBoard) -> BitBoard {
                BitBoard(self.0 $op other.0)
            }
        }

        impl $assign_trait for BitBoard {
            #[inline]
            fn $assign_fn(&mut self, other: BitBoard) {
                self.0 = self.0 $op other.0;
            }
        }
    };
}

impl_bit_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bit_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bit_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

// Magic hashing relies on the multiplication wrapping.
impl Mul for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn mul(self, other: BitBoard) -> BitBoard {
        BitBoard(self.0.wrapping_mul(other.0))
    }
}

impl Not for BitBoard {
    type Output = BitBoard;

    #[inline]
    fn not(self) -> BitBoard {
        BitBoard(!self.0)
    }
}

/// Rank 8 at the top, a-file on the left.
impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let bit = 1u64 << (rank * 8 + file);
                write!(f, "{}", if self.0 & bit == bit { "X " } else { ". " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl BitBoard {
    /// Construct a new `BitBoard` with a particular `Square` set
    #[inline]
    pub fn from_square(sq: Square) -> BitBoard {
        BitBoard(1u64 << sq.to_int())
    }

    /// Convert a `BitBoard` to a `Square`.  This grabs the least-significant `Square`, if any.
    #[inline]
    pub fn to_square(&self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::new(self.0.trailing_zeros() as u8))
        }
    }

    /// Count the number of `Squares` set in this `BitBoard`
    #[inline]
    pub fn popcnt(&self) -> u32 {
        self.0.count_ones()
    }

    /// Is `sq` one of the squares in this set?
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.0 & (1u64 << sq.to_int()) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Convert this `BitBoard` to a `usize` (for table lookups)
    #[inline]
    pub fn to_size(&self, rightshift: u8) -> usize {
        (self.0 >> rightshift) as usize
    }
}

/// For the `BitBoard`, iterate over every `Square` set.
impl Iterator for BitBoard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let result = self.to_square()?;
        self.0 &= self.0 - 1;
        Some(result)
    }
}
