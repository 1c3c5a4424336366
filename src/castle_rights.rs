use crate::color::Color;
use crate::error::Error;
use crate::square::Square;
use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::str::FromStr;

/// Which side of the board a castle goes to.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// What castle rights are left in the game?  Four independent bits, always in KQkq order:
/// white king-side, white queen-side, black king-side, black queen-side.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CastleRights(u8);

/// How many castle right bits are there?
pub const NUM_CASTLE_RIGHTS: usize = 4;

// Rights that survive a move touching the square.  Anything leaving or landing on a king or
// rook home square takes the matching rights away.
const CASTLES_PER_SQUARE: [u8; 64] = [
    13, 15, 15, 15, 12, 15, 15, 14, // 1
    15, 15, 15, 15, 15, 15, 15, 15, // 2
    15, 15, 15, 15, 15, 15, 15, 15, // 3
    15, 15, 15, 15, 15, 15, 15, 15, // 4
    15, 15, 15, 15, 15, 15, 15, 15, // 5
    15, 15, 15, 15, 15, 15, 15, 15, // 6
    15, 15, 15, 15, 15, 15, 15, 15, // 7
    7, 15, 15, 15, 3, 15, 15, 11, // 8
];

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const WHITE_KINGSIDE: CastleRights = CastleRights(1);
    pub const WHITE_QUEENSIDE: CastleRights = CastleRights(2);
    pub const BLACK_KINGSIDE: CastleRights = CastleRights(4);
    pub const BLACK_QUEENSIDE: CastleRights = CastleRights(8);
    pub const ALL: CastleRights = CastleRights(15);

    /// The single right for one color and side.
    pub fn single(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => CastleRights::WHITE_KINGSIDE,
            (Color::White, CastleSide::QueenSide) => CastleRights::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::KingSide) => CastleRights::BLACK_KINGSIDE,
            (Color::Black, CastleSide::QueenSide) => CastleRights::BLACK_QUEENSIDE,
        }
    }

    /// Both rights of one color.
    pub fn for_color(color: Color) -> CastleRights {
        CastleRights::single(color, CastleSide::KingSide)
            | CastleRights::single(color, CastleSide::QueenSide)
    }

    /// Can `color` still castle to `side`?
    #[inline]
    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.contains(CastleRights::single(color, side))
    }

    #[inline]
    pub fn contains(&self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    /// The rights that survive a move from or to `sq`.
    #[inline]
    pub fn surviving(sq: Square) -> CastleRights {
        CastleRights(CASTLES_PER_SQUARE[sq.to_index()])
    }

    /// Remove castle rights, and return a new `CastleRights`.
    #[inline]
    pub fn remove(&self, remove: CastleRights) -> CastleRights {
        CastleRights(self.0 & !remove.0)
    }

    /// Convert `CastleRights` to `usize` for table lookups
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    /// Iterate over the bit positions (0..4) that are set.
    pub fn bits(&self) -> impl Iterator<Item = usize> {
        let bits = self.0;
        (0..NUM_CASTLE_RIGHTS).filter(move |i| bits & (1 << i) != 0)
    }
}

impl BitAnd for CastleRights {
    type Output = CastleRights;

    fn bitand(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & other.0)
    }
}

impl BitOr for CastleRights {
    type Output = CastleRights;

    fn bitor(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }
}

/// Parse the castling field of a FEN: any subset of "KQkq", or "-".
impl FromStr for CastleRights {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        if s.is_empty() {
            return Err(Error::InvalidCastleRights);
        }
        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let right = match c {
                'K' => CastleRights::WHITE_KINGSIDE,
                'Q' => CastleRights::WHITE_QUEENSIDE,
                'k' => CastleRights::BLACK_KINGSIDE,
                'q' => CastleRights::BLACK_QUEENSIDE,
                _ => return Err(Error::InvalidCastleRights),
            };
            Ok(rights | right)
        })
    }
}

/// Convert the castle rights to an FEN compatible string.
///
/// ```
/// use chess_core::CastleRights;
///
/// assert_eq!(CastleRights::ALL.to_string(), "KQkq");
/// assert_eq!(CastleRights::NONE.to_string(), "-");
/// assert_eq!((CastleRights::WHITE_QUEENSIDE | CastleRights::BLACK_KINGSIDE).to_string(), "Qk");
/// ```
impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0 == 0 {
            return write!(f, "-");
        }
        for i in self.bits() {
            write!(f, "{}", ['K', 'Q', 'k', 'q'][i])?;
        }
        Ok(())
    }
}
