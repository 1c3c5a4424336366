use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::rank::Rank;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board.  a1 is 0, h1 is 7, h8 is 63.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

const fn all_squares() -> [Square; NUM_SQUARES] {
    let mut result = [Square(0); NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        result[i] = Square(i as u8);
        i += 1;
    }
    result
}

/// A list of every square on the chessboard.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = all_squares();

impl Square {
    /// Create a new square, given an index.  Indexes past 63 wrap around.
    #[inline]
    pub fn new(sq: u8) -> Square {
        Square(sq & 63)
    }

    /// Make a square given a rank and a file
    #[inline]
    pub fn make_square(rank: Rank, file: File) -> Square {
        Square((rank.to_index() as u8) << 3 | (file.to_index() as u8))
    }

    /// Return the rank given this square.
    #[inline]
    pub fn get_rank(&self) -> Rank {
        Rank::from_index((self.0 >> 3) as usize)
    }

    /// Return the file given this square.
    #[inline]
    pub fn get_file(&self) -> File {
        File::from_index((self.0 & 7) as usize)
    }

    /// Step `ranks` up and `files` right.  If that walks off the board, None.
    pub fn offset(&self, ranks: i8, files: i8) -> Option<Square> {
        let rank = (self.0 >> 3) as i8 + ranks;
        let file = (self.0 & 7) as i8 + files;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square((rank as u8) << 3 | file as u8))
        } else {
            None
        }
    }

    /// If there is a square above me, return that.  Otherwise, None.
    #[inline]
    pub fn up(&self) -> Option<Square> {
        self.offset(1, 0)
    }

    /// If there is a square below me, return that.  Otherwise, None.
    #[inline]
    pub fn down(&self) -> Option<Square> {
        self.offset(-1, 0)
    }

    /// If there is a square to the left of me, return that.  Otherwise, None.
    #[inline]
    pub fn left(&self) -> Option<Square> {
        self.offset(0, -1)
    }

    /// If there is a square to the right of me, return that.  Otherwise, None.
    #[inline]
    pub fn right(&self) -> Option<Square> {
        self.offset(0, 1)
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Square> {
        self.offset(color.pawn_direction(), 0)
    }

    /// If there is a square "backward" given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn backward(&self, color: Color) -> Option<Square> {
        self.offset(-color.pawn_direction(), 0)
    }

    /// Is this one of the 32 light squares?  (a1 is dark, h1 is light.)
    #[inline]
    pub fn is_light(&self) -> bool {
        ((self.0 >> 3) + (self.0 & 7)) & 1 == 1
    }

    /// Convert this square to an integer.
    #[inline]
    pub fn to_int(&self) -> u8 {
        self.0
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        self.0 as usize
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.get_file().to_char(),
            self.get_rank().to_index() + 1
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => Ok(Square::make_square(
                Rank::from_index((rank as u8 - b'1') as usize),
                File::from_index((file as u8 - b'a') as usize),
            )),
            _ => Err(Error::InvalidSquare),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebraic_round_trip() {
        for sq in ALL_SQUARES.iter() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(*sq));
        }
        assert_eq!("e4".parse::<Square>(), Ok(Square::E4));
        assert_eq!("i4".parse::<Square>(), Err(Error::InvalidSquare));
        assert_eq!("e9".parse::<Square>(), Err(Error::InvalidSquare));
        assert_eq!("e".parse::<Square>(), Err(Error::InvalidSquare));
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        assert_eq!(Square::H4.right(), None);
        assert_eq!(Square::A4.left(), None);
        assert_eq!(Square::E8.up(), None);
        assert_eq!(Square::E1.down(), None);
        assert_eq!(Square::B1.offset(2, -1), Some(Square::A3));
        assert_eq!(Square::B1.offset(-1, 2), None);
        assert_eq!(Square::E2.forward(Color::Black), Some(Square::E1));
        assert_eq!(Square::E2.backward(Color::Black), Some(Square::E3));
    }

    #[test]
    fn square_colors() {
        assert!(!Square::A1.is_light());
        assert!(Square::H1.is_light());
        assert!(Square::A8.is_light());
        assert!(!Square::H8.is_light());
        assert_eq!(ALL_SQUARES.iter().filter(|s| s.is_light()).count(), 32);
    }
}
