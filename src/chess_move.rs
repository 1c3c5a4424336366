use crate::error::Error;
use crate::piece::Piece;
use crate::square::Square;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// The independent facts about a move that `Position::apply` needs to know.  Several may be set
/// at once: an en passant move is `CAPTURE | EN_PASSANT`, a capturing promotion is
/// `CAPTURE | PROMOTION`.
#[derive(Clone, Copy, Eq, PartialEq, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveFlags(u8);

impl MoveFlags {
    pub const QUIET: MoveFlags = MoveFlags(0);
    pub const CAPTURE: MoveFlags = MoveFlags(1 << 0);
    pub const DOUBLE_PUSH: MoveFlags = MoveFlags(1 << 1);
    pub const EN_PASSANT: MoveFlags = MoveFlags(1 << 2);
    pub const CASTLING: MoveFlags = MoveFlags(1 << 3);
    pub const PROMOTION: MoveFlags = MoveFlags(1 << 4);

    /// Are all of the bits in `other` set?
    #[inline]
    pub fn contains(&self, other: MoveFlags) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_quiet(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl BitOr for MoveFlags {
    type Output = MoveFlags;

    #[inline]
    fn bitor(self, other: MoveFlags) -> MoveFlags {
        MoveFlags(self.0 | other.0)
    }
}

impl BitOrAssign for MoveFlags {
    #[inline]
    fn bitor_assign(&mut self, other: MoveFlags) {
        self.0 |= other.0;
    }
}

/// Represent a ChessMove in memory
#[derive(Clone, Copy, Eq, PartialEq, Default, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    source: Square,
    dest: Square,
    promotion: Option<Piece>,
    flags: MoveFlags,
}

impl ChessMove {
    /// Create a new chess move, given a source `Square`, a destination `Square`, an optional
    /// promotion `Piece` and its flags.
    #[inline]
    pub fn new(source: Square, dest: Square, promotion: Option<Piece>, flags: MoveFlags) -> ChessMove {
        ChessMove {
            source,
            dest,
            promotion,
            flags,
        }
    }

    /// A move that captures nothing and is nothing special.
    #[inline]
    pub fn quiet(source: Square, dest: Square) -> ChessMove {
        ChessMove::new(source, dest, None, MoveFlags::QUIET)
    }

    /// A plain capture on `dest`.
    #[inline]
    pub fn capture(source: Square, dest: Square) -> ChessMove {
        ChessMove::new(source, dest, None, MoveFlags::CAPTURE)
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Square {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Square {
        self.dest
    }

    /// Get the promotion piece (maybe).
    #[inline]
    pub fn get_promotion(&self) -> Option<Piece> {
        self.promotion
    }

    #[inline]
    pub fn get_flags(&self) -> MoveFlags {
        self.flags
    }

    #[inline]
    pub fn is(&self, flag: MoveFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Check that the flags agree with each other and with the promotion piece.  This says
    /// nothing about the board; see `Position::apply` for that.
    pub fn check_consistency(&self) -> Result<(), Error> {
        let reason = if self.source == self.dest {
            "source and destination are the same square"
        } else if self.is(MoveFlags::PROMOTION) != self.promotion.is_some() {
            "promotion flag and promotion piece disagree"
        } else if self.promotion == Some(Piece::Pawn) || self.promotion == Some(Piece::King) {
            "cannot promote to a pawn or a king"
        } else if self.is(MoveFlags::EN_PASSANT) && !self.is(MoveFlags::CAPTURE) {
            "en passant without the capture flag"
        } else if self.is(MoveFlags::EN_PASSANT)
            && (self.is(MoveFlags::PROMOTION) || self.is(MoveFlags::DOUBLE_PUSH))
        {
            "en passant cannot promote or double push"
        } else if self.is(MoveFlags::CASTLING)
            && (self.is(MoveFlags::CAPTURE)
                || self.is(MoveFlags::PROMOTION)
                || self.is(MoveFlags::DOUBLE_PUSH))
        {
            "castling cannot capture, promote or double push"
        } else if self.is(MoveFlags::DOUBLE_PUSH)
            && (self.is(MoveFlags::CAPTURE) || self.is(MoveFlags::PROMOTION))
        {
            "a double push cannot capture or promote"
        } else {
            return Ok(());
        };
        Err(Error::InconsistentFlags { reason })
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.promotion {
            None => write!(f, "{}{}", self.source, self.dest),
            Some(x) => write!(f, "{}{}{}", self.source, self.dest, x),
        }
    }
}
