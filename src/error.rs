use crate::square::Square;
use failure::Fail;

/// Sometimes, bad stuff happens.
#[derive(Clone, Debug, Fail, PartialEq)]
pub enum Error {
    /// A move was requested from a square with nothing on it.
    #[fail(display = "No piece on the source square {}", square)]
    EmptySource { square: Square },

    /// The flags of a move contradict each other (or the promotion piece).
    #[fail(display = "Inconsistent move flags: {}", reason)]
    InconsistentFlags { reason: &'static str },

    /// A capture was requested, but the square being captured is empty.
    #[fail(display = "Nothing to capture on {}", square)]
    MissingCaptureTarget { square: Square },

    /// The move would land on a square that is not free to take.
    #[fail(display = "The destination {} is occupied", square)]
    OccupiedDestination { square: Square },

    /// A castling move was requested, but the rook is not where it should be.
    #[fail(display = "No rook to castle with on {}", square)]
    MissingCastlingRook { square: Square },

    /// The state stack is full.  No more moves can be applied to this position.
    #[fail(display = "Cannot apply move: all {} plies of the state stack are in use", capacity)]
    CapacityExceeded { capacity: usize },

    /// `revert` was called on a position that has no moves applied.
    #[fail(display = "Cannot revert: no move has been applied")]
    RevertUnderflow,

    /// The starting position handed to `Position::new` does not describe a board.
    #[fail(display = "Invalid starting position: {}", reason)]
    InvalidSetup { reason: String },

    /// An attempt was made to convert a string not equal to "a1"-"h8" to a square
    #[fail(display = "The string specified does not contain a valid algebraic notation square")]
    InvalidSquare,

    /// An attempt was made to convert a string not equal to "1"-"8" to a rank
    #[fail(display = "The string specified does not contain a valid rank")]
    InvalidRank,

    /// An attempt was made to convert a string not equal to "a"-"h" to a file
    #[fail(display = "The string specified does not contain a valid file")]
    InvalidFile,

    /// The castle rights string contains something other than "KQkq" or "-"
    #[fail(display = "The string specified does not contain valid castle rights")]
    InvalidCastleRights,

    /// Two blocker sets with different attacks hashed to the same slot.
    #[fail(display = "Magic number for {} collides at index {}", square, index)]
    MagicCollision { square: Square, index: usize },
}
