use crate::castle_rights::CastleRights;
use crate::chess_move::{ChessMove, MoveFlags};
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

/// Everything about a position that is not the piece placement, for one ply, plus what it takes
/// to undo the move that produced it.
///
/// Records live in the position's state stack.  `previous` is the index of the record one ply
/// earlier in that stack; it is only followed for repetition checks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct StateRecord {
    pub(crate) side_to_move: Color,
    pub(crate) castle_rights: CastleRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
    pub(crate) last_move: Option<ChessMove>,
    pub(crate) moved: Option<(Piece, Color)>,
    pub(crate) captured: Option<(Piece, Color)>,
    pub(crate) captured_square: Option<Square>,
    pub(crate) previous: Option<usize>,
}

impl StateRecord {
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    /// The square a pawn skipped over on the last move, if it was a double push.
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Starts at 1 and goes up after black moves.
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// The move that produced this record.  `None` for the starting record.
    pub fn last_move(&self) -> Option<ChessMove> {
        self.last_move
    }

    /// Flags of the move that produced this record.
    pub fn move_flags(&self) -> MoveFlags {
        self.last_move.map(|m| m.get_flags()).unwrap_or_default()
    }

    /// The piece a pawn turned into on the move that produced this record.
    pub fn promoted(&self) -> Option<Piece> {
        self.last_move.and_then(|m| m.get_promotion())
    }

    /// What that move took, and where it was standing.
    pub fn captured(&self) -> Option<(Piece, Color, Square)> {
        match (self.captured, self.captured_square) {
            (Some((piece, color)), Some(sq)) => Some((piece, color, sq)),
            _ => None,
        }
    }

    /// Index of the record for the ply before this one.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }
}
