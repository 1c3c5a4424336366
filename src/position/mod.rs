use crate::bitboard::{BitBoard, EMPTY};
use crate::castle_rights::CastleRights;
use crate::color::{Color, ALL_COLORS, NUM_COLORS};
use crate::error::Error;
use crate::file::File;
use crate::piece::{Piece, ALL_PIECES, NUM_PIECES};
use crate::rank::Rank;
use crate::setup::PositionSetup;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use crate::tables::AttackTables;
use crate::zobrist::Zobrist;
use arrayvec::ArrayVec;

mod apply;
mod state;

pub use self::state::StateRecord;

/// How many state records a position can hold: the starting record plus one per applied move.
/// Enough for any real game with a deep search line on top.
pub const MAX_PLY: usize = 1024;

/// A chess position that is changed in place, one move at a time, and can be walked back.
///
/// The placement is kept three ways at once: a bitboard per piece and color, a square-indexed
/// piece list, and the Zobrist hash in the current state record.  `apply` and `revert` keep them
/// in agreement.
///
/// The Zobrist keys are borrowed, so any number of positions (on any number of threads) can
/// share one table.  Each search thread should `clone` its own position.
#[derive(Clone)]
pub struct Position<'a> {
    zobrist: &'a Zobrist,
    pieces: [[BitBoard; NUM_PIECES]; NUM_COLORS],
    color_combined: [BitBoard; NUM_COLORS],
    combined: BitBoard,
    squares: [Option<(Piece, Color)>; NUM_SQUARES],
    states: ArrayVec<StateRecord, MAX_PLY>,
}

impl<'a> Position<'a> {
    /// Decode a starting position.
    ///
    /// ```
    /// use chess_core::{Color, Piece, Position, PositionSetup, Square, Zobrist};
    ///
    /// let position = Position::new(&PositionSetup::default(), Zobrist::shared())?;
    /// assert_eq!(position.piece_on(Square::E1), Some((Piece::King, Color::White)));
    /// assert_eq!(position.side_to_move(), Color::White);
    /// assert_eq!(position.hash(), position.compute_hash());
    /// # Ok::<(), chess_core::Error>(())
    /// ```
    pub fn new(setup: &PositionSetup, zobrist: &'a Zobrist) -> Result<Position<'a>, Error> {
        let mut result = Position {
            zobrist,
            pieces: [[EMPTY; NUM_PIECES]; NUM_COLORS],
            color_combined: [EMPTY; NUM_COLORS],
            combined: EMPTY,
            squares: [None; NUM_SQUARES],
            states: ArrayVec::new(),
        };

        for (sq, piece, color) in decode_placement(&setup.ranks)? {
            result.put(piece, color, sq);
        }

        let en_passant = if setup.en_passant == "-" {
            None
        } else {
            let sq: Square = setup.en_passant.parse()?;
            // White to move means black just pushed, so the skipped square is on rank 6.
            let expected = match setup.side_to_move {
                Color::White => Rank::Sixth,
                Color::Black => Rank::Third,
            };
            if sq.get_rank() != expected {
                return Err(Error::InvalidSetup {
                    reason: format!("en passant square {} does not fit the side to move", sq),
                });
            }
            Some(sq)
        };

        let mut state = StateRecord {
            side_to_move: setup.side_to_move,
            castle_rights: setup.castling.parse::<CastleRights>()?,
            en_passant,
            halfmove_clock: setup.halfmove_clock,
            fullmove_number: setup.fullmove_number,
            hash: 0,
            last_move: None,
            moved: None,
            captured: None,
            captured_square: None,
            previous: None,
        };
        state.hash = result.hash_of(&state);
        result.states.push(state);

        Ok(result)
    }

    /// Get a `BitBoard` of every piece of this type and color.
    #[inline]
    pub fn pieces(&self, piece: Piece, color: Color) -> BitBoard {
        self.pieces[color.to_index()][piece.to_index()]
    }

    /// Get a `BitBoard` of every piece of this type, for both colors.
    #[inline]
    pub fn pieces_of_type(&self, piece: Piece) -> BitBoard {
        self.pieces(piece, Color::White) | self.pieces(piece, Color::Black)
    }

    /// Grab the "color combined" `BitBoard`.  This is a `BitBoard` of every piece of a
    /// particular color.
    #[inline]
    pub fn color_combined(&self, color: Color) -> BitBoard {
        self.color_combined[color.to_index()]
    }

    /// Grab the "combined" `BitBoard`.  This is a `BitBoard` of every piece on the board.
    #[inline]
    pub fn combined(&self) -> BitBoard {
        self.combined
    }

    /// What is on a particular `Square`?
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<(Piece, Color)> {
        self.squares[sq.to_index()]
    }

    /// The whole piece list, indexed by square.
    #[inline]
    pub fn piece_list(&self) -> &[Option<(Piece, Color)>; NUM_SQUARES] {
        &self.squares
    }

    /// Where is the king of `color`?  `None` if it has been taken off the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(Piece::King, color).to_square()
    }

    /// The record for the current ply.
    #[inline]
    pub fn state(&self) -> &StateRecord {
        // `new` pushes the first record and `revert` never pops it.
        &self.states[self.states.len() - 1]
    }

    /// The record for an earlier (or the current) ply.
    pub fn state_at(&self, ply: usize) -> Option<&StateRecord> {
        self.states.get(ply)
    }

    /// How many moves have been applied since construction.
    #[inline]
    pub fn ply(&self) -> usize {
        self.states.len() - 1
    }

    /// Walk the back-references from the current record to the starting one.
    pub fn history(&self) -> impl Iterator<Item = &StateRecord> + '_ {
        let mut next = Some(self.states.len() - 1);
        std::iter::from_fn(move || {
            let record = &self.states[next?];
            next = record.previous;
            Some(record)
        })
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state().side_to_move
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.state().castle_rights
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.state().en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.state().halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.state().fullmove_number
    }

    /// The incrementally maintained Zobrist hash.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.state().hash
    }

    pub fn zobrist(&self) -> &'a Zobrist {
        self.zobrist
    }

    /// Hash the current position from scratch.  Always equal to `hash()`.
    pub fn compute_hash(&self) -> u64 {
        self.hash_of(self.state())
    }

    fn hash_of(&self, state: &StateRecord) -> u64 {
        let z = self.zobrist;
        let mut key = ALL_SQUARES
            .iter()
            .filter_map(|sq| self.piece_on(*sq).map(|(piece, color)| z.piece(piece, color, *sq)))
            .fold(0, |key, k| key ^ k);

        if let Some(ep) = state.en_passant {
            key ^= z.en_passant(ep.get_file());
        }
        key ^= z.castles(state.castle_rights);
        if state.side_to_move == Color::Black {
            key ^= z.side_to_move();
        }
        key
    }

    /// Do the bitboards, the piece list and the hash all describe the same position?
    pub fn is_consistent(&self) -> bool {
        let mut seen = EMPTY;
        for color in ALL_COLORS.iter() {
            let mut mine = EMPTY;
            for piece in ALL_PIECES.iter() {
                let bb = self.pieces(*piece, *color);
                if bb & seen != EMPTY {
                    return false;
                }
                seen |= bb;
                mine |= bb;
                if bb.into_iter().any(|sq| self.piece_on(sq) != Some((*piece, *color))) {
                    return false;
                }
            }
            if mine != self.color_combined(*color) {
                return false;
            }
        }

        seen == self.combined
            && ALL_SQUARES
                .iter()
                .all(|sq| self.piece_on(*sq).is_some() == seen.contains(*sq))
            && self.hash() == self.compute_hash()
    }

    /// Every piece, of either color, that attacks `sq` when the board holds `occupancy`.
    pub fn attackers_to(&self, sq: Square, occupancy: BitBoard, tables: &AttackTables) -> BitBoard {
        let bishops = self.pieces_of_type(Piece::Bishop) | self.pieces_of_type(Piece::Queen);
        let rooks = self.pieces_of_type(Piece::Rook) | self.pieces_of_type(Piece::Queen);

        (tables.pawn_attacks(sq, Color::White) & self.pieces(Piece::Pawn, Color::Black))
            | (tables.pawn_attacks(sq, Color::Black) & self.pieces(Piece::Pawn, Color::White))
            | (tables.knight_attacks(sq) & self.pieces_of_type(Piece::Knight))
            | (tables.king_attacks(sq) & self.pieces_of_type(Piece::King))
            | (tables.bishop_attacks(sq, occupancy) & bishops)
            | (tables.rook_attacks(sq, occupancy) & rooks)
    }

    /// Does any piece of color `by` attack `sq`?
    pub fn is_attacked(&self, sq: Square, by: Color, tables: &AttackTables) -> bool {
        self.attackers_to(sq, self.combined, tables) & self.color_combined(by) != EMPTY
    }

    /// Is the side to move in check?
    pub fn in_check(&self, tables: &AttackTables) -> bool {
        let us = self.side_to_move();
        self.king_square(us)
            .map_or(false, |king| self.is_attacked(king, !us, tables))
    }

    // Add a piece to the boards and the piece list.  The hash is the caller's job.
    #[inline]
    fn put(&mut self, piece: Piece, color: Color, sq: Square) {
        let bb = BitBoard::from_square(sq);
        self.pieces[color.to_index()][piece.to_index()] |= bb;
        self.color_combined[color.to_index()] |= bb;
        self.combined |= bb;
        self.squares[sq.to_index()] = Some((piece, color));
    }

    // Take a piece off the boards and the piece list.  The hash is the caller's job.
    #[inline]
    fn take(&mut self, piece: Piece, color: Color, sq: Square) {
        let bb = !BitBoard::from_square(sq);
        self.pieces[color.to_index()][piece.to_index()] &= bb;
        self.color_combined[color.to_index()] &= bb;
        self.combined &= bb;
        self.squares[sq.to_index()] = None;
    }
}

// Turn eight run-length encoded ranks (rank 8 first) into a list of pieces.
fn decode_placement(ranks: &[String]) -> Result<Vec<(Square, Piece, Color)>, Error> {
    let invalid = |reason: String| Error::InvalidSetup { reason };
    if ranks.len() != 8 {
        return Err(invalid(format!("expected 8 ranks, found {}", ranks.len())));
    }

    let mut result = vec![];
    for (i, text) in ranks.iter().enumerate() {
        let rank = Rank::from_index(7 - i);
        let mut file = 0usize;
        for c in text.chars() {
            if let Some(empty) = c.to_digit(10) {
                if empty == 0 || empty > 8 {
                    return Err(invalid(format!("bad run length {:?} in rank {:?}", c, text)));
                }
                file += empty as usize;
            } else {
                let (piece, color) = Piece::from_char(c)
                    .ok_or_else(|| invalid(format!("unknown piece {:?} in rank {:?}", c, text)))?;
                if file >= 8 {
                    return Err(invalid(format!("rank {:?} is longer than 8 squares", text)));
                }
                result.push((
                    Square::make_square(rank, File::from_index(file)),
                    piece,
                    color,
                ));
                file += 1;
            }
        }
        if file != 8 {
            return Err(invalid(format!("rank {:?} does not cover 8 squares", text)));
        }
    }
    Ok(result)
}
