use super::{Position, StateRecord, MAX_PLY};
use crate::castle_rights::CastleRights;
use crate::chess_move::{ChessMove, MoveFlags};
use crate::color::Color;
use crate::error::Error;
use crate::file::File;
use crate::piece::Piece;
use crate::square::Square;
use log::{trace, warn};

// Everything `apply` learns while checking a move, so the mutation half never has to fail.
struct Plan {
    mover: (Piece, Color),
    captured: Option<(Piece, Color, Square)>,
    rook: Option<(Square, Square)>,
}

// Where the rook goes when the king lands on `king_dest`.
fn castling_rook(king_dest: Square) -> Option<(Square, Square)> {
    let rank = king_dest.get_rank();
    match king_dest.get_file() {
        File::G => Some((
            Square::make_square(rank, File::H),
            Square::make_square(rank, File::F),
        )),
        File::C => Some((
            Square::make_square(rank, File::A),
            Square::make_square(rank, File::D),
        )),
        _ => None,
    }
}

impl<'a> Position<'a> {
    /// Apply a move in place.
    ///
    /// The move is checked against the board before anything changes; if it does not fit, the
    /// error is returned and the position is left exactly as it was.  Legality (checks, pins,
    /// castling through attacked squares) is the move generator's business, not this one's.
    ///
    /// ```
    /// use chess_core::{ChessMove, MoveFlags, Piece, Position, PositionSetup, Square, Zobrist};
    ///
    /// let mut position = Position::new(&PositionSetup::default(), Zobrist::shared())?;
    /// let before = position.hash();
    /// position.apply(ChessMove::new(Square::E2, Square::E4, None, MoveFlags::DOUBLE_PUSH))?;
    /// assert_eq!(position.en_passant(), Some(Square::E3));
    /// position.revert()?;
    /// assert_eq!(position.hash(), before);
    /// # Ok::<(), chess_core::Error>(())
    /// ```
    pub fn apply(&mut self, m: ChessMove) -> Result<(), Error> {
        let plan = match self.check_move(m) {
            Ok(plan) => plan,
            Err(e) => {
                warn!("rejected {}: {}", m, e);
                return Err(e);
            }
        };

        let z = self.zobrist;
        let prev = *self.state();
        let (piece, color) = plan.mover;
        let source = m.get_source();
        let dest = m.get_dest();
        let mut hash = prev.hash;

        if let Some(ep) = prev.en_passant {
            hash ^= z.en_passant(ep.get_file());
        }
        hash ^= z.castles(prev.castle_rights);

        if let Some((taken, taken_color, sq)) = plan.captured {
            self.take(taken, taken_color, sq);
            hash ^= z.piece(taken, taken_color, sq);
        }

        self.take(piece, color, source);
        hash ^= z.piece(piece, color, source);

        if let Some((rook_from, rook_to)) = plan.rook {
            self.take(Piece::Rook, color, rook_from);
            self.put(Piece::Rook, color, rook_to);
            hash ^= z.piece(Piece::Rook, color, rook_from) ^ z.piece(Piece::Rook, color, rook_to);
        }

        let placed = m.get_promotion().unwrap_or(piece);
        self.put(placed, color, dest);
        hash ^= z.piece(placed, color, dest);

        let castle_rights = prev.castle_rights
            & CastleRights::surviving(source)
            & CastleRights::surviving(dest);
        hash ^= z.castles(castle_rights);

        let en_passant = if m.is(MoveFlags::DOUBLE_PUSH) {
            source.forward(color)
        } else {
            None
        };
        if let Some(ep) = en_passant {
            hash ^= z.en_passant(ep.get_file());
        }

        hash ^= z.side_to_move();

        let halfmove_clock = if plan.captured.is_some() || piece == Piece::Pawn {
            0
        } else {
            prev.halfmove_clock.saturating_add(1)
        };
        let fullmove_number = if prev.side_to_move == Color::Black {
            prev.fullmove_number.saturating_add(1)
        } else {
            prev.fullmove_number
        };

        self.states.push(StateRecord {
            side_to_move: !prev.side_to_move,
            castle_rights,
            en_passant,
            halfmove_clock,
            fullmove_number,
            hash,
            last_move: Some(m),
            moved: Some(plan.mover),
            captured: plan.captured.map(|(p, c, _)| (p, c)),
            captured_square: plan.captured.map(|(_, _, sq)| sq),
            previous: Some(self.states.len() - 1),
        });

        trace!("applied {} at ply {}, hash {:#018x}", m, self.ply(), hash);
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// Undo the last applied move.
    ///
    /// Only the placement is rebuilt; everything else comes back by dropping the current
    /// record.  At the starting record this returns `Error::RevertUnderflow` and does nothing.
    pub fn revert(&mut self) -> Result<(), Error> {
        let (m, (piece, color)) = match (self.state().last_move, self.state().moved) {
            (Some(m), Some(moved)) if self.state().previous.is_some() => (m, moved),
            _ => {
                warn!("revert requested with no move applied");
                return Err(Error::RevertUnderflow);
            }
        };
        let record = self.states.pop().ok_or(Error::RevertUnderflow)?;

        // Exactly the reverse of `apply`: the rook may have landed on the king's source.
        self.take(m.get_promotion().unwrap_or(piece), color, m.get_dest());

        if m.is(MoveFlags::CASTLING) {
            if let Some((rook_from, rook_to)) = castling_rook(m.get_dest()) {
                self.take(Piece::Rook, color, rook_to);
                self.put(Piece::Rook, color, rook_from);
            }
        }

        self.put(piece, color, m.get_source());

        if let Some((taken, taken_color, sq)) = record.captured() {
            self.put(taken, taken_color, sq);
        }

        trace!("reverted {} back to ply {}", m, self.ply());
        debug_assert!(self.is_consistent());
        Ok(())
    }

    // Work out everything the move does, failing on anything that does not fit the board.
    // Must not touch `self`.
    fn check_move(&self, m: ChessMove) -> Result<Plan, Error> {
        m.check_consistency()?;
        if self.states.is_full() {
            return Err(Error::CapacityExceeded { capacity: MAX_PLY });
        }

        let source = m.get_source();
        let dest = m.get_dest();
        let (piece, color) = self
            .piece_on(source)
            .ok_or(Error::EmptySource { square: source })?;
        let inconsistent = |reason| Err(Error::InconsistentFlags { reason });

        if (m.is(MoveFlags::PROMOTION) || m.is(MoveFlags::DOUBLE_PUSH) || m.is(MoveFlags::EN_PASSANT))
            && piece != Piece::Pawn
        {
            return inconsistent("only a pawn can promote, double push or capture en passant");
        }
        if m.is(MoveFlags::CASTLING) && piece != Piece::King {
            return inconsistent("only a king can castle");
        }

        let mut captured = None;
        if m.is(MoveFlags::EN_PASSANT) {
            let target = dest
                .backward(color)
                .ok_or(Error::MissingCaptureTarget { square: dest })?;
            match self.piece_on(target) {
                Some((Piece::Pawn, c)) if c != color => {
                    captured = Some((Piece::Pawn, c, target));
                }
                _ => return Err(Error::MissingCaptureTarget { square: target }),
            }
            if self.piece_on(dest).is_some() {
                return Err(Error::OccupiedDestination { square: dest });
            }
        } else if m.is(MoveFlags::CAPTURE) {
            match self.piece_on(dest) {
                Some((p, c)) if c != color => captured = Some((p, c, dest)),
                Some(_) => return Err(Error::OccupiedDestination { square: dest }),
                None => return Err(Error::MissingCaptureTarget { square: dest }),
            }
        } else if self.piece_on(dest).is_some() {
            return Err(Error::OccupiedDestination { square: dest });
        }

        if m.is(MoveFlags::DOUBLE_PUSH)
            && source.offset(2 * color.pawn_direction(), 0) != Some(dest)
        {
            return inconsistent("a double push must go two squares straight ahead");
        }

        let mut rook = None;
        if m.is(MoveFlags::CASTLING) {
            if source.get_rank() != dest.get_rank() {
                return inconsistent("castling must stay on the king's rank");
            }
            let (rook_from, rook_to) = match castling_rook(dest) {
                Some(squares) => squares,
                None => return inconsistent("a castling king must land on the c or g file"),
            };
            if self.piece_on(rook_from) != Some((Piece::Rook, color)) {
                return Err(Error::MissingCastlingRook { square: rook_from });
            }
            if rook_to != source && self.piece_on(rook_to).is_some() {
                return Err(Error::OccupiedDestination { square: rook_to });
            }
            rook = Some((rook_from, rook_to));
        }

        Ok(Plan {
            mover: (piece, color),
            captured,
            rook,
        })
    }
}
