use crate::bitboard::{BitBoard, DARK_SQUARES, EMPTY, LIGHT_SQUARES};
use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;

/// Draw conditions that follow from the position alone.  Stalemate needs a move generator and
/// is not here.
///
/// ```
/// use chess_core::{DrawDetector, Position, PositionSetup, Zobrist};
///
/// let setup = "8/8/4k3/8/8/2B5/8/4K3 w - - 0 1".parse::<PositionSetup>()?;
/// let position = Position::new(&setup, Zobrist::shared())?;
/// assert!(DrawDetector::insufficient_material(&position));
/// assert!(DrawDetector::is_draw(&position));
/// # Ok::<(), chess_core::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct DrawDetector;

impl DrawDetector {
    /// Fifty moves by each side with no capture and no pawn move.
    #[inline]
    pub fn fifty_move_rule(position: &Position) -> bool {
        position.halfmove_clock() >= 100
    }

    /// Neither side has enough left to mate: bare kings, a single minor piece against a bare
    /// king, or one bishop each on squares of the same color.
    pub fn insufficient_material(position: &Position) -> bool {
        let heavy = position.pieces_of_type(Piece::Pawn)
            | position.pieces_of_type(Piece::Rook)
            | position.pieces_of_type(Piece::Queen);
        if heavy != EMPTY {
            return false;
        }

        let minors = |color: Color| {
            position.pieces(Piece::Knight, color) | position.pieces(Piece::Bishop, color)
        };
        let white = minors(Color::White).popcnt();
        let black = minors(Color::Black).popcnt();

        match (white, black) {
            (0, 0) | (1, 0) | (0, 1) => true,
            (1, 1) => {
                let bishops = position.pieces_of_type(Piece::Bishop);
                bishops.popcnt() == 2 && same_shade(bishops)
            }
            _ => false,
        }
    }

    /// Does `color` have bishops on both light and dark squares?
    pub fn has_bishop_pair(position: &Position, color: Color) -> bool {
        let bishops = position.pieces(Piece::Bishop, color);
        bishops & LIGHT_SQUARES != EMPTY && bishops & DARK_SQUARES != EMPTY
    }

    /// Is there enough on the board for `color` to force mate against a lone king?
    ///
    /// Any pawn, rook or queen counts, for either side.  Otherwise `color` needs the bishop
    /// pair or a bishop and a knight.
    pub fn can_force_mate(position: &Position, color: Color) -> bool {
        let heavy = position.pieces_of_type(Piece::Pawn)
            | position.pieces_of_type(Piece::Rook)
            | position.pieces_of_type(Piece::Queen);
        heavy != EMPTY
            || DrawDetector::has_bishop_pair(position, color)
            || (position.pieces(Piece::Bishop, color) != EMPTY
                && position.pieces(Piece::Knight, color) != EMPTY)
    }

    /// Has the current position (same placement, side to move, castle rights and en passant
    /// square) come up at least three times?
    ///
    /// Only the plies since the last capture or pawn move are searched; nothing before that can
    /// come back.
    pub fn threefold_repetition(position: &Position) -> bool {
        let target = position.hash();
        let mut count = 0;
        for record in position.history() {
            if record.hash() == target {
                count += 1;
                if count >= 3 {
                    return true;
                }
            }
            if record.halfmove_clock() == 0 {
                break;
            }
        }
        false
    }

    /// Any of the three.
    pub fn is_draw(position: &Position) -> bool {
        DrawDetector::fifty_move_rule(position)
            || DrawDetector::insufficient_material(position)
            || DrawDetector::threefold_repetition(position)
    }
}

#[inline]
fn same_shade(squares: BitBoard) -> bool {
    squares & LIGHT_SQUARES == squares || squares & DARK_SQUARES == squares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::ChessMove;
    use crate::setup::{PositionSetup, STARTING_POSITION};
    use crate::square::Square;
    use crate::zobrist::Zobrist;
    use test_case::test_case;

    fn position(fen: &str) -> Position<'static> {
        let setup: PositionSetup = fen.parse().expect("valid fen");
        Position::new(&setup, Zobrist::shared()).expect("valid position")
    }

    #[test_case("8/8/4k3/8/8/8/8/4K3 w - - 0 1", true ; "bare kings")]
    #[test_case("8/8/4k3/8/8/2B5/8/4K3 w - - 0 1", true ; "king and bishop against king")]
    #[test_case("8/8/4k3/8/8/8/8/1N2K3 b - - 0 1", true ; "king and knight against king")]
    #[test_case("8/8/4k3/8/8/8/8/2B1KB2 w - - 0 1", false ; "two bishops on both shades")]
    #[test_case("8/8/4k3/8/8/8/8/1NN1K3 w - - 0 1", false ; "two knights")]
    #[test_case("8/8/3bk3/8/8/8/8/2B1K3 w - - 0 1", true ; "bishops on the same shade")]
    #[test_case("8/8/2b1k3/8/8/8/8/2B1K3 w - - 0 1", false ; "bishops on opposite shades")]
    #[test_case("8/8/2n1k3/8/8/8/8/2B1K3 w - - 0 1", false ; "bishop against knight")]
    #[test_case("8/8/4k3/8/8/8/4P3/4K3 w - - 0 1", false ; "a pawn")]
    #[test_case("8/8/4k3/8/8/8/8/R3K3 w - - 0 1", false ; "a rook")]
    #[test_case("8/8/4k3/8/8/8/8/3QK3 w - - 0 1", false ; "a queen")]
    fn insufficient_material(fen: &str, expected: bool) {
        assert_eq!(DrawDetector::insufficient_material(&position(fen)), expected);
    }

    #[test_case("8/8/4k3/8/8/8/8/2B1KB2 w - - 0 1", Color::White, true ; "light and dark bishops")]
    #[test_case("8/8/4k3/8/8/8/8/2B1K3 w - - 0 1", Color::White, false ; "a single bishop")]
    #[test_case("8/8/4k3/8/8/8/8/B1B1K3 w - - 0 1", Color::White, false ; "two dark bishops")]
    #[test_case("8/8/4k3/8/8/8/8/2B1KB2 w - - 0 1", Color::Black, false ; "pair belongs to the other side")]
    #[test_case("2b1kb2/8/8/8/8/8/8/4K3 w - - 0 1", Color::Black, true ; "black pair")]
    fn has_bishop_pair(fen: &str, color: Color, expected: bool) {
        assert_eq!(DrawDetector::has_bishop_pair(&position(fen), color), expected);
    }

    #[test_case("8/8/4k3/8/8/8/8/4K3 w - - 0 1", Color::White, false ; "bare kings")]
    #[test_case("8/8/4k3/8/8/8/p7/4K3 w - - 0 1", Color::White, true ; "a pawn on either side")]
    #[test_case("8/8/4k3/8/8/8/8/R3K3 w - - 0 1", Color::Black, true ; "a rook on the board")]
    #[test_case("8/8/4k3/8/8/8/8/2B1KB2 w - - 0 1", Color::White, true ; "bishop pair")]
    #[test_case("8/8/4k3/8/8/8/8/B1B1K3 w - - 0 1", Color::White, false ; "same shade bishops")]
    #[test_case("8/8/4k3/8/8/8/8/1NB1K3 w - - 0 1", Color::White, true ; "bishop and knight")]
    #[test_case("8/8/4k3/8/8/8/8/1NB1K3 w - - 0 1", Color::Black, false ; "bishop and knight for the other side")]
    #[test_case("8/8/4k3/8/8/8/8/1NN1K3 w - - 0 1", Color::White, false ; "two knights")]
    fn can_force_mate(fen: &str, color: Color, expected: bool) {
        assert_eq!(DrawDetector::can_force_mate(&position(fen), color), expected);
    }

    #[test]
    fn fifty_move_rule_starts_at_one_hundred() {
        assert!(!DrawDetector::fifty_move_rule(&position("8/8/4k3/8/8/8/8/R3K3 w - - 99 80")));

        let mut pos = position("8/8/4k3/8/8/8/8/R3K3 w - - 98 80");
        pos.apply(ChessMove::quiet(Square::A1, Square::A2)).expect("rook move");
        assert_eq!(pos.halfmove_clock(), 99);
        assert!(!DrawDetector::fifty_move_rule(&pos));
        pos.apply(ChessMove::quiet(Square::E6, Square::E7)).expect("king move");
        assert_eq!(pos.halfmove_clock(), 100);
        assert!(DrawDetector::fifty_move_rule(&pos));
        assert!(DrawDetector::is_draw(&pos));
    }

    #[test]
    fn knight_shuffle_repeats_three_times() {
        let mut pos = position(STARTING_POSITION);
        let shuffle = [
            ChessMove::quiet(Square::G1, Square::F3),
            ChessMove::quiet(Square::G8, Square::F6),
            ChessMove::quiet(Square::F3, Square::G1),
            ChessMove::quiet(Square::F6, Square::G8),
        ];

        // The start position is on the board for the second time after four plies and the
        // third time after eight.
        for (i, m) in shuffle.iter().cycle().take(8).enumerate() {
            assert!(!DrawDetector::threefold_repetition(&pos), "ply {}", i);
            pos.apply(*m).expect("knight move");
        }
        assert!(DrawDetector::threefold_repetition(&pos));
        assert!(DrawDetector::is_draw(&pos));

        pos.revert().expect("moves applied");
        assert!(!DrawDetector::threefold_repetition(&pos));
    }

    #[test]
    fn repetition_does_not_look_past_a_pawn_move() {
        let mut pos = position(STARTING_POSITION);
        let shuffle = [
            ChessMove::quiet(Square::G1, Square::F3),
            ChessMove::quiet(Square::G8, Square::F6),
            ChessMove::quiet(Square::F3, Square::G1),
            ChessMove::quiet(Square::F6, Square::G8),
        ];
        for m in shuffle.iter() {
            pos.apply(*m).expect("knight move");
        }
        // Nothing before these can repeat.
        pos.apply(ChessMove::quiet(Square::A2, Square::A3)).expect("pawn move");
        pos.apply(ChessMove::quiet(Square::A7, Square::A6)).expect("pawn move");
        for m in shuffle.iter().cycle().take(8) {
            pos.apply(*m).expect("knight move");
        }
        assert!(DrawDetector::threefold_repetition(&pos));

        pos.revert().expect("moves applied");
        pos.revert().expect("moves applied");
        pos.revert().expect("moves applied");
        pos.revert().expect("moves applied");
        assert!(!DrawDetector::threefold_repetition(&pos));
    }

    #[test]
    fn a_fresh_position_is_not_a_draw() {
        assert!(!DrawDetector::is_draw(&position(STARTING_POSITION)));
    }
}
