use crate::color::Color;
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// The standard starting position.
pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A starting position, split into its fields but not yet checked.
///
/// This is what a FEN parser hands over: the piece placement as eight run-length encoded rank
/// strings (rank 8 first; digits are empty squares, letters are pieces, uppercase is white),
/// plus the side to move, castling string, en passant square and the two counters.
/// `Position::new` decodes and validates it.
///
/// ```
/// use chess_core::{Color, PositionSetup};
///
/// let setup: PositionSetup = "8/8/8/4k3/8/8/8/4K3 b - - 12 40".parse().expect("six fields");
/// assert_eq!(setup.ranks[3], "4k3");
/// assert_eq!(setup.side_to_move, Color::Black);
/// assert_eq!(setup.halfmove_clock, 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSetup {
    pub ranks: Vec<String>,
    pub side_to_move: Color,
    pub castling: String,
    pub en_passant: String,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl PositionSetup {
    pub fn new(
        ranks: &[&str],
        side_to_move: Color,
        castling: &str,
        en_passant: &str,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> PositionSetup {
        PositionSetup {
            ranks: ranks.iter().map(|r| r.to_string()).collect(),
            side_to_move,
            castling: castling.to_owned(),
            en_passant: en_passant.to_owned(),
            halfmove_clock,
            fullmove_number,
        }
    }
}

impl Default for PositionSetup {
    fn default() -> Self {
        PositionSetup::new(
            &[
                "rnbqkbnr", "pppppppp", "8", "8", "8", "8", "PPPPPPPP", "RNBQKBNR",
            ],
            Color::White,
            "KQkq",
            "-",
            0,
            1,
        )
    }
}

/// Split a one-line FEN into its six fields.  Only the shape of the line is checked here; the
/// contents are checked when the `Position` is built.
impl FromStr for PositionSetup {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidSetup {
            reason: format!("{}: {:?}", reason, value),
        };
        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.len() != 6 {
            return Err(invalid("expected six fields"));
        }

        let side_to_move = match tokens[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(invalid("side to move must be 'w' or 'b'")),
        };
        let halfmove_clock = tokens[4]
            .parse()
            .map_err(|_| invalid("halfmove clock is not a number"))?;
        let fullmove_number = tokens[5]
            .parse()
            .map_err(|_| invalid("fullmove number is not a number"))?;

        Ok(PositionSetup {
            ranks: tokens[0].split('/').map(|r| r.to_owned()).collect(),
            side_to_move,
            castling: tokens[2].to_owned(),
            en_passant: tokens[3].to_owned(),
            halfmove_clock,
            fullmove_number,
        })
    }
}

impl fmt::Display for PositionSetup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.ranks.join("/"),
            if self.side_to_move == Color::White { "w" } else { "b" },
            self.castling,
            self.en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_starting_position() {
        assert_eq!(STARTING_POSITION.parse::<PositionSetup>(), Ok(PositionSetup::default()));
        assert_eq!(PositionSetup::default().to_string(), STARTING_POSITION);
    }

    #[test]
    fn wrong_shapes_are_rejected() {
        for fen in [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - zero 1",
        ]
        .iter()
        {
            match fen.parse::<PositionSetup>() {
                Err(Error::InvalidSetup { .. }) => {}
                other => panic!("{:?} parsed as {:?}", fen, other),
            }
        }
    }
}
