use crate::bitboard::{BitBoard, EMPTY};
use crate::square::Square;
use crate::tables::rays::{ray_attacks, Direction, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// The two pieces that slide.  The queen is both at once.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Slider {
    Rook,
    Bishop,
}

// How many squares can a blocking piece be on for the rook?
const ROOK_BITS: usize = 12;
// How many squares can a blocking piece be on for a bishop?
const BISHOP_BITS: usize = 9;

impl Slider {
    pub fn directions(&self) -> &'static [Direction; 4] {
        match *self {
            Slider::Rook => &ROOK_DIRECTIONS,
            Slider::Bishop => &BISHOP_DIRECTIONS,
        }
    }

    /// Table slots reserved for each square: enough for the square with the most relevant
    /// blockers (a corner for the rook, the center for the bishop).
    pub fn entries_per_square(&self) -> usize {
        match *self {
            Slider::Rook => 1 << ROOK_BITS,
            Slider::Bishop => 1 << BISHOP_BITS,
        }
    }
}

/// Given a square and the type of piece, which squares can hold a blocker that matters?
///
/// Walk each ray, but leave off its last square: a piece sitting on the edge does not shorten
/// the ray, because there is nothing past it anyway.  This is per ray and not a plain
/// "minus the edges" mask, since a rook on the a-file still cares about a2..a7.
pub fn magic_mask(sq: Square, slider: Slider) -> BitBoard {
    let mut result = EMPTY;
    for &(ranks, files) in slider.directions().iter() {
        let mut current = sq.offset(ranks, files);
        while let Some(to) = current {
            current = to.offset(ranks, files);
            if current.is_some() {
                result |= BitBoard::from_square(to);
            }
        }
    }
    result
}

/// Given a bitboard, generate a list of every possible set of bitboards using those bits.
/// AKA, if 'n' bits are set, generate 2^n bitboards where b1|b2|b3|...b(2^n) == mask
///
/// Uses the carry-rippler: `(subset - mask) & mask` steps through every subset of `mask`,
/// starting and ending at the empty set.
pub fn blocker_subsets(mask: BitBoard) -> Vec<BitBoard> {
    let mut result = Vec::with_capacity(1 << mask.popcnt());
    let mut subset = 0u64;
    loop {
        result.push(BitBoard(subset));
        subset = subset.wrapping_sub(mask.0) & mask.0;
        if subset == 0 {
            break;
        }
    }
    result
}

/// Generate all the possible combinations of blocking pieces for the rook/bishop, and then
/// generate all possible moves for each set of blocking pieces.
pub fn questions_and_answers(sq: Square, slider: Slider) -> (Vec<BitBoard>, Vec<BitBoard>) {
    let questions = blocker_subsets(magic_mask(sq, slider));
    let answers = questions
        .iter()
        .map(|question| ray_attacks(sq, *question, slider.directions()))
        .collect();
    (questions, answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::ALL_SQUARES;
    use crate::tables::rays::empty_board_rays;

    #[test]
    fn relevance_mask_sizes() {
        assert_eq!(magic_mask(Square::A1, Slider::Rook).popcnt(), 12);
        assert_eq!(magic_mask(Square::D4, Slider::Rook).popcnt(), 10);
        assert_eq!(magic_mask(Square::B1, Slider::Rook).popcnt(), 11);
        assert_eq!(magic_mask(Square::A1, Slider::Bishop).popcnt(), 6);
        assert_eq!(magic_mask(Square::D4, Slider::Bishop).popcnt(), 9);
        assert_eq!(magic_mask(Square::B1, Slider::Bishop).popcnt(), 5);
    }

    #[test]
    fn relevance_mask_never_reaches_the_edge_of_its_ray() {
        for sq in ALL_SQUARES.iter() {
            for slider in [Slider::Rook, Slider::Bishop].iter() {
                let mask = magic_mask(*sq, *slider);
                assert!(!mask.contains(*sq));
                assert_eq!(mask & empty_board_rays(*sq, slider.directions()), mask);
                assert!(1usize << mask.popcnt() <= slider.entries_per_square());
            }
        }
        let rook_a1 = magic_mask(Square::A1, Slider::Rook);
        assert!(rook_a1.contains(Square::A2));
        assert!(!rook_a1.contains(Square::A8));
        assert!(!rook_a1.contains(Square::H1));
    }

    #[test]
    fn every_subset_exactly_once() {
        let mask = magic_mask(Square::E4, Slider::Bishop);
        let subsets = blocker_subsets(mask);
        assert_eq!(subsets.len(), 1 << mask.popcnt());
        let mut sorted: Vec<u64> = subsets.iter().map(|b| b.0).collect();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), subsets.len());
        assert!(subsets.iter().all(|s| *s & mask == *s));
        assert_eq!(blocker_subsets(EMPTY), vec![EMPTY]);
    }
}
