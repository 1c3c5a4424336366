use crate::bitboard::{BitBoard, EMPTY};
use crate::error::Error;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};
use crate::tables::magic_helpers::{magic_mask, questions_and_answers, Slider};
use crate::tables::magic_numbers::{BISHOP_MAGICS, ROOK_MAGICS};

// This structure is for the "Magic Bitboard" lookup
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Magic {
    pub magic_number: BitBoard,
    pub mask: BitBoard,
    pub rightshift: u8,
}

impl Magic {
    /// Hash a board's occupancy down to a slot in this square's part of the table.
    #[inline]
    pub fn index(&self, blockers: BitBoard) -> usize {
        (self.magic_number * (blockers & self.mask)).to_size(self.rightshift)
    }
}

/// Sliding attacks for one piece type, for every square and every arrangement of blockers.
///
/// Each square owns `entries_per_square` consecutive slots of `moves`; the magic for that
/// square scatters its blocker subsets across them.
#[derive(Clone)]
pub struct SlidingTable {
    slider: Slider,
    magics: [Magic; NUM_SQUARES],
    moves: Box<[BitBoard]>,
}

impl SlidingTable {
    /// Build the table from the shipped magic numbers.
    pub fn generate(slider: Slider) -> Result<SlidingTable, Error> {
        let magic_numbers = match slider {
            Slider::Rook => &ROOK_MAGICS,
            Slider::Bishop => &BISHOP_MAGICS,
        };
        SlidingTable::with_magic_numbers(slider, magic_numbers)
    }

    /// Build the table from caller-supplied magic numbers.  Fails if any magic lets two blocker
    /// sets with different attacks land in the same slot.
    pub fn with_magic_numbers(
        slider: Slider,
        magic_numbers: &[u64; NUM_SQUARES],
    ) -> Result<SlidingTable, Error> {
        let per_square = slider.entries_per_square();
        let mut moves = vec![EMPTY; NUM_SQUARES * per_square].into_boxed_slice();
        let mut magics = [Magic::default(); NUM_SQUARES];

        for sq in ALL_SQUARES.iter() {
            let mask = magic_mask(*sq, slider);
            let magic = Magic {
                magic_number: BitBoard(magic_numbers[sq.to_index()]),
                mask,
                rightshift: (64 - mask.popcnt()) as u8,
            };
            let (questions, answers) = questions_and_answers(*sq, slider);
            let offset = sq.to_index() * per_square;

            for (question, answer) in questions.iter().zip(answers.iter()) {
                let index = magic.index(*question);
                let slot = &mut moves[offset + index];
                // A slider always attacks at least one square, so EMPTY means "unused".
                if *slot != EMPTY && *slot != *answer {
                    return Err(Error::MagicCollision { square: *sq, index });
                }
                *slot = *answer;
            }
            magics[sq.to_index()] = magic;
        }

        Ok(SlidingTable {
            slider,
            magics,
            moves,
        })
    }

    /// Get the moves for this slider on a particular square, given blockers blocking my
    /// movement.  Blockers of either color count; the first one on each ray is included.
    #[inline]
    pub fn attacks(&self, sq: Square, blockers: BitBoard) -> BitBoard {
        let magic = &self.magics[sq.to_index()];
        self.moves[sq.to_index() * self.slider.entries_per_square() + magic.index(blockers)]
    }

    #[inline]
    pub fn magic(&self, sq: Square) -> &Magic {
        &self.magics[sq.to_index()]
    }

    /// Number of slots, used or not.
    pub fn len(&self) -> usize {
        self.moves.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::rays::ray_attacks;
    use std::collections::HashMap;

    fn exhaustive(slider: Slider) {
        let table = SlidingTable::generate(slider).expect("shipped magics are collision free");
        for sq in ALL_SQUARES.iter() {
            let (questions, _) = questions_and_answers(*sq, slider);
            for question in questions {
                assert_eq!(
                    table.attacks(*sq, question),
                    ray_attacks(*sq, question, slider.directions()),
                    "{:?} on {} with blockers\n{}",
                    slider,
                    sq,
                    question
                );
            }
        }
    }

    #[test]
    fn rook_lookups_match_ray_casting() {
        exhaustive(Slider::Rook);
    }

    #[test]
    fn bishop_lookups_match_ray_casting() {
        exhaustive(Slider::Bishop);
    }

    #[test]
    fn no_destructive_collisions() {
        for slider in [Slider::Rook, Slider::Bishop].iter() {
            let table = SlidingTable::generate(*slider).expect("valid magics");
            for sq in ALL_SQUARES.iter() {
                let magic = table.magic(*sq);
                let (questions, answers) = questions_and_answers(*sq, *slider);
                let mut seen: HashMap<usize, BitBoard> = HashMap::new();
                for (question, answer) in questions.iter().zip(answers.iter()) {
                    let index = magic.index(*question);
                    assert!(index < slider.entries_per_square());
                    let previous = seen.entry(index).or_insert(*answer);
                    assert_eq!(*previous, *answer, "{:?} collision on {}", slider, sq);
                }
            }
        }
    }

    #[test]
    fn irrelevant_blockers_are_ignored() {
        let table = SlidingTable::generate(Slider::Rook).expect("valid magics");
        // Pieces on the edge and off the rook's lines change nothing.
        let noise = BitBoard::from_square(Square::D8)
            | BitBoard::from_square(Square::H4)
            | BitBoard::from_square(Square::B2)
            | BitBoard::from_square(Square::G7);
        assert_eq!(table.attacks(Square::D4, noise), table.attacks(Square::D4, EMPTY));
        assert_eq!(table.attacks(Square::D4, EMPTY).popcnt(), 14);
    }

    #[test]
    fn bad_magic_numbers_are_rejected() {
        let mut magic_numbers = ROOK_MAGICS;
        magic_numbers[Square::D4.to_index()] = 1;
        match SlidingTable::with_magic_numbers(Slider::Rook, &magic_numbers) {
            Err(Error::MagicCollision { square, .. }) => assert_eq!(square, Square::D4),
            _ => panic!("a magic of 1 cannot separate the d4 blockers"),
        }
    }
}
