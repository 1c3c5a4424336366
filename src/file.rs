use crate::error::Error;
use std::str::FromStr;

/// Describe a file (column) on a chess board
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// How many files are there?
pub const NUM_FILES: usize = 8;

/// Enumerate all files
pub const ALL_FILES: [File; NUM_FILES] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

impl File {
    /// Convert a `usize` into a `File` (the inverse of to_index).  If i > 7, wrap around.
    #[inline]
    pub fn from_index(i: usize) -> File {
        ALL_FILES[i & 7]
    }

    /// Convert this `File` into a `usize` from 0 to 7 inclusive.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The lowercase letter of this file.
    #[inline]
    pub fn to_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl FromStr for File {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some(c @ 'a'..='h') => Ok(File::from_index((c as u8 - b'a') as usize)),
            _ => Err(Error::InvalidFile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip() {
        for file in ALL_FILES.iter() {
            assert_eq!(file.to_char().to_string().parse::<File>(), Ok(*file));
        }
        assert_eq!("i".parse::<File>(), Err(Error::InvalidFile));
        assert_eq!("A".parse::<File>(), Err(Error::InvalidFile));
    }
}
