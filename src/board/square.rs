/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Result};

use super::Color;

/// A file (column) on a chess board, `a` through `h`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct File(pub(crate) u8);

impl File {
    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);

    /// Number of files on the board.
    pub const COUNT: usize = 8;

    /// Returns an iterator over all files, from `a` to `h`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Creates a new [`File`] from the provided index.
    ///
    /// The index must be `[0, 7]` or else an error is returned.
    #[inline(always)]
    pub fn new(file: u8) -> Result<Self> {
        if file >= Self::COUNT as u8 {
            bail!("Invalid file index: Must be between [0,7]. Got {file}");
        }
        Ok(Self(file))
    }

    /// Creates a new [`File`] from a character, `'a'` through `'h'`.
    ///
    /// # Example
    /// ```
    /// # use arbiter::File;
    /// assert_eq!(File::from_char('c').unwrap(), File::C);
    /// assert!(File::from_char('x').is_err());
    /// ```
    #[inline(always)]
    pub fn from_char(file: char) -> Result<Self> {
        if !('a'..='h').contains(&file) {
            bail!("Invalid file character: Must be between [a,h]. Got {file:?}");
        }
        Ok(Self(file as u8 - b'a'))
    }

    /// Converts this [`File`] to its character, `'a'` through `'h'`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'a' + self.0) as char
    }

    /// Fetches the inner index value, for use when indexing into lists.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// A rank (row) on a chess board, `1` through `8`.
///
/// Rank `1` is White's back rank, rank `8` is Black's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Rank(pub(crate) u8);

impl Rank {
    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);
    pub const FIVE: Self = Self(4);
    pub const SIX: Self = Self(5);
    pub const SEVEN: Self = Self(6);
    pub const EIGHT: Self = Self(7);

    /// Number of ranks on the board.
    pub const COUNT: usize = 8;

    /// Returns an iterator over all ranks, from `1` to `8`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Creates a new [`Rank`] from the provided index.
    ///
    /// The index must be `[0, 7]` or else an error is returned.
    #[inline(always)]
    pub fn new(rank: u8) -> Result<Self> {
        if rank >= Self::COUNT as u8 {
            bail!("Invalid rank index: Must be between [0,7]. Got {rank}");
        }
        Ok(Self(rank))
    }

    /// Creates a new [`Rank`] from a character, `'1'` through `'8'`.
    #[inline(always)]
    pub fn from_char(rank: char) -> Result<Self> {
        if !('1'..='8').contains(&rank) {
            bail!("Invalid rank character: Must be between [1,8]. Got {rank:?}");
        }
        Ok(Self(rank as u8 - b'1'))
    }

    /// Converts this [`Rank`] to its character, `'1'` through `'8'`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'1' + self.0) as char
    }

    /// Fetches the inner index value, for use when indexing into lists.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The back rank of the provided [`Color`]: `1` for White, `8` for Black.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Color, Rank};
    /// assert_eq!(Rank::back(Color::White), Rank::ONE);
    /// assert_eq!(Rank::back(Color::Black), Rank::EIGHT);
    /// ```
    #[inline(always)]
    pub const fn back(color: Color) -> Self {
        match color {
            Color::White => Self::ONE,
            Color::Black => Self::EIGHT,
        }
    }

    /// The home rank of the provided [`Color`]'s pawns: `2` for White, `7` for Black.
    #[inline(always)]
    pub const fn pawn(color: Color) -> Self {
        match color {
            Color::White => Self::TWO,
            Color::Black => Self::SEVEN,
        }
    }

    /// The promotion rank of the provided [`Color`]: `8` for White, `1` for Black.
    #[inline(always)]
    pub const fn promotion(color: Color) -> Self {
        match color {
            Color::White => Self::EIGHT,
            Color::Black => Self::ONE,
        }
    }
}

/// A single square on an `8x8` chess board.
///
/// Encoded as `file + rank * 8` ([Least Significant File Mapping](https://www.chessprogramming.org/Square_Mapping_Considerations#Deduction_on_Files_and_Ranks)):
/// ```text
/// 8| 56 57 58 59 60 61 62 63
/// 7| 48 49 50 51 52 53 54 55
/// 6| 40 41 42 43 44 45 46 47
/// 5| 32 33 34 35 36 37 38 39
/// 4| 24 25 26 27 28 29 30 31
/// 3| 16 17 18 19 20 21 22 23
/// 2|  8  9 10 11 12 13 14 15
/// 1|  0  1  2  3  4  5  6  7
///  +------------------------
///    a  b  c  d  e  f  g  h
/// ```
///
/// Off-board coordinates are never representable; arithmetic that would leave
/// the board yields `None` (see [`Square::try_offset`]).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Square(pub(crate) u8);

impl Square {
    pub const A1: Self = Self::new(File::A, Rank::ONE);
    pub const B1: Self = Self::new(File::B, Rank::ONE);
    pub const C1: Self = Self::new(File::C, Rank::ONE);
    pub const D1: Self = Self::new(File::D, Rank::ONE);
    pub const E1: Self = Self::new(File::E, Rank::ONE);
    pub const F1: Self = Self::new(File::F, Rank::ONE);
    pub const G1: Self = Self::new(File::G, Rank::ONE);
    pub const H1: Self = Self::new(File::H, Rank::ONE);

    pub const A2: Self = Self::new(File::A, Rank::TWO);
    pub const B2: Self = Self::new(File::B, Rank::TWO);
    pub const C2: Self = Self::new(File::C, Rank::TWO);
    pub const D2: Self = Self::new(File::D, Rank::TWO);
    pub const E2: Self = Self::new(File::E, Rank::TWO);
    pub const F2: Self = Self::new(File::F, Rank::TWO);
    pub const G2: Self = Self::new(File::G, Rank::TWO);
    pub const H2: Self = Self::new(File::H, Rank::TWO);

    pub const A3: Self = Self::new(File::A, Rank::THREE);
    pub const B3: Self = Self::new(File::B, Rank::THREE);
    pub const C3: Self = Self::new(File::C, Rank::THREE);
    pub const D3: Self = Self::new(File::D, Rank::THREE);
    pub const E3: Self = Self::new(File::E, Rank::THREE);
    pub const F3: Self = Self::new(File::F, Rank::THREE);
    pub const G3: Self = Self::new(File::G, Rank::THREE);
    pub const H3: Self = Self::new(File::H, Rank::THREE);

    pub const A4: Self = Self::new(File::A, Rank::FOUR);
    pub const B4: Self = Self::new(File::B, Rank::FOUR);
    pub const C4: Self = Self::new(File::C, Rank::FOUR);
    pub const D4: Self = Self::new(File::D, Rank::FOUR);
    pub const E4: Self = Self::new(File::E, Rank::FOUR);
    pub const F4: Self = Self::new(File::F, Rank::FOUR);
    pub const G4: Self = Self::new(File::G, Rank::FOUR);
    pub const H4: Self = Self::new(File::H, Rank::FOUR);

    pub const A5: Self = Self::new(File::A, Rank::FIVE);
    pub const B5: Self = Self::new(File::B, Rank::FIVE);
    pub const C5: Self = Self::new(File::C, Rank::FIVE);
    pub const D5: Self = Self::new(File::D, Rank::FIVE);
    pub const E5: Self = Self::new(File::E, Rank::FIVE);
    pub const F5: Self = Self::new(File::F, Rank::FIVE);
    pub const G5: Self = Self::new(File::G, Rank::FIVE);
    pub const H5: Self = Self::new(File::H, Rank::FIVE);

    pub const A6: Self = Self::new(File::A, Rank::SIX);
    pub const B6: Self = Self::new(File::B, Rank::SIX);
    pub const C6: Self = Self::new(File::C, Rank::SIX);
    pub const D6: Self = Self::new(File::D, Rank::SIX);
    pub const E6: Self = Self::new(File::E, Rank::SIX);
    pub const F6: Self = Self::new(File::F, Rank::SIX);
    pub const G6: Self = Self::new(File::G, Rank::SIX);
    pub const H6: Self = Self::new(File::H, Rank::SIX);

    pub const A7: Self = Self::new(File::A, Rank::SEVEN);
    pub const B7: Self = Self::new(File::B, Rank::SEVEN);
    pub const C7: Self = Self::new(File::C, Rank::SEVEN);
    pub const D7: Self = Self::new(File::D, Rank::SEVEN);
    pub const E7: Self = Self::new(File::E, Rank::SEVEN);
    pub const F7: Self = Self::new(File::F, Rank::SEVEN);
    pub const G7: Self = Self::new(File::G, Rank::SEVEN);
    pub const H7: Self = Self::new(File::H, Rank::SEVEN);

    pub const A8: Self = Self::new(File::A, Rank::EIGHT);
    pub const B8: Self = Self::new(File::B, Rank::EIGHT);
    pub const C8: Self = Self::new(File::C, Rank::EIGHT);
    pub const D8: Self = Self::new(File::D, Rank::EIGHT);
    pub const E8: Self = Self::new(File::E, Rank::EIGHT);
    pub const F8: Self = Self::new(File::F, Rank::EIGHT);
    pub const G8: Self = Self::new(File::G, Rank::EIGHT);
    pub const H8: Self = Self::new(File::H, Rank::EIGHT);

    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Returns an iterator over all 64 squares, from `a1` to `h8`.
    ///
    /// # Example
    /// ```
    /// # use arbiter::Square;
    /// let mut iter = Square::iter();
    /// assert_eq!(iter.next().unwrap(), Square::A1);
    /// assert_eq!(iter.last().unwrap(), Square::H8);
    /// ```
    #[inline(always)]
    pub fn iter() -> impl ExactSizeIterator<Item = Self> + DoubleEndedIterator<Item = Self> {
        (0..Self::COUNT as u8).map(Self)
    }

    /// Creates a new [`Square`] from the provided [`File`] and [`Rank`].
    ///
    /// # Example
    /// ```
    /// # use arbiter::{File, Rank, Square};
    /// assert_eq!(Square::new(File::C, Rank::FOUR), Square::C4);
    /// ```
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self(rank.0 * 8 + file.0)
    }

    /// Creates a new [`Square`] from the provided index value.
    ///
    /// The index must be `[0, 63]` or else an error is returned.
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= Self::COUNT {
            bail!("Invalid square index: Must be between [0,63]. Got {index}");
        }
        Ok(Self(index as u8))
    }

    /// Fetches the [`File`] of this [`Square`].
    #[inline(always)]
    pub const fn file(&self) -> File {
        File(self.0 % 8)
    }

    /// Fetches the [`Rank`] of this [`Square`].
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        Rank(self.0 / 8)
    }

    /// Fetches the [`File`] and [`Rank`] of this [`Square`].
    #[inline(always)]
    pub const fn parts(&self) -> (File, Rank) {
        (self.file(), self.rank())
    }

    /// Fetches the inner index value, for use when indexing into lists.
    ///
    /// # Example
    /// ```
    /// # use arbiter::Square;
    /// assert_eq!(Square::C4.index(), 26);
    /// ```
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Offsets this [`Square`] by the provided file and rank deltas.
    ///
    /// Returns `None` if the result would fall off the board, so ray walks
    /// and offset tables never manufacture an out-of-range square.
    ///
    /// # Example
    /// ```
    /// # use arbiter::Square;
    /// assert_eq!(Square::E4.try_offset(1, 2), Some(Square::F6));
    /// assert_eq!(Square::A1.try_offset(-1, 0), None);
    /// assert_eq!(Square::H8.try_offset(0, 1), None);
    /// ```
    #[inline(always)]
    pub const fn try_offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file().0 as i8 + file_delta;
        let rank = self.rank().0 as i8 + rank_delta;

        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Self::new(File(file as u8), Rank(rank as u8)))
        }
    }

    /// The square one rank closer to the promotion rank of `color`.
    ///
    /// Returns `None` when already on the final rank.
    #[inline(always)]
    pub const fn forward(self, color: Color) -> Option<Self> {
        match color {
            Color::White => self.try_offset(0, 1),
            Color::Black => self.try_offset(0, -1),
        }
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.char(), self.0)
    }
}

impl fmt::Display for Square {
    /// A square displays in coordinate notation, like `e4`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} ({})", self.file(), self.rank(), self.0)
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Parses a square from coordinate notation, like `e4`.
    ///
    /// # Example
    /// ```
    /// # use arbiter::Square;
    /// assert_eq!("g5".parse::<Square>().unwrap(), Square::G5);
    /// assert!("j9".parse::<Square>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            bail!("Invalid square: Must be exactly two characters, like \"e4\". Got {s:?}");
        };

        Ok(Self::new(File::from_char(file)?, Rank::from_char(rank)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_parts_round_trip() {
        for square in Square::iter() {
            assert_eq!(Square::new(square.file(), square.rank()), square);
        }
    }

    #[test]
    fn offsets_stay_on_board() {
        assert_eq!(Square::A1.try_offset(-1, -1), None);
        assert_eq!(Square::H1.try_offset(1, 0), None);
        assert_eq!(Square::D4.try_offset(2, -1), Some(Square::F3));
        assert_eq!(Square::H8.forward(Color::White), None);
        assert_eq!(Square::H8.forward(Color::Black), Some(Square::H7));
    }

    #[test]
    fn parse_and_display() {
        for square in Square::iter() {
            let text = square.to_string();
            assert_eq!(text.parse::<Square>().unwrap(), square);
        }
        assert!("e9".parse::<Square>().is_err());
        assert!("i4".parse::<Square>().is_err());
        assert!("e44".parse::<Square>().is_err());
    }
}
