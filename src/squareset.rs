/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{BitOr, BitOrAssign},
};

use crate::{File, Rank, Square};

/// A set of squares, stored as a `u64` with one bit per square.
///
/// Bit `n` corresponds to [`Square`] index `n`, so bit 0 is `a1` and bit 63 is `h8`.
/// Used to represent the squares a piece can currently reach (its "access set").
///
/// # Example
/// ```
/// # use rankrace::{Square, SquareSet};
/// let set = SquareSet::from_square(Square::A2) | SquareSet::from_square(Square::H2);
/// assert!(set.contains(Square::A2));
/// assert!(!set.contains(Square::A1));
/// assert_eq!(set.population(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct SquareSet(pub(crate) u64);

impl SquareSet {
    /// The set containing no squares.
    pub const EMPTY: Self = Self(0);

    /// Creates a new [`SquareSet`] from the provided bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    /// Creates a [`SquareSet`] containing only the provided [`Square`].
    #[inline(always)]
    pub const fn from_square(square: Square) -> Self {
        Self(1 << square.0)
    }

    /// Creates a [`SquareSet`] of all squares on the provided [`Rank`].
    #[inline(always)]
    pub const fn from_rank(rank: Rank) -> Self {
        Self(0xFF << (rank.0 * 8))
    }

    /// Fetches the raw bits of this [`SquareSet`].
    #[inline(always)]
    pub const fn inner(&self) -> u64 {
        self.0
    }

    /// Returns `true` if this set contains no squares.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the provided [`Square`] is a member of this set.
    #[inline(always)]
    pub const fn contains(&self, square: Square) -> bool {
        self.0 & (1 << square.0) != 0
    }

    /// Adds the provided [`Square`] to this set.
    #[inline(always)]
    pub fn insert(&mut self, square: Square) {
        self.0 |= 1 << square.0;
    }

    /// Number of squares in this set.
    #[inline(always)]
    pub const fn population(&self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Pops and returns the lowest-indexed [`Square`] in this set, if any.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.is_empty() {
            return None;
        }
        let square = Square(self.0.trailing_zeros() as u8);
        self.0 &= self.0 - 1;
        Some(square)
    }

    /// An iterator over the [`Square`]s in this set, in ascending index order.
    ///
    /// # Example
    /// ```
    /// # use rankrace::{Square, SquareSet};
    /// let set: SquareSet = [Square::A1, Square::B2].into_iter().collect();
    /// let squares: Vec<Square> = set.iter().collect();
    /// assert_eq!(squares, [Square::A1, Square::B2]);
    /// ```
    #[inline(always)]
    pub const fn iter(&self) -> SquareSetIter {
        SquareSetIter(*self)
    }
}

/// Iterator over the squares of a [`SquareSet`], lowest index first.
pub struct SquareSetIter(SquareSet);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_lsb()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.0.population() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for SquareSetIter {}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        SquareSetIter(self)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> Self {
        let mut set = Self::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl From<Square> for SquareSet {
    #[inline(always)]
    fn from(square: Square) -> Self {
        Self::from_square(square)
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for SquareSet {
    /// Displays this set as an `8x8` grid of `X` (member) and `.` (non-member),
    /// with rank eight on top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let square = Square::new(file, rank);
                let c = if self.contains(square) { 'X' } else { '.' };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SquareSet({:#018X})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_contains() {
        let mut set = SquareSet::EMPTY;
        assert!(set.is_empty());

        set.insert(Square::A1);
        set.insert(Square::H2);
        assert!(set.contains(Square::A1));
        assert!(set.contains(Square::H2));
        assert!(!set.contains(Square::B1));
        assert_eq!(set.population(), 2);
    }

    #[test]
    fn union_accumulates() {
        let mut set = SquareSet::from_square(Square::A1);
        set |= SquareSet::from_rank(Rank::EIGHT);

        assert!(set.contains(Square::A1));
        assert!(set.contains(Square::C8));
        assert_eq!(set.population(), 9);
    }

    #[test]
    fn rank_mask_covers_exactly_one_rank() {
        let eighth = SquareSet::from_rank(Rank::EIGHT);
        assert_eq!(eighth.population(), 8);
        for square in eighth {
            assert_eq!(square.rank(), Rank::EIGHT);
        }
    }

    #[test]
    fn iteration_is_ascending() {
        let set: SquareSet = [Square::H2, Square::A1, Square::B2].into_iter().collect();
        let squares: Vec<Square> = set.iter().collect();
        assert_eq!(squares, [Square::A1, Square::B2, Square::H2]);
    }
}
