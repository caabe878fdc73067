/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Not};

/// Represents the color of a player or piece.
///
/// White moves first, and therefore [`Color`] defaults to [`Color::White`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    /// Number of color variants.
    pub const COUNT: usize = 2;

    /// An array of both colors, starting with White.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::White, Self::Black]
    }

    /// Returns this [`Color`]'s opposite / enemy.
    ///
    /// # Example
    /// ```
    /// # use rankrace::Color;
    /// assert_eq!(Color::White.opponent(), Color::Black);
    /// assert_eq!(Color::Black.opponent(), Color::White);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Returns this [`Color`] as a `usize`, for indexing into lists.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Returns `true` if this [`Color`] is White.
    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        matches!(self, Self::White)
    }

    /// Single-character form of this [`Color`]: `'w'` or `'b'`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// Fetches a human-readable name for this [`Color`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Self;
    /// Negating [`Color::White`] yields [`Color::Black`] and vice versa.
    #[inline(always)]
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The kinds of piece this variant plays with.
///
/// There are no pawns or queens; each side fields one King, one Rook,
/// two Bishops, and two Knights.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    King,
    Rook,
    Bishop,
    Knight,
}

impl PieceKind {
    /// Number of piece kinds.
    pub const COUNT: usize = 4;

    /// An array of all 4 [`PieceKind`]s.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        use PieceKind::*;
        [King, Rook, Bishop, Knight]
    }

    /// Single-character form of this [`PieceKind`], always lowercase.
    ///
    /// # Example
    /// ```
    /// # use rankrace::PieceKind;
    /// assert_eq!(PieceKind::Knight.char(), 'n');
    /// ```
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::King => 'k',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
        }
    }

    /// Fetches a human-readable name for this [`PieceKind`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::King => "king",
            Self::Rook => "rook",
            Self::Bishop => "bishop",
            Self::Knight => "knight",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Distinguishes the two same-kind pieces of one color (the doubled Bishops
/// and Knights). Display-only; never consulted by movement logic.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Tag {
    One,
    Two,
}

impl Tag {
    /// The digit for this [`Tag`]: `'1'` or `'2'`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::One => '1',
            Self::Two => '2',
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A piece: a [`Color`], a [`PieceKind`], and (for the doubled kinds) an
/// identity [`Tag`].
///
/// A [`Piece`] knows nothing about its location; positions live on the
/// board's roster, and reachability is computed by [`crate::access_set`]
/// with the board passed in explicitly.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    tag: Option<Tag>,
}

impl Piece {
    pub const WHITE_KING: Self = Self::new(Color::White, PieceKind::King, None);
    pub const WHITE_ROOK: Self = Self::new(Color::White, PieceKind::Rook, None);
    pub const WHITE_BISHOP_1: Self = Self::new(Color::White, PieceKind::Bishop, Some(Tag::One));
    pub const WHITE_BISHOP_2: Self = Self::new(Color::White, PieceKind::Bishop, Some(Tag::Two));
    pub const WHITE_KNIGHT_1: Self = Self::new(Color::White, PieceKind::Knight, Some(Tag::One));
    pub const WHITE_KNIGHT_2: Self = Self::new(Color::White, PieceKind::Knight, Some(Tag::Two));

    pub const BLACK_KING: Self = Self::new(Color::Black, PieceKind::King, None);
    pub const BLACK_ROOK: Self = Self::new(Color::Black, PieceKind::Rook, None);
    pub const BLACK_BISHOP_1: Self = Self::new(Color::Black, PieceKind::Bishop, Some(Tag::One));
    pub const BLACK_BISHOP_2: Self = Self::new(Color::Black, PieceKind::Bishop, Some(Tag::Two));
    pub const BLACK_KNIGHT_1: Self = Self::new(Color::Black, PieceKind::Knight, Some(Tag::One));
    pub const BLACK_KNIGHT_2: Self = Self::new(Color::Black, PieceKind::Knight, Some(Tag::Two));

    /// Creates a new [`Piece`] from its parts.
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind, tag: Option<Tag>) -> Self {
        Self { color, kind, tag }
    }

    /// Fetches the [`Color`] of this [`Piece`].
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Fetches the [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Fetches the identity [`Tag`] of this [`Piece`], if it has one.
    #[inline(always)]
    pub const fn tag(&self) -> Option<Tag> {
        self.tag
    }

    /// Returns `true` if this [`Piece`] is a King.
    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Single-character form of this [`Piece`]: the kind's letter, uppercase
    /// for White and lowercase for Black. The identity tag is not included.
    ///
    /// # Example
    /// ```
    /// # use rankrace::Piece;
    /// assert_eq!(Piece::WHITE_KNIGHT_1.char(), 'N');
    /// assert_eq!(Piece::BLACK_ROOK.char(), 'r');
    /// ```
    #[inline(always)]
    pub const fn char(&self) -> char {
        if self.color.is_white() {
            self.kind.char().to_ascii_uppercase()
        } else {
            self.kind.char()
        }
    }

    /// Token form of this [`Piece`]: color, kind, and tag digit if present.
    ///
    /// # Example
    /// ```
    /// # use rankrace::Piece;
    /// assert_eq!(Piece::WHITE_KING.token(), "wk");
    /// assert_eq!(Piece::BLACK_BISHOP_2.token(), "bb2");
    /// ```
    #[inline(always)]
    pub fn token(&self) -> String {
        match self.tag {
            Some(tag) => format!("{}{}{}", self.color.char(), self.kind.char(), tag.char()),
            None => format!("{}{}", self.color.char(), self.kind.char()),
        }
    }

    /// Fetches a human-readable name for this [`Piece`].
    ///
    /// # Example
    /// ```
    /// # use rankrace::Piece;
    /// assert_eq!(Piece::WHITE_BISHOP_1.name(), "white bishop 1");
    /// assert_eq!(Piece::BLACK_KING.name(), "black king");
    /// ```
    #[inline(always)]
    pub fn name(&self) -> String {
        match self.tag {
            Some(tag) => format!("{} {} {}", self.color.name(), self.kind.name(), tag.char()),
            None => format!("{} {}", self.color.name(), self.kind.name()),
        }
    }
}

impl fmt::Display for Piece {
    /// Displays the single-character form, e.g. `N` for a white knight.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_include_tags() {
        assert_eq!(Piece::WHITE_ROOK.token(), "wr");
        assert_eq!(Piece::WHITE_KNIGHT_2.token(), "wn2");
        assert_eq!(Piece::BLACK_KNIGHT_1.token(), "bn1");
    }

    #[test]
    fn chars_encode_color_by_case() {
        assert_eq!(Piece::WHITE_KING.char(), 'K');
        assert_eq!(Piece::BLACK_KING.char(), 'k');
        assert_eq!(Piece::WHITE_BISHOP_1.char(), Piece::WHITE_BISHOP_2.char());
    }

    #[test]
    fn opponent_round_trips() {
        for color in Color::all() {
            assert_eq!(color.opponent().opponent(), color);
            assert_eq!(!color, color.opponent());
        }
    }
}
