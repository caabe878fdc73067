/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{bail, Result};

use crate::{access_set, Color, File, Piece, Rank, Square};

/// One entry of the board's piece roster.
///
/// A record whose `position` is [`None`] has been captured: it stays
/// queryable for the lifetime of the game but is excluded from play and
/// from all reachability scans.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PieceRecord {
    /// The piece this record describes.
    pub piece: Piece,
    /// Where the piece stands, or [`None`] once captured.
    pub position: Option<Square>,
}

impl PieceRecord {
    /// Returns `true` if this piece is still in play.
    #[inline(always)]
    pub const fn is_live(&self) -> bool {
        self.position.is_some()
    }
}

/// An `8x8` board owning the full piece complement of both sides.
///
/// Internally a mailbox of roster indices plus the roster itself: exactly 12
/// [`PieceRecord`]s (6 per side), owned for the game's lifetime. Captured
/// pieces stay in the roster with no position. The mailbox and the roster
/// positions are kept synchronized by every mutating operation.
///
/// Kings are never removed: there is exactly one live king per color at all
/// times.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Mailbox: each square holds the roster index of its occupant, if any.
    mailbox: [Option<u8>; Square::COUNT],

    /// The 12 piece records, in the fixed order of [`Board::ROSTER`].
    roster: [PieceRecord; Self::ROSTER_SIZE],
}

impl Board {
    /// Number of pieces per game: 6 per side.
    pub const ROSTER_SIZE: usize = 12;

    /// The full piece complement, kings first within each color.
    const ROSTER: [Piece; Self::ROSTER_SIZE] = [
        Piece::WHITE_KING,
        Piece::WHITE_ROOK,
        Piece::WHITE_BISHOP_1,
        Piece::WHITE_BISHOP_2,
        Piece::WHITE_KNIGHT_1,
        Piece::WHITE_KNIGHT_2,
        Piece::BLACK_KING,
        Piece::BLACK_ROOK,
        Piece::BLACK_BISHOP_1,
        Piece::BLACK_BISHOP_2,
        Piece::BLACK_KNIGHT_1,
        Piece::BLACK_KNIGHT_2,
    ];

    /// The standard starting layout: both sides packed into the two files
    /// nearest their own corner, kings on the back corner squares.
    const START_PLACEMENTS: [(Piece, Square); Self::ROSTER_SIZE] = [
        (Piece::WHITE_KING, Square::A1),
        (Piece::WHITE_ROOK, Square::A2),
        (Piece::WHITE_BISHOP_1, Square::B2),
        (Piece::WHITE_BISHOP_2, Square::B1),
        (Piece::WHITE_KNIGHT_1, Square::C2),
        (Piece::WHITE_KNIGHT_2, Square::C1),
        (Piece::BLACK_KING, Square::H1),
        (Piece::BLACK_ROOK, Square::H2),
        (Piece::BLACK_BISHOP_1, Square::G2),
        (Piece::BLACK_BISHOP_2, Square::G1),
        (Piece::BLACK_KNIGHT_1, Square::F2),
        (Piece::BLACK_KNIGHT_2, Square::F1),
    ];

    /// Creates a [`Board`] with the standard starting layout.
    ///
    /// # Example
    /// ```
    /// # use rankrace::{Board, Piece, Square};
    /// let board = Board::new();
    /// assert_eq!(board.piece_at(Square::A1), Some(Piece::WHITE_KING));
    /// assert_eq!(board.piece_at(Square::H2), Some(Piece::BLACK_ROOK));
    /// assert_eq!(board.piece_at(Square::E4), None);
    /// ```
    #[inline(always)]
    pub fn new() -> Self {
        // Safe unwrap: the starting layout places every roster piece exactly once.
        Self::from_placements(&Self::START_PLACEMENTS).unwrap()
    }

    /// Creates a [`Board`] with a custom arrangement of the fixed piece
    /// complement.
    ///
    /// Both kings must be placed; any roster piece not listed starts
    /// off-board (as if already captured). Fails on a piece outside the
    /// complement, a piece placed twice, or two pieces on one square.
    ///
    /// # Example
    /// ```
    /// # use rankrace::{Board, Piece, Square};
    /// let board = Board::from_placements(&[
    ///     (Piece::WHITE_KING, Square::A7),
    ///     (Piece::BLACK_KING, Square::H1),
    /// ]).unwrap();
    /// assert_eq!(board.piece_at(Square::A7), Some(Piece::WHITE_KING));
    ///
    /// // The white rook was not placed, so it is off-board but queryable.
    /// let rook = board.pieces(rankrace::Color::White)
    ///     .find(|r| r.piece == Piece::WHITE_ROOK)
    ///     .unwrap();
    /// assert_eq!(rook.position, None);
    /// ```
    pub fn from_placements(placements: &[(Piece, Square)]) -> Result<Self> {
        let mut board = Self {
            mailbox: [None; Square::COUNT],
            roster: Self::ROSTER.map(|piece| PieceRecord {
                piece,
                position: None,
            }),
        };

        for (piece, square) in placements {
            let Some(index) = Self::ROSTER.iter().position(|p| p == piece) else {
                bail!("Piece not in this variant's complement: {piece:?}");
            };

            if board.roster[index].position.is_some() {
                bail!("Piece placed twice: {piece:?}");
            }
            if board.mailbox[*square].is_some() {
                bail!("Square occupied twice: {square}");
            }

            board.roster[index].position = Some(*square);
            board.mailbox[*square] = Some(index as u8);
        }

        for color in Color::all() {
            if !board.roster[Self::king_index(color)].is_live() {
                bail!("Missing {} king", color.name());
            }
        }

        Ok(board)
    }

    /// Roster index of the given color's king. Kings lead their color's
    /// block in [`Board::ROSTER`].
    #[inline(always)]
    const fn king_index(color: Color) -> usize {
        color.index() * (Self::ROSTER_SIZE / 2)
    }

    /// Fetches the [`Piece`] on the provided [`Square`], if any.
    #[inline(always)]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.mailbox[square].map(|index| self.roster[index as usize].piece)
    }

    /// An iterator over the provided color's roster records, captured pieces
    /// included.
    #[inline(always)]
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &PieceRecord> + '_ {
        self.roster
            .iter()
            .filter(move |record| record.piece.color() == color)
    }

    /// An iterator over the provided color's pieces still in play, with
    /// their positions.
    #[inline(always)]
    pub fn live_pieces(&self, color: Color) -> impl Iterator<Item = (Piece, Square)> + '_ {
        self.pieces(color)
            .filter_map(|record| record.position.map(|square| (record.piece, square)))
    }

    /// The square the provided color's king stands on.
    #[inline(always)]
    pub fn king_square(&self, color: Color) -> Square {
        // Safe unwrap: kings are never captured, so their records always
        // hold a position.
        self.roster[Self::king_index(color)]
            .position
            .expect("kings are never removed from the board")
    }

    /// The [`Rank`] the provided color's king stands on.
    ///
    /// The variant is a race: games end based on whether the kings have
    /// reached [`Rank::EIGHT`].
    #[inline(always)]
    pub fn king_rank(&self, color: Color) -> Rank {
        self.king_square(color).rank()
    }

    /// The board-wide self-check validator.
    ///
    /// Recomputes the access set of *every* live piece on the board, both
    /// colors, passing `vacated` through as each piece's hypothetical-vacate
    /// argument. Returns `false` as soon as any computation signals that a
    /// king is reachable, meaning the candidate move under evaluation would
    /// leave some king attacked.
    pub fn no_king_exposed(&self, vacated: Option<Square>) -> bool {
        for record in &self.roster {
            let Some(square) = record.position else {
                continue;
            };

            if access_set(record.piece, square, self, vacated).exposes_king() {
                return false;
            }
        }

        true
    }

    /// Moves the piece on `from` to `to`, marking any enemy occupant of `to`
    /// as captured. Legality must already have been established.
    ///
    /// Keeps the mailbox and roster synchronized: `from` is emptied, `to`
    /// holds the mover, and a captured piece's record loses its position but
    /// stays in the roster.
    pub(crate) fn apply_move(&mut self, from: Square, to: Square) {
        debug_assert!(self.mailbox[from].is_some(), "no piece on {from}");

        if let Some(captured) = self.mailbox[to] {
            self.roster[captured as usize].position = None;
        }

        let mover = self.mailbox[from].take();
        self.mailbox[to] = mover;
        if let Some(index) = mover {
            self.roster[index as usize].position = Some(to);
        }
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Displays this board as an `8x8` grid with rank eight on top. Each
    /// piece shows as its single-character form; empty squares show as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}|")?;
            for file in File::iter() {
                let square = Square::new(file, rank);
                let c = self.piece_at(square).map(|p| p.char()).unwrap_or('.');
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }

        write!(f, " +")?;
        for _ in File::iter() {
            write!(f, "--")?;
        }
        write!(f, "\n  ")?;
        for file in File::iter() {
            write!(f, " {file}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    /// The grid of [`fmt::Display`], followed by each side's roster tokens
    /// and positions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        for color in Color::all() {
            write!(f, "\n{}:", color.name())?;
            for record in self.pieces(color) {
                match record.position {
                    Some(square) => write!(f, " {}@{square}", record.piece.token())?,
                    None => write!(f, " {}@off", record.piece.token())?,
                }
            }
        }
        Ok(())
    }
}
