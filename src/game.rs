/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{access::is_legal_move, parse_move_pair, Board, Color, Rank, Square, SquareSet};

/// The overall state of a game.
///
/// Terminal states are absorbing: once a game leaves
/// [`Outcome::Unfinished`], no further move changes anything.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
pub enum Outcome {
    #[default]
    Unfinished,
    WhiteWon,
    BlackWon,
    Tie,
}

impl Outcome {
    /// Returns `true` if the game has ended.
    #[inline(always)]
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::Unfinished)
    }

    /// The canonical name of this [`Outcome`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unfinished => "UNFINISHED",
            Self::WhiteWon => "WHITE_WON",
            Self::BlackWon => "BLACK_WON",
            Self::Tie => "TIE",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A game of the variant: a [`Board`], whose turn it is, and the outcome.
///
/// The win condition is a race: a side wins by bringing its king to rank
/// eight. When White's king arrives first, Black is granted one reply: if
/// Black's king reaches rank eight on that reply the game is a tie,
/// otherwise White wins. Black's arrival on rank eight wins immediately.
///
/// Moves are submitted through [`Game::make_move`] (textual coordinates) or
/// [`Game::try_move`] (parsed [`Square`]s). Every rejection, for any reason,
/// is reported as a plain `false` and leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    /// The current board.
    board: Board,

    /// The side whose turn it is.
    to_move: Color,

    /// The game's overall state.
    outcome: Outcome,

    /// One-shot latch: set the first time White's king is seen on rank
    /// eight, granting Black a single reply. Never cleared.
    white_king_arrived: bool,
}

impl Game {
    /// Creates a new [`Game`] with the standard starting layout, White to
    /// move.
    #[inline(always)]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Creates a [`Game`] from a custom position.
    ///
    /// # Example
    /// ```
    /// # use rankrace::{Board, Color, Game, Piece, Square};
    /// let board = Board::from_placements(&[
    ///     (Piece::WHITE_KING, Square::A7),
    ///     (Piece::BLACK_KING, Square::H1),
    /// ]).unwrap();
    /// let mut game = Game::from_board(board, Color::White);
    /// assert!(game.make_move("a7", "a8"));
    /// ```
    #[inline(always)]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            outcome: Outcome::Unfinished,
            white_king_arrived: false,
        }
    }

    /// The current [`Board`].
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.to_move
    }

    /// The game's overall state.
    #[inline(always)]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Submits a move in textual coordinates, e.g. `"a2"` to `"a8"`.
    ///
    /// Returns `false`, leaving the game untouched, if either coordinate
    /// is malformed, the coordinates are identical, or the move is rejected
    /// by [`Game::try_move`].
    ///
    /// # Example
    /// ```
    /// # use rankrace::Game;
    /// let mut game = Game::new();
    /// assert!(game.make_move("a2", "a8"));   // the rook's file is open
    /// assert!(!game.make_move("h2", "h2"));  // degenerate pair
    /// assert!(!game.make_move("x9", "a1"));  // malformed
    /// ```
    #[inline(always)]
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        let Ok((from, to)) = parse_move_pair(from, to) else {
            return false;
        };
        self.try_move(from, to)
    }

    /// Submits a move as a pair of [`Square`]s.
    ///
    /// The full pipeline, in order: the game must be unfinished; the squares
    /// must differ; a piece of the side to move must stand on `from`; the
    /// per-kind legality check must accept. On success the move is applied
    /// atomically, the terminal rule is evaluated, and the turn passes to
    /// the other side.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        if self.outcome.is_over() {
            return false;
        }
        if from == to {
            return false;
        }

        let Some(piece) = self.board.piece_at(from) else {
            return false;
        };
        if piece.color() != self.to_move {
            return false;
        }

        if !is_legal_move(&self.board, from, to) {
            return false;
        }

        self.board.apply_move(from, to);
        self.evaluate_kings();
        self.to_move = self.to_move.opponent();
        true
    }

    /// Evaluates the variant's terminal rule after a successful move.
    ///
    /// White's first arrival on rank eight only sets the latch, and the game
    /// continues so Black can answer. On any later evaluation with White's
    /// king on rank eight, the game ends: a tie if Black's king stands on
    /// rank eight too, otherwise a White win. Black's arrival wins at once.
    /// Outcomes never revert.
    fn evaluate_kings(&mut self) {
        let goal = SquareSet::from_rank(Rank::EIGHT);

        if goal.contains(self.board.king_square(Color::White)) {
            if !self.white_king_arrived {
                self.white_king_arrived = true;
            } else if !goal.contains(self.board.king_square(Color::Black)) {
                self.outcome = Outcome::WhiteWon;
            } else {
                self.outcome = Outcome::Tie;
            }
        } else if goal.contains(self.board.king_square(Color::Black)) {
            self.outcome = Outcome::BlackWon;
        }
    }
}

impl Default for Game {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    /// The board grid, then the side to move and the outcome.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        write!(f, "{} to move, {}", self.to_move.name(), self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    /// A position with only the two kings, for terminal-rule tests.
    fn kings_only(white: Square, black: Square, to_move: Color) -> Game {
        let board = Board::from_placements(&[
            (Piece::WHITE_KING, white),
            (Piece::BLACK_KING, black),
        ])
        .unwrap();
        Game::from_board(board, to_move)
    }

    #[test]
    fn debug_output_includes_the_roster() {
        let game = Game::new();
        let debug = format!("{game:?}");

        // Board renders through its own Debug form, roster tokens included.
        assert!(debug.contains("wk@a1"));
        assert!(debug.contains("br@h2"));
    }

    #[test]
    fn black_cannot_move_first() {
        let mut game = Game::new();
        let before = game.clone();

        assert!(!game.make_move("h2", "h8"));
        assert_eq!(game, before);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn turn_alternates_after_successful_moves() {
        let mut game = Game::new();

        assert!(game.make_move("a2", "a8"));
        assert_eq!(game.side_to_move(), Color::Black);

        assert!(game.make_move("h2", "h7"));
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn rejections_leave_the_game_untouched() {
        let mut game = Game::new();
        let before = game.clone();

        // Malformed, degenerate, empty source, out of turn, own-color
        // destination, geometrically impossible.
        assert!(!game.make_move("a9", "a1"));
        assert!(!game.make_move("a2", "a2"));
        assert!(!game.make_move("e4", "e5"));
        assert!(!game.make_move("h2", "h5"));
        assert!(!game.make_move("a1", "a2"));
        assert!(!game.make_move("a2", "b3"));

        assert_eq!(game, before);
    }

    #[test]
    fn white_arrival_grants_black_one_reply() {
        let mut game = kings_only(Square::A7, Square::H1, Color::White);

        // First arrival sets the latch but does not end the game.
        assert!(game.make_move("a7", "a8"));
        assert_eq!(game.outcome(), Outcome::Unfinished);

        // Black's reply falls short of rank eight; evaluation after it ends
        // the game in White's favor.
        assert!(game.make_move("h1", "g1"));
        assert_eq!(game.outcome(), Outcome::WhiteWon);
    }

    #[test]
    fn black_reaching_rank_eight_on_the_reply_ties() {
        let mut game = kings_only(Square::A7, Square::H7, Color::White);

        assert!(game.make_move("a7", "a8"));
        assert_eq!(game.outcome(), Outcome::Unfinished);

        assert!(game.make_move("h7", "h8"));
        assert_eq!(game.outcome(), Outcome::Tie);
    }

    #[test]
    fn black_arrival_wins_immediately() {
        let mut game = kings_only(Square::A1, Square::H7, Color::Black);

        assert!(game.make_move("h7", "h8"));
        assert_eq!(game.outcome(), Outcome::BlackWon);
    }

    #[test]
    fn terminal_states_are_absorbing() {
        let mut game = kings_only(Square::A1, Square::H7, Color::Black);
        assert!(game.make_move("h7", "h8"));
        assert_eq!(game.outcome(), Outcome::BlackWon);

        let finished = game.clone();
        assert!(!game.make_move("a1", "a2"));
        assert!(!game.make_move("h8", "h7"));
        assert_eq!(game, finished);
    }

    #[test]
    fn capture_then_query_off_board_record() {
        // A rook capture: the victim stays queryable but out of play.
        let board = Board::from_placements(&[
            (Piece::WHITE_KING, Square::A1),
            (Piece::WHITE_ROOK, Square::D4),
            (Piece::BLACK_KNIGHT_1, Square::D6),
            (Piece::BLACK_KING, Square::H8),
        ])
        .unwrap();
        let mut game = Game::from_board(board, Color::White);

        assert!(game.try_move(Square::D4, Square::D6));

        let knight = game
            .board()
            .pieces(Color::Black)
            .find(|r| r.piece == Piece::BLACK_KNIGHT_1)
            .unwrap();
        assert_eq!(knight.position, None);
        assert_eq!(knight.piece.color(), Color::Black);
        assert_eq!(game.board().live_pieces(Color::Black).count(), 1);
    }
}
