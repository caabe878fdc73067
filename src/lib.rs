/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Rules engine for a racing-kings chess variant with a reduced piece set.
//!
//! Each side fields one King, one Rook, two Bishops, and two Knights, packed
//! into opposite corners of the first two ranks. Pieces move as in standard
//! chess, but there is no check or checkmate: a move that would leave either
//! king attacked is simply illegal, and the game is won by racing your king to
//! the eighth rank. If White's king arrives first, Black gets one reply to
//! reach the eighth rank as well, in which case the game is a tie. If Black's
//! king arrives first, Black wins outright.
//!
//! The crate's entry point is [`Game`], which owns a [`Board`] and enforces
//! turn order, move legality, and the end-of-game rule:
//!
//! ```
//! use rankrace::{Game, Outcome};
//!
//! let mut game = Game::new();
//! assert!(game.make_move("a2", "a8")); // White's rook runs up the a-file
//! assert!(!game.make_move("h2", "g5")); // Rooks don't move like that
//! assert_eq!(game.outcome(), Outcome::Unfinished);
//! ```

/// Reachability of pieces, and move legality built on top of it.
mod access;

/// The board: occupancy by square and the fate of every piece.
mod board;

/// Command parsing for the interactive prompt.
mod cli;

/// Turn order, move application, and the end-of-game rule.
mod game;

/// Colors, piece kinds, and the twelve pieces of a game.
mod piece;

/// Squares, files, and ranks of the 8x8 board.
mod square;

/// Sets of squares, packed into a `u64`.
mod squareset;

pub use access::*;
pub use board::*;
pub use cli::*;
pub use game::*;
pub use piece::*;
pub use square::*;
pub use squareset::*;
