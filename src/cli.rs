/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use clap::Parser;

use crate::Square;

/// A command typed at the interactive prompt.
///
/// The rules engine itself performs no I/O; this enum and the binary's input
/// loop are a thin front end that drives a [`crate::Game`] through its public
/// API.
#[derive(Debug, Clone, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<COMMAND>")
)]
pub enum ReplCommand {
    /// Print a visual representation of the current board.
    #[command(alias = "d")]
    Display,

    /// Submit a move for the side to move, e.g. `move a2 a8`.
    ///
    /// Illegal or out-of-turn moves are rejected and leave the game unchanged.
    #[command(alias = "m")]
    Move { from: Square, to: Square },

    /// Show the squares the piece on the given square can currently reach.
    #[command(alias = "a")]
    Access { square: Square },

    /// Print the game outcome and the side to move.
    #[command(alias = "s")]
    State,

    /// Start a new game from the standard layout.
    New,

    /// Quit.
    #[command(aliases = ["quit", "q"])]
    Exit,
}

impl FromStr for ReplCommand {
    type Err = clap::Error;
    /// Attempt to parse a [`ReplCommand`] from a line of input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse_from(s.split_ascii_whitespace())
    }
}
