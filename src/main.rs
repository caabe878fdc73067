/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::io;

use anyhow::{Context, Result};
use rankrace::{access_set, Access, Game, ReplCommand};

fn main() {
    if let Err(e) = repl() {
        eprintln!("{} encountered an error: {e}", env!("CARGO_PKG_NAME"));
    }
}

/// Loops endlessly to await input via `stdin`, dispatching each
/// successfully-parsed command against the current game.
fn repl() -> Result<()> {
    let mut game = Game::new();
    println!("{game}");

    let mut buffer = String::with_capacity(64);
    loop {
        // Clear the buffer, read input, and trim the trailing newline
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read line at the prompt")?;

        // For ctrl + d
        if 0 == bytes {
            return Ok(());
        }

        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }

        let cmd = match line.parse::<ReplCommand>() {
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match cmd {
            ReplCommand::Display => println!("{game}"),

            ReplCommand::Move { from, to } => {
                if game.try_move(from, to) {
                    println!("{game}");
                } else {
                    println!("illegal move: {from} {to}");
                }
            }

            ReplCommand::Access { square } => match game.board().piece_at(square) {
                Some(piece) => match access_set(piece, square, game.board(), None) {
                    Access::Reaches(set) => println!("{} on {square} reaches:\n{set}", piece.name()),
                    Access::ExposesKing => {
                        println!("{} on {square} attacks the enemy king", piece.name())
                    }
                },
                None => println!("no piece on {square}"),
            },

            ReplCommand::State => {
                println!("{} to move, {}", game.side_to_move().name(), game.outcome())
            }

            ReplCommand::New => {
                game = Game::new();
                println!("{game}");
            }

            ReplCommand::Exit => return Ok(()),
        }
    }
}
