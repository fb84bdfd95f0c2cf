/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::Result;
use clap::Parser;

use arbiter::{
    legal_moves, perft, render_san, splitperft, Board, Cli, Command, Game, GameConfig,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Display { fen } => {
            let board = Board::from_fen(&fen)?;
            println!("{board}");
        }

        Command::Fen { moves } => {
            let game = play_through(&moves, false)?;
            println!("{}", game.board().to_fen());
        }

        Command::Moves { fen } => {
            let board = Board::from_fen(&fen)?;
            let mut sans: Vec<String> = legal_moves(&board)
                .into_iter()
                .map(|mv| render_san(&board, mv))
                .collect();
            sans.sort();
            println!("{}", sans.join(" "));
        }

        Command::Play { moves } => {
            let game = play_through(&moves, true)?;
            println!("{}", game.board());
        }

        Command::Perft { depth, fen } => {
            let board = Board::from_fen(&fen)?;
            println!("{}", perft(&board, depth));
        }

        Command::Splitperft { depth, fen } => {
            let board = Board::from_fen(&fen)?;
            splitperft(&board, depth);
        }
    }

    Ok(())
}

/// Submits each move in turn to a fresh game, optionally narrating the
/// status as it changes.
fn play_through(moves: &[String], narrate: bool) -> Result<Game> {
    let mut game = Game::new(GameConfig::default());

    for text in moves {
        let accepted = game
            .submit_move(text)
            .map_err(|err| anyhow::anyhow!("move {text:?}: {err}"))?;
        if narrate {
            println!("{}: {}", accepted.san, accepted.status);
        }
    }

    Ok(game)
}
