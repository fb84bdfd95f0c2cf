/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::{Parser, Subcommand};

use crate::board::FEN_STARTPOS;

/// A chess rules engine: algebraic notation in, validated games out.
#[derive(Debug, Clone, Parser)]
#[command(about, version, rename_all = "lower")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a visual representation of a position.
    #[command(alias = "d")]
    Display {
        /// The position to display, as a FEN string.
        #[arg(default_value = FEN_STARTPOS)]
        fen: String,
    },

    /// Generate and print the FEN string of a position after a sequence of moves.
    Fen {
        /// Moves to apply from the starting position, in algebraic notation.
        moves: Vec<String>,
    },

    /// Show all legal moves in a position, in algebraic notation.
    Moves {
        /// The position to inspect, as a FEN string.
        #[arg(default_value = FEN_STARTPOS)]
        fen: String,
    },

    /// Play through a sequence of moves, printing the status after each.
    Play {
        /// Moves to apply from the starting position, in algebraic notation.
        moves: Vec<String>,
    },

    /// Count all positions reachable in exactly `depth` legal moves.
    Perft {
        /// The depth to search to.
        depth: usize,

        /// The position to search from, as a FEN string.
        #[arg(default_value = FEN_STARTPOS)]
        fen: String,
    },

    /// Like perft, but with a per-root-move breakdown of the leaf counts.
    #[command(alias = "sperft")]
    Splitperft {
        /// The depth to search to.
        depth: usize,

        /// The position to search from, as a FEN string.
        #[arg(default_value = FEN_STARTPOS)]
        fen: String,
    },
}
