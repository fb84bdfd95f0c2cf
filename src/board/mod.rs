/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The board representation itself, castling rights, and FEN handling.
mod board;
/// The legality filter on top of pseudo-legal generation.
mod legal;
/// Pseudo-legal move generation.
mod movegen;
/// Move descriptors and flags.
mod moves;
/// Performance testing for move generation.
mod perft;
/// Pieces, their kinds, and their colors.
mod piece;
/// Files, ranks, and squares.
mod square;

pub use board::*;
pub use legal::*;
pub use movegen::*;
pub use moves::*;
pub use perft::*;
pub use piece::*;
pub use square::*;
