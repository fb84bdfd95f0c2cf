/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The board model, move generation, and the legality filter.
mod board;

/// Command-line interface definitions.
mod cli;

/// Errors produced when submitting moves.
mod errors;

/// The game state machine: submission, status, and draw tracking.
mod game;

/// Standard Algebraic Notation parsing and rendering.
mod san;

pub use board::*;
pub use cli::*;
pub use errors::*;
pub use game::*;
pub use san::*;
