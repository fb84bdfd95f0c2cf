/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The legality filter: pseudo-legal moves minus the ones that leave the
//! mover's own King attacked.

use crate::errors::IllegalMove;

use super::{movegen::pseudo_legal_moves, Board, Color, Move, MoveList};

/// Generates all legal moves for the side to move on `board`.
///
/// A legal move is a pseudo-legal move whose resulting board does not leave
/// the mover's King attacked. Each candidate is vetted by applying it to a
/// copy of the board and inspecting the successor; `board` itself is never
/// touched.
///
/// An empty result means the game is over: checkmate if the side to move is
/// currently in check, stalemate otherwise.
///
/// # Example
/// ```
/// # use arbiter::{legal_moves, Board};
/// let board = Board::standard();
/// assert_eq!(legal_moves(&board).len(), 20);
/// ```
pub fn legal_moves(board: &Board) -> MoveList {
    pseudo_legal_moves(board)
        .into_iter()
        .filter(|&mv| !leaves_king_exposed(board, mv))
        .collect()
}

/// Checks a single move descriptor for full legality on `board`.
///
/// Fails with [`IllegalMove::NotPseudoLegal`] if the descriptor is not among
/// the generated pseudo-legal moves at all, and [`IllegalMove::SelfCheck`] if
/// it is but would leave the mover's King attacked.
pub fn check_legal(board: &Board, mv: Move) -> Result<(), IllegalMove> {
    if !pseudo_legal_moves(board).contains(&mv) {
        return Err(IllegalMove::NotPseudoLegal);
    }

    if leaves_king_exposed(board, mv) {
        return Err(IllegalMove::SelfCheck);
    }

    Ok(())
}

/// Returns `true` if `color`'s King is attacked by the opponent on `board`.
#[inline(always)]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board.is_attacked(board.king_square(color), color.opponent())
}

/// Returns `true` if applying `mv` would leave the mover's King attacked.
fn leaves_king_exposed(board: &Board, mv: Move) -> bool {
    let mover = board.side_to_move();
    let next = board.apply(mv);
    next.is_attacked(next.king_square(mover), mover.opponent())
}
