/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{legal::legal_moves, Board};

/// Perform a perft at the specified depth, collecting only the number of
/// leaf nodes (positions reachable in exactly `depth` legal moves).
///
/// Each recursion step applies a move to a *copy* of the board, so the
/// original is untouched throughout.
///
/// # Example
/// ```
/// # use arbiter::{perft, Board};
/// let board = Board::standard();
/// assert_eq!(perft(&board, 2), 400);
/// ```
pub fn perft(board: &Board, depth: usize) -> u64 {
    // Bulk counting: at depth 1, every legal move is a leaf.
    if depth == 1 {
        return legal_moves(board).len() as u64;
    } else if depth == 0 {
        return 1;
    }

    legal_moves(board)
        .into_iter()
        .map(|mv| perft(&board.apply(mv), depth - 1))
        .sum()
}

/// Perform a splitperft at the specified depth, printing the number of
/// leaf nodes reachable through each legal root move, and returning the total.
pub fn splitperft(board: &Board, depth: usize) -> u64 {
    let mut total = 0;

    for mv in legal_moves(board) {
        let nodes = if depth > 1 {
            perft(&board.apply(mv), depth - 1)
        } else {
            1
        };
        println!("{mv}\t{nodes}");
        total += nodes;
    }

    println!("\n{total}");
    total
}
