/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Pseudo-legal move generation.
//!
//! Everything here obeys per-piece movement geometry and occupancy only.
//! Whether a move would leave the mover's own King in check is deliberately
//! not this module's concern; see [`legal`](super::legal) for that filter.

use super::{Board, Color, File, Move, MoveFlag, MoveList, Piece, PieceKind, Rank, Square};

/// Knight jump offsets, as (file, rank) deltas.
pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King step offsets, as (file, rank) deltas.
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Ray directions for Rooks (and half of a Queen).
pub(crate) const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Ray directions for Bishops (and the other half of a Queen).
pub(crate) const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Generates all pseudo-legal moves for the side to move on `board`.
///
/// Pseudo-legal means the geometry and occupancy rules hold, but the mover's
/// own King may be left attacked afterward. Castling descriptors are the one
/// exception where attack information participates: the through-check rules
/// are part of castling's *geometry*, so they are enforced here.
///
/// # Example
/// ```
/// # use arbiter::{pseudo_legal_moves, Board};
/// let board = Board::standard();
/// // 16 pawn moves and 4 knight moves.
/// assert_eq!(pseudo_legal_moves(&board).len(), 20);
/// ```
pub fn pseudo_legal_moves(board: &Board) -> MoveList {
    let mut moves = MoveList::new();
    let color = board.side_to_move();

    for (square, piece) in board.pieces(color) {
        match piece.kind() {
            PieceKind::Pawn => pawn_moves(board, square, color, &mut moves),
            PieceKind::Knight => {
                leaper_moves(board, square, color, PieceKind::Knight, &KNIGHT_DELTAS, &mut moves)
            }
            PieceKind::Bishop => {
                slider_moves(board, square, color, PieceKind::Bishop, &DIAGONAL_RAYS, &mut moves)
            }
            PieceKind::Rook => {
                slider_moves(board, square, color, PieceKind::Rook, &ORTHOGONAL_RAYS, &mut moves)
            }
            PieceKind::Queen => {
                slider_moves(board, square, color, PieceKind::Queen, &ORTHOGONAL_RAYS, &mut moves);
                slider_moves(board, square, color, PieceKind::Queen, &DIAGONAL_RAYS, &mut moves);
            }
            PieceKind::King => {
                leaper_moves(board, square, color, PieceKind::King, &KING_DELTAS, &mut moves)
            }
        }
    }

    castle_moves(board, color, &mut moves);

    moves
}

/// Pawn pushes, captures, and promotions.
///
/// A pawn reaching its final rank never yields a plain move; it yields one
/// descriptor per promotable kind, four in total.
fn pawn_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    // Pushes: one square forward, or two from the home rank if both are empty.
    if let Some(one) = from.forward(color) {
        if board.piece_at(one).is_none() {
            push_pawn_move(moves, from, one, None, color);

            if from.rank() == Rank::pawn(color) {
                if let Some(two) = one.forward(color) {
                    if board.piece_at(two).is_none() {
                        moves.push(Move::new(
                            from,
                            two,
                            PieceKind::Pawn,
                            None,
                            MoveFlag::DoublePush,
                        ));
                    }
                }
            }
        }
    }

    // Captures: diagonally forward, onto occupied enemy squares only.
    let rank_delta = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    for file_delta in [-1, 1] {
        if let Some(to) = from.try_offset(file_delta, rank_delta) {
            if let Some(victim) = board.piece_at(to) {
                if !victim.is(color) {
                    push_pawn_move(moves, from, to, Some(victim.kind()), color);
                }
            }
        }
    }
}

/// Emits a pawn move, fanning out into the four promotion descriptors when
/// the destination is the final rank.
fn push_pawn_move(
    moves: &mut MoveList,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    color: Color,
) {
    if to.rank() == Rank::promotion(color) {
        for kind in PieceKind::promotions() {
            moves.push(Move::new(
                from,
                to,
                PieceKind::Pawn,
                captured,
                MoveFlag::Promotion(kind),
            ));
        }
    } else {
        moves.push(Move::new(from, to, PieceKind::Pawn, captured, MoveFlag::Quiet));
    }
}

/// Fixed-offset movement for Knights and Kings.
fn leaper_moves(
    board: &Board,
    from: Square,
    color: Color,
    kind: PieceKind,
    deltas: &[(i8, i8); 8],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in deltas {
        let Some(to) = from.try_offset(file_delta, rank_delta) else {
            continue;
        };

        match board.piece_at(to) {
            None => moves.push(Move::quiet(from, to, kind)),
            Some(victim) if !victim.is(color) => {
                moves.push(Move::capture(from, to, kind, victim.kind()))
            }
            Some(_) => {} // own piece blocks
        }
    }
}

/// Ray-walking movement for Bishops, Rooks, and Queens.
///
/// Each ray runs until the board edge or the first occupied square: an own
/// piece blocks without inclusion, an enemy piece blocks with inclusion as a
/// capture.
fn slider_moves(
    board: &Board,
    from: Square,
    color: Color,
    kind: PieceKind,
    rays: &[(i8, i8); 4],
    moves: &mut MoveList,
) {
    for &(file_delta, rank_delta) in rays {
        let mut current = from;
        while let Some(to) = current.try_offset(file_delta, rank_delta) {
            current = to;
            match board.piece_at(to) {
                None => moves.push(Move::quiet(from, to, kind)),
                Some(victim) => {
                    if !victim.is(color) {
                        moves.push(Move::capture(from, to, kind, victim.kind()));
                    }
                    break;
                }
            }
        }
    }
}

/// Castling descriptors for both wings.
///
/// Generated only when the corresponding right is held, every square between
/// King and Rook is empty, and neither the King's square nor any square it
/// passes through (destination included) is attacked by the opponent.
fn castle_moves(board: &Board, color: Color, moves: &mut MoveList) {
    let back = Rank::back(color);
    let king_from = Square::new(File::E, back);

    // In play the rights bookkeeping guarantees the King and Rook sit on
    // their home squares; arbitrary FEN input may not, so verify.
    if board.piece_at(king_from) != Some(Piece::new(color, PieceKind::King)) {
        return;
    }

    let rook = Piece::new(color, PieceKind::Rook);
    let opponent = color.opponent();
    let rights = board.castling_rights(color);

    if rights.short() {
        let f = Square::new(File::F, back);
        let g = Square::new(File::G, back);

        if board.piece_at(Square::new(File::H, back)) == Some(rook)
            && board.piece_at(f).is_none()
            && board.piece_at(g).is_none()
            && !board.is_attacked(king_from, opponent)
            && !board.is_attacked(f, opponent)
            && !board.is_attacked(g, opponent)
        {
            moves.push(Move::new(
                king_from,
                g,
                PieceKind::King,
                None,
                MoveFlag::ShortCastle,
            ));
        }
    }

    if rights.long() {
        let d = Square::new(File::D, back);
        let c = Square::new(File::C, back);
        let b = Square::new(File::B, back);

        // The b-square must be empty but may be attacked; the King never
        // passes through it.
        if board.piece_at(Square::new(File::A, back)) == Some(rook)
            && board.piece_at(d).is_none()
            && board.piece_at(c).is_none()
            && board.piece_at(b).is_none()
            && !board.is_attacked(king_from, opponent)
            && !board.is_attacked(d, opponent)
            && !board.is_attacked(c, opponent)
        {
            moves.push(Move::new(
                king_from,
                c,
                PieceKind::King,
                None,
                MoveFlag::LongCastle,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves_from(fen: &str) -> MoveList {
        pseudo_legal_moves(&Board::from_fen(fen).unwrap())
    }

    #[test]
    fn startpos_has_twenty_moves() {
        assert_eq!(pseudo_legal_moves(&Board::standard()).len(), 20);
    }

    #[test]
    fn pawn_double_push_needs_empty_path() {
        // A knight on e3 blocks both e3 and the e2 pawn's double push.
        let moves = moves_from("4k3/8/8/8/8/4N3/4P3/4K3 w - - 0 1");
        assert!(!moves.iter().any(|mv| mv.from() == Square::E2));
    }

    #[test]
    fn pawn_cannot_capture_straight_ahead() {
        // White pawn d4 is blocked by the black pawn on d5 and has no
        // diagonal targets; the black pawn on e4 is beside it, not ahead.
        let moves = moves_from("4k3/8/8/3p4/3Pp3/8/8/4K3 w - - 0 1");
        assert!(!moves.iter().any(|mv| mv.from() == Square::D4));
    }

    #[test]
    fn pawn_captures_diagonally_onto_enemy() {
        let moves = moves_from("4k3/8/8/2np4/3P4/8/8/4K3 w - - 0 1");
        let captures: Vec<_> = moves
            .iter()
            .filter(|mv| mv.from() == Square::D4 && mv.is_capture())
            .collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), Square::C5);
        assert_eq!(captures[0].captured(), Some(PieceKind::Knight));
    }

    #[test]
    fn promotion_fans_out_to_four_descriptors() {
        let moves = moves_from("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let promotions: Vec<_> = moves
            .iter()
            .filter(|mv| mv.from() == Square::A7 && mv.to() == Square::A8)
            .collect();
        assert_eq!(promotions.len(), 4);
        for kind in PieceKind::promotions() {
            assert!(promotions
                .iter()
                .any(|mv| mv.promotion() == Some(kind)));
        }
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let moves = moves_from("4k3/8/8/8/8/2p5/8/R3K3 w Q - 0 1");
        let rook_tos: Vec<_> = moves
            .iter()
            .filter(|mv| mv.from() == Square::A1)
            .map(|mv| mv.to())
            .collect();
        // Up the a-file freely, along rank 1 until the King.
        assert!(rook_tos.contains(&Square::A8));
        assert!(rook_tos.contains(&Square::D1));
        assert!(!rook_tos.contains(&Square::E1));
        assert!(!rook_tos.contains(&Square::F1));
    }

    #[test]
    fn castling_requires_empty_between_squares() {
        let blocked = moves_from("4k3/8/8/8/8/8/8/4KB1R w K - 0 1");
        assert!(!blocked.iter().any(|mv| mv.flag() == MoveFlag::ShortCastle));

        let open = moves_from("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(open.iter().any(|mv| mv.flag() == MoveFlag::ShortCastle));
    }

    #[test]
    fn castling_blocked_by_attacked_transit_square() {
        // A black rook on f8 covers f1, the square the King passes through.
        let moves = moves_from("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(!moves.iter().any(|mv| mv.flag() == MoveFlag::ShortCastle));
    }

    #[test]
    fn castling_blocked_while_in_check() {
        let moves = moves_from("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1");
        assert!(!moves.iter().any(|mv| mv.flag() == MoveFlag::ShortCastle));
    }

    #[test]
    fn long_castle_ignores_attacks_on_b_file() {
        // The b1 square is covered by the rook on b8, but the King never
        // crosses it; long castling must still be generated.
        let moves = moves_from("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(moves.iter().any(|mv| mv.flag() == MoveFlag::LongCastle));
    }

    #[test]
    fn no_castling_without_right() {
        let moves = moves_from("4k3/8/8/8/8/8/8/4K2R w - - 0 1");
        assert!(!moves.iter().any(|mv| mv.flag().is_castle()));
    }
}
