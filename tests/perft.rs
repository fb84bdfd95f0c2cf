/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arbiter::{perft, Board};

fn test_perft_fen_nodes(depth: usize, fen: &str, expected: u64) {
    let board = Board::from_fen(fen).unwrap();
    let nodes = perft(&board, depth);
    assert_eq!(nodes, expected, "PERFT({depth}) failed on {fen}");
}

mod startpos_perft {
    use crate::test_perft_fen_nodes;
    use arbiter::FEN_STARTPOS;

    // En passant first becomes possible at ply 5 from the starting position,
    // so these depths exercise every implemented rule and none of the
    // unimplemented one.

    #[test]
    fn depth_1() {
        test_perft_fen_nodes(1, FEN_STARTPOS, 20);
    }

    #[test]
    fn depth_2() {
        test_perft_fen_nodes(2, FEN_STARTPOS, 400);
    }

    #[test]
    fn depth_3() {
        test_perft_fen_nodes(3, FEN_STARTPOS, 8_902);
    }

    #[test]
    fn depth_4() {
        test_perft_fen_nodes(4, FEN_STARTPOS, 197_281);
    }
}

mod promotion_perft {
    use crate::test_perft_fen_nodes;

    // Every pawn here promotes on its next advance, so no double push (and
    // therefore no en passant) can ever occur at any depth.
    const PROMOTION_FEN: &str = "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1";

    #[test]
    fn depth_1() {
        test_perft_fen_nodes(1, PROMOTION_FEN, 24);
    }

    #[test]
    fn depth_2() {
        test_perft_fen_nodes(2, PROMOTION_FEN, 496);
    }

    #[test]
    fn depth_3() {
        test_perft_fen_nodes(3, PROMOTION_FEN, 9_483);
    }

    #[test]
    fn depth_4() {
        test_perft_fen_nodes(4, PROMOTION_FEN, 182_838);
    }
}

mod castling_perft {
    use crate::test_perft_fen_nodes;

    #[test]
    fn lone_kingside_rook() {
        // 9 rook moves, 5 king moves, and O-O.
        test_perft_fen_nodes(1, "4k3/8/8/8/8/8/8/4K2R w K - 0 1", 15);
        test_perft_fen_nodes(2, "4k3/8/8/8/8/8/8/4K2R w K - 0 1", 66);
    }

    #[test]
    fn all_four_rooks_at_home() {
        // 19 rook moves, 5 king moves, and both castles.
        test_perft_fen_nodes(1, "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 26);
    }
}

mod terminal_perft {
    use crate::test_perft_fen_nodes;

    #[test]
    fn stalemate_has_no_nodes() {
        test_perft_fen_nodes(1, "8/8/8/8/8/kq6/8/K7 w - - 0 1", 0);
    }

    #[test]
    fn checkmate_has_no_nodes() {
        test_perft_fen_nodes(1, "4r1k1/8/8/8/8/8/5PPP/4r1K1 w - - 0 1", 0);
    }
}
