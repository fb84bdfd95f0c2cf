/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use arbiter::{
    legal_moves, parse_san, render_san, Board, Color, DrawReason, Game, GameConfig, GameError,
    GameStatus, IllegalMove, ParseError,
};

fn play(game: &mut Game, moves: &[&str]) {
    for text in moves {
        game.submit_move(text)
            .unwrap_or_else(|err| panic!("{text} should be accepted: {err}"));
    }
}

fn game_from(fen: &str) -> Game {
    Game::new(GameConfig {
        starting_position: Board::from_fen(fen).unwrap(),
        ..GameConfig::default()
    })
}

#[test]
fn a_new_game_has_twenty_moves() {
    let game = Game::default();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.legal_moves_san().len(), 20);
}

#[test]
fn fools_mate() {
    let mut game = Game::default();
    play(&mut game, &["f3", "e5", "g4"]);

    // The mate annotation is accepted on input, though never required.
    let finish = game.submit_move("Qh4#").unwrap();
    assert_eq!(finish.san, "Qh4#");
    assert_eq!(finish.status, GameStatus::Checkmate(Color::Black));

    assert!(matches!(
        game.submit_move("a3"),
        Err(GameError::GameOver(_))
    ));
}

#[test]
fn scholars_mate() {
    let mut game = Game::default();
    play(&mut game, &["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6"]);

    let finish = game.submit_move("Qxf7").unwrap();
    assert_eq!(finish.san, "Qxf7#");
    assert_eq!(finish.status, GameStatus::Checkmate(Color::White));
}

#[test]
fn stalemate_ends_the_game() {
    let game = game_from("8/8/8/8/8/kq6/8/K7 w - - 0 1");
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.legal_moves_san().is_empty());
}

#[test]
fn castling_works_and_through_check_does_not() {
    // Open position: both sides may castle short.
    let mut game = game_from("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let castle = game.submit_move("O-O").unwrap();
    assert_eq!(castle.san, "O-O");

    // With f1 covered by the enemy rook, short castling does not exist.
    let mut game = game_from("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
    assert!(matches!(
        game.submit_move("O-O"),
        Err(GameError::Parse(ParseError::NoSuchMove(_)))
    ));
}

#[test]
fn promotions_must_name_a_piece() {
    let mut game = game_from("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");

    assert!(matches!(
        game.submit_move("a8"),
        Err(GameError::Parse(ParseError::MissingPromotionPiece(_)))
    ));

    let promo = game.submit_move("a8=R").unwrap();
    assert_eq!(promo.san, "a8=R+");
    assert_eq!(promo.status, GameStatus::Check(Color::Black));
}

#[test]
fn self_check_is_an_illegal_move_not_a_parse_failure() {
    let mut game = game_from("3rk3/8/8/8/8/8/3N4/3K4 w - - 0 1");
    assert!(matches!(
        game.submit_move("Nf3"),
        Err(GameError::Illegal(IllegalMove::SelfCheck))
    ));
    assert!(game.history().is_empty());
}

#[test]
fn fifty_move_limit_is_a_rule_parameter() {
    let mut game = Game::new(GameConfig {
        fifty_move_limit: 2,
        ..GameConfig::default()
    });

    play(&mut game, &["Nf3", "Nf6", "Ng1"]);
    let draw = game.submit_move("Ng8").unwrap();
    assert_eq!(draw.status, GameStatus::Draw(DrawReason::FiftyMoveRule));
}

#[test]
fn threefold_repetition_draws() {
    let mut game = Game::default();
    play(&mut game, &["Nf3", "Nf6", "Ng1", "Ng8", "Nf3", "Nf6", "Ng1"]);

    let draw = game.submit_move("Ng8").unwrap();
    assert_eq!(
        draw.status,
        GameStatus::Draw(DrawReason::ThreefoldRepetition)
    );
}

#[test]
fn rendered_san_round_trips_through_a_whole_game() {
    // An opening with castling, captures, and a disambiguated knight move.
    let moves = [
        "e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "O-O", "Nf6", "d3", "d6", "Nc3", "Bg4", "h3",
        "Bxf3", "Qxf3", "Nd4", "Qd1", "O-O", "Nd5", "Nxd5", "Bxd5", "c6", "Bc4",
    ];

    let mut game = Game::default();
    for text in moves {
        let board = *game.board();
        let accepted = game.submit_move(text).unwrap();

        // The canonical rendering must re-parse to the same move.
        assert_eq!(parse_san(&board, &accepted.san), Ok(accepted.mv));
    }
    assert_eq!(game.history().len(), moves.len());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn every_legal_move_round_trips_in_a_sharp_position() {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    for mv in legal_moves(&board) {
        let san = render_san(&board, mv);
        assert_eq!(parse_san(&board, &san), Ok(mv), "{san}");
    }
}

#[test]
fn rejected_submissions_never_advance_state() {
    let mut game = Game::default();
    let fen_before = game.board().to_fen();

    for text in ["Qh5", "Ke2", "???", "O-O-O", "e5"] {
        assert!(game.submit_move(text).is_err(), "{text} should be rejected");
    }

    assert_eq!(game.board().to_fen(), fen_before);
    assert!(game.history().is_empty());
}
