/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Error types for move submission.
//!
//! Notation problems and legality problems are deliberately distinct types:
//! a parser failure means the text never named a move, while an
//! [`IllegalMove`] means the text named one that the rules reject. Callers
//! that only care about "did it work" can hold a [`GameError`], which wraps
//! both, plus the terminal-game case.

use thiserror::Error;

/// A failure to interpret a notation string against a position.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    /// The text is well-formed notation, but no legal move in the current
    /// position matches it.
    #[error("no matching move: {0:?} does not name a move in this position")]
    NoSuchMove(String),

    /// The text matches two or more legal moves and carries no disambiguator
    /// (or an insufficient one) to pick between them.
    #[error("ambiguous move: {0:?} matches more than one move in this position")]
    AmbiguousMove(String),

    /// A pawn move onto its final rank that does not say what the pawn
    /// becomes, like `e8` instead of `e8=Q`.
    #[error("missing promotion piece: {0:?} must specify what the pawn becomes, like \"{0}=Q\"")]
    MissingPromotionPiece(String),

    /// The text is not recognizable notation at all.
    #[error("malformed notation: {0:?} is not a recognizable move token")]
    MalformedToken(String),
}

/// A move that parsed fine but is rejected by the rules of chess.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum IllegalMove {
    /// The move would leave (or place) the mover's own King in check.
    #[error("illegal move: it would leave your own king in check")]
    SelfCheck,

    /// The move descriptor does not obey basic movement geometry in this
    /// position: wrong piece movement, blocked path, or no such piece.
    #[error("illegal move: no piece can make that move in this position")]
    NotPseudoLegal,
}

/// Anything that can go wrong when submitting a move to a [`Game`](crate::Game).
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum GameError {
    /// The notation string could not be resolved to a move.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The move was understood, but the rules reject it.
    #[error(transparent)]
    Illegal(#[from] IllegalMove),

    /// The game has already ended; no further moves are accepted.
    #[error("the game is already over ({0})")]
    GameOver(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_token() {
        let err = ParseError::NoSuchMove("Qh5".into());
        assert!(err.to_string().contains("Qh5"));

        let err = ParseError::MissingPromotionPiece("e8".into());
        assert!(err.to_string().contains("e8=Q"));
    }

    #[test]
    fn game_error_wraps_both_failure_kinds() {
        let from_parse: GameError = ParseError::MalformedToken("!!".into()).into();
        assert!(matches!(from_parse, GameError::Parse(_)));

        let from_illegal: GameError = IllegalMove::SelfCheck.into();
        assert!(matches!(from_illegal, GameError::Illegal(_)));
    }
}
