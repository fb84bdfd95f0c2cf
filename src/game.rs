/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The game state machine: accepts notation, enforces legality, and
//! classifies the position after every accepted move.

use std::fmt;

use crate::{
    board::{check_legal, is_in_check, legal_moves, Board, Color, Move},
    errors::GameError,
    san::{parse_san, render_san},
};

/// Configuration for a new [`Game`].
///
/// # Example
/// ```
/// # use arbiter::{Game, GameConfig};
/// // A casual game where inactivity draws arrive twice as fast.
/// let game = Game::new(GameConfig {
///     fifty_move_limit: 25,
///     ..GameConfig::default()
/// });
/// assert!(!game.status().is_over());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GameConfig {
    /// The position the game starts from. Defaults to the standard setup.
    pub starting_position: Board,

    /// Number of *full* moves without a pawn move or capture after which the
    /// game is drawn. The conventional value is 50, but it is a rule
    /// parameter here, not a constant.
    pub fifty_move_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_position: Board::standard(),
            fifty_move_limit: 50,
        }
    }
}

/// Why a game is drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawReason {
    /// The configured number of full moves passed without a pawn move or
    /// capture. See [`GameConfig::fifty_move_limit`].
    FiftyMoveRule,

    /// The same position (placement, side to move, castling rights) occurred
    /// three times.
    ThreefoldRepetition,
}

/// The classification of the current position.
///
/// Exactly one status holds at any time. Mate and stalemate take precedence
/// over the draw rules: a move that delivers checkmate ends the game even if
/// it also triggers the inactivity threshold.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    /// The game continues and the side to move is not in check.
    InProgress,

    /// The contained player is in check but has legal moves.
    Check(Color),

    /// The contained player has *won*: their opponent is checkmated.
    Checkmate(Color),

    /// The side to move has no legal moves and is not in check.
    Stalemate,

    /// The game is drawn by rule.
    Draw(DrawReason),
}

impl GameStatus {
    /// Returns `true` if this status ends the game.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Color, GameStatus};
    /// assert!(!GameStatus::Check(Color::White).is_over());
    /// assert!(GameStatus::Checkmate(Color::Black).is_over());
    /// ```
    #[inline(always)]
    pub const fn is_over(&self) -> bool {
        !matches!(self, Self::InProgress | Self::Check(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Check(color) => write!(f, "{color} is in check"),
            Self::Checkmate(winner) => write!(f, "checkmate, {winner} wins"),
            Self::Stalemate => write!(f, "stalemate"),
            Self::Draw(DrawReason::FiftyMoveRule) => write!(f, "draw by the fifty-move rule"),
            Self::Draw(DrawReason::ThreefoldRepetition) => {
                write!(f, "draw by threefold repetition")
            }
        }
    }
}

/// A successfully submitted move, echoed back with its canonical rendering
/// and the status it produced.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AcceptedMove {
    /// The move that was played.
    pub mv: Move,

    /// The canonical SAN for the move, with minimal disambiguation and a
    /// `+`/`#` suffix when earned. May differ from the submitted text.
    pub san: String,

    /// The game's status after the move.
    pub status: GameStatus,
}

/// A chess game in progress: a [`Board`], the rules around it, and the
/// record needed for the repetition and inactivity draw rules.
///
/// Moves enter exclusively through [`Game::submit_move`] as SAN text. A
/// rejected submission leaves the game exactly as it was; state only
/// advances when parsing and the legality filter both succeed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    board: Board,
    config: GameConfig,
    status: GameStatus,

    /// Every accepted move, oldest first.
    history: Vec<Move>,

    /// Board snapshots since the last irreversible move, current included.
    /// Irreversible moves can never be repeated past, so the scan for
    /// threefold repetition only needs to look this far back.
    positions: Vec<Board>,
}

impl Game {
    /// Starts a new [`Game`] with the provided configuration.
    ///
    /// The starting position is classified immediately, so a game may be
    /// born already over (a mate-in-zero study position, for example).
    pub fn new(config: GameConfig) -> Self {
        let board = config.starting_position;
        let positions = vec![board];
        let status = classify(&board, &config, &positions);

        Self {
            board,
            config,
            status,
            history: Vec::new(),
            positions,
        }
    }

    /// The current board.
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The current status. Recomputed after every accepted move, never stale.
    #[inline(always)]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Every accepted move so far, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Submits a move in SAN. On success the game advances and the move is
    /// echoed back with its canonical rendering; on failure the game is
    /// untouched.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Game, GameConfig, GameStatus};
    /// let mut game = Game::new(GameConfig::default());
    /// let accepted = game.submit_move("e4").unwrap();
    /// assert_eq!(accepted.san, "e4");
    /// assert_eq!(accepted.status, GameStatus::InProgress);
    ///
    /// assert!(game.submit_move("Ke4").is_err());
    /// assert_eq!(game.history().len(), 1);
    /// ```
    pub fn submit_move(&mut self, text: &str) -> Result<AcceptedMove, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver(self.status.to_string()));
        }

        let mv = parse_san(&self.board, text)?;
        check_legal(&self.board, mv)?;

        // Canonical rendering happens against the pre-move board.
        let san = render_san(&self.board, mv);

        let next = self.board.apply(mv);
        if mv.is_irreversible() {
            // No earlier position can recur once a pawn moves or a piece
            // falls; drop the obsolete snapshots.
            self.positions.clear();
        }
        self.positions.push(next);

        self.board = next;
        self.history.push(mv);
        self.status = classify(&self.board, &self.config, &self.positions);

        Ok(AcceptedMove {
            mv,
            san,
            status: self.status,
        })
    }

    /// All legal moves in the current position, as canonical SAN.
    ///
    /// Empty exactly when the game is over.
    pub fn legal_moves_san(&self) -> Vec<String> {
        if self.status.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board)
            .into_iter()
            .map(|mv| render_san(&self.board, mv))
            .collect()
    }
}

impl Default for Game {
    /// A standard game from the starting position.
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Classifies `board` into a [`GameStatus`].
///
/// `positions` must contain the snapshots since the last irreversible move,
/// `board` itself included.
fn classify(board: &Board, config: &GameConfig, positions: &[Board]) -> GameStatus {
    let mover = board.side_to_move();
    let checked = is_in_check(board, mover);

    if legal_moves(board).is_empty() {
        return if checked {
            GameStatus::Checkmate(mover.opponent())
        } else {
            GameStatus::Stalemate
        };
    }

    // The halfmove clock counts halfmoves; the limit is in full moves.
    if board.halfmove_clock() >= 2 * config.fifty_move_limit {
        return GameStatus::Draw(DrawReason::FiftyMoveRule);
    }

    let occurrences = positions
        .iter()
        .filter(|past| past.same_position(board))
        .count();
    if occurrences >= 3 {
        return GameStatus::Draw(DrawReason::ThreefoldRepetition);
    }

    if checked {
        GameStatus::Check(mover)
    } else {
        GameStatus::InProgress
    }
}
