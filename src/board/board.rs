/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Result};

use super::movegen::{DIAGONAL_RAYS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONAL_RAYS};
use super::{Color, File, Move, MoveFlag, Piece, PieceKind, Rank, Square};

/// FEN string for the starting position of chess.
pub const FEN_STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The castling rights of a single player.
///
/// Rights are lost monotonically: moving the King clears both, moving (or
/// losing) a Rook from its home square clears that wing. They are never
/// re-granted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct CastlingRights {
    /// Eligibility to castle on the King's side of the board (`O-O`).
    pub(crate) short: bool,
    /// Eligibility to castle on the Queen's side of the board (`O-O-O`).
    pub(crate) long: bool,
}

impl CastlingRights {
    /// Creates a new [`CastlingRights`] with both wings available.
    #[inline(always)]
    pub const fn both() -> Self {
        Self {
            short: true,
            long: true,
        }
    }

    /// Creates a new [`CastlingRights`] with neither wing available.
    #[inline(always)]
    pub const fn none() -> Self {
        Self {
            short: false,
            long: false,
        }
    }

    /// Returns `true` if castling kingside is still permitted.
    #[inline(always)]
    pub const fn short(&self) -> bool {
        self.short
    }

    /// Returns `true` if castling queenside is still permitted.
    #[inline(always)]
    pub const fn long(&self) -> bool {
        self.long
    }
}

/// Stores piece placement and per-side game state: side to move, castling
/// rights, and the move counters.
///
/// A [`Board`] is a plain value (`Copy`); [`Board::apply`] returns a *new*
/// board and never mutates its input. That makes trial application for
/// legality checks free of unmake bookkeeping, and means a rejected move can
/// never leave partially-updated state behind.
///
/// The board stores no derived facts: check, mate, and draw classification
/// are recomputed from it by the [`Game`](crate::Game) state machine.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// One piece or nothing per square, indexed by [`Square::index`].
    squares: [Option<Piece>; Square::COUNT],

    /// The [`Color`] of the current player.
    side_to_move: Color,

    /// Castling rights for each player.
    castling: [CastlingRights; Color::COUNT],

    /// Number of halfmoves since the last pawn move or capture.
    ///
    /// Used by the draw-by-inactivity rule; the threshold itself lives in
    /// [`GameConfig`](crate::GameConfig), not here.
    halfmove_clock: usize,

    /// Number of completed turn pairs, starting at 1.
    fullmove: usize,
}

impl Board {
    /// Creates an empty [`Board`]: no pieces, White to move, no castling
    /// rights, counters at their initial values.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: [CastlingRights::none(); Color::COUNT],
            halfmove_clock: 0,
            fullmove: 1,
        }
    }

    /// Creates a [`Board`] with the standard starting position.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Board, Color, PieceKind, Square};
    /// let board = Board::standard();
    /// assert_eq!(board.side_to_move(), Color::White);
    /// assert_eq!(board.kind_at(Square::E1), Some(PieceKind::King));
    /// ```
    #[inline(always)]
    pub fn standard() -> Self {
        Self::from_fen(FEN_STARTPOS).expect("startpos FEN is valid")
    }

    /// Creates a [`Board`] from the provided FEN string.
    ///
    /// Only the placement field is mandatory; missing trailing fields assume
    /// their startpos defaults. The en-passant field is accepted for
    /// compatibility and ignored, since en passant is outside this engine's
    /// rule set.
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut board = Self::empty();
        let mut split = fen.trim().split_ascii_whitespace();

        let placements = split
            .next()
            .ok_or(anyhow!("FEN string must have piece placements"))?;

        let mut ranks = placements.split('/');
        for rank in Rank::iter().rev() {
            let row = ranks
                .next()
                .ok_or(anyhow!("FEN placements must have 8 ranks. Got {placements:?}"))?;

            let mut file = 0u8;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    let piece = Piece::from_fen_char(c)?;
                    let square = Square::new(File::new(file)?, rank);
                    board.squares[square.index()] = Some(piece);
                    file += 1;
                }
            }

            if file != 8 {
                bail!("FEN rank must describe exactly 8 files. Got {row:?}");
            }
        }

        board.side_to_move = Color::from_fen(split.next().unwrap_or("w"))?;

        let castling = split.next().unwrap_or("-");
        board.castling[Color::White].short = castling.contains('K');
        board.castling[Color::White].long = castling.contains('Q');
        board.castling[Color::Black].short = castling.contains('k');
        board.castling[Color::Black].long = castling.contains('q');

        // En passant target; consumed but unused.
        let _ = split.next();

        let halfmove = split.next().unwrap_or("0");
        board.halfmove_clock = halfmove
            .parse()
            .or(Err(anyhow!("FEN halfmove clock must be a number. Got {halfmove:?}")))?;

        let fullmove = split.next().unwrap_or("1");
        board.fullmove = fullmove
            .parse()
            .or(Err(anyhow!("FEN fullmove counter must be a number. Got {fullmove:?}")))?;

        for color in Color::all() {
            let kings = board
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if kings != 1 {
                bail!("Position must have exactly one {color} king. Got {kings}");
            }
        }

        Ok(board)
    }

    /// Converts this [`Board`] to a FEN string.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Board, FEN_STARTPOS};
    /// assert_eq!(Board::standard().to_fen(), FEN_STARTPOS);
    /// ```
    pub fn to_fen(&self) -> String {
        let mut placements = String::with_capacity(64);
        for rank in Rank::iter().rev() {
            let mut empty = 0;
            for file in File::iter() {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            placements.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placements.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placements.push_str(&empty.to_string());
            }
            if rank != Rank::ONE {
                placements.push('/');
            }
        }

        let mut rights = String::new();
        if self.castling[Color::White].short {
            rights.push('K');
        }
        if self.castling[Color::White].long {
            rights.push('Q');
        }
        if self.castling[Color::Black].short {
            rights.push('k');
        }
        if self.castling[Color::Black].long {
            rights.push('q');
        }
        if rights.is_empty() {
            rights.push('-');
        }

        format!(
            "{placements} {} {rights} - {} {}",
            self.side_to_move.to_fen(),
            self.halfmove_clock,
            self.fullmove,
        )
    }

    /// Fetches the [`Piece`] occupying the provided [`Square`], if any.
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    /// Fetches the [`PieceKind`] of the piece on the provided [`Square`], if any.
    #[inline(always)]
    pub fn kind_at(&self, square: Square) -> Option<PieceKind> {
        self.piece_at(square).map(|piece| piece.kind())
    }

    /// Fetches the [`Color`] of the piece on the provided [`Square`], if any.
    #[inline(always)]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color())
    }

    /// The [`Color`] of the current player.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The castling rights of the provided player.
    #[inline(always)]
    pub const fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling[color.index()]
    }

    /// Number of halfmoves since the last pawn move or capture.
    #[inline(always)]
    pub const fn halfmove_clock(&self) -> usize {
        self.halfmove_clock
    }

    /// Number of completed turn pairs, starting at 1.
    #[inline(always)]
    pub const fn fullmove(&self) -> usize {
        self.fullmove
    }

    /// Iterates over all pieces of the provided [`Color`] with their squares.
    #[inline(always)]
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| {
            self.piece_at(square)
                .filter(|piece| piece.is(color))
                .map(|piece| (square, piece))
        })
    }

    /// The square of the provided player's King.
    ///
    /// # Panics
    ///
    /// If the board has no King of that color. Exactly one King per side is a
    /// board invariant; its violation is an engine bug, not a user error.
    #[inline(always)]
    pub fn king_square(&self, color: Color) -> Square {
        Square::iter()
            .find(|&square| self.piece_at(square) == Some(Piece::new(color, PieceKind::King)))
            .unwrap_or_else(|| panic!("invariant violated: board has no {color} king"))
    }

    /// Returns `true` if `self` and `other` describe the same position for
    /// repetition purposes: identical placement, side to move, and castling
    /// rights. The move counters deliberately do not participate.
    #[inline(always)]
    pub fn same_position(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.castling == other.castling
    }

    /// Returns `true` if any piece of `attacker`'s color has a pseudo-legal
    /// move reaching the provided [`Square`].
    ///
    /// This is a reverse scan from the target square: cheaper than generating
    /// the attacker's moves, and independent of whose turn it is. Used for
    /// check detection and the castling through-check rules.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Board, Color, Square};
    /// let board = Board::standard();
    /// // f3 is covered by the g1 knight and the e2/g2 pawns.
    /// assert!(board.is_attacked(Square::F3, Color::White));
    /// assert!(!board.is_attacked(Square::E4, Color::Black));
    /// ```
    pub fn is_attacked(&self, square: Square, attacker: Color) -> bool {
        // Pawns attack diagonally forward, so look one rank back toward them.
        let toward_attacker = match attacker {
            Color::White => -1,
            Color::Black => 1,
        };
        let pawn = Piece::new(attacker, PieceKind::Pawn);
        for file_delta in [-1, 1] {
            if let Some(origin) = square.try_offset(file_delta, toward_attacker) {
                if self.piece_at(origin) == Some(pawn) {
                    return true;
                }
            }
        }

        let knight = Piece::new(attacker, PieceKind::Knight);
        for (file_delta, rank_delta) in KNIGHT_DELTAS {
            if let Some(origin) = square.try_offset(file_delta, rank_delta) {
                if self.piece_at(origin) == Some(knight) {
                    return true;
                }
            }
        }

        let king = Piece::new(attacker, PieceKind::King);
        for (file_delta, rank_delta) in KING_DELTAS {
            if let Some(origin) = square.try_offset(file_delta, rank_delta) {
                if self.piece_at(origin) == Some(king) {
                    return true;
                }
            }
        }

        // Sliders: walk each ray outward and inspect the first occupied square.
        self.ray_attacked(square, attacker, &ORTHOGONAL_RAYS, PieceKind::Rook)
            || self.ray_attacked(square, attacker, &DIAGONAL_RAYS, PieceKind::Bishop)
    }

    fn ray_attacked(
        &self,
        square: Square,
        attacker: Color,
        rays: &[(i8, i8); 4],
        slider: PieceKind,
    ) -> bool {
        for &(file_delta, rank_delta) in rays {
            let mut current = square;
            while let Some(next) = current.try_offset(file_delta, rank_delta) {
                current = next;
                if let Some(piece) = self.piece_at(current) {
                    if piece.is(attacker)
                        && (piece.kind() == slider || piece.kind() == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
        false
    }

    /// Returns a new [`Board`] with the provided [`Move`] applied: the mover
    /// relocated, any captured piece removed, the castling Rook relocated,
    /// promotions substituted, and rights, turn, and clocks updated.
    ///
    /// `self` is untouched, so callers can trial-apply candidate moves freely.
    ///
    /// The descriptor is trusted to come from this position's move generator
    /// (or to have passed the legality filter); this is not a validation entry
    /// point.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Board, Move, MoveFlag, PieceKind, Square};
    /// let board = Board::standard();
    /// let e4 = Move::new(Square::E2, Square::E4, PieceKind::Pawn, None, MoveFlag::DoublePush);
    ///
    /// let next = board.apply(e4);
    /// assert_eq!(next.kind_at(Square::E4), Some(PieceKind::Pawn));
    /// assert_eq!(board.kind_at(Square::E2), Some(PieceKind::Pawn)); // input unchanged
    /// ```
    pub fn apply(&self, mv: Move) -> Self {
        let mut next = *self;
        let color = self.side_to_move;
        let from = mv.from();
        let to = mv.to();

        let Some(mut piece) = next.squares[from.index()] else {
            panic!("invariant violated: no piece on {from} to move");
        };

        if let Some(promotion) = mv.promotion() {
            piece = piece.promoted(promotion);
        }

        next.squares[from.index()] = None;
        next.squares[to.index()] = Some(piece);

        // Castling also relocates the Rook past the King.
        let back = Rank::back(color);
        match mv.flag() {
            MoveFlag::ShortCastle => {
                let rook_from = Square::new(File::H, back);
                let rook_to = Square::new(File::F, back);
                next.squares[rook_to.index()] = next.squares[rook_from.index()].take();
            }
            MoveFlag::LongCastle => {
                let rook_from = Square::new(File::A, back);
                let rook_to = Square::new(File::D, back);
                next.squares[rook_to.index()] = next.squares[rook_from.index()].take();
            }
            _ => {}
        }

        // Rights are cleared by King moves and by Rook moves off home squares.
        match mv.kind() {
            PieceKind::King => next.castling[color.index()] = CastlingRights::none(),
            PieceKind::Rook => {
                if from == Square::new(File::H, back) {
                    next.castling[color.index()].short = false;
                } else if from == Square::new(File::A, back) {
                    next.castling[color.index()].long = false;
                }
            }
            _ => {}
        }

        // Capturing a Rook on its home square clears the opponent's right.
        let opponent = color.opponent();
        if mv.captured() == Some(PieceKind::Rook) {
            let enemy_back = Rank::back(opponent);
            if to == Square::new(File::H, enemy_back) {
                next.castling[opponent.index()].short = false;
            } else if to == Square::new(File::A, enemy_back) {
                next.castling[opponent.index()].long = false;
            }
        }

        if mv.is_irreversible() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock += 1;
        }

        if color.is_black() {
            next.fullmove += 1;
        }
        next.side_to_move = opponent;

        next
    }
}

impl Default for Board {
    /// The default board is the standard starting position.
    #[inline(always)]
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;
    /// Alias for [`Board::from_fen`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Board {
    /// Renders an ASCII diagram of the board from White's perspective, with
    /// rank and file labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{rank}|")?;
            for file in File::iter() {
                match self.piece_at(Square::new(file, rank)) {
                    Some(piece) => write!(f, " {piece}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for file in File::iter() {
            write!(f, " {file}")?;
        }
        writeln!(f)?;
        write!(f, "{} to move", self.side_to_move.name())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}")?;
        write!(f, "fen: {}", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveFlag;

    #[test]
    fn startpos_fen_round_trip() {
        let board = Board::standard();
        assert_eq!(board.to_fen(), FEN_STARTPOS);
        assert_eq!(Board::from_fen(FEN_STARTPOS).unwrap(), board);
    }

    #[test]
    fn fen_rejects_garbage() {
        assert!(Board::from_fen("").is_err());
        assert!(Board::from_fen("rnbqkbnr/pppppppp/8/8").is_err());
        assert!(Board::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
        // No kings at all.
        assert!(Board::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
        // Two white kings.
        assert!(Board::from_fen("4k3/8/8/8/8/8/8/K3K3 w - - 0 1").is_err());
    }

    #[test]
    fn apply_is_pure() {
        let board = Board::standard();
        let mv = Move::new(
            Square::E2,
            Square::E4,
            PieceKind::Pawn,
            None,
            MoveFlag::DoublePush,
        );

        let next = board.apply(mv);
        assert_eq!(board, Board::standard());
        assert_eq!(next.piece_at(Square::E2), None);
        assert_eq!(next.kind_at(Square::E4), Some(PieceKind::Pawn));
        assert_eq!(next.side_to_move(), Color::Black);
        assert_eq!(next.halfmove_clock(), 0);
    }

    #[test]
    fn clocks_update() {
        let board = Board::standard();
        let knight_out = Move::quiet(Square::G1, Square::F3, PieceKind::Knight);
        let next = board.apply(knight_out);
        assert_eq!(next.halfmove_clock(), 1);
        assert_eq!(next.fullmove(), 1);

        let reply = Move::quiet(Square::G8, Square::F6, PieceKind::Knight);
        let next = next.apply(reply);
        assert_eq!(next.halfmove_clock(), 2);
        assert_eq!(next.fullmove(), 2);
    }

    #[test]
    fn castling_relocates_rook_and_clears_rights() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let castle = Move::new(
            Square::E1,
            Square::G1,
            PieceKind::King,
            None,
            MoveFlag::ShortCastle,
        );

        let next = board.apply(castle);
        assert_eq!(next.kind_at(Square::G1), Some(PieceKind::King));
        assert_eq!(next.kind_at(Square::F1), Some(PieceKind::Rook));
        assert_eq!(next.piece_at(Square::H1), None);
        assert_eq!(next.piece_at(Square::E1), None);
        assert!(!next.castling_rights(Color::White).short());
        assert!(!next.castling_rights(Color::White).long());
        // Black's rights are untouched.
        assert!(next.castling_rights(Color::Black).short());
        assert!(next.castling_rights(Color::Black).long());
    }

    #[test]
    fn capturing_home_rook_clears_opponent_right() {
        let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let grab = Move::capture(Square::A1, Square::A8, PieceKind::Rook, PieceKind::Rook);

        let next = board.apply(grab);
        assert!(!next.castling_rights(Color::Black).long());
        assert!(next.castling_rights(Color::Black).short());
        assert!(!next.castling_rights(Color::White).long());
        assert!(next.castling_rights(Color::White).short());
        assert_eq!(next.halfmove_clock(), 0);
    }

    #[test]
    fn promotion_substitutes_piece() {
        let board = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let promote = Move::new(
            Square::A7,
            Square::A8,
            PieceKind::Pawn,
            None,
            MoveFlag::Promotion(PieceKind::Queen),
        );

        let next = board.apply(promote);
        assert_eq!(next.kind_at(Square::A8), Some(PieceKind::Queen));
        assert_eq!(next.color_at(Square::A8), Some(Color::White));
    }

    #[test]
    fn attack_scans() {
        let board = Board::from_fen("4k3/8/8/3r4/8/8/3P4/4K3 w - - 0 1").unwrap();
        // The black rook on d5 covers the d-file down to the pawn on d2.
        assert!(board.is_attacked(Square::D2, Color::Black));
        assert!(board.is_attacked(Square::D4, Color::Black));
        // The pawn blocks the rook from seeing d1.
        assert!(!board.is_attacked(Square::D1, Color::Black));
        // The white pawn on d2 attacks c3 and e3.
        assert!(board.is_attacked(Square::C3, Color::White));
        assert!(board.is_attacked(Square::E3, Color::White));
        assert!(!board.is_attacked(Square::D3, Color::White));
    }

    #[test]
    fn repetition_equality_ignores_clocks() {
        let board = Board::standard();
        let shuffled = board
            .apply(Move::quiet(Square::G1, Square::F3, PieceKind::Knight))
            .apply(Move::quiet(Square::G8, Square::F6, PieceKind::Knight))
            .apply(Move::quiet(Square::F3, Square::G1, PieceKind::Knight))
            .apply(Move::quiet(Square::F6, Square::G8, PieceKind::Knight));

        assert!(board.same_position(&shuffled));
        assert_ne!(board, shuffled); // counters differ
    }
}
