/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{PieceKind, Square};

/// Maximum possible number of moves in a given chess position.
///
/// Found [here](<https://www.chessprogramming.org/Chess_Position#cite_note-4>)
pub const MAX_NUM_MOVES: usize = 218;

/// An alias for an [`arrayvec::ArrayVec`] containing at most [`MAX_NUM_MOVES`] moves.
pub type MoveList = arrayvec::ArrayVec<Move, MAX_NUM_MOVES>;

/// Marks a [`Move`] as something other than a plain relocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MoveFlag {
    /// A single piece moving from one square to another.
    #[default]
    Quiet,

    /// A pawn's initial two-square advance.
    DoublePush,

    /// Castling on the King's side of the board (`O-O`).
    ShortCastle,

    /// Castling on the Queen's side of the board (`O-O-O`).
    LongCastle,

    /// A pawn reaching its final rank and becoming the contained kind.
    Promotion(PieceKind),
}

impl MoveFlag {
    /// Returns the promotion kind, if this flag is a promotion.
    #[inline(always)]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self {
            Self::Promotion(kind) => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if this flag is a castling move of either wing.
    #[inline(always)]
    pub const fn is_castle(&self) -> bool {
        matches!(self, Self::ShortCastle | Self::LongCastle)
    }
}

/// A move descriptor: origin, destination, the moving piece's kind, what it
/// captures (if anything), and a special-move flag.
///
/// A [`Move`] is a *proposal*. It only becomes authoritative after it passes
/// the legality filter (see [`legal_moves`](crate::legal_moves)); the board
/// never applies an unvalidated descriptor on a legal-move path.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    kind: PieceKind,
    captured: Option<PieceKind>,
    flag: MoveFlag,
}

impl Move {
    /// Creates a new [`Move`] from its parts.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Move, MoveFlag, PieceKind, Square};
    /// let e4 = Move::new(Square::E2, Square::E4, PieceKind::Pawn, None, MoveFlag::DoublePush);
    /// assert_eq!(e4.to_string(), "e2e4");
    /// ```
    #[inline(always)]
    pub const fn new(
        from: Square,
        to: Square,
        kind: PieceKind,
        captured: Option<PieceKind>,
        flag: MoveFlag,
    ) -> Self {
        Self {
            from,
            to,
            kind,
            captured,
            flag,
        }
    }

    /// Creates a new quiet [`Move`] of `kind` from `from` to `to`.
    #[inline(always)]
    pub const fn quiet(from: Square, to: Square, kind: PieceKind) -> Self {
        Self::new(from, to, kind, None, MoveFlag::Quiet)
    }

    /// Creates a new capturing [`Move`].
    #[inline(always)]
    pub const fn capture(from: Square, to: Square, kind: PieceKind, victim: PieceKind) -> Self {
        Self::new(from, to, kind, Some(victim), MoveFlag::Quiet)
    }

    /// The origin square of the moving piece.
    #[inline(always)]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// The destination square of the moving piece.
    ///
    /// For castling this is the King's destination (`g1`/`c1` and mirrored).
    #[inline(always)]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The kind of the moving piece.
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The kind of the captured piece, if this move captures.
    #[inline(always)]
    pub const fn captured(&self) -> Option<PieceKind> {
        self.captured
    }

    /// The special-move flag of this [`Move`].
    #[inline(always)]
    pub const fn flag(&self) -> MoveFlag {
        self.flag
    }

    /// Returns `true` if this move captures a piece.
    #[inline(always)]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns the promotion kind, if this move promotes a pawn.
    ///
    /// # Example
    /// ```
    /// # use arbiter::{Move, MoveFlag, PieceKind, Square};
    /// let promo = Move::new(
    ///     Square::E7,
    ///     Square::E8,
    ///     PieceKind::Pawn,
    ///     None,
    ///     MoveFlag::Promotion(PieceKind::Queen),
    /// );
    /// assert_eq!(promo.promotion(), Some(PieceKind::Queen));
    /// ```
    #[inline(always)]
    pub const fn promotion(&self) -> Option<PieceKind> {
        self.flag.promotion()
    }

    /// Returns `true` if this move resets the halfmove clock: any pawn move or capture.
    #[inline(always)]
    pub const fn is_irreversible(&self) -> bool {
        self.captured.is_some() || matches!(self.kind, PieceKind::Pawn)
    }
}

impl fmt::Display for Move {
    /// A move displays in coordinate notation: origin, destination, and a
    /// lowercase promotion letter if present, like `e2e4` or `e7e8q`.
    ///
    /// Context-aware algebraic notation lives in [`render_san`](crate::render_san),
    /// since disambiguation needs a board.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion() {
            write!(f, "{}", promotion.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{self} ({:?} {:?}, captures {:?})",
            self.kind, self.flag, self.captured
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_coordinate_notation() {
        let quiet = Move::quiet(Square::G1, Square::F3, PieceKind::Knight);
        assert_eq!(quiet.to_string(), "g1f3");

        let promo = Move::new(
            Square::A7,
            Square::B8,
            PieceKind::Pawn,
            Some(PieceKind::Rook),
            MoveFlag::Promotion(PieceKind::Knight),
        );
        assert_eq!(promo.to_string(), "a7b8n");
    }

    #[test]
    fn irreversibility() {
        assert!(Move::quiet(Square::E2, Square::E3, PieceKind::Pawn).is_irreversible());
        assert!(
            Move::capture(Square::F3, Square::E5, PieceKind::Knight, PieceKind::Pawn)
                .is_irreversible()
        );
        assert!(!Move::quiet(Square::G1, Square::F3, PieceKind::Knight).is_irreversible());
    }
}
