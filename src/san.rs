/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Standard Algebraic Notation, in both directions.
//!
//! SAN is context-dependent: `Nf3` names a different [`Move`] on every board
//! it is read against, and rendering must consult the position to know how
//! much disambiguation a move needs. Both functions therefore take a
//! [`Board`], and both resolve ambiguity against the *legal* move set, so
//! that `parse_san(board, &render_san(board, mv)) == Ok(mv)` holds for every
//! legal `mv`.

use crate::{
    board::{
        check_legal, is_in_check, legal_moves, pseudo_legal_moves, Board, File, Move, MoveFlag,
        PieceKind, Rank, Square,
    },
    errors::ParseError,
};

/// The parsed-out pieces of a SAN token, before matching against a position.
#[derive(Clone, Copy, Debug)]
struct Token {
    kind: PieceKind,
    to: Square,
    from_file: Option<File>,
    from_rank: Option<Rank>,
    captures: bool,
    promotion: Option<PieceKind>,
}

/// Resolves a SAN string to the [`Move`] it names on `board`.
///
/// Accepts standard SAN: an optional piece letter (absent for pawns), an
/// optional file/rank disambiguator, `x` for captures, the destination
/// square, and `=Q`-style promotion suffixes. Castling is written `O-O` or
/// `O-O-O` (`0-0` variants also accepted). Trailing `+` and `#` annotations
/// are ignored on input; the position, not the text, decides whether a move
/// checks.
///
/// Ambiguity is judged against the legal move set, so `Rd1` is accepted even
/// with two rooks on the d-file when one of them is pinned. When a token
/// names only moves that would expose the mover's own King, the move is still
/// returned so that the legality filter can report
/// [`SelfCheck`](crate::IllegalMove::SelfCheck) rather than pretending the
/// move does not exist.
///
/// # Example
/// ```
/// # use arbiter::{parse_san, Board, Square};
/// let board = Board::standard();
/// let mv = parse_san(&board, "Nf3").unwrap();
/// assert_eq!(mv.from(), Square::G1);
/// assert_eq!(mv.to(), Square::F3);
/// ```
pub fn parse_san(board: &Board, text: &str) -> Result<Move, ParseError> {
    let stripped = text.trim_end_matches(['+', '#']);

    if let Some(flag) = castle_flag(stripped) {
        return pseudo_legal_moves(board)
            .into_iter()
            .find(|mv| mv.flag() == flag)
            .ok_or_else(|| ParseError::NoSuchMove(text.to_string()));
    }

    let token = tokenize(stripped).ok_or_else(|| ParseError::MalformedToken(text.to_string()))?;

    // Everything except the promotion kind must match the descriptor exactly.
    let candidates: Vec<Move> = pseudo_legal_moves(board)
        .into_iter()
        .filter(|mv| {
            mv.kind() == token.kind
                && mv.to() == token.to
                && mv.is_capture() == token.captures
                && !mv.flag().is_castle()
                && token.from_file.map_or(true, |file| mv.from().file() == file)
                && token.from_rank.map_or(true, |rank| mv.from().rank() == rank)
        })
        .collect();

    // A pawn reaching its final rank must say what it becomes.
    if token.promotion.is_none() && candidates.iter().any(|mv| mv.promotion().is_some()) {
        return Err(ParseError::MissingPromotionPiece(text.to_string()));
    }

    let candidates: Vec<Move> = candidates
        .into_iter()
        .filter(|mv| mv.promotion() == token.promotion)
        .collect();

    let legal: Vec<Move> = candidates
        .iter()
        .copied()
        .filter(|&mv| check_legal(board, mv).is_ok())
        .collect();

    match legal.as_slice() {
        [mv] => Ok(*mv),
        [] => match candidates.first() {
            // Pseudo-legal but self-checking; surface the move and let the
            // legality filter name the real problem.
            Some(mv) => Ok(*mv),
            None => Err(ParseError::NoSuchMove(text.to_string())),
        },
        _ => Err(ParseError::AmbiguousMove(text.to_string())),
    }
}

/// Renders a [`Move`] as SAN for the position it is about to be played on.
///
/// Uses the minimal disambiguation the position requires: none if the move is
/// unique, the origin file if that suffices, the origin rank if the file does
/// not, both otherwise. Pawn captures always carry their origin file. A `+`
/// or `#` suffix is appended by applying the move and classifying the
/// successor.
///
/// # Example
/// ```
/// # use arbiter::{parse_san, render_san, Board};
/// let board = Board::standard();
/// let mv = parse_san(&board, "e4").unwrap();
/// assert_eq!(render_san(&board, mv), "e4");
/// ```
pub fn render_san(board: &Board, mv: Move) -> String {
    let mut san = match mv.flag() {
        MoveFlag::ShortCastle => "O-O".to_string(),
        MoveFlag::LongCastle => "O-O-O".to_string(),
        _ => {
            let mut san = String::new();

            if mv.kind() == PieceKind::Pawn {
                if mv.is_capture() {
                    san.push(mv.from().file().char());
                }
            } else {
                san.push(mv.kind().letter());
                san.push_str(&disambiguator(board, mv));
            }

            if mv.is_capture() {
                san.push('x');
            }
            san.push_str(&mv.to().to_string());

            if let Some(promotion) = mv.promotion() {
                san.push('=');
                san.push(promotion.letter());
            }

            san
        }
    };

    // Classify the successor for the check/mate suffix.
    let next = board.apply(mv);
    if is_in_check(&next, next.side_to_move()) {
        if legal_moves(&next).is_empty() {
            san.push('#');
        } else {
            san.push('+');
        }
    }

    san
}

/// The minimal origin marker distinguishing `mv` from other legal moves of
/// the same kind to the same destination.
fn disambiguator(board: &Board, mv: Move) -> String {
    let rivals: Vec<Move> = legal_moves(board)
        .into_iter()
        .filter(|other| {
            other.kind() == mv.kind() && other.to() == mv.to() && other.from() != mv.from()
        })
        .collect();

    if rivals.is_empty() {
        String::new()
    } else if !rivals.iter().any(|other| other.from().file() == mv.from().file()) {
        mv.from().file().to_string()
    } else if !rivals.iter().any(|other| other.from().rank() == mv.from().rank()) {
        mv.from().rank().to_string()
    } else {
        mv.from().to_string()
    }
}

/// Recognizes both letter-O and digit-zero castling spellings.
fn castle_flag(text: &str) -> Option<MoveFlag> {
    match text {
        "O-O" | "0-0" => Some(MoveFlag::ShortCastle),
        "O-O-O" | "0-0-0" => Some(MoveFlag::LongCastle),
        _ => None,
    }
}

/// Splits a (castling-free, suffix-free) SAN token into its parts.
///
/// Returns `None` if the text does not scan, which callers report as
/// [`ParseError::MalformedToken`].
fn tokenize(text: &str) -> Option<Token> {
    let mut chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return None;
    }

    // Promotion suffix, with or without the '=': "e8=Q".
    let mut promotion = None;
    if let Some(&last) = chars.last() {
        if last.is_ascii_uppercase() && chars.len() >= 3 {
            promotion = Some(PieceKind::from_letter(last).ok()?);
            chars.pop();
            if chars.last() == Some(&'=') {
                chars.pop();
            } else {
                return None; // promotions must be written with '='
            }
        }
    }

    // Destination square: always the final two characters.
    if chars.len() < 2 {
        return None;
    }
    let rank = Rank::from_char(chars.pop()?).ok()?;
    let file = File::from_char(chars.pop()?).ok()?;
    let to = Square::new(file, rank);

    let mut rest = chars.into_iter().peekable();

    // Leading piece letter; pawns have none.
    let mut kind = PieceKind::Pawn;
    if let Some(&first) = rest.peek() {
        if first.is_ascii_uppercase() {
            kind = PieceKind::from_letter(first).ok()?;
            if kind == PieceKind::Pawn {
                return None; // pawns are never written "P"
            }
            rest.next();
        }
    }

    // Optional disambiguator: a file, a rank, or both.
    let mut from_file = None;
    let mut from_rank = None;
    if let Some(&c) = rest.peek() {
        if let Ok(f) = File::from_char(c) {
            from_file = Some(f);
            rest.next();
        }
    }
    if let Some(&c) = rest.peek() {
        if let Ok(r) = Rank::from_char(c) {
            from_rank = Some(r);
            rest.next();
        }
    }

    // Capture marker.
    let mut captures = false;
    if rest.peek() == Some(&'x') {
        captures = true;
        rest.next();
    }

    // Anything left over means the token did not scan.
    if rest.next().is_some() {
        return None;
    }

    Some(Token {
        kind,
        to,
        from_file,
        from_rank,
        captures,
        promotion,
    })
}
