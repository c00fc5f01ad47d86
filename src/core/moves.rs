//! Move representation
//!
//! A move is a source square, a destination square and an optional promotion.
//! Castling uses the board's sentinel squares as both source and destination:
//! `Square::CASTLE_KINGSIDE` -> `Square::CASTLE_KINGSIDE` castles short.

use super::board::{Color, Square};
use super::piece::PieceType;
use std::fmt;

/// A chess move
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Create a normal move
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move
    #[inline]
    pub const fn new_promotion(from: Square, to: Square, piece: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    #[inline]
    pub const fn castle_kingside() -> Self {
        Move::new(Square::CASTLE_KINGSIDE, Square::CASTLE_KINGSIDE)
    }

    #[inline]
    pub const fn castle_queenside() -> Self {
        Move::new(Square::CASTLE_QUEENSIDE, Square::CASTLE_QUEENSIDE)
    }

    /// Check if this is castling
    #[inline]
    pub const fn is_castling(self) -> bool {
        self.from.is_castle_sentinel()
    }

    #[inline]
    pub const fn is_kingside_castle(self) -> bool {
        self.from.0 == Square::CASTLE_KINGSIDE.0
    }

    /// Check if this is a promotion
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Convert to UCI notation (e.g., "e2e4", "e7e8q"). Castling is written as
    /// the king's two-square move on `side`'s back row.
    pub fn to_uci(self, side: Color) -> String {
        if self.is_castling() {
            let row = side.back_row();
            let to_col = if self.is_kingside_castle() { 6 } else { 2 };
            return format!(
                "{}{}",
                Square::from_row_col(row, 4).to_algebraic(),
                Square::from_row_col(row, to_col).to_algebraic()
            );
        }
        let promo = self.promotion.map(|pt| pt.to_char().to_string()).unwrap_or_default();
        format!("{}{}{}", self.from.to_algebraic(), self.to.to_algebraic(), promo)
    }

    /// Parse the squares and promotion of UCI notation. Castling is resolved
    /// against the position by `Game::parse_move`.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }

        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;

        if s.len() == 5 {
            let promo = PieceType::from_char(s.chars().nth(4)?)
                .filter(|pt| PieceType::PROMOTIONS.contains(pt))?;
            Some(Move::new_promotion(from, to, promo))
        } else {
            Some(Move::new(from, to))
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castling() {
            return write!(f, "{}", self.from);
        }
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(pt) = self.promotion {
            write!(f, "{}", pt.to_char())?;
        }
        Ok(())
    }
}

/// An ordered list of moves
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create a new empty move list
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    /// Add a move to the list
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Append every move of another list, keeping its order
    pub fn append(&mut self, other: &mut Vec<Move>) {
        self.moves.append(other);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Move> {
        self.moves.get(index).copied()
    }

    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    fn index(&self, index: usize) -> &Self::Output {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
