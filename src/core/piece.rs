//! Piece types, their shared archetypes, and roster pieces

use super::board::{Color, Square};
use super::geometry::{add_all_orientations, Vector2};
use crate::error::{EngineError, EngineResult};
use std::sync::OnceLock;

/// Piece type, ordered by value from highest to lowest.
///
/// The discriminant doubles as the capture-ordering bucket of a move that takes
/// a piece of this type.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum PieceType {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    /// Material value of a king, and the threshold for "the game is decided"
    pub const KING_VALUE: f64 = 1000.0;

    /// What a pawn may promote to, in generation order
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> EngineResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| EngineError::internal(format!("unrecognized piece type index {}", index)))
    }

    /// Lowercase letter used in UCI promotion suffixes
    pub const fn to_char(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Pawn => 'p',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'q' => Some(PieceType::Queen),
            'r' => Some(PieceType::Rook),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

/// Immutable movement and value template shared by all pieces of one type
#[derive(Clone, PartialEq, Debug)]
pub struct Archetype {
    pub piece_type: PieceType,
    /// Uppercase display glyph
    pub glyph: char,
    pub value: f64,
    /// True for pieces that slide until blocked
    pub unlimited_range: bool,
    /// Empty for pawns, whose movement is rule-based
    pub directions: Vec<Vector2>,
}

static ARCHETYPES: OnceLock<[Archetype; 6]> = OnceLock::new();

impl Archetype {
    pub fn new(piece_type: PieceType) -> Self {
        let (glyph, value, unlimited_range, seeds): (char, f64, bool, &[Vector2]) = match piece_type {
            PieceType::King => ('K', PieceType::KING_VALUE, false, &[Vector2::STRAIGHT, Vector2::DIAGONAL][..]),
            PieceType::Queen => ('Q', 9.0, true, &[Vector2::STRAIGHT, Vector2::DIAGONAL][..]),
            PieceType::Rook => ('R', 5.0, true, &[Vector2::STRAIGHT][..]),
            PieceType::Bishop => ('B', 3.125, true, &[Vector2::DIAGONAL][..]),
            PieceType::Knight => ('N', 3.0, false, &[Vector2::KNIGHT][..]),
            PieceType::Pawn => ('P', 1.0, false, &[][..]),
        };

        let mut directions = Vec::with_capacity(8);
        for &seed in seeds {
            add_all_orientations(&mut directions, seed);
        }

        Archetype {
            piece_type,
            glyph,
            value,
            unlimited_range,
            directions,
        }
    }

    /// The process-wide archetype for a piece type
    pub fn of(piece_type: PieceType) -> &'static Archetype {
        &ARCHETYPES.get_or_init(|| PieceType::ALL.map(Archetype::new))[piece_type.index()]
    }
}

/// A piece in a side's roster. Captured pieces stay in the roster with `captured` set.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Piece {
    pub archetype: &'static Archetype,
    pub color: Color,
    pub row: i8,
    pub col: i8,
    pub captured: bool,
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color, row: i8, col: i8) -> Self {
        Piece {
            archetype: Archetype::of(piece_type),
            color,
            row,
            col,
            captured: false,
        }
    }

    #[inline]
    pub fn piece_type(&self) -> PieceType {
        self.archetype.piece_type
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.archetype.value
    }

    #[inline]
    pub fn square(&self) -> Square {
        Square::from_row_col(self.row, self.col)
    }

    /// Display glyph: uppercase for White, lowercase for Black
    pub fn glyph(&self) -> char {
        match self.color {
            Color::White => self.archetype.glyph,
            Color::Black => self.archetype.glyph.to_ascii_lowercase(),
        }
    }
}
