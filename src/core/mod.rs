//! Core chess types and representations
//!
//! This module contains the fundamental building blocks of the chess engine:
//! - Direction vectors and piece archetypes
//! - Board state, rosters and game setup
//! - Move representation
//! - Move making and unmaking

pub mod board;
pub mod geometry;
pub mod make_unmake;
pub mod moves;
pub mod piece;

pub use board::{Board, CastlingRights, Color, Game, PieceId, Player, Square};
pub use geometry::{build_directions, Vector2};
pub use make_unmake::Undo;
pub use moves::{Move, MoveList};
pub use piece::{Archetype, Piece, PieceType};
