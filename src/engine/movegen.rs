//! Move generation
//!
//! Moves are generated per roster piece from its archetype's direction vectors:
//! - Stepping and sliding pieces walk each direction until blocked
//! - Pawns follow their own rules (advances, diagonal captures, en passant, promotion)
//! - Castling is added last, checked against the opponent's attacked squares
//!
//! Generation is pseudo-legal: a king may be left en prise, and losing it ends the game.

use crate::core::board::{Color, Game, Square};
use crate::core::moves::{Move, MoveList};
use crate::core::piece::{Piece, PieceType};

use super::ordering::{capture_rank, MoveBuckets, QUIET_BUCKET};

pub struct MoveGen;

impl MoveGen {
    /// Generate every move for `color`, most valuable captures first.
    ///
    /// With `attacking_only` set, the result holds just the moves that attack a
    /// square: no pawn advances, no castling, and pawn diagonals onto empty
    /// squares are included.
    pub fn generate_moves(game: &Game, color: Color, attacking_only: bool) -> MoveList {
        let mut buckets = MoveBuckets::new();

        for piece in game.player(color).pieces.iter().filter(|p| !p.captured) {
            if piece.piece_type() == PieceType::Pawn {
                Self::generate_pawn_moves(game, piece, attacking_only, &mut buckets);
            } else {
                Self::generate_piece_moves(game, piece, &mut buckets);
            }
        }

        if !attacking_only {
            Self::generate_castling_moves(game, color, &mut buckets);
        }

        buckets.into_list()
    }

    /// Whether any move in `moves` lands on `sq`
    pub fn is_attacking_square(moves: &MoveList, sq: Square) -> bool {
        moves.iter().any(|mv| mv.to == sq)
    }

    fn generate_piece_moves(game: &Game, piece: &Piece, buckets: &mut MoveBuckets) {
        let from = piece.square();
        let archetype = piece.archetype;

        for dir in &archetype.directions {
            let mut current = from;
            while let Some(to) = current.offset(dir.dy, dir.dx) {
                match game.piece_at(to) {
                    Some(other) if other.color == piece.color => break,
                    Some(other) => {
                        buckets.push(capture_rank(Some(other.piece_type())), Move::new(from, to));
                        break;
                    }
                    None => buckets.push(QUIET_BUCKET, Move::new(from, to)),
                }
                if !archetype.unlimited_range {
                    break;
                }
                current = to;
            }
        }
    }

    fn generate_pawn_moves(game: &Game, pawn: &Piece, attacking_only: bool, buckets: &mut MoveBuckets) {
        let color = pawn.color;
        let from = pawn.square();
        let dir = color.pawn_direction();

        if !attacking_only {
            if let Some(one) = from.offset(dir, 0).filter(|&sq| game.board.is_empty(sq)) {
                Self::push_pawn_move(color, from, one, QUIET_BUCKET, buckets);

                if from.row() == color.pawn_start_row()
                    && let Some(two) = one.offset(dir, 0).filter(|&sq| game.board.is_empty(sq))
                {
                    buckets.push(QUIET_BUCKET, Move::new(from, two));
                }
            }
        }

        for d_col in [-1, 1] {
            let Some(to) = from.offset(dir, d_col) else {
                continue;
            };
            match game.piece_at(to) {
                Some(other) if other.color != color => {
                    Self::push_pawn_move(color, from, to, capture_rank(Some(other.piece_type())), buckets);
                }
                Some(_) => {}
                None if attacking_only => buckets.push(QUIET_BUCKET, Move::new(from, to)),
                None => {}
            }
        }

        // En passant. In attacking-only mode the destination was already emitted above.
        if attacking_only {
            return;
        }
        let Some(marker) = game.board.en_passant else {
            return;
        };
        if marker.row() != from.row() || (marker.col() - from.col()).abs() != 1 {
            return;
        }
        let is_opposing_pawn = game
            .piece_at(marker)
            .is_some_and(|p| p.color != color && p.piece_type() == PieceType::Pawn);
        if let Some(to) = marker.offset(dir, 0)
            && is_opposing_pawn
            && game.board.is_empty(to)
        {
            buckets.push(capture_rank(Some(PieceType::Pawn)), Move::new(from, to));
        }
    }

    /// Push a pawn move, expanded into the four promotions on the far row
    fn push_pawn_move(color: Color, from: Square, to: Square, rank: usize, buckets: &mut MoveBuckets) {
        if to.row() == color.promotion_row() {
            for pt in PieceType::PROMOTIONS {
                buckets.push(rank, Move::new_promotion(from, to, pt));
            }
        } else {
            buckets.push(rank, Move::new(from, to));
        }
    }

    fn generate_castling_moves(game: &Game, color: Color, buckets: &mut MoveBuckets) {
        let rights = game.player(color).castling;
        if !rights.kingside && !rights.queenside {
            return;
        }

        let row = color.back_row();
        let at = |col: i8| Square::from_row_col(row, col);
        let all_empty = |cols: &[i8]| cols.iter().all(|&col| game.board.is_empty(at(col)));

        // Opponent attacks are generated once, on first need, and shared by both sides.
        let mut attacks: Option<MoveList> = None;
        let mut all_safe = |cols: &[i8]| {
            let attacks = attacks.get_or_insert_with(|| Self::generate_moves(game, color.opposite(), true));
            cols.iter().all(|&col| !Self::is_attacking_square(attacks, at(col)))
        };

        if rights.kingside
            && game.has_castling_pieces(color, true)
            && all_empty(&[5, 6])
            && all_safe(&[4, 5, 6])
        {
            buckets.push(QUIET_BUCKET, Move::castle_kingside());
        }

        if rights.queenside
            && game.has_castling_pieces(color, false)
            && all_empty(&[1, 2, 3])
            && all_safe(&[2, 3, 4])
        {
            buckets.push(QUIET_BUCKET, Move::castle_queenside());
        }
    }
}
