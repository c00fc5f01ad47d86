//! Move making and unmaking for search
//!
//! `Game::make_move` applies a move and returns an `Undo` token holding every
//! piece of state it changed. Handing that token back to `Game::unmake_move`
//! restores the position exactly.

use super::board::{CastlingRights, Color, Game, PieceId, Square};
use super::moves::Move;
use super::piece::{Archetype, PieceType};
use crate::error::{EngineError, EngineResult};

/// Information needed to undo a move
#[derive(Clone, Debug)]
pub struct Undo {
    pub mv: Move,
    pub mover: Color,
    /// Value of the piece the move captured, 0 if none
    pub captured_value: f64,
    castling: [CastlingRights; 2],
    en_passant: Option<Square>,
    moved: PieceId,
    from: Square,
    to: Square,
    rook: Option<(PieceId, Square, Square)>,
    captured: Option<(PieceId, Square)>,
    promoted_from: Option<&'static Archetype>,
}

impl Undo {
    /// Whether the move took a king
    pub fn captured_king(&self) -> bool {
        self.captured_value >= PieceType::KING_VALUE
    }
}

impl Game {
    /// Apply `mv` for `color`. Fails without touching the position when the move
    /// cannot be applied to it.
    pub fn make_move(&mut self, color: Color, mv: Move) -> EngineResult<Undo> {
        let castling = [
            self.player(Color::White).castling,
            self.player(Color::Black).castling,
        ];
        let en_passant = self.board.en_passant;

        if mv.is_castling() {
            return self.make_castle(color, mv, castling, en_passant);
        }

        if !mv.from.is_on_board() || !mv.to.is_on_board() {
            return Err(EngineError::invalid_parameter(format!("move {} leaves the board", mv)));
        }
        let moved = self
            .board
            .get(mv.from)
            .ok_or_else(|| EngineError::internal(format!("no piece on {} to move", mv.from)))?;
        let piece = *self.piece(moved);
        if piece.color != color {
            return Err(EngineError::illegal(format!(
                "{} cannot move the {} piece on {}",
                color.name(),
                piece.color.name(),
                mv.from
            )));
        }
        let is_pawn = piece.piece_type() == PieceType::Pawn;
        if mv.promotion.is_some() && !is_pawn {
            return Err(EngineError::illegal(format!("only pawns promote ({})", mv)));
        }

        let captured = match self.board.get(mv.to) {
            Some(id) if id.color == color => {
                return Err(EngineError::illegal(format!("{} captures its own piece", mv)));
            }
            Some(id) => Some((id, mv.to)),
            None if is_pawn && mv.from.col() != mv.to.col() => {
                // En passant: the victim stands beside the mover, behind the destination.
                let victim_sq = Square::from_row_col(mv.from.row(), mv.to.col());
                match self.board.get(victim_sq) {
                    Some(id)
                        if id.color != color
                            && self.piece(id).piece_type() == PieceType::Pawn
                            && en_passant == Some(victim_sq) =>
                    {
                        Some((id, victim_sq))
                    }
                    _ => {
                        return Err(EngineError::illegal(format!(
                            "{} has no pawn to take en passant",
                            mv
                        )));
                    }
                }
            }
            None => None,
        };

        self.board.en_passant = None;

        let mut captured_value = 0.0;
        if let Some((id, sq)) = captured {
            let victim = self.piece_mut(id);
            victim.captured = true;
            captured_value = victim.value();
            let (victim_type, victim_col) = (victim.piece_type(), victim.col);
            self.board.set(sq, None);

            let opponent = color.opposite();
            if victim_type == PieceType::Rook && sq.row() == opponent.back_row() {
                self.player_mut(opponent).castling.remove_for_rook_col(victim_col);
            }
        }

        self.relocate(moved, mv.from, mv.to);

        let mut promoted_from = None;
        if let Some(pt) = mv.promotion {
            let piece = self.piece_mut(moved);
            promoted_from = Some(piece.archetype);
            piece.archetype = Archetype::of(pt);
        }

        match piece.piece_type() {
            PieceType::King => self.player_mut(color).castling = CastlingRights::NONE,
            PieceType::Rook if mv.from.row() == color.back_row() => {
                self.player_mut(color).castling.remove_for_rook_col(mv.from.col());
            }
            PieceType::Pawn if (mv.to.row() - mv.from.row()).abs() == 2 => {
                self.board.en_passant = Some(mv.to);
            }
            _ => {}
        }

        Ok(Undo {
            mv,
            mover: color,
            captured_value,
            castling,
            en_passant,
            moved,
            from: mv.from,
            to: mv.to,
            rook: None,
            captured,
            promoted_from,
        })
    }

    fn make_castle(
        &mut self,
        color: Color,
        mv: Move,
        castling: [CastlingRights; 2],
        en_passant: Option<Square>,
    ) -> EngineResult<Undo> {
        let kingside = mv.is_kingside_castle();
        if !self.has_castling_pieces(color, kingside) {
            return Err(EngineError::illegal(format!(
                "{} cannot castle without king and rook in place",
                color.name()
            )));
        }

        let row = color.back_row();
        let between = if kingside { 5..7 } else { 1..4 };
        if between.into_iter().any(|col| !self.board.is_empty(Square::from_row_col(row, col))) {
            return Err(EngineError::illegal(format!(
                "{} cannot castle through occupied squares",
                color.name()
            )));
        }
        let (rook_from_col, rook_to_col, king_to_col) = if kingside { (7, 5, 6) } else { (0, 3, 2) };
        let king_from = Square::from_row_col(row, 4);
        let king_to = Square::from_row_col(row, king_to_col);
        let rook_from = Square::from_row_col(row, rook_from_col);
        let rook_to = Square::from_row_col(row, rook_to_col);

        let (Some(king), Some(rook)) = (self.board.get(king_from), self.board.get(rook_from)) else {
            return Err(EngineError::internal("castling pieces vanished"));
        };

        self.board.en_passant = None;
        self.relocate(king, king_from, king_to);
        self.relocate(rook, rook_from, rook_to);
        self.player_mut(color).castling = CastlingRights::NONE;

        Ok(Undo {
            mv,
            mover: color,
            captured_value: 0.0,
            castling,
            en_passant,
            moved: king,
            from: king_from,
            to: king_to,
            rook: Some((rook, rook_from, rook_to)),
            captured: None,
            promoted_from: None,
        })
    }

    /// Restore the position from before the move that produced `undo`
    pub fn unmake_move(&mut self, undo: Undo) {
        self.relocate(undo.moved, undo.to, undo.from);
        if let Some(archetype) = undo.promoted_from {
            self.piece_mut(undo.moved).archetype = archetype;
        }
        if let Some((rook, rook_from, rook_to)) = undo.rook {
            self.relocate(rook, rook_to, rook_from);
        }
        if let Some((id, sq)) = undo.captured {
            self.piece_mut(id).captured = false;
            self.board.set(sq, Some(id));
        }

        self.player_mut(Color::White).castling = undo.castling[Color::White.index()];
        self.player_mut(Color::Black).castling = undo.castling[Color::Black.index()];
        self.board.en_passant = undo.en_passant;
    }

    fn relocate(&mut self, id: PieceId, from: Square, to: Square) {
        self.board.set(from, None);
        self.board.set(to, Some(id));
        let piece = self.piece_mut(id);
        piece.row = to.row();
        piece.col = to.col();
    }
}
