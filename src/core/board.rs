//! Chess board representation
//!
//! The board is a 64-slot mailbox. Pieces live by value in each side's roster;
//! slots hold `PieceId` handles into those rosters, so indices stay stable for
//! the whole game and no slot ever points at freed storage.

use super::moves::{Move, MoveList};
use super::piece::{Piece, PieceType};
use crate::engine::movegen::MoveGen;
use crate::error::{EngineError, EngineResult};
use shakmaty::fen::Fen;
use std::fmt;

/// Square index (0-63, a1=0, h8=63), plus two castling sentinels
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Square(pub u8);

impl Square {
    /// Source and destination of a kingside castle
    pub const CASTLE_KINGSIDE: Square = Square(64);
    /// Source and destination of a queenside castle
    pub const CASTLE_QUEENSIDE: Square = Square(65);

    #[inline]
    pub const fn new(sq: u8) -> Self {
        Square(sq)
    }

    #[inline]
    pub const fn from_row_col(row: i8, col: i8) -> Self {
        Square((row * 8 + col) as u8)
    }

    #[inline]
    pub const fn row(self) -> i8 {
        (self.0 >> 3) as i8
    }

    #[inline]
    pub const fn col(self) -> i8 {
        (self.0 & 7) as i8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.0 < 64
    }

    #[inline]
    pub const fn is_castle_sentinel(self) -> bool {
        self.0 == 64 || self.0 == 65
    }

    /// The square `d_row` rows and `d_col` columns away, if it is on the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() + d_row;
        let col = self.col() + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::from_row_col(row, col))
        } else {
            None
        }
    }

    /// Parse a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        if s.len() != 2 {
            return None;
        }
        let bytes = s.as_bytes();
        let col = bytes[0].wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if col < 8 && row < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Convert to algebraic notation
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col() as u8) as char;
        let rank = (b'1' + self.row() as u8) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Square::CASTLE_KINGSIDE => write!(f, "O-O"),
            Square::CASTLE_QUEENSIDE => write!(f, "O-O-O"),
            sq => write!(f, "{}", sq.to_algebraic()),
        }
    }
}

/// Side identity
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row step of a pawn advance
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

/// One side's castling rights. Once cleared, a right never comes back.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CastlingRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        kingside: false,
        queenside: false,
    };
    pub const BOTH: CastlingRights = CastlingRights {
        kingside: true,
        queenside: true,
    };

    /// Drop the right tied to a rook standing on `col` of the back row
    pub fn remove_for_rook_col(&mut self, col: i8) {
        match col {
            0 => self.queenside = false,
            7 => self.kingside = false,
            _ => {}
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::BOTH
    }
}

/// Handle into a side's roster
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct PieceId {
    pub color: Color,
    pub index: u8,
}

/// The 64 board slots plus the en-passant marker
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    slots: [Option<PieceId>; 64],
    /// Square of the pawn that just advanced two squares, for one move only
    pub en_passant: Option<Square>,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            slots: [None; 64],
            en_passant: None,
        }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<PieceId> {
        self.slots[sq.index()]
    }

    #[inline]
    pub fn set(&mut self, sq: Square, occupant: Option<PieceId>) {
        self.slots[sq.index()] = occupant;
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.slots[sq.index()].is_none()
    }

    /// Occupied squares with their occupants, a1 first
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|id| (Square(i as u8), id)))
    }
}

/// One side: identity, castling rights, and its roster in setup order
#[derive(Clone, PartialEq, Debug)]
pub struct Player {
    pub color: Color,
    pub castling: CastlingRights,
    pub pieces: Vec<Piece>,
}

impl Player {
    /// Standard initial roster: back rank a..h, then pawns a..h
    pub fn standard(color: Color) -> Self {
        const BACK_RANK: [PieceType; 8] = [
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ];

        let back_row = color.back_row();
        let pawn_row = color.pawn_start_row();
        let mut pieces = Vec::with_capacity(16);
        for (col, &pt) in BACK_RANK.iter().enumerate() {
            pieces.push(Piece::new(pt, color, back_row, col as i8));
        }
        for col in 0..8 {
            pieces.push(Piece::new(PieceType::Pawn, color, pawn_row, col));
        }

        Player {
            color,
            castling: CastlingRights::BOTH,
            pieces,
        }
    }

    /// Roster index of the uncaptured king, if any
    pub fn king(&self) -> Option<usize> {
        self.pieces
            .iter()
            .position(|p| !p.captured && p.piece_type() == PieceType::King)
    }
}

/// A game in progress: the board, both rosters, and the side to move
#[derive(Clone, PartialEq, Debug)]
pub struct Game {
    pub board: Board,
    players: [Player; 2],
    pub side_to_move: Color,
}

impl Game {
    /// The standard initial position, White to move
    pub fn new() -> Self {
        Self::from_players(Player::standard(Color::White), Player::standard(Color::Black), Color::White)
    }

    fn from_players(white: Player, black: Player, side_to_move: Color) -> Self {
        let mut game = Game {
            board: Board::empty(),
            players: [white, black],
            side_to_move,
        };
        for player in &game.players {
            for (index, piece) in player.pieces.iter().enumerate() {
                if !piece.captured {
                    game.board.set(
                        piece.square(),
                        Some(PieceId {
                            color: player.color,
                            index: index as u8,
                        }),
                    );
                }
            }
        }
        game
    }

    /// Parse a game from FEN notation.
    ///
    /// Rosters list pieces before pawns, each group by ascending square,
    /// which reproduces the standard roster order for the initial position.
    pub fn from_fen(fen: &str) -> EngineResult<Self> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|e| EngineError::invalid_parameter(format!("invalid FEN '{}': {}", fen, e)))?;
        let setup = parsed.as_setup();

        let mut placed: [Vec<(bool, u8, PieceType)>; 2] = [Vec::new(), Vec::new()];
        for index in 0..64u8 {
            let Some(piece) = setup.board.piece_at(shakmaty::Square::new(u32::from(index))) else {
                continue;
            };
            let color = match piece.color {
                shakmaty::Color::White => Color::White,
                shakmaty::Color::Black => Color::Black,
            };
            let piece_type = match piece.role {
                shakmaty::Role::King => PieceType::King,
                shakmaty::Role::Queen => PieceType::Queen,
                shakmaty::Role::Rook => PieceType::Rook,
                shakmaty::Role::Bishop => PieceType::Bishop,
                shakmaty::Role::Knight => PieceType::Knight,
                shakmaty::Role::Pawn => PieceType::Pawn,
            };
            placed[color.index()].push((piece_type == PieceType::Pawn, index, piece_type));
        }

        let [white, black] = placed.map(|mut list| {
            list.sort_by_key(|&(is_pawn, index, _)| (is_pawn, index));
            list
        });

        let build = |color: Color, list: Vec<(bool, u8, PieceType)>| -> EngineResult<Player> {
            if list.len() > u8::MAX as usize {
                return Err(EngineError::constructor_failed("too many pieces in roster"));
            }
            let pieces = list
                .into_iter()
                .map(|(_, index, pt)| {
                    let sq = Square(index);
                    Piece::new(pt, color, sq.row(), sq.col())
                })
                .collect();
            Ok(Player {
                color,
                castling: CastlingRights::NONE,
                pieces,
            })
        };

        let side_to_move = match setup.turn {
            shakmaty::Color::White => Color::White,
            shakmaty::Color::Black => Color::Black,
        };
        let mut game = Game::from_players(build(Color::White, white)?, build(Color::Black, black)?, side_to_move);

        for color in [Color::White, Color::Black] {
            let row = color.back_row();
            for (col, kingside) in [(7i8, true), (0i8, false)] {
                let corner = shakmaty::Square::new(u32::from(Square::from_row_col(row, col).0));
                if !setup.castling_rights.contains(corner) {
                    continue;
                }
                if !game.has_castling_pieces(color, kingside) {
                    return Err(EngineError::constructor_failed(format!(
                        "{} castling right without king and rook on their start squares",
                        color.name()
                    )));
                }
                let rights = &mut game.player_mut(color).castling;
                if kingside {
                    rights.kingside = true;
                } else {
                    rights.queenside = true;
                }
            }
        }

        if let Some(target) = setup.ep_square {
            // FEN names the square behind the pawn; the marker names the pawn itself.
            let target = Square(target as u8);
            let mover = side_to_move.opposite();
            let pawn_sq = target
                .offset(mover.pawn_direction(), 0)
                .ok_or_else(|| EngineError::constructor_failed("en passant square off the board"))?;
            match game.piece_at(pawn_sq) {
                Some(p) if p.color == mover && p.piece_type() == PieceType::Pawn => {
                    game.board.en_passant = Some(pawn_sq);
                }
                _ => {
                    return Err(EngineError::constructor_failed(format!(
                        "en passant square {} has no pawn in front of it",
                        target
                    )));
                }
            }
        }

        game.validate()?;
        Ok(game)
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.players[id.color.index()].pieces[id.index as usize]
    }

    #[inline]
    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.players[id.color.index()].pieces[id.index as usize]
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.board.get(sq).map(|id| self.piece(id))
    }

    /// Whether the king and the rook for one castling direction stand on their start squares
    pub fn has_castling_pieces(&self, color: Color, kingside: bool) -> bool {
        let row = color.back_row();
        let rook_col = if kingside { 7 } else { 0 };
        let is = |col: i8, pt: PieceType| {
            self.piece_at(Square::from_row_col(row, col))
                .is_some_and(|p| p.color == color && p.piece_type() == pt)
        };
        is(4, PieceType::King) && is(rook_col, PieceType::Rook)
    }

    /// True once `color` has no uncaptured king
    pub fn is_king_captured(&self, color: Color) -> bool {
        self.player(color).king().is_none()
    }

    /// Check that board slots and roster positions agree
    pub fn validate(&self) -> EngineResult<()> {
        for (sq, id) in self.board.occupied() {
            let player = &self.players[id.color.index()];
            let piece = player.pieces.get(id.index as usize).ok_or_else(|| {
                EngineError::internal(format!("slot {} refers to missing roster entry {:?}", sq, id))
            })?;
            if piece.captured {
                return Err(EngineError::internal(format!("captured piece still on {}", sq)));
            }
            if piece.square() != sq {
                return Err(EngineError::internal(format!(
                    "piece on {} believes it is on {}",
                    sq,
                    piece.square()
                )));
            }
        }
        for player in &self.players {
            for (index, piece) in player.pieces.iter().enumerate() {
                if piece.color != player.color {
                    return Err(EngineError::internal("piece listed in the wrong roster"));
                }
                if piece.captured {
                    continue;
                }
                let expected = Some(PieceId {
                    color: player.color,
                    index: index as u8,
                });
                if self.board.get(piece.square()) != expected {
                    return Err(EngineError::internal(format!(
                        "{} piece #{} is missing from {}",
                        player.color.name(),
                        index,
                        piece.square()
                    )));
                }
            }
        }
        Ok(())
    }

    /// All moves for the side to move
    pub fn legal_moves(&self) -> MoveList {
        MoveGen::generate_moves(self, self.side_to_move, false)
    }

    /// Map UCI text ("e2e4", "e7e8q", "e1g1") to a generated move for the side to move
    pub fn parse_move(&self, text: &str) -> EngineResult<Move> {
        let text = text.trim().to_ascii_lowercase();
        Move::from_uci(&text)
            .ok_or_else(|| EngineError::invalid_parameter(format!("malformed move '{}'", text)))?;
        self.legal_moves()
            .iter()
            .copied()
            .find(|mv| mv.to_uci(self.side_to_move) == text)
            .ok_or_else(|| {
                EngineError::illegal(format!("{} cannot play {}", self.side_to_move.name(), text))
            })
    }

    /// Commit a generated move for the side to move and pass the turn
    pub fn play(&mut self, mv: Move) -> EngineResult<()> {
        if !self.legal_moves().contains(&mv) {
            return Err(EngineError::illegal(format!(
                "{} is not available to {}",
                mv,
                self.side_to_move.name()
            )));
        }
        self.make_move(self.side_to_move, mv)?;
        self.side_to_move = self.side_to_move.opposite();
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for col in 0..8 {
                let c = match self.piece_at(Square::from_row_col(row, col)) {
                    Some(piece) => piece.glyph(),
                    None if (row + col) % 2 == 0 => '*',
                    None => ' ',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
