//! Move ordering by captured piece.
//!
//! Moves are sorted into seven buckets as they are generated: one per captured
//! piece type (king first, pawn last) and a final one for quiet moves. The
//! generator's output is the buckets concatenated, so the most valuable
//! captures are searched first and alpha-beta cuts earlier.

use crate::core::moves::{Move, MoveList};
use crate::core::piece::PieceType;

pub const NUM_BUCKETS: usize = 7;

/// Bucket of moves that capture nothing
pub const QUIET_BUCKET: usize = NUM_BUCKETS - 1;

/// Ordering bucket of a move capturing `captured`
#[inline]
pub fn capture_rank(captured: Option<PieceType>) -> usize {
    captured.map_or(QUIET_BUCKET, PieceType::index)
}

pub struct MoveBuckets {
    buckets: [Vec<Move>; NUM_BUCKETS],
}

impl MoveBuckets {
    pub fn new() -> Self {
        MoveBuckets {
            buckets: std::array::from_fn(|_| Vec::new()),
        }
    }

    #[inline]
    pub fn push(&mut self, rank: usize, mv: Move) {
        self.buckets[rank.min(QUIET_BUCKET)].push(mv);
    }

    /// Concatenate buckets 0..6 in order
    pub fn into_list(mut self) -> MoveList {
        let mut list = MoveList::new();
        for bucket in self.buckets.iter_mut() {
            list.append(bucket);
        }
        list
    }
}

impl Default for MoveBuckets {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Square;

    #[test]
    fn test_capture_rank() {
        assert_eq!(capture_rank(Some(PieceType::King)), 0);
        assert_eq!(capture_rank(Some(PieceType::Pawn)), 5);
        assert_eq!(capture_rank(None), 6);
    }

    #[test]
    fn test_buckets_concatenate_in_rank_order() {
        let quiet = Move::new(Square(8), Square(16));
        let takes_pawn = Move::new(Square(9), Square(18));
        let takes_queen = Move::new(Square(10), Square(19));

        let mut buckets = MoveBuckets::new();
        buckets.push(capture_rank(None), quiet);
        buckets.push(capture_rank(Some(PieceType::Pawn)), takes_pawn);
        buckets.push(capture_rank(Some(PieceType::Queen)), takes_queen);

        let list = buckets.into_list();
        assert_eq!(list.as_slice(), &[takes_queen, takes_pawn, quiet]);
    }
}
