//! Direction vectors for piece movement
//!
//! Every piece's movement pattern is derived from a single seed vector by
//! reflecting it across the X axis, the Y axis and the diagonal X == Y.

/// A 2D step on the board: `dx` moves along columns, `dy` along rows
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Vector2 {
    pub dx: i8,
    pub dy: i8,
}

impl Vector2 {
    pub const STRAIGHT: Vector2 = Vector2::new(1, 0);
    pub const DIAGONAL: Vector2 = Vector2::new(1, 1);
    pub const KNIGHT: Vector2 = Vector2::new(2, 1);

    #[inline]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Vector2 { dx, dy }
    }

    /// Reflect in the X axis
    #[inline]
    pub const fn reflect_x(self) -> Self {
        Vector2::new(self.dx, -self.dy)
    }

    /// Reflect in the Y axis
    #[inline]
    pub const fn reflect_y(self) -> Self {
        Vector2::new(-self.dx, self.dy)
    }

    /// Reflect in the line X == Y
    #[inline]
    pub const fn reflect_diagonal(self) -> Self {
        Vector2::new(self.dy, self.dx)
    }
}

/// All distinct orientations of `seed`
pub fn build_directions(seed: Vector2) -> Vec<Vector2> {
    let mut directions = Vec::with_capacity(8);
    add_all_orientations(&mut directions, seed);
    directions
}

/// Append every orientation of `seed` not already in `directions`.
///
/// Each reflection pass runs over everything this call has added so far, so the
/// later reflections also see the vectors produced by the earlier ones.
pub fn add_all_orientations(directions: &mut Vec<Vector2>, seed: Vector2) {
    if directions.contains(&seed) {
        return;
    }

    let start = directions.len();
    directions.push(seed);

    let reflections: [fn(Vector2) -> Vector2; 3] = [
        Vector2::reflect_x,
        Vector2::reflect_y,
        Vector2::reflect_diagonal,
    ];

    for reflect in reflections {
        let end = directions.len();
        for i in start..end {
            let reflected = reflect(directions[i]);
            if !directions.contains(&reflected) {
                directions.push(reflected);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(v: &[Vector2]) -> HashSet<(i8, i8)> {
        v.iter().map(|d| (d.dx, d.dy)).collect()
    }

    #[test]
    fn test_straight_seed() {
        let dirs = build_directions(Vector2::STRAIGHT);
        assert_eq!(dirs.len(), 4);
        assert_eq!(as_set(&dirs), HashSet::from([(1, 0), (-1, 0), (0, 1), (0, -1)]));
    }

    #[test]
    fn test_diagonal_seed() {
        let dirs = build_directions(Vector2::DIAGONAL);
        assert_eq!(dirs.len(), 4);
        assert_eq!(as_set(&dirs), HashSet::from([(1, 1), (1, -1), (-1, 1), (-1, -1)]));
    }

    #[test]
    fn test_knight_seed() {
        let dirs = build_directions(Vector2::KNIGHT);
        assert_eq!(dirs.len(), 8);
        for d in &dirs {
            let (ax, ay) = (d.dx.abs(), d.dy.abs());
            assert!((ax, ay) == (2, 1) || (ax, ay) == (1, 2), "unexpected {:?}", d);
        }
        assert_eq!(as_set(&dirs).len(), 8);
    }

    #[test]
    fn test_seed_order_is_kept() {
        let dirs = build_directions(Vector2::STRAIGHT);
        assert_eq!(dirs[0], Vector2::STRAIGHT);
        assert_eq!(dirs[1], Vector2::new(-1, 0));
    }

    #[test]
    fn test_repeated_seed_is_ignored() {
        let mut dirs = build_directions(Vector2::STRAIGHT);
        add_all_orientations(&mut dirs, Vector2::new(0, -1));
        assert_eq!(dirs.len(), 4);
        add_all_orientations(&mut dirs, Vector2::DIAGONAL);
        assert_eq!(dirs.len(), 8);
    }
}
