//! Integer frame coordinates and the player/enemy overlap test.

/// A point in frame pixels.  Origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Does the player's square `player ± radius` touch the enemy square at
/// `enemy` (top-left) with side `size`?
///
/// All comparisons are strict, so shapes that merely share an edge do not
/// collide.  The horizontal test accepts either the bare player point inside
/// the enemy's column span, or the radius-widened span overlapping it; the
/// vertical test only uses the widened span.  The second horizontal clause
/// subsumes the first, so in practice both axes reduce to a box overlap.
pub fn collides(player: Point, radius: i32, enemy: Point, size: i32) -> bool {
    let Point { x: px, y: py } = player;
    let Point { x: ex, y: ey } = enemy;

    let horizontal = (px > ex && px < ex + size)
        || (px + radius > ex && px - radius < ex + size);
    let vertical = py + radius > ey && py - radius < ey + size;

    horizontal && vertical
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
