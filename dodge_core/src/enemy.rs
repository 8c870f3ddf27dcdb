//! Falling blocks.

use rand::Rng;

use crate::geometry::Point;

/// A square block falling straight down at a constant speed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    /// Top-left corner in frame pixels.
    pub pos:   Point,
    pub size:  i32,
    pub speed: i32,
}

impl Enemy {
    pub fn new(x: i32, size: i32, speed: i32) -> Self {
        Enemy { pos: Point::new(x, 0), size, speed }
    }

    /// Spawn at the top edge in a uniformly random column that keeps the
    /// whole block inside `[0, width)`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: i32, size: i32, speed: i32) -> Self {
        let max_x = (width - size).max(0);
        Enemy::new(rng.gen_range(0..=max_x), size, speed)
    }

    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// True once the top edge has passed the bottom of a frame `height` tall.
    pub fn off_screen(&self, height: i32) -> bool {
        self.pos.y > height
    }

    /// Bottom-right corner, inclusive, for drawing.
    pub fn far_corner(&self) -> Point {
        self.pos.offset(self.size, self.size)
    }
}
