//! Software rasteriser over a [`Frame`].
//!
//! Every primitive clips against the frame, so callers can draw shapes that
//! hang off the edge (a block half off the bottom, a hand leaving the view).

use dodge_core::Point;
use hand_track::{Frame, Hand};

use crate::render::{CONNECTION_COLOR, LANDMARK_COLOR};

/// Pixels per font cell at text scale 1.
const CELL_PX: i32 = 4;
/// Glyph advance in cells: 3 wide + 1 gap.
const ADVANCE: i32 = 4;
const GLYPH_ROWS: i32 = 5;

pub struct Canvas {
    frame: Frame,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Canvas { frame: Frame::new(width, height, 0xFF000000) }
    }

    /// Replace the backing image, e.g. with a fresh camera frame.
    pub fn load(&mut self, frame: Frame) {
        self.frame = frame;
    }

    pub fn frame(&self) -> &Frame { &self.frame }

    /// Filled axis-aligned rectangle between two inclusive corners.
    pub fn fill_rect(&mut self, a: Point, b: Point, color: u32) {
        let (w, h) = (self.frame.width() as i32, self.frame.height() as i32);
        let x0 = a.x.min(b.x).max(0);
        let x1 = a.x.max(b.x).min(w - 1);
        let y0 = a.y.min(b.y).max(0);
        let y1 = a.y.max(b.y).min(h - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.frame.set(x, y, color);
            }
        }
    }

    pub fn fill_circle(&mut self, center: Point, radius: i32, color: u32) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.frame.set(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    /// Bresenham line, stamped `thickness` pixels square.
    pub fn line(&mut self, a: Point, b: Point, thickness: i32, color: u32) {
        let t = thickness.max(1);
        let lo = -(t / 2);
        let hi = lo + t - 1;

        let (mut x, mut y) = (a.x, a.y);
        let dx = (b.x - a.x).abs();
        let dy = -(b.y - a.y).abs();
        let sx = if a.x < b.x { 1 } else { -1 };
        let sy = if a.y < b.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            for oy in lo..=hi {
                for ox in lo..=hi {
                    self.frame.set(x + ox, y + oy, color);
                }
            }
            if x == b.x && y == b.y { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x += sx; }
            if e2 <= dx { err += dx; y += sy; }
        }
    }

    /// Draw `text` with its bottom-left corner at `origin`.
    pub fn put_text(&mut self, text: &str, origin: Point, scale: i32, color: u32) {
        let cell = CELL_PX * scale.max(1);
        let top = origin.y - GLYPH_ROWS * cell;
        let mut cx = origin.x;
        for ch in text.chars() {
            for (row, bits) in glyph(ch).iter().enumerate() {
                for col in 0..3 {
                    if bits & (0b100 >> col) != 0 {
                        let x = cx + col * cell;
                        let y = top + row as i32 * cell;
                        self.fill_rect(Point::new(x, y), Point::new(x + cell - 1, y + cell - 1), color);
                    }
                }
            }
            cx += ADVANCE * cell;
        }
    }

    /// Hand skeleton: connections as 2 px lines, landmarks as dots on top.
    pub fn draw_hand(&mut self, hand: &Hand) {
        let (w, h) = (self.frame.width(), self.frame.height());
        let px = |l: hand_track::Landmark| Point::from(l.to_pixels(w, h));
        for (a, b) in hand.segments() {
            self.line(px(a), px(b), 2, CONNECTION_COLOR);
        }
        for &l in hand.landmarks.iter() {
            self.fill_circle(px(l), 2, LANDMARK_COLOR);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// 3×5 bitmap font.  Rows top to bottom, bit 2 is the left column.
// ────────────────────────────────────────────────────────────────────────────

const GLYPHS: &[(char, [u8; 5])] = &[
    ('0', [7, 5, 5, 5, 7]), ('1', [2, 6, 2, 2, 7]), ('2', [7, 1, 7, 4, 7]),
    ('3', [7, 1, 7, 1, 7]), ('4', [5, 5, 7, 1, 1]), ('5', [7, 4, 7, 1, 7]),
    ('6', [7, 4, 7, 5, 7]), ('7', [7, 1, 1, 1, 1]), ('8', [7, 5, 7, 5, 7]),
    ('9', [7, 5, 7, 1, 7]),
    ('A', [7, 5, 7, 5, 5]), ('B', [6, 5, 6, 5, 6]), ('C', [7, 4, 4, 4, 7]),
    ('D', [6, 5, 5, 5, 6]), ('E', [7, 4, 7, 4, 7]), ('F', [7, 4, 7, 4, 4]),
    ('G', [7, 4, 5, 5, 7]), ('H', [5, 5, 7, 5, 5]), ('I', [7, 2, 2, 2, 7]),
    ('J', [1, 1, 1, 5, 7]), ('K', [5, 5, 6, 5, 5]), ('L', [4, 4, 4, 4, 7]),
    ('M', [5, 7, 5, 5, 5]), ('N', [7, 5, 5, 5, 5]), ('O', [7, 5, 5, 5, 7]),
    ('P', [7, 5, 7, 4, 4]), ('Q', [7, 5, 5, 7, 1]), ('R', [6, 5, 6, 5, 5]),
    ('S', [7, 4, 7, 1, 7]), ('T', [7, 2, 2, 2, 2]), ('U', [5, 5, 5, 5, 7]),
    ('V', [5, 5, 5, 2, 2]), ('W', [5, 5, 5, 7, 5]), ('X', [5, 5, 2, 5, 5]),
    ('Y', [5, 5, 7, 2, 2]), ('Z', [7, 1, 2, 4, 7]),
    (':', [0, 2, 0, 2, 0]), ('-', [0, 0, 7, 0, 0]), ('.', [0, 0, 0, 0, 2]),
    ('!', [2, 2, 2, 0, 2]), ('/', [1, 1, 2, 4, 4]), (' ', [0, 0, 0, 0, 0]),
];

fn glyph(c: char) -> [u8; 5] {
    let c = c.to_ascii_uppercase();
    GLYPHS.iter()
        .find(|(g, _)| *g == c)
        .map(|(_, rows)| *rows)
        .unwrap_or([7, 5, 5, 5, 7])
}
