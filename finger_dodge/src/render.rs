//! The render sink seen by the frame loops.

use std::time::Duration;

use dodge_core::Point;
use hand_track::{Frame, Hand};

use crate::DodgeError;

pub const WHITE: u32 = 0xFFFFFFFF;
pub const RED:   u32 = 0xFFFF0000;

pub const LANDMARK_COLOR:   u32 = RED;
pub const CONNECTION_COLOR: u32 = 0xFFE0E0E0;

/// Where a loop sends its drawing.  One `begin` … `present` sequence per
/// tick, followed by a `wait_key`.
pub trait RenderSink {
    /// Start a new picture on top of `frame`.
    fn begin(&mut self, frame: Frame);
    /// Filled rectangle between two inclusive corners.
    fn fill_rect(&mut self, a: Point, b: Point, color: u32);
    fn fill_circle(&mut self, center: Point, radius: i32, color: u32);
    /// Text whose bottom-left corner is `origin`.
    fn put_text(&mut self, text: &str, origin: Point, scale: i32, color: u32);
    fn draw_landmarks(&mut self, hand: &Hand);
    fn present(&mut self) -> Result<(), DodgeError>;
    /// Wait up to `timeout` for a key press.
    fn wait_key(&mut self, timeout: Duration) -> Option<char>;
    /// False once the user has closed the output.
    fn is_open(&self) -> bool { true }
}
