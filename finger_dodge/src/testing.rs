//! Headless doubles for the loop tests: a scripted camera, scripted hands
//! and a sink that records draw calls instead of rasterising.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use dodge_core::Point;
use hand_track::{
    CaptureError, Frame, FrameSource, Hand, HandLandmark, Handedness, Landmark, LandmarkProvider,
};

use crate::render::RenderSink;
use crate::DodgeError;

// ── Camera ────────────────────────────────────────────────────────────────

pub struct ScriptedCamera {
    reads:    VecDeque<Result<Frame, CaptureError>>,
    open:     bool,
    released: Rc<Cell<u32>>,
}

impl ScriptedCamera {
    pub fn new(reads: Vec<Result<Frame, CaptureError>>) -> (Self, Rc<Cell<u32>>) {
        let released = Rc::new(Cell::new(0));
        let cam = ScriptedCamera { reads: reads.into(), open: true, released: released.clone() };
        (cam, released)
    }

    /// `n` blank frames, then end of stream.
    pub fn blank(n: usize, width: usize, height: usize) -> (Self, Rc<Cell<u32>>) {
        Self::new((0..n).map(|_| Ok(Frame::new(width, height, 0xFF000000))).collect())
    }
}

impl FrameSource for ScriptedCamera {
    fn read(&mut self) -> Result<Frame, CaptureError> {
        match self.reads.pop_front() {
            Some(r) => r,
            None    => { self.open = false; Err(CaptureError::Closed) }
        }
    }
    fn is_opened(&self) -> bool { self.open }
    fn release(&mut self) {
        self.open = false;
        self.released.set(self.released.get() + 1);
    }
}

// ── Hands ─────────────────────────────────────────────────────────────────

/// One hand set per `detect`; empty once the script runs out, or the same
/// set forever when built with [`ScriptedHands::always`].
pub struct ScriptedHands {
    batches: VecDeque<Vec<Hand>>,
    repeat:  Option<Vec<Hand>>,
}

impl ScriptedHands {
    pub fn none() -> Self {
        Self::script(vec![])
    }

    pub fn always(hands: Vec<Hand>) -> Self {
        ScriptedHands { batches: VecDeque::new(), repeat: Some(hands) }
    }

    /// `batches[i]` answers the i-th `detect`.
    pub fn script(batches: Vec<Vec<Hand>>) -> Self {
        ScriptedHands { batches: batches.into(), repeat: None }
    }
}

impl LandmarkProvider for ScriptedHands {
    fn detect(&mut self, _frame: &Frame) -> Vec<Hand> {
        self.batches.pop_front()
            .or_else(|| self.repeat.clone())
            .unwrap_or_default()
    }
}

/// A confident hand with every landmark at the same normalised point.
pub fn hand_at(x: f32, y: f32) -> Hand {
    Hand {
        landmarks:  [Landmark::new(x, y, 0.0); HandLandmark::COUNT],
        handedness: Handedness::Right,
        score:      1.0,
    }
}

// ── Sink ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Rect(Point, Point, u32),
    Circle(Point, i32, u32),
    Text(String, Point, i32, u32),
    /// Index fingertip of the drawn hand.
    Landmarks(Landmark),
}

#[derive(Default)]
pub struct Recorder {
    current:   Vec<DrawOp>,
    /// Draw calls of every presented picture, in order.
    pub shown: Vec<Vec<DrawOp>>,
    pub waits: Vec<Duration>,
    keys:      VecDeque<Option<char>>,
    pub open:  bool,
    /// Make the next `present` fail as if the window had gone away.
    pub fail_present: bool,
}

impl Recorder {
    /// Answers `wait_key` from `keys`, then with `None`.
    pub fn with_keys(keys: Vec<Option<char>>) -> Self {
        Recorder { keys: keys.into(), open: true, ..Recorder::default() }
    }

    pub fn last(&self) -> &[DrawOp] {
        self.shown.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl RenderSink for Recorder {
    fn begin(&mut self, _frame: Frame) {
        self.current.clear();
    }
    fn fill_rect(&mut self, a: Point, b: Point, color: u32) {
        self.current.push(DrawOp::Rect(a, b, color));
    }
    fn fill_circle(&mut self, center: Point, radius: i32, color: u32) {
        self.current.push(DrawOp::Circle(center, radius, color));
    }
    fn put_text(&mut self, text: &str, origin: Point, scale: i32, color: u32) {
        self.current.push(DrawOp::Text(text.to_string(), origin, scale, color));
    }
    fn draw_landmarks(&mut self, hand: &Hand) {
        self.current.push(DrawOp::Landmarks(hand.landmark(HandLandmark::IndexFingerTip)));
    }
    fn present(&mut self) -> Result<(), DodgeError> {
        if self.fail_present {
            return Err(minifb::Error::UpdateFailed("display lost".into()).into());
        }
        self.shown.push(std::mem::take(&mut self.current));
        Ok(())
    }
    fn wait_key(&mut self, timeout: Duration) -> Option<char> {
        self.waits.push(timeout);
        self.keys.pop_front().flatten()
    }
    fn is_open(&self) -> bool { self.open }
}
