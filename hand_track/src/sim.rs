//! Pointer-driven hand simulation.
//!
//! The window forwards the mouse as [`SimInput`] events; [`SimHandProvider`]
//! answers each `detect` with one posed right hand whose index fingertip sits
//! under the pointer.  No hardware, no model.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::frame::Frame;
use crate::landmark::{Hand, HandLandmark, Handedness, Landmark};
use crate::tracker::LandmarkProvider;

/// Raw input from the simulation window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimInput {
    /// Pointer position normalised to the frame, or `None` when it left the
    /// window.
    Pointer(Option<(f32, f32)>),
    /// Pull the hand out of view (or put it back).
    ToggleHand,
}

/// Open right hand, palm to the camera, in hand-lengths relative to the
/// wrist (y up is negative).  Mirrored view: thumb on the left.
const POSE: [(f32, f32); HandLandmark::COUNT] = [
    ( 0.00,  0.00),
    (-0.12, -0.08), (-0.22, -0.18), (-0.30, -0.27), (-0.36, -0.35),
    (-0.09, -0.38), (-0.10, -0.52), (-0.11, -0.62), (-0.12, -0.71),
    ( 0.00, -0.40), ( 0.00, -0.56), ( 0.00, -0.67), ( 0.00, -0.77),
    ( 0.08, -0.37), ( 0.09, -0.51), ( 0.10, -0.61), ( 0.11, -0.69),
    ( 0.15, -0.31), ( 0.18, -0.41), ( 0.20, -0.48), ( 0.22, -0.55),
];

/// Hand length as a fraction of frame height.
const HAND_SCALE: f32 = 0.45;
const SIM_SCORE:  f32 = 0.95;

pub struct SimHandProvider {
    rx:      Receiver<SimInput>,
    pointer: Option<(f32, f32)>,
    hidden:  bool,
}

impl SimHandProvider {
    pub fn new(rx: Receiver<SimInput>) -> Self {
        SimHandProvider { rx, pointer: None, hidden: false }
    }

    /// A provider plus the sender the window should feed.
    pub fn channel() -> (Sender<SimInput>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, SimHandProvider::new(rx))
    }

    fn drain(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(SimInput::Pointer(p))   => self.pointer = p,
                Ok(SimInput::ToggleHand)   => {
                    self.hidden = !self.hidden;
                    log::info!("simulated hand {}", if self.hidden { "hidden" } else { "shown" });
                }
                Err(TryRecvError::Empty)
                | Err(TryRecvError::Disconnected) => break,
            }
        }
    }
}

impl LandmarkProvider for SimHandProvider {
    fn detect(&mut self, frame: &Frame) -> Vec<Hand> {
        self.drain();
        if self.hidden || frame.width() == 0 || frame.height() == 0 {
            return Vec::new();
        }
        match self.pointer {
            Some((px, py)) => vec![pose_hand(px, py, frame.width(), frame.height())],
            None           => Vec::new(),
        }
    }
}

/// Lay [`POSE`] out so that the index fingertip lands on `(px, py)`.
fn pose_hand(px: f32, py: f32, width: usize, height: usize) -> Hand {
    let span = HAND_SCALE * height as f32;
    let sx = span / width as f32;
    let sy = span / height as f32;
    let (tx, ty) = POSE[HandLandmark::IndexFingerTip.index()];

    let mut landmarks = [Landmark::default(); HandLandmark::COUNT];
    for (i, (lm, &(hx, hy))) in landmarks.iter_mut().zip(POSE.iter()).enumerate() {
        *lm = Landmark::new(
            px + (hx - tx) * sx,
            py + (hy - ty) * sy,
            -0.01 * i as f32,
        );
    }
    Hand { landmarks, handedness: Handedness::Right, score: SIM_SCORE }
}
