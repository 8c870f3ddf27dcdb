//! # hand_track
//!
//! Everything between the camera and a fingertip coordinate:
//!
//! * [`frame`] — `Frame` pixel buffers, the `FrameSource` trait, the scoped
//!   `Capture` handle and a synthetic `SimCamera`.
//! * [`landmark`] — the 21-point hand layout and its skeleton topology.
//! * [`tracker`] — the `LandmarkProvider` trait and the `HandTracker`
//!   wrapper that applies confidence thresholds and the hand-count limit.
//! * [`sim`] — a provider that poses a synthetic hand under the mouse.
//! * `leap` — a provider backed by a LeapMotion controller.
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: the window forwards the mouse pointer
//!   and a posed hand follows it, index fingertip first.
//! * `leap` — **Hardware mode**: real hand joints from LeapC.

pub mod frame;
pub mod landmark;
pub mod tracker;
pub mod sim;
#[cfg(feature = "leap")]
pub mod leap;

pub use frame::{Capture, CaptureError, Frame, FrameSource, SimCamera};
pub use landmark::{Hand, HandLandmark, Handedness, Landmark, HAND_CONNECTIONS};
pub use tracker::{HandTracker, LandmarkProvider, TrackerConfig};
pub use sim::{SimHandProvider, SimInput};
#[cfg(feature = "leap")]
pub use leap::LeapHandProvider;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("invalid tracker configuration: {0}")]
    InvalidConfig(String),
    #[error("hand tracking device error: {0}")]
    Device(String),
}
