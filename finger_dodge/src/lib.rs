//! # finger_dodge
//!
//! Two small programs on top of [`hand_track`] and [`dodge_core`]:
//!
//! * **finger_dodge** — red blocks fall, a white circle follows your index
//!   fingertip, every block that leaves the bottom scores a point, touching
//!   one ends the game.
//! * **hand_contours** — mirrors the camera and draws every detected hand's
//!   21-point skeleton.
//!
//! Both loops are generic over [`hand_track::FrameSource`],
//! [`hand_track::LandmarkProvider`] and [`render::RenderSink`], so they run
//! headless in tests and against a `minifb` window in the binaries.
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: the mouse pointer is the fingertip.
//! * `leap` — **Hardware mode**: hand joints from a LeapMotion controller.
//!
//! ## Keys
//!
//! | Key | Action |
//! |---|---|
//! | `Q` | Quit |
//! | `H` | Hide / show the simulated hand |

pub mod canvas;
pub mod render;
pub mod screen;
pub mod game;
pub mod contours;

#[cfg(test)]
pub(crate) mod testing;

use dodge_core::GameError;
use hand_track::{LandmarkProvider, TrackError};
use thiserror::Error;

use crate::screen::Screen;

#[derive(Error, Debug)]
pub enum DodgeError {
    #[error("window error: {0}")]
    Window(#[from] minifb::Error),
    #[error(transparent)]
    Track(#[from] TrackError),
    #[error(transparent)]
    Game(#[from] GameError),
}

/// The landmark provider for this build: the mouse-driven simulation,
/// wired to `screen`'s pointer.
#[cfg(not(feature = "leap"))]
pub fn open_provider(screen: &mut Screen) -> Result<Box<dyn LandmarkProvider>, DodgeError> {
    let (tx, sim) = hand_track::SimHandProvider::channel();
    screen.forward_pointer(tx);
    log::info!("hand source: mouse simulation (H hides the hand)");
    Ok(Box::new(sim))
}

/// The landmark provider for this build: a LeapMotion controller.
#[cfg(feature = "leap")]
pub fn open_provider(_screen: &mut Screen) -> Result<Box<dyn LandmarkProvider>, DodgeError> {
    let leap = hand_track::LeapHandProvider::spawn()?;
    log::info!("hand source: LeapMotion");
    Ok(Box::new(leap))
}
