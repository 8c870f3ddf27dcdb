//! hand_contours — mirror the camera and draw every detected hand.

use finger_dodge::contours::{self, ContourSummary};
use finger_dodge::screen::Screen;
use finger_dodge::{open_provider, DodgeError};
use hand_track::{Capture, HandTracker, SimCamera, TrackerConfig};

const WIDTH:  usize = 640;
const HEIGHT: usize = 480;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!();
    println!("  Hand Contours — press Q to quit");
    println!();

    if let Err(e) = show() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn show() -> Result<ContourSummary, DodgeError> {
    let mut screen  = Screen::new("Hand Contours", WIDTH, HEIGHT)?;
    let provider    = open_provider(&mut screen)?;
    let mut tracker = HandTracker::new(provider, TrackerConfig::contours())?;
    let capture     = Capture::open(SimCamera::new(WIDTH, HEIGHT));

    contours::run(capture, &mut tracker, &mut screen)
}
