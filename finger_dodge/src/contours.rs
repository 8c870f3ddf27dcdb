//! Live hand-landmark visualizer loop.
//!
//! Unlike the game, a bad read is not the end: empty frames are logged and
//! skipped, and only a closed stream stops the loop.

use std::time::Duration;

use hand_track::{Capture, CaptureError, FrameSource, HandTracker, LandmarkProvider};

use crate::render::RenderSink;
use crate::DodgeError;

pub const KEY_WAIT: Duration = Duration::from_millis(5);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContourSummary {
    /// Frames presented.
    pub shown:   u64,
    /// Empty reads skipped.
    pub skipped: u64,
}

pub fn run<S, P, R>(
    mut capture: Capture<S>,
    tracker:     &mut HandTracker<P>,
    sink:        &mut R,
) -> Result<ContourSummary, DodgeError>
where
    S: FrameSource,
    P: LandmarkProvider,
    R: RenderSink,
{
    let mut summary = ContourSummary::default();

    while capture.is_opened() && sink.is_open() {
        let frame = match capture.read() {
            Ok(f) => f.flipped(),
            Err(CaptureError::EmptyFrame) => {
                log::warn!("Ignoring empty camera frame.");
                summary.skipped += 1;
                continue;
            }
            Err(CaptureError::Closed) => break,
        };

        let hands = tracker.process(&frame);
        sink.begin(frame);
        for hand in &hands {
            sink.draw_landmarks(hand);
        }
        sink.present()?;
        summary.shown += 1;

        if sink.wait_key(KEY_WAIT) == Some('q') {
            break;
        }
    }

    capture.close();
    log::info!("visualizer stopped: {} frames shown, {} skipped", summary.shown, summary.skipped);
    Ok(summary)
}
