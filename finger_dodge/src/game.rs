//! The dodge game loop.
//!
//! One iteration = capture → mirror → track → tick → draw → present → key
//! wait.  The loop owns the [`Capture`], so the camera is released on every
//! way out, `?` included.

use std::time::{Duration, Instant};

use dodge_core::{GameState, Point};
use hand_track::{Capture, FrameSource, HandLandmark, HandTracker, LandmarkProvider};

use crate::render::{RenderSink, RED, WHITE};
use crate::DodgeError;

/// How long the "Game Over" picture stays up.
pub const GAME_OVER_HOLD: Duration = Duration::from_millis(3000);

// ════════════════════════════════════════════════════════════════════════════
// TickClock
// ════════════════════════════════════════════════════════════════════════════

/// Source of per-tick `dt`, in seconds.
#[derive(Clone, Copy, Debug)]
pub enum TickClock {
    /// Real time since the previous lap.
    Wall(Instant),
    /// The same step every tick (replays, tests).
    Fixed(f32),
}

impl TickClock {
    pub fn wall() -> Self {
        TickClock::Wall(Instant::now())
    }

    pub fn lap(&mut self) -> f32 {
        match self {
            TickClock::Wall(last) => {
                let now = Instant::now();
                let dt = now.duration_since(*last).as_secs_f32();
                *last = now;
                dt
            }
            TickClock::Fixed(dt) => *dt,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Summary
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `q` pressed.
    Quit,
    /// The camera stopped delivering frames.
    StreamEnded,
    /// The player touched a block.
    GameOver,
    WindowClosed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub score:   u32,
    pub ticks:   u64,
    pub outcome: Outcome,
}

// ════════════════════════════════════════════════════════════════════════════
// run
// ════════════════════════════════════════════════════════════════════════════

pub fn run<S, P, R>(
    mut capture: Capture<S>,
    tracker:     &mut HandTracker<P>,
    sink:        &mut R,
    mut state:   GameState,
    clock:       &mut TickClock,
) -> Result<GameSummary, DodgeError>
where
    S: FrameSource,
    P: LandmarkProvider,
    R: RenderSink,
{
    let cfg = state.config().clone();
    let (w, h) = (cfg.width as usize, cfg.height as usize);
    let key_wait = Duration::from_millis(1000 / u64::from(cfg.fps.max(1)));
    let mut ticks = 0u64;

    let outcome = loop {
        if !capture.is_opened() { break Outcome::StreamEnded; }
        if !sink.is_open()      { break Outcome::WindowClosed; }

        let frame = match capture.read() {
            Ok(f)  => f.flipped(),
            Err(e) => {
                log::info!("stopping: {}", e);
                break Outcome::StreamEnded;
            }
        };

        let hands = tracker.process(&frame);
        sink.begin(frame);
        for hand in &hands {
            sink.draw_landmarks(hand);
        }
        let control = hands.first()
            .map(|hand| Point::from(hand.point_in(HandLandmark::IndexFingerTip, w, h)));

        let (next, report) = state.tick(clock.lap(), control);
        state = next;
        ticks += 1;
        if report.removed > 0 {
            log::debug!("score {} (+{})", state.score(), report.removed);
        }

        for enemy in state.enemies() {
            sink.fill_rect(enemy.pos, enemy.far_corner(), RED);
        }

        if report.collided {
            sink.put_text("Game Over", Point::new(cfg.width / 2 - 100, cfg.height / 2), 2, RED);
            sink.present()?;
            sink.wait_key(GAME_OVER_HOLD);
            break Outcome::GameOver;
        }

        sink.fill_circle(report.player, cfg.player_radius, WHITE);
        sink.put_text(&format!("Score: {}", state.score()), Point::new(10, 40), 1, WHITE);
        sink.present()?;

        if sink.wait_key(key_wait) == Some('q') {
            break Outcome::Quit;
        }
    };

    capture.close();
    log::info!("game ended ({:?}) after {} ticks, score {}", outcome, ticks, state.score());
    Ok(GameSummary { score: state.score(), ticks, outcome })
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
