//! finger_dodge — fingertip-controlled falling-block game.

use dodge_core::{GameConfig, GameState};
use finger_dodge::game::{self, TickClock};
use finger_dodge::screen::Screen;
use finger_dodge::{open_provider, DodgeError};
use hand_track::{Capture, HandTracker, SimCamera, TrackerConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Finger Dodge — avoid the falling blocks         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "leap")]
    println!("  Mode: LeapMotion hardware");
    #[cfg(not(feature = "leap"))]
    println!("  Mode: Mouse simulation  (use --features leap for hardware)");
    println!("  Keys: Q quit, H hide hand");
    println!();

    match play() {
        Ok(summary) => println!("\n  {:?} — final score {}\n", summary.outcome, summary.score),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn play() -> Result<game::GameSummary, DodgeError> {
    let cfg = GameConfig::default();
    let (w, h) = (cfg.width as usize, cfg.height as usize);

    let mut screen  = Screen::new("Enemy Dodging Game", w, h)?;
    let provider    = open_provider(&mut screen)?;
    let mut tracker = HandTracker::new(provider, TrackerConfig::game())?;
    let capture     = Capture::open(SimCamera::new(w, h));

    let state = GameState::from_entropy(cfg)?;
    game::run(capture, &mut tracker, &mut screen, state, &mut TickClock::wall())
}
