//! # dodge_core
//!
//! Game logic for a "dodge the falling blocks" arcade game whose player is
//! steered by a tracked fingertip.  Nothing here knows about cameras, hand
//! models or windows: each tick takes an optional control point and returns
//! the next [`GameState`].
//!
//! ## Rules
//!
//! | Event | Effect |
//! |---|---|
//! | Spawn interval elapses | A block appears at a random column, `y = 0` |
//! | Every tick | Every block falls by its speed |
//! | Block top edge passes the bottom | Block removed, score + 1 |
//! | Player touches a block | `GameOver` — terminal |
//!
//! ## Example
//!
//! ```
//! use dodge_core::{GameConfig, GameState, Point};
//!
//! let state = GameState::new(GameConfig::default(), 7).unwrap();
//! let (state, report) = state.tick(0.5, Some(Point::new(100, 400)));
//! assert_eq!(report.player, Point::new(100, 400));
//! assert_eq!(state.score(), 0);
//! ```

pub mod geometry;
pub mod enemy;
pub mod spawn;
pub mod state;

pub use geometry::{collides, Point};
pub use enemy::Enemy;
pub use spawn::SpawnTimer;
pub use state::{GameConfig, GameState, GameStatus, TickReport};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),
}
