//! Game state and the per-frame tick.
//!
//! `GameState` is a plain value: `tick` takes it by value and hands back the
//! next state together with a [`TickReport`] describing what happened.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::enemy::Enemy;
use crate::geometry::{collides, Point};
use crate::spawn::SpawnTimer;
use crate::GameError;

// ════════════════════════════════════════════════════════════════════════════
// GameConfig
// ════════════════════════════════════════════════════════════════════════════

/// Tunables for one game.  Distances are frame pixels, times are seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub width:          i32,
    pub height:         i32,
    pub player_radius:  i32,
    pub enemy_size:     i32,
    /// Pixels per tick.
    pub enemy_speed:    i32,
    pub spawn_interval: f32,
    /// Target frame rate; the loop waits `1000 / fps` ms for a key each tick.
    pub fps:            u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width:          640,
            height:         480,
            player_radius:  30,
            enemy_size:     50,
            enemy_speed:    5,
            spawn_interval: 2.0,
            fps:            30,
        }
    }
}

impl GameConfig {
    /// Where the player sits when no hand is visible: centred, two radii
    /// above the bottom edge.
    pub fn default_player(&self) -> Point {
        Point::new(self.width / 2, self.height - self.player_radius * 2)
    }

    /// Enemies must fall and have a size, the arena must have an area and the
    /// spawn interval must be a positive number of seconds.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: String| -> Result<(), GameError> { Err(GameError::InvalidConfig(msg)) };
        if self.width <= 0 || self.height <= 0 {
            return invalid(format!("arena {}x{} has no area", self.width, self.height));
        }
        if self.player_radius < 0 {
            return invalid(format!("player_radius = {} is negative", self.player_radius));
        }
        if self.enemy_size <= 0 {
            return invalid(format!("enemy_size = {} must be positive", self.enemy_size));
        }
        if self.enemy_speed <= 0 {
            return invalid(format!("enemy_speed = {} must be positive", self.enemy_speed));
        }
        if !self.spawn_interval.is_finite() || self.spawn_interval <= 0.0 {
            return invalid(format!("spawn_interval = {} must be positive", self.spawn_interval));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GameStatus / TickReport
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus { Running, GameOver }

/// What a single tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Player position used for this tick (control point or fallback).
    pub player:   Point,
    pub spawned:  bool,
    /// Enemies that fell off the bottom this tick (each scored once).
    pub removed:  usize,
    /// True only on the tick that moved the game into `GameOver`.
    pub collided: bool,
}

// ════════════════════════════════════════════════════════════════════════════
// GameState
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct GameState {
    config:  GameConfig,
    enemies: Vec<Enemy>,
    score:   u32,
    timer:   SpawnTimer,
    status:  GameStatus,
    player:  Point,
    rng:     StdRng,
}

impl GameState {
    /// A fresh running game.  `seed` fixes the spawn columns.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GameConfig) -> Result<Self, GameError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Result<Self, GameError> {
        config.validate()?;
        Ok(GameState {
            timer:   SpawnTimer::new(config.spawn_interval),
            player:  config.default_player(),
            config,
            enemies: Vec::new(),
            score:   0,
            status:  GameStatus::Running,
            rng,
        })
    }

    /// Advance one frame.
    ///
    /// `dt` is the time since the previous tick; `control` is the tracked
    /// fingertip, or `None` to use the fallback position.  Once the game is
    /// over the state is returned untouched.
    pub fn tick(mut self, dt: f32, control: Option<Point>) -> (Self, TickReport) {
        if self.status == GameStatus::GameOver {
            let report = TickReport {
                player:   self.player,
                spawned:  false,
                removed:  0,
                collided: false,
            };
            return (self, report);
        }

        self.player = control.unwrap_or_else(|| self.config.default_player());

        let spawned = self.timer.advance(dt);
        if spawned {
            let enemy = Enemy::spawn(
                &mut self.rng,
                self.config.width,
                self.config.enemy_size,
                self.config.enemy_speed,
            );
            log::debug!("spawned enemy at x={}", enemy.pos.x);
            self.enemies.push(enemy);
        }

        for enemy in &mut self.enemies {
            enemy.fall();
        }

        let height = self.config.height;
        let (removed, retained): (Vec<Enemy>, Vec<Enemy>) = std::mem::take(&mut self.enemies)
            .into_iter()
            .partition(|e| e.off_screen(height));
        self.enemies = retained;
        self.score += removed.len() as u32;

        let radius = self.config.player_radius;
        let collided = self.enemies.iter()
            .any(|e| collides(self.player, radius, e.pos, e.size));
        if collided {
            self.status = GameStatus::GameOver;
            log::info!("collision at ({}, {}); final score {}", self.player.x, self.player.y, self.score);
        }

        let report = TickReport {
            player: self.player,
            spawned,
            removed: removed.len(),
            collided,
        };
        (self, report)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn enemies(&self) -> &[Enemy]      { &self.enemies }
    pub fn score(&self)   -> u32           { self.score }
    pub fn status(&self)  -> GameStatus    { self.status }
    pub fn is_over(&self) -> bool          { self.status == GameStatus::GameOver }
    pub fn player(&self)  -> Point         { self.player }
    pub fn config(&self)  -> &GameConfig   { &self.config }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Far top-left corner: enemies never reach it before falling past it.
    const SAFE: Option<Point> = Some(Point::new(-1000, -1000));

    fn new_game() -> GameState {
        GameState::new(GameConfig::default(), 42).unwrap()
    }

    /// Run `n` ticks of `dt` with the player parked out of reach.
    fn run(mut s: GameState, n: usize, dt: f32) -> GameState {
        for _ in 0..n {
            s = s.tick(dt, SAFE).0;
        }
        s
    }

    #[test]
    fn starts_running_and_empty() {
        let s = new_game();
        assert_eq!(s.status(), GameStatus::Running);
        assert!(s.enemies().is_empty());
        assert_eq!(s.score(), 0);
        assert_eq!(s.player(), Point::new(320, 420));
    }

    #[test]
    fn zero_speed_is_rejected() {
        let cfg = GameConfig { enemy_speed: 0, ..GameConfig::default() };
        assert!(matches!(GameState::new(cfg.clone(), 1), Err(GameError::InvalidConfig(_))));
        assert!(GameState::from_entropy(cfg).is_err());
    }

    #[test]
    fn degenerate_configs_are_rejected() {
        let base = GameConfig::default();
        for cfg in [
            GameConfig { enemy_speed: -3, ..base.clone() },
            GameConfig { enemy_size: 0, ..base.clone() },
            GameConfig { player_radius: -1, ..base.clone() },
            GameConfig { width: 0, ..base.clone() },
            GameConfig { height: -480, ..base.clone() },
            GameConfig { spawn_interval: 0.0, ..base.clone() },
            GameConfig { spawn_interval: f32::NAN, ..base.clone() },
            GameConfig { spawn_interval: f32::INFINITY, ..base.clone() },
        ] {
            assert!(cfg.validate().is_err(), "{:?} accepted", cfg);
        }
        assert_eq!(base.validate(), Ok(()));
        assert_eq!(GameConfig { player_radius: 0, ..base }.validate(), Ok(()));
    }

    #[test]
    fn missing_control_point_uses_fallback() {
        let (_, r) = new_game().tick(0.1, None);
        assert_eq!(r.player, Point::new(320, 420));
        let (_, r) = new_game().tick(0.1, Some(Point::new(5, 6)));
        assert_eq!(r.player, Point::new(5, 6));
    }

    #[test]
    fn spawn_then_fall_in_same_tick() {
        let (s, r) = new_game().tick(2.5, SAFE);
        assert!(r.spawned);
        assert_eq!(s.enemies().len(), 1);
        assert_eq!(s.enemies()[0].pos.y, 5);
    }

    #[test]
    fn one_spawn_per_two_second_window() {
        // 0.5 s per tick: spawns on ticks 5, 10, 15, ... (2.5 s > 2.0 s).
        let mut s = new_game();
        let mut spawns = 0;
        for _ in 0..40 {
            let (next, r) = s.tick(0.5, SAFE);
            s = next;
            if r.spawned { spawns += 1; }
        }
        assert_eq!(spawns, 8);
    }

    #[test]
    fn count_never_grows_without_spawn() {
        let mut s = new_game();
        for _ in 0..2_000 {
            let before = s.enemies().len();
            let (next, r) = s.tick(0.1, SAFE);
            s = next;
            if !r.spawned {
                assert!(s.enemies().len() <= before);
            }
        }
    }

    #[test]
    fn enemies_fall_strictly_until_removed() {
        let (mut s, _) = new_game().tick(2.5, SAFE);
        assert_eq!(s.enemies().len(), 1);
        let mut last_y = s.enemies()[0].pos.y;
        loop {
            let (next, _) = s.tick(0.0, SAFE);
            s = next;
            match s.enemies().first() {
                Some(e) => { assert!(e.pos.y > last_y); last_y = e.pos.y; }
                None    => break,
            }
        }
        assert!(last_y <= 480);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn score_counts_every_removal_and_never_drops() {
        let mut s = new_game();
        let mut removed_total = 0u32;
        let mut last_score = 0;
        for _ in 0..3_000 {
            let (next, r) = s.tick(0.1, SAFE);
            s = next;
            removed_total += r.removed as u32;
            assert!(s.score() >= last_score);
            last_score = s.score();
        }
        assert!(removed_total > 0);
        assert_eq!(s.score(), removed_total);
    }

    #[test]
    fn several_enemies_leave_in_one_tick() {
        let mut s = new_game();
        s.enemies = vec![
            Enemy { pos: Point::new(0, 478), size: 50, speed: 5 },
            Enemy { pos: Point::new(100, 479), size: 50, speed: 5 },
            Enemy { pos: Point::new(200, 100), size: 50, speed: 5 },
        ];
        let (s, r) = s.tick(0.0, SAFE);
        assert_eq!(r.removed, 2);
        assert_eq!(s.score(), 2);
        assert_eq!(s.enemies().len(), 1);
    }

    #[test]
    fn collision_ends_the_game_once() {
        let mut s = new_game();
        s.enemies = vec![Enemy { pos: Point::new(80, 60), size: 50, speed: 5 }];
        let (s, r) = s.tick(0.0, Some(Point::new(100, 100)));
        assert!(r.collided);
        assert_eq!(s.status(), GameStatus::GameOver);

        let frozen: Vec<Enemy> = s.enemies().to_vec();
        let score = s.score();
        let (s, r) = s.tick(5.0, Some(Point::new(100, 100)));
        assert!(!r.collided);
        assert!(!r.spawned);
        assert_eq!(s.enemies(), frozen.as_slice());
        assert_eq!(s.score(), score);
        assert!(s.is_over());
    }

    #[test]
    fn removed_enemy_cannot_collide() {
        let mut s = new_game();
        s.enemies = vec![Enemy { pos: Point::new(300, 478), size: 50, speed: 5 }];
        // Player hugging the bottom edge right under the block.
        let (s, r) = s.tick(0.0, Some(Point::new(320, 470)));
        assert_eq!(r.removed, 1);
        assert!(!r.collided);
        assert_eq!(s.status(), GameStatus::Running);
    }

    #[test]
    fn same_seed_same_columns() {
        let a = run(new_game(), 100, 0.25);
        let b = run(new_game(), 100, 0.25);
        assert_eq!(a.enemies(), b.enemies());
    }
}
