//! Landmark providers and the thresholding `HandTracker`.

use crate::frame::Frame;
use crate::landmark::Hand;
use crate::TrackError;

/// Anything that turns a frame into hands: a neural model, a LeapMotion
/// controller, a mouse-driven simulation.
pub trait LandmarkProvider {
    fn detect(&mut self, frame: &Frame) -> Vec<Hand>;
}

impl<P: LandmarkProvider + ?Sized> LandmarkProvider for Box<P> {
    fn detect(&mut self, frame: &Frame) -> Vec<Hand> {
        (**self).detect(frame)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// TrackerConfig
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    pub max_num_hands:            usize,
    /// Confidence floor while no hand is being tracked.
    pub min_detection_confidence: f32,
    /// Confidence floor while a hand from the previous frame is held.
    pub min_tracking_confidence:  f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            max_num_hands:            2,
            min_detection_confidence: 0.5,
            min_tracking_confidence:  0.5,
        }
    }
}

impl TrackerConfig {
    /// Settings for the landmark visualizer.
    pub fn contours() -> Self {
        TrackerConfig {
            min_detection_confidence: 0.7,
            ..TrackerConfig::default()
        }
    }

    /// Settings for the dodge game: one hand, held tightly.
    pub fn game() -> Self {
        TrackerConfig {
            max_num_hands:            1,
            min_detection_confidence: 0.7,
            min_tracking_confidence:  0.7,
        }
    }

    pub fn validate(&self) -> Result<(), TrackError> {
        if self.max_num_hands == 0 {
            return Err(TrackError::InvalidConfig("max_num_hands must be at least 1".into()));
        }
        for (name, v) in [
            ("min_detection_confidence", self.min_detection_confidence),
            ("min_tracking_confidence",  self.min_tracking_confidence),
        ] {
            if !(0.0..=1.0).contains(&v) {
                return Err(TrackError::InvalidConfig(format!("{} = {} is outside 0.0–1.0", name, v)));
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HandTracker
// ════════════════════════════════════════════════════════════════════════════

/// Wraps a provider with detection/tracking hysteresis: a hand that was
/// accepted last frame only has to clear the tracking floor this frame.
pub struct HandTracker<P: LandmarkProvider> {
    provider: P,
    config:   TrackerConfig,
    tracking: bool,
}

impl<P: LandmarkProvider> HandTracker<P> {
    pub fn new(provider: P, config: TrackerConfig) -> Result<Self, TrackError> {
        config.validate()?;
        Ok(HandTracker { provider, config, tracking: false })
    }

    /// Detect, filter by the current confidence floor, keep at most
    /// `max_num_hands` (highest confidence first is the provider's job).
    pub fn process(&mut self, frame: &Frame) -> Vec<Hand> {
        let floor = self.floor();
        let mut hands: Vec<Hand> = self.provider.detect(frame)
            .into_iter()
            .filter(|h| h.score >= floor)
            .collect();
        hands.truncate(self.config.max_num_hands);

        let was_tracking = self.tracking;
        self.tracking = !hands.is_empty();
        if was_tracking != self.tracking {
            log::debug!("hand {}", if self.tracking { "acquired" } else { "lost" });
        }
        hands
    }

    fn floor(&self) -> f32 {
        if self.tracking {
            self.config.min_tracking_confidence
        } else {
            self.config.min_detection_confidence
        }
    }

    pub fn is_tracking(&self) -> bool { self.tracking }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
