//! The 21-point hand layout.
//!
//! ```text
//!            8   12  16  20
//!            |   |   |   |
//!        4   7   11  15  19
//!        |   |   |   |   |
//!        3   6   10  14  18
//!         \  |   |   |   |
//!          2 5 - 9 - 13- 17
//!           \ \         /
//!            1 \       /
//!             \ \     /
//!               0 ---
//! ```
//!
//! Coordinates are normalised to the frame: `x` and `y` in `[0, 1]` for
//! points inside the image, `z` relative depth (smaller is nearer).

/// Named landmark indices, wrist first, then each finger from base to tip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc, ThumbMcp, ThumbIp, ThumbTip,
    IndexFingerMcp, IndexFingerPip, IndexFingerDip, IndexFingerTip,
    MiddleFingerMcp, MiddleFingerPip, MiddleFingerDip, MiddleFingerTip,
    RingFingerMcp, RingFingerPip, RingFingerDip, RingFingerTip,
    PinkyMcp, PinkyPip, PinkyDip, PinkyTip,
}

impl HandLandmark {
    pub const COUNT: usize = 21;

    pub fn index(self) -> usize { self as usize }
}

/// Skeleton edges between landmark indices: the palm outline, then each
/// finger chain.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    // palm
    (0, 1), (0, 5), (5, 9), (9, 13), (13, 17), (0, 17),
    // thumb
    (1, 2), (2, 3), (3, 4),
    // index
    (5, 6), (6, 7), (7, 8),
    // middle
    (9, 10), (10, 11), (11, 12),
    // ring
    (13, 14), (14, 15), (15, 16),
    // pinky
    (17, 18), (18, 19), (19, 20),
];

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }

    /// Scale to integer pixels in a `width × height` frame, truncating toward
    /// zero.
    pub fn to_pixels(self, width: usize, height: usize) -> (i32, i32) {
        ((self.x * width as f32) as i32, (self.y * height as f32) as i32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handedness { Left, Right }

/// One detected hand.
#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    pub landmarks:  [Landmark; HandLandmark::COUNT],
    pub handedness: Handedness,
    /// Detector confidence, 0.0–1.0.
    pub score:      f32,
}

impl Hand {
    pub fn landmark(&self, which: HandLandmark) -> Landmark {
        self.landmarks[which.index()]
    }

    /// Pixel position of `which` in a `width × height` frame.
    pub fn point_in(&self, which: HandLandmark, width: usize, height: usize) -> (i32, i32) {
        self.landmark(which).to_pixels(width, height)
    }

    /// Skeleton segments as landmark pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Landmark, Landmark)> + '_ {
        HAND_CONNECTIONS.iter().map(move |&(a, b)| (self.landmarks[a], self.landmarks[b]))
    }
}
