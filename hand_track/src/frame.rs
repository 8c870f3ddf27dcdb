//! Frames and frame sources.
//!
//! A [`FrameSource`] stands in for a camera.  Loops never hold a source
//! directly; they hold a [`Capture`], which releases the device exactly once
//! however the loop ends.

use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// Frame
// ════════════════════════════════════════════════════════════════════════════

/// One image, packed `0xAARRGGBB`, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    width:  usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Frame {
    pub fn new(width: usize, height: usize, fill: u32) -> Self {
        Frame { width, height, pixels: vec![fill; width * height] }
    }

    /// Wrap an existing buffer.  Returns `None` if the length does not match.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Frame { width, height, pixels })
    }

    pub fn width(&self)  -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn pixels(&self) -> &[u32] { &self.pixels }
    pub fn pixels_mut(&mut self) -> &mut [u32] { &mut self.pixels }

    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Write one pixel; coordinates outside the frame are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 { return None; }
        let (x, y) = (x as usize, y as usize);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Mirror left-to-right in place (selfie view).
    pub fn flip_horizontal(&mut self) {
        if self.width == 0 { return; }
        for row in self.pixels.chunks_exact_mut(self.width) {
            row.reverse();
        }
    }

    pub fn flipped(mut self) -> Self {
        self.flip_horizontal();
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FrameSource
// ════════════════════════════════════════════════════════════════════════════

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The device is open but produced nothing this time.
    #[error("camera returned an empty frame")]
    EmptyFrame,
    /// The stream is exhausted or the device has been released.
    #[error("camera stream is closed")]
    Closed,
}

/// Anything that yields frames: a webcam, a video file, a test script.
pub trait FrameSource {
    fn read(&mut self) -> Result<Frame, CaptureError>;
    fn is_opened(&self) -> bool;
    /// Give the device back.  Called once by [`Capture`].
    fn release(&mut self);
}

// ════════════════════════════════════════════════════════════════════════════
// Capture — scoped ownership of a source
// ════════════════════════════════════════════════════════════════════════════

/// Owns a [`FrameSource`] and guarantees `release` runs exactly once: on
/// [`Capture::close`] or, failing that, on drop.
pub struct Capture<S: FrameSource> {
    source: Option<S>,
}

impl<S: FrameSource> Capture<S> {
    pub fn open(source: S) -> Self {
        Capture { source: Some(source) }
    }

    pub fn read(&mut self) -> Result<Frame, CaptureError> {
        match self.source.as_mut() {
            Some(s) => s.read(),
            None    => Err(CaptureError::Closed),
        }
    }

    pub fn is_opened(&self) -> bool {
        self.source.as_ref().map_or(false, |s| s.is_opened())
    }

    pub fn close(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.release();
            log::debug!("capture released");
        }
    }
}

impl<S: FrameSource> Drop for Capture<S> {
    fn drop(&mut self) {
        self.release_once();
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimCamera — synthetic backdrop frames
// ════════════════════════════════════════════════════════════════════════════

/// A stand-in camera: a dim gradient with a slowly drifting scan band, so
/// the window visibly updates every frame.
#[derive(Debug)]
pub struct SimCamera {
    width:      usize,
    height:     usize,
    frame_no:   u64,
    open:       bool,
    drop_every: Option<u64>,
    limit:      Option<u64>,
}

impl SimCamera {
    pub fn new(width: usize, height: usize) -> Self {
        SimCamera {
            width,
            height,
            frame_no:   0,
            open:       true,
            drop_every: None,
            limit:      None,
        }
    }

    /// Fail every `n`-th read with [`CaptureError::EmptyFrame`].
    pub fn dropping_every(mut self, n: u64) -> Self {
        self.drop_every = (n > 0).then_some(n);
        self
    }

    /// Close the stream after `n` reads.
    pub fn with_limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    fn backdrop(&self) -> Frame {
        let mut frame = Frame::new(self.width, self.height, 0xFF000000);
        if self.width == 0 || self.height == 0 { return frame; }

        let band = (self.frame_no as usize * 2) % self.height;
        let (w, h) = (self.width, self.height);
        for (y, row) in frame.pixels_mut().chunks_exact_mut(w).enumerate() {
            let shade = 0x18 + (y * 0x28 / h) as u32;
            let glow  = if y.abs_diff(band) < 3 { 0x14 } else { 0 };
            for (x, px) in row.iter_mut().enumerate() {
                // Warmer on the left so a mirrored frame is recognisable.
                let r = shade + ((w - x) * 0x10 / w) as u32 + glow;
                let g = shade + glow;
                let b = shade + 0x10 + glow;
                *px = 0xFF000000 | (r.min(255) << 16) | (g.min(255) << 8) | b.min(255);
            }
        }
        frame
    }
}

impl FrameSource for SimCamera {
    fn read(&mut self) -> Result<Frame, CaptureError> {
        if !self.open { return Err(CaptureError::Closed); }
        if self.limit.map_or(false, |n| self.frame_no >= n) {
            self.open = false;
            return Err(CaptureError::Closed);
        }
        self.frame_no += 1;
        if self.drop_every.map_or(false, |n| self.frame_no % n == 0) {
            return Err(CaptureError::EmptyFrame);
        }
        Ok(self.backdrop())
    }

    fn is_opened(&self) -> bool { self.open }

    fn release(&mut self) {
        self.open = false;
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
