//! `minifb` window implementing [`RenderSink`].
//!
//! The window also doubles as the input device for simulation mode: while
//! waiting for keys it forwards the mouse pointer (normalised to the window)
//! and the `H` key to a [`SimInput`] channel.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

use dodge_core::Point;
use hand_track::{Frame, Hand, SimInput};

use crate::canvas::Canvas;
use crate::render::RenderSink;
use crate::DodgeError;

/// Granularity of the key-wait loop.
const PUMP_INTERVAL: Duration = Duration::from_millis(4);

pub struct Screen {
    window:  Window,
    canvas:  Canvas,
    sim_tx:  Option<Sender<SimInput>>,
    /// Last pointer sent, to avoid flooding the channel.
    pointer: Option<(f32, f32)>,
}

impl Screen {
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, DodgeError> {
        let window = Window::new(
            title,
            width, height,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )?;

        Ok(Screen {
            window,
            canvas:  Canvas::new(width, height),
            sim_tx:  None,
            pointer: None,
        })
    }

    /// Send pointer moves and `H` presses to a simulated hand.
    pub fn forward_pointer(&mut self, tx: Sender<SimInput>) {
        self.sim_tx = Some(tx);
    }

    fn pump_pointer(&mut self) {
        let Some(tx) = &self.sim_tx else { return };
        let (w, h) = self.window.get_size();
        let pointer = self.window
            .get_mouse_pos(MouseMode::Discard)
            .filter(|_| w > 0 && h > 0)
            .map(|(x, y)| (x / w as f32, y / h as f32));
        if pointer != self.pointer {
            self.pointer = pointer;
            let _ = tx.send(SimInput::Pointer(pointer));
        }
    }

    fn take_key(&mut self) -> Option<char> {
        let keys = self.window.get_keys_pressed(KeyRepeat::No);
        let c = keys.into_iter().find_map(key_char)?;
        if c == 'h' {
            if let Some(tx) = &self.sim_tx {
                let _ = tx.send(SimInput::ToggleHand);
            }
        }
        Some(c)
    }
}

impl RenderSink for Screen {
    fn begin(&mut self, frame: Frame) {
        self.canvas.load(frame);
    }

    fn fill_rect(&mut self, a: Point, b: Point, color: u32) {
        self.canvas.fill_rect(a, b, color);
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: u32) {
        self.canvas.fill_circle(center, radius, color);
    }

    fn put_text(&mut self, text: &str, origin: Point, scale: i32, color: u32) {
        self.canvas.put_text(text, origin, scale, color);
    }

    fn draw_landmarks(&mut self, hand: &Hand) {
        self.canvas.draw_hand(hand);
    }

    fn present(&mut self) -> Result<(), DodgeError> {
        let frame = self.canvas.frame();
        self.window.update_with_buffer(frame.pixels(), frame.width(), frame.height())?;
        Ok(())
    }

    fn wait_key(&mut self, timeout: Duration) -> Option<char> {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump_pointer();
            if let Some(c) = self.take_key() {
                return Some(c);
            }
            if !self.window.is_open() {
                return None;
            }
            let now = Instant::now();
            if now >= deadline {
                return None;
            }
            thread::sleep((deadline - now).min(PUMP_INTERVAL));
            self.window.update();
        }
    }

    fn is_open(&self) -> bool {
        self.window.is_open()
    }
}

fn key_char(key: Key) -> Option<char> {
    let c = match key {
        Key::A => 'a', Key::B => 'b', Key::C => 'c', Key::D => 'd', Key::E => 'e',
        Key::F => 'f', Key::G => 'g', Key::H => 'h', Key::I => 'i', Key::J => 'j',
        Key::K => 'k', Key::L => 'l', Key::M => 'm', Key::N => 'n', Key::O => 'o',
        Key::P => 'p', Key::Q => 'q', Key::R => 'r', Key::S => 's', Key::T => 't',
        Key::U => 'u', Key::V => 'v', Key::W => 'w', Key::X => 'x', Key::Y => 'y',
        Key::Z => 'z',
        Key::Space  => ' ',
        Key::Escape => '\u{1b}',
        _ => return None,
    };
    Some(c)
}
