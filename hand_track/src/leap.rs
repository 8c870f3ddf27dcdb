//! LeapMotion landmark provider (feature = "leap").
//!
//! A polling thread reads LeapC tracking frames and converts every hand's
//! joints into the 21-landmark layout.  `detect` drains the channel and
//! returns the newest hand set, so a slow render loop never falls behind the
//! device.
//!
//! Leap reports millimetres above the controller; a 400 mm cube centred
//! 300 mm above the device is mapped onto the frame.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread;

use crate::frame::Frame;
use crate::landmark::{Hand, HandLandmark, Handedness, Landmark};
use crate::tracker::LandmarkProvider;
use crate::TrackError;

const SPAN_MM:   f32 = 400.0;
const FLOOR_MM:  f32 = 100.0;

pub struct LeapHandProvider {
    rx:       Receiver<Vec<Hand>>,
    latest:   Vec<Hand>,
    shutdown: Arc<AtomicBool>,
}

impl LeapHandProvider {
    /// Connect to the controller on a background thread.  Fails if LeapC
    /// cannot be opened.
    pub fn spawn() -> Result<Self, TrackError> {
        let (tx, rx) = mpsc::channel();
        let (ready_tx, ready_rx) = mpsc::channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let stop = Arc::clone(&shutdown);
        thread::spawn(move || poll_loop(tx, ready_tx, stop));

        match ready_rx.recv() {
            Ok(Ok(()))  => Ok(LeapHandProvider { rx, latest: Vec::new(), shutdown }),
            Ok(Err(e))  => Err(TrackError::Device(e)),
            Err(_)      => Err(TrackError::Device("LeapC thread exited during start-up".into())),
        }
    }
}

impl Drop for LeapHandProvider {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}

impl LandmarkProvider for LeapHandProvider {
    fn detect(&mut self, _frame: &Frame) -> Vec<Hand> {
        loop {
            match self.rx.try_recv() {
                Ok(hands) => self.latest = hands,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.latest.clear();
                    break;
                }
            }
        }
        self.latest.clone()
    }
}

fn poll_loop(tx: Sender<Vec<Hand>>, ready: Sender<Result<(), String>>, shutdown: Arc<AtomicBool>) {
    use leaprs::{Connection, ConnectionConfig, Event};

    let mut connection = match Connection::create(ConnectionConfig::default()) {
        Ok(c)  => c,
        Err(e) => { let _ = ready.send(Err(format!("create: {:?}", e))); return; }
    };
    if let Err(e) = connection.open() {
        let _ = ready.send(Err(format!("open: {:?}", e)));
        return;
    }
    let _ = ready.send(Ok(()));
    log::info!("LeapMotion connection open");

    forward(&tx, &shutdown, || {
        let msg = connection.poll(100).ok()?;
        match msg.event() {
            Event::Tracking(frame) => {
                let raw: Vec<_> = frame.hands().collect();
                Some(raw.iter().map(to_hand).collect())
            }
            _ => None,
        }
    });
    log::debug!("LeapMotion poll thread stopped");
}

/// Sends every hand set `next` yields until the provider is dropped.  The
/// flag is checked after each call, so the thread stops within one poll
/// timeout even when the device goes quiet.
fn forward<F>(tx: &Sender<Vec<Hand>>, shutdown: &AtomicBool, mut next: F)
where
    F: FnMut() -> Option<Vec<Hand>>,
{
    while !shutdown.load(Ordering::Relaxed) {
        if let Some(hands) = next() {
            if tx.send(hands).is_err() {
                return;
            }
        }
    }
}

fn to_hand(hand: &leaprs::Hand) -> Hand {
    let digits: Vec<_> = hand.digits().collect();
    let mut landmarks = [Landmark::default(); HandLandmark::COUNT];

    if let Some(middle) = digits.get(2) {
        let base = middle.metacarpal().prev_joint();
        landmarks[HandLandmark::Wrist.index()] = to_landmark(base.x, base.y, base.z);
    }
    // Thumb first, then index … pinky; four joints each, base to tip.
    for (d, digit) in digits.iter().take(5).enumerate() {
        let joints = [
            digit.proximal().prev_joint(),
            digit.intermediate().prev_joint(),
            digit.distal().prev_joint(),
            digit.distal().next_joint(),
        ];
        for (j, p) in joints.iter().enumerate() {
            landmarks[1 + d * 4 + j] = to_landmark(p.x, p.y, p.z);
        }
    }

    let handedness = if hand.hand_type() == leaprs::HandType::Left {
        Handedness::Left
    } else {
        Handedness::Right
    };
    Hand { landmarks, handedness, score: 1.0 }
}

/// Millimetres above the controller → normalised frame coordinates.
fn to_landmark(x: f32, y: f32, z: f32) -> Landmark {
    Landmark::new(
        (x + SPAN_MM / 2.0) / SPAN_MM,
        1.0 - (y - FLOOR_MM) / SPAN_MM,
        z / SPAN_MM,
    )
}
