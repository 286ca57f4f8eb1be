//! Scripted board for driving toy loops in tests.

use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::frame::Frame;

/// Milli-g reading the mock reports when no tilt values are scripted.
pub const RESTING_Z: i32 = -1024;

/// A [`Board`] that records what a toy did to it and answers sensor
/// reads from scripted queues.
///
/// Unscripted reads fall back to an unpressed button, a resting tilt
/// and a seeded rng, so unscripted runs stay deterministic. A loop is
/// bounded by [`stop_after`](MockBoard::stop_after): the stop flag
/// raises once that many sleeps have elapsed.
pub struct MockBoard {
    /// Every frame passed to `show`, in order.
    pub shown: Vec<Frame>,
    /// The live display buffer, including `set_pixel` writes.
    pub live: Frame,
    /// Every sleep duration, in order.
    pub slept: Vec<Duration>,
    randoms: VecDeque<u32>,
    buttons: VecDeque<bool>,
    tilts: VecDeque<i32>,
    rng: StdRng,
    sleeps_left: Option<u32>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            shown: Vec::new(),
            live: Frame::new(),
            slept: Vec::new(),
            randoms: VecDeque::new(),
            buttons: VecDeque::new(),
            tilts: VecDeque::new(),
            rng: StdRng::seed_from_u64(0x5EED),
            sleeps_left: None,
        }
    }

    /// Request stop once `sleeps` sleeps have elapsed.
    pub fn stop_after(mut self, sleeps: u32) -> Self {
        self.sleeps_left = Some(sleeps);
        self
    }

    /// Queue exact values for `random`; each is reduced modulo the
    /// caller's bound.
    pub fn with_randoms(mut self, values: &[u32]) -> Self {
        self.randoms.extend(values);
        self
    }

    /// Queue button reads, one per `button_pressed` call.
    pub fn with_buttons(mut self, values: &[bool]) -> Self {
        self.buttons.extend(values);
        self
    }

    /// Queue tilt reads, one per `tilt_z` call.
    pub fn with_tilts(mut self, values: &[i32]) -> Self {
        self.tilts.extend(values);
        self
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for MockBoard {
    fn show(&mut self, frame: &Frame) {
        self.live = *frame;
        self.shown.push(*frame);
    }

    fn set_pixel(&mut self, x: usize, y: usize, level: u8) {
        self.live.set(x, y, level);
    }

    fn sleep(&mut self, duration: Duration) {
        self.slept.push(duration);
        if let Some(left) = &mut self.sleeps_left {
            *left = left.saturating_sub(1);
        }
    }

    fn random(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "random bound must be nonzero");
        match self.randoms.pop_front() {
            Some(value) => value % bound,
            None => self.rng.gen_range(0..bound),
        }
    }

    fn button_pressed(&mut self) -> bool {
        self.buttons.pop_front().unwrap_or(false)
    }

    fn tilt_z(&mut self) -> i32 {
        self.tilts.pop_front().unwrap_or(RESTING_Z)
    }

    fn stop_requested(&self) -> bool {
        self.sleeps_left == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_values_drain_before_fallbacks() {
        let mut board = MockBoard::new()
            .with_randoms(&[7, 3])
            .with_buttons(&[true])
            .with_tilts(&[-100]);

        assert_eq!(board.random(5), 2); // 7 % 5
        assert_eq!(board.random(5), 3);
        assert!(board.random(5) < 5);

        assert!(board.button_pressed());
        assert!(!board.button_pressed());

        assert_eq!(board.tilt_z(), -100);
        assert_eq!(board.tilt_z(), RESTING_Z);
    }

    #[test]
    fn stop_raises_after_the_scripted_sleep_count() {
        let mut board = MockBoard::new().stop_after(2);
        assert!(!board.stop_requested());
        board.sleep(Duration::from_millis(10));
        assert!(!board.stop_requested());
        board.sleep(Duration::from_millis(10));
        assert!(board.stop_requested());
    }

    #[test]
    fn set_pixel_edits_the_live_buffer_without_recording_a_show() {
        let mut board = MockBoard::new();
        board.set_pixel(3, 2, 8);
        assert_eq!(board.live.get(3, 2), 8);
        assert!(board.shown.is_empty());
    }
}
