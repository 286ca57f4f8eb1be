use std::time::Duration;

use crate::frame::Frame;

/// Everything a toy needs from the badge hardware.
///
/// Toys only ever talk to this trait, so the same loop runs against
/// [`TermBoard`](crate::TermBoard) in a binary and against
/// [`MockBoard`](crate::MockBoard) in a test.
pub trait Board {
    /// Replace the whole displayed frame.
    fn show(&mut self, frame: &Frame);

    /// Mutate one pixel of the live display buffer.
    fn set_pixel(&mut self, x: usize, y: usize, level: u8);

    /// Block for `duration`. Input keeps being serviced while blocked,
    /// so button and tilt reads stay fresh between ticks.
    fn sleep(&mut self, duration: Duration);

    /// Uniform integer in `[0, bound)`. `bound` must be nonzero.
    fn random(&mut self, bound: u32) -> u32;

    /// Has the button been pressed since the last read?
    fn button_pressed(&mut self) -> bool;

    /// Z axis acceleration in milli-g, about -1024 with the badge
    /// resting flat on its back.
    fn tilt_z(&mut self) -> i32;

    /// True once the user asked the toy to wind down. Every run loop
    /// checks this at the top of each iteration, which also lets tests
    /// bound otherwise endless loops.
    fn stop_requested(&self) -> bool;

    /// Pull frames from `frames` and show each for `period`, until the
    /// sequence ends or a stop is requested.
    fn animate<I>(&mut self, frames: I, period: Duration)
    where
        I: IntoIterator<Item = Frame>,
        Self: Sized,
    {
        for frame in frames {
            if self.stop_requested() {
                break;
            }
            self.show(&frame);
            self.sleep(period);
        }
    }
}
