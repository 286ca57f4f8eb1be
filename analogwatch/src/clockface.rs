//! Lazy frame sequences for the watch face.

use ledboard::frame::Frame;
use ledboard::glyphs;

/// Weight on the minute hand glyph; full brightness lands on level 1.
pub const MINUTE_BRIGHT: f32 = 0.1111;
/// Weight on the hour hand glyph; full brightness lands on level 5.
pub const HOUR_BRIGHT: f32 = 0.55555;

/// One frame per five simulated minutes: both hands blended dim
/// enough that they stay readable where they overlap.
///
/// Runs forever. A watch is restarted by building a fresh sequence.
pub struct FiveTicks {
    hands: [Frame; 12],
    five_mins: usize,
    hours: usize,
}

impl FiveTicks {
    pub fn new() -> Self {
        Self {
            hands: std::array::from_fn(glyphs::clock_hand),
            five_mins: 0,
            hours: 0,
        }
    }
}

impl Default for FiveTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FiveTicks {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let face = self.hands[self.five_mins] * MINUTE_BRIGHT
            + self.hands[self.hours] * HOUR_BRIGHT;
        // the hour hand carries exactly when the five-minute hand wraps
        self.five_mins = (self.five_mins + 1) % 12;
        if self.five_mins == 0 {
            self.hours = (self.hours + 1) % 12;
        }
        Some(face)
    }
}

/// One frame per simulated minute: each five-minute face shown twice,
/// with the centre dot added on the even sub-tick and subtracted on
/// the odd one. The dot blinks at twice the hand rate and the whole
/// sequence repeats every 12 x 12 x 2 = 288 frames.
pub struct Ticks {
    faces: FiveTicks,
    face: Frame,
    dot: Frame,
    on: bool,
}

impl Ticks {
    pub fn new() -> Self {
        Self {
            faces: FiveTicks::new(),
            face: Frame::new(),
            dot: glyphs::center_dot(),
            on: true,
        }
    }
}

impl Default for Ticks {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Ticks {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.on {
            self.face = self.faces.next()?;
        }
        let frame = if self.on {
            self.face + self.dot
        } else {
            self.face - self.dot
        };
        self.on = !self.on;
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(five_mins: usize, hours: usize) -> Frame {
        glyphs::clock_hand(five_mins) * MINUTE_BRIGHT
            + glyphs::clock_hand(hours) * HOUR_BRIGHT
    }

    #[test]
    fn first_face_is_both_hands_at_twelve() {
        let mut faces = FiveTicks::new();
        assert_eq!(faces.next(), Some(face(0, 0)));
        assert_eq!(faces.next(), Some(face(1, 0)));
    }

    #[test]
    fn hour_hand_carries_exactly_on_the_wrap() {
        let mut faces = FiveTicks::new();
        let twelfth = faces.nth(11);
        assert_eq!(twelfth, Some(face(11, 0)));
        // the five-minute hand has wrapped, the hour hand moved once
        assert_eq!(faces.next(), Some(face(0, 1)));
    }

    #[test]
    fn five_tick_sequence_repeats_every_144_frames() {
        let frames: Vec<Frame> = FiveTicks::new().take(145).collect();
        assert_eq!(frames[144], frames[0]);
        assert_ne!(frames[1], frames[0]);
    }

    #[test]
    fn first_minute_frames_blink_the_centre_dot() {
        let mut ticks = Ticks::new();
        let dot = glyphs::center_dot();
        assert_eq!(ticks.next(), Some(face(0, 0) + dot));
        assert_eq!(ticks.next(), Some(face(0, 0) - dot));
        // third frame moves the minute hand
        assert_eq!(ticks.next(), Some(face(1, 0) + dot));
    }

    #[test]
    fn twenty_four_minutes_advance_the_hour_once() {
        let mut ticks = Ticks::new();
        assert_eq!(ticks.nth(24), Some(face(0, 1) + glyphs::center_dot()));
    }

    #[test]
    fn minute_sequence_repeats_every_288_frames() {
        let frames: Vec<Frame> = Ticks::new().take(289).collect();
        assert_eq!(frames[288], frames[0]);
        assert_ne!(frames[2], frames[0]);
    }

    #[test]
    fn overlapping_hands_peak_at_eight() {
        // at twelve o'clock both hands and the dot share the centre
        // column: 1 + 5 + 2 never exceeds the display range
        let mut ticks = Ticks::new();
        let frame = ticks.next().unwrap();
        assert_eq!(frame.get(2, 0), 6); // hands only
        assert_eq!(frame.get(2, 2), 8); // hands plus dot
    }
}
