//! Pre-rendered images the badge ships with.

use crate::frame::Frame;

// Hand glyphs, a full-brightness line from the centre pixel toward the
// rim. Index 0 is twelve o'clock, going clockwise.
const CLOCK_HANDS: [&str; 12] = [
    "00900:00900:00900:00000:00000", // 12
    "00090:00090:00900:00000:00000", // 1
    "00000:00099:00900:00000:00000", // 2
    "00000:00000:00999:00000:00000", // 3
    "00000:00000:00900:00099:00000", // 4
    "00000:00000:00900:00090:00090", // 5
    "00000:00000:00900:00900:00900", // 6
    "00000:00000:00900:09000:09000", // 7
    "00000:00000:00900:99000:00000", // 8
    "00000:00000:99900:00000:00000", // 9
    "00000:99000:00900:00000:00000", // 10
    "09000:09000:00900:00000:00000", // 11
];

const CENTER_DOT: &str = "00000:00000:00200:00000:00000";

/// Hand glyph for a clock position, 0 = twelve o'clock.
pub fn clock_hand(position: usize) -> Frame {
    Frame::parse(CLOCK_HANDS[position % 12])
}

/// A dim single pixel at the centre of the display.
pub fn center_dot() -> Frame {
    Frame::parse(CENTER_DOT)
}
