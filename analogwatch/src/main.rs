//! A watch face for the 5x5 badge: hour and minute hands with a
//! blinking centre dot, run sixty times real speed so the animation is
//! watchable.

mod clockface;

use std::time::Duration;

use anyhow::Result;
use ledboard::{Board, TermBoard};

use crate::clockface::Ticks;

/// One simulated minute per second.
const DEFAULT_PERIOD_MS: u64 = 1000;

fn parse_args() -> Duration {
    let mut period_ms = DEFAULT_PERIOD_MS;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--period" => {
                if let Some(v) = it.next() {
                    period_ms = v.parse().unwrap_or(period_ms);
                }
            }
            "--help" | "-h" => {
                println!(
                    "analogwatch\n\
                     \n\
                     hour and minute hands on the led badge, one simulated\n\
                     minute per frame.\n\
                     \n\
                     USAGE:\n\
                     \tanalogwatch [--period <ms>]\n\
                     \n\
                     \t--period  milliseconds per simulated minute (default 1000)\n\
                     \n\
                     KEYS:\n\
                     \tQ/ESC quit\n"
                );
                std::process::exit(0);
            }
            _ => {}
        }
    }

    Duration::from_millis(period_ms)
}

fn main() -> Result<()> {
    let period = parse_args();
    let mut board = TermBoard::new()?;
    run(&mut board, period);
    Ok(())
}

fn run(board: &mut impl Board, period: Duration) {
    board.animate(Ticks::new(), period);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clockface::FiveTicks;
    use ledboard::glyphs;
    use ledboard::{Frame, MockBoard};

    #[test]
    fn run_paces_minute_frames_until_stopped() {
        let mut board = MockBoard::new().stop_after(3);
        run(&mut board, Duration::from_millis(250));

        assert_eq!(board.shown.len(), 3);
        assert_eq!(board.slept, vec![Duration::from_millis(250); 3]);
        assert_eq!(
            board.shown[0],
            FiveTicks::new().next().unwrap() + glyphs::center_dot()
        );
        // the blink is the only difference between the first two
        // frames: dot added, then dot subtracted
        assert_eq!(
            board.shown[0] - board.shown[1],
            Frame::parse("00000:00000:00400:00000:00000")
        );
    }
}
