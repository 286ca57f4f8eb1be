//! Light pixels at random and fade them out over time.

use std::time::Duration;

use anyhow::Result;
use ledboard::frame::{HEIGHT, WIDTH};
use ledboard::{Board, TermBoard};

/// Level a freshly lit pixel starts at.
const GLOW: u8 = 8;

const DEFAULT_DELAY_MS: u64 = 100;

/// The fading pixel grid. Stored levels run 0..=8; each tick paints
/// the grid and then steps every level one closer to dark.
struct DanceFloor {
    dots: [[u8; WIDTH]; HEIGHT],
}

impl DanceFloor {
    fn new() -> Self {
        Self {
            dots: [[0; WIDTH]; HEIGHT],
        }
    }

    /// Light one random pixel, paint the whole grid, then fade.
    ///
    /// Painting happens before the fade lands, so a pixel seeded this
    /// tick displays the full glow and shows `max(8 - n, 0)` after n
    /// further ticks.
    fn tick(&mut self, board: &mut impl Board) {
        let x = board.random(WIDTH as u32) as usize;
        let y = board.random(HEIGHT as u32) as usize;
        self.dots[y][x] = GLOW;

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                board.set_pixel(x, y, self.dots[y][x]);
                self.dots[y][x] = self.dots[y][x].saturating_sub(1);
            }
        }
    }
}

fn parse_args() -> Duration {
    let mut delay_ms = DEFAULT_DELAY_MS;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--delay" => {
                if let Some(v) = it.next() {
                    delay_ms = v.parse().unwrap_or(delay_ms);
                }
            }
            "--help" | "-h" => {
                println!(
                    "leddance\n\
                     \n\
                     lights led badge pixels at random and fades them out.\n\
                     \n\
                     USAGE:\n\
                     \tleddance [--delay <ms>]\n\
                     \n\
                     \t--delay  milliseconds between new pixels (default 100)\n\
                     \n\
                     KEYS:\n\
                     \tQ/ESC quit\n"
                );
                std::process::exit(0);
            }
            _ => {}
        }
    }

    Duration::from_millis(delay_ms)
}

fn main() -> Result<()> {
    let delay = parse_args();
    let mut board = TermBoard::new()?;
    run(&mut board, delay);
    Ok(())
}

fn run(board: &mut impl Board, delay: Duration) {
    let mut floor = DanceFloor::new();
    while !board.stop_requested() {
        floor.tick(board);
        board.sleep(delay);
    }
}
