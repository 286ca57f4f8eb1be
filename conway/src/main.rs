//! Game of life on the 5x5 badge. A random layout evolves until the
//! button is pressed or the badge is picked up, then a fresh layout is
//! seeded.

mod arena;

use std::mem;
use std::time::Duration;

use anyhow::Result;
use ledboard::{Board, TermBoard};

use crate::arena::Arena;

/// Z readings below this count as resting flat; at or above it the
/// badge is being handled and the layout reseeds. Device calibration,
/// swappable with --tilt.
const DEFAULT_RESTING_Z: i32 = -800;

const DEFAULT_STEP_MS: u64 = 150;

/// Short yield after a reseed so the tilt read that follows it is
/// fresh.
const SETTLE: Duration = Duration::from_millis(1);

struct Options {
    step: Duration,
    resting_z: i32,
}

fn parse_args() -> Options {
    let mut step_ms = DEFAULT_STEP_MS;
    let mut resting_z = DEFAULT_RESTING_Z;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--step" => {
                if let Some(v) = it.next() {
                    step_ms = v.parse().unwrap_or(step_ms);
                }
            }
            "--tilt" => {
                if let Some(v) = it.next() {
                    resting_z = v.parse().unwrap_or(resting_z);
                }
            }
            "--help" | "-h" => {
                println!(
                    "conway\n\
                     \n\
                     5x5 game of life on the led badge. a random layout evolves\n\
                     until the button is pressed or the badge is picked up, then\n\
                     a fresh layout is seeded.\n\
                     \n\
                     USAGE:\n\
                     \tconway [--step <ms>] [--tilt <mg>]\n\
                     \n\
                     \t--step  milliseconds between generations (default 150)\n\
                     \t--tilt  resting z threshold in milli-g (default -800);\n\
                     \t        readings at or above it count as picked up\n\
                     \n\
                     KEYS:\n\
                     \tSPACE/A button (reseed) | T pick up / put down | Q/ESC quit\n"
                );
                std::process::exit(0);
            }
            _ => {}
        }
    }

    Options {
        step: Duration::from_millis(step_ms),
        resting_z,
    }
}

fn main() -> Result<()> {
    let opts = parse_args();
    let mut board = TermBoard::new()?;
    run(&mut board, &opts);
    Ok(())
}

fn run(board: &mut impl Board, opts: &Options) {
    let mut cur = Arena::new();
    let mut next = Arena::new();

    while !board.stop_requested() {
        cur.randomize(|bound| board.random(bound));
        board.show(&cur.to_frame());
        board.sleep(SETTLE);

        // evolve while the badge rests untouched
        while !board.stop_requested()
            && !board.button_pressed()
            && board.tilt_z() < opts.resting_z
        {
            cur.step_into(&mut next);
            mem::swap(&mut cur, &mut next);
            board.show(&cur.to_frame());
            board.sleep(opts.step);
        }
    }
}
