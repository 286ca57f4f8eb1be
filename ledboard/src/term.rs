//! The badge drawn in a terminal.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::frame::{Frame, HEIGHT, MAX_LEVEL, WIDTH};

/// Reading reported while the badge lies flat on its back.
const RESTING_Z: i32 = -1024;
/// Reading reported after the T key raises the badge.
const RAISED_Z: i32 = 0;

const GRID_X0: u16 = 3;
const GRID_Y0: u16 = 2;
const CELL_STEP: u16 = 3;
const STATUS_ROW: u16 = GRID_Y0 + HEIGHT as u16 + 1;
const HELP_ROW: u16 = STATUS_ROW + 1;

/// A [`Board`] rendered as a block-glyph grid in the terminal.
///
/// SPACE or A presses the button, T picks the badge up and puts it
/// back down, Q / ESC / ctrl-C request stop. Raw mode and the
/// alternate screen are restored on drop.
pub struct TermBoard {
    out: Stdout,
    live: Frame,
    rng: StdRng,
    button: bool,
    raised: bool,
    stop: bool,
}

impl TermBoard {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All))?;

        let mut board = Self {
            out,
            live: Frame::new(),
            rng: StdRng::from_entropy(),
            button: false,
            raised: false,
            stop: false,
        };
        board.redraw_all()?;
        Ok(board)
    }

    fn redraw_all(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            cursor::MoveTo(GRID_X0, 0),
            Print("5x5 led badge"),
            cursor::MoveTo(GRID_X0, HELP_ROW),
            Print("space/a = button   t = tilt   q = quit"),
        )?;
        self.queue_status()?;
        let frame = self.live;
        self.draw_grid(&frame)
    }

    fn queue_status(&mut self) -> io::Result<()> {
        let status = if self.raised {
            format!("tilt: raised ({RAISED_Z} mg)    ")
        } else {
            format!("tilt: resting ({RESTING_Z} mg)")
        };
        queue!(self.out, cursor::MoveTo(GRID_X0, STATUS_ROW), Print(status))
    }

    fn draw_grid(&mut self, frame: &Frame) -> io::Result<()> {
        for y in 0..HEIGHT {
            queue!(self.out, cursor::MoveTo(GRID_X0, GRID_Y0 + y as u16))?;
            for x in 0..WIDTH {
                queue!(
                    self.out,
                    SetForegroundColor(led_color(frame.get(x, y))),
                    Print("██ "),
                )?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    fn draw_cell(&mut self, x: usize, y: usize, level: u8) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(GRID_X0 + CELL_STEP * x as u16, GRID_Y0 + y as u16),
            SetForegroundColor(led_color(level)),
            Print("██"),
            ResetColor,
        )?;
        self.out.flush()
    }

    /// Handle at most one pending terminal event, waiting up to
    /// `timeout` for it.
    fn pump(&mut self, timeout: Duration) -> io::Result<()> {
        if !event::poll(timeout)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key)
                if key.kind == KeyEventKind::Press || key.kind == KeyEventKind::Repeat =>
            {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        self.stop = true;
                    }
                    KeyCode::Char('c') | KeyCode::Char('C')
                        if key.modifiers.contains(KeyModifiers::CONTROL) =>
                    {
                        self.stop = true;
                    }
                    KeyCode::Char(' ') | KeyCode::Char('a') | KeyCode::Char('A') => {
                        self.button = true;
                    }
                    KeyCode::Char('t') | KeyCode::Char('T') => {
                        self.raised = !self.raised;
                        self.queue_status()?;
                        self.out.flush()?;
                    }
                    _ => {}
                }
            }
            Event::Resize(_, _) => self.redraw_all()?,
            _ => {}
        }
        Ok(())
    }
}

impl Board for TermBoard {
    fn show(&mut self, frame: &Frame) {
        self.live = *frame;
        let frame = *frame;
        if self.draw_grid(&frame).is_err() {
            // terminal is gone, let the loop wind down
            self.stop = true;
        }
    }

    fn set_pixel(&mut self, x: usize, y: usize, level: u8) {
        self.live.set(x, y, level);
        if self.draw_cell(x, y, level).is_err() {
            self.stop = true;
        }
    }

    fn sleep(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            if self.pump(deadline - now).is_err() {
                self.stop = true;
                break;
            }
        }
    }

    fn random(&mut self, bound: u32) -> u32 {
        assert!(bound > 0, "random bound must be nonzero");
        self.rng.gen_range(0..bound)
    }

    fn button_pressed(&mut self) -> bool {
        std::mem::take(&mut self.button)
    }

    fn tilt_z(&mut self) -> i32 {
        if self.raised {
            RAISED_Z
        } else {
            RESTING_Z
        }
    }

    fn stop_requested(&self) -> bool {
        self.stop
    }
}

impl Drop for TermBoard {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// Dark ember through bright amber, roughly how the LED array looks.
fn led_color(level: u8) -> Color {
    let t = level as f32 / MAX_LEVEL as f32;
    Color::Rgb {
        r: (45.0 + 210.0 * t).round() as u8,
        g: (10.0 + 130.0 * t * t).round() as u8,
        b: 12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_color_ramps_with_level() {
        let Color::Rgb { r: r_off, .. } = led_color(0) else {
            panic!("expected rgb");
        };
        let Color::Rgb { r: r_full, g, .. } = led_color(MAX_LEVEL) else {
            panic!("expected rgb");
        };
        assert!(r_off < r_full);
        assert_eq!(r_full, 255);
        assert_eq!(g, 140);
    }
}
