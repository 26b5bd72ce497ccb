//! Terminal waveform demo.
//!
//! Renders the morphing waveform with block characters, one cell per surface
//! unit. Resize the terminal to re-lay out the control points.
//! Press Q or ESC to quit.
//!
//! Logging goes to stderr; run with `RUST_LOG=debug ... 2>wave.log` to see it.

use anyhow::Result;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{Stdout, Write, stdout};
use std::panic;
use std::time::Duration;
use undulate::{MorphConfig, Surface, Waveform};

const FRAME_TIME: Duration = Duration::from_millis(33);

/// A character grid the waveform is painted into.
struct TerminalSurface {
    cols: u16,
    rows: u16,
    cells: Vec<bool>,
    redraw_requested: bool,
}

impl TerminalSurface {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![false; cols as usize * rows as usize],
            redraw_requested: true,
        }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        *self = Self::new(cols, rows);
    }

    fn present(&self, out: &mut Stdout) -> Result<()> {
        let mut line = String::with_capacity(self.cols as usize);
        for row in 0..self.rows {
            line.clear();
            let start = row as usize * self.cols as usize;
            for &filled in &self.cells[start..start + self.cols as usize] {
                line.push(if filled { '█' } else { ' ' });
            }
            out.queue(MoveTo(0, row))?.queue(Print(&line))?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Even-odd test of a point against a closed polygon.
fn inside(points: &[(f64, f64)], px: f64, py: f64) -> bool {
    let mut hit = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            hit = !hit;
        }
        j = i;
    }
    hit
}

impl Surface for TerminalSurface {
    fn size(&self) -> (f64, f64) {
        (self.cols as f64, self.rows as f64)
    }

    fn fill_polygon(&mut self, points: &[(f64, f64)]) {
        if points.len() < 3 {
            return;
        }
        let cols = self.cols as usize;
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let x = (i % cols) as f64 + 0.5;
            let y = (i / cols) as f64 + 0.5;
            *cell = inside(points, x, y);
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

fn cleanup_terminal() {
    let _ = stdout().execute(Show);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = MorphConfig::default().with_variance_threshold(1.0);
    let mut wave = Waveform::new(config)?;

    let (cols, rows) = terminal::size()?;
    let mut surface = TerminalSurface::new(cols, rows);

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    out.execute(EnterAlternateScreen)?.execute(Hide)?;

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        cleanup_terminal();
        original_hook(panic_info);
    }));

    wave.start();
    while surface.redraw_requested {
        surface.redraw_requested = false;
        wave.draw(&mut surface);
        surface.present(&mut out)?;

        if event::poll(FRAME_TIME)? {
            match event::read()? {
                Event::Key(key)
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) =>
                {
                    wave.stop();
                }
                Event::Resize(cols, rows) => {
                    surface.resize(cols, rows);
                    out.execute(Clear(ClearType::All))?;
                    wave.reset();
                }
                _ => {}
            }
        }
    }

    cleanup_terminal();
    println!("Goodbye!");
    Ok(())
}
