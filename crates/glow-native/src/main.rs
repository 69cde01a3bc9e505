//! Terminal demo host for the glow engine.
//!
//! There is no real pointer device here, so a synthetic pointer path stands
//! in for one: it is sampled exactly like browser `pointermove` coordinates,
//! against a virtual viewport. Each frame the engine output is rasterized
//! through the gradient description into truecolor background cells.

mod terminal;

use std::io::{self, Write as _};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};
use glow_core::{gradient, GlowEngine, VisualState};

// Virtual viewport the synthetic pointer moves across.
const VIEW_W: f64 = 1920.0;
const VIEW_H: f64 = 1080.0;

// Terminal raster size and frame pacing.
const COLS: usize = 80;
const ROWS: usize = 24;
const FRAME: Duration = Duration::from_millis(16);

fn main() -> io::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut engine = GlowEngine::new();
    engine.start();
    log::info!("glow demo starting, press q / esc / ctrl-c to quit");

    let mut stdout = terminal::init()?;
    let _guard = terminal::TerminalGuard;

    let start = Instant::now();
    'frames: loop {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if is_quit_key(&key) {
                    break 'frames;
                }
            }
        }

        let t_ms = start.elapsed().as_secs_f64() * 1000.0;
        let (cx, cy) = synthetic_pointer(t_ms);
        engine.pointer_moved(cx, cy, VIEW_W, VIEW_H);
        let vs = engine.tick(t_ms);

        for row in 0..ROWS {
            queue!(stdout, MoveTo(0, row as u16))?;
            for col in 0..COLS {
                queue!(
                    stdout,
                    SetBackgroundColor(cell_color(&vs, col, row)),
                    Print(' ')
                )?;
            }
            queue!(stdout, ResetColor)?;
        }
        stdout.flush()?;

        thread::sleep(FRAME);
    }

    engine.stop();
    Ok(())
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Resolve one raster cell through the gradient description.
fn cell_color(vs: &VisualState, col: usize, row: usize) -> Color {
    let x_pct = (col as f64 + 0.5) / COLS as f64 * 100.0;
    let y_pct = (row as f64 + 0.5) / ROWS as f64 * 100.0;
    let dist = ((x_pct - vs.x).powi(2) + (y_pct - vs.y).powi(2)).sqrt();
    let [r, g, b] = gradient::sample(vs, dist);
    Color::Rgb { r, g, b }
}

/// Slow figure-of-eight across the virtual viewport, in the same units a
/// pointer event would carry.
fn synthetic_pointer(t_ms: f64) -> (f64, f64) {
    let cx = (0.5 + 0.35 * (t_ms * 0.0004).sin()) * VIEW_W;
    let cy = (0.5 + 0.35 * (t_ms * 0.0003).cos()) * VIEW_H;
    (cx, cy)
}
