//! Text renderer for the host simulator.
//!
//! Draws each [`Frame`] as a single log line.  The loop redraws every pass,
//! so only frames that differ from the previous one are written.

use core::fmt::Write as _;

use log::info;

use crate::app::frame::Frame;
use crate::app::ports::Renderer;
use crate::error::DisplayError;
use crate::input::MenuItem;

#[derive(Debug, Default)]
pub struct LogRenderer {
    last_line: String,
    drawn: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames actually written (unchanged frames are skipped).
    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    pub fn last_line(&self) -> &str {
        &self.last_line
    }
}

/// One-line text layout of a frame.
pub fn format_frame(frame: &Frame<'_>) -> Result<String, DisplayError> {
    let mut line = String::new();
    write!(
        line,
        "[{} | {}] {:?}#{} | {} | ",
        frame.pet_name, frame.mood, frame.sprite.sheet, frame.sprite.frame, frame.stat_hint
    )
    .map_err(|_| DisplayError::BusWrite)?;

    if frame.is_dead {
        line.push_str("hold prev+next to revive");
        return Ok(line);
    }
    for (i, item) in frame.menu.items.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        let label = match item {
            MenuItem::Food => "food",
            MenuItem::Play => "play",
            MenuItem::Clean => "clean",
        };
        if i == frame.menu.selected {
            write!(line, ">{label}<").map_err(|_| DisplayError::BusWrite)?;
        } else {
            line.push_str(label);
        }
    }
    Ok(line)
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), DisplayError> {
        let line = format_frame(frame)?;
        if line != self.last_line {
            info!("SCREEN | {}", line);
            self.last_line = line;
            self.drawn += 1;
        }
        Ok(())
    }
}
