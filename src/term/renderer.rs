//! TerminalRenderer: owns the terminal session and flushes framebuffers.
//!
//! Raw mode and the alternate screen are entered on [`enter`] and must be
//! torn down with [`exit`] before the process leaves, even on error paths;
//! `main` pairs the two around the event loop.
//!
//! Frames are drawn in full. At 20x10 board cells plus a side panel a frame
//! is a few kilobytes of escape sequences, well under what a 16 ms budget
//! can absorb, so diffing would buy nothing here.
//!
//! [`enter`]: TerminalRenderer::enter
//! [`exit`]: TerminalRenderer::exit

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Flush one frame. Styles change rarely along a row, so escape codes
    /// are only emitted when the style actually changes.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<CellStyle> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
