//! TerminalPrinter: writes rendered canvas frames to a terminal.
//!
//! The canvas already produces self-contained escape sequences, so printing is
//! a single pass: the frame, a color/attribute reset, and a final newline.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Print, ResetColor, SetAttribute},
    QueueableCommand,
};

use tui_canvas_core::Canvas;

pub struct TerminalPrinter<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalPrinter<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalPrinter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalPrinter<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Render `canvas` and print the frame.
    pub fn show(&mut self, canvas: &Canvas) -> Result<()> {
        let frame = canvas.render()?;
        self.print(&frame)
    }

    /// Print an already rendered frame.
    pub fn print(&mut self, frame: &str) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a frame plus trailing reset and newline into `out`.
///
/// This builds a sequence of crossterm commands without touching stdout.
pub fn encode_frame_into(frame: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(frame))?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(Print("\n"))?;
    Ok(())
}
