//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Owns the terminal modes for the lifetime of the window: raw mode, the
//! alternate screen, the title and (when supported) keyboard enhancement so key
//! releases are reported. Frames are diffed against the previous one and only
//! changed runs are written; an unchanged frame (a paused game, the title
//! screen between FPS updates) costs no terminal output at all.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    keyboard_enhanced: bool,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            keyboard_enhanced: false,
            entered: false,
        }
    }

    /// Switch the terminal into game mode.
    ///
    /// Returns whether the terminal will report key releases.
    pub fn enter(&mut self, title: &str) -> Result<bool> {
        terminal::enable_raw_mode()?;
        self.entered = true;

        self.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(title))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.keyboard_enhanced {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                    | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES,
            ))?;
        }
        self.flush_buf()?;
        Ok(self.keyboard_enhanced)
    }

    /// Restore the terminal. A no-op when not entered.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;

        self.buf.clear();
        if self.keyboard_enhanced {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.keyboard_enhanced = false;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.last = None;
        Ok(())
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The caller keeps one `FrameBuffer` and passes it in every frame; after the
    /// call it holds the frame before last and is expected to be fully redrawn.
    /// Returns the number of cells written. A frame identical to the previous one
    /// writes nothing to the terminal.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<usize> {
        let prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                Some(prev)
            }
            _ => None,
        };

        if prev.as_ref().is_some_and(|prev| prev.cells() == fb.cells()) {
            self.last = prev;
            return Ok(0);
        }

        self.buf.clear();
        let mut enc = FrameEncoder::new(&mut self.buf);
        match &prev {
            Some(prev) => enc.diff(prev, fb)?,
            None => enc.full(fb)?,
        }
        let written = enc.finish()?;
        self.flush_buf()?;

        let mut old = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut old, fb);
        self.last = Some(old);
        Ok(written)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes frame cells into crossterm commands, only switching style when it
/// changes.
///
/// The game surface is mostly blank cells with a background colour, so style
/// switches dominate the output; the encoder remembers the active style across
/// runs and rows.
pub struct FrameEncoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
    cells: usize,
}

impl<'a> FrameEncoder<'a> {
    pub fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            style: None,
            cells: 0,
        }
    }

    /// Clear the screen and write every row.
    pub fn full(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        for (y, row) in rows(fb).enumerate() {
            self.out.queue(cursor::MoveTo(0, y as u16))?;
            self.run(row)?;
        }
        Ok(())
    }

    /// Write the runs of `next` that differ from `prev`. Both must have the same
    /// size.
    pub fn diff(&mut self, prev: &FrameBuffer, next: &FrameBuffer) -> Result<()> {
        for (y, (old, new)) in rows(prev).zip(rows(next)).enumerate() {
            if old == new {
                continue;
            }
            for (x, len) in changed_runs(old, new) {
                self.out.queue(cursor::MoveTo(x as u16, y as u16))?;
                self.run(&new[x..x + len])?;
            }
        }
        Ok(())
    }

    /// Reset terminal attributes and return the number of cells written.
    pub fn finish(self) -> Result<usize> {
        if self.style.is_some() {
            self.out.queue(ResetColor)?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(self.cells)
    }

    fn run(&mut self, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            if self.style != Some(cell.style) {
                queue_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        self.cells += cells.len();
        Ok(())
    }
}

fn rows(fb: &FrameBuffer) -> impl Iterator<Item = &[Cell]> {
    fb.cells().chunks(usize::from(fb.width()).max(1))
}

/// `(start, len)` of every maximal run of differing cells in a row.
fn changed_runs<'r>(
    old: &'r [Cell],
    new: &'r [Cell],
) -> impl Iterator<Item = (usize, usize)> + 'r {
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < new.len() && old.get(x) == Some(&new[x]) {
            x += 1;
        }
        if x >= new.len() {
            return None;
        }
        let start = x;
        while x < new.len() && old.get(x) != Some(&new[x]) {
            x += 1;
        }
        Some((start, x - start))
    })
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    let color = |c: Rgb| Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    };
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}
