//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; after that only changed runs of cells are written.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode plus the alternate screen, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush_buf().context("enter alternate screen")
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.flush_buf().context("leave alternate screen")?;
        terminal::disable_raw_mode().context("disable raw mode")
    }

    /// Force the next draw to be a full redraw (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale content the caller overwrites next frame,
    /// so steady-state drawing never clones or allocates a framebuffer.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queues cell runs, re-emitting SGR only when the style changes.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    /// `len` cells of row `y` starting at column `x`.
    fn run(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))?;
        let start = y as usize * fb.width() as usize + x as usize;
        for cell in &fb.cells()[start..start + len as usize] {
            if self.style != Some(cell.style) {
                set_style(self.out, cell.style)?;
                self.style = Some(cell.style);
            }
            queue!(self.out, Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching the terminal.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.run(fb, 0, y, fb.width())?;
    }
    painter.finish()
}

/// Encode only the cells of `next` that differ from `prev`.
///
/// Both frames must have the same size; callers fall back to
/// [`encode_full_into`] otherwise.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for_each_changed_run(prev, next, |x, y, len| painter.run(next, x, y, len))?;
    painter.finish()
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    queue!(
        out,
        SetForegroundColor(term_color(style.fg)),
        SetBackgroundColor(term_color(style.bg)),
        SetAttribute(Attribute::Reset)
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Calls `f(x, y, len)` for each maximal run of differing cells, row by row.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    debug_assert_eq!((prev.width(), prev.height()), (next.width(), next.height()));
    let w = next.width() as usize;
    if w == 0 {
        return Ok(());
    }

    let rows = prev.cells().chunks(w).zip(next.cells().chunks(w));
    for (y, (old, new)) in rows.enumerate() {
        let mut x = 0;
        while x < w {
            if old[x] == new[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && old[x] != new[x] {
                x += 1;
            }
            f(start as u16, y as u16, (x - start) as u16)?;
        }
    }
    Ok(())
}
