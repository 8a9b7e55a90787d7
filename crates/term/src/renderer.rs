//! TerminalRenderer: owns the terminal session and flushes framebuffers to it.
//!
//! Entering the session switches to raw mode and the alternate screen, sets the
//! window title and, when the terminal supports it, asks for key release
//! events through the kitty keyboard protocol. Frames are diffed against the
//! previous one so only changed runs of cells are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::canvas::FrameSink;
use crate::fb::{Cell, FrameBuffer, Rgb, Viewport};

/// Window title shown while the game runs.
pub const TITLE: &str = "PONG";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
    keyboard_enhanced: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            active: false,
            keyboard_enhanced: false,
        }
    }

    /// Enter the game session.
    ///
    /// With `keyboard_enhancement` set, key release reporting is requested
    /// from terminals that support it.
    pub fn enter(&mut self, keyboard_enhancement: bool) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;

        self.keyboard_enhanced =
            keyboard_enhancement && terminal::supports_keyboard_enhancement().unwrap_or(false);
        log::debug!("keyboard enhancement active: {}", self.keyboard_enhanced);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::SetTitle(TITLE))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.keyboard_enhanced {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        self.last = None;
        log::info!("terminal session started");
        Ok(())
    }

    /// Leave the game session and restore the terminal. Safe to call twice.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

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
        log::info!("terminal session ended");
        Ok(())
    }

    /// Whether the terminal was asked to report key releases.
    pub fn reports_key_release(&self) -> bool {
        self.keyboard_enhanced
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// The renderer diffs against the previous frame and then swaps buffers so
    /// the caller can reuse the old one without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| FrameBuffer::new(0, 0));

        self.buf.clear();
        if prev.width() != fb.width() || prev.height() != fb.height() {
            encode_full_into(fb, &mut self.buf)?;
            prev.resize(fb.width(), fb.height());
        } else {
            encode_diff_into(&prev, fb, &mut self.buf)?;
        }
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

impl FrameSink for TerminalRenderer {
    fn viewport(&self) -> Option<Viewport> {
        terminal::size().ok().map(|(w, h)| Viewport::new(w, h))
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.draw_swap(fb)
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<(Rgb, Rgb)> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            write_cell(out, cell, &mut current)?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<(Rgb, Rgb)> = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            write_cell(out, cell, &mut current)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

fn write_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<(Rgb, Rgb)>) -> Result<()> {
    if *current != Some((cell.fg, cell.bg)) {
        out.queue(SetForegroundColor(rgb_to_color(cell.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(cell.bg)))?;
        *current = Some((cell.fg, cell.bg));
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    for y in 0..next.height() {
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(fg: Rgb) -> Cell {
        Cell {
            ch: '█',
            fg,
            bg: Rgb::BLACK,
        }
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        for x in 1..=3 {
            b.set(x, 0, solid(Rgb::WHITE));
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 0, 3)]);
    }

    #[test]
    fn color_only_change_is_a_run() {
        let mut a = FrameBuffer::new(3, 2);
        let mut b = FrameBuffer::new(3, 2);
        a.set(2, 1, solid(Rgb::WHITE));
        b.set(2, 1, solid(Rgb::new(255, 0, 0)));

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(2, 1, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 4);
        let b = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();

        let mut reset_only = Vec::new();
        reset_only.queue(ResetColor).unwrap();
        assert_eq!(out, reset_only);
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(0, 0, Cell { ch: 'A', ..Cell::default() });
        fb.set(1, 1, Cell { ch: 'D', ..Cell::default() });

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('A'));
        assert!(text.contains('D'));
        assert!(text.contains("\r\n"));
    }
}
