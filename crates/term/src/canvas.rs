//! Canvas: a pixel-space [`Surface`] backed by a terminal framebuffer.
//!
//! The game draws on a fixed logical surface (850x550 by default). The canvas
//! stretches that surface over the whole viewport. A cell belongs to a shape
//! when the pixel at the cell's centre lies inside it; shapes smaller than a
//! cell still claim the cell under their own centre so nothing disappears.
//!
//! Frames are handed to a [`FrameSink`] on `present`. The terminal renderer is
//! one sink; [`Offscreen`] keeps frames in memory for tests and benches.

use anyhow::Result;

use crate::core::Surface;
use crate::fb::{Cell, FrameBuffer, Viewport};
use crate::font::{GlyphText, GLYPH_ROWS};
use crate::types::{Extent, Rect, Rgb, Vector2i};

/// Character used for filled shapes.
const SOLID: char = '█';
/// Character used when a circle shrinks to a single cell.
const DOT: char = '●';

/// Destination for finished frames.
pub trait FrameSink {
    /// Current output size, or `None` to keep the canvas size unchanged.
    fn viewport(&self) -> Option<Viewport>;

    /// Show `fb`. The sink may swap its contents with an older frame.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;
}

/// In-memory sink with a fixed viewport.
#[derive(Debug, Clone, Default)]
pub struct Offscreen {
    pub frames: u64,
}

impl FrameSink for Offscreen {
    fn viewport(&self) -> Option<Viewport> {
        None
    }

    fn present(&mut self, _fb: &mut FrameBuffer) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}

pub struct Canvas<K: FrameSink> {
    extent: Extent,
    fb: FrameBuffer,
    sink: K,
    /// Color of the last `fill`.
    background: Rgb,
}

impl Canvas<Offscreen> {
    pub fn offscreen(extent: Extent, viewport: Viewport) -> Self {
        Self::new(extent, viewport, Offscreen::default())
    }
}

impl<K: FrameSink> Canvas<K> {
    pub fn new(extent: Extent, viewport: Viewport, sink: K) -> Self {
        Self {
            extent,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            sink,
            background: Rgb::BLACK,
        }
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Cell span `[start, end)` whose centres fall in pixel span `[lo, hi)`.
    ///
    /// The centre of cell `c` sits at pixel `(2c + 1) * extent / (2 * cells)`;
    /// comparisons are done in that doubled scale to stay in integers.
    fn span(lo: i32, hi: i32, extent: i32, cells: u16) -> (i32, i32) {
        let cells = cells as i64;
        let extent = extent.max(1) as i64;
        let first = |px: i64| -> i64 {
            // Smallest c with (2c + 1) * extent >= 2 * px * cells.
            let num = 2 * px * cells - extent;
            num.div_euclid(2 * extent) + i64::from(num.rem_euclid(2 * extent) != 0)
        };
        let start = first(lo as i64).clamp(0, cells);
        let end = first(hi as i64).clamp(0, cells);
        (start as i32, end as i32)
    }

    /// Cell containing pixel `p`, if it is inside the surface.
    fn cell_at(&self, p: Vector2i) -> Option<(u16, u16)> {
        if p.x < 0 || p.y < 0 || p.x >= self.extent.width || p.y >= self.extent.height {
            return None;
        }
        let cx = p.x as i64 * self.fb.width() as i64 / self.extent.width as i64;
        let cy = p.y as i64 * self.fb.height() as i64 / self.extent.height as i64;
        Some((cx as u16, cy as u16))
    }

    /// Pixel at the centre of cell (`cx`, `cy`), in doubled units.
    fn cell_center_x2(&self, cx: i32, cy: i32) -> (i64, i64) {
        let w = self.fb.width().max(1) as i64;
        let h = self.fb.height().max(1) as i64;
        (
            (2 * cx as i64 + 1) * self.extent.width as i64 / w,
            (2 * cy as i64 + 1) * self.extent.height as i64 / h,
        )
    }

    fn paint(&mut self, x: u16, y: u16, ch: char, fg: Rgb) {
        if let Some(cell) = self.fb.get(x, y) {
            self.fb.set(x, y, Cell { ch, fg, bg: cell.bg });
        }
    }

    fn paint_rect(&mut self, rect: Rect, ch: char, fg: Rgb, bg: Rgb) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let (x0, x1) = Self::span(rect.x, rect.right(), self.extent.width, self.fb.width());
        let (y0, y1) = Self::span(rect.y, rect.bottom(), self.extent.height, self.fb.height());

        if x0 >= x1 || y0 >= y1 {
            let center = Vector2i::new(rect.x + rect.w / 2, rect.y + rect.h / 2);
            if let Some((cx, cy)) = self.cell_at(center) {
                self.fb.set(cx, cy, Cell { ch, fg, bg });
            }
            return;
        }

        for cy in y0..y1 {
            for cx in x0..x1 {
                self.fb.set(cx as u16, cy as u16, Cell { ch, fg, bg });
            }
        }
    }
}

impl<K: FrameSink> Surface for Canvas<K> {
    type Text = GlyphText;

    fn extent(&self) -> Extent {
        self.extent
    }

    fn fill(&mut self, color: Rgb) {
        if let Some(vp) = self.sink.viewport() {
            self.fb.resize(vp.width, vp.height);
        }
        self.background = color;
        self.fb.clear(Cell::blank(color));
    }

    fn fill_circle(&mut self, center: Vector2i, radius: i32, color: Rgb) {
        let bounds = Rect::new(center.x - radius, center.y - radius, 2 * radius + 1, 2 * radius + 1);
        let (x0, x1) = Self::span(bounds.x, bounds.right(), self.extent.width, self.fb.width());
        let (y0, y1) = Self::span(bounds.y, bounds.bottom(), self.extent.height, self.fb.height());

        let r2 = 4 * (radius as i64) * (radius as i64);
        let mut painted = false;
        for cy in y0..y1 {
            for cx in x0..x1 {
                let (px2, py2) = self.cell_center_x2(cx, cy);
                let dx = px2 - 2 * center.x as i64;
                let dy = py2 - 2 * center.y as i64;
                if dx * dx + dy * dy <= r2 {
                    self.paint(cx as u16, cy as u16, SOLID, color);
                    painted = true;
                }
            }
        }

        if !painted {
            if let Some((cx, cy)) = self.cell_at(center) {
                self.paint(cx, cy, DOT, color);
            }
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.paint_rect(rect, SOLID, color, self.background);
    }

    /// Dots are at least one cell in each direction so every glyph stays legible
    /// on small terminals.
    fn render_text(&mut self, text: &str, font_size: i32, fg: Rgb, bg: Rgb) -> GlyphText {
        let dot = font_size / (GLYPH_ROWS + 1);
        let cell_w = ceil_div(self.extent.width, self.fb.width() as i32);
        let cell_h = ceil_div(self.extent.height, self.fb.height() as i32);
        GlyphText::new(text, dot.max(cell_w), dot.max(cell_h), fg, bg)
    }

    fn blit(&mut self, image: &GlyphText, position: Vector2i) {
        for row in 0..GLYPH_ROWS {
            for col in 0..image.dot_cols() {
                let rect = Rect::new(
                    position.x + col * image.dot_w,
                    position.y + row * image.dot_h,
                    image.dot_w,
                    image.dot_h,
                );
                if image.lit(col, row) {
                    self.paint_rect(rect, SOLID, image.fg, image.bg);
                } else {
                    self.paint_rect(rect, ' ', image.fg, image.bg);
                }
            }
        }
    }

    fn present(&mut self) -> Result<()> {
        self.sink.present(&mut self.fb)
    }
}

fn ceil_div(a: i32, b: i32) -> i32 {
    let b = b.max(1);
    (a + b - 1) / b
}
