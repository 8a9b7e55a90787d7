//! Drawing surface contract consumed by the simulation.
//!
//! The simulation never talks to a terminal or window directly. It draws
//! primitives through [`Surface`], which a presentation layer implements.

use anyhow::Result;

use crate::types::{Extent, Rect, Rgb, Vector2i};

/// Rendered text that can be measured before it is placed.
pub trait TextImage {
    /// Width in surface pixels
    fn width(&self) -> i32;
    /// Height in surface pixels
    fn height(&self) -> i32;
}

/// A clearable canvas measured in logical pixels.
pub trait Surface {
    type Text: TextImage;

    fn extent(&self) -> Extent;

    /// Clear the whole surface to `color`.
    fn fill(&mut self, color: Rgb);

    fn fill_circle(&mut self, center: Vector2i, radius: i32, color: Rgb);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Render `text` at `font_size` pixels into an image that can be measured and blitted.
    fn render_text(&mut self, text: &str, font_size: i32, fg: Rgb, bg: Rgb) -> Self::Text;

    /// Copy a text image onto the surface with its top-left corner at `position`.
    fn blit(&mut self, image: &Self::Text, position: Vector2i);

    /// Make everything drawn since the last `fill` visible.
    fn present(&mut self) -> Result<()>;
}
