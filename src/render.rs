//! Renderer abstraction.
//!
//! The engine never rasterizes anything itself: every fill, stroke and
//! glyph goes through a host-supplied [`Renderer`]. The call set is the
//! minimum the panel, widget and fade code needs: rectangles, text,
//! text measurement, a clip region and a full-surface cover.

use crate::types::{Rect, Rgba, Vec2};

// =============================================================================
// FontDesc
// =============================================================================

/// A font selection the host knows how to interpret.
///
/// `id` names a host-loaded face; the engine only threads it through.
/// A `size` of zero marks the descriptor as unset for theme backfill.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDesc {
    /// Host-side face handle.
    pub id: u32,
    /// Glyph size in logical pixels.
    pub size: f32,
    /// Extra spacing between glyphs.
    pub spacing: f32,
}

impl FontDesc {
    /// Create a descriptor for face 0 at the given size.
    pub const fn sized(size: f32) -> Self {
        Self {
            id: 0,
            size,
            spacing: 1.0,
        }
    }

    /// Check whether this descriptor still needs theme backfill.
    #[inline]
    pub fn is_unset(&self) -> bool {
        self.size <= 0.0
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Host-supplied drawing backend.
///
/// Clip calls nest: each `push_clip` must be balanced by a `pop_clip`,
/// and draws between the two are restricted to the pushed rectangle.
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Stroke a rectangle outline with the given line width.
    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Rgba);

    /// Draw a line of text with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2, font: FontDesc, color: Rgba);

    /// Measure the extents a line of text would occupy.
    fn measure_text(&mut self, text: &str, font: FontDesc) -> Vec2;

    /// Restrict subsequent draws to `rect`.
    fn push_clip(&mut self, rect: Rect);

    /// Lift the most recent clip restriction.
    fn pop_clip(&mut self);

    /// Cover the entire visible surface with a color.
    fn cover(&mut self, color: Rgba);
}
