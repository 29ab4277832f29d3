//! Scroll Controller - Offset state and clamping policy
//!
//! One [`ScrollState`] per scrollable panel identity, living in the
//! engine context between frames. Two input paths feed it:
//!
//! - wheel input: additive, overshoot allowed, clamped afterwards
//! - thumb drag: the inverse proportional mapping from thumb travel
//!
//! Both converge through the same final clamp at session end.
//!
//! Clamping is deliberately a function of the *previous* frame's content
//! height: in an immediate-mode pass the current frame's content is only
//! known after every child has run, so the begin-of-session clamp uses
//! last frame's measurement. A region that shrinks below one screenful
//! therefore resets its offset on the frame after the shrink is
//! observed, not immediately.

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Pixels scrolled per wheel notch.
pub const WHEEL_STEP: f32 = 20.0;

/// Horizontal band reserved for the scrollbar inside a scrollable panel.
pub const SCROLLBAR_RESERVE: f32 = 12.0;

/// Width of the scrollbar track.
pub const SCROLLBAR_TRACK_WIDTH: f32 = 8.0;

/// Gap between the track and the panel's right edge.
pub const SCROLLBAR_MARGIN: f32 = 10.0;

// =============================================================================
// Pure arithmetic
// =============================================================================

/// Largest valid offset for the given content and viewport heights.
#[inline]
pub fn max_offset(content: f32, viewport: f32) -> f32 {
    (content - viewport).max(0.0)
}

/// Thumb height for a track of `viewport` height over `content`.
///
/// Zero when the content does not overflow (no thumb is drawn then).
pub fn thumb_height(content: f32, viewport: f32) -> f32 {
    if content <= viewport || content <= 0.0 {
        return 0.0;
    }
    viewport * (viewport / content)
}

/// Map an offset to the thumb's position along its travel distance.
pub fn thumb_position(offset: f32, max: f32, travel: f32) -> f32 {
    if max > 0.0 {
        (offset / max) * travel
    } else {
        0.0
    }
}

/// Inverse mapping: thumb position along its travel back to an offset.
///
/// Degenerate travel yields no movement rather than a division by zero.
pub fn offset_for_thumb(thumb_pos: f32, travel: f32, max: f32) -> Option<f32> {
    if travel > 0.0 {
        Some((thumb_pos / travel) * max)
    } else {
        None
    }
}

// =============================================================================
// ScrollState
// =============================================================================

/// Per-panel scroll state persisted across frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    /// Current scroll offset in pixels.
    pub offset: f32,
    /// Content height accumulated by the session running this frame.
    pub content: f32,
    /// Content height recorded the last time this panel ran scrollable.
    pub prev_content: f32,
    /// Whether `prev_content` holds a real measurement yet.
    pub has_prev: bool,
    /// A thumb drag is in progress.
    pub dragging: bool,
    /// Pointer offset from the thumb's top edge, captured at grab time.
    pub grab: f32,
}

impl ScrollState {
    /// Apply wheel input. Overshoot is allowed; the clamp comes after.
    pub fn wheel(&mut self, notches: f32) {
        self.offset -= notches * WHEEL_STEP;
    }

    /// Clamp against the previous frame's content measurement.
    ///
    /// Only clamps to a positive maximum when the previous content
    /// actually overflowed the viewport; otherwise, once a previous
    /// measurement exists, the offset snaps to zero.
    pub fn clamp_to_previous(&mut self, viewport: f32) {
        let max = self.prev_content - viewport;
        if max > 0.0 {
            self.offset = self.offset.clamp(0.0, max);
        } else if self.has_prev {
            self.offset = 0.0;
        }
    }

    /// Final clamp at session end, against this frame's real content.
    pub fn clamp_to_content(&mut self, viewport: f32) {
        self.offset = self.offset.clamp(0.0, max_offset(self.content, viewport));
    }

    /// Record this frame's content as next frame's clamp basis and
    /// reset the per-frame accumulator.
    pub fn commit(&mut self) {
        self.prev_content = self.content;
        self.has_prev = true;
        self.content = 0.0;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_offset() {
        assert_eq!(max_offset(714.0, 300.0), 414.0);
        assert_eq!(max_offset(100.0, 300.0), 0.0);
        assert_eq!(max_offset(300.0, 300.0), 0.0);
    }

    #[test]
    fn test_wheel_sign() {
        let mut s = ScrollState::default();
        // Pulling the wheel toward the user (negative notches) scrolls
        // the content down, increasing the offset.
        s.wheel(-5.0);
        assert_eq!(s.offset, 100.0);

        s.wheel(2.0);
        assert_eq!(s.offset, 60.0);
    }

    #[test]
    fn test_clamp_to_previous_with_overflow() {
        let mut s = ScrollState {
            offset: 900.0,
            prev_content: 714.0,
            has_prev: true,
            ..Default::default()
        };
        s.clamp_to_previous(300.0);
        assert_eq!(s.offset, 414.0);

        s.offset = -50.0;
        s.clamp_to_previous(300.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn test_clamp_to_previous_snaps_to_zero_without_overflow() {
        let mut s = ScrollState {
            offset: 120.0,
            prev_content: 200.0,
            has_prev: true,
            ..Default::default()
        };
        s.clamp_to_previous(300.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn test_no_previous_measurement_keeps_overshoot() {
        // First frame a panel ever runs: nothing recorded yet, so the
        // wheel overshoot survives until the end-of-session clamp.
        let mut s = ScrollState::default();
        s.wheel(-3.0);
        s.clamp_to_previous(300.0);
        assert_eq!(s.offset, 60.0);
    }

    #[test]
    fn test_shrink_resets_one_frame_late() {
        let mut s = ScrollState {
            offset: 100.0,
            prev_content: 714.0,
            has_prev: true,
            ..Default::default()
        };

        // Frame N: content shrank below the viewport, but the begin
        // clamp still sees last frame's tall measurement.
        s.clamp_to_previous(300.0);
        assert_eq!(s.offset, 100.0);
        s.content = 150.0;
        s.clamp_to_content(300.0);
        assert_eq!(s.offset, 0.0);
        s.commit();

        // Frame N+1: previous content is now the shrunken value.
        s.offset = 40.0;
        s.clamp_to_previous(300.0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn test_thumb_metrics() {
        // 300 px viewport over 600 px content: half visible.
        assert_eq!(thumb_height(600.0, 300.0), 150.0);
        assert_eq!(thumb_height(200.0, 300.0), 0.0);
        assert_eq!(thumb_height(0.0, 300.0), 0.0);

        let travel = 300.0 - 150.0;
        assert_eq!(thumb_position(0.0, 300.0, travel), 0.0);
        assert_eq!(thumb_position(300.0, 300.0, travel), travel);
        assert_eq!(thumb_position(150.0, 300.0, travel), travel / 2.0);
        // No overflow: thumb pinned to the top
        assert_eq!(thumb_position(50.0, 0.0, travel), 0.0);
    }

    #[test]
    fn test_offset_for_thumb_inverse() {
        let max = 414.0;
        let travel = 150.0;

        assert_eq!(offset_for_thumb(0.0, travel, max), Some(0.0));
        assert_eq!(offset_for_thumb(travel, travel, max), Some(max));
        assert_eq!(offset_for_thumb(75.0, travel, max), Some(max / 2.0));

        // Degenerate travel: no offset change
        assert_eq!(offset_for_thumb(10.0, 0.0, max), None);
    }

    #[test]
    fn test_round_trip_drag_and_wheel_converge() {
        let viewport = 300.0;
        let mut s = ScrollState {
            prev_content: 714.0,
            has_prev: true,
            ..Default::default()
        };

        // Wheel path
        s.wheel(-30.0); // 600 px, past the end
        s.clamp_to_previous(viewport);
        assert_eq!(s.offset, 414.0);

        // Drag path lands on the same clamp
        let travel = viewport - thumb_height(714.0, viewport);
        if let Some(offset) = offset_for_thumb(travel * 2.0, travel, 414.0) {
            s.offset = offset;
        }
        s.content = 714.0;
        s.clamp_to_content(viewport);
        assert_eq!(s.offset, 414.0);
    }

    #[test]
    fn test_commit_records_previous() {
        let mut s = ScrollState::default();
        s.content = 714.0;
        s.commit();

        assert!(s.has_prev);
        assert_eq!(s.prev_content, 714.0);
        assert_eq!(s.content, 0.0);
    }
}
