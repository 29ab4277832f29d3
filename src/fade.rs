//! Fade Overlay Animator - Full-screen fade
//!
//! A single screen-covering opacity animation, independent of any panel.
//! The host triggers it with [`FadeOverlay::fade_to`]; `Ui::begin_frame`
//! advances it by the frame's elapsed time; drawing happens whenever the
//! host asks, typically after all panels.
//!
//! Alpha is kept as an `f32` channel value in [0, 255] so mid-animation
//! values keep sub-step precision; it is quantized only at draw time.

use tracing::debug;

use crate::render::Renderer;
use crate::types::Rgba;

/// State of the full-screen fade animation.
#[derive(Debug, Clone)]
pub struct FadeOverlay {
    start: f32,
    target: f32,
    duration: f32,
    elapsed: f32,
    current: f32,
    active: bool,
    tint: Rgba,
}

impl Default for FadeOverlay {
    fn default() -> Self {
        Self {
            start: 0.0,
            target: 0.0,
            duration: 0.0,
            elapsed: 0.0,
            current: 0.0,
            active: false,
            tint: Rgba::BLACK,
        }
    }
}

impl FadeOverlay {
    /// Create an inactive overlay at alpha 0 with a black tint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin animating from the current alpha toward `target` over
    /// `duration` seconds.
    ///
    /// A non-positive duration snaps to the target immediately. A new
    /// trigger mid-animation restarts from wherever the alpha is now.
    pub fn fade_to(&mut self, target: f32, duration: f32) {
        let target = target.clamp(0.0, 255.0);
        debug!(from = self.current, target, duration, "fade triggered");

        self.start = self.current;
        self.target = target;
        self.duration = duration;
        self.elapsed = 0.0;

        if duration <= 0.0 {
            self.current = target;
            self.active = false;
        } else {
            self.active = true;
        }
    }

    /// Advance the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        self.elapsed += dt;
        let progress = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.current = self.start + (self.target - self.start) * progress;

        if progress >= 1.0 {
            self.active = false;
        }
    }

    /// The alpha currently on screen, in [0, 255].
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.current
    }

    /// Whether an animation is still running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The overlay color. Its alpha channel is ignored.
    #[inline]
    pub fn tint(&self) -> Rgba {
        self.tint
    }

    /// Replace the overlay color.
    pub fn set_tint(&mut self, tint: Rgba) {
        self.tint = tint;
    }

    /// Cover the whole surface with the tint at the current alpha.
    ///
    /// A fully transparent overlay draws nothing.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        if self.current <= 0.0 {
            return;
        }
        renderer.cover(self.tint.with_alpha(self.current.round() as u8));
    }
}

// =============================================================================
// Tests
// =============================================================================
