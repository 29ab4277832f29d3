//! Engine Context - All retained state in one place
//!
//! [`Ui`] owns everything that persists between frames: the input
//! snapshot, the theme, the alpha compositor, the fade overlay, the
//! per-panel scroll registry and the text-input focus manager. Hosts
//! create one `Ui` per logical screen and thread `&mut Ui` through their
//! frame; independent instances never share state, so tests need no
//! global reset.
//!
//! # Example
//!
//! ```ignore
//! use ember_ui::{Rect, Ui};
//!
//! let mut ui = Ui::new();
//! loop {
//!     ui.begin_frame(&mut input);
//!     let mut panel = ui.panel(&mut renderer, Rect::new(50.0, 50.0, 200.0, 300.0))
//!         .title("Menu")
//!         .scrollable()
//!         .begin();
//!     if panel.button("Start", 30.0) {
//!         ui.fade_to(255.0, 0.6);
//!     }
//!     panel.end();
//!     ui.draw_fade(&mut renderer);
//! }
//! ```

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};
use tracing::debug;

use crate::alpha::AlphaStack;
use crate::fade::FadeOverlay;
use crate::input::{FrameInput, InputSource};
use crate::render::Renderer;
use crate::scroll::ScrollState;
use crate::text::FieldId;
use crate::theme::Theme;
use crate::types::Rgba;

/// Scroll-registry slot for scrollable panels that carry no identity.
const ANON_SCROLL_KEY: u64 = 0;

// =============================================================================
// Ui
// =============================================================================

/// The engine context: one instance per independent UI.
pub struct Ui {
    pub(crate) input: FrameInput,
    pub(crate) theme: Theme,
    pub(crate) alpha: AlphaStack,
    pub(crate) fade: FadeOverlay,
    pub(crate) scroll: FxHashMap<u64, ScrollState>,
    pub(crate) focus: Option<FieldId>,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    /// Create a fresh context with the default theme and no retained
    /// state.
    pub fn new() -> Self {
        Self {
            input: FrameInput::default(),
            theme: Theme::default(),
            alpha: AlphaStack::new(),
            fade: FadeOverlay::new(),
            scroll: FxHashMap::default(),
            focus: None,
        }
    }

    /// Sample the input source and advance frame-driven animations.
    ///
    /// Call exactly once per frame, before any panel session.
    pub fn begin_frame(&mut self, source: &mut dyn InputSource) {
        self.input = FrameInput::sample(source);
        self.fade.advance(self.input.dt);
    }

    /// The input snapshot captured at `begin_frame`.
    #[inline]
    pub fn input(&self) -> &FrameInput {
        &self.input
    }

    // -------------------------------------------------------------------------
    // Theme
    // -------------------------------------------------------------------------

    /// The active theme.
    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Install a theme, backfilling zeroed colors from the hard
    /// defaults and zeroed fonts from the theme being replaced.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme.backfilled(&self.theme);
    }

    /// Restore the default theme.
    pub fn reset_theme(&mut self) {
        self.theme = Theme::default();
    }

    // -------------------------------------------------------------------------
    // Fade overlay
    // -------------------------------------------------------------------------

    /// Animate the full-screen overlay toward `target` (0-255) over
    /// `duration` seconds.
    pub fn fade_to(&mut self, target: f32, duration: f32) {
        self.fade.fade_to(target, duration);
    }

    /// Replace the overlay tint (alpha channel ignored).
    pub fn set_fade_tint(&mut self, tint: Rgba) {
        self.fade.set_tint(tint);
    }

    /// The overlay alpha currently on screen.
    #[inline]
    pub fn fade_alpha(&self) -> f32 {
        self.fade.alpha()
    }

    /// Whether the overlay animation is still running.
    #[inline]
    pub fn fade_active(&self) -> bool {
        self.fade.is_active()
    }

    /// Draw the overlay; call after all panels.
    pub fn draw_fade(&self, renderer: &mut dyn Renderer) {
        self.fade.draw(renderer);
    }

    // -------------------------------------------------------------------------
    // Focus manager
    // -------------------------------------------------------------------------

    /// Give keyboard focus to one field, defocusing any previous holder.
    pub fn focus(&mut self, id: FieldId) {
        if self.focus != Some(id) {
            debug!(?id, prev = ?self.focus, "focus moved");
            self.focus = Some(id);
        }
    }

    /// Clear keyboard focus entirely.
    pub fn blur(&mut self) {
        if self.focus.is_some() {
            debug!(prev = ?self.focus, "focus cleared");
            self.focus = None;
        }
    }

    /// Whether the given field currently holds focus.
    #[inline]
    pub fn is_focused(&self, id: FieldId) -> bool {
        self.focus == Some(id)
    }

    /// The field currently holding focus, if any.
    #[inline]
    pub fn focused(&self) -> Option<FieldId> {
        self.focus
    }

    // -------------------------------------------------------------------------
    // Scroll registry
    // -------------------------------------------------------------------------

    /// Current scroll offset of the panel with the given identity.
    ///
    /// Zero for panels that have never scrolled.
    pub fn scroll_offset(&self, id: &str) -> f32 {
        self.scroll
            .get(&scroll_key(Some(id)))
            .map(|s| s.offset)
            .unwrap_or(0.0)
    }

    /// Retained scroll state for one panel identity.
    pub(crate) fn scroll_entry(&mut self, key: u64) -> &mut ScrollState {
        self.scroll.entry(key).or_default()
    }
}

/// Map a panel identity to its scroll-registry key.
pub(crate) fn scroll_key(id: Option<&str>) -> u64 {
    match id {
        Some(id) => {
            let mut hasher = FxHasher::default();
            id.hash(&mut hasher);
            // Key 0 is reserved for the anonymous slot
            hasher.finish().max(1)
        }
        None => ANON_SCROLL_KEY,
    }
}

// =============================================================================
// Tests
// =============================================================================
