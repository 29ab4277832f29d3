//! Theme System for ember-ui.
//!
//! One style record per widget kind, aggregated into a [`Theme`] owned by
//! the engine context. The theme is replaceable wholesale; fields left at
//! their zero value when a theme is installed are backfilled (colors
//! from the hard defaults, fonts from the previously installed theme),
//! so partial themes compose instead of blanking widgets.
//!
//! # Example
//!
//! ```ignore
//! use ember_ui::{Theme, Rgba};
//!
//! let mut theme = Theme::default();
//! theme.panel.body = Rgba::new(30, 60, 120, 230);
//! ui.set_theme(theme);
//! ```

use crate::render::FontDesc;
use crate::types::{Align, Rgba};

// =============================================================================
// Style records
// =============================================================================

/// Panel chrome colors and default child alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelStyle {
    /// Interior fill.
    pub body: Rgba,
    /// Header bar fill.
    pub header: Rgba,
    /// Outline around body and header.
    pub border: Rgba,
    /// Title text in the header.
    pub title_text: Rgba,
    /// Label text inside the panel.
    pub text: Rgba,
    /// Default horizontal alignment for child widgets.
    pub align: Align,
}

/// Button fill states, outline and label color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonStyle {
    pub fill: Rgba,
    pub fill_hover: Rgba,
    pub fill_press: Rgba,
    pub border: Rgba,
    pub text: Rgba,
}

/// Slider track, filled portion and grab handle.
///
/// The scrollbar reuses `track` and the grab states for its own thumb.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderStyle {
    pub track: Rgba,
    pub fill: Rgba,
    pub grab: Rgba,
    pub grab_hover: Rgba,
    pub grab_drag: Rgba,
}

/// Toggle frame, check mark and caption color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleStyle {
    pub frame: Rgba,
    pub check: Rgba,
    pub text: Rgba,
}

/// Text field box, focus ring, content text and caret.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextInputStyle {
    pub fill: Rgba,
    pub border: Rgba,
    pub border_focus: Rgba,
    pub text: Rgba,
    pub caret: Rgba,
}

// =============================================================================
// Theme
// =============================================================================

/// Aggregate of every widget style plus the two font descriptors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub panel: PanelStyle,
    pub button: ButtonStyle,
    pub slider: SliderStyle,
    pub toggle: ToggleStyle,
    pub text_input: TextInputStyle,
    /// Font for labels, buttons and field content.
    pub body_font: FontDesc,
    /// Font for panel titles.
    pub header_font: FontDesc,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            panel: PanelStyle {
                body: Rgba::rgb(240, 240, 240),
                header: Rgba::rgb(200, 200, 200),
                border: Rgba::DARK_GRAY,
                title_text: Rgba::BLACK,
                text: Rgba::rgb(60, 60, 60),
                align: Align::Left,
            },
            button: ButtonStyle {
                fill: Rgba::rgb(200, 200, 200),
                fill_hover: Rgba::rgb(180, 180, 220),
                fill_press: Rgba::rgb(160, 160, 200),
                border: Rgba::DARK_GRAY,
                text: Rgba::BLACK,
            },
            slider: SliderStyle {
                track: Rgba::LIGHT_GRAY,
                fill: Rgba::rgb(130, 130, 200),
                grab: Rgba::DARK_GRAY,
                grab_hover: Rgba::GRAY,
                grab_drag: Rgba::rgb(0, 121, 241),
            },
            toggle: ToggleStyle {
                frame: Rgba::DARK_GRAY,
                check: Rgba::rgb(0, 121, 241),
                text: Rgba::rgb(60, 60, 60),
            },
            text_input: TextInputStyle {
                fill: Rgba::WHITE,
                border: Rgba::GRAY,
                border_focus: Rgba::rgb(0, 121, 241),
                text: Rgba::BLACK,
                caret: Rgba::BLACK,
            },
            body_font: FontDesc::sized(20.0),
            header_font: FontDesc::sized(16.0),
        }
    }
}

impl Theme {
    /// Resolve zeroed fields against the hard defaults (colors) and the
    /// previously installed theme (fonts).
    ///
    /// Called by the context when a theme is set; a style authored with
    /// only a few colors filled in inherits the rest.
    pub fn backfilled(mut self, prev: &Theme) -> Self {
        let hard = Theme::default();

        fill(&mut self.panel.body, hard.panel.body);
        fill(&mut self.panel.header, hard.panel.header);
        fill(&mut self.panel.border, hard.panel.border);
        fill(&mut self.panel.title_text, hard.panel.title_text);
        fill(&mut self.panel.text, hard.panel.text);

        fill(&mut self.button.fill, hard.button.fill);
        fill(&mut self.button.fill_hover, hard.button.fill_hover);
        fill(&mut self.button.fill_press, hard.button.fill_press);
        fill(&mut self.button.border, hard.button.border);
        fill(&mut self.button.text, hard.button.text);

        fill(&mut self.slider.track, hard.slider.track);
        fill(&mut self.slider.fill, hard.slider.fill);
        fill(&mut self.slider.grab, hard.slider.grab);
        fill(&mut self.slider.grab_hover, hard.slider.grab_hover);
        fill(&mut self.slider.grab_drag, hard.slider.grab_drag);

        fill(&mut self.toggle.frame, hard.toggle.frame);
        fill(&mut self.toggle.check, hard.toggle.check);
        fill(&mut self.toggle.text, hard.toggle.text);

        fill(&mut self.text_input.fill, hard.text_input.fill);
        fill(&mut self.text_input.border, hard.text_input.border);
        fill(&mut self.text_input.border_focus, hard.text_input.border_focus);
        fill(&mut self.text_input.text, hard.text_input.text);
        fill(&mut self.text_input.caret, hard.text_input.caret);

        if self.body_font.is_unset() {
            self.body_font = prev.body_font;
        }
        if self.header_font.is_unset() {
            self.header_font = prev.header_font;
        }

        self
    }
}

#[inline]
fn fill(slot: &mut Rgba, fallback: Rgba) {
    if slot.is_unset() {
        *slot = fallback;
    }
}

// =============================================================================
// Tests
// =============================================================================
