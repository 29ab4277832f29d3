//! # ember-ui
//!
//! Retained-state engine for immediate-mode UIs.
//!
//! The host calls the engine every frame; the engine remembers what has
//! to survive between frames (scroll positions, text-editing focus,
//! fade animations, compositing alpha) and draws through an abstract
//! [`Renderer`] fed by an abstract [`InputSource`]. It never opens a
//! window, loads a font or touches a device itself.
//!
//! ## Frame shape
//!
//! ```text
//! begin_frame → panel sessions (sequential, never nested) → draw_fade
//! ```
//!
//! Each session is a borrow-holding guard: child widgets are methods on
//! [`Panel`], so a widget without an open session, or two sessions open
//! at once, simply do not compile.
//!
//! ## Example
//!
//! ```ignore
//! use ember_ui::{Rect, Ui};
//!
//! let mut ui = Ui::new();
//! loop {
//!     ui.begin_frame(&mut input);
//!
//!     let mut panel = ui.panel(&mut renderer, Rect::new(50.0, 50.0, 200.0, 300.0))
//!         .title("Many Buttons")
//!         .scrollable()
//!         .begin();
//!     for i in 0..20 {
//!         if panel.button(&format!("Item {}", i + 1), 30.0) {
//!             println!("clicked {}", i + 1);
//!         }
//!     }
//!     panel.end();
//!
//!     ui.draw_fade(&mut renderer);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`types`] - geometry and color primitives
//! - [`render`] - the [`Renderer`] collaborator trait
//! - [`input`] - the [`InputSource`] collaborator and per-frame sampling
//! - [`theme`] - per-widget style records with backfill
//! - [`alpha`] - the bounded nested-fade compositor
//! - [`scroll`] - scroll offsets, clamping policy, thumb mapping
//! - [`fade`] - the full-screen fade overlay animator
//! - [`text`] - the single-line text-editing state machine
//! - [`panel`] - panel sessions and child widgets
//! - [`context`] - the [`Ui`] engine context owning all retained state

pub mod alpha;
pub mod context;
pub mod fade;
pub mod input;
pub mod panel;
pub mod render;
pub mod scroll;
pub mod text;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::{Align, ParseColorError, Rect, Rgba, Vec2};

pub use render::{FontDesc, Renderer};

pub use input::{FrameInput, InputSource, Key, KeyEvent, Modifiers};

pub use theme::{ButtonStyle, PanelStyle, SliderStyle, TextInputStyle, Theme, ToggleStyle};

pub use alpha::{AlphaStack, ALPHA_STACK_CAPACITY};

pub use scroll::{ScrollState, SCROLLBAR_RESERVE, WHEEL_STEP};

pub use fade::FadeOverlay;

pub use text::{FieldId, TextInputState, BLINK_PERIOD};

pub use panel::{Panel, PanelBuilder, MIN_HEADER_HEIGHT, PANEL_PADDING, WIDGET_SPACING};

pub use context::Ui;
