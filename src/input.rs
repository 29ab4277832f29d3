//! Input Module - Device abstraction and per-frame sampling
//!
//! The engine reads ambient device state through a host-supplied
//! [`InputSource`] exactly once per frame: [`FrameInput::sample`] runs at
//! `Ui::begin_frame` and every other module consumes the resulting
//! snapshot for the rest of the frame.
//!
//! # API
//!
//! - [`InputSource`] - trait the host implements over its input backend
//! - [`FrameInput`] - the once-per-frame snapshot
//! - [`Key`], [`KeyEvent`], [`Modifiers`] - discrete key input
//!
//! # Example
//!
//! ```ignore
//! use ember_ui::{FrameInput, InputSource};
//!
//! let snapshot = FrameInput::sample(&mut my_source);
//! if snapshot.pressed {
//!     println!("primary pressed at {:?}", snapshot.pointer);
//! }
//! ```

use crate::types::Vec2;

// =============================================================================
// Keys
// =============================================================================

/// Navigation and editing keys the engine reacts to.
///
/// Printable input arrives through the separate character stream, not
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
    Escape,
}

bitflags::bitflags! {
    /// Modifier key state carried on a [`KeyEvent`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// A discrete key press delivered by the host this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create an unmodified key press.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a key press with modifiers.
    pub const fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

// =============================================================================
// InputSource
// =============================================================================

/// Host-supplied view of ambient device state.
///
/// The drain methods hand over the discrete events accumulated since the
/// previous frame; the engine calls each exactly once per frame.
pub trait InputSource {
    /// Current pointer position.
    fn pointer(&self) -> Vec2;

    /// Whether the primary button transitioned to pressed this frame.
    fn primary_pressed(&self) -> bool;

    /// Whether the primary button is currently held down.
    fn primary_held(&self) -> bool;

    /// Wheel movement this frame, in notches (positive = away from
    /// the user).
    fn wheel_delta(&self) -> f32;

    /// Seconds elapsed since the previous frame.
    fn frame_time(&self) -> f32;

    /// Key presses accumulated since the previous frame, in order.
    fn drain_keys(&mut self) -> Vec<KeyEvent>;

    /// Character input accumulated since the previous frame, in order.
    fn drain_chars(&mut self) -> Vec<char>;
}

// =============================================================================
// FrameInput
// =============================================================================

/// The once-per-frame input snapshot.
///
/// Captured at `Ui::begin_frame` and read-only for the rest of the
/// frame, so every widget sees the same device state regardless of call
/// order.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position.
    pub pointer: Vec2,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button is currently held.
    pub held: bool,
    /// Wheel notches this frame.
    pub wheel: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Key presses this frame.
    pub keys: Vec<KeyEvent>,
    /// Character input this frame.
    pub chars: Vec<char>,
}

impl FrameInput {
    /// Sample the source into a fresh snapshot.
    pub fn sample(source: &mut dyn InputSource) -> Self {
        Self {
            pointer: source.pointer(),
            pressed: source.primary_pressed(),
            held: source.primary_held(),
            wheel: source.wheel_delta(),
            dt: source.frame_time(),
            keys: source.drain_keys(),
            chars: source.drain_chars(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
