//! Text Input Editor - Single-line editing state machine
//!
//! [`TextInputState`] owns one editable line of text with a fixed
//! character capacity, a cursor, and a caret-blink timer. The host keeps
//! one instance per editable field; which instance currently receives
//! keystrokes is decided by the engine context's focus manager, keyed by
//! each state's [`FieldId`].
//!
//! Invariant maintained by every operation:
//! `0 <= cursor <= len < capacity` (lengths in characters).

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::render::{FontDesc, Renderer};

/// Seconds per caret blink cycle; the caret shows for the first half.
pub const BLINK_PERIOD: f32 = 1.0;

// =============================================================================
// FieldId
// =============================================================================

/// Stable identity of one text-input state, used as the focus key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

static NEXT_FIELD_ID: AtomicU64 = AtomicU64::new(1);

impl FieldId {
    fn next() -> Self {
        Self(NEXT_FIELD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// =============================================================================
// TextInputState
// =============================================================================

/// Host-owned state of one editable text field.
#[derive(Debug)]
pub struct TextInputState {
    id: FieldId,
    text: String,
    capacity: usize,
    cursor: usize,
    blink: f32,
}

impl TextInputState {
    /// Create an empty field holding at most `capacity - 1` characters.
    ///
    /// A capacity below 1 is raised to 1 (an always-empty field).
    pub fn new(capacity: usize) -> Self {
        Self {
            id: FieldId::next(),
            text: String::new(),
            capacity: capacity.max(1),
            cursor: 0,
            blink: 0.0,
        }
    }

    /// Create a field pre-filled with `text`, cursor at the end.
    ///
    /// Text beyond the capacity is truncated.
    pub fn with_text(text: &str, capacity: usize) -> Self {
        let mut state = Self::new(capacity);
        state.text = text.chars().take(state.capacity - 1).collect();
        state.cursor = state.text.chars().count();
        state
    }

    /// This field's focus identity.
    #[inline]
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Current contents.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Cursor index in characters.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Insert a character at the cursor.
    ///
    /// Control characters are ignored, and the insertion is dropped once
    /// one more character would reach the capacity. Returns whether the
    /// text changed.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        let len = self.len();
        if len + 1 >= self.capacity {
            debug!(capacity = self.capacity, "text buffer full, keystroke dropped");
            return false;
        }

        let byte = self.byte_index(self.cursor);
        self.text.insert(byte, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character left of the cursor (Backspace).
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte = self.byte_index(self.cursor - 1);
        self.text.remove(byte);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor (Delete), cursor unmoved.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let byte = self.byte_index(self.cursor);
        self.text.remove(byte);
        true
    }

    /// Move the cursor by `delta` characters, clamped to [0, len].
    pub fn move_cursor(&mut self, delta: i32) {
        let len = self.len() as i32;
        self.cursor = (self.cursor as i32 + delta).clamp(0, len) as usize;
    }

    /// Jump the cursor to the start of the line.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Jump the cursor to the end of the line.
    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Place the cursor at an absolute character index, clamped.
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.len());
    }

    // -------------------------------------------------------------------------
    // Caret blink
    // -------------------------------------------------------------------------

    /// Advance the blink timer while focused.
    pub fn tick_blink(&mut self, dt: f32) {
        self.blink = (self.blink + dt) % BLINK_PERIOD;
    }

    /// Reset the blink timer (on blur, and on focus so the caret is
    /// immediately visible).
    pub fn reset_blink(&mut self) {
        self.blink = 0.0;
    }

    /// Whether the caret is in the visible half of its cycle.
    #[inline]
    pub fn caret_visible(&self) -> bool {
        self.blink < BLINK_PERIOD / 2.0
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

// =============================================================================
// Caret placement from a click
// =============================================================================

/// Estimate the caret index for a click `local_x` pixels into the text.
///
/// Walks the line accumulating per-character measured widths; the caret
/// lands before the first character whose midpoint lies past the click.
pub fn caret_index_at(
    renderer: &mut dyn Renderer,
    font: FontDesc,
    text: &str,
    local_x: f32,
) -> usize {
    let mut acc = 0.0;
    let mut buf = [0u8; 4];
    for (i, ch) in text.chars().enumerate() {
        let glyph = renderer.measure_text(ch.encode_utf8(&mut buf), font).x + font.spacing;
        if local_x < acc + glyph / 2.0 {
            return i;
        }
        acc += glyph;
    }
    text.chars().count()
}

// =============================================================================
// Tests
// =============================================================================
