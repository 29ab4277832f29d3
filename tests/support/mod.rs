//! Shared test doubles: a scripted input source and a recording
//! renderer.

use ember_ui::{FontDesc, InputSource, KeyEvent, Rect, Renderer, Rgba, Vec2};

// =============================================================================
// ScriptedInput
// =============================================================================

/// Input source driven field-by-field from the test body.
///
/// Set the fields you care about, run a frame, repeat. Key and char
/// queues are drained by sampling, like a real backend's event queue.
pub struct ScriptedInput {
    pub pointer: Vec2,
    pub pressed: bool,
    pub held: bool,
    pub wheel: f32,
    pub dt: f32,
    pub keys: Vec<KeyEvent>,
    pub chars: Vec<char>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self {
            pointer: Vec2::ZERO,
            pressed: false,
            held: false,
            wheel: 0.0,
            dt: 1.0 / 60.0,
            keys: Vec::new(),
            chars: Vec::new(),
        }
    }

    /// Park the pointer somewhere harmless with no buttons down.
    pub fn idle(&mut self) {
        self.pointer = Vec2::new(-100.0, -100.0);
        self.pressed = false;
        self.held = false;
        self.wheel = 0.0;
    }

    /// Click: press and hold at a position this frame.
    pub fn press_at(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.pressed = true;
        self.held = true;
    }

    /// Keep holding at a new position (drag motion).
    pub fn hold_at(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
        self.pressed = false;
        self.held = true;
    }

    /// Release the primary button.
    pub fn release(&mut self) {
        self.pressed = false;
        self.held = false;
    }

    /// Queue typed characters for the next frame.
    pub fn type_str(&mut self, s: &str) {
        self.chars.extend(s.chars());
    }
}

impl InputSource for ScriptedInput {
    fn pointer(&self) -> Vec2 {
        self.pointer
    }

    fn primary_pressed(&self) -> bool {
        self.pressed
    }

    fn primary_held(&self) -> bool {
        self.held
    }

    fn wheel_delta(&self) -> f32 {
        self.wheel
    }

    fn frame_time(&self) -> f32 {
        self.dt
    }

    fn drain_keys(&mut self) -> Vec<KeyEvent> {
        std::mem::take(&mut self.keys)
    }

    fn drain_chars(&mut self) -> Vec<char> {
        std::mem::take(&mut self.chars)
    }
}

// =============================================================================
// RecordingRenderer
// =============================================================================

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect(Rect, Rgba),
    StrokeRect(Rect, f32, Rgba),
    Text(String, Vec2, Rgba),
    PushClip(Rect),
    PopClip,
    Cover(Rgba),
}

/// Renderer that records every call and measures glyphs at a fixed
/// half-size width, so text metrics are deterministic.
pub struct RecordingRenderer {
    pub ops: Vec<DrawOp>,
    clip_depth: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            clip_depth: 0,
        }
    }

    /// Forget everything recorded so far (between frames).
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Clip pushes still unbalanced by pops.
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// All full-surface covers recorded, in order.
    pub fn covers(&self) -> Vec<Rgba> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Cover(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// The first rectangle fill, if any (a panel's body).
    pub fn first_fill(&self) -> Option<(Rect, Rgba)> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::FillRect(r, c) => Some((*r, *c)),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Rgba) {
        self.ops.push(DrawOp::StrokeRect(rect, width, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _font: FontDesc, color: Rgba) {
        self.ops.push(DrawOp::Text(text.to_string(), pos, color));
    }

    fn measure_text(&mut self, text: &str, font: FontDesc) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * font.size * 0.5, font.size)
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.ops.push(DrawOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.clip_depth = self.clip_depth.saturating_sub(1);
        self.ops.push(DrawOp::PopClip);
    }

    fn cover(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Cover(color));
    }
}
