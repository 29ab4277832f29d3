//! Panel Layout Engine - Sessions, chrome and child widgets
//!
//! The central orchestrator. A session starts with [`Ui::panel`], which
//! returns a [`PanelBuilder`]; `begin` draws the chrome, applies wheel
//! input, clips to the interior and hands back a [`Panel`] guard. Child
//! widgets are methods on the guard: each computes its horizontal
//! placement from the content band and alignment, its vertical placement
//! from the layout cursor minus the scroll offset, then advances the
//! cursor. `end` draws the scrollbar, settles the scroll state and pops
//! the session's alpha.
//!
//! Because the guard borrows both the context and the renderer, a second
//! session cannot open before the first ends, and no child widget can
//! run outside a session - the hazards the original engine documented
//! are unrepresentable here.
//!
//! # Example
//!
//! ```ignore
//! let mut panel = ui.panel(&mut renderer, Rect::new(50.0, 50.0, 200.0, 300.0))
//!     .title("Many Buttons")
//!     .id("list")
//!     .scrollable()
//!     .begin();
//! for i in 0..20 {
//!     if panel.button(&format!("Item {}", i + 1), 30.0) {
//!         println!("clicked {}", i + 1);
//!     }
//! }
//! panel.end();
//! ```

use tracing::debug;

use crate::context::{scroll_key, Ui};
use crate::input::Key;
use crate::render::{FontDesc, Renderer};
use crate::scroll::{
    self, SCROLLBAR_MARGIN, SCROLLBAR_RESERVE, SCROLLBAR_TRACK_WIDTH,
};
use crate::text::{caret_index_at, TextInputState};
use crate::theme::{ButtonStyle, PanelStyle};
use crate::types::{Align, Rect, Rgba, Vec2};

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Inner padding between the panel edge and the content band.
pub const PANEL_PADDING: f32 = 8.0;

/// Vertical gap between consecutive child widgets.
pub const WIDGET_SPACING: f32 = 6.0;

/// Smallest header a titled or closable panel gets.
pub const MIN_HEADER_HEIGHT: f32 = 24.0;

/// Vertical padding above and below the title text.
const HEADER_PAD: f32 = 4.0;

/// Outline width of the panel body.
const BORDER_WIDTH: f32 = 2.0;

/// Gap between the close affordance and the header edges.
const CLOSE_INSET: f32 = 3.0;

/// Horizontal padding between a field's border and its text.
const FIELD_PAD: f32 = 4.0;

/// Slider track thickness and grab width.
const TRACK_THICKNESS: f32 = 6.0;
const GRAB_WIDTH: f32 = 10.0;

// =============================================================================
// Pure layout arithmetic
// =============================================================================

/// Header height: zero without a header, otherwise the title font plus
/// padding with a minimum floor.
fn header_height(title_font_size: f32, has_header: bool) -> f32 {
    if has_header {
        (title_font_size + 2.0 * HEADER_PAD).max(MIN_HEADER_HEIGHT)
    } else {
        0.0
    }
}

/// Horizontal placement of one widget inside the content band.
///
/// The override never widens a widget past the band.
fn widget_x(band_left: f32, band_right: f32, override_w: Option<f32>, align: Align) -> (f32, f32) {
    let band = (band_right - band_left).max(0.0);
    let w = override_w.map(|w| w.min(band)).unwrap_or(band);
    let x = match align {
        Align::Left => band_left,
        Align::Center => band_left + (band - w) / 2.0,
        Align::Right => band_right - w,
    };
    (x, w)
}

/// Put a slider range in ascending order.
fn normalize_range(min: f32, max: f32) -> (f32, f32) {
    if min > max { (max, min) } else { (min, max) }
}

/// Shared button rendering; returns whether it was activated (pressed
/// while hovered - activation is on press, not release).
fn button_impl(
    renderer: &mut dyn Renderer,
    style: &ButtonStyle,
    font: FontDesc,
    alpha: f32,
    label: &str,
    rect: Rect,
    hovered: bool,
    pressed: bool,
) -> bool {
    let activated = hovered && pressed;

    let fill = if activated {
        style.fill_press
    } else if hovered {
        style.fill_hover
    } else {
        style.fill
    };
    renderer.fill_rect(rect, fill.scale_alpha(alpha));
    renderer.stroke_rect(rect, BORDER_WIDTH, style.border.scale_alpha(alpha));

    let extent = renderer.measure_text(label, font);
    let pos = Vec2::new(
        rect.x + (rect.w - extent.x) / 2.0,
        rect.y + (rect.h - font.size) / 2.0,
    );
    renderer.draw_text(label, pos, font, style.text.scale_alpha(alpha));

    activated
}

// =============================================================================
// PanelBuilder
// =============================================================================

/// Configuration for one panel session; `begin` opens it.
pub struct PanelBuilder<'a> {
    ui: &'a mut Ui,
    renderer: &'a mut dyn Renderer,
    bounds: Rect,
    title: Option<&'a str>,
    id: Option<&'a str>,
    style: Option<PanelStyle>,
    alpha: f32,
    scrollable: bool,
    closable: bool,
    close_label: &'a str,
}

impl Ui {
    /// Start configuring a panel session over the given bounds.
    pub fn panel<'a>(&'a mut self, renderer: &'a mut dyn Renderer, bounds: Rect) -> PanelBuilder<'a> {
        PanelBuilder {
            ui: self,
            renderer,
            bounds,
            title: None,
            id: None,
            style: None,
            alpha: 1.0,
            scrollable: false,
            closable: false,
            close_label: "x",
        }
    }
}

impl<'a> PanelBuilder<'a> {
    /// Give the panel a header with this title.
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Stable identity for the scroll registry. Defaults to the title.
    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Override the themed panel style for this session.
    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Fade the whole session by a factor in [0, 1].
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Let the content overflow vertically behind a scrollbar.
    pub fn scrollable(mut self) -> Self {
        self.scrollable = true;
        self
    }

    /// Reserve a close affordance in the header.
    pub fn closable(mut self) -> Self {
        self.closable = true;
        self
    }

    /// Close affordance with a custom label (implies `closable`).
    pub fn close_label(mut self, label: &'a str) -> Self {
        self.closable = true;
        self.close_label = label;
        self
    }

    /// Open the session: apply wheel input, draw the chrome and clip to
    /// the interior.
    pub fn begin(self) -> Panel<'a> {
        let Self {
            ui,
            renderer,
            bounds,
            title,
            id,
            style,
            alpha,
            scrollable,
            closable,
            close_label,
        } = self;

        let style = style.unwrap_or(ui.theme.panel);
        let body_font = ui.theme.body_font;
        let header_font = ui.theme.header_font;
        let header = header_height(header_font.size, title.is_some() || closable);
        let viewport = bounds.h - header;

        debug!(?bounds, ?title, scrollable, "panel session opened");

        // A dropped push (stack full) must not be popped at end.
        let pushed_alpha = alpha != 1.0 && ui.alpha.push(alpha);

        let key = scroll_key(id.or(title));
        let mut offset = 0.0;
        if scrollable {
            let pointer = ui.input.pointer;
            let wheel = ui.input.wheel;
            let entry = ui.scroll_entry(key);
            if bounds.contains(pointer) {
                entry.wheel(wheel);
            }
            entry.clamp_to_previous(viewport);
            offset = entry.offset;
        }

        let combined = ui.alpha.current();
        renderer.fill_rect(bounds, style.body.scale_alpha(combined));
        renderer.stroke_rect(bounds, BORDER_WIDTH, style.border.scale_alpha(combined));

        let mut close_clicked = false;
        if header > 0.0 {
            let header_rect = Rect::new(bounds.x, bounds.y, bounds.w, header);
            renderer.fill_rect(header_rect, style.header.scale_alpha(combined));
            renderer.stroke_rect(header_rect, 1.0, style.border.scale_alpha(combined));

            if let Some(title) = title {
                let pos = Vec2::new(
                    bounds.x + PANEL_PADDING,
                    bounds.y + (header - header_font.size) / 2.0,
                );
                renderer.draw_text(title, pos, header_font, style.title_text.scale_alpha(combined));
            }

            if closable {
                let size = header - 2.0 * CLOSE_INSET;
                let close_rect = Rect::new(
                    bounds.right() - size - CLOSE_INSET,
                    bounds.y + CLOSE_INSET,
                    size,
                    size,
                );
                let hovered = close_rect.contains(ui.input.pointer);
                close_clicked = button_impl(
                    renderer,
                    &ui.theme.button,
                    header_font,
                    combined,
                    close_label,
                    close_rect,
                    hovered,
                    ui.input.pressed,
                );
                if close_clicked {
                    debug!(?title, "panel close affordance activated");
                }
            }
        }

        let interior = Rect::new(bounds.x, bounds.y + header, bounds.w, viewport);
        renderer.push_clip(interior);

        let band_right_reserve = if scrollable { SCROLLBAR_RESERVE } else { 0.0 };
        Panel {
            ui,
            renderer,
            bounds,
            interior,
            style,
            body_font,
            align: style.align,
            content_width: None,
            band_left: bounds.x + PANEL_PADDING,
            band_right: bounds.right() - PANEL_PADDING - band_right_reserve,
            content_top: bounds.y + header + PANEL_PADDING,
            cursor: bounds.y + header + PANEL_PADDING,
            content: 0.0,
            offset,
            scrollable,
            key,
            pushed_alpha,
            close_clicked,
            finished: false,
        }
    }
}

// =============================================================================
// Panel
// =============================================================================

/// An open panel session. Child widgets are methods; `end` (or drop)
/// closes the session.
pub struct Panel<'a> {
    ui: &'a mut Ui,
    renderer: &'a mut dyn Renderer,
    bounds: Rect,
    interior: Rect,
    style: PanelStyle,
    body_font: FontDesc,
    align: Align,
    content_width: Option<f32>,
    band_left: f32,
    band_right: f32,
    content_top: f32,
    cursor: f32,
    content: f32,
    offset: f32,
    scrollable: bool,
    key: u64,
    pushed_alpha: bool,
    close_clicked: bool,
    finished: bool,
}

impl Panel<'_> {
    /// Whether the header's close affordance was activated this frame.
    #[inline]
    pub fn close_clicked(&self) -> bool {
        self.close_clicked
    }

    /// The scroll offset in effect for this session.
    #[inline]
    pub fn scroll_offset(&self) -> f32 {
        self.offset
    }

    /// Constrain following widgets to this width instead of the full
    /// content band.
    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = (width > 0.0).then_some(width);
    }

    /// Let following widgets span the full content band again.
    pub fn clear_content_width(&mut self) {
        self.content_width = None;
    }

    /// Horizontal alignment for following widgets.
    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    // -------------------------------------------------------------------------
    // Placement
    // -------------------------------------------------------------------------

    /// Reserve a row of the given height: compute its rectangle, advance
    /// the cursor and update the accumulated content height.
    fn place(&mut self, height: f32) -> Rect {
        let (x, w) = widget_x(self.band_left, self.band_right, self.content_width, self.align);
        let rect = Rect::new(x, self.cursor - self.offset, w, height);

        self.cursor += height + WIDGET_SPACING;
        self.content = self.cursor - self.content_top - WIDGET_SPACING;

        rect
    }

    /// Pointer hit test confined to the visible interior, so widgets
    /// scrolled out of view cannot be activated.
    fn hit(&self, rect: Rect) -> bool {
        rect.intersect(&self.interior).contains(self.ui.input.pointer)
    }

    #[inline]
    fn tint(&self, color: Rgba) -> Rgba {
        self.ui.alpha.apply(color)
    }

    // -------------------------------------------------------------------------
    // Child widgets
    // -------------------------------------------------------------------------

    /// A full-band button; returns whether it was pressed this frame.
    pub fn button(&mut self, label: &str, height: f32) -> bool {
        let rect = self.place(height);
        let hovered = self.hit(rect);
        button_impl(
            self.renderer,
            &self.ui.theme.button,
            self.body_font,
            self.ui.alpha.current(),
            label,
            rect,
            hovered,
            self.ui.input.pressed,
        )
    }

    /// Like [`button`](Self::button), invoking `on_press` on activation.
    pub fn button_with(&mut self, label: &str, height: f32, on_press: impl FnOnce()) -> bool {
        let activated = self.button(label, height);
        if activated {
            on_press();
        }
        activated
    }

    /// A line of text in the panel's label color.
    pub fn label(&mut self, text: &str) {
        let font = self.body_font;
        let rect = self.place(font.size);
        let color = self.tint(self.style.text);
        self.renderer
            .draw_text(text, Vec2::new(rect.x, rect.y), font, color);
    }

    /// Empty vertical space.
    pub fn spacer(&mut self, height: f32) {
        let _ = self.place(height);
    }

    /// A horizontal slider over `[min, max]`; returns the new value.
    ///
    /// An inverted range is swapped before use; a zero-width band leaves
    /// the value untouched.
    pub fn slider(&mut self, value: f32, min: f32, max: f32, height: f32) -> f32 {
        let (min, max) = normalize_range(min, max);
        let rect = self.place(height);

        let mut value = value.clamp(min, max);
        let dragging = self.ui.input.held && self.hit(rect);
        if dragging && rect.w > 0.0 {
            let t = ((self.ui.input.pointer.x - rect.x) / rect.w).clamp(0.0, 1.0);
            value = min + t * (max - min);
        }

        let t = if max > min { (value - min) / (max - min) } else { 0.0 };
        let slider = self.ui.theme.slider;
        let track = Rect::new(
            rect.x,
            rect.y + (rect.h - TRACK_THICKNESS) / 2.0,
            rect.w,
            TRACK_THICKNESS,
        );
        let filled = Rect::new(track.x, track.y, track.w * t, track.h);
        let grab = Rect::new(
            rect.x + t * (rect.w - GRAB_WIDTH).max(0.0),
            rect.y,
            GRAB_WIDTH,
            rect.h,
        );
        let grab_color = if dragging {
            slider.grab_drag
        } else if self.hit(grab) {
            slider.grab_hover
        } else {
            slider.grab
        };

        let (track_c, fill_c, grab_c) =
            (self.tint(slider.track), self.tint(slider.fill), self.tint(grab_color));
        self.renderer.fill_rect(track, track_c);
        self.renderer.fill_rect(filled, fill_c);
        self.renderer.fill_rect(grab, grab_c);

        value
    }

    /// Like [`slider`](Self::slider), invoking `on_change` once when the
    /// returned value differs from the input value.
    pub fn slider_with(
        &mut self,
        value: f32,
        min: f32,
        max: f32,
        height: f32,
        on_change: impl FnOnce(f32),
    ) -> f32 {
        let new = self.slider(value, min, max, height);
        if new != value {
            on_change(new);
        }
        new
    }

    /// A check box with a caption; returns the new state.
    pub fn toggle(&mut self, on: bool, caption: &str) -> bool {
        let font = self.body_font;
        let rect = self.place(font.size);
        let on = if self.ui.input.pressed && self.hit(rect) { !on } else { on };

        let toggle = self.ui.theme.toggle;
        let box_rect = Rect::new(rect.x, rect.y, rect.h, rect.h);
        let frame_c = self.tint(toggle.frame);
        self.renderer.stroke_rect(box_rect, 1.0, frame_c);
        if on {
            let check_c = self.tint(toggle.check);
            self.renderer.fill_rect(box_rect.inset(3.0), check_c);
        }
        let text_c = self.tint(toggle.text);
        self.renderer.draw_text(
            caption,
            Vec2::new(box_rect.right() + FIELD_PAD, rect.y),
            font,
            text_c,
        );

        on
    }

    /// Like [`toggle`](Self::toggle), invoking `on_change` once when the
    /// state flips.
    pub fn toggle_with(&mut self, on: bool, caption: &str, on_change: impl FnOnce(bool)) -> bool {
        let new = self.toggle(on, caption);
        if new != on {
            on_change(new);
        }
        new
    }

    /// An editable text field bound to host-owned state.
    ///
    /// Returns whether the buffer's length changed this frame. Enter
    /// only defocuses; hosts watch this flag or read the buffer to
    /// detect completion.
    pub fn text_field(&mut self, state: &mut TextInputState, height: f32) -> bool {
        let font = self.body_font;
        let rect = self.place(height);

        // Focus transitions on a primary press: inside focuses (and
        // places the caret under the click), outside defocuses.
        if self.ui.input.pressed {
            if self.hit(rect) {
                if !self.ui.is_focused(state.id()) {
                    self.ui.focus(state.id());
                    state.reset_blink();
                }
                let local_x = self.ui.input.pointer.x - (rect.x + FIELD_PAD);
                let index = caret_index_at(self.renderer, font, state.text(), local_x);
                state.set_cursor(index);
            } else if self.ui.is_focused(state.id()) {
                self.ui.blur();
            }
        }

        let len_before = state.len();

        if self.ui.is_focused(state.id()) {
            for ch in std::mem::take(&mut self.ui.input.chars) {
                state.insert_char(ch);
            }

            for event in std::mem::take(&mut self.ui.input.keys) {
                match event.key {
                    Key::Backspace => {
                        state.delete_backward();
                    }
                    Key::Delete => {
                        state.delete_forward();
                    }
                    Key::Left => state.move_cursor(-1),
                    Key::Right => state.move_cursor(1),
                    Key::Home => state.move_home(),
                    Key::End => state.move_end(),
                    Key::Enter | Key::Escape => {
                        self.ui.blur();
                        break;
                    }
                }
            }
        }

        let focused = self.ui.is_focused(state.id());
        if focused {
            state.tick_blink(self.ui.input.dt);
        } else {
            state.reset_blink();
        }

        let input_style = self.ui.theme.text_input;
        let fill_c = self.tint(input_style.fill);
        self.renderer.fill_rect(rect, fill_c);
        let border = if focused { input_style.border_focus } else { input_style.border };
        let border_c = self.tint(border);
        self.renderer.stroke_rect(rect, 1.0, border_c);

        let text_pos = Vec2::new(rect.x + FIELD_PAD, rect.y + (rect.h - font.size) / 2.0);
        let text_c = self.tint(input_style.text);
        self.renderer.draw_text(state.text(), text_pos, font, text_c);

        if focused && state.caret_visible() {
            let prefix: String = state.text().chars().take(state.cursor()).collect();
            let caret_x = text_pos.x + self.renderer.measure_text(&prefix, font).x;
            let caret_c = self.tint(input_style.caret);
            self.renderer
                .fill_rect(Rect::new(caret_x, text_pos.y, 1.0, font.size), caret_c);
        }

        state.len() != len_before
    }

    // -------------------------------------------------------------------------
    // Session end
    // -------------------------------------------------------------------------

    /// Close the session: scrollbar, scroll settlement, clip and alpha
    /// cleanup.
    pub fn end(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;

        self.renderer.pop_clip();

        if self.scrollable {
            self.finish_scroll();
        }

        if self.pushed_alpha {
            self.ui.alpha.pop();
        }
        debug!(content = self.content, "panel session closed");
    }

    fn finish_scroll(&mut self) {
        let header = self.interior.y - self.bounds.y;
        let viewport = self.bounds.h - header;
        let content = self.content;
        let pointer = self.ui.input.pointer;
        let pressed = self.ui.input.pressed;
        let held = self.ui.input.held;

        if content > viewport {
            let max = scroll::max_offset(content, viewport);
            let thumb_h = scroll::thumb_height(content, viewport);
            let travel = viewport - thumb_h;
            let track = Rect::new(
                self.bounds.right() - SCROLLBAR_MARGIN,
                self.bounds.y + header,
                SCROLLBAR_TRACK_WIDTH,
                viewport,
            );

            let slider = self.ui.theme.slider;
            let entry = self.ui.scroll_entry(self.key);
            let thumb_y = track.y + scroll::thumb_position(entry.offset, max, travel);
            let thumb = Rect::new(track.x, thumb_y, track.w, thumb_h);
            let hovered = thumb.contains(pointer);

            if pressed && hovered {
                entry.dragging = true;
                entry.grab = pointer.y - thumb.y;
            }
            if entry.dragging {
                if held {
                    let new_y = (pointer.y - entry.grab).clamp(track.y, track.y + travel);
                    if let Some(offset) = scroll::offset_for_thumb(new_y - track.y, travel, max) {
                        entry.offset = offset;
                    }
                } else {
                    entry.dragging = false;
                }
            }

            let dragging = entry.dragging;
            entry.content = content;
            entry.clamp_to_content(viewport);
            let settled = entry.offset;
            entry.commit();

            let thumb_color = if dragging {
                slider.grab_drag
            } else if hovered {
                slider.grab_hover
            } else {
                slider.grab
            };
            let thumb = Rect::new(
                track.x,
                track.y + scroll::thumb_position(settled, max, travel),
                track.w,
                thumb_h,
            );
            let (track_c, thumb_c) =
                (self.ui.alpha.apply(slider.track), self.ui.alpha.apply(thumb_color));
            self.renderer.fill_rect(track, track_c);
            self.renderer.fill_rect(thumb, thumb_c);
        } else {
            // Scrollable but nothing to scroll: reset.
            let entry = self.ui.scroll_entry(self.key);
            entry.offset = 0.0;
            entry.dragging = false;
            entry.content = content;
            entry.commit();
        }
    }
}

impl Drop for Panel<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}

// =============================================================================
// Standalone widgets
// =============================================================================

impl Ui {
    /// A one-off label outside any session.
    pub fn label_at(&mut self, renderer: &mut dyn Renderer, text: &str, pos: Vec2) {
        renderer.draw_text(
            text,
            pos,
            self.theme.body_font,
            self.alpha.apply(self.theme.panel.text),
        );
    }

    /// A one-off button at explicit bounds outside any session; returns
    /// whether it was pressed this frame.
    pub fn button_at(&mut self, renderer: &mut dyn Renderer, label: &str, bounds: Rect) -> bool {
        let hovered = bounds.contains(self.input.pointer);
        button_impl(
            renderer,
            &self.theme.button,
            self.theme.body_font,
            self.alpha.current(),
            label,
            bounds,
            hovered,
            self.input.pressed,
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
