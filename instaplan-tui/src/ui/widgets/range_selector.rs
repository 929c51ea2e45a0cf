//! Dual-handle range selector.
//!
//! Lets the user pick an inclusive integer sub-range `[lo, hi]` by dragging
//! two handles along a horizontal track with the mouse. Controlled widget:
//! the host owns the `RangeValue` and feeds it back on every render; the
//! widget owns only the transient drag state and the last-laid-out track
//! geometry. Every accepted move sample produces exactly one new value,
//! returned synchronously from `on_mouse` — never a mutation in place.
//!
//! The moving handle is clamped against the stationary one (`hi - 1` /
//! `lo + 1`) instead of the update being rejected, so the value stays valid
//! on every sample by construction.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use instaplan_core::range::{RangeBounds, RangeValue};

use crate::theme::Theme;

/// Which handle a keyboard user has focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Handle {
    #[default]
    Low,
    High,
}

impl Handle {
    pub fn toggle(self) -> Handle {
        match self {
            Handle::Low => Handle::High,
            Handle::High => Handle::Low,
        }
    }
}

/// Transient interaction state. Reset to `Idle` whenever the active press
/// ends, from anywhere on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingLow,
    DraggingHigh,
}

/// Presses within this many cells of a handle grab it. Terminal cells are
/// coarse, so the hit region is wider than the glyph itself.
const HIT_SLOP: u16 = 1;

const MIN_TRACK_WIDTH: u16 = 8;

pub struct RangeSelector {
    drag: DragState,
    /// Track row recorded by the last render pass; move samples map pointer
    /// columns through this, so a re-layout (terminal resize) takes effect
    /// on the next sample.
    track: Option<Rect>,
}

impl Default for RangeSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeSelector {
    pub fn new() -> Self {
        Self {
            drag: DragState::Idle,
            track: None,
        }
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag != DragState::Idle
    }

    /// Render the selector into `area` (label, value row, track, bounds
    /// caption) and record the track geometry for hit testing.
    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        value: RangeValue,
        bounds: RangeBounds,
        label: &str,
        focused: Option<Handle>,
        theme: &Theme,
    ) {
        if area.width < MIN_TRACK_WIDTH + 2 || area.height < 4 {
            self.track = None;
            let para = Paragraph::new(Span::styled(
                format!("{} .. {}", value.lo, value.hi),
                theme.accent(),
            ));
            f.render_widget(para, area);
            return;
        }

        let track = Rect {
            x: area.x + 1,
            y: area.y + 2,
            width: area.width - 2,
            height: 1,
        };
        self.track = Some(track);

        let last = track.width - 1;
        let lo_cell = cell_of(value.lo, bounds, track.width);
        let hi_cell = cell_of(value.hi, bounds, track.width);

        // Value row: numbers sitting above their handles.
        let mut value_row = vec![' '; track.width as usize];
        place_centered(&mut value_row, lo_cell, &value.lo.to_string());
        place_centered(&mut value_row, hi_cell, &value.hi.to_string());
        let value_line: String = value_row.into_iter().collect();

        // Track row: plain track, filled span, handle glyphs.
        let mut track_spans: Vec<Span> = Vec::with_capacity(track.width as usize);
        for cell in 0..=last {
            let (glyph, style) = if cell == lo_cell {
                ("◆", theme.handle(focused == Some(Handle::Low)))
            } else if cell == hi_cell {
                ("◆", theme.handle(focused == Some(Handle::High)))
            } else if cell > lo_cell && cell < hi_cell {
                ("━", theme.track_fill())
            } else {
                ("─", theme.track())
            };
            track_spans.push(Span::styled(glyph, style));
        }

        // Bounds caption: min left, max+ right.
        let min_text = bounds.min().to_string();
        let max_text = format!("{}+", bounds.max());
        let pad = (track.width as usize).saturating_sub(min_text.len() + max_text.len());
        let caption = format!("{}{}{}", min_text, " ".repeat(pad), max_text);

        let lines = vec![
            Line::from(Span::styled(label.to_string(), theme.muted())),
            Line::from(Span::styled(value_line, theme.accent_bold())),
            Line::from(track_spans),
            Line::from(Span::styled(caption, theme.muted())),
        ];
        let para = Paragraph::new(lines);
        f.render_widget(
            para,
            Rect {
                x: area.x + 1,
                y: area.y,
                width: area.width - 2,
                height: 4,
            },
        );
    }

    /// Feed one mouse event.
    ///
    /// Returns `Some(new_value)` for every accepted move sample while a drag
    /// is active; `None` for presses, releases, and anything received while
    /// idle. The host applies the returned value to its own state — the
    /// widget keeps no copy.
    pub fn on_mouse(
        &mut self,
        event: MouseEvent,
        value: RangeValue,
        bounds: RangeBounds,
    ) -> Option<RangeValue> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A press always re-resolves the interaction: a second Down
                // without a matching Up means the release was lost, so the
                // old drag must not keep running.
                self.drag = self.hit_test(event.column, event.row, value, bounds);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let track = self.track?;
                let raw = bounds.value_at(column_fraction(track, event.column));
                match self.drag {
                    DragState::Idle => None,
                    DragState::DraggingLow => Some(value.with_lo(raw, bounds)),
                    DragState::DraggingHigh => Some(value.with_hi(raw, bounds)),
                }
            }
            MouseEventKind::Up(_) => {
                self.drag = DragState::Idle;
                None
            }
            // A bare move means the button is no longer held — the release
            // never reached us. Treat it as one.
            MouseEventKind::Moved => {
                self.drag = DragState::Idle;
                None
            }
            _ => None,
        }
    }

    /// Drop any active drag (step change, teardown).
    pub fn reset(&mut self) {
        self.drag = DragState::Idle;
    }

    fn hit_test(
        &self,
        column: u16,
        row: u16,
        value: RangeValue,
        bounds: RangeBounds,
    ) -> DragState {
        let Some(track) = self.track else {
            return DragState::Idle;
        };
        if row != track.y {
            return DragState::Idle;
        }
        let lo_x = track.x + cell_of(value.lo, bounds, track.width);
        let hi_x = track.x + cell_of(value.hi, bounds, track.width);
        let hits_lo = column.abs_diff(lo_x) <= HIT_SLOP;
        let hits_hi = column.abs_diff(hi_x) <= HIT_SLOP;
        match (hits_lo, hits_hi) {
            (true, false) => DragState::DraggingLow,
            (false, true) => DragState::DraggingHigh,
            // Overlapping hit regions: the press at or left of the low
            // handle grabs it, anything further right grabs the high one.
            (true, true) => {
                if column <= lo_x {
                    DragState::DraggingLow
                } else {
                    DragState::DraggingHigh
                }
            }
            (false, false) => DragState::Idle,
        }
    }
}

/// Cell index of a value on a track of `width` cells.
fn cell_of(value: u16, bounds: RangeBounds, width: u16) -> u16 {
    let last = f64::from(width - 1);
    (bounds.fraction_of(value) * last).round() as u16
}

/// Fraction of the track a pointer column maps to, clamped to `[0, 1]`.
fn column_fraction(track: Rect, column: u16) -> f64 {
    let last = f64::from(track.width - 1);
    (f64::from(column) - f64::from(track.x)) / last
}

fn place_centered(row: &mut [char], cell: u16, text: &str) {
    let len = text.chars().count();
    let start = (cell as usize).saturating_sub(len / 2).min(row.len().saturating_sub(len));
    for (i, ch) in text.chars().enumerate() {
        if let Some(slot) = row.get_mut(start + i) {
            *slot = ch;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use proptest::prelude::*;

    const AGE: RangeBounds = RangeBounds::AGE;

    // A 53-cell track makes one cell per age unit: column = x + (value - 13).
    fn selector_with_track() -> RangeSelector {
        let mut s = RangeSelector::new();
        s.track = Some(Rect {
            x: 10,
            y: 5,
            width: 53,
            height: 1,
        });
        s
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), column, row)
    }

    fn drag(column: u16) -> MouseEvent {
        // Row is deliberately off-track: moves are tracked globally.
        mouse(MouseEventKind::Drag(MouseButton::Left), column, 99)
    }

    fn release() -> MouseEvent {
        mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)
    }

    fn col_for(value: u16) -> u16 {
        (10i32 + (value as i32 - 13)).max(0) as u16
    }

    #[test]
    fn press_on_low_handle_starts_low_drag() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        assert!(s.on_mouse(press(col_for(18), 5), v, AGE).is_none());
        assert_eq!(s.drag(), DragState::DraggingLow);
    }

    #[test]
    fn press_on_track_body_is_inert() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(30), 5), v, AGE);
        assert_eq!(s.drag(), DragState::Idle);
        // And a following move emits nothing.
        assert!(s.on_mouse(drag(col_for(40)), v, AGE).is_none());
    }

    #[test]
    fn press_off_track_row_is_inert() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(18), 6), v, AGE);
        assert_eq!(s.drag(), DragState::Idle);
    }

    #[test]
    fn low_drag_past_high_clamps_to_one_below() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(18), 5), v, AGE);
        let emitted = s.on_mouse(drag(col_for(50)), v, AGE).unwrap();
        assert_eq!(emitted, RangeValue { lo: 44, hi: 45 });
    }

    #[test]
    fn high_drag_past_low_clamps_to_one_above() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(45), 5), v, AGE);
        let emitted = s.on_mouse(drag(col_for(10)), v, AGE).unwrap();
        assert_eq!(emitted, RangeValue { lo: 18, hi: 19 });
    }

    #[test]
    fn drag_far_left_of_track_clamps_to_min() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(18), 5), v, AGE);
        let emitted = s.on_mouse(drag(0), v, AGE).unwrap();
        assert_eq!(emitted, RangeValue { lo: 13, hi: 45 });
    }

    #[test]
    fn drag_far_right_of_track_clamps_to_max() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(45), 5), v, AGE);
        let emitted = s.on_mouse(drag(200), v, AGE).unwrap();
        assert_eq!(emitted, RangeValue { lo: 18, hi: 65 });
    }

    #[test]
    fn full_range_low_drag_to_min_is_unchanged() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 13, hi: 65 };
        s.on_mouse(press(col_for(13), 5), v, AGE);
        let emitted = s.on_mouse(drag(col_for(13)), v, AGE).unwrap();
        assert_eq!(emitted, v);
    }

    #[test]
    fn release_ends_drag_and_stops_emission() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(18), 5), v, AGE);
        assert!(s.on_mouse(drag(col_for(25)), v, AGE).is_some());
        s.on_mouse(release(), v, AGE);
        assert_eq!(s.drag(), DragState::Idle);
        assert!(s.on_mouse(drag(col_for(30)), v, AGE).is_none());
    }

    #[test]
    fn release_while_idle_is_a_no_op() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        assert!(s.on_mouse(release(), v, AGE).is_none());
        assert_eq!(s.drag(), DragState::Idle);
    }

    #[test]
    fn bare_move_while_dragging_acts_as_lost_release() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(18), 5), v, AGE);
        s.on_mouse(mouse(MouseEventKind::Moved, col_for(30), 5), v, AGE);
        assert_eq!(s.drag(), DragState::Idle);
    }

    #[test]
    fn second_press_reresolves_the_interaction() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(col_for(18), 5), v, AGE);
        // Lost Up; the next press lands on the track body.
        s.on_mouse(press(col_for(30), 5), v, AGE);
        assert_eq!(s.drag(), DragState::Idle);
    }

    #[test]
    fn adjacent_handles_tie_break_deterministically() {
        let mut s = selector_with_track();
        let v = RangeValue { lo: 30, hi: 31 };
        // Both hit regions cover the low handle's cell; at or left of the
        // low handle, the low handle wins.
        s.on_mouse(press(col_for(30), 5), v, AGE);
        assert_eq!(s.drag(), DragState::DraggingLow);
        s.on_mouse(release(), v, AGE);
        // Both regions also cover the high handle's cell; right of the low
        // handle, the high handle wins.
        s.on_mouse(press(col_for(31), 5), v, AGE);
        assert_eq!(s.drag(), DragState::DraggingHigh);
    }

    #[test]
    fn no_track_recorded_means_no_interaction() {
        let mut s = RangeSelector::new();
        let v = RangeValue { lo: 18, hi: 45 };
        s.on_mouse(press(20, 5), v, AGE);
        assert_eq!(s.drag(), DragState::Idle);
        s.drag = DragState::DraggingLow;
        assert!(s.on_mouse(drag(20), v, AGE).is_none());
    }

    proptest! {
        #[test]
        fn every_emitted_value_is_valid(
            lo in 13u16..65,
            hi in 14u16..=65,
            columns in proptest::collection::vec(0u16..120, 1..20),
            grab_high in proptest::bool::ANY,
        ) {
            prop_assume!(lo < hi);
            let mut s = selector_with_track();
            let mut value = RangeValue { lo, hi };
            let grab = if grab_high { col_for(hi) } else { col_for(lo) };
            s.on_mouse(press(grab, 5), value, AGE);
            for col in columns {
                if let Some(next) = s.on_mouse(drag(col), value, AGE) {
                    prop_assert!(next.is_valid_in(AGE));
                    // The stationary handle never moves.
                    if grab_high {
                        prop_assert_eq!(next.lo, value.lo);
                    } else {
                        prop_assert_eq!(next.hi, value.hi);
                    }
                    value = next;
                }
            }
            s.on_mouse(release(), value, AGE);
            prop_assert_eq!(s.drag(), DragState::Idle);
        }
    }
}
