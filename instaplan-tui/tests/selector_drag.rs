//! Scripted drag interactions against the rendered range selector.
//!
//! Renders into a test backend so hit testing runs against real layout, then
//! feeds press/move/release sequences the way the event loop does: re-render
//! every frame, apply each emitted value back to the host-owned brief value.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use instaplan_core::range::{RangeBounds, RangeValue};
use instaplan_tui::theme::Theme;
use instaplan_tui::ui::widgets::{DragState, RangeSelector};

const AGE: RangeBounds = RangeBounds::AGE;

/// 55 columns gives the selector a 53-cell track (one inset cell per side),
/// which is exactly one cell per age unit: column = 1 + (value - 13), row 2.
const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 55,
    height: 4,
};
const TRACK_ROW: u16 = 2;

fn col_for(value: u16) -> u16 {
    1 + (value - 13)
}

struct Host {
    terminal: Terminal<TestBackend>,
    selector: RangeSelector,
    value: RangeValue,
    updates: usize,
}

impl Host {
    fn new(lo: u16, hi: u16) -> Self {
        let mut host = Host {
            terminal: Terminal::new(TestBackend::new(AREA.width, AREA.height + 2)).unwrap(),
            selector: RangeSelector::new(),
            value: RangeValue { lo, hi },
            updates: 0,
        };
        host.render(AREA);
        host
    }

    fn render(&mut self, area: Rect) {
        let theme = Theme::default();
        let selector = &mut self.selector;
        let value = self.value;
        self.terminal
            .draw(|f| selector.render(f, area, value, AGE, "Age Range", None, &theme))
            .unwrap();
    }

    fn feed(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        let event = MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        if let Some(next) = self.selector.on_mouse(event, self.value, AGE) {
            self.value = next;
            self.updates += 1;
        }
        self.render(AREA);
    }

    fn press(&mut self, column: u16) {
        self.feed(MouseEventKind::Down(MouseButton::Left), column, TRACK_ROW);
    }

    fn drag_to(&mut self, column: u16) {
        // Row far off the track: moves are tracked wherever the pointer is.
        self.feed(MouseEventKind::Drag(MouseButton::Left), column, 20);
    }

    fn release(&mut self) {
        self.feed(MouseEventKind::Up(MouseButton::Left), 0, 0);
    }
}

#[test]
fn low_handle_dragged_past_high_clamps_to_hi_minus_one() {
    let mut host = Host::new(18, 45);
    host.press(col_for(18));
    host.drag_to(col_for(50));
    assert_eq!(host.value, RangeValue { lo: 44, hi: 45 });
    host.release();
}

#[test]
fn high_handle_dragged_below_low_clamps_to_lo_plus_one() {
    let mut host = Host::new(18, 45);
    host.press(col_for(45));
    host.drag_to(0); // far left of the track
    assert_eq!(host.value, RangeValue { lo: 18, hi: 19 });
}

#[test]
fn full_range_low_drag_to_min_leaves_value_unchanged() {
    let mut host = Host::new(13, 65);
    host.press(col_for(13));
    host.drag_to(col_for(13));
    assert_eq!(host.value, RangeValue { lo: 13, hi: 65 });
}

#[test]
fn pointer_left_of_track_clamps_low_to_min() {
    let mut host = Host::new(18, 45);
    host.press(col_for(18));
    host.drag_to(0);
    assert_eq!(host.value.lo, 13);
    assert_eq!(host.value.hi, 45);
}

#[test]
fn moves_after_release_emit_nothing() {
    let mut host = Host::new(18, 45);
    host.press(col_for(18));
    host.drag_to(col_for(25));
    let after_drag = host.updates;
    host.release();
    host.drag_to(col_for(40));
    host.drag_to(col_for(50));
    assert_eq!(host.updates, after_drag);
    assert_eq!(host.value, RangeValue { lo: 25, hi: 45 });
}

#[test]
fn each_move_sample_emits_exactly_one_update() {
    let mut host = Host::new(18, 45);
    host.press(col_for(18));
    for col in [col_for(20), col_for(22), col_for(30), col_for(30)] {
        host.drag_to(col);
    }
    // Four samples, four updates — including the repeated column.
    assert_eq!(host.updates, 4);
    assert_eq!(host.value.lo, 30);
}

#[test]
fn press_on_filled_segment_does_not_start_a_drag() {
    let mut host = Host::new(18, 45);
    host.press(col_for(30));
    assert_eq!(host.selector.drag(), DragState::Idle);
    host.drag_to(col_for(60));
    assert_eq!(host.value, RangeValue { lo: 18, hi: 45 });
}

#[test]
fn invariants_hold_through_a_jittery_drag() {
    let mut host = Host::new(18, 45);
    host.press(col_for(45));
    for col in [60, 5, 54, 0, 30, 54, 2, 17] {
        host.drag_to(col);
        assert!(host.value.is_valid_in(AGE));
        assert_eq!(host.value.lo, 18, "stationary handle must not move");
    }
    host.release();
    assert_eq!(host.selector.drag(), DragState::Idle);
}

#[test]
fn resize_mid_drag_remaps_the_next_sample() {
    let mut host = Host::new(18, 45);
    host.press(col_for(18));
    host.drag_to(col_for(20));
    assert_eq!(host.value.lo, 20);

    // Terminal shrinks mid-drag; the selector re-records its track on the
    // next render, and the drag itself stays active.
    let narrow = Rect {
        width: 30,
        ..AREA
    };
    host.render(narrow);
    assert_eq!(host.selector.drag(), DragState::DraggingLow);

    // Far-right sample still clamps to hi - 1 under the new geometry.
    host.drag_to(100);
    assert_eq!(host.value, RangeValue { lo: 44, hi: 45 });
}
