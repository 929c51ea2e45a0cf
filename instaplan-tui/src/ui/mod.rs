//! Top-level UI layout — wizard frame, progress header, status bar.

pub mod overlays;
pub mod results;
pub mod status_bar;
pub mod steps;
pub mod widgets;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Step};

/// Draw the entire UI. Takes `&mut` because the range selector records its
/// laid-out track geometry during rendering.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border())
        .title(format!(" {} ", app.strings().app_name))
        .title_style(app.theme.panel_title());
    let inner = block.inner(main_area);
    f.render_widget(block, main_area);

    // Form steps get a two-line progress header.
    let body = if app.step.is_form() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);
        steps::render_progress(f, rows[0], app);
        rows[1]
    } else {
        inner
    };

    match app.step {
        Step::Welcome => steps::render_welcome(f, body, app),
        Step::Results => results::render(f, body, app),
        _ => steps::render_form_step(f, body, app),
    }

    status_bar::render(f, status_area, app);

    // Overlays on top.
    match app.overlay {
        Overlay::Advisor => overlays::render_advisor(f, main_area, app),
        Overlay::ErrorHistory => overlays::render_error_history(f, main_area, app),
        Overlay::EditCaption(idx) => overlays::render_edit_caption(f, main_area, app, idx),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
