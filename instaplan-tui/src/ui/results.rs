//! Results view — generated plan behind four tabs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, ResultsTab};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_tab_bar(f, rows[0], app);

    let Some(plan) = app.plan.as_ref() else {
        let para = Paragraph::new(Span::styled(app.strings().loading, app.theme.muted()));
        f.render_widget(para, rows[1]);
        return;
    };

    let lines = match app.results.tab {
        ResultsTab::Calendar => calendar_lines(app, plan),
        ResultsTab::Captions => caption_lines(app, plan),
        ResultsTab::Hashtags => hashtag_lines(app, plan),
        ResultsTab::Ideas => idea_lines(app, plan),
    };

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.results.scroll as u16, 0));
    f.render_widget(para, rows[1]);

    let hint = if app.results.tab == ResultsTab::Captions {
        "[Tab]tabs  [j/k]select  [Enter]edit  [y]export  [s]export all  [r]regenerate  [Esc]restart"
    } else {
        "[Tab]tabs  [j/k]scroll  [y]export  [s]export all  [r]regenerate  [Esc]restart"
    };
    f.render_widget(
        Paragraph::new(Span::styled(hint, app.theme.muted())),
        rows[2],
    );
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();
    for tab in ResultsTab::ALL {
        let label = format!(" {} ", tab.label(app.lang));
        let style = if tab == app.results.tab {
            app.theme.highlight()
        } else {
            app.theme.muted()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    if app.plan_from_cache {
        spans.push(Span::styled("(cached)", app.theme.warning()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn calendar_lines<'a>(
    app: &AppState,
    plan: &'a instaplan_core::plan::ContentPlan,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for (i, entry) in plan.calendar.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), app.theme.muted()),
            Span::styled(format!("[{}] ", entry.day), app.theme.muted()),
            Span::styled(format!("[{}] ", entry.post_type), app.theme.accent()),
            Span::styled(entry.title.as_str(), app.theme.text()),
        ]));
    }
    lines
}

/// One row per caption: title plus a one-line preview. Enter opens the full
/// text in the edit overlay.
fn caption_lines<'a>(
    app: &AppState,
    plan: &'a instaplan_core::plan::ContentPlan,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        app.strings().edit_notice,
        app.theme.muted(),
    )));
    lines.push(Line::from(""));
    for (i, caption) in plan.captions.iter().enumerate() {
        let active = i == app.results.caption_cursor;
        let cursor = if active { "▸ " } else { "  " };
        let preview: String = caption.text.chars().take(60).collect();
        let style = if active {
            app.theme.highlight()
        } else {
            app.theme.text()
        };
        lines.push(Line::from(vec![
            Span::styled(cursor, app.theme.accent()),
            Span::styled(format!("{}. {} — ", i + 1, caption.title), style),
            Span::styled(preview, app.theme.muted()),
        ]));
    }
    lines
}

fn hashtag_lines<'a>(
    app: &AppState,
    plan: &'a instaplan_core::plan::ContentPlan,
) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(plan.hashtag_line(), app.theme.accent())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} #", plan.hashtags.len()),
            app.theme.muted(),
        )),
    ]
}

fn idea_lines<'a>(app: &AppState, plan: &'a instaplan_core::plan::ContentPlan) -> Vec<Line<'a>> {
    let t = app.strings();
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        t.story_ideas_heading,
        app.theme.accent_bold(),
    )));
    for (i, idea) in plan.story_ideas.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  #{:02} ", i + 1), app.theme.muted()),
            Span::styled(idea.as_str(), app.theme.text()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        t.reel_ideas_heading,
        app.theme.accent_bold(),
    )));
    for (i, idea) in plan.reel_ideas.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("  #{:02} ", i + 1), app.theme.muted()),
            Span::styled(idea.as_str(), app.theme.text()),
        ]));
    }
    lines
}
