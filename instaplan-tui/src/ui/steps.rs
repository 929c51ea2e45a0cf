//! Wizard step screens — welcome, choice lists, text entry, audience.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use instaplan_core::brief::{ContentTone, Frequency, PageType};
use instaplan_core::i18n;
use instaplan_core::range::RangeBounds;

use crate::app::{AppState, AudienceField, Step};

/// Two-line progress header shown on form steps.
pub fn render_progress(f: &mut Frame, area: Rect, app: &AppState) {
    let t = app.strings();
    let step_no = app.step.index();
    let total = crate::app::FORM_STEPS;

    let bar_width = (area.width as usize).saturating_sub(12).min(40).max(4);
    let filled = bar_width * step_no / total;
    let bar = format!(
        "[{}{}]",
        "=".repeat(filled),
        " ".repeat(bar_width - filled)
    );

    let lines = vec![
        Line::from(vec![
            Span::styled(bar, app.theme.accent()),
            Span::styled(
                format!(" {} {step_no} / {total}", t.step),
                app.theme.muted(),
            ),
        ]),
        Line::from(""),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

pub fn render_welcome(f: &mut Frame, area: Rect, app: &AppState) {
    let t = app.strings();
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(t.app_name, app.theme.accent_bold())).centered(),
        Line::from(""),
        Line::from(Span::styled(t.tagline, app.theme.text())).centered(),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] ", app.theme.accent_bold()),
            Span::styled(t.start_btn, app.theme.text()),
        ])
        .centered(),
        Line::from(""),
        Line::from(Span::styled(
            "[g]fa/en  [t]accent  [d]light/dark  [a]advisor  [q]quit",
            app.theme.muted(),
        ))
        .centered(),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub fn render_form_step(f: &mut Frame, area: Rect, app: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.step.title(app.lang),
        app.theme.accent_bold(),
    )));
    f.render_widget(title, rows[0]);

    let body = rows[1];
    match app.step {
        s if s.is_choice() => render_choice(f, body, app),
        Step::Topic => render_text_step(
            f,
            body,
            &app.brief.topic,
            app.strings().topic_placeholder,
            app,
        ),
        Step::Audience => render_audience(f, body, app),
        Step::FinalNotes => render_text_step(
            f,
            body,
            &app.brief.final_details,
            app.strings().final_details_placeholder,
            app,
        ),
        _ => {}
    }
}

fn choice_options(app: &AppState) -> Vec<&'static str> {
    match app.step {
        Step::PageType => PageType::ALL
            .iter()
            .map(|p| i18n::page_type_label(app.lang, *p))
            .collect(),
        Step::Effect => i18n::effect_options(app.lang).to_vec(),
        Step::Persona => i18n::persona_options(app.lang).to_vec(),
        Step::Tone => ContentTone::ALL
            .iter()
            .map(|t| i18n::tone_label(app.lang, *t))
            .collect(),
        Step::Frequency => Frequency::ALL
            .iter()
            .map(|fr| i18n::frequency_label(app.lang, *fr))
            .collect(),
        _ => Vec::new(),
    }
}

/// Whether option `i` is the brief's current selection on this step.
fn is_selected(app: &AppState, i: usize) -> bool {
    match app.step {
        Step::PageType => PageType::ALL.get(i) == Some(&app.brief.page_type),
        Step::Effect => {
            i18n::effect_options(app.lang).get(i).copied() == Some(app.brief.effect.as_str())
        }
        Step::Persona => {
            i18n::persona_options(app.lang).get(i).copied() == Some(app.brief.persona.as_str())
        }
        Step::Tone => ContentTone::ALL.get(i) == Some(&app.brief.tone),
        Step::Frequency => Frequency::ALL.get(i) == Some(&app.brief.frequency),
        _ => false,
    }
}

fn render_choice(f: &mut Frame, area: Rect, app: &AppState) {
    let options = choice_options(app);
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() + 2);

    for (i, option) in options.iter().enumerate() {
        let cursor = if i == app.choice_cursor { "▸ " } else { "  " };
        let mark = if is_selected(app, i) { " ✓" } else { "" };
        let style = if i == app.choice_cursor {
            app.theme.highlight()
        } else if is_selected(app, i) {
            app.theme.accent()
        } else {
            app.theme.text()
        };
        lines.push(Line::from(vec![
            Span::styled(cursor, app.theme.accent()),
            Span::styled(format!("{option}{mark}"), style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_text_step(
    f: &mut Frame,
    area: Rect,
    value: &str,
    placeholder: &'static str,
    app: &AppState,
) {
    let mut lines: Vec<Line> = Vec::new();
    if value.is_empty() {
        lines.push(Line::from(Span::styled(placeholder, app.theme.muted())));
        lines.push(Line::from(Span::styled("_", app.theme.accent())));
    } else {
        lines.push(Line::from(vec![
            Span::styled(value.to_string(), app.theme.text()),
            Span::styled("_", app.theme.accent()),
        ]));
    }
    lines.push(Line::from(""));
    let hint = if app.step == Step::FinalNotes {
        format!("[Enter] {}   [Esc] {}", app.strings().generate, app.strings().prev)
    } else {
        format!("[Enter] {}   [Esc] {}", app.strings().next, app.strings().prev)
    };
    lines.push(Line::from(Span::styled(hint, app.theme.muted())));

    if app.generating {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            app.strings().loading,
            app.theme.accent_bold(),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_audience(f: &mut Frame, area: Rect, app: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    // The selector re-records its track geometry on every pass, so a
    // terminal resize mid-drag maps the next sample correctly.
    let theme = app.theme;
    let t = app.strings();
    let focused = (app.audience_focus == AudienceField::Age).then_some(app.active_handle);
    let value = app.brief.age_range;
    app.selector.render(
        f,
        rows[0],
        value,
        RangeBounds::AGE,
        t.age_range_label,
        focused,
        &theme,
    );

    render_inline_field(
        f,
        rows[1],
        t.gender_placeholder,
        &app.brief.audience_gender,
        app.audience_focus == AudienceField::Gender,
        app,
    );
    render_inline_field(
        f,
        rows[2],
        t.concern_placeholder,
        &app.brief.audience_concern,
        app.audience_focus == AudienceField::Concern,
        app,
    );

    let hint = Paragraph::new(Line::from(Span::styled(
        "[Tab]field  [↑/↓]handle  [←/→]adjust  [Enter]next  [Esc]back",
        app.theme.muted(),
    )));
    f.render_widget(hint, rows[3]);
}

fn render_inline_field(
    f: &mut Frame,
    area: Rect,
    placeholder: &'static str,
    value: &str,
    focused: bool,
    app: &AppState,
) {
    let marker = if focused { "▸ " } else { "  " };
    let mut spans = vec![Span::styled(marker, app.theme.accent())];
    if value.is_empty() {
        spans.push(Span::styled(placeholder, app.theme.muted()));
    } else {
        spans.push(Span::styled(value.to_string(), app.theme.text()));
    }
    if focused {
        spans.push(Span::styled("_", app.theme.accent()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
