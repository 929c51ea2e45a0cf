//! Overlay widgets — advisor chat, error history, caption edit.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, ChatRole};
use crate::ui::centered_rect;

/// Advisor chat overlay: transcript on top, input line at the bottom.
pub fn render_advisor(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.accent())
        .title(format!(" {} [Esc]close ", app.strings().chat_title))
        .title_style(app.theme.accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();

    if app.advisor.messages.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            app.strings().chat_placeholder,
            app.theme.muted(),
        )));
    }

    for msg in &app.advisor.messages {
        let (prefix, style) = match msg.role {
            ChatRole::User => ("you> ", app.theme.accent_bold()),
            ChatRole::Ai => ("ai>  ", app.theme.text()),
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, app.theme.muted()),
            Span::styled(msg.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    if app.advisor.waiting {
        lines.push(Line::from(Span::styled("...", app.theme.muted())));
    }

    // Keep the tail of the transcript visible; the bottom two rows belong
    // to the input line.
    let transcript_height = inner.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(transcript_height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();

    let transcript_area = Rect {
        height: inner.height.saturating_sub(2),
        ..inner
    };
    f.render_widget(
        Paragraph::new(visible).wrap(Wrap { trim: false }),
        transcript_area,
    );

    let input_area = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1,
        ..inner
    };
    let input = Line::from(vec![
        Span::styled("> ", app.theme.accent()),
        Span::styled(app.advisor.input.as_str(), app.theme.text()),
        Span::styled("_", app.theme.accent()),
    ]);
    f.render_widget(Paragraph::new(input), input_area);
}

/// Error history overlay.
pub fn render_error_history(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.negative())
        .title(format!(
            " Errors ({}) [Esc]close [j/k]scroll ",
            app.error_history.len()
        ))
        .title_style(app.theme.negative());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    if app.error_history.is_empty() {
        let text = Paragraph::new(Span::styled("No errors recorded.", app.theme.muted()));
        f.render_widget(text, inner);
        return;
    }

    let visible_height = inner.height as usize;
    let start = app.error_scroll;
    let end = (start + visible_height).min(app.error_history.len());

    let mut lines: Vec<Line> = Vec::new();
    for i in start..end {
        let err = &app.error_history[i];
        let is_active = i == app.error_scroll;
        let style = if is_active {
            app.theme.negative().add_modifier(Modifier::BOLD)
        } else {
            app.theme.muted()
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", err.timestamp.format("%H:%M:%S")),
                app.theme.muted(),
            ),
            Span::styled(format!("[{}] ", err.category.label()), app.theme.warning()),
            Span::styled(err.message.as_str(), style),
        ]));

        if !err.context.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(err.context.as_str(), app.theme.muted()),
            ]));
        }
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}

/// Caption edit overlay: the full caption text, editable.
pub fn render_edit_caption(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let title = app
        .plan
        .as_ref()
        .and_then(|p| p.captions.get(idx))
        .map(|c| c.title.as_str())
        .unwrap_or("?");

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.accent())
        .title(format!(" {title} [Enter]save [Esc]cancel "))
        .title_style(app.theme.accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let lines = vec![
        Line::from(vec![
            Span::styled(app.edit_buffer.as_str(), app.theme.text()),
            Span::styled("_", app.theme.accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled(app.strings().edit_notice, app.theme.muted())),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
