//! Bottom status bar — context hints plus the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Overlay, StatusLevel, Step};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let hints = match (&app.overlay, app.step) {
        (Overlay::Advisor, _) => " [Enter]send [Esc]close",
        (Overlay::ErrorHistory, _) => " [j/k]scroll [Esc]close",
        (Overlay::EditCaption(_), _) => " [Enter]save [Esc]cancel",
        (_, Step::Welcome) => " [Enter]start [a]advisor [e]errors [q]quit",
        (_, Step::Results) => " [Tab]tabs [y]export [r]regenerate [a]advisor",
        (_, Step::Topic | Step::FinalNotes) => " [Enter]next [Esc]back  typing…",
        (_, Step::Audience) => " [Tab]field [←/→]adjust [Enter]next [Esc]back",
        _ => " [j/k]move [Enter]select [Esc]back [g]fa/en [a]advisor",
    };
    spans.push(Span::styled(hints, app.theme.muted()));

    // Separator
    spans.push(Span::raw(" | "));

    // Status message
    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => app.theme.accent(),
            StatusLevel::Warning => app.theme.warning(),
            StatusLevel::Error => app.theme.negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let line = Line::from(spans);
    let para = Paragraph::new(line);
    f.render_widget(para, area);
}
