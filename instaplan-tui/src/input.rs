//! Input dispatch — overlays → global keys → step-specific handlers.
//!
//! Text-capturing fields swallow plain characters, so global shortcuts are
//! only live on steps (or fields) that don't take free text. Ctrl+C always
//! quits. Mouse events route to the range selector on the Audience step.

use std::sync::atomic::Ordering;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

use instaplan_core::range::RangeBounds;

use crate::app::{AppState, AudienceField, Overlay, ResultsTab, Step};
use crate::ui::widgets::{DragState, Handle};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always quits, even mid-edit.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    // 1. Overlays consume input first.
    match app.overlay.clone() {
        Overlay::Advisor => {
            handle_advisor_overlay(app, key);
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::EditCaption(idx) => {
            handle_edit_overlay(app, key, idx);
            return;
        }
        Overlay::None => {}
    }

    // 2. While a generation is in flight only Esc (cancel) is live.
    if app.generating {
        if key.code == KeyCode::Esc {
            app.cancel.store(true, Ordering::Relaxed);
            app.generating = false;
            app.set_warning("Cancelling generation...");
        }
        return;
    }

    // 3. Global keys — skipped where typing owns the characters.
    if !captures_text(app) {
        match key.code {
            KeyCode::Char('q') => {
                app.running = false;
                return;
            }
            KeyCode::Char('g') => {
                app.lang = app.lang.toggle();
                return;
            }
            KeyCode::Char('t') => {
                app.theme.accent = app.theme.accent.cycle();
                return;
            }
            KeyCode::Char('d') => {
                app.theme.mode = app.theme.mode.toggle();
                return;
            }
            KeyCode::Char('a') => {
                app.overlay = Overlay::Advisor;
                return;
            }
            KeyCode::Char('e') => {
                app.overlay = Overlay::ErrorHistory;
                app.error_scroll = 0;
                return;
            }
            _ => {}
        }
    }

    // 4. Step-specific keys.
    match app.step {
        Step::Welcome => handle_welcome_key(app, key),
        s if s.is_choice() => handle_choice_key(app, key),
        Step::Topic => handle_topic_key(app, key),
        Step::Audience => handle_audience_key(app, key),
        Step::FinalNotes => handle_final_notes_key(app, key),
        Step::Results => handle_results_key(app, key),
        _ => {}
    }
}

/// True when plain characters are owned by a text field.
fn captures_text(app: &AppState) -> bool {
    match app.step {
        Step::Topic | Step::FinalNotes => true,
        Step::Audience => app.audience_focus != AudienceField::Age,
        _ => false,
    }
}

fn handle_welcome_key(app: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        app.enter_step(Step::PageType);
    }
}

fn handle_choice_key(app: &mut AppState, key: KeyEvent) {
    let len = app.choice_len(app.step);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if len > 0 && app.choice_cursor + 1 < len {
                app.choice_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.choice_cursor = app.choice_cursor.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.apply_choice();
            let next = app.step.next();
            app.enter_step(next);
        }
        KeyCode::Esc => {
            let prev = app.step.prev();
            app.enter_step(prev);
        }
        _ => {}
    }
}

fn handle_topic_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if app.brief.ready_to_generate() {
                app.enter_step(Step::Audience);
            } else {
                let msg = app.strings().topic_placeholder.to_string();
                app.set_warning(msg);
            }
        }
        KeyCode::Esc => app.enter_step(Step::PageType),
        KeyCode::Backspace => {
            app.brief.topic.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.brief.topic.push(c);
        }
        _ => {}
    }
}

fn handle_audience_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => {
            app.audience_focus = app.audience_focus.cycle();
            return;
        }
        KeyCode::BackTab => {
            app.audience_focus = app.audience_focus.cycle().cycle();
            return;
        }
        KeyCode::Enter => {
            app.enter_step(Step::Effect);
            return;
        }
        KeyCode::Esc => {
            app.enter_step(Step::Topic);
            return;
        }
        _ => {}
    }

    match app.audience_focus {
        AudienceField::Age => handle_age_key(app, key),
        AudienceField::Gender => edit_text(&mut app.brief.audience_gender, key),
        AudienceField::Concern => edit_text(&mut app.brief.audience_concern, key),
    }
}

/// Keyboard adjustment of the age band: up/down (or j/k) picks the handle,
/// left/right (or h/l) nudges it through the same clamps a drag uses.
fn handle_age_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('k') | KeyCode::Up => {
            app.active_handle = app.active_handle.toggle();
        }
        KeyCode::Char('h') | KeyCode::Left => nudge_active(app, -1),
        KeyCode::Char('l') | KeyCode::Right => nudge_active(app, 1),
        _ => {}
    }
}

fn nudge_active(app: &mut AppState, delta: i32) {
    app.brief.age_range = match app.active_handle {
        Handle::Low => app.brief.age_range.nudge_lo(delta, RangeBounds::AGE),
        Handle::High => app.brief.age_range.nudge_hi(delta, RangeBounds::AGE),
    };
}

fn handle_final_notes_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.start_generation(true),
        KeyCode::Esc => app.enter_step(Step::Frequency),
        KeyCode::Backspace => {
            app.brief.final_details.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.brief.final_details.push(c);
        }
        _ => {}
    }
}

fn handle_results_key(app: &mut AppState, key: KeyEvent) {
    let caption_count = app.plan.as_ref().map_or(0, |p| p.captions.len());

    match key.code {
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            app.results.tab = app.results.tab.next();
            app.results.scroll = 0;
            app.results.caption_cursor = 0;
        }
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
            app.results.tab = app.results.tab.prev();
            app.results.scroll = 0;
            app.results.caption_cursor = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.results.tab == ResultsTab::Captions {
                if caption_count > 0 && app.results.caption_cursor + 1 < caption_count {
                    app.results.caption_cursor += 1;
                }
            } else {
                app.results.scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            if app.results.tab == ResultsTab::Captions {
                app.results.caption_cursor = app.results.caption_cursor.saturating_sub(1);
            } else {
                app.results.scroll = app.results.scroll.saturating_sub(1);
            }
        }
        KeyCode::Enter => {
            if app.results.tab == ResultsTab::Captions && caption_count > 0 {
                let idx = app.results.caption_cursor;
                if let Some(plan) = app.plan.as_ref() {
                    app.edit_buffer = plan.captions[idx].text.clone();
                    app.overlay = Overlay::EditCaption(idx);
                }
            }
        }
        KeyCode::Char('y') => export_current_section(app),
        KeyCode::Char('s') => export_full_plan(app),
        KeyCode::Char('r') => app.start_generation(false),
        KeyCode::Esc => app.enter_step(Step::Welcome),
        _ => {}
    }
}

fn export_current_section(app: &mut AppState) {
    let Some(plan) = app.plan.as_ref() else {
        return;
    };
    let section = app.results.tab.section();
    match instaplan_gen::export_section(plan, section, app.lang, &app.export_dir) {
        Ok(path) => {
            let msg = format!("{} {}", app.strings().exported, path.display());
            app.set_status(msg);
        }
        Err(e) => {
            app.push_error(
                crate::app::ErrorCategory::Export,
                e.to_string(),
                "section export".into(),
            );
        }
    }
}

fn export_full_plan(app: &mut AppState) {
    let Some(plan) = app.plan.as_ref() else {
        return;
    };
    match instaplan_gen::export_plan(plan, app.lang, &app.export_dir) {
        Ok(dir) => {
            let msg = format!("{} {}", app.strings().exported, dir.display());
            app.set_status(msg);
        }
        Err(e) => {
            app.push_error(
                crate::app::ErrorCategory::Export,
                e.to_string(),
                "plan export".into(),
            );
        }
    }
}

fn handle_advisor_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
        }
        KeyCode::Enter => {
            app.send_advisor_question();
        }
        KeyCode::Backspace => {
            app.advisor.input.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.advisor.input.push(c);
        }
        _ => {}
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_edit_overlay(app: &mut AppState, key: KeyEvent, idx: usize) {
    match key.code {
        KeyCode::Esc => {
            app.edit_buffer.clear();
            app.overlay = Overlay::None;
        }
        KeyCode::Enter => {
            if let Some(plan) = app.plan.as_mut() {
                if let Some(caption) = plan.captions.get_mut(idx) {
                    caption.text = app.edit_buffer.clone();
                }
            }
            app.edit_buffer.clear();
            app.overlay = Overlay::None;
        }
        KeyCode::Backspace => {
            app.edit_buffer.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.push(c);
        }
        _ => {}
    }
}

fn edit_text(buffer: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => {
            buffer.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            buffer.push(c);
        }
        _ => {}
    }
}

/// Route a mouse event to the range selector.
///
/// Only the Audience step hosts the selector; everywhere else mouse input
/// is ignored. The selector returns a new value for every accepted drag
/// sample and the brief — the single owner of the value — is updated here.
pub fn handle_mouse(app: &mut AppState, event: MouseEvent) {
    if app.overlay != Overlay::None || app.step != Step::Audience || app.generating {
        return;
    }
    if let Some(next) = app.selector.on_mouse(event, app.brief.age_range, RangeBounds::AGE) {
        app.brief.age_range = next;
    }
    // A drag pulls keyboard focus onto the age field and its active handle.
    match app.selector.drag() {
        DragState::DraggingLow => {
            app.audience_focus = AudienceField::Age;
            app.active_handle = Handle::Low;
        }
        DragState::DraggingHigh => {
            app.audience_focus = AudienceField::Age;
            app.active_handle = Handle::High;
        }
        DragState::Idle => {}
    }
}
