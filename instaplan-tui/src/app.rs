//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use instaplan_core::brief::{ContentBrief, ContentTone, Frequency, PageType};
use instaplan_core::i18n::{self, Language, Strings};
use instaplan_core::plan::ContentPlan;
use instaplan_gen::PlanSection;

use crate::theme::Theme;
use crate::ui::widgets::{Handle, RangeSelector};
use crate::worker::{WorkerCommand, WorkerResponse};

/// Wizard steps in order. `Results` is only reached through a completed
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Welcome,
    PageType,
    Topic,
    Audience,
    Effect,
    Persona,
    Tone,
    Frequency,
    FinalNotes,
    Results,
}

/// Number of brief-collecting steps (between Welcome and Results).
pub const FORM_STEPS: usize = 8;

impl Step {
    pub fn index(self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::PageType => 1,
            Step::Topic => 2,
            Step::Audience => 3,
            Step::Effect => 4,
            Step::Persona => 5,
            Step::Tone => 6,
            Step::Frequency => 7,
            Step::FinalNotes => 8,
            Step::Results => 9,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Step::Welcome),
            1 => Some(Step::PageType),
            2 => Some(Step::Topic),
            3 => Some(Step::Audience),
            4 => Some(Step::Effect),
            5 => Some(Step::Persona),
            6 => Some(Step::Tone),
            7 => Some(Step::Frequency),
            8 => Some(Step::FinalNotes),
            9 => Some(Step::Results),
            _ => None,
        }
    }

    /// Next step in wizard order; Results is terminal.
    pub fn next(self) -> Step {
        Step::from_index((self.index() + 1).min(9)).unwrap()
    }

    /// Previous step; Welcome is the floor. Results backs out to FinalNotes.
    pub fn prev(self) -> Step {
        Step::from_index(self.index().saturating_sub(1)).unwrap()
    }

    pub fn is_form(self) -> bool {
        (1..=FORM_STEPS).contains(&self.index())
    }

    /// Question heading for a form step.
    pub fn title(self, lang: Language) -> &'static str {
        let t = i18n::strings(lang);
        match self {
            Step::PageType => t.page_type_label,
            Step::Topic => t.topic_label,
            Step::Audience => t.audience_label,
            Step::Effect => t.effect_label,
            Step::Persona => t.persona_label,
            Step::Tone => t.tone_label,
            Step::Frequency => t.frequency_label,
            Step::FinalNotes => t.final_details_label,
            Step::Welcome | Step::Results => "",
        }
    }

    /// Steps whose options render as a cursor-driven list.
    pub fn is_choice(self) -> bool {
        matches!(
            self,
            Step::PageType | Step::Effect | Step::Persona | Step::Tone | Step::Frequency
        )
    }
}

/// Which field on the Audience step has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudienceField {
    Age,
    Gender,
    Concern,
}

impl AudienceField {
    pub fn cycle(self) -> AudienceField {
        match self {
            AudienceField::Age => AudienceField::Gender,
            AudienceField::Gender => AudienceField::Concern,
            AudienceField::Concern => AudienceField::Age,
        }
    }
}

/// Results tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsTab {
    Calendar,
    Captions,
    Hashtags,
    Ideas,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 4] = [
        ResultsTab::Calendar,
        ResultsTab::Captions,
        ResultsTab::Hashtags,
        ResultsTab::Ideas,
    ];

    pub fn index(self) -> usize {
        match self {
            ResultsTab::Calendar => 0,
            ResultsTab::Captions => 1,
            ResultsTab::Hashtags => 2,
            ResultsTab::Ideas => 3,
        }
    }

    pub fn next(self) -> ResultsTab {
        Self::ALL[(self.index() + 1) % 4]
    }

    pub fn prev(self) -> ResultsTab {
        Self::ALL[(self.index() + 3) % 4]
    }

    pub fn label(self, lang: Language) -> &'static str {
        let t = i18n::strings(lang);
        match self {
            ResultsTab::Calendar => t.calendar_tab,
            ResultsTab::Captions => t.captions_tab,
            ResultsTab::Hashtags => t.hashtags_tab,
            ResultsTab::Ideas => t.ideas_tab,
        }
    }

    pub fn section(self) -> PlanSection {
        match self {
            ResultsTab::Calendar => PlanSection::Calendar,
            ResultsTab::Captions => PlanSection::Captions,
            ResultsTab::Hashtags => PlanSection::Hashtags,
            ResultsTab::Ideas => PlanSection::Ideas,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Export,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NET",
            ErrorCategory::Api => "API",
            ErrorCategory::Export => "EXP",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Advisor,
    ErrorHistory,
    /// Caption edit; carries the caption index.
    EditCaption(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Advisor chat state.
pub struct AdvisorState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub waiting: bool,
}

impl AdvisorState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            waiting: false,
        }
    }
}

impl Default for AdvisorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Results view state.
pub struct ResultsState {
    pub tab: ResultsTab,
    pub scroll: usize,
    pub caption_cursor: usize,
}

impl ResultsState {
    pub fn new() -> Self {
        Self {
            tab: ResultsTab::Calendar,
            scroll: 0,
            caption_cursor: 0,
        }
    }
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub step: Step,
    pub running: bool,

    // Presentation
    pub lang: Language,
    pub theme: Theme,

    // The brief under construction and its generated plan
    pub brief: ContentBrief,
    pub plan: Option<ContentPlan>,
    pub generating: bool,
    pub plan_from_cache: bool,

    // Step-local state
    pub choice_cursor: usize,
    pub audience_focus: AudienceField,
    pub active_handle: Handle,
    pub selector: RangeSelector,
    pub results: ResultsState,
    pub advisor: AdvisorState,
    pub edit_buffer: String,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,
    pub cancel: Arc<AtomicBool>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,

    // Paths
    pub export_dir: PathBuf,
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        cancel: Arc<AtomicBool>,
        export_dir: PathBuf,
        state_path: PathBuf,
    ) -> Self {
        Self {
            step: Step::Welcome,
            running: true,
            lang: Language::default(),
            theme: Theme::default(),
            brief: ContentBrief::default(),
            plan: None,
            generating: false,
            plan_from_cache: false,
            choice_cursor: 0,
            audience_focus: AudienceField::Age,
            active_handle: Handle::Low,
            selector: RangeSelector::new(),
            results: ResultsState::new(),
            advisor: AdvisorState::new(),
            edit_buffer: String::new(),
            worker_tx,
            worker_rx,
            cancel,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
            export_dir,
            state_path,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        i18n::strings(self.lang)
    }

    /// Move to a step, dropping any active drag and syncing the choice
    /// cursor to the brief's current selection.
    pub fn enter_step(&mut self, step: Step) {
        self.selector.reset();
        self.step = step;
        self.choice_cursor = self.current_choice_index(step);
        if step == Step::Audience {
            self.audience_focus = AudienceField::Age;
            self.active_handle = Handle::Low;
        }
    }

    /// Option count on a choice step.
    pub fn choice_len(&self, step: Step) -> usize {
        match step {
            Step::PageType => PageType::ALL.len(),
            Step::Effect => i18n::effect_options(self.lang).len(),
            Step::Persona => i18n::persona_options(self.lang).len(),
            Step::Tone => ContentTone::ALL.len(),
            Step::Frequency => Frequency::ALL.len(),
            _ => 0,
        }
    }

    /// Where the brief's current value sits in a step's option list.
    fn current_choice_index(&self, step: Step) -> usize {
        match step {
            Step::PageType => PageType::ALL
                .iter()
                .position(|p| *p == self.brief.page_type)
                .unwrap_or(0),
            Step::Effect => i18n::effect_options(self.lang)
                .iter()
                .position(|o| *o == self.brief.effect)
                .unwrap_or(0),
            Step::Persona => i18n::persona_options(self.lang)
                .iter()
                .position(|o| *o == self.brief.persona)
                .unwrap_or(0),
            Step::Tone => ContentTone::ALL
                .iter()
                .position(|t| *t == self.brief.tone)
                .unwrap_or(0),
            Step::Frequency => Frequency::ALL
                .iter()
                .position(|f| *f == self.brief.frequency)
                .unwrap_or(0),
            _ => 0,
        }
    }

    /// Write the cursor's option into the brief.
    pub fn apply_choice(&mut self) {
        let i = self.choice_cursor;
        match self.step {
            Step::PageType => self.brief.page_type = PageType::ALL[i.min(11)],
            Step::Effect => {
                self.brief.effect = i18n::effect_options(self.lang)
                    .get(i)
                    .copied()
                    .unwrap_or_default()
                    .to_string();
            }
            Step::Persona => {
                self.brief.persona = i18n::persona_options(self.lang)
                    .get(i)
                    .copied()
                    .unwrap_or_default()
                    .to_string();
            }
            Step::Tone => self.brief.tone = ContentTone::ALL[i.min(4)],
            Step::Frequency => self.brief.frequency = Frequency::ALL[i.min(2)],
            _ => {}
        }
    }

    /// Kick off generation on the worker. No-op while one is in flight.
    /// `use_cache: false` forces a fresh generation (regenerate).
    pub fn start_generation(&mut self, use_cache: bool) {
        if self.generating {
            return;
        }
        if !self.brief.ready_to_generate() {
            let msg = self.strings().topic_label.to_string();
            self.set_warning(msg);
            return;
        }
        self.generating = true;
        self.plan_from_cache = false;
        let _ = self.worker_tx.send(WorkerCommand::GeneratePlan {
            brief: self.brief.clone(),
            lang: self.lang,
            use_cache,
        });
        let msg = self.strings().loading.to_string();
        self.set_status(msg);
    }

    /// Send the advisor input. No-op while an answer is pending or the
    /// input is blank.
    pub fn send_advisor_question(&mut self) {
        if self.advisor.waiting {
            return;
        }
        let question = self.advisor.input.trim().to_string();
        if question.is_empty() {
            return;
        }
        self.advisor.input.clear();
        self.advisor.messages.push(ChatMessage {
            role: ChatRole::User,
            text: question.clone(),
        });
        self.advisor.waiting = true;
        let _ = self.worker_tx.send(WorkerCommand::AskAdvisor {
            question,
            lang: self.lang,
        });
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_app;

    #[test]
    fn step_order_roundtrips() {
        for i in 0..=9 {
            let s = Step::from_index(i).unwrap();
            assert_eq!(s.index(), i);
        }
        assert!(Step::from_index(10).is_none());
        assert_eq!(Step::Welcome.next(), Step::PageType);
        assert_eq!(Step::Results.next(), Step::Results);
        assert_eq!(Step::Welcome.prev(), Step::Welcome);
        assert_eq!(Step::Results.prev(), Step::FinalNotes);
    }

    #[test]
    fn form_steps_are_exactly_the_middle_eight() {
        assert!(!Step::Welcome.is_form());
        assert!(!Step::Results.is_form());
        for i in 1..=FORM_STEPS {
            assert!(Step::from_index(i).unwrap().is_form());
        }
    }

    #[test]
    fn entering_a_choice_step_syncs_the_cursor() {
        let mut app = test_app();
        app.brief.tone = ContentTone::Motivational;
        app.enter_step(Step::Tone);
        assert_eq!(app.choice_cursor, 3);
        app.choice_cursor = 4;
        app.apply_choice();
        assert_eq!(app.brief.tone, ContentTone::Sales);
    }

    #[test]
    fn apply_choice_copies_option_text_for_free_string_fields() {
        let mut app = test_app();
        app.lang = Language::En;
        app.enter_step(Step::Effect);
        app.choice_cursor = 0;
        app.apply_choice();
        assert_eq!(app.brief.effect, "Building Trust");
    }

    #[test]
    fn generation_requires_a_topic() {
        let mut app = test_app();
        app.start_generation(true);
        assert!(!app.generating);
        app.brief.topic = "skincare".into();
        app.start_generation(true);
        assert!(app.generating);
        // Second call is a no-op while in flight.
        app.start_generation(true);
        assert!(app.generating);
    }

    #[test]
    fn advisor_ignores_blank_input_and_double_sends() {
        let mut app = test_app();
        app.advisor.input = "   ".into();
        app.send_advisor_question();
        assert!(app.advisor.messages.is_empty());

        app.advisor.input = "How often should I post?".into();
        app.send_advisor_question();
        assert_eq!(app.advisor.messages.len(), 1);
        assert!(app.advisor.waiting);

        app.advisor.input = "another".into();
        app.send_advisor_question();
        assert_eq!(app.advisor.messages.len(), 1);
    }

    #[test]
    fn error_history_caps_at_50() {
        let mut app = test_app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Other, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn results_tabs_cycle() {
        assert_eq!(ResultsTab::Calendar.next(), ResultsTab::Captions);
        assert_eq!(ResultsTab::Ideas.next(), ResultsTab::Calendar);
        assert_eq!(ResultsTab::Calendar.prev(), ResultsTab::Ideas);
    }
}
