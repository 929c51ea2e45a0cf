//! App state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use instaplan_core::brief::ContentBrief;
use instaplan_core::i18n::Language;
use instaplan_core::range::{RangeBounds, RangeValue};

use crate::app::AppState;
use crate::theme::Theme;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub lang: Language,
    pub theme: Theme,
    pub brief: ContentBrief,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            lang: Language::default(),
            theme: Theme::default(),
            brief: ContentBrief::default(),
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or
/// corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        lang: app.lang,
        theme: app.theme,
        brief: app.brief.clone(),
    }
}

/// Apply persisted state to AppState. The age range is re-normalized in case
/// the file was hand-edited into an invalid pair.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.lang = state.lang;
    app.theme = state.theme;
    app.brief = state.brief;
    app.brief.age_range = RangeValue::clamped(
        app.brief.age_range.lo,
        app.brief.age_range.hi,
        RangeBounds::AGE,
    );
}
