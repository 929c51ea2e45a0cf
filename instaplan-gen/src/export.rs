//! Plan export — the terminal counterpart of the original copy/share actions.
//!
//! A full export writes a timestamped run directory with `plan.json` plus a
//! text rendering per section; single-section export writes one file.

use std::path::{Path, PathBuf};

use instaplan_core::i18n::{self, Language};
use instaplan_core::plan::ContentPlan;

use crate::error::GenError;

/// One exportable slice of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSection {
    Calendar,
    Captions,
    Hashtags,
    Ideas,
}

impl PlanSection {
    pub const ALL: [PlanSection; 4] = [
        PlanSection::Calendar,
        PlanSection::Captions,
        PlanSection::Hashtags,
        PlanSection::Ideas,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            PlanSection::Calendar => "calendar.txt",
            PlanSection::Captions => "captions.txt",
            PlanSection::Hashtags => "hashtags.txt",
            PlanSection::Ideas => "ideas.txt",
        }
    }

    pub fn heading(self, lang: Language) -> &'static str {
        let t = i18n::strings(lang);
        match self {
            PlanSection::Calendar => t.calendar_tab,
            PlanSection::Captions => t.captions_tab,
            PlanSection::Hashtags => t.hashtags_tab,
            PlanSection::Ideas => t.ideas_tab,
        }
    }
}

/// Render one section as plain text.
pub fn render_section(plan: &ContentPlan, section: PlanSection, lang: Language) -> String {
    let t = i18n::strings(lang);
    let mut out = String::new();
    out.push_str(&format!("== {} ==\n\n", section.heading(lang)));

    match section {
        PlanSection::Calendar => {
            for (i, entry) in plan.calendar.iter().enumerate() {
                out.push_str(&format!(
                    "{:>2}. [{}] [{}] {}\n",
                    i + 1,
                    entry.day,
                    entry.post_type,
                    entry.title
                ));
            }
        }
        PlanSection::Captions => {
            for (i, caption) in plan.captions.iter().enumerate() {
                out.push_str(&format!("--- {} · {} ---\n", i + 1, caption.title));
                out.push_str(caption.text.trim_end());
                out.push_str("\n\n");
            }
        }
        PlanSection::Hashtags => {
            out.push_str(&plan.hashtag_line());
            out.push('\n');
        }
        PlanSection::Ideas => {
            out.push_str(&format!("{}\n", t.story_ideas_heading));
            for (i, idea) in plan.story_ideas.iter().enumerate() {
                out.push_str(&format!("  #{:02} {}\n", i + 1, idea));
            }
            out.push_str(&format!("\n{}\n", t.reel_ideas_heading));
            for (i, idea) in plan.reel_ideas.iter().enumerate() {
                out.push_str(&format!("  #{:02} {}\n", i + 1, idea));
            }
        }
    }
    out
}

/// Write the whole plan under `out_dir`; returns the created run directory.
pub fn export_plan(
    plan: &ContentPlan,
    lang: Language,
    out_dir: &Path,
) -> Result<PathBuf, GenError> {
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let run_dir = out_dir.join(format!("plan_{stamp}"));
    std::fs::create_dir_all(&run_dir)?;

    let json = serde_json::to_string_pretty(plan)
        .map_err(|e| GenError::Cache(format!("plan serialization failed: {e}")))?;
    std::fs::write(run_dir.join("plan.json"), json)?;

    for section in PlanSection::ALL {
        std::fs::write(
            run_dir.join(section.file_name()),
            render_section(plan, section, lang),
        )?;
    }
    Ok(run_dir)
}

/// Write a single section under `out_dir`; returns the file path.
pub fn export_section(
    plan: &ContentPlan,
    section: PlanSection,
    lang: Language,
    out_dir: &Path,
) -> Result<PathBuf, GenError> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(section.file_name());
    std::fs::write(&path, render_section(plan, section, lang))?;
    Ok(path)
}
