//! Instaplan TUI — bilingual content-plan wizard.
//!
//! Steps:
//! 1. Page type — business category of the Instagram page
//! 2. Topic — niche description (free text)
//! 3. Audience — age band (dual-handle selector), gender, concern
//! 4-7. Effect, persona, tone, frequency — option lists
//! 8. Final notes — free text, then generation on a worker thread
//! Results — calendar / captions / hashtags / ideas tabs with export

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;
pub mod worker;

#[cfg(test)]
mod test_helpers;
