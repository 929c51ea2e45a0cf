//! Instaplan core — domain types for the content-plan studio.
//!
//! - `range` — two-handle integer range model and track mapping
//! - `brief` — the marketing brief collected by the wizard
//! - `plan` — generated content-plan shapes
//! - `i18n` — bilingual (Persian/English) string tables

pub mod brief;
pub mod i18n;
pub mod plan;
pub mod range;
