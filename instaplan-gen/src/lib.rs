//! Instaplan generation layer.
//!
//! Turns a [`instaplan_core::brief::ContentBrief`] into a
//! [`instaplan_core::plan::ContentPlan`] by way of the Gemini
//! `generateContent` API, with a content-addressed plan cache and file
//! export around it.

pub mod cache;
pub mod config;
pub mod error;
pub mod export;
pub mod gemini;
pub mod prompt;
pub mod schema;

pub use cache::{CacheMeta, PlanCache};
pub use config::ClientConfig;
pub use error::GenError;
pub use export::{export_plan, export_section, PlanSection};
pub use gemini::GeminiClient;
