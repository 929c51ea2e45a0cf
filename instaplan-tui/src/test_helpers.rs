//! Shared test fixtures.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::mpsc;
use std::sync::Arc;

use instaplan_core::plan::{CalendarEntry, Caption, ContentPlan};

use crate::app::AppState;

/// An AppState wired to dangling channels — commands go nowhere, which is
/// exactly what input/dispatch tests want.
pub fn test_app() -> AppState {
    let (tx, _rx) = mpsc::channel();
    let (_tx2, rx2) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    AppState::new(tx, rx2, cancel, PathBuf::from("."), PathBuf::from("."))
}

pub fn sample_plan() -> ContentPlan {
    ContentPlan {
        calendar: vec![
            CalendarEntry {
                day: "Saturday".into(),
                post_type: "Post".into(),
                title: "Introduce the brand".into(),
            },
            CalendarEntry {
                day: "Monday".into(),
                post_type: "Reel".into(),
                title: "Before and after".into(),
            },
        ],
        captions: vec![
            Caption {
                title: "Launch".into(),
                text: "We are live.".into(),
            },
            Caption {
                title: "Routine".into(),
                text: "Three steps every morning.".into(),
            },
        ],
        hashtags: vec!["skincare".into(), "glow".into()],
        story_ideas: vec!["Behind the scenes".into()],
        reel_ideas: vec!["Myth vs fact".into()],
    }
}
