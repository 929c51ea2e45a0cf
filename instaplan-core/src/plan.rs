//! Generated content-plan shapes.
//!
//! These match the structured-output schema requested from the model, so a
//! successful generation deserializes directly into `ContentPlan`.

use serde::{Deserialize, Serialize};

/// One slot in the weekly content calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub day: String,
    /// Post format, e.g. "Post" or "Reel".
    #[serde(rename = "type")]
    pub post_type: String,
    pub title: String,
}

/// A ready-to-post caption. `text` stays editable in the results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub title: String,
    pub text: String,
}

/// The full generated deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPlan {
    pub calendar: Vec<CalendarEntry>,
    pub captions: Vec<Caption>,
    pub hashtags: Vec<String>,
    pub story_ideas: Vec<String>,
    pub reel_ideas: Vec<String>,
}

impl ContentPlan {
    /// Hashtags joined into a single postable line.
    pub fn hashtag_line(&self) -> String {
        self.hashtags
            .iter()
            .map(|t| format!("#{}", t.trim_start_matches('#')))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_wire_shape() {
        let json = r##"{
            "calendar": [{"day": "Monday", "type": "Reel", "title": "Hook them"}],
            "captions": [{"title": "Launch", "text": "We are live."}],
            "hashtags": ["skincare", "#glow"],
            "storyIdeas": ["Behind the scenes"],
            "reelIdeas": ["Before/after"]
        }"##;
        let plan: ContentPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.calendar[0].post_type, "Reel");
        assert_eq!(plan.story_ideas.len(), 1);
        assert_eq!(plan.reel_ideas.len(), 1);
    }

    #[test]
    fn hashtag_line_normalizes_leading_hash() {
        let plan = ContentPlan {
            calendar: vec![],
            captions: vec![],
            hashtags: vec!["skincare".into(), "#glow".into()],
            story_ideas: vec![],
            reel_ideas: vec![],
        };
        assert_eq!(plan.hashtag_line(), "#skincare #glow");
    }
}
