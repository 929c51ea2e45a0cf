//! Structured-output schema for plan generation.
//!
//! Sent as `generationConfig.responseSchema` so the model is constrained to
//! the exact shape `ContentPlan` deserializes from.

use serde_json::{json, Value};

pub fn plan_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "calendar": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "STRING" },
                        "type": { "type": "STRING" },
                        "title": { "type": "STRING" }
                    },
                    "required": ["day", "type", "title"]
                }
            },
            "captions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "text": { "type": "STRING" }
                    },
                    "required": ["title", "text"]
                }
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "storyIdeas": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            },
            "reelIdeas": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["calendar", "captions", "hashtags", "storyIdeas", "reelIdeas"]
    })
}
