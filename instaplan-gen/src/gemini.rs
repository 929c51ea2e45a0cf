//! Gemini `generateContent` client.
//!
//! Typed request/response wire shapes around the REST endpoint. One request,
//! one typed result — transient-failure retry policy is deliberately out of
//! scope; callers surface the error and let the user regenerate.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use instaplan_core::brief::ContentBrief;
use instaplan_core::i18n::Language;
use instaplan_core::plan::ContentPlan;

use crate::config::ClientConfig;
use crate::error::GenError;
use crate::{prompt, schema};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

impl Content {
    fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part { text: text.to_string() }],
        }
    }

    fn user(text: String) -> Self {
        Self {
            role: Some("user"),
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Error envelope the API returns on non-2xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}

/// Blocking Gemini client.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl GeminiClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(60))
            .user_agent(concat!("instaplan/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Generate a full content plan from a brief.
    pub fn generate_plan(
        &self,
        brief: &ContentBrief,
        lang: Language,
    ) -> Result<ContentPlan, GenError> {
        let request = GenerateRequest {
            system_instruction: Content::system(prompt::plan_instruction(lang)),
            contents: vec![Content::user(prompt::plan_prompt(brief, lang))],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema::plan_response_schema(),
            }),
        };
        let text = self.generate(&self.config.plan_model, &request)?;
        parse_plan(&text)
    }

    /// Ask the advisor a free-form question; returns the answer text.
    pub fn ask_advisor(&self, question: &str, lang: Language) -> Result<String, GenError> {
        let request = GenerateRequest {
            system_instruction: Content::system(prompt::advisor_instruction(lang)),
            contents: vec![Content::user(question.to_string())],
            generation_config: None,
        };
        self.generate(&self.config.advisor_model, &request)
    }

    fn generate(&self, model: &str, request: &GenerateRequest) -> Result<String, GenError> {
        let key = self.config.require_key()?;
        let url = format!("{BASE_URL}/models/{model}:generateContent");
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", key)
            .json(request)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorEnvelope>()
                .map(|e| e.error.message)
                .unwrap_or_else(|_| {
                    status.canonical_reason().unwrap_or("unknown error").to_string()
                });
            return Err(GenError::Api {
                code: status.as_u16(),
                message,
            });
        }

        first_text(resp.json::<GenerateResponse>()?)
    }
}

/// Concatenate the first candidate's text parts. Empty text is an error, not
/// an empty plan.
fn first_text(resp: GenerateResponse) -> Result<String, GenError> {
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(GenError::EmptyResponse);
    }
    Ok(text)
}

fn parse_plan(text: &str) -> Result<ContentPlan, GenError> {
    serde_json::from_str(text).map_err(|e| GenError::MalformedPlan(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_wire_field_names() {
        let request = GenerateRequest {
            system_instruction: Content::system("sys"),
            contents: vec![Content::user("hello".into())],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema::plan_response_schema(),
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json["systemInstruction"]["parts"][0]["text"].is_string());
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        // System instruction carries no role key at all.
        assert!(json["systemInstruction"].get("role").is_none());
    }

    #[test]
    fn advisor_request_omits_generation_config() {
        let request = GenerateRequest {
            system_instruction: Content::system("sys"),
            contents: vec![Content::user("q".into())],
            generation_config: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn first_text_joins_parts() {
        let resp: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Post "},{"text":"daily."}]}}]}"#,
        )
        .unwrap();
        assert_eq!(first_text(resp).unwrap(), "Post daily.");
    }

    #[test]
    fn missing_candidates_is_empty_response() {
        let resp: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(first_text(resp), Err(GenError::EmptyResponse)));

        let resp: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  "}]}}]}"#)
                .unwrap();
        assert!(matches!(first_text(resp), Err(GenError::EmptyResponse)));
    }

    #[test]
    fn plan_text_parses_into_plan() {
        let text = r#"{"calendar":[],"captions":[],"hashtags":["a"],"storyIdeas":[],"reelIdeas":[]}"#;
        let plan = parse_plan(text).unwrap();
        assert_eq!(plan.hashtags, vec!["a"]);
        assert!(matches!(
            parse_plan("not json"),
            Err(GenError::MalformedPlan(_))
        ));
    }
}
