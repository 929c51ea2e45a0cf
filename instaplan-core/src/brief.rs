//! The marketing brief collected by the wizard.
//!
//! Field set mirrors what the generation prompt consumes: business category,
//! niche topic, audience profile, desired effect, persona, tone, frequency,
//! and free-form final notes.

use serde::{Deserialize, Serialize};

use crate::range::RangeValue;

/// Business category of the Instagram page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageType {
    Shop,
    Service,
    Educational,
    Personal,
    RealEstate,
    Food,
    Beauty,
    Tech,
    Health,
    Art,
    Travel,
    News,
}

impl PageType {
    pub const ALL: [PageType; 12] = [
        PageType::Shop,
        PageType::Service,
        PageType::Educational,
        PageType::Personal,
        PageType::RealEstate,
        PageType::Food,
        PageType::Beauty,
        PageType::Tech,
        PageType::Health,
        PageType::Art,
        PageType::Travel,
        PageType::News,
    ];

    /// Wire name sent to the generation prompt.
    pub fn as_str(self) -> &'static str {
        match self {
            PageType::Shop => "SHOP",
            PageType::Service => "SERVICE",
            PageType::Educational => "EDUCATIONAL",
            PageType::Personal => "PERSONAL",
            PageType::RealEstate => "REAL_ESTATE",
            PageType::Food => "FOOD",
            PageType::Beauty => "BEAUTY",
            PageType::Tech => "TECH",
            PageType::Health => "HEALTH",
            PageType::Art => "ART",
            PageType::Travel => "TRAVEL",
            PageType::News => "NEWS",
        }
    }
}

/// Communication tone of the generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentTone {
    Formal,
    Casual,
    Friendly,
    Motivational,
    Sales,
}

impl ContentTone {
    pub const ALL: [ContentTone; 5] = [
        ContentTone::Formal,
        ContentTone::Casual,
        ContentTone::Friendly,
        ContentTone::Motivational,
        ContentTone::Sales,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentTone::Formal => "FORMAL",
            ContentTone::Casual => "CASUAL",
            ContentTone::Friendly => "FRIENDLY",
            ContentTone::Motivational => "MOTIVATIONAL",
            ContentTone::Sales => "SALES",
        }
    }
}

/// Posting frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    ThreePerWeek,
    FivePerWeek,
    Daily,
}

impl Frequency {
    pub const ALL: [Frequency; 3] = [
        Frequency::ThreePerWeek,
        Frequency::FivePerWeek,
        Frequency::Daily,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::ThreePerWeek => "THREE_PER_WEEK",
            Frequency::FivePerWeek => "FIVE_PER_WEEK",
            Frequency::Daily => "DAILY",
        }
    }
}

/// Everything the wizard collects before generation.
///
/// Every field deserializes with a default, so a minimal TOML brief of just
/// `topic = "..."` is a valid input file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentBrief {
    pub page_type: PageType,
    pub topic: String,
    pub age_range: RangeValue,
    pub audience_gender: String,
    pub audience_concern: String,
    pub tone: ContentTone,
    pub frequency: Frequency,
    pub effect: String,
    pub persona: String,
    pub final_details: String,
}

impl Default for ContentBrief {
    fn default() -> Self {
        Self {
            page_type: PageType::Shop,
            topic: String::new(),
            age_range: RangeValue::default(),
            audience_gender: String::new(),
            audience_concern: String::new(),
            tone: ContentTone::Casual,
            frequency: Frequency::ThreePerWeek,
            effect: String::new(),
            persona: String::new(),
            final_details: String::new(),
        }
    }
}

impl ContentBrief {
    /// Generation requires a topic; every other field has a usable default.
    pub fn ready_to_generate(&self) -> bool {
        !self.topic.trim().is_empty()
    }
}
