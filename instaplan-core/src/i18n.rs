//! Bilingual string tables.
//!
//! Every user-visible string exists in both Persian and English; lookup is
//! infallible. Persian copy is the primary voice of the product and is
//! carried verbatim.

use serde::{Deserialize, Serialize};

use crate::brief::{ContentTone, Frequency, PageType};

/// UI language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Fa,
    En,
}

impl Language {
    pub fn toggle(self) -> Language {
        match self {
            Language::Fa => Language::En,
            Language::En => Language::Fa,
        }
    }

    /// Persian is written right-to-left. Terminals rarely shape RTL text,
    /// but alignment decisions still key off this.
    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Fa)
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Fa => "fa",
            Language::En => "en",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Fa
    }
}

/// The full fixed-key string table for one language.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub start_btn: &'static str,
    pub step: &'static str,
    pub next: &'static str,
    pub prev: &'static str,
    pub generate: &'static str,
    pub page_type_label: &'static str,
    pub topic_label: &'static str,
    pub topic_placeholder: &'static str,
    pub audience_label: &'static str,
    pub age_range_label: &'static str,
    pub gender_placeholder: &'static str,
    pub concern_placeholder: &'static str,
    pub tone_label: &'static str,
    pub frequency_label: &'static str,
    pub loading: &'static str,
    pub export: &'static str,
    pub exported: &'static str,
    pub calendar_tab: &'static str,
    pub captions_tab: &'static str,
    pub hashtags_tab: &'static str,
    pub ideas_tab: &'static str,
    pub story_ideas_heading: &'static str,
    pub reel_ideas_heading: &'static str,
    pub chat_title: &'static str,
    pub chat_placeholder: &'static str,
    pub effect_label: &'static str,
    pub persona_label: &'static str,
    pub edit_notice: &'static str,
    pub final_details_label: &'static str,
    pub final_details_placeholder: &'static str,
    pub restart: &'static str,
    pub gen_error: &'static str,
}

const FA: Strings = Strings {
    app_name: "دستیار اینستاگرام",
    tagline: "تولید محتوای حرفه‌ای در چند ثانیه با هوش مصنوعی",
    start_btn: "شروع برنامه‌ریزی محتوا",
    step: "مرحله",
    next: "بعدی",
    prev: "قبلی",
    generate: "تولید محتوا",
    page_type_label: "نوع پیج شما چیست؟",
    topic_label: "موضوع اصلی پیج شما چیست؟",
    topic_placeholder: "مثال: لوازم آرایشی و روتین پوستی",
    audience_label: "مخاطب هدف شما (اختیاری)",
    age_range_label: "محدوده سنی مخاطبان (بکشید تا انتخاب شود)",
    gender_placeholder: "جنسیت (خانم‌ها، آقایان، همه)",
    concern_placeholder: "دغدغه اصلی مخاطب شما چیست؟",
    tone_label: "لحن محتوا چگونه باشد؟",
    frequency_label: "تعداد پست در هفته؟",
    loading: "در حال تولید محتوای جادویی برای شما...",
    export: "ذخیره در فایل",
    exported: "ذخیره شد!",
    calendar_tab: "تقویم محتوایی",
    captions_tab: "کپشن‌ها",
    hashtags_tab: "هشتگ‌ها",
    ideas_tab: "ایده‌های استوری و ریلز",
    story_ideas_heading: "ایده‌های استوری",
    reel_ideas_heading: "سناریوهای ریلز",
    chat_title: "مشاوره محتوا",
    chat_placeholder: "سوالی در مورد اینستاگرام دارید؟ بپرسید...",
    effect_label: "چه تأثیری می‌خواهید روی مخاطب بگذارید؟",
    persona_label: "شما را با چه شخصیتی بشناسند؟",
    edit_notice: "می‌توانید متن کپشن را قبل از ذخیره ویرایش کنید.",
    final_details_label: "جزییات نهایی و نکات خاص (اختیاری)",
    final_details_placeholder: "مثلاً: روی تخفیف آخر هفته تاکید کن یا از کلمات خاصی استفاده کن...",
    restart: "بازگشت و شروع مجدد",
    gen_error: "خطا در برقراری ارتباط با هوش مصنوعی",
};

const EN: Strings = Strings {
    app_name: "Insta Assistant",
    tagline: "Professional content generation in seconds with AI",
    start_btn: "Start Content Planning",
    step: "Step",
    next: "Next",
    prev: "Back",
    generate: "Generate Content",
    page_type_label: "What is your page type?",
    topic_label: "What is your page topic?",
    topic_placeholder: "e.g., Cosmetics and skincare products",
    audience_label: "Target Audience (Optional)",
    age_range_label: "Audience Age Range (Drag to select)",
    gender_placeholder: "Gender (Women, Men, All)",
    concern_placeholder: "What is your audience's main concern?",
    tone_label: "What is the content tone?",
    frequency_label: "Posting frequency?",
    loading: "Generating magic content for you...",
    export: "Export to file",
    exported: "Exported!",
    calendar_tab: "Content Calendar",
    captions_tab: "Captions",
    hashtags_tab: "Hashtags",
    ideas_tab: "Story & Reels Ideas",
    story_ideas_heading: "Story Ideas",
    reel_ideas_heading: "Reel Scenarios",
    chat_title: "Content Advisor",
    chat_placeholder: "Ask anything about Instagram...",
    effect_label: "What effect should the content have on the audience?",
    persona_label: "What personality should you project?",
    edit_notice: "You can edit the caption text before exporting it.",
    final_details_label: "Final Details & Specific Notes (Optional)",
    final_details_placeholder: "e.g., Emphasize the weekend sale or use specific keywords...",
    restart: "Back and Restart",
    gen_error: "Error connecting to AI",
};

/// Table lookup for a language. Infallible.
pub fn strings(lang: Language) -> &'static Strings {
    match lang {
        Language::Fa => &FA,
        Language::En => &EN,
    }
}

pub fn page_type_label(lang: Language, page_type: PageType) -> &'static str {
    match (lang, page_type) {
        (Language::Fa, PageType::Shop) => "فروشگاهی",
        (Language::Fa, PageType::Service) => "خدماتی",
        (Language::Fa, PageType::Educational) => "آموزشی",
        (Language::Fa, PageType::Personal) => "بلاگر / شخصی",
        (Language::Fa, PageType::RealEstate) => "املاک و مسکن",
        (Language::Fa, PageType::Food) => "رستوران و آشپزی",
        (Language::Fa, PageType::Beauty) => "زیبایی و آرایشی",
        (Language::Fa, PageType::Tech) => "تکنولوژی و دیجیتال",
        (Language::Fa, PageType::Health) => "پزشکی و سلامت",
        (Language::Fa, PageType::Art) => "هنر و طراحی",
        (Language::Fa, PageType::Travel) => "گردشگری و سفر",
        (Language::Fa, PageType::News) => "خبری و رسانه",
        (Language::En, PageType::Shop) => "Online Shop",
        (Language::En, PageType::Service) => "Service Provider",
        (Language::En, PageType::Educational) => "Educational",
        (Language::En, PageType::Personal) => "Influencer / Personal",
        (Language::En, PageType::RealEstate) => "Real Estate",
        (Language::En, PageType::Food) => "Food & Restaurant",
        (Language::En, PageType::Beauty) => "Beauty & Skincare",
        (Language::En, PageType::Tech) => "Tech & Digital",
        (Language::En, PageType::Health) => "Health & Medical",
        (Language::En, PageType::Art) => "Art & Design",
        (Language::En, PageType::Travel) => "Travel & Tourism",
        (Language::En, PageType::News) => "News & Media",
    }
}

pub fn tone_label(lang: Language, tone: ContentTone) -> &'static str {
    match (lang, tone) {
        (Language::Fa, ContentTone::Formal) => "رسمی",
        (Language::Fa, ContentTone::Casual) => "دوستانه",
        (Language::Fa, ContentTone::Friendly) => "صمیمی",
        (Language::Fa, ContentTone::Motivational) => "انگیزشی",
        (Language::Fa, ContentTone::Sales) => "فروش‌محور",
        (Language::En, ContentTone::Formal) => "Formal",
        (Language::En, ContentTone::Casual) => "Casual",
        (Language::En, ContentTone::Friendly) => "Friendly",
        (Language::En, ContentTone::Motivational) => "Motivational",
        (Language::En, ContentTone::Sales) => "Sales-oriented",
    }
}

pub fn frequency_label(lang: Language, frequency: Frequency) -> &'static str {
    match (lang, frequency) {
        (Language::Fa, Frequency::ThreePerWeek) => "۳ پست در هفته",
        (Language::Fa, Frequency::FivePerWeek) => "۵ پست در هفته",
        (Language::Fa, Frequency::Daily) => "هر روز",
        (Language::En, Frequency::ThreePerWeek) => "3 posts per week",
        (Language::En, Frequency::FivePerWeek) => "5 posts per week",
        (Language::En, Frequency::Daily) => "Daily posts",
    }
}

/// Desired-effect options, free strings chosen as-is into the brief.
pub fn effect_options(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Fa => &[
            "ایجاد اعتماد",
            "افزایش هیجان",
            "برانگیختن کنجکاوی",
            "آموزش عمیق",
            "فروش مستقیم",
            "تعامل و گفتگو",
        ],
        Language::En => &[
            "Building Trust",
            "Creating Excitement",
            "Sparking Curiosity",
            "Deep Education",
            "Direct Sales",
            "Community Engagement",
        ],
    }
}

/// Brand-persona options, free strings chosen as-is into the brief.
pub fn persona_options(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::Fa => &[
            "متخصص و حرفه‌ای",
            "دوست طناز و شوخ",
            "مینیمال و شیک",
            "رهبر جسور",
            "حامی و مهربان",
            "منتقد و دقیق",
        ],
        Language::En => &[
            "Professional Expert",
            "Funny/Witty Friend",
            "Minimalist/Aesthetic",
            "Bold Leader",
            "Kind Supporter",
            "Critical Thinker",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_and_toggle() {
        assert_eq!(Language::Fa.code(), "fa");
        assert_eq!(Language::Fa.toggle(), Language::En);
        assert_eq!(Language::En.toggle(), Language::Fa);
        assert!(Language::Fa.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn language_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Fa).unwrap(), "\"fa\"");
        let back: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Language::En);
    }

    #[test]
    fn option_lists_have_matching_lengths_across_languages() {
        assert_eq!(
            effect_options(Language::Fa).len(),
            effect_options(Language::En).len()
        );
        assert_eq!(
            persona_options(Language::Fa).len(),
            persona_options(Language::En).len()
        );
    }

    #[test]
    fn every_enum_variant_has_labels_in_both_languages() {
        for lang in [Language::Fa, Language::En] {
            for pt in PageType::ALL {
                assert!(!page_type_label(lang, pt).is_empty());
            }
            for tone in ContentTone::ALL {
                assert!(!tone_label(lang, tone).is_empty());
            }
            for freq in Frequency::ALL {
                assert!(!frequency_label(lang, freq).is_empty());
            }
        }
    }
}
