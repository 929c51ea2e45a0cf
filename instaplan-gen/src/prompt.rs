//! Prompt assembly for plan generation and the advisor.
//!
//! The system instructions carry the marketing-strategist persona in the
//! user's language; the plan prompt enumerates the brief fields and the
//! expected deliverables.

use instaplan_core::brief::ContentBrief;
use instaplan_core::i18n::Language;

/// System instruction for plan generation.
pub fn plan_instruction(lang: Language) -> &'static str {
    match lang {
        Language::Fa => {
            "شما یک استراتژیست ارشد بازاریابی و ادمین حرفه‌ای اینستاگرام هستید.\n\
             وظیفه شما تولید محتوایی است که نه تنها جذاب است، بلکه باعث رشد و فروش واقعی می‌شود.\n\
             قوانین طلایی شما:\n\
             ۱. هر کپشن باید با یک قلاب (Hook) خیره‌کننده شروع شود که مخاطب را در ثانیه اول متوقف کند.\n\
             ۲. اگر پیج فروشگاهی است، از تکنیک‌های روانشناسی فروش (کمیابی، فوریت، اثبات اجتماعی) استفاده کنید.\n\
             ۳. ایده‌های استوری و ریلز باید کاملاً استراتژیک و هدفمند باشند.\n\
             ۴. لحن محتوا باید کاملاً بومی، طبیعی و با رعایت دقیق پرسونای انتخابی باشد.\n\
             ۵. شما معمار اصلی حضور دیجیتال این برند هستید، پس جدی و فوق‌حرفه‌ای عمل کنید."
        }
        Language::En => {
            "You are a World-Class Professional Marketing Strategist and Expert Instagram Page Admin.\n\
             Your mission is to provide high-impact content that converts and grows the brand.\n\
             Your Golden Rules:\n\
             1. Every caption MUST start with a \"Scroll-Stopping Hook\" to stop the user instantly.\n\
             2. Use advanced psychological sales techniques (scarcity, urgency, social proof) for sales-oriented content.\n\
             3. Ideas for Stories and Reels must be strategic, goal-oriented, and innovative.\n\
             4. Ensure native-level fluency and perfectly match the chosen Persona and Tone.\n\
             5. Act as the principal architect of the brand's digital presence."
        }
    }
}

/// System instruction for the Q&A advisor.
pub fn advisor_instruction(lang: Language) -> &'static str {
    match lang {
        Language::Fa => {
            "شما یک مشاور ارشد بازاریابی اینستاگرام هستید. \
             پاسخ‌های شما باید کوتاه، استراتژیک و کاملاً حرفه‌ای باشد."
        }
        Language::En => {
            "You are a senior Instagram marketing strategist. \
             Provide short, strategic, and highly professional advice."
        }
    }
}

/// User prompt for plan generation, enumerating the brief.
pub fn plan_prompt(brief: &ContentBrief, lang: Language) -> String {
    let gender = non_empty_or(&brief.audience_gender, "All");
    let concern = non_empty_or(&brief.audience_concern, "N/A");
    let custom = non_empty_or(
        &brief.final_details,
        "Use your expertise to influence captions and hashtags for maximum growth.",
    );
    let language_name = match lang {
        Language::Fa => "Persian (Farsi)",
        Language::En => "English",
    };

    format!(
        "Generate a Strategic Instagram Content Plan for:\n\
         - Business Category: {page_type}\n\
         - Niche/Topic: {topic}\n\
         - Audience Profile: Age {age_lo}-{age_hi}, Gender: {gender}, Main Concern: {concern}\n\
         - Brand Persona: {persona}\n\
         - Desired Psychological Effect: {effect}\n\
         - Communication Tone: {tone}\n\
         - Post Frequency: {frequency}\n\
         - MANDATORY CUSTOM INSTRUCTIONS: {custom}\n\
         - Language: {language_name}\n\
         \n\
         Deliverables:\n\
         1. A strategic Weekly Content Calendar (Posts/Reels).\n\
         2. 3 Premium Captions with powerful Hooks and clear CTAs (150-250 words).\n\
         3. 15-20 Optimized Hashtags (Niche-specific).\n\
         4. 5 Strategic Story Ideas.\n\
         5. 5 Reel Scenarios with high viral potential.",
        page_type = brief.page_type.as_str(),
        topic = brief.topic,
        age_lo = brief.age_range.lo,
        age_hi = brief.age_range.hi,
        persona = brief.persona,
        effect = brief.effect,
        tone = brief.tone.as_str(),
        frequency = brief.frequency.as_str(),
    )
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_brief() -> ContentBrief {
        ContentBrief {
            topic: "Cosmetics and skincare".into(),
            effect: "Building Trust".into(),
            persona: "Professional Expert".into(),
            ..ContentBrief::default()
        }
    }

    #[test]
    fn prompt_carries_brief_fields() {
        let prompt = plan_prompt(&sample_brief(), Language::En);
        assert!(prompt.contains("Business Category: SHOP"));
        assert!(prompt.contains("Niche/Topic: Cosmetics and skincare"));
        assert!(prompt.contains("Age 18-45"));
        assert!(prompt.contains("Post Frequency: THREE_PER_WEEK"));
        assert!(prompt.contains("Language: English"));
    }

    #[test]
    fn optional_fields_fall_back() {
        let prompt = plan_prompt(&sample_brief(), Language::Fa);
        assert!(prompt.contains("Gender: All"));
        assert!(prompt.contains("Main Concern: N/A"));
        assert!(prompt.contains("Language: Persian (Farsi)"));
    }

    #[test]
    fn instructions_differ_by_language() {
        assert_ne!(plan_instruction(Language::Fa), plan_instruction(Language::En));
        assert!(advisor_instruction(Language::En).contains("Instagram"));
    }
}
