//! Instaplan CLI — headless plan generation and cache management.
//!
//! Commands:
//! - `generate` — build a content plan from a TOML brief file and export it
//! - `ask` — one advisor question, answer to stdout
//! - `cache status` — list cached plans
//! - `cache clean` — remove cached plans older than N days

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use instaplan_core::brief::ContentBrief;
use instaplan_core::i18n::Language;
use instaplan_core::plan::ContentPlan;
use instaplan_core::range::{RangeBounds, RangeValue};
use instaplan_gen::{export_plan, ClientConfig, GeminiClient, PlanCache};

#[derive(Parser)]
#[command(
    name = "instaplan",
    about = "Instaplan CLI — bilingual Instagram content-plan generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a content plan from a TOML brief file.
    ///
    /// Minimal brief: `topic = "cosmetics and skincare"`. Field names match
    /// the wire shape (pageType, ageRange = { lo, hi }, tone, frequency,
    /// effect, persona, finalDetails).
    Generate {
        /// Path to the TOML brief file.
        #[arg(long)]
        brief: PathBuf,

        /// Output language: fa or en.
        #[arg(long, default_value = "fa", value_parser = parse_lang)]
        lang: Language,

        /// Output directory for exported artifacts.
        #[arg(long, default_value = "exports")]
        out: PathBuf,

        /// Skip the plan cache and force a fresh generation.
        #[arg(long, default_value_t = false)]
        no_cache: bool,

        /// Plan cache directory. Defaults to the user config dir.
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
    /// Ask the marketing advisor one question.
    Ask {
        /// The question.
        question: String,

        /// Answer language: fa or en.
        #[arg(long, default_value = "fa", value_parser = parse_lang)]
        lang: Language,
    },
    /// Plan cache management commands.
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand)]
enum CacheAction {
    /// List cached plans.
    Status {
        /// Plan cache directory. Defaults to the user config dir.
        #[arg(long)]
        cache_dir: Option<PathBuf>,
    },
    /// Remove cached plans older than the given number of days.
    Clean {
        /// Remove plans generated more than this many days ago.
        #[arg(long)]
        older_than_days: u64,

        /// Plan cache directory. Defaults to the user config dir.
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Actually delete (without this flag, only previews what would be
        /// removed).
        #[arg(long, default_value_t = false)]
        confirm: bool,
    },
}

fn parse_lang(value: &str) -> Result<Language, String> {
    match value {
        "fa" => Ok(Language::Fa),
        "en" => Ok(Language::En),
        other => Err(format!("unknown language '{other}' (expected fa or en)")),
    }
}

fn cache_at(dir: Option<PathBuf>) -> PlanCache {
    PlanCache::new(dir.unwrap_or_else(PlanCache::default_dir))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            brief,
            lang,
            out,
            no_cache,
            cache_dir,
        } => run_generate(&brief, lang, &out, no_cache, cache_dir),
        Commands::Ask { question, lang } => run_ask(&question, lang),
        Commands::Cache { action } => match action {
            CacheAction::Status { cache_dir } => run_cache_status(cache_at(cache_dir)),
            CacheAction::Clean {
                older_than_days,
                cache_dir,
                confirm,
            } => run_cache_clean(cache_at(cache_dir), older_than_days, confirm),
        },
    }
}

fn run_generate(
    brief_path: &Path,
    lang: Language,
    out_dir: &Path,
    no_cache: bool,
    cache_dir: Option<PathBuf>,
) -> Result<()> {
    let content = std::fs::read_to_string(brief_path)
        .with_context(|| format!("failed to read brief file {}", brief_path.display()))?;
    let mut brief: ContentBrief = toml::from_str(&content)
        .with_context(|| format!("malformed brief file {}", brief_path.display()))?;
    brief.age_range = RangeValue::clamped(brief.age_range.lo, brief.age_range.hi, RangeBounds::AGE);

    if !brief.ready_to_generate() {
        bail!("brief file has no topic — set `topic = \"...\"`");
    }

    let config = ClientConfig::load();
    let model = config.plan_model.clone();
    let cache = cache_at(cache_dir);
    let key = PlanCache::key_for(&brief, lang, &model);

    let (plan, from_cache) = if no_cache {
        (generate_fresh(&brief, lang, config)?, false)
    } else if let Some(cached) = cache.lookup(&key) {
        (cached, true)
    } else {
        let plan = generate_fresh(&brief, lang, config)?;
        // Cache write failure is not fatal; the plan is still exported.
        let _ = cache.store(&key, &brief, lang, &model, &plan);
        (plan, false)
    };

    print_summary(&plan, from_cache);

    let run_dir = export_plan(&plan, lang, out_dir)?;
    println!("Artifacts saved to: {}", run_dir.display());

    Ok(())
}

fn generate_fresh(brief: &ContentBrief, lang: Language, config: ClientConfig) -> Result<ContentPlan> {
    let client = GeminiClient::new(config);
    Ok(client.generate_plan(brief, lang)?)
}

fn run_ask(question: &str, lang: Language) -> Result<()> {
    let client = GeminiClient::new(ClientConfig::load());
    let answer = client.ask_advisor(question, lang)?;
    println!("{answer}");
    Ok(())
}

fn run_cache_status(cache: PlanCache) -> Result<()> {
    let entries = cache.entries();
    if entries.is_empty() {
        println!("Cache is empty: {}", cache.dir().display());
        return Ok(());
    }

    println!("Cache: {}", cache.dir().display());
    println!("Plans: {}", entries.len());
    println!();
    println!(
        "{:<20} {:<4} {:<26} {:<12} Topic",
        "Created", "Lang", "Model", "Key"
    );
    println!("{}", "-".repeat(80));
    for meta in &entries {
        let key_short: String = meta.key.chars().take(10).collect();
        println!(
            "{:<20} {:<4} {:<26} {:<12} {}",
            meta.created_at.format("%Y-%m-%d %H:%M:%S"),
            meta.language.code(),
            meta.model,
            key_short,
            meta.label,
        );
    }

    Ok(())
}

fn run_cache_clean(cache: PlanCache, older_than_days: u64, confirm: bool) -> Result<()> {
    let cutoff =
        chrono::Local::now().naive_local() - chrono::Duration::days(older_than_days as i64);
    let stale = cache.stale(cutoff);

    if stale.is_empty() {
        println!("No plans older than {older_than_days} days to remove.");
        return Ok(());
    }

    println!(
        "Found {} plan(s) older than {older_than_days} days:",
        stale.len()
    );
    for meta in &stale {
        println!(
            "  {} ({}, {})",
            meta.label,
            meta.language.code(),
            meta.created_at.format("%Y-%m-%d")
        );
    }

    if !confirm {
        println!();
        println!("Dry run — pass --confirm to actually delete.");
        return Ok(());
    }

    for meta in &stale {
        cache.remove(&meta.key)?;
        println!("Removed: {}", meta.label);
    }

    println!("Done. Removed {} plan(s).", stale.len());
    Ok(())
}

fn print_summary(plan: &ContentPlan, from_cache: bool) {
    println!();
    println!("=== Content Plan ===");
    if from_cache {
        println!("(loaded from cache)");
    }
    println!("Calendar entries: {}", plan.calendar.len());
    println!("Captions:         {}", plan.captions.len());
    println!("Hashtags:         {}", plan.hashtags.len());
    println!("Story ideas:      {}", plan.story_ideas.len());
    println!("Reel scenarios:   {}", plan.reel_ideas.len());
    println!();
    for (i, entry) in plan.calendar.iter().take(7).enumerate() {
        println!("  {:>2}. [{}] [{}] {}", i + 1, entry.day, entry.post_type, entry.title);
    }
    println!();
}
