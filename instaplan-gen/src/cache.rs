//! Content-addressed plan cache.
//!
//! A generated plan is keyed by the blake3 hash of the canonical JSON of
//! (brief, language, model): identical briefs reuse the cached plan instead
//! of paying for regeneration. Each entry is a pair of files under the cache
//! dir — `<key>.json` (the plan) and `<key>.meta.json` (bookkeeping).
//! Corrupt or missing entries read as cache misses, never as errors.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use instaplan_core::brief::ContentBrief;
use instaplan_core::i18n::Language;
use instaplan_core::plan::ContentPlan;

use crate::error::GenError;

/// Bookkeeping record stored next to each cached plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMeta {
    pub key: String,
    /// Short human label: the brief topic.
    pub label: String,
    pub language: Language,
    pub model: String,
    pub created_at: NaiveDateTime,
}

pub struct PlanCache {
    dir: PathBuf,
}

impl PlanCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default cache location: `<config dir>/instaplan/plans`.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("instaplan")
            .join("plans")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Deterministic cache key for a generation request.
    pub fn key_for(brief: &ContentBrief, lang: Language, model: &str) -> String {
        #[derive(Serialize)]
        struct KeyInput<'a> {
            brief: &'a ContentBrief,
            language: Language,
            model: &'a str,
        }
        let json = serde_json::to_string(&KeyInput {
            brief,
            language: lang,
            model,
        })
        .expect("brief serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }

    pub fn lookup(&self, key: &str) -> Option<ContentPlan> {
        let content = std::fs::read_to_string(self.plan_path(key)).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn store(
        &self,
        key: &str,
        brief: &ContentBrief,
        lang: Language,
        model: &str,
        plan: &ContentPlan,
    ) -> Result<(), GenError> {
        std::fs::create_dir_all(&self.dir)?;
        let meta = CacheMeta {
            key: key.to_string(),
            label: brief.topic.trim().to_string(),
            language: lang,
            model: model.to_string(),
            created_at: chrono::Local::now().naive_local(),
        };
        let plan_json = serde_json::to_string_pretty(plan)
            .map_err(|e| GenError::Cache(format!("plan serialization failed: {e}")))?;
        let meta_json = serde_json::to_string_pretty(&meta)
            .map_err(|e| GenError::Cache(format!("meta serialization failed: {e}")))?;
        std::fs::write(self.plan_path(key), plan_json)?;
        std::fs::write(self.meta_path(key), meta_json)?;
        Ok(())
    }

    /// All readable meta records, newest first. Unreadable entries are
    /// skipped.
    pub fn entries(&self) -> Vec<CacheMeta> {
        let mut metas: Vec<CacheMeta> = Vec::new();
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return metas;
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if !name.ends_with(".meta.json") {
                continue;
            }
            if let Ok(content) = std::fs::read_to_string(entry.path()) {
                if let Ok(meta) = serde_json::from_str::<CacheMeta>(&content) {
                    metas.push(meta);
                }
            }
        }
        metas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        metas
    }

    /// Entries created before `cutoff`.
    pub fn stale(&self, cutoff: NaiveDateTime) -> Vec<CacheMeta> {
        self.entries()
            .into_iter()
            .filter(|m| m.created_at < cutoff)
            .collect()
    }

    /// Remove one entry (both files). Missing files are fine.
    pub fn remove(&self, key: &str) -> Result<(), GenError> {
        for path in [self.plan_path(key), self.meta_path(key)] {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn plan_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.meta.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> ContentPlan {
        ContentPlan {
            calendar: vec![],
            captions: vec![],
            hashtags: vec!["skincare".into()],
            story_ideas: vec!["BTS".into()],
            reel_ideas: vec![],
        }
    }

    #[test]
    fn key_is_deterministic_and_input_sensitive() {
        let brief = ContentBrief {
            topic: "skincare".into(),
            ..ContentBrief::default()
        };
        let a = PlanCache::key_for(&brief, Language::Fa, "model-a");
        let b = PlanCache::key_for(&brief, Language::Fa, "model-a");
        assert_eq!(a, b);
        assert_ne!(a, PlanCache::key_for(&brief, Language::En, "model-a"));
        assert_ne!(a, PlanCache::key_for(&brief, Language::Fa, "model-b"));

        let mut other = brief.clone();
        other.age_range = other.age_range.nudge_hi(-1, instaplan_core::range::RangeBounds::AGE);
        assert_ne!(a, PlanCache::key_for(&other, Language::Fa, "model-a"));
    }

    #[test]
    fn store_then_lookup_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PlanCache::new(dir.path());
        let brief = ContentBrief {
            topic: "skincare".into(),
            ..ContentBrief::default()
        };
        let key = PlanCache::key_for(&brief, Language::En, "m");

        assert!(cache.lookup(&key).is_none());
        cache.store(&key, &brief, Language::En, "m", &sample_plan()).unwrap();
        assert_eq!(cache.lookup(&key).unwrap(), sample_plan());

        let entries = cache.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "skincare");
    }

    #[test]
    fn corrupt_entry_reads_as_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PlanCache::new(dir.path());
        std::fs::write(dir.path().join("deadbeef.json"), "{{ nope").unwrap();
        assert!(cache.lookup("deadbeef").is_none());
    }

    #[test]
    fn remove_clears_entry_and_tolerates_missing() {
        let dir = tempfile::tempdir().unwrap();
        let cache = PlanCache::new(dir.path());
        let brief = ContentBrief::default();
        let key = PlanCache::key_for(&brief, Language::Fa, "m");
        cache.store(&key, &brief, Language::Fa, "m", &sample_plan()).unwrap();

        cache.remove(&key).unwrap();
        assert!(cache.lookup(&key).is_none());
        cache.remove(&key).unwrap(); // second remove is a no-op
    }
}
