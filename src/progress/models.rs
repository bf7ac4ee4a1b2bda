//! Data models for learner progress
//!
//! Field names and enum values match the JSON the course app has always
//! written (camelCase keys, snake_case statuses), so records produced by
//! any earlier version load unchanged. Every field defaults, which also
//! covers records written before a field existed.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Where a module sits in the learner's journey.
///
/// Transitions only move forward: `Locked` can become `Unlocked` or
/// `InProgress`, and `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    /// Prerequisites not met and no explicit unlock yet
    Locked,
    /// Reachable but not started
    Unlocked,
    /// At least one lesson or exercise touched
    InProgress,
    /// Marked complete; never reverts
    Completed,
}

impl Default for ModuleStatus {
    fn default() -> Self {
        Self::Locked
    }
}

/// Completion state of a single lesson within a module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonProgress {
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Accumulated results for one exercise category of one module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseProgress {
    #[serde(default)]
    pub attempted: u32,
    #[serde(default)]
    pub correct: u32,
    /// `correct / attempted`, recomputed on every submission; 0.0 while
    /// nothing has been attempted
    #[serde(default, deserialize_with = "nullable_score")]
    pub score: f64,
}

/// Records written before the divide-by-zero guard can hold
/// `"score": null`; decode that as 0.0 instead of rejecting the record.
fn nullable_score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Everything tracked for one module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleProgress {
    #[serde(default)]
    pub status: ModuleStatus,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Reserved; per-module time is not tracked yet
    #[serde(default)]
    pub time_spent: u64,
    /// Lesson id -> completion state. Any string key is accepted; the
    /// catalog is not consulted here.
    #[serde(default)]
    pub lessons: HashMap<String, LessonProgress>,
    /// Exercise category id -> accumulated results
    #[serde(default)]
    pub exercises: HashMap<String, ExerciseProgress>,
}

impl ModuleProgress {
    /// Empty progress with the given status (the synthesized default shape)
    pub fn with_status(status: ModuleStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Progress for a module first touched at `now`
    pub(crate) fn started(now: DateTime<Utc>) -> Self {
        Self {
            status: ModuleStatus::InProgress,
            started_at: Some(now),
            ..Self::default()
        }
    }

    /// Number of lessons marked complete
    pub fn lessons_completed(&self) -> usize {
        self.lessons.values().filter(|l| l.completed).count()
    }
}

/// A badge the learner has earned, identified by a stable string id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub earned_at: DateTime<Utc>,
}

/// Aggregate counters across the whole course
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Reserved; time tracking is not wired up yet
    #[serde(default)]
    pub total_time_spent: u64,
    #[serde(default)]
    pub total_exercises_completed: u64,
    #[serde(default)]
    pub total_exercises_correct: u64,
    /// Reserved for streak tracking
    #[serde(default)]
    pub streak_days: u32,
    /// Reserved for streak tracking
    #[serde(default)]
    pub longest_streak: u32,
}

/// The learner's whole persisted record, one instance per learner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Set once, on the first mutation ever
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    /// Updated on every mutation
    #[serde(default)]
    pub last_active_at: Option<DateTime<Utc>>,
    /// Module id -> progress; an absent key means "not yet touched"
    #[serde(default)]
    pub modules: HashMap<String, ModuleProgress>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub statistics: Statistics,
}

impl ProgressRecord {
    pub fn has_achievement(&self, achievement_id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == achievement_id)
    }

    /// Modules with stored status `Completed`
    pub fn completed_modules(&self) -> usize {
        self.modules
            .values()
            .filter(|m| m.status == ModuleStatus::Completed)
            .count()
    }
}

/// Course-wide completion summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallProgress {
    pub completed_modules: usize,
    pub total_modules: usize,
    /// `round(100 * completed / total)`
    pub percentage: u32,
}

/// The little the store needs to know about the course: which module is
/// open from the start, and how many modules the overall percentage is
/// computed against. Derived from the catalog in the app, supplied
/// directly in tests.
#[derive(Debug, Clone)]
pub struct CourseOutline {
    pub first_module: String,
    pub total_modules: usize,
}

impl Default for CourseOutline {
    fn default() -> Self {
        Self {
            first_module: "module-1".to_string(),
            total_modules: 8,
        }
    }
}
