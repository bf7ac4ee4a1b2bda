//! The progress store: single source of truth for learner progress
//!
//! Every mutation stamps `last_active_at` (and `started_at` once), applies
//! its change in memory, then persists the whole record fire-and-forget. A
//! failed write is logged and otherwise ignored; the in-memory record stays
//! authoritative for the rest of the session.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::persist::KeyValue;

use super::models::{
    Achievement, CourseOutline, ExerciseProgress, LessonProgress, ModuleProgress, ModuleStatus,
    OverallProgress, ProgressRecord,
};

/// Persistence key for the progress record
pub const STORAGE_KEY: &str = "logarithms-biology-progress";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProgressError {
    #[error("invalid score: correct ({correct}) exceeds attempted ({attempted})")]
    InvalidScore { attempted: u32, correct: u32 },
}

pub struct ProgressStore {
    record: ProgressRecord,
    outline: CourseOutline,
    persist: Box<dyn KeyValue>,
}

impl ProgressStore {
    /// Open the store, loading the persisted record if one exists.
    ///
    /// A missing, unreadable or unparsable record falls back to the default
    /// (empty) record with a logged warning; opening never fails.
    pub fn open(persist: Box<dyn KeyValue>, outline: CourseOutline) -> Self {
        let record = match persist.read(STORAGE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!("stored progress is unreadable, starting fresh: {}", err);
                ProgressRecord::default()
            }),
            Ok(None) => ProgressRecord::default(),
            Err(err) => {
                log::warn!("could not read stored progress, starting fresh: {}", err);
                ProgressRecord::default()
            }
        };

        Self {
            record,
            outline,
            persist,
        }
    }

    /// The current record, for read-only consumers
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    // ===== Read accessors =====

    /// Progress for a module, or the synthesized default when untouched:
    /// the course's first module starts `Unlocked`, everything else
    /// `Locked`. Never mutates state.
    pub fn module_progress(&self, module_id: &str) -> ModuleProgress {
        self.record
            .modules
            .get(module_id)
            .cloned()
            .unwrap_or_else(|| ModuleProgress::with_status(self.default_status(module_id)))
    }

    /// Whether a module is reachable: it is the first module, its stored
    /// status is `Unlocked`/`Completed`, or every prerequisite has stored
    /// status `Completed`. Pure; recomputed from current state on each call.
    pub fn is_module_unlocked(&self, module_id: &str, prerequisites: &[String]) -> bool {
        if module_id == self.outline.first_module {
            return true;
        }

        if let Some(module) = self.record.modules.get(module_id) {
            if matches!(
                module.status,
                ModuleStatus::Unlocked | ModuleStatus::Completed
            ) {
                return true;
            }
        }

        prerequisites.iter().all(|prereq| {
            self.record
                .modules
                .get(prereq)
                .map(|m| m.status == ModuleStatus::Completed)
                .unwrap_or(false)
        })
    }

    /// Course-wide completion summary, counted against the catalog size
    pub fn overall_progress(&self) -> OverallProgress {
        let completed_modules = self.record.completed_modules();
        let total_modules = self.outline.total_modules;
        let percentage = if total_modules == 0 {
            0
        } else {
            (100.0 * completed_modules as f64 / total_modules as f64).round() as u32
        };

        OverallProgress {
            completed_modules,
            total_modules,
            percentage,
        }
    }

    /// Lessons completed in a module, with the percentage of `lesson_count`
    /// that represents (0 when the module has no lessons)
    pub fn lesson_completion(&self, module_id: &str, lesson_count: usize) -> (usize, u32) {
        let completed = self
            .record
            .modules
            .get(module_id)
            .map(|m| m.lessons_completed())
            .unwrap_or(0);
        let percentage = if lesson_count == 0 {
            0
        } else {
            (100.0 * completed as f64 / lesson_count as f64).round() as u32
        };
        (completed, percentage)
    }

    // ===== Mutations =====

    /// Record activity without changing anything else
    pub fn touch(&mut self) {
        self.bump_activity(Utc::now());
        self.save();
    }

    /// Mark one lesson of a module complete.
    ///
    /// Creates the module's progress (status `InProgress`) if absent and
    /// promotes a `Locked` module to `InProgress`; other statuses are left
    /// alone. Re-completing a lesson refreshes its timestamp
    /// (last-write-wins) but is otherwise idempotent.
    pub fn mark_lesson_complete(&mut self, module_id: &str, lesson_id: &str) {
        let now = Utc::now();
        self.bump_activity(now);

        let module = self
            .record
            .modules
            .entry(module_id.to_string())
            .or_insert_with(|| ModuleProgress::started(now));

        if module.status == ModuleStatus::Locked {
            module.status = ModuleStatus::InProgress;
        }
        module.started_at.get_or_insert(now);
        module.lessons.insert(
            lesson_id.to_string(),
            LessonProgress {
                completed: true,
                completed_at: Some(now),
            },
        );

        self.save();
    }

    /// Accumulate an exercise set result for one category of one module.
    ///
    /// Counts add to whatever was already recorded, clamping at `u32::MAX`;
    /// the category score is recomputed from the running totals. Rejects
    /// `correct > attempted` without touching state. (`attempted`/`correct`
    /// are unsigned, so negative counts are unrepresentable.)
    pub fn submit_exercise_score(
        &mut self,
        module_id: &str,
        category: &str,
        attempted: u32,
        correct: u32,
    ) -> Result<(), ProgressError> {
        if correct > attempted {
            return Err(ProgressError::InvalidScore { attempted, correct });
        }

        let now = Utc::now();
        self.bump_activity(now);

        let module = self
            .record
            .modules
            .entry(module_id.to_string())
            .or_insert_with(|| ModuleProgress::started(now));

        let entry = module
            .exercises
            .entry(category.to_string())
            .or_insert_with(ExerciseProgress::default);
        entry.attempted = entry.attempted.saturating_add(attempted);
        entry.correct = entry.correct.saturating_add(correct);
        entry.score = if entry.attempted == 0 {
            0.0
        } else {
            f64::from(entry.correct) / f64::from(entry.attempted)
        };

        self.record.statistics.total_exercises_completed += u64::from(attempted);
        self.record.statistics.total_exercises_correct += u64::from(correct);

        self.save();
        Ok(())
    }

    /// Mark a module complete. The status is forced to `Completed` from any
    /// prior state; `completed_at` keeps the first completion time.
    pub fn mark_module_complete(&mut self, module_id: &str) {
        let now = Utc::now();
        self.bump_activity(now);

        let module = self
            .record
            .modules
            .entry(module_id.to_string())
            .or_insert_with(ModuleProgress::default);
        module.status = ModuleStatus::Completed;
        module.completed_at.get_or_insert(now);

        self.save();
    }

    /// Unlock a module. No-op when it is already `Unlocked` or `Completed`;
    /// nothing changes on that path, not even `lastActiveAt`.
    pub fn unlock_module(&mut self, module_id: &str) {
        let current = self.record.modules.get(module_id).map(|m| m.status);
        if matches!(
            current,
            Some(ModuleStatus::Unlocked) | Some(ModuleStatus::Completed)
        ) {
            return;
        }

        let now = Utc::now();
        self.bump_activity(now);

        let module = self
            .record
            .modules
            .entry(module_id.to_string())
            .or_insert_with(ModuleProgress::default);
        module.status = ModuleStatus::Unlocked;

        self.save();
    }

    /// Record an achievement. Inserting an id that is already present is a
    /// no-op, so the original `earned_at` always stands.
    pub fn add_achievement(&mut self, achievement_id: &str) {
        if self.record.has_achievement(achievement_id) {
            return;
        }

        let now = Utc::now();
        self.bump_activity(now);
        self.record.achievements.push(Achievement {
            id: achievement_id.to_string(),
            earned_at: now,
        });

        self.save();
    }

    /// Reset the whole record to defaults and drop the persisted copy
    pub fn clear(&mut self) {
        self.record = ProgressRecord::default();
        if let Err(err) = self.persist.remove(STORAGE_KEY) {
            log::warn!("could not remove persisted progress: {}", err);
        }
    }

    // ===== Internals =====

    fn default_status(&self, module_id: &str) -> ModuleStatus {
        if module_id == self.outline.first_module {
            ModuleStatus::Unlocked
        } else {
            ModuleStatus::Locked
        }
    }

    fn bump_activity(&mut self, now: DateTime<Utc>) {
        self.record.last_active_at = Some(now);
        self.record.started_at.get_or_insert(now);
    }

    fn save(&self) {
        let json = match serde_json::to_string_pretty(&self.record) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("could not serialize progress record: {}", err);
                return;
            }
        };
        if let Err(err) = self.persist.write(STORAGE_KEY, &json) {
            log::warn!(
                "could not persist progress, keeping in-memory state: {}",
                err
            );
        }
    }
}
