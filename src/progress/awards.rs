//! Course achievements
//!
//! The six badges the dashboard shows, each with the rule that earns it.
//! Rules are derived from the progress record alone; granting goes through
//! the store's idempotent `add_achievement`, so a badge keeps its original
//! `earned_at` no matter how often the sweep runs.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::models::ProgressRecord;
use super::store::ProgressStore;

/// A badge and the rule that earns it
pub struct Award {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    earned: fn(&ProgressRecord) -> bool,
}

impl Award {
    /// Whether the record satisfies this award's rule right now
    pub fn is_earned(&self, record: &ProgressRecord) -> bool {
        (self.earned)(record)
    }
}

pub const AWARDS: &[Award] = &[
    Award {
        id: "first-steps",
        title: "First Steps",
        description: "Complete your first lesson",
        icon: "\u{1F331}",
        earned: any_lesson_completed,
    },
    Award {
        id: "module-master",
        title: "Module Master",
        description: "Complete any module",
        icon: "\u{1F393}",
        earned: |record| record.completed_modules() >= 1,
    },
    Award {
        id: "quick-learner",
        title: "Quick Learner",
        description: "Complete 3 lessons in one day",
        icon: "\u{26A1}",
        earned: |record| most_lessons_in_one_day(record) >= 3,
    },
    Award {
        id: "perfect-score",
        title: "Perfect Score",
        description: "Get 100% on any exercise set",
        icon: "\u{1F31F}",
        earned: any_perfect_category,
    },
    Award {
        id: "halfway-there",
        title: "Halfway There",
        description: "Complete 4 modules",
        icon: "\u{1F3D4}\u{FE0F}",
        earned: |record| record.completed_modules() >= 4,
    },
    Award {
        id: "biology-expert",
        title: "Biology Expert",
        description: "Complete all 8 modules",
        icon: "\u{1F9EC}",
        earned: |record| record.completed_modules() >= 8,
    },
];

/// Look up an award by id
pub fn get(id: &str) -> Option<&'static Award> {
    AWARDS.iter().find(|a| a.id == id)
}

/// Grant every award whose rule the record now satisfies and which has not
/// been recorded yet. Returns the ids granted this sweep.
pub fn grant_earned(store: &mut ProgressStore) -> Vec<&'static str> {
    let mut granted = Vec::new();
    for award in AWARDS {
        if store.record().has_achievement(award.id) {
            continue;
        }
        if award.is_earned(store.record()) {
            store.add_achievement(award.id);
            granted.push(award.id);
        }
    }
    granted
}

fn any_lesson_completed(record: &ProgressRecord) -> bool {
    record
        .modules
        .values()
        .any(|m| m.lessons.values().any(|l| l.completed))
}

/// Most lessons completed on a single calendar day (UTC), across the course
fn most_lessons_in_one_day(record: &ProgressRecord) -> usize {
    let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();
    for module in record.modules.values() {
        for lesson in module.lessons.values() {
            if !lesson.completed {
                continue;
            }
            if let Some(completed_at) = lesson.completed_at {
                *per_day.entry(completed_at.date_naive()).or_insert(0) += 1;
            }
        }
    }
    per_day.values().copied().max().unwrap_or(0)
}

fn any_perfect_category(record: &ProgressRecord) -> bool {
    record.modules.values().any(|m| {
        m.exercises
            .values()
            .any(|e| e.attempted > 0 && e.correct == e.attempted)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::MemoryStore;
    use crate::progress::models::{CourseOutline, LessonProgress, ModuleProgress};
    use chrono::{Duration, TimeZone, Utc};

    fn test_store() -> ProgressStore {
        ProgressStore::open(Box::new(MemoryStore::new()), CourseOutline::default())
    }

    fn record_with_lessons(offsets_hours: &[i64]) -> ProgressRecord {
        let base = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        let mut module = ModuleProgress::default();
        for (i, offset) in offsets_hours.iter().enumerate() {
            module.lessons.insert(
                format!("lesson-1-{}", i + 1),
                LessonProgress {
                    completed: true,
                    completed_at: Some(base + Duration::hours(*offset)),
                },
            );
        }
        let mut record = ProgressRecord::default();
        record.modules.insert("module-1".to_string(), module);
        record
    }

    #[test]
    fn test_first_steps_needs_a_completed_lesson() {
        let award = get("first-steps").unwrap();
        assert!(!award.is_earned(&ProgressRecord::default()));
        assert!(award.is_earned(&record_with_lessons(&[0])));
    }

    #[test]
    fn test_quick_learner_counts_per_day() {
        let award = get("quick-learner").unwrap();

        // Three lessons inside one day
        assert!(award.is_earned(&record_with_lessons(&[0, 2, 5])));

        // Three lessons spread over two days
        assert!(!award.is_earned(&record_with_lessons(&[0, 2, 30])));

        // Two lessons are not enough
        assert!(!award.is_earned(&record_with_lessons(&[0, 1])));
    }

    #[test]
    fn test_perfect_score_requires_attempts() {
        let award = get("perfect-score").unwrap();
        let mut store = test_store();

        store
            .submit_exercise_score("module-1", "conceptual", 0, 0)
            .unwrap();
        assert!(!award.is_earned(store.record()));

        store
            .submit_exercise_score("module-1", "conceptual", 5, 4)
            .unwrap();
        assert!(!award.is_earned(store.record()));

        store
            .submit_exercise_score("module-1", "applied", 3, 3)
            .unwrap();
        assert!(award.is_earned(store.record()));
    }

    #[test]
    fn test_module_count_thresholds() {
        let mut store = test_store();

        for i in 1..=8 {
            store.mark_module_complete(&format!("module-{}", i));
            let completed = store.record().completed_modules();
            assert_eq!(
                get("module-master").unwrap().is_earned(store.record()),
                completed >= 1
            );
            assert_eq!(
                get("halfway-there").unwrap().is_earned(store.record()),
                completed >= 4
            );
            assert_eq!(
                get("biology-expert").unwrap().is_earned(store.record()),
                completed >= 8
            );
        }
    }

    #[test]
    fn test_grant_earned_is_idempotent() {
        let mut store = test_store();
        store.mark_lesson_complete("module-1", "lesson-1-1");
        store.mark_module_complete("module-1");

        let granted = grant_earned(&mut store);
        assert_eq!(granted, vec!["first-steps", "module-master"]);
        let earned_at = store.record().achievements[0].earned_at;

        let again = grant_earned(&mut store);
        assert!(again.is_empty());
        assert_eq!(store.record().achievements.len(), 2);
        assert_eq!(store.record().achievements[0].earned_at, earned_at);
    }

    #[test]
    fn test_award_ids_are_unique() {
        for (i, award) in AWARDS.iter().enumerate() {
            assert!(
                AWARDS[i + 1..].iter().all(|other| other.id != award.id),
                "duplicate award id {}",
                award.id
            );
        }
    }
}
