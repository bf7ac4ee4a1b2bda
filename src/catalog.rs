//! Read-only course catalog
//!
//! The module definitions (order, titles, prerequisites, lessons, exercise
//! counts) ship with the binary as embedded JSON. The stores never consult
//! the catalog — they accept any string key — so this is purely boundary
//! material: the presentation layer uses it to know what exists, in what
//! order, and which prerequisites gate what.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::progress::CourseOutline;

const MODULES_JSON: &str = include_str!("../assets/modules.json");

/// The exercise categories every module offers
pub const EXERCISE_CATEGORIES: [&str; 4] = ["conceptual", "computational", "applied", "challenge"];

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonDef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDef {
    pub id: String,
    pub order: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    /// Module ids that must all be completed before this one unlocks
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub lessons: Vec<LessonDef>,
    /// Exercise category -> number of exercises in that set
    #[serde(default)]
    pub exercise_counts: HashMap<String, u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    modules: Vec<ModuleDef>,
}

impl Catalog {
    /// The catalog embedded in the binary, parsed once
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let mut catalog: Catalog = serde_json::from_str(MODULES_JSON)
                .expect("embedded module catalog is valid JSON");
            catalog.modules.sort_by_key(|m| m.order);
            catalog
        })
    }

    /// All modules, in course order
    pub fn modules(&self) -> &[ModuleDef] {
        &self.modules
    }

    pub fn get(&self, module_id: &str) -> Option<&ModuleDef> {
        self.modules.iter().find(|m| m.id == module_id)
    }

    /// The designated first module (lowest order); the one module that is
    /// unlocked from the start. Panics on an empty catalog.
    pub fn first_module(&self) -> &ModuleDef {
        self.modules
            .first()
            .expect("catalog has at least one module")
    }

    pub fn total_modules(&self) -> usize {
        self.modules.len()
    }

    /// The course shape the progress store needs
    pub fn outline(&self) -> CourseOutline {
        CourseOutline {
            first_module: self.first_module().id.clone(),
            total_modules: self.total_modules(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.total_modules(), 8);
        assert_eq!(catalog.first_module().id, "module-1");
    }

    #[test]
    fn test_modules_are_in_course_order() {
        let catalog = Catalog::builtin();
        let orders: Vec<u32> = catalog.modules().iter().map(|m| m.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_prerequisites_resolve() {
        let catalog = Catalog::builtin();
        for module in catalog.modules() {
            for prereq in &module.prerequisites {
                assert!(
                    catalog.get(prereq).is_some(),
                    "module {} names unknown prerequisite {}",
                    module.id,
                    prereq
                );
            }
        }
        // Only the first module starts without prerequisites by design
        assert!(catalog.first_module().prerequisites.is_empty());
    }

    #[test]
    fn test_every_module_has_lessons_and_exercise_counts() {
        let catalog = Catalog::builtin();
        for module in catalog.modules() {
            assert!(!module.lessons.is_empty(), "{} has no lessons", module.id);
            for category in EXERCISE_CATEGORIES {
                assert!(
                    module.exercise_counts.contains_key(category),
                    "{} is missing the {} exercise count",
                    module.id,
                    category
                );
            }
        }
    }

    #[test]
    fn test_outline_matches_catalog() {
        let outline = Catalog::builtin().outline();
        assert_eq!(outline.first_module, "module-1");
        assert_eq!(outline.total_modules, 8);
    }

    #[test]
    #[should_panic(expected = "catalog has at least one module")]
    fn test_empty_catalog_has_no_first_module() {
        let catalog: Catalog = serde_json::from_str(r#"{ "modules": [] }"#).unwrap();
        catalog.first_module();
    }
}
