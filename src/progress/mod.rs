//! Learner progress tracking
//!
//! This module provides:
//! - The persisted progress record (modules, lessons, exercises,
//!   achievements, aggregate statistics)
//! - The progress store with its mutation operations and unlocking rules
//! - The achievement catalog and its derivation sweep

pub mod awards;
pub mod models;
pub mod store;

pub use models::*;
pub use store::{ProgressError, ProgressStore, STORAGE_KEY};
