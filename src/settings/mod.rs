//! Display and accessibility settings

pub mod models;
pub mod store;

pub use models::*;
pub use store::{SettingsStore, STORAGE_KEY};
