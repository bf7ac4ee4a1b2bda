//! Learner-state library for the Logarithms in Biology course.
//!
//! Two stores hold everything the app remembers about a learner: progress
//! through the modules ([`progress::ProgressStore`]) and presentation
//! settings ([`settings::SettingsStore`]). Both keep their state in memory
//! and persist whole JSON records through the [`persist::KeyValue`] seam;
//! a failed write is logged and never surfaces to the caller.

pub mod catalog;
pub mod persist;
pub mod progress;
pub mod settings;

pub use catalog::Catalog;
pub use persist::{FileStore, KeyValue, MemoryStore, PersistError};
pub use progress::{ProgressError, ProgressStore};
pub use settings::{Settings, SettingsStore, SystemPreferences};

/// Both stores wired over one data directory.
pub struct AppState {
    pub progress: ProgressStore,
    pub settings: SettingsStore,
}

impl AppState {
    /// Open both stores backed by files under `data_dir`.
    pub fn open(data_dir: std::path::PathBuf) -> Self {
        let store = FileStore::new(data_dir);
        AppState {
            progress: ProgressStore::open(Box::new(store.clone()), Catalog::builtin().outline()),
            settings: SettingsStore::open(Box::new(store)),
        }
    }

    /// Open both stores in the platform-default data directory.
    pub fn open_default() -> persist::Result<Self> {
        let store = FileStore::open_default()?;
        Ok(AppState {
            progress: ProgressStore::open(Box::new(store.clone()), Catalog::builtin().outline()),
            settings: SettingsStore::open(Box::new(store)),
        })
    }
}
