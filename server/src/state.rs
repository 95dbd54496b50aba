use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use menno_shared::FeatureStore;

#[derive(Clone)]
pub struct AppState {
    /// Both feature collections; loaded before the listener binds, never mutated.
    pub store: Arc<FeatureStore>,
    pub loaded_at: DateTime<Utc>,
    /// Directory the store was loaded from; served as-is under `/data`.
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(store: FeatureStore, data_dir: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(store),
            loaded_at: Utc::now(),
            data_dir,
            static_dir,
        }
    }
}
