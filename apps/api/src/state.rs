use std::sync::Arc;

use crate::config::Config;
use crate::records::RecordCache;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Lazily loaded record file for the random card endpoint.
    pub records: Arc<RecordCache>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let records = Arc::new(RecordCache::new(config.records_path.clone()));
        Self { config, records }
    }
}
