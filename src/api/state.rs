//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{ApiConfig, Config, LayoutConfig};
use crate::notes::NoteRegistry;
use crate::scene::HomeScene;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Home scene over the read-only note registry
    pub scene: Arc<HomeScene>,
    /// Responsive layout settings
    pub layout: LayoutConfig,
    /// Site name used in page titles
    pub site_title: String,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state from a loaded registry and the full configuration
    pub fn new(registry: Arc<NoteRegistry>, config: &Config) -> Self {
        Self {
            scene: Arc::new(HomeScene::new(registry, config.links.templates())),
            layout: config.layout.clone(),
            site_title: config.site.title.clone(),
            config: Arc::new(config.api.clone()),
            start_time: Instant::now(),
        }
    }

    pub fn registry(&self) -> &NoteRegistry {
        self.scene.registry()
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
