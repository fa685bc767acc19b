pub mod chart;
pub mod command_handler;
pub mod listener;
pub mod render;

use crate::config::AppConfig;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, Notify};

/// Shared state between the refresh loop and the stdin command listener.
pub struct Console {
    pub config: Arc<AppConfig>,
    pub selected: Mutex<String>,
    pub refresh_notify: Arc<Notify>,
    pub shutdown_notify: Arc<Notify>,
    pub start_time: Instant,
}

impl Console {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            selected: Mutex::new(config.default_symbol.clone()),
            config,
            refresh_notify: Arc::new(Notify::new()),
            shutdown_notify: Arc::new(Notify::new()),
            start_time: Instant::now(),
        }
    }

    pub async fn selected_symbol(&self) -> String {
        self.selected.lock().await.clone()
    }

    pub fn spawn_listener(console: Arc<Console>) {
        tokio::spawn(async move {
            tracing::info!("▶️ Starting console listener...");
            listener::listen_for_commands(&console).await;
            tracing::info!("🛑 Console listener ended.");
        });
    }
}
