use aethelgard_terminal::config::{config_path, load_config, AppConfig};
use aethelgard_terminal::console::render::render_frame;
use aethelgard_terminal::console::Console;
use aethelgard_terminal::dashboard::Dashboard;
use aethelgard_terminal::fetcher::YahooProvider;
use aethelgard_terminal::logging::init_logging;
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tracing::{error, info};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[tokio::main]
async fn main() {
    init_logging();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        error!("😱 Panic occurred: {}", panic_info);
    }));

    let path = config_path();
    let config: Arc<AppConfig> = match load_config(&path) {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error ({}): {}", path, e);
            return;
        }
    };

    let provider = match YahooProvider::new(&config.provider) {
        Ok(p) => Arc::new(p),
        Err(e) => {
            error!("Failed to create market data client: {}", e);
            return;
        }
    };

    let dashboard = Dashboard::new(provider, config.clone());
    let console = Arc::new(Console::new(config.clone()));

    // Listen for symbol switches and manual refreshes on stdin
    Console::spawn_listener(console.clone());

    info!(
        "Aethelgard terminal started: {} symbols, refresh every {}s",
        config.symbols.len(),
        config.refresh_interval_seconds
    );

    loop {
        let symbol = console.selected_symbol().await;
        let frame = dashboard.refresh(&symbol).await;
        print!("{}{}", CLEAR_SCREEN, render_frame(&frame, dashboard.config()));
        println!("\n(type 'help' for commands)");

        tokio::select! {
            _ = sleep(Duration::from_secs(config.refresh_interval_seconds)) => {
                info!("Timer triggered.");
            }
            _ = console.refresh_notify.notified() => {
                info!("Manual refresh triggered.");
            }
            _ = console.shutdown_notify.notified() => {
                info!("Shutdown requested.");
                break;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Ctrl-C received.");
                break;
            }
        }
    }
}
