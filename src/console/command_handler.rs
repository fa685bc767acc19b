// console/command_handler.rs

use crate::console::Console;
use crate::normalizer::resolve_symbol;
use tracing::info;

/// Handles one console line and returns the text to show, if any.
pub async fn handle_command(command_text: &str, console: &Console) -> Option<String> {
    let text = command_text.trim();
    if text.is_empty() {
        return None;
    }
    info!("Handling command: {}", text);

    let (command, arg) = match text.split_once(char::is_whitespace) {
        Some((c, a)) => (c, Some(a.trim())),
        None => (text, None),
    };

    match command.to_ascii_lowercase().as_str() {
        "help" | "h" | "?" => Some(help_text(console)),
        "refresh" | "r" => {
            console.refresh_notify.notify_one();
            Some("🔄 Refresh requested.".into())
        }
        "list" | "ls" => Some(format!("📋 Symbols: {}", console.config.symbols.join(", "))),
        "uptime" => {
            let uptime = console.start_time.elapsed();
            Some(format!(
                "⏱ Uptime: {:02}:{:02}:{:02}",
                uptime.as_secs() / 3600,
                (uptime.as_secs() % 3600) / 60,
                uptime.as_secs() % 60
            ))
        }
        "quit" | "q" | "exit" => {
            console.shutdown_notify.notify_one();
            Some("👋 Shutting down.".into())
        }
        "symbol" | "s" => match arg {
            Some(sym) => Some(select_symbol(sym, console).await),
            None => Some(format!("📌 Selected: {}", console.selected_symbol().await)),
        },
        _ => Some(select_symbol(text, console).await),
    }
}

async fn select_symbol(input: &str, console: &Console) -> String {
    match resolve_symbol(input, &console.config.symbols) {
        Some(symbol) => {
            *console.selected.lock().await = symbol.to_string();
            console.refresh_notify.notify_one();
            format!("📌 Selected {}", symbol)
        }
        None => format!(
            "❓ Unknown command or symbol '{}'. Type 'help' for the command list.",
            input
        ),
    }
}

fn help_text(console: &Console) -> String {
    format!(
        "📋 Available commands:\n\
         <SYMBOL> | symbol <SYMBOL> — switch asset ({})\n\
         refresh | r — refresh now\n\
         list — selectable symbols\n\
         uptime — time since start\n\
         help — this list\n\
         quit | q — stop the dashboard",
        console.config.symbols.join(", ")
    )
}
