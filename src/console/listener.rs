// console/listener.rs

use crate::console::Console;
use crate::console::command_handler::handle_command;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

/// Reads commands from stdin line by line until EOF.
pub async fn listen_for_commands(console: &Console) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if let Some(reply) = handle_command(&line, console).await {
                    println!("{}", reply);
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Console read error: {:?}", e);
                break;
            }
        }
    }
}
