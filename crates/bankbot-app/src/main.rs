//! BankBot application binary - composition root.
//!
//! Ties the BankBot crates together into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the Ollama backend adapter and the session controller
//! 4. Run a line-oriented chat loop on stdin/stdout

mod cli;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use bankbot_chat::{ChatError, Message, OllamaBackend, SessionController};
use bankbot_core::BankBotConfig;

use cli::CliArgs;

const HELP: &str = "Commands: :new  :save  :chats  :open <id>  :quit — anything else is sent to BankBot";

#[tokio::main]
async fn main() -> bankbot_core::Result<()> {
    let args = CliArgs::parse();

    let config_path = args.resolve_config_path();
    let mut config = BankBotConfig::load_or_default(&config_path);
    config.backend.endpoint = args.resolve_endpoint(&config.backend.endpoint);
    config.backend.model = args.resolve_model(&config.backend.model);
    let log_level = args.resolve_log_level(&config.general.log_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!(
        endpoint = %config.backend.endpoint,
        model = %config.backend.model,
        "Starting BankBot"
    );

    let backend = OllamaBackend::new(&config.backend)?;
    let controller = SessionController::new(backend);

    println!("BankBot — AI chatbot for banking queries");
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" => break,
            ":new" => {
                controller.new_chat();
                println!("Started a new chat.");
            }
            ":save" => {
                controller.save_chat();
                println!("Chat saved.");
            }
            ":chats" => {
                let sessions = controller.sessions();
                if sessions.is_empty() {
                    println!("No saved chats.");
                }
                for s in sessions {
                    println!("{}  {}  ({} messages)", s.id, s.title, s.message_count);
                }
            }
            cmd if cmd.starts_with(":open") => {
                open_chat(&controller, cmd.trim_start_matches(":open").trim());
            }
            text => match controller.submit(text).await {
                Ok(Some(reply)) => print_message(&reply),
                Ok(None) => {}
                Err(e) => eprintln!("error: {e}"),
            },
        }
    }

    Ok(())
}

/// Switch to a saved chat and replay its transcript.
fn open_chat<B: bankbot_chat::BankingBackend>(controller: &SessionController<B>, raw_id: &str) {
    let id = match raw_id.parse::<uuid::Uuid>() {
        Ok(id) => id,
        Err(_) => {
            eprintln!("usage: :open <session id>");
            return;
        }
    };
    match controller.select_chat(id) {
        Ok(()) => {
            for message in controller.transcript() {
                print_message(&message);
            }
        }
        // Stale identifiers are reported, never fatal.
        Err(ChatError::SessionNotFound(id)) => eprintln!("no saved chat with id {id}"),
        Err(e) => eprintln!("error: {e}"),
    }
}

fn print_message(message: &Message) {
    println!(
        "[{}] {}: {}",
        message.timestamp,
        message.role.as_str(),
        message.content
    );
}
