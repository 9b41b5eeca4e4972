use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use serenity_chat::{
    ChatError, ChatRequestClient,
    config::{ClientConfig, ServerConfig, parse_addr},
    services::Responder,
    state::AppState,
};

const DEFAULT_MESSAGE: &str = "I want to sleep";
const FALLBACK_AFFIRMATION: &str = "You are capable of amazing things. Believe in yourself!";

#[derive(Parser, Debug)]
#[command(name = "serenity-chat", version, about = "Send a message to the chat service, or run it")]
struct Cli {
    /// Defaults to `chat` with the default message
    #[command(subcommand)]
    command: Option<Command>,

    /// Base URL of the chat service (overrides CHAT_BASE_URL)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds (overrides CHAT_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Command {
    /// Send one message and print the JSON reply
    Chat {
        #[arg(default_value = DEFAULT_MESSAGE)]
        message: String,
    },
    /// Fetch one daily affirmation
    Affirm,
    /// Run the chat service
    Serve {
        /// Listen address (overrides SERVER_ADDR)
        #[arg(long)]
        addr: Option<String>,
    },
}

impl Cli {
    fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat {
            message: DEFAULT_MESSAGE.to_string(),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command() {
        Command::Serve { addr } => run_server(addr).await,
        Command::Affirm => {
            let client = build_client(cli.endpoint, cli.timeout)?;
            affirm(&client).await;
            Ok(())
        }
        Command::Chat { message } => {
            let client = build_client(cli.endpoint, cli.timeout)?;
            fetch_chat(&client, &message).await;
            Ok(())
        }
    }
}

fn build_client(endpoint: Option<String>, timeout: Option<u64>) -> anyhow::Result<ChatRequestClient> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = endpoint {
        config.base_url = url;
    }
    if let Some(secs) = timeout {
        config.timeout = Duration::from_secs(secs);
    }
    Ok(ChatRequestClient::new(&config)?)
}

// Failures are logged, never propagated.
async fn fetch_chat(client: &ChatRequestClient, message: &str) {
    match client.send_message(message).await {
        Ok(data) => match serde_json::to_string_pretty(&data) {
            Ok(text) => println!("{text}"),
            Err(e) => error!(error = %e, "could not render response"),
        },
        Err(e) => {
            let kind = match &e {
                ChatError::Network(_) => "network",
                ChatError::Parse(_) => "parse",
                ChatError::InvalidEndpoint { .. } => "endpoint",
            };
            error!(kind, error = %e, url = %client.chat_url(), "Error fetching response");
        }
    }
}

async fn affirm(client: &ChatRequestClient) {
    let text = match client.fetch_affirmation().await {
        Ok(Some(text)) => text,
        Ok(None) => {
            warn!("service returned no affirmation, using fallback");
            FALLBACK_AFFIRMATION.to_string()
        }
        Err(e) => {
            warn!(error = %e, "could not fetch affirmation, using fallback");
            FALLBACK_AFFIRMATION.to_string()
        }
    };
    println!("{text}");
}

async fn run_server(addr: Option<String>) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env()?;
    if let Some(raw) = addr {
        config.addr = parse_addr("--addr", &raw)?;
    }

    let responder = Responder::from_config(config.completions)?;
    let state = Arc::new(AppState::new(responder));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    info!(
        addr = %config.addr,
        responder = state.responder.name(),
        "chat service listening"
    );
    serenity_chat::serve(listener, state).await?;
    Ok(())
}
