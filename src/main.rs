//! Message Board CLI
//!
//! Terminal front end for setting and reading the on-chain message.

use clap::{Parser, Subcommand};
use message_board::activity_log::ActivityLog;
use message_board::contract::RpcConnector;
use message_board::wallet::{LocalWallet, WalletBridge, WalletProvider};
use message_board::{Config, MessageApp, Network, Outcome, Result, RpcConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "message-board")]
#[command(about = "Set and retrieve a message stored in a smart contract")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Network override (mainnet, sepolia, localhost)
    #[arg(short, long, global = true)]
    network: Option<Network>,

    /// Start without a wallet
    #[arg(long, global = true)]
    no_wallet: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a new message
    Send {
        /// Message text
        message: String,
    },

    /// Read the stored message
    Get,

    /// Run the form in the terminal
    Interactive,

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(network) = cli.network {
        config.network = network;
    }

    let outcome = match cli.command {
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            None
        }
        Commands::Send { message } => {
            let app = build_app(&config, cli.no_wallet);
            app.set_draft(message).await;
            let outcome = app.send_message().await;
            print!("{}", app.view().await);
            Some(outcome)
        }
        Commands::Get => {
            let app = build_app(&config, cli.no_wallet);
            let outcome = app.get_message().await;
            match &outcome {
                Outcome::Retrieved(message) => println!("Retrieved Message: {}", message),
                _ => print!("{}", app.view().await),
            }
            Some(outcome)
        }
        Commands::Interactive => {
            let app = Arc::new(build_app(&config, cli.no_wallet));
            run_interactive(app).await?;
            None
        }
    };

    // One-shot commands report a failed operation to the shell
    match outcome {
        Some(outcome) if !outcome.is_success() => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

fn build_app(config: &Config, no_wallet: bool) -> MessageApp {
    let rpc = RpcConfig::from_env(config.network);

    tracing::info!(
        network = config.network.name(),
        chain_id = config.network.chain_id(),
        contract = %config.contract_address,
        "Starting message board"
    );

    let bridge = if no_wallet {
        WalletBridge::disconnected()
    } else {
        match LocalWallet::from_env() {
            Ok(wallet) => {
                tracing::info!(address = %wallet.address(), "Loaded wallet");
                let provider: Arc<dyn WalletProvider> = Arc::new(wallet);
                WalletBridge::new(Some(provider))
            }
            Err(e) => {
                tracing::warn!(error = %e, "No wallet available");
                WalletBridge::disconnected()
            }
        }
    };

    let connector = RpcConnector::new(rpc, config.contract_address, config.confirmations);
    let mut app = MessageApp::new(bridge, Arc::new(connector));
    if let Some(path) = &config.activity_log_path {
        app = app.with_activity_log(ActivityLog::new(path));
    }
    app
}

/// Split an input line into the command and its argument.
///
/// Only the line terminator is stripped, so `type` keeps whitespace in the
/// message verbatim.
fn split_command(line: &str) -> (&str, &str) {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    (command.trim(), rest)
}

const HELP: &str = "commands: type <text> | send | get | show | help | quit";

async fn run_interactive(app: Arc<MessageApp>) -> Result<()> {
    println!("{}", HELP);
    print!("{}", app.view().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = JoinSet::new();

    while let Some(line) = lines.next_line().await? {
        let (command, rest) = split_command(&line);

        match command {
            "type" => {
                app.set_draft(rest).await;
                print!("{}", app.view().await);
            }
            "send" => {
                let app = app.clone();
                in_flight.spawn(async move {
                    match app.send_message().await {
                        Outcome::Busy => println!("Already in progress"),
                        _ => print!("{}", app.view().await),
                    }
                });
            }
            "get" => {
                if !app.snapshot().await.has_submitted {
                    println!("Send a message first");
                    continue;
                }
                let app = app.clone();
                in_flight.spawn(async move {
                    match app.get_message().await {
                        Outcome::Busy => println!("Already in progress"),
                        _ => print!("{}", app.view().await),
                    }
                });
            }
            "show" => print!("{}", app.view().await),
            "quit" | "exit" => break,
            "" => {}
            _ => println!("{}", HELP),
        }

        // Reap finished handlers
        while in_flight.try_join_next().is_some() {}
    }

    if !in_flight.is_empty() {
        println!("Waiting for pending operations...");
    }
    while in_flight.join_next().await.is_some() {}

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_keeps_message_whitespace() {
        assert_eq!(split_command("type hello"), ("type", "hello"));
        assert_eq!(split_command("type   "), ("type", "  "));
        assert_eq!(split_command("type hi  \r"), ("type", "hi  "));
        assert_eq!(split_command("send"), ("send", ""));
        assert_eq!(split_command("get\r"), ("get", ""));
        assert_eq!(split_command(""), ("", ""));
    }
}
