use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing::info;
use tracing_subscriber::EnvFilter;

use seek_core::ClientConfig;
use seek_interaction::{HttpAnswerBackend, InteractionResult, QueryController};

mod command;
mod helper;
mod view;

use command::Command;
use helper::CliHelper;

#[derive(Parser)]
#[command(name = "seek")]
#[command(about = "SEEK - ask an LLM-based RAG backend from the terminal", long_about = None)]
struct Cli {
    /// Base URL of the backend (queries are posted to <URL>/query)
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path to a config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn init_tracing() {
    // stdout belongs to the REPL; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file first, then command-line overrides, then validation.
fn resolve_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config =
        ClientConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(url) = &cli.backend_url {
        config = config.with_backend_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        config = config.with_request_timeout_secs(secs);
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

/// Runs one parsed line against the controller and renders the outcome.
async fn dispatch(controller: &mut QueryController, command: Command) {
    match command {
        Command::Quit => {}
        Command::Help => print_lines(view::help()),
        Command::History => print_lines(view::history(controller.history(), None)),
        Command::Show(position) => print_lines(view::show(controller.history(), position)),
        Command::Invalid(message) => println!("{}", view::warning(&message)),
        Command::Query(input) => {
            if !input.trim().is_empty() {
                println!("{}", "Searching...".bright_black());
            }

            match controller.submit(&input).await {
                InteractionResult::Answered(exchange) => {
                    print_lines(view::exchange(&exchange));
                    println!("{}", view::history_count(controller.history()));
                }
                InteractionResult::Warning(err) | InteractionResult::Failed(err) => {
                    println!("{}", view::error(&err));
                }
            }
        }
    }
}

/// Entry point for the Seek REPL.
///
/// Each line is handled to completion before the next prompt, so at most one
/// query is ever in flight and the history is appended in submission order.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // ===== Backend Initialization =====
    let config = resolve_config(&cli)?;
    let backend = HttpAnswerBackend::new(&config)?;
    let query_url = backend.query_url().to_string();
    info!(url = %query_url, timeout_secs = config.request_timeout_secs, "backend configured");
    let mut controller = QueryController::new(Arc::new(backend));

    // ===== REPL Setup =====
    let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CliHelper));

    print_lines(view::banner(&query_url));
    println!();

    // ===== Main REPL Loop =====
    loop {
        match rl.readline("Enter your query: ") {
            Ok(line) => {
                let command = Command::parse(&line);
                if command == Command::Quit {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                dispatch(&mut controller, command).await;
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
