//! Rendering of the query view.
//!
//! Every function returns the lines to print instead of printing them, so
//! re-rendering is free of side effects on the session.

use colored::Colorize;
use seek_core::{Exchange, SeekError, SessionHistory};

pub const TITLE: &str = "LLM-based RAG Search";

/// Title and connection line shown once at startup.
pub fn banner(query_url: &str) -> Vec<String> {
    vec![
        format!("=== {} ===", TITLE).bright_magenta().bold().to_string(),
        format!("Backend: {}", query_url).bright_black().to_string(),
        "Type a question and press Enter, '/help' for commands, or 'quit' to exit."
            .bright_black()
            .to_string(),
    ]
}

pub fn help() -> Vec<String> {
    [
        "Enter your query to retrieve an answer from the RAG system.",
        "Ensure your backend is running for proper results.",
        "",
        "  /history    list previous queries",
        "  /show <n>   expand the answer to query <n>",
        "  /help       show this message",
        "  quit        end the session",
    ]
    .iter()
    .map(|line| line.bright_black().to_string())
    .collect()
}

/// The query and its answer as two distinct messages.
///
/// The answer always gets at least one line, even when it is empty.
pub fn exchange(exchange: &Exchange) -> Vec<String> {
    let mut lines = vec![format!("> {}", exchange.query()).green().to_string()];
    lines.extend(answer_lines(exchange.answer(), ""));
    lines.push(String::new());
    lines
}

fn answer_lines(answer: &str, indent: &str) -> Vec<String> {
    if answer.trim().is_empty() {
        return vec![format!("{}(empty answer)", indent).bright_blue().italic().to_string()];
    }
    answer
        .lines()
        .map(|line| format!("{}{}", indent, line).bright_blue().to_string())
        .collect()
}

pub fn history_count(history: &SessionHistory) -> String {
    format!("History: {} queries", history.len())
        .bright_black()
        .to_string()
}

/// Inline message for a submission that produced no exchange.
pub fn error(err: &SeekError) -> String {
    if err.is_validation() {
        err.to_string().yellow().to_string()
    } else {
        err.to_string().red().to_string()
    }
}

pub fn warning(message: &str) -> String {
    message.yellow().to_string()
}

/// The history as a collapsible list.
///
/// Entries are labelled `Query <n>: <query>` in insertion order; only the
/// entry at the 1-based `expanded` position shows its answer.
pub fn history(history: &SessionHistory, expanded: Option<usize>) -> Vec<String> {
    let mut lines = vec![
        format!("Query History ({})", history.len())
            .bright_yellow()
            .to_string(),
    ];

    if history.is_empty() {
        lines.push("No queries yet.".bright_black().to_string());
        return lines;
    }

    for (index, entry) in history.iter().enumerate() {
        let position = index + 1;
        let is_expanded = expanded == Some(position);
        let marker = if is_expanded { "v" } else { ">" };

        lines.push(format!("{} Query {}: {}", marker, position, entry.query()));
        if is_expanded {
            lines.extend(answer_lines(entry.answer(), "    "));
        }
    }
    lines
}

/// The history with one entry expanded, or a warning if there is no such entry.
pub fn show(history_state: &SessionHistory, position: usize) -> Vec<String> {
    if history_state.get(position).is_some() {
        history(history_state, Some(position))
    } else {
        vec![warning(&format!(
            "No query {} in history ({} recorded).",
            position,
            history_state.len()
        ))]
    }
}
