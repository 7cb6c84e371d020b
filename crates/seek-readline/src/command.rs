//! Parsing of REPL input lines.

/// Slash commands offered for completion and hints.
pub const SLASH_COMMANDS: &[&str] = &["/help", "/history", "/show"];

/// Slash commands that extend `prefix`, or nothing once an argument is typed.
pub fn completions(prefix: &str) -> Vec<&'static str> {
    if !prefix.starts_with('/') || prefix.contains(char::is_whitespace) {
        return Vec::new();
    }
    SLASH_COMMANDS
        .iter()
        .copied()
        .filter(|cmd| cmd.starts_with(prefix))
        .collect()
}

/// The rest of the command name when `prefix` picks out exactly one.
pub fn unique_suffix(prefix: &str) -> Option<&'static str> {
    match completions(prefix).as_slice() {
        &[only] if only.len() > prefix.len() => Some(&only[prefix.len()..]),
        _ => None,
    }
}

/// What a line typed at the prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session.
    Quit,
    /// Print usage hints.
    Help,
    /// List the history with every entry collapsed.
    History,
    /// List the history with the given 1-based entry expanded.
    Show(usize),
    /// A slash command that could not be understood.
    Invalid(String),
    /// Anything else is submitted as a query, including blank lines.
    Query(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();

        match trimmed {
            "quit" | "exit" => return Self::Quit,
            "/help" => return Self::Help,
            "/history" => return Self::History,
            _ => {}
        }

        if let Some(rest) = trimmed.strip_prefix("/show") {
            return match rest.trim().parse::<usize>() {
                Ok(position) if position > 0 => Self::Show(position),
                _ => Self::Invalid("Usage: /show <number>".to_string()),
            };
        }

        if trimmed.starts_with('/') {
            let name = trimmed.split_whitespace().next().unwrap_or(trimmed);
            return Self::Invalid(format!("Unknown command: {}", name));
        }

        Self::Query(line.to_string())
    }
}
