//! Line-editor integration for slash commands.

use std::borrow::Cow;

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::{completions, unique_suffix};

/// Completes, hints and colours `/` commands; plain queries pass through.
#[derive(Clone, Copy, Default)]
pub struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = completions(&line[..pos])
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        // Only hint at the end of the line.
        if pos < line.len() {
            return None;
        }
        unique_suffix(line).map(str::to_string)
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Cow::Borrowed(line);
        }
        // Colour the command name, leave its argument plain.
        let split = line.find(char::is_whitespace).unwrap_or(line.len());
        let (name, rest) = line.split_at(split);
        Cow::Owned(format!("{}{}", name.bright_cyan(), rest))
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::DefaultHistory;

    #[test]
    fn test_complete_slash_prefix() {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        let (start, candidates) = CliHelper.complete("/h", 2, &ctx).unwrap();
        let names: Vec<&str> = candidates.iter().map(|c| c.replacement.as_str()).collect();

        assert_eq!(start, 0);
        assert_eq!(names, vec!["/help", "/history"]);
    }

    #[test]
    fn test_hint_only_at_end_of_line() {
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);

        assert_eq!(CliHelper.hint("/sh", 3, &ctx), Some("ow".to_string()));
        assert_eq!(CliHelper.hint("/sh", 1, &ctx), None);
        assert_eq!(CliHelper.hint("what is", 7, &ctx), None);
    }

    #[test]
    fn test_highlight_leaves_queries_untouched() {
        assert!(matches!(
            CliHelper.highlight("what is rag", 0),
            Cow::Borrowed("what is rag")
        ));
        assert!(CliHelper.highlight("/show 2", 0).ends_with(" 2"));
    }
}
