//! Input line parsing.
//!
//! # Responsibility
//! - Map one line of user input onto a board intent.
//!
//! # Invariants
//! - Bare text adds a task; only recognized keywords dispatch elsewhere.
//! - Parsing never panics on malformed input.

use std::fmt::{Display, Formatter};

/// One user intent captured from the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Create a task from the given raw text.
    Add(String),
    /// Toggle the task at the given display ordinal (1-based).
    Toggle(usize),
    /// Delete the task at the given display ordinal (1-based).
    Delete(usize),
    /// Redraw the board.
    List,
    /// Show command usage.
    Help,
    /// End the session.
    Quit,
}

/// Why a line did not parse into an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    /// Blank line; callers skip it silently.
    EmptyLine,
    /// Command requires a task number, e.g. `done 2`.
    MissingOrdinal(&'static str),
    /// Task number was present but not a positive integer.
    InvalidOrdinal(String),
}

impl Display for IntentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "empty input"),
            Self::MissingOrdinal(command) => {
                write!(f, "`{command}` needs a task number, e.g. `{command} 2`")
            }
            Self::InvalidOrdinal(value) => write!(f, "`{value}` is not a task number"),
        }
    }
}

/// Parses one input line.
///
/// Unrecognized words are treated as task text, matching a plain text-entry
/// form where everything submitted becomes a task. The explicit `add` prefix
/// exists so text starting with a keyword can still be added.
pub fn parse_intent(line: &str) -> Result<Intent, IntentError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(IntentError::EmptyLine);
    }

    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head {
        "quit" | "exit" if rest.is_empty() => Ok(Intent::Quit),
        "help" if rest.is_empty() => Ok(Intent::Help),
        "list" if rest.is_empty() => Ok(Intent::List),
        "add" => {
            if rest.is_empty() {
                Err(IntentError::EmptyLine)
            } else {
                Ok(Intent::Add(rest.to_string()))
            }
        }
        "done" => parse_ordinal("done", rest).map(Intent::Toggle),
        "rm" => parse_ordinal("rm", rest).map(Intent::Delete),
        _ => Ok(Intent::Add(trimmed.to_string())),
    }
}

fn parse_ordinal(command: &'static str, rest: &str) -> Result<usize, IntentError> {
    if rest.is_empty() {
        return Err(IntentError::MissingOrdinal(command));
    }
    match rest.parse::<usize>() {
        Ok(ordinal) if ordinal > 0 => Ok(ordinal),
        _ => Err(IntentError::InvalidOrdinal(rest.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_intent, Intent, IntentError};

    #[test]
    fn bare_text_adds_a_task() {
        assert_eq!(
            parse_intent("water the plants"),
            Ok(Intent::Add("water the plants".to_string()))
        );
    }

    #[test]
    fn add_prefix_allows_keyword_text() {
        assert_eq!(
            parse_intent("add quit smoking"),
            Ok(Intent::Add("quit smoking".to_string()))
        );
    }

    #[test]
    fn blank_lines_are_rejected_silently() {
        assert_eq!(parse_intent(""), Err(IntentError::EmptyLine));
        assert_eq!(parse_intent("   "), Err(IntentError::EmptyLine));
        assert_eq!(parse_intent("add   "), Err(IntentError::EmptyLine));
    }

    #[test]
    fn done_and_rm_take_one_based_ordinals() {
        assert_eq!(parse_intent("done 2"), Ok(Intent::Toggle(2)));
        assert_eq!(parse_intent("rm 1"), Ok(Intent::Delete(1)));
    }

    #[test]
    fn ordinal_commands_reject_missing_or_bad_numbers() {
        assert_eq!(parse_intent("done"), Err(IntentError::MissingOrdinal("done")));
        assert_eq!(
            parse_intent("rm zero"),
            Err(IntentError::InvalidOrdinal("zero".to_string()))
        );
        assert_eq!(
            parse_intent("done 0"),
            Err(IntentError::InvalidOrdinal("0".to_string()))
        );
    }

    #[test]
    fn session_keywords_parse_without_arguments() {
        assert_eq!(parse_intent("quit"), Ok(Intent::Quit));
        assert_eq!(parse_intent("exit"), Ok(Intent::Quit));
        assert_eq!(parse_intent("help"), Ok(Intent::Help));
        assert_eq!(parse_intent("list"), Ok(Intent::List));
    }

    #[test]
    fn keywords_with_trailing_text_become_tasks() {
        assert_eq!(
            parse_intent("list the groceries"),
            Ok(Intent::Add("list the groceries".to_string()))
        );
    }
}
