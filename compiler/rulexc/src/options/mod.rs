//! Command-line options.
//!
//! Arguments are parsed by hand: the driver takes one optional path and a
//! single flag.

use std::path::PathBuf;

use rulex_lexer_core::{LexerConfig, MatchPolicy};

/// File lexed when no path is given.
pub const DEFAULT_PATH: &str = "rules.lex";

pub const USAGE: &str = "\
Usage: rulex [options] [file]

Tokenize a rule file (default: rules.lex) and print one line per token.

Options:
  --longest-match    Prefer the longest matching punctuation literal
  -h, --help         Show this help
";

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Lex(DriverOptions),
    Help,
}

/// Invalid command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}' (only one file can be lexed)")]
    UnexpectedArgument(String),
}

/// Settings for one driver run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverOptions {
    pub path: PathBuf,
    pub policy: MatchPolicy,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            policy: MatchPolicy::FirstInTable,
        }
    }
}

impl DriverOptions {
    /// Rule punctuation with this run's match policy.
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig::default().with_policy(self.policy)
    }
}

/// Parse arguments, not including the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = DriverOptions::default();
    let mut path: Option<PathBuf> = None;

    for arg in args {
        let arg = arg.as_ref();
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "--longest-match" {
            options.policy = MatchPolicy::Longest;
        } else if arg.starts_with('-') {
            return Err(ArgsError::UnknownOption(arg.to_owned()));
        } else if path.is_some() {
            return Err(ArgsError::UnexpectedArgument(arg.to_owned()));
        } else {
            path = Some(PathBuf::from(arg));
        }
    }

    if let Some(path) = path {
        options.path = path;
    }
    Ok(Command::Lex(options))
}
