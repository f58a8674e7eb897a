//! Command-line driver for the rulex tokenizer.
//!
//! Loads one rule file, lexes it with the rule punctuation table and prints
//! every token with its location. The `rulex` binary is a thin wrapper over
//! [`parse_args`] and [`run`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use std::io::{self, Write};
use std::sync::Once;

use rulex_lexer_core::{LoadError, Lexer, SourceBuffer};
use tracing::debug;

mod options;
mod render;

pub use options::{parse_args, ArgsError, Command, DriverOptions, DEFAULT_PATH, USAGE};
pub use render::{render_tokens, Summary};

/// Failure of a driver run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("could not write output: {0}")]
    Output(#[from] io::Error),
}

/// Load `options.path`, print its tokens and the summary line to `out`.
pub fn run<W: Write>(options: &DriverOptions, out: &mut W) -> Result<Summary, DriverError> {
    let mut source = SourceBuffer::default();
    source.load_file(&options.path)?;

    let config = options.lexer_config();
    debug!(path = %options.path.display(), policy = ?options.policy, "lexing");

    let file = options.path.to_string_lossy();
    let summary = render_tokens(Lexer::new(&config, &file, &source), out)?;
    writeln!(out, "{summary}")?;
    Ok(summary)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=rulex_lexer_core=trace`
/// or `RUST_LOG=rulexc=debug`. Events go to stderr so they never interleave
/// with the token listing.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
